//! Constants shared by the generator and the request layer
//!
//! Collected here so the numbers that shape generated payloads live in one place.

/// Value ranges used when producing primitives
pub mod primitives {
    /// Inclusive integer range for leaves at the depth limit
    pub const LEAF_INT_RANGE: (i64, i64) = (1, 100);

    /// Inclusive string length range for leaves at the depth limit
    pub const LEAF_TEXT_LEN: (i64, i64) = (5, 12);

    /// Inclusive integer range for primitives above the depth limit
    pub const INNER_INT_RANGE: (i64, i64) = (1, 1000);

    /// Inclusive string length range for primitives above the depth limit
    pub const INNER_TEXT_LEN: (i64, i64) = (8, 16);

    /// Draws below this threshold become integers
    pub const INTEGER_THRESHOLD: f64 = 0.5;

    /// Draws below this threshold (and above the integer one) become strings
    pub const TEXT_THRESHOLD: f64 = 0.8;

    /// Longest string a UUID-derived source can produce
    pub const MAX_TEXT_LEN: usize = 32;
}

/// Object key pool
pub mod keys {
    /// Fixed candidate keys; a positional `prop_<i>` name is the sixth candidate
    pub const FIXED_KEYS: [&str; 5] = ["id", "name", "value", "details", "status"];

    /// Prefix of the positional fallback key
    pub const POSITIONAL_PREFIX: &str = "prop_";
}

/// Defaults for generation limits and request parameters
pub mod defaults {
    /// Upper bound on object properties and nested array elements
    pub const MAX_COLLECTION_SIZE: usize = 5;

    /// Upper bound on the number of top-level elements per response
    pub const MAX_ARRAY_SIZE: usize = 1000;

    /// Upper bound on requested nesting depth
    pub const MAX_DEPTH_LIMIT: u32 = 5;

    /// Top-level element count used when the request omits or garbles `size`
    pub const REQUEST_SIZE: i64 = 10;

    /// Depth used when the request omits or garbles `maxDepth`
    pub const REQUEST_MAX_DEPTH: i64 = 3;
}
