//! `.env` loading end to end
//!
//! Lives in its own test binary because it writes to the process environment.

use jumble_api::config::ServiceConfig;

#[test]
fn test_dotenv_values_reach_service_config() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(".env");
    std::fs::write(&path, "MAX_COLLECTION_SIZE=2\nMAX_ARRAY_SIZE=50\n").expect("Failed to write .env");

    dotenvy::from_path(&path).expect("Failed to load .env");
    let config = ServiceConfig::from_env();

    assert_eq!(config.generation.max_collection_size(), 2);
    assert_eq!(config.generation.max_array_size(), 50);
    assert_eq!(config.generation.max_depth_limit(), 5);
}
