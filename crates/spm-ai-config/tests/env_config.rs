use spm_ai_config::{ConfigError, ServerConfig};
use std::env;

// Kept as a single test: the process environment is shared between test threads.
#[test]
fn server_config_reads_process_environment() {
    env::remove_var("HOST");
    env::remove_var("PORT");
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.addr(), "0.0.0.0:8000");

    env::set_var("HOST", "127.0.0.1");
    env::set_var("PORT", "9100");
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9100);

    env::set_var("PORT", "not-a-port");
    let err = ServerConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("not-a-port".to_string()));

    env::remove_var("HOST");
    env::remove_var("PORT");
}
