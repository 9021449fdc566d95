use serial_test::serial;

use quill_server::models::config::{ConfigError, DEFAULT_BASE_URL, DEFAULT_MODEL, QuillConfig};

const VARS: [&str; 5] = [
    "GROQ_API_KEY",
    "PORT",
    "CLIENT_URL",
    "QUILL_BASE_URL",
    "QUILL_MODEL",
];

fn clear_vars() {
    for var in VARS {
        // Tests touching the environment are serialized.
        unsafe { std::env::remove_var(var) };
    }
}

#[test]
#[serial]
fn env_defaults() -> Result<(), Box<dyn std::error::Error>> {
    clear_vars();
    unsafe { std::env::set_var("GROQ_API_KEY", "gsk_test") };

    let config = QuillConfig::from_env()?;
    assert_eq!(config.server.bind_addr, "0.0.0.0:5000");
    assert_eq!(config.server.allowed_origin, "http://localhost:5173");
    assert_eq!(config.generation.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.generation.headers["Authorization"], "Bearer gsk_test");
    assert_eq!(config.generation.json["model"], DEFAULT_MODEL);
    clear_vars();
    Ok(())
}

#[test]
#[serial]
fn env_overrides() -> Result<(), Box<dyn std::error::Error>> {
    clear_vars();
    unsafe {
        std::env::set_var("GROQ_API_KEY", "gsk_test");
        std::env::set_var("PORT", "8080");
        std::env::set_var("CLIENT_URL", "https://notes.example.com");
    }

    let config = QuillConfig::from_env()?;
    assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
    assert_eq!(config.server.allowed_origin, "https://notes.example.com");

    unsafe { std::env::set_var("PORT", "not-a-port") };
    assert!(matches!(
        QuillConfig::from_env(),
        Err(ConfigError::InvalidPort(_))
    ));
    clear_vars();
    Ok(())
}

#[test]
#[serial]
fn missing_api_key() {
    clear_vars();
    assert!(matches!(
        QuillConfig::from_env(),
        Err(ConfigError::MissingApiKey)
    ));
}

#[test]
#[serial]
fn config_file_expands_env() -> Result<(), Box<dyn std::error::Error>> {
    clear_vars();
    unsafe { std::env::set_var("GROQ_API_KEY", "gsk_from_env") };

    let raw = r#"{
        "server": {"bind_addr": "127.0.0.1:5001"},
        "generation": {
            "base_url": "http://localhost:11434/v1",
            "headers": {"Authorization": "Bearer ${GROQ_API_KEY}"},
            "json": {"model": "llama3.2", "temperature": 0.7}
        }
    }"#;
    let config = QuillConfig::from_template(raw)?;
    assert_eq!(config.server.bind_addr, "127.0.0.1:5001");
    assert_eq!(config.server.allowed_origin, "http://localhost:5173");
    assert_eq!(
        config.generation.headers["Authorization"],
        "Bearer gsk_from_env"
    );
    assert_eq!(config.generation.json["temperature"], 0.7);
    clear_vars();
    Ok(())
}
