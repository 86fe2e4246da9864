use std::collections::HashMap;
use std::path::Path;

use figment::providers::{Format, Yaml};
use figment::Figment;
use mealstash::config::{Config, ConfigV1};

/// Parse a ConfigV1 from an inline YAML document.
pub fn parse_config(yaml: &str) -> ConfigV1 {
    let config: Config = Figment::new()
        .merge(Yaml::string(yaml))
        .extract()
        .expect("Failed to parse test config YAML");

    match config {
        Config::ConfigV1(cfg) => cfg,
    }
}

/// A config using file-backed session storage at `path`.
pub fn file_config(path: &Path) -> ConfigV1 {
    parse_config(&format!(
        r#"
version: "1.0.0"
logging:
  level: "debug"
  format: "json"
storage:
  enabled: true
  type: "file"
  path: "{}"
"#,
        path.display()
    ))
}

/// A config with session storage disabled, so sessions stay in memory.
pub fn memory_config() -> ConfigV1 {
    parse_config(
        r#"
version: "1.0.0"
logging:
  level: "debug"
  format: "json"
storage:
  enabled: false
"#,
    )
}

/// Seed a storage file the way a previous run would have left it.
pub fn seed_session(path: &Path, token: Option<&str>, user_json: Option<&str>) {
    let mut entries = HashMap::new();
    if let Some(token) = token {
        entries.insert("token".to_string(), token.to_string());
    }
    if let Some(user) = user_json {
        entries.insert("user".to_string(), user.to_string());
    }

    let contents = serde_json::to_string_pretty(&entries).expect("serialize seed entries");
    std::fs::write(path, contents).expect("write seed storage file");
}

/// Read the raw entries out of a storage file.
pub fn read_entries(path: &Path) -> HashMap<String, String> {
    let contents = std::fs::read_to_string(path).expect("read storage file");
    serde_json::from_str(&contents).expect("parse storage file")
}
