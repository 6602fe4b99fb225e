use config::{Environment, Map};
use sitehub_domain::capability::CapabilitySet;
use sitehub_domain::config::AppConfig;
use sitehub_kernel::config::{ConfigError, load_config, load_config_with};
use std::fs;
use tempfile::tempdir;

/// Builds the same environment source [`load_config`] uses, backed by an
/// in-memory map instead of real process variables.
fn sitehub_env(vars: &[(&str, &str)]) -> Environment {
    let mut map = Map::new();
    for (key, value) in vars {
        map.insert((*key).to_owned(), (*value).to_owned());
    }
    Environment::with_prefix("SITEHUB")
        .separator("__")
        .convert_case(config::Case::Snake)
        .source(Some(map))
}

#[test]
fn file_values_are_loaded() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(&path, "[server]\naddress = \"127.0.0.1\"\nport = 9000\n")?;

    let cfg: AppConfig = load_config(Some(&path))?;

    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.server.address.to_string(), "127.0.0.1");
    // Sections absent from the file keep their defaults.
    assert_eq!(cfg.registry.capability_set(), CapabilitySet::ALL);

    Ok(())
}

#[test]
fn env_layer_overrides_file_values() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(&path, "[server]\nport = 9000\n\n[registry]\ncapabilities = [\"forms\"]\n")?;

    let env = sitehub_env(&[("SITEHUB__SERVER__PORT", "9100")]);
    let cfg: AppConfig = load_config_with(Some(&path), env)?;

    assert_eq!(cfg.server.port, 9100, "environment layer wins over the file");
    // Untouched keys still come from the file.
    assert_eq!(cfg.registry.capability_set(), CapabilitySet::FORMS);

    Ok(())
}

#[test]
fn missing_config_file_fails() {
    let err = load_config::<AppConfig>(Some("no-such-config-file"))
        .expect_err("missing file must fail");
    assert!(matches!(err, ConfigError::Config { .. }));
}
