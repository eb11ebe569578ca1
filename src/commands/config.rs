use crate::config::{self, Config};
use anyhow::{Context, Result};
use serde_json::Value;

pub fn list(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    // Dot notation: "output.format"
    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .context(format!("Key not found: {}", part))?;
    }

    match current {
        Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }

    Ok(())
}

pub fn set(key: &str, value: &str) -> Result<()> {
    let path = config::config_path()?;
    let current = if path.exists() {
        config::load_from_path(&path)?
    } else {
        Config::default()
    };

    let updated = apply(&current, key, value)?;
    config::save_to_path(&updated, &path)?;

    println!("✓ Set {} = {}", key, value);
    Ok(())
}

/// Return a copy of `config` with the dotted `key` replaced by `value`.
pub fn apply(config: &Config, key: &str, value: &str) -> Result<Config> {
    let mut tree = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut node = &mut tree;
    for part in key.split('.') {
        node = node
            .get_mut(part)
            .context(format!("Key not found: {}", part))?;
    }

    let new_value = match node {
        Value::Bool(_) => Value::Bool(
            value
                .parse()
                .context(format!("Expected true or false for {}", key))?,
        ),
        Value::Object(_) => anyhow::bail!("'{}' is a section, not a value", key),
        _ => Value::String(value.to_string()),
    };
    *node = new_value;

    let updated: Config =
        serde_json::from_value(tree).context(format!("Invalid value '{}' for {}", value, key))?;
    updated.validate()?;
    Ok(updated)
}
