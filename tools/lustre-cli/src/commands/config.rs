//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, StorageBackend};
use crate::context::{find_config_file, Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Path => config_path(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("[storage]");
    ctx.output.kv("backend", ctx.config.storage.backend.as_str());
    ctx.output.kv("data_dir", &ctx.config.storage.data_dir);
    if ctx.config.storage.backend == StorageBackend::File {
        ctx.output.kv(
            "resolved",
            &ctx.resolve_path(&ctx.config.storage.data_dir).display().to_string(),
        );
        let keys = ctx.stored_keys()?;
        let stored = if keys.is_empty() { "(nothing yet)".to_string() } else { keys.join(", ") };
        ctx.output.kv("stored", &stored);
    }

    ctx.output.blank();
    ctx.output.info("[checkout]");
    ctx.output.kv("delay_ms", &ctx.config.checkout.delay_ms.to_string());

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(path) = find_config_file(&ctx.cwd) else {
        bail!("No config file found. Run `lustre config init` to create one.");
    };
    let path = path.to_string_lossy().to_string();

    let mut config = CliConfig::load(&path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn config_path(ctx: &Context) -> Result<()> {
    let path = find_config_file(&ctx.cwd);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "path": path }));
        return Ok(());
    }

    match path {
        Some(path) => println!("{}", path.display()),
        None => ctx.output.info("No config file found; using defaults."),
    }

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["storage", "backend"] => Ok(config.storage.backend.as_str().to_string()),
        ["storage", "data_dir"] => Ok(config.storage.data_dir.clone()),
        ["checkout", "delay_ms"] => Ok(config.checkout.delay_ms.to_string()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["storage", "backend"] => {
            config.storage.backend = match value {
                "file" => StorageBackend::File,
                "memory" => StorageBackend::Memory,
                other => bail!("Unknown storage backend: {} (expected file or memory)", other),
            }
        }
        ["storage", "data_dir"] => config.storage.data_dir = value.to_string(),
        ["checkout", "delay_ms"] => {
            config.checkout.delay_ms = value
                .parse()
                .with_context(|| format!("delay_ms must be a whole number, got {}", value))?
        }
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_values() {
        let mut config = CliConfig::default();
        set_config_value(&mut config, "storage.backend", "memory").unwrap();
        set_config_value(&mut config, "checkout.delay_ms", "250").unwrap();

        assert_eq!(get_config_value(&config, "storage.backend").unwrap(), "memory");
        assert_eq!(get_config_value(&config, "checkout.delay_ms").unwrap(), "250");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = CliConfig::default();
        assert!(set_config_value(&mut config, "storage.backend", "redis").is_err());
        assert!(set_config_value(&mut config, "checkout.delay_ms", "soon").is_err());
        assert!(get_config_value(&config, "deploy.canary").is_err());
    }
}
