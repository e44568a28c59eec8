use std::path::{Path, PathBuf};

use super::types::AppConfig;

/// Per-user data directory: ~/.cyoa
pub fn get_cyoa_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".cyoa"))
}

pub fn load_from_str(s: &str) -> anyhow::Result<AppConfig> {
    Ok(toml::from_str::<AppConfig>(s)?)
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.cyoa/config.toml
    let user_config = get_cyoa_data_dir()?.join("config.toml");

    // Priority 2: ./config.toml
    let local_config = Path::new("config.toml");

    let mut cfg = if user_config.exists() {
        load_from_str(&std::fs::read_to_string(&user_config)?)?
    } else if local_config.exists() {
        load_from_str(&std::fs::read_to_string(local_config)?)?
    } else {
        AppConfig::default()
    };

    if cfg.logging.file
        && cfg
            .logging
            .directory
            .as_deref()
            .map(|s| s.trim().is_empty())
            .unwrap_or(true)
    {
        let logs_dir = get_cyoa_data_dir()?.join("logs");
        std::fs::create_dir_all(&logs_dir)?;
        cfg.logging.directory = Some(logs_dir.to_string_lossy().to_string());
    }

    apply_env_overrides(&mut cfg, |k| std::env::var(k).ok());
    Ok(cfg)
}

fn apply_env_overrides(cfg: &mut AppConfig, var: impl Fn(&str) -> Option<String>) {
    let non_empty = |k: &str| var(k).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("CYOA_EVENT_LOG") {
        cfg.event_log.path = v;
    }
    if let Some(v) = non_empty("CYOA_EVENTS_OUT") {
        if v.eq_ignore_ascii_case("off") {
            cfg.events_out.enabled = false;
        } else {
            cfg.events_out.path = v;
        }
    }
    if let Some(v) = non_empty("CYOA_ENV_FILE") {
        cfg.env_file = v;
    }
    if let Some(v) = non_empty("CYOA_NO_WAIT") {
        cfg.prompts.wait = !matches!(v.trim(), "1" | "true" | "TRUE" | "yes");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = load_from_str(
            r#"
            [event_log]
            path = "/tmp/run/logger.json"

            [prompts]
            wait = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.event_log.path, "/tmp/run/logger.json");
        assert!(!cfg.prompts.wait);
        assert_eq!(cfg.env_file, "../.env");
        assert_eq!(cfg.events_out.path, "../logger.events.jsonl");
        assert_eq!(cfg.logging.level, "warn");
    }

    #[test]
    fn env_overrides_win() {
        let vars: HashMap<&str, &str> = [
            ("CYOA_EVENT_LOG", "custom.json"),
            ("CYOA_EVENTS_OUT", "off"),
            ("CYOA_ENV_FILE", " "),
            ("CYOA_NO_WAIT", "1"),
        ]
        .into_iter()
        .collect();

        let mut cfg = AppConfig::default();
        apply_env_overrides(&mut cfg, |k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(cfg.event_log.path, "custom.json");
        assert!(!cfg.events_out.enabled);
        assert_eq!(cfg.env_file, "../.env");
        assert!(!cfg.prompts.wait);
    }
}
