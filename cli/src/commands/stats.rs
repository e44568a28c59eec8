use cyoa_core::api::{format_text, summarize_file, AppConfig, CliError};

use super::cli::{OutputFormat, StatsArgs};

pub async fn run_stats(cfg: &AppConfig, args: &StatsArgs) -> Result<String, CliError> {
    let path = args.log.as_deref().unwrap_or(cfg.event_log.path.as_str());
    let summary = summarize_file(path).await?;
    match summary.first_task_name() {
        Ok(name) => tracing::debug!(first_task = name, "first completed task"),
        Err(e) => tracing::info!(outcome = %e, "no task has completed yet"),
    }
    let rendered = match args.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&summary).map_err(|e| CliError::Command(e.to_string()))?
        }
        OutputFormat::Text => format_text(&summary),
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_json_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logger.json");
        std::fs::write(
            &path,
            r#"{"taskB": {"scriptCategory": "task", "firstStart": 50, "lastError": 90}}"#,
        )
        .unwrap();

        let mut cfg = AppConfig::default();
        cfg.event_log.path = path.to_string_lossy().to_string();

        let out = run_stats(
            &cfg,
            &StatsArgs {
                log: None,
                format: OutputFormat::Json,
            },
        )
        .await
        .unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["hasCompletedFirstTask"], false);
        assert!(v["firstTaskName"].is_null());
        assert_eq!(v["incompleteAttemptedTaskDurations"][0]["duration"], 40);
    }

    #[tokio::test]
    async fn log_flag_overrides_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("other.json");
        std::fs::write(
            &path,
            r#"{
                "init": {"scriptCategory": "setup", "firstStart": 0, "firstComplete": 5, "countComplete": 1},
                "tokenHts": {"scriptCategory": "task", "firstStart": 10, "firstComplete": 40, "countComplete": 1}
            }"#,
        )
        .unwrap();

        let mut cfg = AppConfig::default();
        cfg.event_log.path = dir.path().join("missing.json").to_string_lossy().to_string();

        let out = run_stats(
            &cfg,
            &StatsArgs {
                log: Some(path.to_string_lossy().to_string()),
                format: OutputFormat::Json,
            },
        )
        .await
        .unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["firstTaskName"], "tokenHts");
        assert_eq!(v["timeToHelloWorld"], 40);
    }
}
