use cyoa_core::api::{start_events_out, AppConfig, CliError, LoggerOptions, ScriptLogger};

use super::cli::{LogArgs, LogEvent};

#[tracing::instrument(name = "cli.log", skip(cfg, args), fields(script_id = %args.script_id))]
pub async fn run_log(cfg: &AppConfig, args: &LogArgs) -> Result<(), CliError> {
    let events_out = start_events_out(&cfg.events_out).await?;

    let mut opts = LoggerOptions::from_config(
        cfg,
        args.script_id.clone(),
        args.category.into(),
        events_out.as_ref().map(|o| o.sender()),
    );
    opts.ansi = atty::is(atty::Stream::Stdout);
    let mut logger = ScriptLogger::new(opts);

    let result = match args.event {
        LogEvent::Start => logger.log_start(&args.message).await,
        LogEvent::Complete => logger.log_complete(&args.message).await,
        LogEvent::Error => logger.log_error(&args.message).await,
        LogEvent::Section if args.wait => {
            logger
                .log_section_with_wait_prompt(&args.message)
                .await
        }
        LogEvent::Section => {
            logger.log_section(&args.message).await;
            Ok(())
        }
        LogEvent::Reminder => {
            logger.log_reminder(&args.message).await;
            Ok(())
        }
    };
    drop(logger);

    if let Some(out) = events_out {
        let dropped = out.finish().await;
        if dropped > 0 {
            tracing::warn!(dropped, "journal lines dropped");
        }
    }

    result.map_err(CliError::from)
}
