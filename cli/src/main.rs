use clap::Parser;
use cyoa_cli::commands::{address, artefacts, cli, env, log, stats};
use cyoa_core::api::{rebuild_cmd, AppConfig, CliError, ErrorCode, RebuildArgs, StoreError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, CliError> {
    let args = cli::Args::parse();
    let mut cfg = cyoa_core::api::load_default().map_err(|e| CliError::Config(e.to_string()))?;
    init_tracing(&cfg.logging).map_err(CliError::Config)?;

    if let Some(path) = args.event_log.clone() {
        cfg.event_log.path = path;
    }
    tracing::debug!(event_log = %cfg.event_log.path, "config loaded");

    dispatch(args.command, &cfg).await
}

fn exit_code_for_error(e: &CliError) -> i32 {
    // 0: success
    // 11: config error
    // 20: IO / environment error
    // 30: malformed run log or journal
    // 31: missing reference record
    // 50: internal/uncategorized
    let code = match e {
        CliError::Config(_) => ErrorCode::ConfigError,
        CliError::Stats(se) => se.error_code(),
        CliError::Store(StoreError::Load(se)) => se.error_code(),
        CliError::Store(_) => ErrorCode::IoError,
        CliError::Logger(_) => ErrorCode::IoError,
        CliError::Env(_) => ErrorCode::IoError,
        CliError::Io(_) => ErrorCode::IoError,
        CliError::Artefacts(_) => ErrorCode::IoError,
        CliError::EntityId(_) => ErrorCode::General,
        CliError::Command(_) => ErrorCode::General,
        CliError::Anyhow(_) => ErrorCode::General,
    };
    code.as_i32()
}

async fn dispatch(cmd: cli::Commands, cfg: &AppConfig) -> Result<i32, CliError> {
    match cmd {
        cli::Commands::Stats(stats_args) => {
            println!("{}", stats::run_stats(cfg, &stats_args).await?);
        }
        cli::Commands::Rebuild(rebuild_args) => {
            let core_args = RebuildArgs {
                journal: rebuild_args
                    .journal
                    .unwrap_or_else(|| cfg.events_out.path.clone()),
                out: rebuild_args
                    .out
                    .unwrap_or_else(|| cfg.event_log.path.clone()),
            };
            let replay = rebuild_cmd(&core_args).await?;
            println!(
                "rebuilt {} scripts from {} events ({} runs, {} lines skipped)",
                replay.log.len(),
                replay.applied,
                replay.run_ids.len(),
                replay.skipped
            );
        }
        cli::Commands::Log(log_args) => log::run_log(cfg, &log_args).await?,
        cli::Commands::Env(env_cmd) => println!("{}", env::run_env(cfg, &env_cmd)?),
        cli::Commands::Address(address_args) => {
            println!("{}", address::run_address(&address_args)?)
        }
        cli::Commands::Artefacts(artefacts_cmd) => {
            println!("{}", artefacts::run_artefacts(&artefacts_cmd)?)
        }
    }
    Ok(0)
}

fn init_tracing(logging: &cyoa_core::api::LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(logging.level.clone()).map_err(|e| e.to_string())?,
    };

    let mut maybe_writer = None;

    if logging.file {
        let dir = match logging
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(d) => std::path::PathBuf::from(d),
            None => std::env::temp_dir().join("cyoa"),
        };

        std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;
        let file_name = format!("cyoa.{}.log", std::process::id());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    if !logging.console && maybe_writer.is_none() {
        return Err("logging disabled for both console and file".to_string());
    }

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}
