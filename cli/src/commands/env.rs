use cyoa_core::api::{AppConfig, CliError, ScriptEnv};

use super::cli::EnvCommand;

pub fn run_env(cfg: &AppConfig, cmd: &EnvCommand) -> Result<String, CliError> {
    match cmd {
        EnvCommand::Check { env_file, require } => {
            let env_file = env_file.as_deref().unwrap_or(&cfg.env_file);
            let env = ScriptEnv::load(env_file)?;
            let names: Vec<&str> = require.iter().map(String::as_str).collect();
            env.require(&names)?;
            Ok(format!("{} required variables set", names.len()))
        }
    }
}
