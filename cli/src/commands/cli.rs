use clap::{Args as ClapArgs, Parser, Subcommand};
use cyoa_core::api::ScriptCategory;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryArg {
    Setup,
    Task,
}

impl From<CategoryArg> for ScriptCategory {
    fn from(c: CategoryArg) -> Self {
        match c {
            CategoryArg::Setup => ScriptCategory::Setup,
            CategoryArg::Task => ScriptCategory::Task,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEvent {
    Start,
    Complete,
    Error,
    Section,
    Reminder,
}

#[derive(Parser, Debug)]
#[command(
    name = "cyoa",
    version,
    about = "Run log and helpers for the fungible token tutorial scripts"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Run log path; overrides config and CYOA_EVENT_LOG.
    #[arg(long, global = true)]
    pub event_log: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct StatsArgs {
    /// Run log to summarize; takes precedence over --event-log.
    #[arg(long)]
    pub log: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct RebuildArgs {
    /// Journal to replay; defaults to the configured events_out path.
    #[arg(long)]
    pub journal: Option<String>,

    /// Where to write the rebuilt run log; defaults to the run log itself.
    #[arg(long)]
    pub out: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct LogArgs {
    #[arg(value_enum)]
    pub event: LogEvent,

    #[arg(long)]
    pub script_id: String,

    #[arg(long, value_enum, default_value_t = CategoryArg::Task)]
    pub category: CategoryArg,

    #[arg(long, default_value = "")]
    pub message: String,

    /// For `section`: wait for Enter before returning.
    #[arg(long, default_value_t = false)]
    pub wait: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum EnvCommand {
    /// Verify that the variables a script needs are set.
    Check {
        #[arg(long)]
        env_file: Option<String>,

        #[arg(long = "require", action = clap::ArgAction::Append, required = true)]
        require: Vec<String>,
    },
}

#[derive(ClapArgs, Debug, Clone)]
pub struct AddressArgs {
    /// `shard.realm.num` entity id or a 0x-prefixed long-zero address.
    pub id: String,

    #[arg(long, default_value = "testnet")]
    pub network: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ArtefactsCommand {
    Show {
        #[arg(long, default_value = cyoa_core::api::DEFAULT_ARTEFACTS_FILE)]
        file: String,

        #[arg(long, default_value = "testnet")]
        network: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize the run log: time to hello world, completions, drop-offs.
    Stats(StatsArgs),
    /// Rebuild the run log from the lifecycle journal.
    Rebuild(RebuildArgs),
    /// Record a lifecycle event for a script.
    Log(LogArgs),
    #[command(subcommand)]
    Env(EnvCommand),
    /// Convert between entity ids and EVM addresses.
    Address(AddressArgs),
    #[command(subcommand)]
    Artefacts(ArtefactsCommand),
}
