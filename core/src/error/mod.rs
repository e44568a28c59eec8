#[allow(clippy::module_inception)]
pub mod error;
pub mod stats;
pub mod store;

pub use error::{ArtefactsError, CliError, EntityIdError, EnvError};
pub use stats::{ErrorCode, StatsError};
pub use store::{LoggerError, StoreError};
