//! Helpers shared by the tutorial scripts: `.env` handling, entity ids and artefacts.
pub mod artefacts;
pub mod entity_id;
pub mod env;

pub use artefacts::{read_artefacts, write_artefacts, TokenArtefacts, DEFAULT_ARTEFACTS_FILE};
pub use entity_id::{hashscan_url, EntityId, ExplorerKind};
pub use env::{parse_env_file, parse_env_str, ScriptEnv};
