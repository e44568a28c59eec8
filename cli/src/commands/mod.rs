pub mod address;
pub mod artefacts;
pub mod cli;
pub mod env;
pub mod log;
pub mod stats;
