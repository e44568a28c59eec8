//! Run-log tooling for the fungible token tutorial scripts.
//!
//! Scripts report their lifecycle through [`logger::ScriptLogger`], which folds
//! start/complete/error events into the shared run log ([`event_log`]) and
//! appends every call to a JSONL journal ([`events_out`]). [`stats`] turns the
//! run log into onboarding metrics such as time to hello world.
pub mod api;
pub mod config;
pub mod error;
pub mod event_log;
pub mod events_out;
pub mod logger;
pub mod replay;
pub mod script;
pub mod stats;
