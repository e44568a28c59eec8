use crate::error::StoreError;
use crate::event_log::EventStore;

use super::model::JournalReplay;
use super::parse::parse_journal_file;

#[derive(Debug, Clone)]
pub struct RebuildArgs {
    pub journal: String,
    pub out: String,
}

/// Replace the run log at `args.out` with the fold of the journal.
pub async fn rebuild_cmd(args: &RebuildArgs) -> Result<JournalReplay, StoreError> {
    let replay = parse_journal_file(&args.journal).await?;
    EventStore::new(&args.out).replace(&replay.log)?;
    tracing::info!(
        journal = %args.journal,
        out = %args.out,
        scripts = replay.log.len(),
        applied = replay.applied,
        skipped = replay.skipped,
        "run log rebuilt from journal"
    );
    Ok(replay)
}
