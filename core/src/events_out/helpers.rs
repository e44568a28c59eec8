use crate::events_out::EventsOutTx;

use super::event::LifecycleEvent;

pub async fn write_lifecycle_event(out: Option<&EventsOutTx>, ev: &LifecycleEvent) {
    let Some(out) = out else {
        return;
    };
    match serde_json::to_string(ev) {
        Ok(line) => out.send_line(line).await,
        Err(e) => tracing::warn!(error = %e, "journal event not serializable"),
    }
}
