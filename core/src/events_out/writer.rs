use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::EventsOutConfig;

const STDOUT_TARGET: &str = "stdout:";

#[derive(Clone)]
pub struct EventsOutTx {
    tx: mpsc::Sender<String>,
    dropped: Arc<AtomicU64>,
    drop_when_full: bool,
}

impl EventsOutTx {
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    pub async fn send_line(&self, line: String) {
        if self.drop_when_full {
            if self.tx.try_send(line).is_err() {
                self.dropped.fetch_add(1, Ordering::Relaxed);
            }
        } else if self.tx.send(line).await.is_err() {
            // writer closed
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Owner of the journal writer task.
pub struct EventsOut {
    tx: EventsOutTx,
    task: JoinHandle<()>,
}

impl EventsOut {
    pub fn sender(&self) -> EventsOutTx {
        self.tx.clone()
    }

    /// Close the channel and wait until every queued line is flushed.
    /// Clones handed out by `sender` must be dropped first, otherwise this waits for them.
    pub async fn finish(self) -> u64 {
        let Self { tx, task } = self;
        let dropped = tx.dropped.clone();
        drop(tx);
        if let Err(e) = task.await {
            tracing::warn!(error = %e, "journal writer task failed");
        }
        dropped.load(Ordering::Relaxed)
    }
}

pub async fn start_events_out(cfg: &EventsOutConfig) -> Result<Option<EventsOut>, std::io::Error> {
    if !cfg.enabled || cfg.path.trim().is_empty() {
        return Ok(None);
    }

    let path = cfg.path.clone();
    let mut writer: Box<dyn tokio::io::AsyncWrite + Unpin + Send> = if path == STDOUT_TARGET {
        Box::new(tokio::io::stdout())
    } else {
        if let Some(parent) = std::path::Path::new(&path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        Box::new(file)
    };

    let (tx, mut rx) = mpsc::channel::<String>(cfg.channel_capacity.max(1));
    let dropped = Arc::new(AtomicU64::new(0));

    let task = tokio::spawn(async move {
        while let Some(mut line) = rx.recv().await {
            if !line.ends_with('\n') {
                line.push('\n');
            }
            if let Err(e) = writer.write_all(line.as_bytes()).await {
                tracing::warn!(path = %path, error = %e, "journal write failed");
                return;
            }
        }

        if let Err(e) = writer.flush().await {
            tracing::warn!(path = %path, error = %e, "journal flush failed");
        }
    });

    Ok(Some(EventsOut {
        tx: EventsOutTx {
            tx,
            dropped,
            drop_when_full: cfg.drop_when_full,
        },
        task,
    }))
}
