use std::fmt::Display;
use std::io::Write;

use chrono::{DateTime, Utc};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::config::AppConfig;
use crate::error::LoggerError;
use crate::event_log::{EventStore, LifecycleKind, ScriptCategory};
use crate::events_out::{write_lifecycle_event, EventsOutTx, JournalKind, LifecycleEvent};

use super::ansi::{apply_ansi, AnsiStyle};

const WAIT_PROMPT: &str = "(Hit the \"return\" key when ready to proceed)";

pub struct LoggerOptions {
    pub script_id: String,
    pub category: ScriptCategory,
    pub version: String,
    /// Run log to fold lifecycle events into; `None` keeps the logger console-only.
    pub store: Option<EventStore>,
    pub journal: Option<EventsOutTx>,
    pub wait_prompts: bool,
    pub ansi: bool,
}

impl LoggerOptions {
    pub fn from_config(
        cfg: &AppConfig,
        script_id: impl Into<String>,
        category: ScriptCategory,
        journal: Option<EventsOutTx>,
    ) -> Self {
        Self {
            script_id: script_id.into(),
            category,
            version: cfg.version.clone(),
            store: Some(EventStore::new(&cfg.event_log.path)),
            journal,
            wait_prompts: cfg.prompts.wait,
            ansi: true,
        }
    }
}

/// Logger handle for one script run.
///
/// `log_start`, `log_error` and `log_complete` update the run log that the
/// stats command reads; sections and reminders only go to the console and
/// the journal.
pub struct ScriptLogger {
    opts: LoggerOptions,
    run_id: String,
    section: usize,
    console: Box<dyn Write + Send>,
}

impl ScriptLogger {
    pub fn new(opts: LoggerOptions) -> Self {
        Self {
            opts,
            run_id: uuid::Uuid::new_v4().to_string(),
            section: 0,
            console: Box::new(std::io::stdout()),
        }
    }

    pub fn with_console(mut self, console: Box<dyn Write + Send>) -> Self {
        self.console = console;
        self
    }

    pub fn script_id(&self) -> &str {
        &self.opts.script_id
    }

    pub fn category(&self) -> ScriptCategory {
        self.opts.category
    }

    pub fn version(&self) -> &str {
        &self.opts.version
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Style `text` by name (`URL`, `SECTION`, ...). Plain text when ANSI output is off.
    pub fn apply_ansi(&self, style_name: &str, text: &str) -> Result<String, LoggerError> {
        let style: AnsiStyle = style_name.parse()?;
        Ok(self.styled(style, text))
    }

    fn styled(&self, style: AnsiStyle, text: &str) -> String {
        if self.opts.ansi {
            apply_ansi(style, text)
        } else {
            text.to_string()
        }
    }

    fn print(&mut self, line: &str) {
        let _ = writeln!(self.console, "{line}");
        let _ = self.console.flush();
    }

    pub async fn log_start(&mut self, message: impl Display) -> Result<(), LoggerError> {
        let message = message.to_string();
        let line = self.styled(AnsiStyle::Start, &message);
        self.print(&line);
        self.lifecycle(LifecycleKind::Start, message).await
    }

    pub fn log(&mut self, message: impl Display) {
        let line = message.to_string();
        self.print(&line);
    }

    pub async fn log_section(&mut self, title: impl Display) {
        self.section += 1;
        let title = title.to_string();
        let header = self.styled(AnsiStyle::Section, &format!("#{} {}", self.section, title));
        self.print("");
        self.print(&header);
        self.journal(JournalKind::Section, Utc::now(), title).await;
    }

    pub async fn log_section_with_wait_prompt(
        &mut self,
        title: impl Display,
    ) -> Result<(), LoggerError> {
        let mut stdin = BufReader::new(tokio::io::stdin());
        self.log_section_with_wait_prompt_from(title, &mut stdin)
            .await
    }

    /// Like `log_section_with_wait_prompt`, reading the confirmation from `input`.
    pub async fn log_section_with_wait_prompt_from<R>(
        &mut self,
        title: impl Display,
        input: &mut R,
    ) -> Result<(), LoggerError>
    where
        R: AsyncBufRead + Unpin,
    {
        self.log_section(title).await;
        if !self.opts.wait_prompts {
            return Ok(());
        }
        let prompt = self.styled(AnsiStyle::Bold, WAIT_PROMPT);
        self.print(&prompt);
        let mut line = String::new();
        input
            .read_line(&mut line)
            .await
            .map_err(LoggerError::Prompt)?;
        Ok(())
    }

    pub async fn log_reminder(&mut self, message: impl Display) {
        let message = message.to_string();
        let line = self.styled(AnsiStyle::Reminder, &message);
        self.print(&line);
        self.journal(JournalKind::Reminder, Utc::now(), message).await;
    }

    pub async fn log_error(&mut self, error: impl Display) -> Result<(), LoggerError> {
        let message = error.to_string();
        let line = self.styled(AnsiStyle::Error, &format!("Error: {message}"));
        self.print(&line);
        self.lifecycle(LifecycleKind::Error, message).await
    }

    pub async fn log_complete(&mut self, message: impl Display) -> Result<(), LoggerError> {
        let message = message.to_string();
        let line = self.styled(AnsiStyle::Complete, &message);
        self.print(&line);
        self.lifecycle(LifecycleKind::Complete, message).await
    }

    async fn lifecycle(&mut self, kind: LifecycleKind, message: String) -> Result<(), LoggerError> {
        let now = Utc::now();
        self.journal(kind.into(), now, message).await;
        if let Some(store) = &self.opts.store {
            let stats = store.record(
                &self.opts.script_id,
                self.opts.category,
                kind,
                now.timestamp_millis(),
            )?;
            tracing::debug!(
                script_id = %self.opts.script_id,
                ?kind,
                count_complete = stats.count_complete,
                "lifecycle event recorded"
            );
        }
        Ok(())
    }

    async fn journal(&self, kind: JournalKind, ts: DateTime<Utc>, message: String) {
        let ev = LifecycleEvent::new(
            kind,
            ts,
            self.run_id.as_str(),
            self.opts.script_id.as_str(),
            self.opts.category,
        )
        .with_message(message);
        write_lifecycle_event(self.opts.journal.as_ref(), &ev).await;
    }
}
