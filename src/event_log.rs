//! JSONL event log.
//!
//! One JSON object per line, appended to the file named by
//! `BLOCKFALL_LOG_PATH`. A failed write closes the log; play continues.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::{Command, LockEvent};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogRecord {
    SessionStart {
        seed: u32,
        width: u8,
        height: u8,
    },
    Command {
        command: &'static str,
        episode: u32,
    },
    Lock {
        lines: u32,
        points: u32,
        score: u32,
        level: u32,
    },
    GameOver {
        score: u32,
        level: u32,
        lines: u32,
    },
    SessionEnd {
        score: u32,
        level: u32,
        lines: u32,
    },
}

impl LogRecord {
    pub fn command(command: Command, episode: u32) -> Self {
        LogRecord::Command {
            command: command.as_str(),
            episode,
        }
    }

    pub fn lock(ev: &LockEvent) -> Self {
        LogRecord::Lock {
            lines: ev.lines_cleared,
            points: ev.points,
            score: ev.score,
            level: ev.level,
        }
    }
}

#[derive(Serialize)]
struct Line<'a> {
    ts: u64,
    #[serde(flatten)]
    record: &'a LogRecord,
}

pub struct EventLog {
    sink: Option<Box<dyn Write>>,
}

impl EventLog {
    /// A log that drops everything
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Append to `path`, creating it if needed
    pub fn open(path: &str) -> Result<Self> {
        let file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open event log {}", path))?;
        Ok(Self::to_writer(BufWriter::new(file)))
    }

    pub fn to_writer(writer: impl Write + 'static) -> Self {
        Self {
            sink: Some(Box::new(writer)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn record(&mut self, record: &LogRecord) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        let line = Line {
            ts: now_ms(),
            record,
        };
        let ok = serde_json::to_writer(&mut *sink, &line).is_ok() && sink.write_all(b"\n").is_ok();
        if !ok {
            self.sink = None;
        }
    }

    pub fn flush(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            if sink.flush().is_err() {
                self.sink = None;
            }
        }
    }
}

impl Drop for EventLog {
    fn drop(&mut self) {
        self.flush();
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
