// ABOUTME: Presentation-side sinks for wizard render instructions
// The renderer itself lives outside this crate; these sinks record or print what it is told

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use crate::onboarding::Instruction;

/// Anything that can apply render instructions, in the order they are emitted
pub trait Presenter {
    fn present(&mut self, instruction: &Instruction) -> Result<()>;

    fn present_all(&mut self, instructions: &[Instruction]) -> Result<()> {
        for instruction in instructions {
            self.present(instruction)?;
        }
        Ok(())
    }
}

/// Output format for printed instructions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Keeps every instruction it receives. Clones share the same log, so a test
/// can hold one handle while a session owns the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    log: Arc<Mutex<Vec<Instruction>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    pub fn snapshot(&self) -> Vec<Instruction> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Drain the log
    pub fn take(&self) -> Vec<Instruction> {
        std::mem::take(&mut *self.log.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, instruction: &Instruction) -> Result<()> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(instruction.clone());
        Ok(())
    }
}

/// Writes one line per instruction, as text or JSON
pub struct StreamPresenter<W: Write> {
    writer: W,
    format: OutputFormat,
    line_ending: &'static str,
}

impl<W: Write> StreamPresenter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer,
            format,
            line_ending: "\n",
        }
    }

    /// Use CRLF line endings, needed while the terminal is in raw mode
    #[must_use]
    pub fn raw_mode(mut self) -> Self {
        self.line_ending = "\r\n";
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Presenter for StreamPresenter<W> {
    fn present(&mut self, instruction: &Instruction) -> Result<()> {
        let line = match self.format {
            OutputFormat::Text => instruction.to_string(),
            OutputFormat::Json => {
                serde_json::to_string(instruction).context("Failed to serialize instruction")?
            }
        };
        write!(self.writer, "{line}{}", self.line_ending).context("Failed to write instruction")?;
        self.writer.flush().context("Failed to flush instruction output")?;
        Ok(())
    }
}
