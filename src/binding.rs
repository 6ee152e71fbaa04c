//! Input binding
//!
//! Connects a text input to the scorer: every change notification is scored
//! synchronously and two display surfaces are updated with the strength
//! message and the input length.

use std::io::Write;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::evaluator::score;
use crate::label::StrengthLabel;

#[derive(Error, Debug)]
pub enum BindingError {
    #[error("Failed to write display output: {0}")]
    Io(#[from] std::io::Error),
    #[error("Display surface is closed: {0}")]
    SinkClosed(&'static str),
}

/// A display surface whose text content is replaced on every update.
pub trait DisplaySink {
    fn set_text(&mut self, text: &str) -> Result<(), BindingError>;
}

/// In-memory text surface. Keeps only the last text written.
#[derive(Debug, Default, Clone)]
pub struct TextSink {
    text: String,
}

impl TextSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl DisplaySink for TextSink {
    fn set_text(&mut self, text: &str) -> Result<(), BindingError> {
        self.text.clear();
        self.text.push_str(text);
        Ok(())
    }
}

/// Writes each update as one line to the wrapped writer.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplaySink for WriterSink<W> {
    fn set_text(&mut self, text: &str) -> Result<(), BindingError> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Values derived from one input change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayUpdate {
    pub label: StrengthLabel,
    /// Number of characters in the input value.
    pub length: usize,
}

impl DisplayUpdate {
    pub fn from_value(value: &str) -> Self {
        Self {
            label: score(value),
            length: value.chars().count(),
        }
    }

    pub fn strength_message(&self) -> String {
        format!("Password strength: {}", self.label)
    }

    pub fn length_message(&self) -> String {
        format!("Password length: {}", self.length)
    }
}

/// Observer bound to a password input, owning the two output surfaces.
#[derive(Debug)]
pub struct InputBinding<S, L> {
    strength_sink: S,
    length_sink: L,
}

impl<S: DisplaySink, L: DisplaySink> InputBinding<S, L> {
    pub fn new(strength_sink: S, length_sink: L) -> Self {
        Self {
            strength_sink,
            length_sink,
        }
    }

    /// Handles one change of the input value.
    ///
    /// The strength surface is written first; if it fails the length
    /// surface is left untouched.
    pub fn on_input(&mut self, value: &str) -> Result<DisplayUpdate, BindingError> {
        let update = DisplayUpdate::from_value(value);
        self.strength_sink.set_text(&update.strength_message())?;
        self.length_sink.set_text(&update.length_message())?;
        Ok(update)
    }

    pub fn on_secret_input(&mut self, value: &SecretString) -> Result<DisplayUpdate, BindingError> {
        self.on_input(value.expose_secret())
    }

    pub fn strength_sink(&self) -> &S {
        &self.strength_sink
    }

    pub fn length_sink(&self) -> &L {
        &self.length_sink
    }

    pub fn into_sinks(self) -> (S, L) {
        (self.strength_sink, self.length_sink)
    }
}

/// Drives a binding from a channel of input values.
///
/// Events are handled one at a time, in arrival order, until the sender side
/// is dropped or `token` is cancelled. Returns how many events were handled.
#[cfg(feature = "async")]
pub async fn run_binding<S: DisplaySink, L: DisplaySink>(
    binding: &mut InputBinding<S, L>,
    mut rx: mpsc::Receiver<SecretString>,
    token: CancellationToken,
) -> Result<usize, BindingError> {
    let mut handled = 0;

    loop {
        let value = tokio::select! {
            biased;
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::info!("input binding cancelled after {} events", handled);
                break;
            }
            value = rx.recv() => value,
        };

        let Some(value) = value else {
            break;
        };

        match binding.on_secret_input(&value) {
            Ok(_update) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    label = _update.label.as_str(),
                    length = _update.length,
                    "display updated"
                );
                handled += 1;
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Display sink error: {e}");
                return Err(e);
            }
        }
    }

    Ok(handled)
}
