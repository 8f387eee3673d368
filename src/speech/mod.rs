//! Speech output for the calculator.
//!
//! The screen only knows the [`Speaker`] capability. Utterances are
//! fire-and-forget: a new one interrupts whatever is still being spoken.

mod command;

pub use command::CommandSpeaker;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech is disabled")]
    Disabled,
    #[error("speech program '{0}' was not found on PATH")]
    ProgramNotFound(String),
    #[error("failed to start speech program '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Something that can read text aloud.
pub trait Speaker {
    /// Prepare the engine. The readiness phrase is spoken only when this succeeds.
    fn initialize(&mut self) -> Result<(), SpeechError> {
        Ok(())
    }

    /// Speak `text`, flushing any utterance still in progress.
    fn speak(&mut self, text: &str);
}

impl<S: Speaker + ?Sized> Speaker for Box<S> {
    fn initialize(&mut self) -> Result<(), SpeechError> {
        (**self).initialize()
    }

    fn speak(&mut self, text: &str) {
        (**self).speak(text)
    }
}

/// A speaker that drops every utterance.
#[derive(Debug, Default)]
pub struct MutedSpeaker;

impl Speaker for MutedSpeaker {
    fn initialize(&mut self) -> Result<(), SpeechError> {
        Err(SpeechError::Disabled)
    }

    fn speak(&mut self, _text: &str) {}
}

/// Records utterances instead of speaking them.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSpeaker {
    utterances: Vec<String>,
}

#[cfg(test)]
impl RecordingSpeaker {
    pub fn utterances(&self) -> &[String] {
        &self.utterances
    }
}

#[cfg(test)]
impl Speaker for RecordingSpeaker {
    fn speak(&mut self, text: &str) {
        self.utterances.push(text.to_string());
    }
}
