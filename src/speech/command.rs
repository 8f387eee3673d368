//! Speech through an external program such as `espeak-ng` or `spd-say`.

use super::{SpeechError, Speaker};
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use tracing::{debug, warn};

/// Spawns one process per utterance, passing the text as the last argument.
///
/// Only one utterance runs at a time. Dropping the speaker kills it.
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
    current: Option<Child>,
}

impl CommandSpeaker {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            current: None,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Stop the running utterance, if any, and reap it.
    fn flush(&mut self) {
        let Some(mut child) = self.current.take() else {
            return;
        };

        if matches!(child.try_wait(), Ok(Some(_))) {
            return;
        }

        if let Err(e) = child.kill() {
            debug!("speech process already gone: {}", e);
        }
        if let Err(e) = child.wait() {
            debug!("failed to reap speech process: {}", e);
        }
    }

    fn spawn(&self, text: &str) -> Result<Child, SpeechError> {
        // SAFETY: setsid() is async-signal-safe. It moves the speech process
        // out of the terminal's process group so it never reads the tty.
        let spawned = unsafe {
            Command::new(&self.program)
                .args(&self.args)
                .arg(text)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .pre_exec(|| {
                    libc::setsid();
                    Ok(())
                })
                .spawn()
        };

        spawned.map_err(|source| SpeechError::Spawn {
            program: self.program.clone(),
            source,
        })
    }
}

impl Speaker for CommandSpeaker {
    fn initialize(&mut self) -> Result<(), SpeechError> {
        if program_exists(&self.program) {
            debug!("speech program '{}' is available", self.program);
            Ok(())
        } else {
            Err(SpeechError::ProgramNotFound(self.program.clone()))
        }
    }

    fn speak(&mut self, text: &str) {
        self.flush();
        match self.spawn(text) {
            Ok(child) => self.current = Some(child),
            Err(e) => warn!("{}", e),
        }
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        self.flush();
        debug!("speech engine shut down");
    }
}

fn program_exists(program: &str) -> bool {
    if program.contains('/') {
        return Path::new(program).is_file();
    }

    Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}
