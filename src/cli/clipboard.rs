// src/cli/clipboard.rs
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use zeroize::Zeroizing;

use crate::error::AppError;

/// Minimal clipboard surface, so the restore logic can run without a display.
pub trait ClipboardBackend: Send + 'static {
    fn get_text(&mut self) -> Result<String, AppError>;
    fn set_text(&mut self, text: &str) -> Result<(), AppError>;
    fn clear(&mut self) -> Result<(), AppError>;
}

/// The desktop clipboard through `arboard`. A fresh handle is opened per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn open() -> Result<arboard::Clipboard, AppError> {
        arboard::Clipboard::new()
            .map_err(|e| AppError::Clipboard(format!("Failed to access clipboard: {e}")))
    }
}

impl ClipboardBackend for SystemClipboard {
    fn get_text(&mut self) -> Result<String, AppError> {
        Self::open()?
            .get_text()
            .map_err(|e| AppError::Clipboard(format!("Failed to read clipboard: {e}")))
    }

    fn set_text(&mut self, text: &str) -> Result<(), AppError> {
        Self::open()?
            .set_text(text.to_owned())
            .map_err(|e| AppError::Clipboard(format!("Failed to copy to clipboard: {e}")))
    }

    fn clear(&mut self) -> Result<(), AppError> {
        Self::open()?
            .clear()
            .map_err(|e| AppError::Clipboard(format!("Failed to clear clipboard: {e}")))
    }
}

struct SessionState<B> {
    backend: B,
    // Contents from before the first copy of the current run of copies.
    // Outer None: nothing pending. Inner None: clipboard was unreadable.
    original: Option<Option<Zeroizing<String>>>,
    generation: u64,
}

/// Copies passwords and, with a timeout, puts the clipboard back afterwards.
///
/// Only the most recent copy schedules a live restore; older restores become
/// no-ops. The contents saved before the first copy are what gets restored, so
/// copying twice never leaves an earlier password behind.
pub struct ClipboardSession<B: ClipboardBackend> {
    state: Arc<Mutex<SessionState<B>>>,
    timeout: Option<Duration>,
    restore: Option<JoinHandle<()>>,
}

impl ClipboardSession<SystemClipboard> {
    pub fn system(timeout: Option<Duration>) -> Self {
        Self::new(SystemClipboard, timeout)
    }
}

impl<B: ClipboardBackend> ClipboardSession<B> {
    pub fn new(backend: B, timeout: Option<Duration>) -> Self {
        ClipboardSession {
            state: Arc::new(Mutex::new(SessionState {
                backend,
                original: None,
                generation: 0,
            })),
            timeout,
            restore: None,
        }
    }

    /// Put `text` on the clipboard. The copied value is never logged.
    pub fn copy(&mut self, text: &str) -> Result<(), AppError> {
        let generation = {
            let mut state = self
                .state
                .lock()
                .map_err(|_| AppError::Clipboard("Clipboard state poisoned".to_string()))?;

            if self.timeout.is_some() && state.original.is_none() {
                // Unreadable contents just mean we clear instead of restoring
                let previous = state.backend.get_text().ok().map(Zeroizing::new);
                state.original = Some(previous);
            }

            state.backend.set_text(text)?;
            state.generation += 1;
            state.generation
        };

        log::debug!("Copied {} characters to clipboard", text.len());

        if let Some(duration) = self.timeout {
            let state = Arc::clone(&self.state);
            self.restore = Some(thread::spawn(move || {
                thread::sleep(duration);
                restore_if_current(&state, generation);
            }));
        }

        Ok(())
    }

    pub fn has_pending_restore(&self) -> bool {
        self.restore.is_some()
    }

    /// Block until the latest scheduled restore has run.
    pub fn wait(mut self) {
        if let Some(handle) = self.restore.take() {
            if handle.join().is_err() {
                log::warn!("Clipboard restore thread panicked");
            }
        }
    }
}

fn restore_if_current<B: ClipboardBackend>(state: &Mutex<SessionState<B>>, generation: u64) {
    let Ok(mut state) = state.lock() else {
        return;
    };

    // A newer copy owns the restore
    if state.generation != generation {
        return;
    }

    let original = state.original.take();
    let result = match original {
        Some(Some(previous)) => state.backend.set_text(&previous),
        _ => state.backend.clear(),
    };
    if let Err(e) = result {
        log::warn!("Could not restore clipboard: {}", e);
    }
}

/// One-shot copy to the system clipboard.
///
/// With a timeout, the previous contents are put back (or the clipboard is
/// cleared) once it elapses; call [`ClipboardSession::wait`] before exiting.
pub fn copy_to_clipboard(
    text: &str,
    timeout: Option<Duration>,
) -> Result<ClipboardSession<SystemClipboard>, AppError> {
    let mut session = ClipboardSession::system(timeout);
    session.copy(text)?;
    Ok(session)
}
