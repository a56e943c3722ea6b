// src/utils/clipboard.rs
use std::thread::{self, JoinHandle};
use std::time::Duration;

use thiserror::Error;
use zeroize::Zeroizing;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("There is no password to copy")]
    NothingToCopy,
}

/// Something a password can be copied into.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(format!("Failed to access clipboard: {e}")))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Unavailable(format!("Failed to copy to clipboard: {e}")))
    }
}

/// Copy `text` into `clipboard`, optionally wiping the system clipboard after
/// `clear_after`. Never prints the copied value.
///
/// The returned handle belongs to the clear thread; callers about to exit must
/// join it or the clipboard is left as is.
pub fn copy_to_clipboard<C: Clipboard + ?Sized>(
    clipboard: &mut C,
    text: &str,
    clear_after: Option<Duration>,
) -> Result<Option<JoinHandle<()>>, ClipboardError> {
    if text.is_empty() {
        return Err(ClipboardError::NothingToCopy);
    }

    clipboard.set_text(text)?;
    log::info!("Copied {} characters to the clipboard", text.chars().count());

    Ok(clear_after.map(|duration| {
        schedule_clear(Zeroizing::new(text.to_owned()), duration, clear_system_clipboard)
    }))
}

/// Runs `clear` with the copied text once `duration` has passed.
pub fn schedule_clear<F>(copied: Zeroizing<String>, duration: Duration, clear: F) -> JoinHandle<()>
where
    F: FnOnce(&str) + Send + 'static,
{
    thread::spawn(move || {
        thread::sleep(duration);
        clear(copied.as_str());
        log::debug!("Clipboard clear ran after {:?}", duration);
    })
}

// Best effort: only clears if the clipboard still holds what we copied
fn clear_system_clipboard(copied: &str) {
    if let Ok(mut cb) = arboard::Clipboard::new() {
        let current = cb.get_text().ok().map(Zeroizing::new);
        if current.as_deref().map(String::as_str) == Some(copied) {
            let _ = cb.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeClipboard {
        contents: Option<String>,
        fail: bool,
    }

    impl Clipboard for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("no display".into()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_sets_text() {
        let mut cb = FakeClipboard::default();
        let clear = copy_to_clipboard(&mut cb, "s3cret!", None).unwrap();
        assert!(clear.is_none());
        assert_eq!(cb.contents.as_deref(), Some("s3cret!"));
    }

    #[test]
    fn test_copy_empty_is_rejected() {
        let mut cb = FakeClipboard::default();
        let err = copy_to_clipboard(&mut cb, "", None).unwrap_err();
        assert!(matches!(err, ClipboardError::NothingToCopy));
        assert!(cb.contents.is_none());
    }

    #[test]
    fn test_copy_failure_is_reported() {
        let mut cb = FakeClipboard { fail: true, ..Default::default() };
        let err = copy_to_clipboard(&mut cb, "abc", None).unwrap_err();
        assert!(matches!(err, ClipboardError::Unavailable(_)));
    }

    #[test]
    fn test_scheduled_clear_runs_before_join_returns() {
        use std::sync::{Arc, Mutex};

        let cleared = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&cleared);
        let handle = schedule_clear(
            Zeroizing::new("s3cret!".to_string()),
            Duration::from_millis(10),
            move |copied| {
                *sink.lock().unwrap() = Some(copied.to_string());
            },
        );

        handle.join().unwrap();
        assert_eq!(cleared.lock().unwrap().as_deref(), Some("s3cret!"));
    }
}
