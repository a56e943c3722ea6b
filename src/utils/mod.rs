// src/utils/mod.rs
pub mod clipboard;
mod format;
mod io;

pub use clipboard::{copy_to_clipboard, Clipboard, ClipboardError, SystemClipboard};
pub use format::*;
pub use io::*;
