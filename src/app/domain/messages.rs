use std::path::PathBuf;

use crate::app::infrastructure::visual::TextField;

/// All messages the command loop can dispatch.
/// Each user command maps to one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Mode
    ToggleEdit,
    EditField(TextField, String),

    // Exchange
    Save,
    Reset,
    Print,
    Export,
    Import(Option<PathBuf>),

    // Misc
    Show,
    Help,
    Quit,
}
