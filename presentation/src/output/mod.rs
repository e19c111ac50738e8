//! Output formatting for one-shot suggestions

pub mod console;
