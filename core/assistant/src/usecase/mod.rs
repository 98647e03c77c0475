//! ユースケース層

pub mod session;

pub use session::{render_history, Session, EMPTY_HISTORY, UNKNOWN_COMMAND};
