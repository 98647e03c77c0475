//! 対話型 AI アシスタントのセッション
//!
//! 入力 1 行をコマンド（/history, /exit）かチャットに振り分け、
//! チャットのターンごとに会話を JSONL 履歴へ追記する。
//! コンソールや GUI は `Session::handle` を呼ぶだけの呼び出し側。

pub mod adapter;
pub mod cli;
pub mod console;
pub mod domain;
pub mod ports;
pub mod usecase;
pub mod wiring;

#[cfg(test)]
mod tests;

pub use domain::{Conversation, Message, Outcome, Role};
pub use usecase::Session;
