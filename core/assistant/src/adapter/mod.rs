//! Outbound ポートの実装（adapter 層）

pub mod echo_reply;
pub mod jsonl_history_store;
pub mod openai_compat_reply;

pub use echo_reply::EchoReplyGenerator;
pub use jsonl_history_store::JsonlHistoryStore;
pub use openai_compat_reply::OpenAiCompatReplyGenerator;
