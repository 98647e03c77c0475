//! Outbound ポート: セッションが外界（返信生成・履歴保存）を使うための trait

pub mod history_store;
pub mod reply_generator;

pub use history_store::HistoryStore;
pub use reply_generator::ReplyGenerator;
