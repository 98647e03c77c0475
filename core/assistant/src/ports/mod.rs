//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（コンソール・GUI）がセッションを呼び出すインターフェース
//! - outbound: セッションが外界（返信生成器・履歴ストア）に依頼するための trait

pub mod inbound;
pub mod outbound;
