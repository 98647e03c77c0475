//! 会話履歴ストアの Outbound ポート
//!
//! 会話のスナップショットを追記専用で保存し、保存順にすべて読み戻す。

use crate::domain::Conversation;
use common::error::Error;

/// 会話スナップショットの追記専用ログ
///
/// 更新・削除の操作は持たない。
pub trait HistoryStore: Send + Sync {
    /// 会話の現在の全状態を 1 レコードとして追記する
    fn save(&self, conversation: &Conversation) -> Result<(), Error>;

    /// 全レコードを保存順に読み戻す。ストアが未作成なら空。
    fn load_all(&self) -> Result<Vec<Conversation>, Error>;
}
