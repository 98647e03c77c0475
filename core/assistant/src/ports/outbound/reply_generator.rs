//! 返信生成の Outbound ポート
//!
//! 会話全体を受け取り、assistant の返信テキストを同期的に返す。

use crate::domain::Conversation;
use common::error::Error;

/// 会話から返信テキストを生成する能力
///
/// 会話は借用で渡すため生成器は変更できない。空文字の返信は許される。
/// タイムアウトなどの上限は実装側の責務。
pub trait ReplyGenerator: Send + Sync {
    /// プロファイル名（echo, openai_compat 等）
    fn name(&self) -> &str;

    fn generate(&self, conversation: &Conversation) -> Result<String, Error>;
}
