//! セッションコマンドの enum（Command Pattern）
//!
//! `/` で始まる入力行を enum に落とし、match でディスパッチする。

/// セッション中に使えるコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// 対話ループを終了する（/exit）
    Exit,
    /// 保存済みの履歴をすべて表示する（/history）
    History,
    /// 未知のコマンド（入力をそのまま保持）
    Unknown(String),
}

impl SessionCommand {
    /// トリム済みの入力行から解析する。完全一致・大文字小文字を区別する。
    pub fn parse(text: &str) -> Self {
        match text {
            "/exit" => SessionCommand::Exit,
            "/history" => SessionCommand::History,
            other => SessionCommand::Unknown(other.to_string()),
        }
    }

    /// ログ用のコマンド名
    pub fn name(&self) -> &str {
        match self {
            SessionCommand::Exit => "exit",
            SessionCommand::History => "history",
            SessionCommand::Unknown(_) => "unknown",
        }
    }
}
