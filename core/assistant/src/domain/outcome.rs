//! 1 入力行の処理結果
//!
//! 呼び出し側は `Outcome::EXIT` と等値比較して対話ループを終える。

use common::error::Error;

/// Session::handle の戻り値
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 終了の合図（EXIT センチネル）
    Exit,
    /// 表示するテキスト（空入力のときは空文字）
    Text(String),
    /// 返信は生成できたが履歴への保存に失敗した
    Unsaved { reply: String, error: Error },
}

impl Outcome {
    /// EXIT センチネル
    pub const EXIT: Outcome = Outcome::Exit;

    pub fn text(&self) -> &str {
        match self {
            Outcome::Exit => "",
            Outcome::Text(s) => s,
            Outcome::Unsaved { reply, .. } => reply,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_sentinel_is_distinct_from_text() {
        assert_eq!(Outcome::Exit, Outcome::EXIT);
        assert_ne!(Outcome::Text("__EXIT__".to_string()), Outcome::EXIT);
        assert_ne!(Outcome::Text("/exit".to_string()), Outcome::EXIT);
    }

    #[test]
    fn test_unsaved_still_exposes_reply_text() {
        let outcome = Outcome::Unsaved {
            reply: "hi".to_string(),
            error: Error::io_msg("disk full"),
        };
        assert_eq!(outcome.text(), "hi");
        assert_ne!(outcome, Outcome::EXIT);
    }
}
