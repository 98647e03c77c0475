//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ・履歴ファイル・ログファイルの既定パスを環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{HistoryPath, HomeDir};
use crate::error::Error;
use std::path::PathBuf;

/// 既定の履歴ファイル名
pub const HISTORY_FILENAME: &str = "history.jsonl";
/// 既定のログファイル名
pub const LOG_FILENAME: &str = "assistant.jsonl";

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のマップ実装など。
/// パスの導出規則はデフォルトメソッドに集約し、実装は `var` / `current_dir` のみ差し替える。
pub trait EnvResolver: Send + Sync {
    /// 環境変数を読む（未設定・空文字は None）
    fn var(&self, name: &str) -> Option<String>;

    /// カレントディレクトリ
    fn current_dir(&self) -> Result<PathBuf, Error>;

    /// ASSISTANT_HOME（設定されていれば）
    fn resolve_home_dir(&self) -> Option<HomeDir> {
        self.var("ASSISTANT_HOME").map(|h| HomeDir::new(PathBuf::from(h)))
    }

    /// 既定の履歴ファイル
    ///
    /// 1. $ASSISTANT_HOME/history.jsonl
    /// 2. ./history.jsonl
    fn resolve_history_path(&self) -> Result<HistoryPath, Error> {
        if let Some(home) = self.resolve_home_dir() {
            return Ok(HistoryPath::new(home.join(HISTORY_FILENAME)));
        }
        Ok(HistoryPath::new(self.current_dir()?.join(HISTORY_FILENAME)))
    }

    /// 既定のログファイル（解決できなければ None = ログ無効）
    ///
    /// 1. $ASSISTANT_HOME/log/assistant.jsonl
    /// 2. $XDG_STATE_HOME/assistant/assistant.jsonl
    /// 3. $HOME/.local/state/assistant/assistant.jsonl
    fn resolve_log_path(&self) -> Option<PathBuf> {
        if let Some(home) = self.resolve_home_dir() {
            return Some(home.join("log").join(LOG_FILENAME));
        }
        let state_base = self
            .var("XDG_STATE_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                self.var("HOME")
                    .map(|h| PathBuf::from(h).join(".local").join("state"))
            })?;
        Some(state_base.join("assistant").join(LOG_FILENAME))
    }
}
