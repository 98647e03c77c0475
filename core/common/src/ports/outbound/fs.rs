//! ファイルシステム Outbound ポート
//!
//! 履歴ストアやログはこの trait 経由でのみファイル I/O を行う。

use crate::error::Error;
use std::path::Path;

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdFileSystem` やテスト用の失敗注入 FS など。
pub trait FileSystem: Send + Sync {
    /// ファイル全体をバイト列で読む（UTF-8 の検証は呼び出し側）
    fn read(&self, path: &Path) -> Result<Vec<u8>, Error>;
    /// 末尾 1 バイト。空ファイル・存在しないファイルは None。
    fn last_byte(&self, path: &Path) -> Result<Option<u8>, Error>;
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;
    fn exists(&self, path: &Path) -> bool;
}
