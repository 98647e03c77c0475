//! 標準アダプタ（Outbound ポートの実装）
//!
//! usecase はポートの trait 経由でのみファイル・環境変数・ログに触れる。
//! ここには標準実装（Std*）とファイルログを置き、テストではモックを注入する。

pub mod file_json_log;
pub mod std_env_resolver;
pub mod std_fs;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
