//! エラーハンドリング
//!
//! 全レイヤーで共有するエラー型。終了コードは sysexits に揃える。

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// ファイル I/O の失敗
    #[error("{0}")]
    Io(String),
    /// 引数・設定値の不正
    #[error("{0}")]
    InvalidArgument(String),
    /// JSON のシリアライズ／パース失敗
    #[error("{0}")]
    Json(String),
    /// HTTP 通信・API 側のエラー
    #[error("{0}")]
    Http(String),
    /// 履歴ファイル内の壊れたレコード（line は 1 始まり）
    #[error("corrupt history record at line {line}: {reason}")]
    CorruptRecord { line: usize, reason: String },
    /// その他の内部エラー
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Error::Http(msg.into())
    }

    pub fn corrupt_record(line: usize, reason: impl Into<String>) -> Self {
        Error::CorruptRecord {
            line,
            reason: reason.into(),
        }
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    /// プロセス終了コード（sysexits.h 準拠）
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::Json(_) | Error::CorruptRecord { .. } => 65,
            Error::Http(_) => 69,
            Error::System(_) => 70,
            Error::Io(_) => 74,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
