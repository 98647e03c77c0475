//! JSONL ファイルへの会話履歴ストア（1 行 = 1 レコード）
//!
//! 保存のたびに会話の全状態を 1 行として追記する（差分ではない）。
//! N ターンの会話は N 行になり、各行は前の行のメッセージ列を接頭辞に持つ。
//! 1 行は改行まで含めて 1 回の write で書くため、既存の行は壊れない。
//! 前回の書き込みが途中で切れて末尾に改行が無い場合は、改行を補ってから書く。
//!
//! 読み込みは厳格: 最初の壊れた行（UTF-8 不正・JSON 不正・フィールド欠落・未知のロール）で
//! `Error::CorruptRecord` を返して中断する。空行は読み飛ばす。

use crate::domain::{Conversation, Message};
use crate::ports::outbound::HistoryStore;
use common::domain::HistoryPath;
use common::error::Error;
use common::ports::outbound::FileSystem;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::Arc;

/// 書き込み用の 1 レコード（会話を借用）
#[derive(Serialize)]
struct RecordRef<'a> {
    mode: &'a str,
    messages: &'a [Message],
}

/// 読み込み用の 1 レコード
#[derive(Deserialize)]
struct Record {
    mode: String,
    messages: Vec<Message>,
}

/// JSONL ファイルに追記する HistoryStore 実装
pub struct JsonlHistoryStore {
    fs: Arc<dyn FileSystem>,
    path: HistoryPath,
}

impl JsonlHistoryStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: HistoryPath) -> Self {
        Self { fs, path }
    }
}

/// 会話を改行終端の 1 行にする
fn encode_record(conversation: &Conversation) -> Result<String, Error> {
    let record = RecordRef {
        mode: conversation.mode(),
        messages: conversation.messages(),
    };
    let mut line = serde_json::to_string(&record)
        .map_err(|e| Error::json(format!("Failed to encode history record: {}", e)))?;
    line.push('\n');
    Ok(line)
}

impl HistoryStore for JsonlHistoryStore {
    fn save(&self, conversation: &Conversation) -> Result<(), Error> {
        let mut line = encode_record(conversation)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                self.fs.create_dir_all(parent)?;
            }
        }
        // 途中で切れた末尾行とつながらないようにする
        if matches!(self.fs.last_byte(&self.path)?, Some(b) if b != b'\n') {
            line.insert(0, '\n');
        }
        let mut w = self.fs.open_append(&self.path)?;
        w.write_all(line.as_bytes()).map_err(|e| {
            Error::io_msg(format!("Failed to append to '{}': {}", self.path, e))
        })?;
        w.flush()
            .map_err(|e| Error::io_msg(format!("Failed to flush '{}': {}", self.path, e)))?;
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Conversation>, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(Vec::new());
        }
        let content = self.fs.read(&self.path)?;
        let mut conversations = Vec::new();
        for (idx, raw) in content.split(|b| *b == b'\n').enumerate() {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let line = std::str::from_utf8(raw)
                .map_err(|e| Error::corrupt_record(idx + 1, e.to_string()))?;
            if line.trim().is_empty() {
                continue;
            }
            let record: Record = serde_json::from_str(line)
                .map_err(|e| Error::corrupt_record(idx + 1, e.to_string()))?;
            conversations.push(Conversation::restore(record.mode, record.messages));
        }
        Ok(conversations)
    }
}
