//! テスト用のポート実装

use crate::domain::Conversation;
use crate::ports::outbound::{HistoryStore, ReplyGenerator};
use common::error::Error;
use common::ports::outbound::{Log, LogRecord};
use std::sync::Mutex;

/// "AI: <最後の user メッセージ>" を返し、見せられた会話を記録する
#[derive(Default)]
pub struct ScriptedGenerator {
    pub seen: Mutex<Vec<Conversation>>,
}

impl ScriptedGenerator {
    pub fn last_prompt(&self) -> Option<String> {
        self.seen
            .lock()
            .unwrap()
            .last()
            .map(|c| c.last_user_message().to_string())
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl ReplyGenerator for ScriptedGenerator {
    fn name(&self) -> &str {
        "scripted"
    }

    fn generate(&self, conversation: &Conversation) -> Result<String, Error> {
        self.seen.lock().unwrap().push(conversation.clone());
        Ok(format!("AI: {}", conversation.last_user_message()))
    }
}

/// 常に失敗する返信生成器
pub struct FailingGenerator;

impl ReplyGenerator for FailingGenerator {
    fn name(&self) -> &str {
        "failing"
    }

    fn generate(&self, _conversation: &Conversation) -> Result<String, Error> {
        Err(Error::http("backend down"))
    }
}

/// メモリ上の履歴ストア
#[derive(Default)]
pub struct MemoryHistoryStore {
    pub saved: Mutex<Vec<Conversation>>,
}

impl MemoryHistoryStore {
    pub fn saved_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn save(&self, conversation: &Conversation) -> Result<(), Error> {
        self.saved.lock().unwrap().push(conversation.clone());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Conversation>, Error> {
        Ok(self.saved.lock().unwrap().clone())
    }
}

/// 保存も読み込みも失敗する履歴ストア
pub struct BrokenHistoryStore;

impl HistoryStore for BrokenHistoryStore {
    fn save(&self, _conversation: &Conversation) -> Result<(), Error> {
        Err(Error::io_msg("disk full"))
    }

    fn load_all(&self) -> Result<Vec<Conversation>, Error> {
        Err(Error::corrupt_record(2, "unknown variant `ai`"))
    }
}

/// 受け取ったレコードを保持する Log
#[derive(Default)]
pub struct RecordingLog {
    pub records: Mutex<Vec<LogRecord>>,
}

impl RecordingLog {
    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }
}

impl Log for RecordingLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
