//! セッション（入力 1 行のディスパッチ）
//!
//! 1 つの会話を所有し、入力行をコマンドかチャットに振り分ける。
//! チャットのターンごとに会話の全状態を履歴ストアへ保存する。
//!
//! 保存に失敗しても返信は呼び出し側に返す（`Outcome::Unsaved`）。
//! 返信生成器のエラーはそのターンの `Err` としてそのまま返す。

use crate::domain::{Conversation, Outcome, SessionCommand};
use crate::ports::inbound::HandleInput;
use crate::ports::outbound::{HistoryStore, ReplyGenerator};
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

/// 履歴が 1 件も無いときの /history の出力
pub const EMPTY_HISTORY: &str = "(no history yet)";
/// 未知のコマンドへの返答
pub const UNKNOWN_COMMAND: &str = "Unknown command. Try typing a message, /history, or /exit.";

/// 保存済みの全会話を "<Role>: <content>" の行に平坦化する
pub fn render_history(conversations: &[Conversation]) -> String {
    let lines: Vec<String> = conversations
        .iter()
        .flat_map(|c| c.messages())
        .map(|m| format!("{}: {}", m.role().label(), m.content()))
        .collect();
    if lines.is_empty() {
        EMPTY_HISTORY.to_string()
    } else {
        lines.join("\n")
    }
}

/// 対話セッション
///
/// 返信生成器と履歴ストアは開始時に決まり、セッション中は変わらない。
pub struct Session {
    generator: Arc<dyn ReplyGenerator>,
    store: Arc<dyn HistoryStore>,
    log: Arc<dyn Log>,
    conversation: Conversation,
}

impl Session {
    /// 指定モードの空の会話でセッションを開始する
    pub fn start(
        generator: Arc<dyn ReplyGenerator>,
        store: Arc<dyn HistoryStore>,
        log: Arc<dyn Log>,
        mode: impl Into<String>,
    ) -> Self {
        let conversation = Conversation::new(mode);
        let session = Self {
            generator,
            store,
            log,
            conversation,
        };
        session.emit(
            LogRecord::new(LogLevel::Info, "session started")
                .kind("lifecycle")
                .field("mode", session.conversation.mode())
                .field("generator", session.generator.name()),
        );
        session
    }

    /// 現在の会話（読み取り専用）
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// 入力 1 行を処理して表示用の結果を返す
    pub fn handle(&mut self, line: &str) -> Result<Outcome, Error> {
        let text = line.trim();
        if text.is_empty() {
            return Ok(Outcome::Text(String::new()));
        }
        if text.starts_with('/') {
            return self.run_command(SessionCommand::parse(text));
        }
        self.chat_turn(text)
    }

    fn run_command(&self, command: SessionCommand) -> Result<Outcome, Error> {
        self.emit(
            LogRecord::new(LogLevel::Info, "command")
                .kind("command")
                .field("command", command.name()),
        );
        match command {
            SessionCommand::Exit => Ok(Outcome::EXIT),
            SessionCommand::History => {
                let conversations = self.store.load_all().map_err(|e| {
                    self.emit(
                        LogRecord::new(LogLevel::Error, "history load failed")
                            .kind("history")
                            .field("error", e.to_string()),
                    );
                    e
                })?;
                self.emit(
                    LogRecord::new(LogLevel::Debug, "history loaded")
                        .kind("history")
                        .field("records", conversations.len()),
                );
                Ok(Outcome::Text(render_history(&conversations)))
            }
            SessionCommand::Unknown(_) => Ok(Outcome::Text(UNKNOWN_COMMAND.to_string())),
        }
    }

    fn chat_turn(&mut self, text: &str) -> Result<Outcome, Error> {
        self.conversation.add_user_message(text);
        let reply = self.generator.generate(&self.conversation)?;
        self.conversation.add_assistant_message(reply.clone());
        self.emit(
            LogRecord::new(LogLevel::Info, "chat turn")
                .kind("turn")
                .field("messages", self.conversation.len()),
        );

        match self.store.save(&self.conversation) {
            Ok(()) => {
                self.emit(LogRecord::new(LogLevel::Debug, "history saved").kind("history"));
                Ok(Outcome::Text(reply))
            }
            Err(error) => {
                self.emit(
                    LogRecord::new(LogLevel::Error, "history save failed")
                        .kind("history")
                        .field("error", error.to_string()),
                );
                Ok(Outcome::Unsaved { reply, error })
            }
        }
    }

    /// ログの失敗でターンを止めない
    fn emit(&self, record: LogRecord) {
        let _ = self.log.log(&record.layer("usecase"));
    }
}

impl HandleInput for Session {
    fn handle(&mut self, line: &str) -> Result<Outcome, Error> {
        Session::handle(self, line)
    }
}
