//! 会話（モード + メッセージ列）のドメイン型
//!
//! メッセージ列は追記のみ。並べ替え・削除・書き換えの操作は持たない。
//! mode は生成時に一度だけ決まり、以後変わらない。

use super::{Message, Role};
use serde::Serialize;

/// 返信生成器や外部 API に渡す 1 メッセージ分の射影（role は文字列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayloadMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

/// 1 セッション分の会話
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    mode: String,
    messages: Vec<Message>,
}

impl Conversation {
    /// 空の会話を開始する
    pub fn new(mode: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            messages: Vec::new(),
        }
    }

    /// 永続化済みのレコードから会話を組み立て直す
    pub fn restore(mode: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            mode: mode.into(),
            messages,
        }
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn add_user_message(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    pub fn add_assistant_message(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    pub fn add_system_message(&mut self, content: impl Into<String>) {
        self.messages.push(Message::system(content));
    }

    /// 組み立て済みの Message を末尾に追加する
    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// 最後の user メッセージ。無ければ空文字。
    pub fn last_user_message(&self) -> &str {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role() == Role::User)
            .map(Message::content)
            .unwrap_or("")
    }

    /// 全メッセージを順序どおり {role, content} に射影する
    pub fn to_payload(&self) -> Vec<PayloadMessage<'_>> {
        self.messages
            .iter()
            .map(|m| PayloadMessage {
                role: m.role().as_str(),
                content: m.content(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_conversation_is_empty() {
        let conv = Conversation::new("chat");
        assert_eq!(conv.mode(), "chat");
        assert!(conv.is_empty());
        assert_eq!(conv.len(), 0);
    }

    #[test]
    fn test_conversation_adds_messages_in_order() {
        let mut conv = Conversation::new("chat");
        conv.add_user_message("Hi");
        conv.add_assistant_message("Hello, how can I help you?");

        assert_eq!(conv.len(), 2);
        assert_eq!(conv.messages()[0].role(), Role::User);
        assert_eq!(conv.messages()[0].content(), "Hi");
        assert_eq!(conv.messages()[1].role(), Role::Assistant);
        assert!(conv.messages()[1].content().contains("help"));
    }

    #[test]
    fn test_add_message_appends_prebuilt_message() {
        let mut conv = Conversation::new("chat");
        conv.add_system_message("rules");
        conv.add_message(Message::user("question"));
        assert_eq!(conv.messages().last(), Some(&Message::user("question")));
        assert_eq!(conv.messages()[0], Message::system("rules"));
    }

    #[test]
    fn test_empty_content_is_kept() {
        let mut conv = Conversation::new("chat");
        conv.add_user_message("");
        assert_eq!(conv.len(), 1);
        assert_eq!(conv.messages()[0].content(), "");
    }

    #[test]
    fn test_last_user_message_on_empty_conversation() {
        let conv = Conversation::new("chat");
        assert_eq!(conv.last_user_message(), "");
    }

    #[test]
    fn test_last_user_message_skips_later_assistant_messages() {
        let mut conv = Conversation::new("chat");
        conv.add_user_message("first");
        conv.add_assistant_message("reply 1");
        conv.add_user_message("second");
        conv.add_assistant_message("reply 2");
        conv.add_system_message("note");
        assert_eq!(conv.last_user_message(), "second");
    }

    #[test]
    fn test_last_user_message_without_user_role() {
        let mut conv = Conversation::new("chat");
        conv.add_system_message("You are helpful.");
        conv.add_assistant_message("Hello!");
        assert_eq!(conv.last_user_message(), "");
    }

    #[test]
    fn test_conversation_as_payload_for_ai() {
        let mut conv = Conversation::new("coder");
        conv.add_system_message("You are a helpful coding assistant.");
        conv.add_user_message("Explain iterator adapters in Rust.");

        let payload = conv.to_payload();

        assert_eq!(payload.len(), 2);
        assert_eq!(payload[0].role, "system");
        assert!(payload[0].content.contains("coding assistant"));
        assert_eq!(payload[1].role, "user");
        assert!(payload[1].content.contains("iterator adapters"));
        // 射影は会話を変更しない
        assert_eq!(conv.len(), 2);
    }

    #[test]
    fn test_payload_serializes_as_role_content_objects() {
        let mut conv = Conversation::new("chat");
        conv.add_user_message("Hi");
        let json = serde_json::to_value(conv.to_payload()).unwrap();
        assert_eq!(json, serde_json::json!([{"role": "user", "content": "Hi"}]));
    }

    #[test]
    fn test_restore_keeps_mode_and_order() {
        let conv = Conversation::restore(
            "translator",
            vec![Message::user("a"), Message::assistant("b")],
        );
        assert_eq!(conv.mode(), "translator");
        assert_eq!(conv.messages()[1], Message::assistant("b"));
    }
}
