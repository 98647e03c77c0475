//! Echo 返信生成器
//!
//! LLM を呼ばず、最後の user メッセージをそのまま返す。デバッグやテスト用。

use crate::domain::Conversation;
use crate::ports::outbound::ReplyGenerator;
use common::error::Error;

/// 会話に user メッセージが無いときの返信
pub const GREETING: &str = "Hello! How can I help you?";

/// Echo 返信生成器
#[derive(Debug, Clone, Default)]
pub struct EchoReplyGenerator;

impl EchoReplyGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReplyGenerator for EchoReplyGenerator {
    fn name(&self) -> &str {
        "echo"
    }

    fn generate(&self, conversation: &Conversation) -> Result<String, Error> {
        let last_user = conversation.last_user_message();
        if last_user.is_empty() {
            return Ok(GREETING.to_string());
        }
        Ok(format!("I hear you said: {}", last_user))
    }
}
