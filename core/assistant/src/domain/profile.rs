//! 返信生成器のプロファイル

/// 返信生成器の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Echo（最後の user メッセージを返すだけ）
    Echo,
    /// OpenAI Chat Completions 互換 (/chat/completions)
    OpenAiCompat,
}

impl Profile {
    /// 文字列からプロファイルを解析
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "echo" => Some(Self::Echo),
            "openai_compat" | "openai" => Some(Self::OpenAiCompat),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Echo => "echo",
            Self::OpenAiCompat => "openai_compat",
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::Echo
    }
}
