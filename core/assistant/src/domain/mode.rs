//! 会話モード
//!
//! セッションにとって mode は不透明な文字列。モデル付きの返信生成器だけが
//! 既知のモードを system 指示に変換する。

/// モードに対応する system 指示。未知のモードと "chat" は None。
pub fn system_instruction_for_mode(mode: &str) -> Option<&'static str> {
    match mode {
        "coder" => Some(
            "You are a helpful coding assistant. Answer with concise explanations and working code.",
        ),
        "translator" => Some(
            "You are a translator. Translate the user's message and reply with the translation only.",
        ),
        "explainer" => Some(
            "You are a patient tutor. Explain the user's topic step by step in plain language.",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_modes_have_instructions() {
        for mode in ["coder", "translator", "explainer"] {
            assert!(system_instruction_for_mode(mode).is_some(), "{}", mode);
        }
    }

    #[test]
    fn test_chat_and_unknown_modes_have_none() {
        assert_eq!(system_instruction_for_mode("chat"), None);
        assert_eq!(system_instruction_for_mode("pirate"), None);
    }
}
