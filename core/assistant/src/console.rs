//! コンソールの対話ループ（ドライバ）
//!
//! 1 行読んでセッションに渡し、結果を表示する。EXIT か EOF で終わる。

use crate::domain::Outcome;
use crate::ports::inbound::HandleInput;
use common::error::Error;
use std::io::{BufRead, Write};

pub const BANNER: &str = "AI Assistant CLI\nType your messages. Commands: /exit, /history\n";
pub const PROMPT: &str = "You: ";
pub const FAREWELL: &str = "Goodbye";

/// 対話ループを回す。返信生成器のエラーはそのターンだけ表示して続行する。
pub fn run_console<R, W, E>(
    session: &mut dyn HandleInput,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    writeln!(out, "{}", BANNER)?;
    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            writeln!(out, "{}", FAREWELL)?;
            return Ok(());
        }

        match session.handle(&line) {
            Ok(Outcome::Exit) => {
                writeln!(out, "{}", FAREWELL)?;
                return Ok(());
            }
            Ok(Outcome::Text(text)) => {
                if !text.is_empty() {
                    writeln!(out, "AI: {}", text)?;
                }
            }
            Ok(Outcome::Unsaved { reply, error }) => {
                writeln!(out, "AI: {}", reply)?;
                writeln!(err, "Warning: history was not saved: {}", error)?;
            }
            Err(e) => {
                writeln!(err, "Error: {}", e)?;
            }
        }
    }
}
