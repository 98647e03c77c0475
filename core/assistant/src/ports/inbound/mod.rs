//! Inbound ポート: ドライバがセッションを呼び出すインターフェース

use crate::domain::Outcome;
use common::error::Error;

/// 1 行の入力を処理する Inbound ポート
///
/// 呼び出し側は前の呼び出しが返るまで次を呼ばない（再入不可）。
pub trait HandleInput {
    fn handle(&mut self, line: &str) -> Result<Outcome, Error>;
}
