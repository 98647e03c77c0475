//! アシスタント共通ライブラリ
//!
//! `assistant` コマンドで使うエラー型・ポート・標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Ports & Adapters のポート定義
pub mod ports;

/// 標準アダプタ（std::fs / std::env / ファイルログ）
pub mod adapter;
