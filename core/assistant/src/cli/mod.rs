//! CLI 引数の解析

pub mod args;

pub use args::{parse_args, parse_args_from, print_completion, print_help, Config, ParseOutcome};
