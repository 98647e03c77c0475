use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::path::PathBuf;

/// 既定の会話モード
pub const DEFAULT_MODE: &str = "chat";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -m / --mode: 会話モード（chat, coder, translator, explainer 等）
    pub mode: String,
    /// -p / --profile: 返信生成器（echo, openai_compat）
    pub profile: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    /// --history: 履歴ファイル（未指定なら環境変数から解決）
    pub history: Option<PathBuf>,
    /// --log-file: JSONL ログの出力先
    pub log_file: Option<PathBuf>,
    /// --no-log: ログを出さない
    pub no_log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            mode: DEFAULT_MODE.to_string(),
            profile: None,
            model: None,
            base_url: None,
            history: None,
            log_file: None,
            no_log: false,
        }
    }
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("assistant")
        .about("Interactive AI assistant session (commands: /history, /exit)")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("mode")
                .short('m')
                .long("mode")
                .value_name("mode")
                .help("Conversation mode (chat, coder, translator, explainer)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("profile")
                .help("Reply generator profile (echo, openai_compat)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .long("model")
                .value_name("model")
                .help("Model name for model-backed profiles (env: ASSISTANT_MODEL)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("base-url")
                .long("base-url")
                .value_name("url")
                .help("Base URL for openai_compat (env: ASSISTANT_BASE_URL)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("history")
                .long("history")
                .value_name("path")
                .help("History file (default: $ASSISTANT_HOME/history.jsonl or ./history.jsonl)")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("log-file")
                .long("log-file")
                .value_name("path")
                .help("JSONL log file")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("no-log")
                .long("no-log")
                .help("Disable the JSONL log")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate-completion")
                .long("generate-completion")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        mode: matches
            .get_one::<String>("mode")
            .cloned()
            .unwrap_or_else(|| DEFAULT_MODE.to_string()),
        profile: matches.get_one::<String>("profile").cloned(),
        model: matches.get_one::<String>("model").cloned(),
        base_url: matches.get_one::<String>("base-url").cloned(),
        history: matches.get_one::<PathBuf>("history").cloned(),
        log_file: matches.get_one::<PathBuf>("log-file").cloned(),
        no_log: matches.get_flag("no-log"),
    }
}

fn matches_to_outcome(matches: &clap::ArgMatches) -> ParseOutcome {
    if let Some(&shell) = matches.get_one::<Shell>("generate-completion") {
        return ParseOutcome::GenerateCompletion(shell);
    }
    ParseOutcome::Config(matches_to_config(matches))
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_outcome(&matches))
}

/// 引数スライスから解析する（先頭はプログラム名）
pub fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_outcome(&matches))
}

/// ヘルプを標準出力に出力する。
pub fn print_help() {
    let mut cmd = build_clap_command();
    println!("{}", cmd.render_help());
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "assistant", &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_of(args: &[&str]) -> Config {
        match parse_args_from(args.iter().copied()).unwrap() {
            ParseOutcome::Config(c) => c,
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.help);
        assert_eq!(config.mode, "chat");
        assert!(config.profile.is_none());
        assert!(config.history.is_none());
        assert!(!config.no_log);
    }

    #[test]
    fn test_no_args_is_default_config() {
        assert_eq!(config_of(&["assistant"]), Config::default());
    }

    #[test]
    fn test_all_options() {
        let config = config_of(&[
            "assistant",
            "-m",
            "coder",
            "-p",
            "openai_compat",
            "--model",
            "gpt-4o",
            "--base-url",
            "http://localhost:8080/v1",
            "--history",
            "/tmp/h.jsonl",
            "--log-file",
            "/tmp/log.jsonl",
            "--no-log",
        ]);
        assert_eq!(config.mode, "coder");
        assert_eq!(config.profile.as_deref(), Some("openai_compat"));
        assert_eq!(config.model.as_deref(), Some("gpt-4o"));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080/v1"));
        assert_eq!(config.history, Some(PathBuf::from("/tmp/h.jsonl")));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/log.jsonl")));
        assert!(config.no_log);
    }

    #[test]
    fn test_help_flag() {
        assert!(config_of(&["assistant", "-h"]).help);
    }

    #[test]
    fn test_generate_completion() {
        let outcome = parse_args_from(["assistant", "--generate-completion", "bash"]).unwrap();
        assert!(matches!(outcome, ParseOutcome::GenerateCompletion(Shell::Bash)));
    }

    #[test]
    fn test_unknown_flag_is_invalid_argument() {
        let err = parse_args_from(["assistant", "--bogus"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }
}
