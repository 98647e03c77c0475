//! 配線: 設定と標準アダプタからセッションを組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdFileSystem};
use common::domain::HistoryPath;
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem, Log};

use crate::adapter::{
    openai_compat_reply::DEFAULT_API_KEY_ENV, EchoReplyGenerator, JsonlHistoryStore,
    OpenAiCompatReplyGenerator,
};
use crate::cli::Config;
use crate::domain::Profile;
use crate::ports::outbound::{HistoryStore, ReplyGenerator};
use crate::usecase::Session;

/// 組み立て済みのアプリケーション
pub struct App {
    pub session: Session,
    pub log: Arc<dyn Log>,
    pub history_path: HistoryPath,
}

/// プロファイル（-p）から返信生成器を作る。未指定なら echo。
pub fn create_generator(
    config: &Config,
    env: &dyn EnvResolver,
) -> Result<Arc<dyn ReplyGenerator>, Error> {
    let profile = match config.profile.as_deref() {
        Some(name) => Profile::parse(name).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Unknown profile '{}'. Available: echo, openai_compat",
                name
            ))
        })?,
        None => Profile::default(),
    };
    match profile {
        Profile::Echo => Ok(Arc::new(EchoReplyGenerator::new())),
        Profile::OpenAiCompat => {
            let model = config.model.clone().or_else(|| env.var("ASSISTANT_MODEL"));
            let base_url = config
                .base_url
                .clone()
                .or_else(|| env.var("ASSISTANT_BASE_URL"));
            let generator = OpenAiCompatReplyGenerator::new(
                model,
                base_url,
                Some(DEFAULT_API_KEY_ENV.to_string()),
            )?;
            Ok(Arc::new(generator))
        }
    }
}

/// ログ出力先を決める（--no-log > --log-file > 環境変数 > 無効）
pub fn create_log(config: &Config, env: &dyn EnvResolver, fs: Arc<dyn FileSystem>) -> Arc<dyn Log> {
    if config.no_log {
        return Arc::new(NoopLog);
    }
    match config.log_file.clone().or_else(|| env.resolve_log_path()) {
        Some(path) => Arc::new(FileJsonLog::new(fs, path)),
        None => Arc::new(NoopLog),
    }
}

/// 配線: 設定と環境からセッションを組み立てる
pub fn wire_app(config: &Config, env: &dyn EnvResolver) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let generator = create_generator(config, env)?;
    let history_path = match &config.history {
        Some(p) => HistoryPath::new(p.clone()),
        None => env.resolve_history_path()?,
    };
    let store: Arc<dyn HistoryStore> = Arc::new(JsonlHistoryStore::new(
        Arc::clone(&fs),
        history_path.clone(),
    ));
    let log = create_log(config, env, fs);
    let session = Session::start(generator, store, Arc::clone(&log), config.mode.clone());
    Ok(App {
        session,
        log,
        history_path,
    })
}
