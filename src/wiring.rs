//! 標準アダプターの組み立て（依存の注入は全てここで行う）

use std::sync::Arc;

use crate::adapter::{
    log_file_from_env, EnvApiKey, FileJsonLog, NoopLog, OpenAiChatCompletion, PromptlabConfig,
    StderrLog, StdioConsole,
};
use crate::ports::outbound::{ApiKeyResolver, ChatCompletion, Console, Log};
use crate::usecase::{PlaygroundDeps, PlaygroundUseCase, SessionDeps, SessionUseCase};

pub struct App {
    pub session: Arc<SessionUseCase>,
    pub logger: Arc<dyn Log>,
}

/// 設定から標準アダプターで App を組み立てる。
/// プロバイダクライアントはここで 1 度だけ構築して注入する（モジュール静的状態は持たない）。
pub fn wire_promptlab(config: &PromptlabConfig, verbose: bool) -> App {
    let logger: Arc<dyn Log> = match log_file_from_env() {
        Some(path) => Arc::new(FileJsonLog::new(path)),
        None if verbose => Arc::new(StderrLog),
        None => Arc::new(NoopLog),
    };

    let api_key: Arc<dyn ApiKeyResolver> = Arc::new(EnvApiKey::new(&config.api_key_env));
    let chat: Arc<dyn ChatCompletion> = Arc::new(OpenAiChatCompletion::new(
        config.model.clone(),
        config.base_url.clone(),
        api_key.clone(),
    ));
    let playground = Arc::new(PlaygroundUseCase::new(PlaygroundDeps {
        chat,
        api_key,
        log: logger.clone(),
        generation: config.generation,
        refinement: config.refinement,
    }));

    let console: Arc<dyn Console> = Arc::new(StdioConsole::new());
    let session = Arc::new(SessionUseCase::new(SessionDeps {
        playground,
        console,
        log: logger.clone(),
    }));

    App { session, logger }
}
