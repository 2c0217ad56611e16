//! Inbound ポート（CLI → usecase の入口）

use crate::cli::Config;
use crate::error::Error;

/// 解析済み Config を受けて usecase を起動する
pub trait UseCaseRunner {
    fn run(&self, config: Config) -> Result<i32, Error>;
}
