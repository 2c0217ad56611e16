//! Log ポートの実装（JSONL ファイル / stderr / noop）

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};

/// ファイルへ JSONL を 1 行ずつ追記する Log 実装
pub struct FileJsonLog {
    path: PathBuf,
}

impl FileJsonLog {
    /// 親ディレクトリが無ければ書き込み時に作成する
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| Error::io_msg(e.to_string()))?;
            }
        }
        let line = serde_json::to_string(record).map_err(|e| Error::json(e.to_string()))?;
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io_msg(e.to_string()))?;
        f.write_all(line.as_bytes())
            .map_err(|e| Error::io_msg(e.to_string()))?;
        f.write_all(b"\n").map_err(|e| Error::io_msg(e.to_string()))?;
        Ok(())
    }
}

/// stderr に要点だけを整形して出す Log 実装（-v 用）
pub struct StderrLog;

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let level = match record.level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        match &record.fields {
            Some(fields) => eprintln!(
                "[{}] {} {}",
                level,
                record.message,
                serde_json::json!(fields)
            ),
            None => eprintln!("[{}] {}", level, record.message),
        }
        Ok(())
    }
}

/// 何も出力しない Log 実装
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}
