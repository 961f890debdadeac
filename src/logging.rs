// 詳細ログ（ファイル出力専用。標準出力には結果の1行だけを出す）

use anyhow::{anyhow, Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::constants::DEFAULT_LOG_PATH;
use crate::domain::search::SearchConfig;

/// グローバルな詳細ログフラグ
pub static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

/// ログファイルのグローバルハンドル
static LOG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);

/// ログファイルを初期化する
pub fn init_log_file(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("ログファイルを開けません: {}", path.display()))?;

    let mut log_file = LOG_FILE
        .lock()
        .map_err(|_| anyhow!("ログファイルのロックが壊れています"))?;
    *log_file = Some(file);
    Ok(())
}

/// 設定に従ってログを初期化する
pub fn init_from_config(config: &SearchConfig) -> Result<()> {
    if !config.verbose {
        disable_verbose_logging();
        return Ok(());
    }
    let path = config
        .log_path
        .as_deref()
        .unwrap_or_else(|| Path::new(DEFAULT_LOG_PATH));
    init_log_file(path)?;
    enable_verbose_logging();
    Ok(())
}

/// ログをファイルに書き込む
pub fn write_log(message: String) {
    if let Ok(mut log_file) = LOG_FILE.lock() {
        if let Some(ref mut file) = *log_file {
            let _ = writeln!(file, "{}", message);
            let _ = file.flush();
        }
    }
}

/// 詳細ログを有効にする
pub fn enable_verbose_logging() {
    VERBOSE_LOGGING.store(true, Ordering::Relaxed);
}

/// 詳細ログを無効にする
pub fn disable_verbose_logging() {
    VERBOSE_LOGGING.store(false, Ordering::Relaxed);
}

/// 詳細ログが有効かチェック
pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// 詳細ログ出力マクロ（ファイル出力）
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            let message = format!($($arg)*);
            $crate::logging::write_log(message);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_config_leaves_logging_disabled() {
        let config = SearchConfig::default();
        assert!(init_from_config(&config).is_ok());
        assert!(!is_verbose());
    }

    #[test]
    fn init_log_file_rejects_missing_directory() {
        let path = Path::new("/nonexistent-dir/nqueens/verbose.log");
        assert!(init_log_file(path).is_err());
    }
}
