//! 日志：终端被界面占用，所以只在设置了 `WTF_LOG_DIR` 时写到文件。
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub const LOG_DIR_VAR: &str = "WTF_LOG_DIR";

pub fn setup_tracing() {
    let Some(log_dir) = std::env::var_os(LOG_DIR_VAR).map(PathBuf::from) else {
        return;
    };
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let log_path = log_dir.join(format!("wtf.{}.log", std::process::id()));
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("wtf=debug,wtf_core=debug,wtf_source=debug,wtf_term=debug,info")
    });
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
