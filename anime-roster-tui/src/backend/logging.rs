//! 日志初始化
//!
//! stdout 由 ratatui 占用，日志写入本地数据目录下的文件。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// 本 workspace 的 crate，RUST_LOG 未设置时以 info 级别记录
const CRATES: [&str; 3] = [
    "anime_roster_tui",
    "anime_roster_core",
    "anime_roster_provider",
];

/// 日志文件路径
fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("anime-roster-tui").join("anime-roster.log"))
}

/// 初始化日志，返回日志文件路径
///
/// 无法打开日志文件时不启用日志。
pub fn init_logging() -> Option<PathBuf> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let mut builder = if std::env::var("RUST_LOG").is_ok() {
        Builder::from_default_env()
    } else {
        default_builder()
    };

    builder
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .ok()?;

    log::info!("Logging to {}", path.display());
    Some(path)
}

fn default_builder() -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Warn);
    for name in CRATES {
        builder.filter_module(name, LevelFilter::Info);
    }
    builder
}
