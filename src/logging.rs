//! ログ初期化
//!
//! 起動時に一度だけ呼ぶ。`RUST_LOG` があればそちらを優先する。

use tracing_subscriber::EnvFilter;

pub fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    // テストなどで二重初期化された場合は既存のものを使う
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
