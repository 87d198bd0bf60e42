/// Logger setup for the terminal host
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize `env_logger` once.
///
/// `filter` follows the `env_logger` syntax ("debug", "dice_core=trace").
/// Without one, `RUST_LOG` is consulted, then the level falls back to `warn`
/// since log lines share the terminal with the picture.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
