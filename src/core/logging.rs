//! Logger initialization

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the global logger once.
///
/// `filter` follows the `env_logger` syntax (e.g. "info",
/// "hostloop=debug,winit=warn"). Without one, `RUST_LOG` is used, and
/// without that, `info`. Later calls are ignored.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_logging(Some("warn"));
        init_logging(Some("trace"));
        assert!(INIT.is_completed());
    }
}
