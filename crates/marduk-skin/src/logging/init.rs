use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "marduk_skin=debug,wgpu=warn").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Filter precedence: `config.env_filter`, then
/// `RUST_LOG`, then `info`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);

        // `try_init` so a logger installed by a host application wins.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(LoggingConfig {
            env_filter: Some("marduk_skin=trace".to_string()),
            ..LoggingConfig::default()
        });
        init_logging(LoggingConfig::default());
        log::trace!("still alive after second init");
    }
}
