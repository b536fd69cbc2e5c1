use log::LevelFilter;

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax (e.g. "glint_engine=trace").
/// When unset, `RUST_LOG` is consulted, then `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }
}

/// Installs the global logger.
///
/// Returns `false` when a logger was already installed (by an earlier call or
/// by someone else); that is not an error.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut builder = env_logger::Builder::new();

    match config.env_filter {
        Some(filter) => {
            builder.parse_filters(&filter);
        }
        None => match std::env::var("RUST_LOG") {
            Ok(filter) => {
                builder.parse_filters(&filter);
            }
            Err(_) => {
                builder.filter_level(config.default_level);
            }
        },
    }

    builder.write_style(config.write_style);

    let installed = builder.try_init().is_ok();
    if installed {
        log::debug!("logging initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_tolerated() {
        // The first call may lose to another test; the second never wins.
        let _ = init_logging(LoggingConfig::with_filter("warn"));
        assert!(!init_logging(LoggingConfig::default()));
    }
}
