//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup, after the config is resolved.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Initialise the global tracing subscriber.
///
/// `level` accepts standard level strings (`"error"` … `"trace"`) or a full
/// `EnvFilter` directive such as `"info,hyper=warn"`.
///
/// If `prefer_level` is `true`, `level` wins and `RUST_LOG` is only a
/// fallback when `level` does not parse. Otherwise `RUST_LOG` wins.
pub fn init(level: &str, prefer_level: bool) -> Result<(), AppError> {
    let filter = if prefer_level {
        match EnvFilter::try_new(level) {
            Ok(filter) => filter,
            Err(level_err) => EnvFilter::try_from_default_env().map_err(|env_err| {
                AppError::Logger(format!(
                    "invalid log level '{level}': {level_err}; RUST_LOG parse failed: {env_err}"
                ))
            })?,
        }
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .map_err(|e| AppError::Logger(format!("invalid log level '{level}': {e}")))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))?;

    Ok(())
}

/// Count of `v`s in a `-v`/`-vv`/… flag, saturating at `u8::MAX`.
/// `None` when `arg` is not such a flag.
pub fn verbose_flag_count(arg: &str) -> Option<u8> {
    let vs = arg.strip_prefix('-')?;
    if vs.is_empty() || !vs.chars().all(|c| c == 'v') {
        return None;
    }
    Some(u8::try_from(vs.len()).unwrap_or(u8::MAX))
}

/// Level selected by `verbosity` command-line flags; `None` keeps the config.
pub fn level_for_verbosity(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        3 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Validate a bare level string before it reaches [`init`].
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_levels_parse() {
        for l in &["error", "warn", "info", "debug", "trace"] {
            assert!(parse_level(l).is_ok(), "expected '{l}' to be valid");
        }
    }

    #[test]
    fn invalid_level_errors() {
        assert!(parse_level("chatty").is_err());
        assert!(parse_level("").is_err());
    }

    #[test]
    fn verbose_flags_count_vs() {
        assert_eq!(verbose_flag_count("-v"), Some(1));
        assert_eq!(verbose_flag_count("-vvv"), Some(3));
        assert_eq!(verbose_flag_count("-"), None);
        assert_eq!(verbose_flag_count("-vx"), None);
        assert_eq!(verbose_flag_count("--verbose"), None);
    }

    #[test]
    fn long_verbose_flag_saturates() {
        let flag = format!("-{}", "v".repeat(300));
        assert_eq!(verbose_flag_count(&flag), Some(u8::MAX));
        assert_eq!(level_for_verbosity(u8::MAX), Some("trace"));
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for_verbosity(0), None);
        assert_eq!(level_for_verbosity(1), Some("warn"));
        assert_eq!(level_for_verbosity(2), Some("info"));
        assert_eq!(level_for_verbosity(3), Some("debug"));
        assert_eq!(level_for_verbosity(4), Some("trace"));
    }

    #[test]
    fn init_succeeds_or_already_init() {
        // Another test in this process may have installed the subscriber first.
        match init("info", true) {
            Ok(()) => {}
            Err(AppError::Logger(msg)) if msg.contains("set subscriber") => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}
