use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Shift the configured filter by `-v`/`-q` counts; an untouched filter is returned as is
pub fn filter_for(configured: &str, verbose: u8, quiet: u8) -> String {
    if verbose == 0 && quiet == 0 {
        return configured.to_string();
    }

    let base = LEVELS
        .iter()
        .position(|level| configured.eq_ignore_ascii_case(level))
        .unwrap_or(2) as i32;
    let shifted = (base + verbose as i32 - quiet as i32).clamp(0, LEVELS.len() as i32 - 1);
    LEVELS[shifted as usize].to_string()
}

/// Logs go to stderr so that reports on stdout stay clean
pub fn init_tracing(filter: &str, format: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if format.eq_ignore_ascii_case("json") {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_shifts_level() {
        assert_eq!(filter_for("info", 1, 0), "debug");
        assert_eq!(filter_for("info", 5, 0), "trace");
        assert_eq!(filter_for("info", 0, 2), "error");
        assert_eq!(filter_for("warn", 1, 1), "warn");
    }

    #[test]
    fn directives_survive_without_flags() {
        assert_eq!(filter_for("tango_core=debug,info", 0, 0), "tango_core=debug,info");
        assert_eq!(filter_for("tango_core=debug,info", 1, 0), "debug");
    }
}
