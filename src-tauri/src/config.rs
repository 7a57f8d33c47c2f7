/// Application-level constants
pub const APP_NAME: &str = "RuralHealth";
pub const APP_TAGLINE: &str = "Healthcare Made Accessible";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Footer line shown on every screen.
pub const EMERGENCY_FOOTER: &str = "For emergencies, call 108 immediately.";

/// Log filter used when `RUST_LOG` is not set.
/// Debug builds log the app crate at debug level.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "ruralhealth_lib=debug,warn"
    } else {
        "ruralhealth_lib=info,warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_ruralhealth() {
        assert_eq!(APP_NAME, "RuralHealth");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_parses() {
        let filter = tracing_subscriber::EnvFilter::try_new(default_log_filter());
        assert!(filter.is_ok());
        assert!(default_log_filter().starts_with("ruralhealth_lib="));
    }
}
