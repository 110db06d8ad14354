use tracing::Level;
use crate::core::domain::Configuration;

pub fn parse_level(level: &str) -> Level {
    level.trim().parse::<Level>().unwrap_or(Level::WARN)
}

pub fn setup_tracing(config: &Configuration) {
    tracing_subscriber::fmt()
        .with_max_level(parse_level(config.log_level.as_str()))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        // stdout belongs to the menu, so log records go to stderr.
        .with_writer(std::io::stderr)
        .json()
        .init();
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use tracing::level_filters::LevelFilter;
    use crate::core::domain::Configuration;
    use crate::utils::logs::parse_level;

    #[test]
    fn test_should_parse_levels() {
        assert_eq!(Level::INFO, parse_level("info"));
        assert_eq!(Level::DEBUG, parse_level("DEBUG"));
        assert_eq!(Level::WARN, parse_level("warn"));
        assert_eq!(Level::WARN, parse_level("chatty"));
    }

    #[test]
    fn test_should_keep_default_console_quiet() {
        let filter = LevelFilter::from_level(parse_level(Configuration::new("main").log_level.as_str()));
        // rejected requests and events log below this, publish failures at it
        assert!(Level::DEBUG > filter);
        assert!(Level::INFO > filter);
        assert!(Level::WARN <= filter);
    }
}
