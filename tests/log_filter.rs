use copyplay::cli::LogLevel;
use copyplay::logging::select_filter;
use tracing_subscriber::filter::LevelFilter;

#[test]
fn cli_level_wins_over_environment() {
    let filter = select_filter(Some(LogLevel::Debug), Some("error"));
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
}

#[test]
fn environment_directive_used_without_cli_level() {
    let filter = select_filter(None, Some("warn"));
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

    let filter = select_filter(None, Some("copyplay=trace"));
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
}

#[test]
fn defaults_to_info() {
    assert_eq!(select_filter(None, None).max_level_hint(), Some(LevelFilter::INFO));
    assert_eq!(select_filter(None, Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
    assert_eq!(
        select_filter(None, Some("copyplay=loud")).max_level_hint(),
        Some(LevelFilter::INFO)
    );
}
