//! Focused unit tests covering log subscriber setup.

use super::*;
use crate::logging::build_filter;
use rstest::rstest;
use tracing_subscriber::filter::LevelFilter;

#[rstest]
#[case::unset(None, LevelFilter::WARN)]
#[case::level(Some("debug"), LevelFilter::DEBUG)]
#[case::target(Some("fishcast_scorer=trace"), LevelFilter::TRACE)]
fn filter_follows_the_directives(
    #[case] directives: Option<&str>,
    #[case] expected: LevelFilter,
) {
    assert_eq!(build_filter(directives).max_level_hint(), Some(expected));
}

#[rstest]
fn installing_a_second_subscriber_fails() {
    // The first call may already fail if another test installed a subscriber.
    let _first = init_logging();
    match init_logging() {
        Err(CliError::Logging(_)) => {}
        other => panic!("expected CliError::Logging, found {other:?}"),
    }
}
