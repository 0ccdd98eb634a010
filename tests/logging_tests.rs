use courier::setup_logging;

#[test]
fn test_logging_setup() {
    // setup_logging installs a global subscriber; the only thing worth
    // checking here is that the first call succeeds without panicking.
    let result = std::panic::catch_unwind(setup_logging);
    assert!(result.is_ok(), "setup_logging should not panic");
}
