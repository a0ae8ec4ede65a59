// tests/logging.rs
//
// The log sink appends to photocat.log in the working directory and tags
// every line with a level and an elapsed stamp.

use std::fs;
use std::process;

use photocat::{logf, loge};

#[test]
fn log_lines_carry_session_marker_level_and_stamp() {
    let token = format!("log-smoke-{}", process::id());
    logf!("Test: {}", token);
    loge!("Test: {} failure path", token);

    let text = fs::read_to_string("photocat.log").expect("log file should exist");

    assert!(text.contains("==== photocat session ===="));

    let info = text
        .lines()
        .find(|l| l.contains("[INFO]") && l.contains(&token))
        .expect("info line should be present");
    // stamp prefix: [hh:mm:ss.mmm]
    assert!(info.starts_with('['));
    assert_eq!(&info[3..4], ":");
    assert_eq!(&info[9..10], ".");

    assert!(text
        .lines()
        .any(|l| l.contains("[ERROR]") && l.contains("failure path")));
}
