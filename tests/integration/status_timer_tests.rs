//! Periodic status reporter tests with a simulated clock.
//!
//! The controller takes the current millisecond timestamp as an
//! argument, so these tests step time explicitly instead of sleeping.

use crate::mock_hw::{MockActuator, RecordingSink};
use centristub::app::service::Controller;
use centristub::config::StubConfig;

fn make_at(boot_ms: u32) -> (Controller, RecordingSink) {
    let mut ctrl = Controller::new(StubConfig::default());
    let mut hw = MockActuator::new();
    let mut sink = RecordingSink::new();
    ctrl.start(boot_ms, &mut hw, &mut sink);
    sink.clear();
    (ctrl, sink)
}

#[test]
fn emits_one_record_per_interval_without_commands() {
    let (mut ctrl, mut sink) = make_at(0);

    // Simulate 1 s of 10 ms loop iterations.
    for now in (0..=1000).step_by(10) {
        ctrl.poll_status(now, &mut sink);
    }

    assert_eq!(sink.lines.len(), 5, "one record per 200 ms over 1 s");
    for line in &sink.lines {
        assert_eq!(
            line,
            r#"{"state":"IDLE","currentRPM":0,"targetRPM":0,"pwm":0,"running":false}"#
        );
    }
}

#[test]
fn record_tracks_state_changes_between_intervals() {
    let (mut ctrl, mut sink) = make_at(0);
    let mut hw = MockActuator::new();

    ctrl.poll_status(200, &mut sink);
    ctrl.feed(b"START:1200:5000\n", &mut hw, &mut sink);
    ctrl.poll_status(400, &mut sink);

    assert_eq!(
        sink.lines,
        vec![
            r#"{"state":"IDLE","currentRPM":0,"targetRPM":0,"pwm":0,"running":false}"#,
            "ACK:START",
            "STATE:RUNNING",
            r#"{"state":"RUNNING","currentRPM":0,"targetRPM":0,"pwm":128,"running":true}"#,
        ]
    );
}

#[test]
fn no_record_before_first_interval_elapses() {
    let (mut ctrl, mut sink) = make_at(0);

    for now in (0..200).step_by(10) {
        ctrl.poll_status(now, &mut sink);
    }

    assert!(sink.lines.is_empty());
}

#[test]
fn reporter_keeps_firing_across_u32_wraparound() {
    let boot = u32::MAX - 300;
    let (mut ctrl, mut sink) = make_at(boot);

    // Step 10 ms at a time through the wrap point for two intervals.
    let mut now = boot;
    for _ in 0..60 {
        now = now.wrapping_add(10);
        ctrl.poll_status(now, &mut sink);
    }

    assert_eq!(sink.lines.len(), 3, "no stall and no burst at the wrap");
}

#[test]
fn status_command_does_not_reset_the_periodic_timer() {
    let (mut ctrl, mut sink) = make_at(0);
    let mut hw = MockActuator::new();

    // Synchronous STATUS halfway through the interval...
    ctrl.feed(b"STATUS\n", &mut hw, &mut sink);
    sink.clear();

    // ...does not delay the autonomous record.
    ctrl.poll_status(200, &mut sink);
    assert_eq!(sink.lines.len(), 1);
}
