//! End-to-end dispatch tests: raw bytes in, protocol lines out.
//!
//! These drive the full byte → accumulator → dispatcher → actuator
//! path exactly the way the main loop does, asserting the responses
//! the desktop UI depends on.

use crate::mock_hw::{MockActuator, RecordingSink};
use centristub::app::service::{Controller, RunState};
use centristub::config::StubConfig;

fn make() -> (Controller, MockActuator, RecordingSink) {
    let mut ctrl = Controller::new(StubConfig::default());
    let mut hw = MockActuator::new();
    let mut sink = RecordingSink::new();
    ctrl.start(0, &mut hw, &mut sink);
    sink.clear();
    hw.writes.clear();
    (ctrl, hw, sink)
}

// ── Boot handshake ───────────────────────────────────────────

#[test]
fn start_emits_banner_and_zeroes_output() {
    let mut ctrl = Controller::new(StubConfig::default());
    let mut hw = MockActuator::new();
    let mut sink = RecordingSink::new();

    ctrl.start(0, &mut hw, &mut sink);

    assert_eq!(sink.lines, vec!["System Ready"]);
    assert_eq!(hw.writes, vec![0]);
}

// ── START / STATUS round trip ────────────────────────────────

#[test]
fn start_then_status_yields_running_record() {
    let (mut ctrl, mut hw, mut sink) = make();

    ctrl.feed(b"START:1000:500\n", &mut hw, &mut sink);
    ctrl.feed(b"STATUS\n", &mut hw, &mut sink);

    assert_eq!(
        sink.lines,
        vec![
            "ACK:START",
            "STATE:RUNNING",
            r#"{"state":"RUNNING","currentRPM":0,"targetRPM":0,"pwm":128,"running":true}"#,
        ]
    );
    assert_eq!(hw.last_write(), Some(128));
}

#[test]
fn start_payload_is_never_validated() {
    let (mut ctrl, mut hw, mut sink) = make();

    // Malformed, empty, and absurd payloads are all accepted.
    for cmd in ["START:\n", "START:-1:-1\n", "START:::::\n", "START:x\n"] {
        sink.clear();
        ctrl.feed(cmd.as_bytes(), &mut hw, &mut sink);
        assert_eq!(sink.lines, vec!["ACK:START", "STATE:RUNNING"], "cmd={cmd:?}");
        assert_eq!(ctrl.state(), RunState::Running);
    }
}

// ── STOP idempotence ─────────────────────────────────────────

#[test]
fn stop_while_idle_acks_and_rezeros() {
    let (mut ctrl, mut hw, mut sink) = make();

    ctrl.feed(b"STOP\n", &mut hw, &mut sink);
    ctrl.feed(b"STOP\n", &mut hw, &mut sink);

    assert_eq!(
        sink.lines,
        vec!["ACK:STOP", "STATE:IDLE", "ACK:STOP", "STATE:IDLE"]
    );
    assert_eq!(hw.writes, vec![0, 0], "output re-set to 0 on each STOP");
    assert_eq!(ctrl.state(), RunState::Idle);
}

#[test]
fn stop_after_start_returns_to_idle_record() {
    let (mut ctrl, mut hw, mut sink) = make();

    ctrl.feed(b"START:3000:60000\nSTOP\nSTATUS\n", &mut hw, &mut sink);

    assert_eq!(
        sink.lines.last().unwrap(),
        r#"{"state":"IDLE","currentRPM":0,"targetRPM":0,"pwm":0,"running":false}"#
    );
    assert_eq!(hw.last_write(), Some(0));
}

// ── PING / CLEAR_ERROR ───────────────────────────────────────

#[test]
fn ping_answers_pong_in_any_state() {
    let (mut ctrl, mut hw, mut sink) = make();

    ctrl.feed(b"PING\n", &mut hw, &mut sink);
    ctrl.feed(b"START:1:1\n", &mut hw, &mut sink);
    sink.clear();
    ctrl.feed(b"PING\n", &mut hw, &mut sink);

    assert_eq!(sink.lines, vec!["PONG"]);
}

#[test]
fn clear_error_is_acked_unconditionally() {
    let (mut ctrl, mut hw, mut sink) = make();

    ctrl.feed(b"CLEAR_ERROR\n", &mut hw, &mut sink);

    assert_eq!(sink.lines, vec!["ACK:CLEAR_ERROR"]);
    assert_eq!(ctrl.state(), RunState::Idle, "no state change");
    assert!(hw.writes.is_empty(), "no actuator side effect");
}

// ── Unknown commands ─────────────────────────────────────────

#[test]
fn unknown_command_echoes_trimmed_text_exactly() {
    let (mut ctrl, mut hw, mut sink) = make();

    ctrl.feed(b"  REBOOT NOW \r\n", &mut hw, &mut sink);

    assert_eq!(sink.lines, vec!["ERROR:UNKNOWN_COMMAND:REBOOT NOW"]);
    assert_eq!(ctrl.state(), RunState::Idle);
    assert!(hw.writes.is_empty());
}

#[test]
fn emergency_stop_is_not_part_of_the_stub_grammar() {
    // The richer controller understands EMERGENCY_STOP; this stub
    // reports it unknown so integrators notice the gap early.
    let (mut ctrl, mut hw, mut sink) = make();

    ctrl.feed(b"EMERGENCY_STOP\n", &mut hw, &mut sink);

    assert_eq!(sink.lines, vec!["ERROR:UNKNOWN_COMMAND:EMERGENCY_STOP"]);
}

// ── Fragmented delivery ──────────────────────────────────────

#[test]
fn fragmented_command_dispatched_exactly_once() {
    let (mut ctrl, mut hw, mut sink) = make();

    ctrl.feed(b"ST", &mut hw, &mut sink);
    assert!(sink.lines.is_empty(), "no dispatch before the terminator");

    ctrl.feed(b"ART:500:10\n", &mut hw, &mut sink);

    assert_eq!(sink.lines, vec!["ACK:START", "STATE:RUNNING"]);
    assert_eq!(hw.writes, vec![128], "one write, not one per fragment");
}

#[test]
fn byte_at_a_time_delivery_works() {
    let (mut ctrl, mut hw, mut sink) = make();

    for &b in b"PING\n" {
        ctrl.feed(&[b], &mut hw, &mut sink);
    }

    assert_eq!(sink.lines, vec!["PONG"]);
}
