//! End-to-end scenarios: JSONL lines through the parser, store and panel.

use thinkview::parser::parse_snapshot;
use thinkview::reasoning::{DisplayState, ReasoningPanel};
use thinkview::state::{AppState, InputMode, MessageStore};

fn feed(store: &mut MessageStore, panel: &mut ReasoningPanel, line: &str) {
    let snapshot = parse_snapshot(line, 1).expect("valid snapshot");
    store.publish(snapshot, panel);
}

#[test]
fn scenario_a_running_without_reasoning_is_invisible() {
    let mut store = MessageStore::new();
    let mut panel = ReasoningPanel::new();
    feed(
        &mut store,
        &mut panel,
        r#"{"id":"m1","status":{"type":"running"},"content":[]}"#,
    );

    assert!(!panel.display_decision().visible);
}

#[test]
fn scenarios_b_through_d_user_close_then_finalize() {
    let mut store = MessageStore::new();
    let mut panel = ReasoningPanel::new();

    // B: streaming starts
    feed(
        &mut store,
        &mut panel,
        r#"{"id":"m1","status":{"type":"running"},"content":[{"type":"reasoning","text":"Step 1","status":{"type":"running"}}]}"#,
    );
    let decision = panel.display_decision();
    assert!(decision.open);
    assert!(decision.streaming_indicator);

    // C: user closes, stream continues
    panel.request_toggle();
    assert_eq!(
        panel.display_state(),
        DisplayState {
            open: false,
            user_override_active: true
        }
    );
    feed(
        &mut store,
        &mut panel,
        r#"{"id":"m1","status":{"type":"running"},"content":[{"type":"reasoning","text":"Step 1, more","status":{"type":"running"}}]}"#,
    );
    assert!(!panel.display_decision().open);

    // D: finalization clears the override
    feed(
        &mut store,
        &mut panel,
        r#"{"id":"m1","status":{"type":"complete"},"content":[{"type":"reasoning","text":"Step 1, more","status":{"type":"complete"}},{"type":"text","text":"Done"}]}"#,
    );
    assert_eq!(panel.display_state(), DisplayState::default());
    assert!(!panel.display_decision().streaming_indicator);
}

#[test]
fn scenario_e_finished_fragments_join_with_blank_line() {
    let mut store = MessageStore::new();
    let mut panel = ReasoningPanel::new();
    feed(
        &mut store,
        &mut panel,
        r#"{"status":"complete","content":[{"type":"reasoning","text":"A"},{"type":"text","text":"x"},{"type":"reasoning","text":"B"}]}"#,
    );

    let decision = panel.display_decision();
    assert!(decision.visible);
    assert!(!decision.open);
    assert_eq!(decision.text, "A\n\nB");
}

#[test]
fn new_message_starts_fresh_even_after_override() {
    let mut store = MessageStore::new();
    let mut panel = ReasoningPanel::new();
    feed(
        &mut store,
        &mut panel,
        r#"{"id":"m1","status":"running","content":[{"type":"reasoning","text":"a","status":"running"}]}"#,
    );
    panel.request_toggle();
    assert!(panel.display_state().user_override_active);

    feed(
        &mut store,
        &mut panel,
        r#"{"id":"m2","status":"running","content":[{"type":"reasoning","text":"b","status":"running"}]}"#,
    );

    // Fresh controller sees a rising edge and opens
    assert_eq!(
        panel.display_state(),
        DisplayState {
            open: true,
            user_override_active: false
        }
    );
    assert_eq!(panel.message_id().map(|id| id.as_str()), Some("m2"));
}

#[test]
fn app_state_counts_malformed_lines_and_keeps_going() {
    let mut state = AppState::new(InputMode::Static);
    let lines = vec![
        parse_snapshot("{not json", 1),
        parse_snapshot(
            r#"{"id":"m1","status":"running","content":[{"type":"reasoning","text":"ok","status":"running"}]}"#,
            2,
        ),
    ];

    let applied = state.ingest(lines);

    assert_eq!(applied, 1);
    assert_eq!(state.parse_error_count(), 1);
    assert_eq!(state.last_parse_error().map(|e| e.line()), Some(1));
    assert!(state.display_decision().open);
}
