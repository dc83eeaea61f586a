use std::sync::atomic::Ordering;

use dioxus::prelude::WritableExt;

use omr_core::model::{OptionLabel, QuestionNumber};

use super::test_harness::{ViewKind, setup_view_harness};
use crate::vm::{BubbleId, SheetIntent};

fn bubble(question: u16, option: char) -> SheetIntent {
    SheetIntent::Select(BubbleId {
        question: QuestionNumber::new(question),
        option: OptionLabel::new(option),
    })
}

#[test]
fn prompt_view_smoke_renders_bounds_and_actions() {
    let mut harness = setup_view_harness(ViewKind::Prompt);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Number of Questions"), "missing title in {html}");
    assert!(
        html.contains("Enter number of questions (1-200):"),
        "missing label in {html}"
    );
    assert!(html.contains("OK"), "missing OK in {html}");
    assert!(html.contains("Cancel"), "missing Cancel in {html}");
    assert!(!harness.exit_requested.load(Ordering::Acquire));
}

#[test]
fn sheet_view_smoke_renders_rows_and_ovals() {
    let mut harness = setup_view_harness(ViewKind::Sheet(3));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("OMR Sheet (3 Questions)"), "missing header in {html}");
    for label in ["1.", "2.", "3."] {
        assert!(html.contains(label), "missing row {label} in {html}");
    }
    assert_eq!(html.matches("<ellipse").count(), 12, "expected 12 ovals in {html}");
    assert!(html.contains(r#"data-question="3""#));
    assert!(html.contains(r#"data-option="D""#));
    assert!(!html.contains("omr-bubble selected"), "nothing selected yet in {html}");
}

#[test]
fn sheet_view_smoke_starts_with_preview_hidden() {
    let mut harness = setup_view_harness(ViewKind::Sheet(12));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Show Answers"), "missing toggle in {html}");
    assert!(!html.contains("Your Selected Answers:"), "preview should be hidden in {html}");
    assert!(html.contains("Save Responses"), "missing save in {html}");
    assert!(html.contains("Reset All"), "missing reset in {html}");
    assert_eq!(harness.exports.write_count().unwrap(), 0);
}

#[test]
fn sheet_view_smoke_rejects_out_of_range_count() {
    let mut harness = setup_view_harness(ViewKind::Sheet(0));
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("number of questions must be between 1 and 200"),
        "missing error in {html}"
    );
    assert!(html.contains("Back"), "missing back link in {html}");
    assert!(!html.contains("<ellipse"));
}

#[test]
fn prompt_view_cancel_requests_exit_without_saving() {
    let mut harness = setup_view_harness(ViewKind::Prompt);
    harness.rebuild();

    let cancel = harness.prompt_handles.cancel();
    harness.fire(cancel, ());

    assert!(harness.exit_requested.load(Ordering::Acquire));
    assert_eq!(harness.exports.write_count().unwrap(), 0);
}

#[test]
fn prompt_view_keeps_dialog_open_on_bad_input() {
    let mut harness = setup_view_harness(ViewKind::Prompt);
    harness.rebuild();

    let mut input = harness.prompt_handles.input();
    let submit = harness.prompt_handles.submit();
    harness.dom.in_runtime(|| input.set("201".to_string()));
    harness.fire(submit, ());
    let html = harness.render();
    assert!(
        html.contains("number of questions must be between 1 and 200"),
        "missing range hint in {html}"
    );

    harness.dom.in_runtime(|| input.set("ten".to_string()));
    harness.fire(submit, ());
    let html = harness.render();
    assert!(html.contains("please enter a whole number"), "missing hint in {html}");
    assert!(html.contains("Number of Questions"), "dialog closed in {html}");
    assert!(!harness.exit_requested.load(Ordering::Acquire));
}

#[tokio::test(flavor = "current_thread")]
async fn sheet_view_saves_selected_answers_and_confirms() {
    let mut harness = setup_view_harness(ViewKind::Sheet(3));
    harness.rebuild();

    let dispatch = harness.sheet_handles.dispatch();
    harness.fire(dispatch, bubble(1, 'B'));
    harness.fire(dispatch, bubble(3, 'D'));

    let html = harness.render();
    assert_eq!(html.matches("omr-bubble selected").count(), 2, "two selected in {html}");

    let save = harness.sheet_handles.save();
    harness.fire(save, ());
    harness.drive_async().await;
    harness.drive_async().await;

    let expected = format!("1.B     \n2.-     \n3.D     \n{}", "\n".repeat(7));
    assert_eq!(harness.exports.last_export().unwrap(), Some(expected));
    assert_eq!(harness.exports.write_count().unwrap(), 1);

    let html = harness.render();
    assert!(html.contains("Responses saved to"), "missing save notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sheet_view_reset_and_toggle_update_preview() {
    let mut harness = setup_view_harness(ViewKind::Sheet(12));
    harness.rebuild();

    let dispatch = harness.sheet_handles.dispatch();
    harness.fire(dispatch, bubble(1, 'C'));
    harness.fire(dispatch, bubble(11, 'A'));
    harness.fire(dispatch, SheetIntent::TogglePreview);

    let html = harness.render();
    assert!(html.contains("Your Selected Answers:"), "preview hidden in {html}");
    assert!(html.contains("Hide Answers"), "toggle label not flipped in {html}");
    assert!(html.contains("1.C"), "missing 1.C in {html}");
    assert!(html.contains("11.A"), "missing 11.A in {html}");

    harness.fire(dispatch, SheetIntent::Reset);

    let html = harness.render();
    assert!(html.contains("1.-"), "reset preview missing 1.- in {html}");
    assert!(html.contains("11.-"), "reset preview missing 11.- in {html}");
    assert!(!html.contains("1.C"), "stale answer in {html}");
    assert!(!html.contains("omr-bubble selected"), "stale selection in {html}");

    harness.fire(dispatch, SheetIntent::TogglePreview);
    let html = harness.render();
    assert!(!html.contains("Your Selected Answers:"), "preview still shown in {html}");
    assert!(html.contains("Show Answers"), "toggle label not restored in {html}");
    harness.drive_async().await;
    assert_eq!(harness.exports.write_count().unwrap(), 0);
}
