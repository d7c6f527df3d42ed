//! Simulated send tests.

use super::*;
use crate::error::UploaderError;
use crate::queue::CancelToken;
use crate::settings::UploaderSettings;
use web_time::Duration;

#[test]
fn test_send_all_items() {
    let mut uploader = uploader();
    let ids = add_staged(&mut uploader, &["a.png", "b.png", "c.png"]);

    let first = uploader.send(CancelToken::new()).unwrap();
    assert_eq!(first, SendStep::Scheduled(Duration::from_millis(500)));
    assert_eq!(uploader.dialog_state(), DialogState::Sending);
    assert_eq!(uploader.view().pending_count, 3);
    assert_eq!(uploader.view().sent_count, 0);
    for id in &ids {
        assert_eq!(uploader.view().item_state(*id), Some(ItemState::WillUpload));
    }

    let (summary, ticks) = run_send(&mut uploader, first);

    assert_eq!(summary.sent, 3);
    assert_eq!(summary.reverted, 0);
    assert!(!summary.cancelled);
    // Ten progress ticks per item plus one tick to start the next one
    assert_eq!(ticks, 33);
    assert_eq!(uploader.view().sent_count, 3);
    assert_eq!(uploader.queued(), 0);
    assert!(!uploader.is_sending());
    assert_eq!(uploader.count(), 0);
    assert_eq!(uploader.dialog_state(), DialogState::Empty);
    assert_eq!(uploader.view().discarded.len(), 3);
    assert_consistent(&uploader);
}

#[test]
fn test_queue_drains_head_first() {
    let mut uploader = uploader();
    let ids = add_staged(&mut uploader, &["a.png", "b.png"]);
    let grid_order = uploader.view().grid.clone();

    let first = uploader.send(CancelToken::new()).unwrap();
    run_send(&mut uploader, first);

    assert_eq!(uploader.view().discarded, grid_order);
    assert_eq!(grid_order, vec![ids[1], ids[0]]);
}

#[test]
fn test_progress_advances_in_steps() {
    let mut uploader = uploader();
    add_staged(&mut uploader, &["a.png"]);

    let first = uploader.send(CancelToken::new()).unwrap();
    assert_eq!(
        uploader.view().current_upload.as_ref().map(|(name, _)| name.as_str()),
        Some("a.png")
    );
    run_send(&mut uploader, first);

    let expected: Vec<u8> = std::iter::once(0)
        .chain((1..=10).map(|step| step * 10))
        .chain(std::iter::once(0))
        .collect();
    assert_eq!(uploader.view().progress, expected);
}

#[test]
fn test_custom_step_and_interval() {
    let setup = UploaderSetup {
        settings: UploaderSettings {
            tick_interval: Duration::from_millis(20),
            progress_step: 30,
        },
        ..Default::default()
    };
    let mut uploader = Uploader::new(RecordingView::default(), setup);
    add_staged(&mut uploader, &["a.png", "b.png"]);

    let first = uploader.send(CancelToken::new()).unwrap();
    assert_eq!(first, SendStep::Scheduled(Duration::from_millis(20)));
    let (summary, ticks) = run_send(&mut uploader, first);

    assert_eq!(summary.sent, 2);
    assert_eq!(ticks, 2 * (uploader.settings().ticks_per_item() as usize + 1));
    assert!(uploader.view().progress.contains(&100));
}

#[test]
fn test_zero_step_send_still_finishes() {
    let setup = UploaderSetup {
        settings: UploaderSettings {
            tick_interval: Duration::from_millis(1),
            progress_step: 0,
        },
        ..Default::default()
    };
    let mut uploader = Uploader::new(RecordingView::default(), setup);
    add_staged(&mut uploader, &["a.png"]);

    let first = uploader.send(CancelToken::new()).unwrap();
    let (summary, ticks) = run_send(&mut uploader, first);

    assert_eq!(summary.sent, 1);
    assert_eq!(uploader.settings().ticks_per_item(), 100);
    assert_eq!(ticks, uploader.settings().ticks_per_item() as usize + 1);
    assert_eq!(uploader.count(), 0);
}

#[test]
fn test_cancel_mid_send_reverts_remaining() {
    let mut uploader = uploader();
    let ids = add_staged(&mut uploader, &["a.png", "b.png", "c.png"]);
    let token = CancelToken::new();

    let mut step = uploader.send(token.clone()).unwrap();
    for _ in 0..15 {
        step = uploader.tick().unwrap();
    }
    assert!(!step.is_finished());
    assert_eq!(uploader.view().sent_count, 1);

    token.cancel();
    let SendStep::Finished(summary) = uploader.tick().unwrap() else {
        panic!("cancelled send should finish on the next tick");
    };

    assert!(summary.cancelled);
    assert_eq!(summary.sent, 1);
    assert_eq!(summary.reverted, 2);
    assert_eq!(uploader.count(), 2);
    assert_eq!(uploader.dialog_state(), DialogState::Collecting);
    assert!(uploader.item(ids[2]).is_none());
    for id in &ids[..2] {
        assert_eq!(uploader.item(*id).unwrap().state, ItemState::NeedsUpload);
        assert_eq!(uploader.view().item_state(*id), Some(ItemState::NeedsUpload));
    }
    assert_consistent(&uploader);
}

#[test]
fn test_cancel_through_controller() {
    let mut uploader = uploader();
    add_staged(&mut uploader, &["a.png"]);
    assert!(!uploader.cancel());

    uploader.send(CancelToken::new()).unwrap();
    assert!(uploader.cancel());

    let step = uploader.tick().unwrap();
    assert!(step.is_finished());
    assert_eq!(uploader.count(), 1);
    assert_eq!(uploader.dialog_state(), DialogState::Collecting);
}

#[test]
fn test_cancel_before_first_tick_sends_nothing() {
    let mut uploader = uploader();
    add_staged(&mut uploader, &["a.png", "b.png"]);
    let token = CancelToken::new();
    token.cancel();

    let step = uploader.send(token).unwrap();
    let SendStep::Finished(summary) = step else {
        panic!("pre-cancelled send should finish immediately");
    };
    assert_eq!(summary.sent, 0);
    assert_eq!(summary.reverted, 2);
    assert_eq!(uploader.count(), 2);
}

#[test]
fn test_send_with_nothing_staged() {
    let mut uploader = uploader();
    let step = uploader.send(CancelToken::new()).unwrap();

    assert!(step.is_finished());
    assert_eq!(uploader.dialog_state(), DialogState::Empty);
    assert!(matches!(
        uploader.tick(),
        Err(UploaderError::InvalidTransition(_))
    ));
}

#[test]
fn test_second_send_rejected_while_sending() {
    let mut uploader = uploader();
    add_staged(&mut uploader, &["a.png"]);
    uploader.send(CancelToken::new()).unwrap();

    let result = uploader.send(CancelToken::new());
    assert!(matches!(result, Err(UploaderError::InvalidTransition(_))));
    assert_eq!(uploader.queued(), 1);
}

#[test]
fn test_files_added_while_sending_stay_staged() {
    let mut uploader = uploader();
    add_staged(&mut uploader, &["a.png"]);
    let first = uploader.send(CancelToken::new()).unwrap();

    let late = add_staged(&mut uploader, &["late.png"])[0];
    assert_eq!(uploader.dialog_state(), DialogState::Sending);
    assert_eq!(uploader.count(), 2);

    let (summary, _) = run_send(&mut uploader, first);
    assert_eq!(summary.sent, 1);
    assert_eq!(uploader.item(late).unwrap().state, ItemState::NeedsUpload);
    assert_eq!(uploader.count(), 1);
    assert_eq!(uploader.dialog_state(), DialogState::Collecting);
}

#[test]
fn test_will_upload_item_cannot_be_removed() {
    let mut uploader = uploader();
    let id = add_staged(&mut uploader, &["a.png"])[0];
    uploader.send(CancelToken::new()).unwrap();

    assert!(matches!(
        uploader.remove_item(id),
        Err(UploaderError::InvalidTransition(_))
    ));
    assert_eq!(uploader.queued(), 1);
}

#[test]
fn test_full_dialog_walkthrough() {
    let mut uploader = uploader();
    let ids = add_staged(&mut uploader, &["a.png", "b.png", "c.png"]);
    assert_eq!(uploader.view().count_text, "3");
    assert_eq!(uploader.view().count_suffix, "s");

    uploader.remove_item(ids[0]).unwrap();
    assert_eq!(uploader.view().count_text, "2");
    assert!(uploader.view().undo_banner_visible);

    uploader.undo_remove();
    assert_eq!(uploader.view().count_text, "3");
    assert!(!uploader.view().undo_banner_visible);

    let first = uploader.send(CancelToken::new()).unwrap();
    run_send(&mut uploader, first);

    assert_eq!(uploader.view().count_text, "0");
    assert_eq!(uploader.view().state, DialogState::Empty);
    assert_consistent(&uploader);
}
