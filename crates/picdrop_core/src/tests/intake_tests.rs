//! File intake and selection tests.

use super::*;
use crate::error::UploaderError;
use crate::settings::Capabilities;
use crate::uploader::Intake;

#[test]
fn test_tentative_item_not_counted_until_thumbnail() {
    let mut uploader = uploader();
    let intake = uploader.add_file(&png("cat.png")).unwrap();
    let id = intake.id();

    assert!(matches!(intake, Intake::AwaitingThumbnail(_)));
    assert_eq!(uploader.count(), 0);
    assert_eq!(uploader.dialog_state(), DialogState::Empty);
    assert_eq!(uploader.view().grid, vec![id]);
    assert_eq!(uploader.view().item_state(id), Some(ItemState::Pending));
    assert_eq!(uploader.view().items[&id].thumbnail, Thumbnail::Loading);

    uploader
        .thumbnail_ready(id, Some("data:image/png;base64,AAAA".to_string()))
        .unwrap();

    assert_eq!(uploader.count(), 1);
    assert_eq!(uploader.view().count_text, "1");
    assert_eq!(uploader.view().count_suffix, "");
    assert_eq!(uploader.dialog_state(), DialogState::Collecting);
    assert_eq!(uploader.view().item_state(id), Some(ItemState::NeedsUpload));
    assert_eq!(
        uploader.view().items[&id].thumbnail,
        Thumbnail::DataUrl("data:image/png;base64,AAAA".to_string())
    );
    assert_consistent(&uploader);
}

#[test]
fn test_failed_read_uses_placeholder() {
    let mut uploader = uploader();
    let id = uploader.add_file(&png("cat.png")).unwrap().id();
    uploader.thumbnail_ready(id, None).unwrap();

    assert_eq!(uploader.item(id).unwrap().thumbnail, Thumbnail::Placeholder);
    assert_eq!(uploader.count(), 1);
}

#[test]
fn test_duplicate_thumbnail_rejected() {
    let mut uploader = uploader();
    let id = add_staged(&mut uploader, &["cat.png"])[0];

    let result = uploader.thumbnail_ready(id, None);
    assert!(matches!(result, Err(UploaderError::InvalidTransition(_))));
    assert_eq!(uploader.count(), 1);
}

#[test]
fn test_no_thumbnail_reader_stages_immediately() {
    let setup = UploaderSetup {
        capabilities: Capabilities {
            thumbnail_reader: false,
            class_lookup: true,
        },
        ..Default::default()
    };
    let mut uploader = Uploader::new(RecordingView::default(), setup);

    let intake = uploader.add_file(&png("cat.png")).unwrap();
    assert!(matches!(intake, Intake::Staged(_)));
    assert_eq!(uploader.count(), 1);
    assert_eq!(
        uploader.item(intake.id()).unwrap().thumbnail,
        Thumbnail::Placeholder
    );
}

#[test]
fn test_non_image_rejected_rest_of_batch_continues() {
    let mut uploader = uploader();
    let files = vec![
        png("a.png"),
        FileInfo::new("notes.txt", "text/plain"),
        FileInfo::new("mystery", ""),
        png("b.png"),
    ];

    let intakes = uploader.add_files(&files);
    assert_eq!(intakes.len(), 2);
    assert_eq!(uploader.grid().unwrap().len(), 2);
    assert_eq!(uploader.warnings().len(), 2);
    assert_eq!(
        uploader.view().warning.as_deref(),
        Some("mystery may not be an image (no mime type). Will not add it.")
    );
}

#[test]
fn test_missing_grid_refuses_items() {
    let setup = UploaderSetup {
        has_grid: false,
        ..Default::default()
    };
    let mut uploader = Uploader::new(RecordingView::default(), setup);

    let result = uploader.add_file(&png("cat.png"));
    assert!(matches!(result, Err(UploaderError::StructureMissing { .. })));
    assert_eq!(uploader.count(), 0);
    assert!(uploader.view().items.is_empty());
    assert!(
        uploader
            .view()
            .warning
            .as_deref()
            .is_some_and(|w| w.contains("internal structure"))
    );
}

#[test]
fn test_missing_grid_warns_once_per_batch() {
    let setup = UploaderSetup {
        has_grid: false,
        ..Default::default()
    };
    let mut uploader = Uploader::new(RecordingView::default(), setup);

    let files = [png("a.png"), png("b.png"), png("c.png")];
    let intakes = uploader.add_files(&files);

    assert!(intakes.is_empty());
    assert_eq!(uploader.warnings().len(), 1);
}

#[test]
fn test_dismiss_warning_clears_panel() {
    let mut uploader = uploader();
    let _ = uploader.add_file(&FileInfo::new("a.txt", "text/plain"));
    let _ = uploader.add_file(&FileInfo::new("b.txt", "text/plain"));

    uploader.dismiss_warning();
    assert_eq!(
        uploader.view().warning.as_deref(),
        Some("a.txt is not an image file - will not add")
    );

    uploader.dismiss_warning();
    assert_eq!(uploader.view().warning, None);
    assert!(uploader.warnings().is_empty());
}

#[test]
fn test_click_selects_exclusively() {
    let mut uploader = uploader();
    let ids = add_staged(&mut uploader, &["a.png", "b.png", "c.png"]);

    uploader.click_item(ids[0], false).unwrap();
    uploader.click_item(ids[1], false).unwrap();

    assert_eq!(uploader.selection(), &[ids[1]]);
    assert!(!uploader.view().items[&ids[0]].selected);
    assert!(uploader.view().items[&ids[1]].selected);
    assert_consistent(&uploader);
}

#[test]
fn test_modifier_click_is_additive() {
    let mut uploader = uploader();
    let ids = add_staged(&mut uploader, &["a.png", "b.png", "c.png"]);

    uploader.click_item(ids[0], false).unwrap();
    uploader.click_item(ids[2], true).unwrap();
    uploader.click_item(ids[2], true).unwrap();

    assert_eq!(uploader.selection(), &[ids[0], ids[2]]);
    assert_consistent(&uploader);
}

#[test]
fn test_will_upload_items_cannot_be_selected() {
    let mut uploader = uploader();
    let ids = add_staged(&mut uploader, &["a.png", "b.png"]);
    uploader.click_item(ids[0], false).unwrap();

    uploader.send(crate::CancelToken::new()).unwrap();
    assert!(uploader.selection().is_empty());

    uploader.click_item(ids[1], false).unwrap();
    assert!(uploader.selection().is_empty());
    assert!(!uploader.item(ids[1]).unwrap().selected);
    assert_consistent(&uploader);
}

#[test]
fn test_click_unknown_item() {
    let mut uploader = uploader();
    assert_eq!(
        uploader.click_item(ItemId(99), false),
        Err(UploaderError::UnknownItem(ItemId(99)))
    );
}
