mod support;

use mosaic_core::history::{strip_markers, with_markers};
use mosaic_core::layout::column_width;
use mosaic_core::{
    Breakpoints, LightboxController, MasonryLayout, PlaybackPeriods, ScrollDemand, ScrollMetrics,
};
use support::{image, images, RecordingScheduler};

/// Page through a gallery while the lightbox stays open on one slide
#[test]
fn test_pagination_feeds_open_lightbox() {
    let mut sequence = images(20);
    let mut demand = ScrollDemand::default();
    let mut lightbox =
        LightboxController::new(RecordingScheduler::default(), PlaybackPeriods::default());

    demand.observe_data_length(sequence.len());
    lightbox.open(19, &sequence, true).unwrap();

    let near_bottom = ScrollMetrics {
        scroll_top: 4200.0,
        viewport_height: 900.0,
        content_height: 6000.0,
    };
    assert!(demand.should_request(near_bottom, true));
    // Scroll events keep arriving while the page loads
    assert!(!demand.should_request(near_bottom, true));

    sequence.extend((20..40).map(image));
    demand.observe_data_length(sequence.len());
    assert_eq!(lightbox.sync_items(&sequence), 20);
    assert_eq!(lightbox.current_index(), Some(19));
    assert_eq!(lightbox.next(), Some(20));

    // Last page
    assert!(!demand.should_request(near_bottom, false));
}

#[test]
fn test_grid_layout_for_container() {
    let mut sequence = images(9);
    sequence[4].thumbnail_w = 0;
    let breakpoints = Breakpoints::default();

    let columns = breakpoints.columns_for(1200.0);
    assert_eq!(columns, 4);
    let width = column_width(1200.0, columns, 15.0);

    let layout = MasonryLayout::pack(
        sequence.iter().map(|d| d.thumbnail_aspect_ratio()),
        columns,
        width,
        15.0,
    );
    assert_eq!(layout.len(), 9);
    assert_eq!(layout.column_count(), 4);
    assert!(sequence[4].thumbnail_height_for(width).is_finite());
}

#[test]
fn test_history_round_trip() {
    let initial = strip_markers("#search&gid=3&pid=7").into_owned();
    assert_eq!(initial, "#search");

    let open = with_markers(&initial, 1, 11);
    assert_eq!(open, "#search&gid=1&pid=12");
    assert_eq!(strip_markers(&open), initial);
}
