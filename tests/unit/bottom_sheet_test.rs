//! Unit tests for the bottom sheet gesture handling.

use fitlog::ui::{BottomSheet, SheetState, SnapPoints};

fn two_point_sheet() -> BottomSheet {
    BottomSheet::new(SnapPoints::new(vec![0.4, 0.85]).unwrap(), true)
}

#[test]
fn test_full_gesture_sequence() {
    let mut sheet = two_point_sheet();
    let height = 1000.0;

    assert_eq!(sheet.open(), SheetState::Snapped(0));
    assert!((sheet.offset_for(sheet.state(), height) - 600.0).abs() < 1e-3);

    // Fling up to expand
    assert_eq!(sheet.release(-30.0, -1.2), SheetState::Snapped(1));

    // Hesitant drag down does nothing
    assert_eq!(sheet.release(60.0, 0.1), SheetState::Snapped(1));

    // Two long drags down collapse and then dismiss
    assert_eq!(sheet.release(250.0, 0.2), SheetState::Snapped(0));
    assert_eq!(sheet.release(250.0, 0.2), SheetState::Closed);
    assert_eq!(sheet.offset_for(sheet.state(), height), height);
}

#[test]
fn test_animation_runs_between_snap_points() {
    let mut sheet = two_point_sheet();
    let height = 1000.0;
    sheet.open();

    let from = sheet.offset_for(sheet.state(), height);
    let target_state = sheet.release(-150.0, 0.0);
    let mut spring = sheet.animation_to(target_state, from, height);

    let first = spring.step(1.0 / 60.0);
    assert!(first < from, "sheet should start moving up");

    let mut frames = 1;
    while !spring.is_settled() && frames < 600 {
        spring.step(1.0 / 60.0);
        frames += 1;
    }

    assert!(spring.is_settled());
    assert!((spring.position - 150.0).abs() < 0.5);
}
