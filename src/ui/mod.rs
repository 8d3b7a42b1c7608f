//! UI state that lives outside the rendering layer.

pub mod bottom_sheet;

pub use bottom_sheet::{BottomSheet, SheetError, SheetState, SnapPoints, SpringAnimation};
