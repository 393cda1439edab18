//! View constants (layout/sizing).

pub(crate) const TITLE: &str = "தேடலும் பாடலும்";

pub(crate) const PLAYER_H: f32 = 84.0;

pub(crate) const SIDEBAR_W: f32 = 260.0;
pub(crate) const PLAYLIST_W: f32 = 340.0;

pub(crate) const LABEL_W: f32 = 170.0;
pub(crate) const COUNT_W: f32 = 36.0;

// text sizes
pub(crate) const TITLE_TEXT: f32 = 22.0;
pub(crate) const SECTION_TEXT: f32 = 16.0;
pub(crate) const ROW_TEXT: f32 = 13.0;
pub(crate) const SMALL_TEXT: f32 = 11.0;

// rows
pub(crate) const ROW_H: f32 = 24.0;
pub(crate) const ROW_VPAD: f32 = 2.0;
pub(crate) const ROW_HPAD: f32 = 6.0;
pub(crate) const LIST_SPACING: f32 = 1.0;

/// Widest text bar, in block characters.
pub(crate) const BAR_CELLS: usize = 24;
pub(crate) const COMPACT_BAR_CELLS: usize = 14;

/// Compact layout's song list height.
pub(crate) const COMPACT_LIST_H: f32 = 320.0;
