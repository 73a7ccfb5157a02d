//! Row view models handed to the rendering collaborator.
//!
//! [`RowTemplate`] describes how to create a row (fixed for the adapter's
//! lifetime); [`RowBinding`] describes what to show in one row at one
//! displayed position. Neither contains logic; they are computed by the
//! adapter and consumed by a [`RowRenderer`](crate::ui::renderer::RowRenderer).

use super::layout::RowLayout;
use super::theme::Color;

/// Style of a text slot.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
    /// Font name as the host understands it.
    pub font: String,
}

/// Fixed size of an image slot, in host pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSlot {
    pub width: u32,
    pub height: u32,
}

/// Row creation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RowTemplate {
    /// `None` when the configured layout was not recognized; such rows get a
    /// background but no slots.
    pub layout: Option<RowLayout>,
    pub background: Color,
    pub corner_radius: f32,
}

/// Slot contents for one row, shaped like its layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowContent {
    SingleText {
        main: String,
    },
    TwoText {
        main: String,
        detail: String,
    },
    TwoTextLinear {
        main: String,
        detail: String,
    },
    ImageSingleText {
        image: Option<String>,
        main: String,
    },
    ImageTwoText {
        image: Option<String>,
        main: String,
        detail: String,
    },
}

impl RowContent {
    #[must_use]
    pub fn main_text(&self) -> &str {
        match self {
            Self::SingleText { main }
            | Self::TwoText { main, .. }
            | Self::TwoTextLinear { main, .. }
            | Self::ImageSingleText { main, .. }
            | Self::ImageTwoText { main, .. } => main,
        }
    }

    /// Detail text, empty for layouts without a detail slot.
    #[must_use]
    pub fn detail_text(&self) -> &str {
        match self {
            Self::TwoText { detail, .. }
            | Self::TwoTextLinear { detail, .. }
            | Self::ImageTwoText { detail, .. } => detail,
            Self::SingleText { .. } | Self::ImageSingleText { .. } => "",
        }
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        match self {
            Self::ImageSingleText { image, .. } | Self::ImageTwoText { image, .. } => image.as_deref(),
            _ => None,
        }
    }
}

/// Everything needed to paint one displayed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowBinding {
    /// `None` when the layout is unrecognized.
    pub content: Option<RowContent>,
    /// Selection color if the row is selected, normal background otherwise.
    pub background: Color,
    pub is_selected: bool,
}

/// Rows whose binding went stale after an adapter operation.
///
/// Positions are displayed positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refresh {
    Nothing,
    Rows(Vec<usize>),
    All,
}

impl Refresh {
    /// Builds a row refresh, dropping duplicates and keeping ascending order.
    #[must_use]
    pub fn rows(positions: impl IntoIterator<Item = usize>) -> Self {
        let mut rows: Vec<usize> = positions.into_iter().collect();
        rows.sort_unstable();
        rows.dedup();
        if rows.is_empty() {
            Self::Nothing
        } else {
            Self::Rows(rows)
        }
    }

    #[must_use]
    pub fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }
}
