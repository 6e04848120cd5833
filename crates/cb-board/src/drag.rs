use cb_core::{CaseStatus, StageColumn};

/// What the pointer is over during a drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragTarget {
    /// The body of a column
    Column(StageColumn),
    /// Another card, identified by id
    Card(String),
    /// The trash/complete drop zone
    Sink,
}

/// Insertion side relative to a hovered card's vertical midpoint
///
/// Computed by the rendering layer from the pointer position and the hovered
/// card's bounding box; the engine only consumes the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

/// What the sink does to a card, fixed once at drag start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkMode {
    /// Session began in the last column: the sink completes the case
    Complete,
    /// Any other origin: the sink trashes the case
    Delete,
}

impl SinkMode {
    pub fn for_origin(origin: StageColumn) -> Self {
        if origin == StageColumn::last() {
            Self::Complete
        } else {
            Self::Delete
        }
    }

    pub fn terminal_status(&self) -> CaseStatus {
        match self {
            Self::Complete => CaseStatus::Completed,
            Self::Delete => CaseStatus::Deleted,
        }
    }
}

/// One in-progress card drag, from pointer-down to drop or cancel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub card_id: String,
    /// Column the drag started from; fixed for the whole session and used
    /// for policy decisions even as the card is provisionally relocated.
    pub origin: StageColumn,
    /// Column the card currently sits in, updated on every hover preview
    pub current: StageColumn,
    pub sink_mode: SinkMode,
}

impl DragSession {
    pub fn begin(card_id: impl Into<String>, origin: StageColumn) -> Self {
        Self {
            card_id: card_id.into(),
            origin,
            current: origin,
            sink_mode: SinkMode::for_origin(origin),
        }
    }
}
