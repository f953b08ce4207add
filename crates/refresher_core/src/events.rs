//! Scroll observation events
//!
//! A host scroll container reports two signals: the content offset moved, or
//! the content size changed. Both are delivered serially on the main queue.

use smallvec::SmallVec;

use crate::geometry::{Point, Size};

/// Event identifier fed to `StateTransitions::on_event`
pub type EventId = u32;

/// Explicit refresh API events
pub mod refresh_events {
    use super::EventId;

    /// `begin_refreshing()` was called (directly or by a pull past the threshold)
    pub const BEGIN: EventId = 1;
    /// Loading finished, more data may follow
    pub const END: EventId = 2;
    /// Loading finished and the data source is exhausted
    pub const END_NO_MORE_DATA: EventId = 3;
    /// Re-arm triggering after no-more-data
    pub const RESET: EventId = 4;
}

/// An observed change on the host scroll container
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollEvent {
    OffsetChanged { old: Point, new: Point },
    ContentSizeChanged { old: Size, new: Size },
}

/// Small buffer of pending events (a drag usually produces one or two per frame)
pub type ScrollEvents = SmallVec<[ScrollEvent; 4]>;
