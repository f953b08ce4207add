//! Host scroll container seam
//!
//! Refresh controls never own the scroll view they decorate. They read its
//! geometry and write back the content inset and, occasionally, the content
//! offset through this trait.

use std::sync::{Arc, Mutex, Weak};

use crate::geometry::{EdgeInsets, Point, Size};

/// A scrollable container hosting a refresh control
pub trait ScrollContainer {
    /// Current scroll position
    fn content_offset(&self) -> Point;

    /// Move the scroll position immediately
    fn set_content_offset(&mut self, offset: Point);

    /// Move the scroll position over `duration_ms`
    ///
    /// Hosts without animation support may apply the offset immediately.
    fn set_content_offset_animated(&mut self, offset: Point, duration_ms: u32);

    /// Size of the scrollable content
    fn content_size(&self) -> Size;

    /// Size of the visible viewport
    fn bounds_size(&self) -> Size;

    /// Insets set by the application and refresh controls
    fn content_inset(&self) -> EdgeInsets;

    fn set_content_inset(&mut self, inset: EdgeInsets);

    /// Top inset as the platform actually applies it
    ///
    /// Platforms that add safe-area or bar insets on top of `content_inset`
    /// override this; the default is the raw top inset.
    fn effective_top_inset(&self) -> f32 {
        self.content_inset().top
    }

    /// True while the container is coasting after the user lifted their finger
    fn is_decelerating(&self) -> bool;
}

/// Shared handle to a host container
pub type SharedScrollContainer = Arc<Mutex<dyn ScrollContainer + Send>>;

/// Non-owning handle to a host container
pub type WeakScrollContainer = Weak<Mutex<dyn ScrollContainer + Send>>;
