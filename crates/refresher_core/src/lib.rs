//! Refresher Core
//!
//! Foundational primitives for scroll-container refresh controls:
//!
//! - **Geometry**: points, sizes, rects and edge insets in scroll coordinates
//! - **Scroll Events**: the offset and content-size signals a host delivers
//! - **Refresh State**: the idle / refreshing / no-more-data transition table
//! - **Host Seam**: the `ScrollContainer` trait a platform scroll view implements
//! - **Main Queue**: a single-threaded deferral queue for post-layout work
//!
//! # Example
//!
//! ```rust
//! use refresher_core::events::refresh_events;
//! use refresher_core::{RefreshState, StateTransitions};
//!
//! let state = RefreshState::Idle;
//! let next = state.on_event(refresh_events::BEGIN);
//! assert_eq!(next, Some(RefreshState::Refreshing));
//!
//! // Ending only applies while refreshing
//! assert_eq!(state.on_event(refresh_events::END), None);
//! ```

pub mod config;
pub mod container;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod geometry;
pub mod state;

pub use config::FooterConfig;
pub use container::{ScrollContainer, SharedScrollContainer, WeakScrollContainer};
pub use dispatch::MainQueue;
pub use error::{RefresherError, Result};
pub use events::{ScrollEvent, ScrollEvents};
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use state::{RefreshState, StateTransitions};
