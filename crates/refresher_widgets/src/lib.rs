//! Refresher Widgets
//!
//! Refresh controls that decorate a scroll container.
//!
//! - [`FooterRefresher`]: "load more" footer pinned below the content
//! - [`RefreshAnimator`]: capability the footer drives with state and progress
//! - [`ArrowIndicator`]: stock animator (rotating arrow, spinner, label)
//! - [`ScrollView`]: in-memory scroll container for headless hosts and tests
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//!
//! use refresher_core::{MainQueue, RefreshState, ScrollContainer, SharedScrollContainer, Size};
//! use refresher_widgets::{ArrowIndicator, FooterRefresher, ScrollView};
//!
//! let queue = MainQueue::new();
//! let view = Arc::new(Mutex::new(ScrollView::new(Size::new(320.0, 600.0))));
//! view.lock().unwrap().set_content_size(Size::new(320.0, 1000.0));
//!
//! let footer = FooterRefresher::new(ArrowIndicator::default());
//! let container: SharedScrollContainer = view.clone();
//! footer.attach(&container, &queue);
//! queue.run_pending();
//!
//! // The footer sits below the content and reserves its height
//! assert_eq!(footer.frame().y(), 1000.0);
//! assert_eq!(view.lock().unwrap().content_inset().bottom, 50.0);
//!
//! footer.begin_refreshing();
//! assert_eq!(footer.state(), RefreshState::Refreshing);
//! ```

pub mod animator;
pub mod footer;
pub mod indicator;
pub mod scroll_view;

pub use animator::RefreshAnimator;
pub use footer::{pull_progress, trigger_distance, FooterRefresher};
pub use indicator::{ArrowIndicator, IndicatorModel, LabelSet};
pub use scroll_view::{ScrollPhase, ScrollView};
