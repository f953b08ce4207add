//! Footer "load more" refresh control
//!
//! The footer sits directly below the scroll container's content. Pulling the
//! content up past the footer's height plus the animator's trigger distance
//! starts a refresh; the data source ends it when the next page has loaded.
//!
//! # Example
//!
//! ```rust,ignore
//! let footer = FooterRefresher::new(ArrowIndicator::default());
//! footer.set_refresh_handler(move || load_next_page());
//! footer.attach(&container, &queue);
//!
//! // host event loop
//! let events = view.lock().unwrap().drain_events();
//! footer.handle_events(events);
//!
//! // data source callback
//! footer.end_refreshing();
//! ```
//!
//! # Inset and position
//!
//! While visible the footer adds its height to the container's bottom inset so
//! it never covers content. While hidden it claims nothing. Its top edge always
//! tracks the content height, hidden or not.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use refresher_core::events::{refresh_events, EventId};
use refresher_core::{
    EdgeInsets, FooterConfig, MainQueue, Rect, RefreshState, Result, RefresherError,
    ScrollContainer, ScrollEvent, SharedScrollContainer, StateTransitions, WeakScrollContainer,
};

use crate::animator::RefreshAnimator;

/// The "load more" action, run once a refresh has started
pub type RefreshHandler = Arc<dyn Fn() + Send + Sync>;

/// Cleanup run against the old container right before detaching
pub type DetachHook = Box<dyn FnMut(&mut dyn ScrollContainer) + Send>;

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Pull distance past the bottom edge of the content
///
/// Zero when the last row rests at the bottom of the viewport, positive as the
/// user drags the content further up. For content shorter than the viewport
/// this is the distance pulled from the rest position.
pub fn trigger_distance(view: &dyn ScrollContainer) -> f32 {
    let content_height = view.content_size().height;
    let viewport_height = view.bounds_size().height;

    let mut distance = view.content_offset().y + view.effective_top_inset();
    if content_height + view.content_inset().top > viewport_height {
        distance += viewport_height - content_height;
    }
    distance
}

/// Pull progress toward `distance`, clamped to 0.0..=1.0
///
/// A non-positive threshold counts as fully pulled.
pub fn pull_progress(trigger_distance: f32, distance: f32) -> f32 {
    if distance.is_nan() || distance <= 0.0 {
        return 1.0;
    }
    let ratio = trigger_distance / distance;
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

struct FooterInner {
    container: Option<WeakScrollContainer>,
    /// Neutral container inset, excluding this footer's contribution
    scroll_view_inset: EdgeInsets,
    state: RefreshState,
    animator: Box<dyn RefreshAnimator + Send>,
    frame: Rect,
    hidden: bool,
    progress: f32,
    correction_duration_ms: u32,
    capture_inset_on_attach: bool,
    refresh_handler: Option<RefreshHandler>,
    will_detach: Option<DetachHook>,
}

impl FooterInner {
    fn container(&self) -> Option<SharedScrollContainer> {
        self.container.as_ref().and_then(Weak::upgrade)
    }

    /// Apply a transition event; returns true if the state changed
    fn transition(&mut self, event: EventId) -> bool {
        match self.state.on_event(event) {
            Some(next) => self.set_state(next),
            None => false,
        }
    }

    fn set_state(&mut self, state: RefreshState) -> bool {
        if self.state == state {
            return false;
        }
        tracing::debug!(from = ?self.state, to = ?state, "footer state");
        self.state = state;
        self.update_content_inset();
        self.update_footer_top();
        self.animator.update_state(state);
        true
    }

    fn update_content_inset(&mut self) {
        let Some(container) = self.container() else {
            return;
        };
        let bottom = if self.hidden {
            self.scroll_view_inset.bottom
        } else {
            self.scroll_view_inset.bottom + self.frame.height()
        };

        let mut view = lock(&container);
        let inset = view.content_inset();
        if inset.bottom != bottom {
            view.set_content_inset(inset.with_bottom(bottom));
        }
    }

    fn update_footer_top(&mut self) {
        let top = match self.container() {
            Some(container) => {
                // Bound so the guard drops before `container`
                let height = lock(&container).content_size().height;
                height
            }
            None => 0.0,
        };
        if self.frame.origin.y != top {
            self.frame.origin.y = top;
        }
    }

    fn report_progress(&mut self, progress: f32) {
        self.progress = progress;
        self.animator.update_progress(progress);
    }
}

/// Footer refresh control
///
/// Cloning yields another handle to the same footer.
#[derive(Clone)]
pub struct FooterRefresher {
    inner: Arc<Mutex<FooterInner>>,
}

impl FooterRefresher {
    /// Create a footer with the default configuration
    pub fn new(animator: impl RefreshAnimator + Send + 'static) -> Self {
        Self::build(FooterConfig::default(), Box::new(animator))
    }

    /// Create a footer from a validated configuration
    pub fn with_config(
        config: FooterConfig,
        animator: impl RefreshAnimator + Send + 'static,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, Box::new(animator)))
    }

    fn build(config: FooterConfig, mut animator: Box<dyn RefreshAnimator + Send>) -> Self {
        animator.update_state(RefreshState::Idle);
        Self {
            inner: Arc::new(Mutex::new(FooterInner {
                container: None,
                scroll_view_inset: config.base_inset,
                state: RefreshState::Idle,
                animator,
                frame: Rect::new(0.0, 0.0, 0.0, config.height),
                hidden: config.hidden,
                progress: 0.0,
                correction_duration_ms: config.correction_duration_ms,
                capture_inset_on_attach: config.capture_inset_on_attach,
                refresh_handler: None,
                will_detach: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FooterInner> {
        lock(&self.inner)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Insert the footer into a scroll container
    ///
    /// Only a weak reference is kept. The first inset and position pass is
    /// posted to `queue` so it runs once the current layout pass is done.
    pub fn attach(&self, container: &SharedScrollContainer, queue: &MainQueue) {
        if self.is_attached() {
            self.detach();
        }

        {
            let mut inner = self.lock();
            inner.container = Some(Arc::downgrade(container));
            if inner.capture_inset_on_attach {
                inner.scroll_view_inset = lock(container).content_inset();
            }
            tracing::debug!(base_inset = ?inner.scroll_view_inset, "footer attached");
        }

        let footer = Arc::downgrade(&self.inner);
        queue.post(move || {
            let Some(inner) = footer.upgrade() else {
                return;
            };
            let mut inner = lock(&inner);
            inner.update_content_inset();
            inner.update_footer_top();
        });
    }

    /// Remove the footer from its container
    ///
    /// The container's bottom inset goes back to the base inset and the
    /// will-detach hook runs while the old container is still reachable. The
    /// hook runs with the footer unlocked, so it may call back into it.
    pub fn detach(&self) {
        let (container, hook) = {
            let mut inner = self.lock();
            let Some(container) = inner.container() else {
                inner.container = None;
                return;
            };

            let base_bottom = inner.scroll_view_inset.bottom;
            {
                let mut view = lock(&container);
                let inset = view.content_inset();
                if inset.bottom != base_bottom {
                    view.set_content_inset(inset.with_bottom(base_bottom));
                }
            }
            (container, inner.will_detach.take())
        };

        let hook = hook.map(|mut hook| {
            hook(&mut *lock(&container));
            hook
        });

        let mut inner = self.lock();
        // Keep a hook the callback installed while it ran
        if inner.will_detach.is_none() {
            inner.will_detach = hook;
        }
        inner.container = None;
        tracing::debug!(state = ?inner.state, "footer detached");
    }

    pub fn is_attached(&self) -> bool {
        self.lock().container().is_some()
    }

    // =========================================================================
    // Refresh API
    // =========================================================================

    /// Start refreshing
    ///
    /// No-op unless attached, and idempotent while already refreshing. The
    /// refresh handler runs after the animator has started.
    pub fn begin_refreshing(&self) {
        let handler = {
            let mut inner = self.lock();
            if inner.container().is_none() {
                tracing::trace!("begin_refreshing ignored: not attached");
                return;
            }
            if !inner.transition(refresh_events::BEGIN) {
                return;
            }
            inner.refresh_handler.clone()
        };

        self.start_animating(|| {
            if let Some(handler) = handler {
                handler();
            }
        });
    }

    /// Finish refreshing; further pulls may trigger again
    pub fn end_refreshing(&self) {
        self.finish_refreshing(refresh_events::END);
    }

    /// Finish refreshing and stop triggering until `reset_no_more_data`
    pub fn end_refreshing_with_no_more_data(&self) {
        self.finish_refreshing(refresh_events::END_NO_MORE_DATA);
    }

    fn finish_refreshing(&self, event: EventId) {
        if !self.lock().state.is_refreshing() {
            return;
        }
        self.stop_animating(|| {
            self.lock().transition(event);
        });
    }

    /// Leave no-more-data and re-enable triggering
    pub fn reset_no_more_data(&self) {
        self.lock().transition(refresh_events::RESET);
    }

    /// Tell the animator to start, then run `completion`
    pub fn start_animating<F: FnOnce()>(&self, completion: F) {
        {
            let mut inner = self.lock();
            if inner.container().is_none() {
                return;
            }
            inner.animator.start_animating();
        }
        completion();
    }

    /// Tell the animator to stop, run `completion`, then pull a decelerating
    /// container back inside its scrollable range
    pub fn stop_animating<F: FnOnce()>(&self, completion: F) {
        let (container, duration_ms) = {
            let mut inner = self.lock();
            let Some(container) = inner.container() else {
                return;
            };
            inner.animator.stop_animating();
            (container, inner.correction_duration_ms)
        };

        completion();

        let mut view = lock(&container);
        if !view.is_decelerating() {
            return;
        }

        let mut offset = view.content_offset();
        offset.y = offset
            .y
            .min(view.content_size().height - view.bounds_size().height);
        if offset.y < 0.0 {
            offset.y = 0.0;
            view.set_content_offset_animated(offset, duration_ms);
        } else {
            view.set_content_offset(offset);
        }
        tracing::trace!(y = offset.y, "offset corrected after stop");
    }

    // =========================================================================
    // Scroll observation
    // =========================================================================

    pub fn handle_event(&self, event: &ScrollEvent) {
        match event {
            ScrollEvent::OffsetChanged { .. } => self.scroll_view_did_change_offset(),
            ScrollEvent::ContentSizeChanged { .. } => self.scroll_view_did_change_content_size(),
        }
    }

    pub fn handle_events(&self, events: impl IntoIterator<Item = ScrollEvent>) {
        for event in events {
            self.handle_event(&event);
        }
    }

    /// Recompute pull progress and trigger when past the threshold
    pub fn scroll_view_did_change_offset(&self) {
        let (should_begin, progress) = {
            let inner = self.lock();
            if inner.hidden || !inner.state.accepts_trigger() {
                return;
            }
            let Some(container) = inner.container() else {
                return;
            };

            let pulled = trigger_distance(&*lock(&container));
            let distance = inner.frame.height() + inner.animator.trigger_distance();
            tracing::trace!(pulled, distance, "footer pull");
            (pulled >= distance, pull_progress(pulled, distance))
        };

        if should_begin {
            self.begin_refreshing();
        }
        self.lock().report_progress(progress);
    }

    /// Keep the footer pinned to the bottom of the content
    pub fn scroll_view_did_change_content_size(&self) {
        self.lock().update_footer_top();
    }

    // =========================================================================
    // Properties
    // =========================================================================

    pub fn state(&self) -> RefreshState {
        self.lock().state
    }

    pub fn is_refreshing(&self) -> bool {
        self.lock().state.is_refreshing()
    }

    /// Last pull progress reported to the animator
    pub fn progress(&self) -> f32 {
        self.lock().progress
    }

    pub fn is_hidden(&self) -> bool {
        self.lock().hidden
    }

    /// Show or hide the footer; hidden footers claim no inset and never trigger
    pub fn set_hidden(&self, hidden: bool) {
        let mut inner = self.lock();
        if inner.hidden == hidden {
            return;
        }
        inner.hidden = hidden;
        inner.update_content_inset();
        inner.update_footer_top();
    }

    /// Footer frame in content coordinates
    pub fn frame(&self) -> Rect {
        self.lock().frame
    }

    pub fn height(&self) -> f32 {
        self.lock().frame.height()
    }

    pub fn set_height(&self, height: f32) -> Result<()> {
        if !height.is_finite() || height < 0.0 {
            return Err(RefresherError::InvalidGeometry(format!(
                "footer height must be finite and non-negative, got {height}"
            )));
        }
        let mut inner = self.lock();
        inner.frame.size.height = height;
        inner.update_content_inset();
        Ok(())
    }

    /// Neutral container inset the footer adds its height to
    pub fn scroll_view_inset(&self) -> EdgeInsets {
        self.lock().scroll_view_inset
    }

    pub fn set_scroll_view_inset(&self, inset: EdgeInsets) {
        let mut inner = self.lock();
        inner.scroll_view_inset = inset;
        inner.update_content_inset();
    }

    /// Install the "load more" action
    pub fn set_refresh_handler<F: Fn() + Send + Sync + 'static>(&self, handler: F) {
        self.lock().refresh_handler = Some(Arc::new(handler));
    }

    /// Install cleanup to run against the container right before detaching
    pub fn set_will_detach<F: FnMut(&mut dyn ScrollContainer) + Send + 'static>(&self, hook: F) {
        self.lock().will_detach = Some(Box::new(hook));
    }
}

impl std::fmt::Debug for FooterRefresher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("FooterRefresher")
            .field("state", &inner.state)
            .field("hidden", &inner.hidden)
            .field("frame", &inner.frame)
            .field("progress", &inner.progress)
            .field("attached", &inner.container().is_some())
            .finish()
    }
}
