//! End-to-end tests: a footer on an in-memory scroll view
//!
//! These drive the footer the way a host would: user gestures move the view,
//! the host drains the view's events into the footer, and a data source ends
//! the refresh.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use refresher_animation::AnimationScheduler;
use refresher_core::{
    EdgeInsets, FooterConfig, MainQueue, RefreshState, ScrollContainer, SharedScrollContainer,
    Size,
};
use refresher_widgets::{ArrowIndicator, FooterRefresher, ScrollPhase, ScrollView};

struct Harness {
    scheduler: Arc<Mutex<AnimationScheduler>>,
    view: Arc<Mutex<ScrollView>>,
    footer: FooterRefresher,
    indicator: ArrowIndicator,
}

impl Harness {
    fn new(content_height: f32, viewport_height: f32) -> Self {
        let queue = MainQueue::new();
        let scheduler = Arc::new(Mutex::new(AnimationScheduler::new()));
        let mut view = ScrollView::with_scheduler(Size::new(320.0, viewport_height), &scheduler);
        view.set_content_size(Size::new(320.0, content_height));
        view.drain_events();
        let view = Arc::new(Mutex::new(view));

        let indicator = ArrowIndicator::default().with_trigger_distance(20.0);
        let footer = FooterRefresher::new(indicator.clone());
        let container: SharedScrollContainer = view.clone();
        footer.attach(&container, &queue);
        queue.run_pending();

        Self {
            scheduler,
            view,
            footer,
            indicator,
        }
    }

    /// Deliver queued view events to the footer
    fn pump(&self) {
        let events = self.view.lock().unwrap().drain_events();
        self.footer.handle_events(events);
    }

    fn drag(&self, delta_y: f32) {
        self.view.lock().unwrap().drag_by(delta_y);
        self.pump();
    }

    fn offset_y(&self) -> f32 {
        self.view.lock().unwrap().content_offset().y
    }

    fn bottom_inset(&self) -> f32 {
        self.view.lock().unwrap().content_inset().bottom
    }
}

#[test]
fn pulling_past_threshold_loads_next_page() {
    let h = Harness::new(1000.0, 600.0);
    let pages = Arc::new(AtomicUsize::new(0));
    let pages_clone = pages.clone();
    h.footer.set_refresh_handler(move || {
        pages_clone.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(h.footer.frame().y(), 1000.0);
    assert_eq!(h.bottom_inset(), 50.0);

    // Scroll to the end of the content: footer just starting to show
    h.drag(400.0);
    assert_eq!(h.footer.state(), RefreshState::Idle);
    assert_eq!(h.footer.progress(), 0.0);

    // Half way to footer height + trigger distance (70)
    h.drag(35.0);
    assert!((h.footer.progress() - 0.5).abs() < 1e-6);
    assert_eq!(h.indicator.model().arrow_rotation, 90.0);

    h.drag(35.0);
    assert_eq!(h.footer.state(), RefreshState::Refreshing);
    assert_eq!(pages.load(Ordering::SeqCst), 1);
    assert!(h.indicator.model().spinning);

    // Further pulls while loading do nothing
    h.drag(30.0);
    assert_eq!(pages.load(Ordering::SeqCst), 1);

    // Next page arrives
    h.view.lock().unwrap().set_content_size(Size::new(320.0, 1600.0));
    h.pump();
    assert_eq!(h.footer.frame().y(), 1600.0);

    h.footer.end_refreshing();
    assert_eq!(h.footer.state(), RefreshState::Idle);
    assert!(!h.indicator.model().spinning);
    assert_eq!(h.indicator.model().label, "Pull up to load more");
}

#[test]
fn short_content_triggers_after_full_pull() {
    let h = Harness::new(300.0, 600.0);

    h.drag(69.0);
    assert_eq!(h.footer.state(), RefreshState::Idle);
    assert!((h.footer.progress() - 69.0 / 70.0).abs() < 1e-4);

    h.drag(1.0);
    assert_eq!(h.footer.state(), RefreshState::Refreshing);
    assert_eq!(h.footer.progress(), 1.0);
}

#[test]
fn no_more_data_blocks_until_reset() {
    let h = Harness::new(1000.0, 600.0);

    h.drag(500.0);
    assert_eq!(h.footer.state(), RefreshState::Refreshing);
    h.footer.end_refreshing_with_no_more_data();
    assert_eq!(h.footer.state(), RefreshState::NoMoreData);
    assert_eq!(h.indicator.model().label, "No more data");

    h.drag(-100.0);
    h.drag(200.0);
    assert_eq!(h.footer.state(), RefreshState::NoMoreData);

    h.footer.reset_no_more_data();
    h.drag(1.0);
    assert_eq!(h.footer.state(), RefreshState::Refreshing);
}

#[test]
fn stop_while_decelerating_above_top_animates_to_zero() {
    let h = Harness::new(1000.0, 600.0);
    h.footer.begin_refreshing();

    {
        let mut view = h.view.lock().unwrap();
        view.drag_by(-5.0);
        view.release(-300.0);
        assert!(view.is_decelerating());
    }

    h.footer.end_refreshing();

    let id = {
        let view = h.view.lock().unwrap();
        assert_eq!(view.phase(), ScrollPhase::Animating);
        view.offset_animation().unwrap()
    };
    {
        let scheduler = h.scheduler.lock().unwrap();
        let animation = scheduler.get(id).unwrap();
        assert_eq!(animation.duration_ms(), 100);
        assert_eq!(animation.target(), 0.0);
    }

    h.scheduler.lock().unwrap().tick(100.0);
    h.view.lock().unwrap().tick(0.1);
    assert_eq!(h.offset_y(), 0.0);
    assert_eq!(h.view.lock().unwrap().phase(), ScrollPhase::Idle);
}

#[test]
fn stop_while_decelerating_past_end_clamps_immediately() {
    let h = Harness::new(700.0, 600.0);
    h.footer.begin_refreshing();

    {
        let mut view = h.view.lock().unwrap();
        view.drag_by(700.0);
        view.release(800.0);
        assert!(view.is_decelerating());
    }

    h.footer.end_refreshing();
    assert_eq!(h.offset_y(), 100.0);
    let view = h.view.lock().unwrap();
    assert!(!view.is_animating_offset());
    assert_eq!(view.phase(), ScrollPhase::Idle);
}

#[test]
fn hiding_and_showing_keeps_inset_invariant() {
    let queue = MainQueue::new();
    let mut view = ScrollView::new(Size::new(320.0, 600.0));
    view.set_content_size(Size::new(320.0, 900.0));
    view.set_content_inset(EdgeInsets::new(44.0, 0.0, 34.0, 0.0));
    let view = Arc::new(Mutex::new(view));
    let container: SharedScrollContainer = view.clone();

    let footer =
        FooterRefresher::with_config(FooterConfig::hidden(), ArrowIndicator::default()).unwrap();
    footer.attach(&container, &queue);
    queue.run_pending();

    let bottom = || view.lock().unwrap().content_inset().bottom;
    assert_eq!(footer.scroll_view_inset().bottom, 34.0);
    assert_eq!(bottom(), 34.0);

    footer.set_hidden(false);
    assert_eq!(bottom(), 84.0);

    footer.begin_refreshing();
    footer.end_refreshing();
    assert_eq!(bottom(), 84.0);

    footer.set_hidden(true);
    assert_eq!(bottom(), 34.0);

    footer.detach();
    assert_eq!(bottom(), 34.0);
    assert!(!footer.is_attached());
}

#[test]
fn reattach_moves_footer_to_new_container() {
    let queue = MainQueue::new();
    let first = Arc::new(Mutex::new(ScrollView::new(Size::new(320.0, 600.0))));
    let second = Arc::new(Mutex::new(ScrollView::new(Size::new(320.0, 600.0))));
    first.lock().unwrap().set_content_size(Size::new(320.0, 800.0));
    second.lock().unwrap().set_content_size(Size::new(320.0, 1200.0));

    let footer = FooterRefresher::new(ArrowIndicator::default());
    let first_container: SharedScrollContainer = first.clone();
    let second_container: SharedScrollContainer = second.clone();

    footer.attach(&first_container, &queue);
    queue.run_pending();
    assert_eq!(first.lock().unwrap().content_inset().bottom, 50.0);

    footer.attach(&second_container, &queue);
    queue.run_pending();
    assert_eq!(first.lock().unwrap().content_inset().bottom, 0.0);
    assert_eq!(second.lock().unwrap().content_inset().bottom, 50.0);
    assert_eq!(footer.frame().y(), 1200.0);
}
