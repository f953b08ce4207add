//! Load More Demo
//!
//! Simulates a paged feed in a headless scroll view:
//! - A scripted user drags to the end of the list and pulls past the footer
//! - The refresh handler queues a page load that lands a few frames later
//! - After the last page the footer switches to "no more data"
//!
//! Run with: RUST_LOG=refresher_widgets=debug cargo run -p refresher_widgets --example load_more

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use refresher_animation::AnimationScheduler;
use refresher_core::{FooterConfig, MainQueue, ScrollContainer, SharedScrollContainer, Size};
use refresher_widgets::{ArrowIndicator, FooterRefresher, IndicatorModel, LabelSet, ScrollView};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
height = 44.0
correction_duration_ms = 120
"#;

const ROW_HEIGHT: f32 = 60.0;
const ROWS_PER_PAGE: usize = 20;
const PAGES: usize = 3;
const FRAME_MS: f32 = 1000.0 / 60.0;

/// Frames between a load request and the page arriving
const LOAD_LATENCY: u32 = 20;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let queue = MainQueue::new();
    let scheduler = Arc::new(Mutex::new(AnimationScheduler::new()));

    let mut rows = ROWS_PER_PAGE;
    let mut view = ScrollView::with_scheduler(Size::new(375.0, 667.0), &scheduler);
    view.set_content_size(Size::new(375.0, rows as f32 * ROW_HEIGHT));
    let view = Arc::new(Mutex::new(view));
    let container: SharedScrollContainer = view.clone();

    let indicator = ArrowIndicator::new(LabelSet {
        pull: "Pull up for more".to_string(),
        ..Default::default()
    })
    .with_trigger_distance(16.0);
    let config = FooterConfig::from_toml_str(CONFIG)?;
    let footer = FooterRefresher::with_config(config, indicator.clone())?;

    let load_requested = Arc::new(AtomicBool::new(false));
    let flag = load_requested.clone();
    footer.set_refresh_handler(move || flag.store(true, Ordering::SeqCst));

    footer.attach(&container, &queue);
    queue.run_pending();

    let mut pages_loaded = 1;
    let mut loading_for = 0;
    let mut last_model: Option<IndicatorModel> = None;

    for frame in 0..1200u32 {
        // Scripted user: drag in bursts, release, repeat
        {
            let mut view = view.lock().unwrap();
            match frame % 90 {
                0..=29 => view.drag_by(30.0),
                30 => view.release(400.0),
                _ => {}
            }
        }

        scheduler.lock().unwrap().tick(FRAME_MS);
        let events = {
            let mut view = view.lock().unwrap();
            view.tick(FRAME_MS / 1000.0);
            view.drain_events()
        };
        footer.handle_events(events);
        queue.run_pending();
        indicator.tick();

        if load_requested.swap(false, Ordering::SeqCst) {
            loading_for = LOAD_LATENCY;
        }
        if loading_for > 0 {
            loading_for -= 1;
            if loading_for == 0 {
                rows += ROWS_PER_PAGE;
                pages_loaded += 1;
                view.lock()
                    .unwrap()
                    .set_content_size(Size::new(375.0, rows as f32 * ROW_HEIGHT));
                if pages_loaded == PAGES {
                    footer.end_refreshing_with_no_more_data();
                } else {
                    footer.end_refreshing();
                }
                let events = view.lock().unwrap().drain_events();
                footer.handle_events(events);
                println!("frame {frame:4}: page {pages_loaded} loaded ({rows} rows)");
            }
        }

        let model = indicator.model();
        if last_model.as_ref().map(|m| &m.label) != Some(&model.label) {
            let offset = view.lock().unwrap().content_offset().y;
            let glyph = if model.spinning {
                model.spinner_glyph()
            } else {
                " "
            };
            println!(
                "frame {frame:4}: {glyph} {:<22} progress {:>4.2}  offset {offset:>7.1}",
                model.label, model.progress
            );
        }
        last_model = Some(model);
    }

    println!("final: {footer:?}");
    Ok(())
}
