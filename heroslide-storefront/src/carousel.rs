use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::types::Slide;

/// Time between automatic advances while autoplay is enabled.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Which rendering branch the storefront should take for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPlan {
    /// Static branded banner; no interaction controls.
    Fallback,
    /// The single slide alone; arrows and indicators suppressed.
    Single,
    /// Horizontally offset strip with prev/next arrows and one indicator
    /// per slide, the one at `current_index` highlighted.
    Strip {
        current_index: usize,
        indicator_count: usize,
    },
}

impl RenderPlan {
    pub fn shows_controls(&self) -> bool {
        matches!(self, RenderPlan::Strip { .. })
    }
}

#[derive(Debug)]
struct CarouselState {
    current_index: usize,
    autoplay_enabled: bool,
}

/// Owns the current-index/autoplay pair for one carousel instance.
///
/// The slide list is an immutable snapshot; replacing it goes through
/// `set_slides`, which re-arms the autoplay timer the same way enabling or
/// disabling autoplay does. The timer is a single tokio task owned by the
/// controller: re-arming aborts the previous task before spawning a new one,
/// so two timers never coexist, and drop aborts whatever is running.
pub struct CarouselController {
    slides: Vec<Slide>,
    state: Arc<Mutex<CarouselState>>,
    timer: Option<JoinHandle<()>>,
}

impl CarouselController {
    pub fn new(slides: Vec<Slide>) -> Self {
        let mut controller = Self {
            slides,
            state: Arc::new(Mutex::new(CarouselState {
                current_index: 0,
                autoplay_enabled: true,
            })),
            timer: None,
        };
        controller.rearm_timer();
        controller
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current_index(&self) -> usize {
        self.state.lock().unwrap().current_index
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.state.lock().unwrap().autoplay_enabled
    }

    /// Replace the slide snapshot, clamping the index back into range and
    /// re-arming the timer for the new length.
    pub fn set_slides(&mut self, slides: Vec<Slide>) {
        self.slides = slides;
        {
            let mut state = self.state.lock().unwrap();
            if state.current_index >= self.slides.len() {
                state.current_index = 0;
            }
        }
        self.rearm_timer();
    }

    pub fn advance(&self) {
        let n = self.slides.len();
        if n == 0 {
            return;
        }
        let mut state = self.state.lock().unwrap();
        state.current_index = (state.current_index + 1) % n;
    }

    pub fn retreat(&self) {
        let n = self.slides.len();
        if n == 0 {
            return;
        }
        let mut state = self.state.lock().unwrap();
        state.current_index = (state.current_index + n - 1) % n;
    }

    /// Direct indicator selection. Callers pass an index of an existing
    /// indicator, so `i < n` holds.
    pub fn jump(&self, i: usize) {
        debug_assert!(i < self.slides.len());
        self.state.lock().unwrap().current_index = i;
    }

    /// Pointer entered the carousel surface.
    pub fn pause(&mut self) {
        self.state.lock().unwrap().autoplay_enabled = false;
        self.rearm_timer();
    }

    /// Pointer left the carousel surface.
    pub fn resume(&mut self) {
        self.state.lock().unwrap().autoplay_enabled = true;
        self.rearm_timer();
    }

    pub fn render(&self) -> RenderPlan {
        match self.slides.len() {
            0 => RenderPlan::Fallback,
            1 => RenderPlan::Single,
            n => RenderPlan::Strip {
                current_index: self.current_index(),
                indicator_count: n,
            },
        }
    }

    /// Tear down any running timer and start a new one when the current
    /// inputs call for it. A stale task never fires: it is aborted before
    /// the replacement spawns.
    fn rearm_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        let n = self.slides.len();
        if n <= 1 || !self.autoplay_enabled() {
            return;
        }

        let state = Arc::clone(&self.state);
        self.timer = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(AUTOPLAY_INTERVAL);
            interval.tick().await; // first tick completes immediately
            loop {
                interval.tick().await;
                let mut state = state.lock().unwrap();
                state.current_index = (state.current_index + 1) % n;
            }
        }));
    }
}

impl Drop for CarouselController {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
