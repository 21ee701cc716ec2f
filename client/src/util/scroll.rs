//! Window scrolling for the layout shell.
//!
//! Requires a browser environment; SSR paths no-op so server rendering
//! stays deterministic.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll offset (px) after which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD: f64 = 400.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    /// Jump without animation (route changes).
    Instant,
    /// Animated (back-to-top button).
    Smooth,
}

#[must_use]
pub fn past_back_to_top_threshold(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Current vertical scroll offset; `0.0` outside the browser.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

pub fn scroll_to_top(mode: ScrollMode) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(match mode {
            ScrollMode::Instant => web_sys::ScrollBehavior::Instant,
            ScrollMode::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
