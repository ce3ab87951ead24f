use std::fmt;

use crate::config::{NAV_FADE_END, NAV_MAX_ALPHA};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn black(a: f64) -> Self {
        Self { r: 0, g: 0, b: 0, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Normalised vertical scroll position of the document in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Navigation background for a scroll progress: transparent black at the
/// top, `NAV_MAX_ALPHA` black from `NAV_FADE_END` on.
pub fn nav_background(progress: f64) -> Rgba {
    let t = (progress / NAV_FADE_END).clamp(0.0, 1.0);
    Rgba::black(t * NAV_MAX_ALPHA)
}

/// Reads the current scroll progress from the browser window.
pub fn current_progress() -> Option<f64> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.document_element()?.scroll_height() as f64;
    Some(scroll_progress(scroll_y, document_height, viewport_height))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn top_of_page_is_transparent() {
        assert_eq!(nav_background(0.0), Rgba::black(0.0));
    }

    #[test]
    fn fade_holds_past_end() {
        assert!((nav_background(0.1).a - 0.9).abs() < EPS);
        assert!((nav_background(0.5).a - 0.9).abs() < EPS);
        assert!((nav_background(1.0).a - 0.9).abs() < EPS);
    }

    #[test]
    fn fade_midpoint_is_linear() {
        assert!((nav_background(0.05).a - 0.45).abs() < EPS);
    }

    #[test]
    fn negative_progress_holds_at_transparent() {
        assert_eq!(nav_background(-0.3).a, 0.0);
    }

    #[test]
    fn rgba_renders_as_css() {
        assert_eq!(Rgba::black(0.9).to_string(), "rgba(0, 0, 0, 0.9)");
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-20.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn short_document_has_no_progress() {
        assert_eq!(scroll_progress(40.0, 800.0, 1000.0), 0.0);
    }
}
