use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::SurfaceError;

/// The 2D drawing operations the rain effect needs.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn fill_rect(&mut self, fill: &str, x: f64, y: f64, w: f64, h: f64);
    fn set_font(&mut self, font: &str);
    fn fill_text(&mut self, fill: &str, glyph: char, x: f64, y: f64);
}

pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Sizes the canvas to the viewport once and takes its 2D context.
    pub fn acquire(canvas: Option<HtmlCanvasElement>) -> Result<Self, SurfaceError> {
        let canvas = canvas.ok_or(SurfaceError::NotMounted)?;
        let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
        let width = viewport_dimension(window.inner_width());
        let height = viewport_dimension(window.inner_height());

        let context = canvas
            .get_context("2d")
            .map_err(|e| SurfaceError::ContextRejected(format!("{:?}", e)))?
            .ok_or(SurfaceError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::ContextUnavailable)?;

        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        log::debug!("Rain surface sized to {}x{}", width, height);

        Ok(Self { context, width, height })
    }
}

fn viewport_dimension(value: Result<JsValue, JsValue>) -> f64 {
    value
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(0.0)
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn fill_rect(&mut self, fill: &str, x: f64, y: f64, w: f64, h: f64) {
        self.context.set_fill_style_str(fill);
        self.context.fill_rect(x, y, w, h);
    }

    fn set_font(&mut self, font: &str) {
        self.context.set_font(font);
    }

    fn fill_text(&mut self, fill: &str, glyph: char, x: f64, y: f64) {
        let mut buf = [0u8; 4];
        self.context.set_fill_style_str(fill);
        if let Err(e) = self.context.fill_text(glyph.encode_utf8(&mut buf), x, y) {
            log::trace!("fill_text failed: {:?}", e);
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::Surface;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Paint {
        Rect { fill: String, x: f64, y: f64, w: f64, h: f64 },
        Font(String),
        Text { fill: String, glyph: char, x: f64, y: f64 },
    }

    pub type PaintLog = Rc<RefCell<Vec<Paint>>>;

    /// Surface that records every call into a shared log.
    pub struct RecordingSurface {
        width: f64,
        height: f64,
        log: PaintLog,
    }

    impl RecordingSurface {
        pub fn new(width: f64, height: f64) -> (Self, PaintLog) {
            let log = PaintLog::default();
            (Self { width, height, log: log.clone() }, log)
        }
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> f64 {
            self.width
        }

        fn height(&self) -> f64 {
            self.height
        }

        fn fill_rect(&mut self, fill: &str, x: f64, y: f64, w: f64, h: f64) {
            self.log.borrow_mut().push(Paint::Rect { fill: fill.to_string(), x, y, w, h });
        }

        fn set_font(&mut self, font: &str) {
            self.log.borrow_mut().push(Paint::Font(font.to_string()));
        }

        fn fill_text(&mut self, fill: &str, glyph: char, x: f64, y: f64) {
            self.log.borrow_mut().push(Paint::Text { fill: fill.to_string(), glyph, x, y });
        }
    }
}
