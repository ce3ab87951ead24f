use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Scroll progress at which the navigation bar reaches full opacity.
pub const NAV_FADE_END: f64 = 0.1;
/// Alpha of the navigation bar background once fully faded in.
pub const NAV_MAX_ALPHA: f64 = 0.9;

/// Parameters of the falling glyph background.
///
/// The defaults are the look of the page: overlay colour, alpha and the
/// reset chance shape the trails and must not be tuned casually.
#[derive(Clone, Debug, PartialEq)]
pub struct RainConfig {
    pub glyph_size: f64,
    pub period_ms: u32,
    pub overlay: &'static str,
    pub font: &'static str,
    pub palette: [&'static str; 3],
    pub alphabet: &'static str,
    pub reset_chance: f64,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            glyph_size: 10.0,
            period_ms: 35,
            overlay: "rgba(0, 0, 0, 0.04)",
            font: "10px monospace",
            palette: ["#00ff41", "#ff0040", "#0080ff"],
            alphabet: "ABCDEFGHIJKLMNOPQRSTUVWXYZ123456789@#$%^&*()*&^%+-/~{[|`]}",
            reset_chance: 0.025,
        }
    }
}
