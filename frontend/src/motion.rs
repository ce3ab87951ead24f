//! Declarative animation descriptors. The stylesheet defines the keyframes;
//! these types only decide timing and are rendered into inline CSS.

use std::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
    /// Forever, playing every other run backwards.
    Bounce,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motion {
    pub keyframes: &'static str,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
    pub repeat: Repeat,
    /// Extra delay per element index when used for a group.
    pub step_ms: u32,
}

pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

impl Motion {
    const fn new(keyframes: &'static str, duration_ms: u32, easing: Easing, repeat: Repeat, step_ms: u32) -> Self {
        Self { keyframes, duration_ms, delay_ms: 0, easing, repeat, step_ms }
    }

    pub fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms: self.delay_ms + delay_ms, ..self }
    }

    /// The same motion for the `index`-th element of a group.
    pub fn staggered(self, index: usize) -> Self {
        self.delayed(stagger_delay_ms(index, self.step_ms))
    }

    /// CSS `animation` shorthand.
    pub fn css(&self) -> String {
        let (count, direction) = match self.repeat {
            Repeat::Once => ("1", "normal"),
            Repeat::Forever => ("infinite", "normal"),
            Repeat::Bounce => ("infinite", "alternate"),
        };
        format!(
            "{} {}ms {} {}ms {} {} both",
            self.keyframes,
            self.duration_ms,
            self.easing.css(),
            self.delay_ms,
            count,
            direction
        )
    }

    pub fn style(&self) -> String {
        format!("animation: {};", self.css())
    }
}

pub const SECTION_ENTRANCE: Motion = Motion::new("rise-in", 800, Easing::EaseOut, Repeat::Once, 300);
pub const CARD_ENTRANCE: Motion = Motion::new("rise-in", 600, Easing::EaseOut, Repeat::Once, 100);
pub const PANEL_ENTRANCE: Motion = Motion::new("zoom-in", 800, Easing::EaseOut, Repeat::Once, 0);
pub const VISUAL_ENTRANCE: Motion = Motion::new("zoom-in", 1000, Easing::EaseOut, Repeat::Once, 0);
pub const SCAN_LINE: Motion = Motion::new("scan-line", 4000, Easing::Linear, Repeat::Forever, 800);
pub const CORE_BREATHE: Motion = Motion::new("breathe", 2000, Easing::EaseInOut, Repeat::Forever, 0);
pub const PULSE_RING: Motion = Motion::new("pulse-ring", 2000, Easing::EaseOut, Repeat::Forever, 600);
pub const NODE_PULSE: Motion = Motion::new("node-pulse", 2000, Easing::EaseInOut, Repeat::Forever, 300);
pub const LINK_DRAW: Motion = Motion::new("link-draw", 2000, Easing::EaseInOut, Repeat::Bounce, 200);

/// Hover and tap feedback, consumed by the `.hover-fx` stylesheet rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hover {
    pub lift_px: i32,
    pub scale: f64,
    pub tap_scale: f64,
}

impl Hover {
    pub const fn lift(px: i32) -> Self {
        Self { lift_px: -px, scale: 1.0, tap_scale: 1.0 }
    }

    pub const fn grow(scale: f64, tap_scale: f64) -> Self {
        Self { lift_px: 0, scale, tap_scale }
    }

    pub fn css_vars(&self) -> String {
        format!(
            "--hover-lift: {}px; --hover-scale: {}; --tap-scale: {};",
            self.lift_px, self.scale, self.tap_scale
        )
    }
}

/// One-shot visibility trigger: once an element has been seen it stays
/// revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealGate {
    fired: bool,
}

impl RevealGate {
    pub fn fired(&self) -> bool {
        self.fired
    }

    /// Feeds the element's bounding box (viewport coordinates) and returns
    /// whether it is revealed.
    pub fn observe(&mut self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        if !self.fired && top < viewport_height && bottom > 0.0 {
            self.fired = true;
        }
        self.fired
    }
}

/// Runs one scroll check against a gate shared by a `Fn` listener.
pub fn observe_shared(gate: &Cell<RevealGate>, top: f64, bottom: f64, viewport_height: f64) -> bool {
    let mut current = gate.get();
    let seen = current.observe(top, bottom, viewport_height);
    gate.set(current);
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger_delay_ms(0, 100), 0);
        assert_eq!(stagger_delay_ms(3, 100), 300);
        assert_eq!(SCAN_LINE.staggered(4).delay_ms, 3200);
    }

    #[test]
    fn stagger_adds_to_base_delay() {
        let motion = SECTION_ENTRANCE.staggered(1);
        assert_eq!(motion.delay_ms, 300);
        assert_eq!(CARD_ENTRANCE.delayed(50).staggered(2).delay_ms, 250);
    }

    #[test]
    fn one_shot_css() {
        assert_eq!(
            CARD_ENTRANCE.staggered(2).css(),
            "rise-in 600ms ease-out 200ms 1 normal both"
        );
    }

    #[test]
    fn repeating_css() {
        assert_eq!(PULSE_RING.css(), "pulse-ring 2000ms ease-out 0ms infinite normal both");
        assert!(LINK_DRAW.css().contains("infinite alternate"));
    }

    #[test]
    fn hover_vars() {
        assert_eq!(
            Hover::lift(5).css_vars(),
            "--hover-lift: -5px; --hover-scale: 1; --tap-scale: 1;"
        );
        assert!(Hover::grow(1.05, 0.95).css_vars().contains("--tap-scale: 0.95"));
    }

    #[test]
    fn reveal_waits_for_viewport() {
        let mut gate = RevealGate::default();
        assert!(!gate.observe(1200.0, 1500.0, 900.0));
        assert!(!gate.observe(-400.0, -10.0, 900.0));
        assert!(gate.observe(850.0, 1150.0, 900.0));
    }

    #[test]
    fn shared_gate_stays_revealed() {
        let gate = Cell::new(RevealGate::default());
        assert!(!observe_shared(&gate, 950.0, 1200.0, 900.0));
        assert!(!gate.get().fired());
        assert!(observe_shared(&gate, 100.0, 350.0, 900.0));
        assert!(observe_shared(&gate, 5000.0, 5300.0, 900.0));
    }

    #[test]
    fn reveal_fires_once() {
        let mut gate = RevealGate::default();
        assert!(gate.observe(100.0, 300.0, 900.0));
        assert!(gate.observe(2000.0, 2300.0, 900.0));
        assert!(gate.fired());
    }
}
