use rand::Rng;

use crate::config::RainConfig;
use crate::rain::surface::Surface;

/// Column state of the falling glyph effect.
pub struct RainState {
    config: RainConfig,
    alphabet: Vec<char>,
    drops: Vec<u32>,
}

impl RainState {
    /// One drop counter per glyph-wide column, all starting at 1.
    pub fn new(surface_width: f64, config: RainConfig) -> Self {
        let columns = if surface_width > 0.0 && config.glyph_size > 0.0 {
            (surface_width / config.glyph_size).ceil() as usize
        } else {
            0
        };
        let alphabet = config.alphabet.chars().collect();
        Self {
            config,
            alphabet,
            drops: vec![1; columns],
        }
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    /// Paints one frame and advances every column.
    pub fn tick<S: Surface, R: Rng>(&mut self, surface: &mut S, rng: &mut R) {
        let size = self.config.glyph_size;
        let (width, height) = (surface.width(), surface.height());

        // Translucent overlay instead of a clear leaves the fading trails.
        surface.fill_rect(self.config.overlay, 0.0, 0.0, width, height);
        surface.set_font(self.config.font);

        for (column, drop) in self.drops.iter_mut().enumerate() {
            let y = f64::from(*drop) * size;
            if let Some(&glyph) = pick(&self.alphabet, rng) {
                let color = self.config.palette[column % 3];
                surface.fill_text(color, glyph, column as f64 * size, y);
            }

            if y > height && rng.gen::<f64>() > 1.0 - self.config.reset_chance {
                *drop = 0;
            }
            *drop = drop.saturating_add(1);
        }
    }
}

fn pick<'a, R: Rng>(alphabet: &'a [char], rng: &mut R) -> Option<&'a char> {
    if alphabet.is_empty() {
        return None;
    }
    alphabet.get(rng.gen_range(0..alphabet.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rain::surface::testing::{Paint, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn one_column_per_glyph_width() {
        assert_eq!(RainState::new(1000.0, RainConfig::default()).columns(), 100);
        assert_eq!(RainState::new(1005.0, RainConfig::default()).columns(), 101);
        assert_eq!(RainState::new(0.0, RainConfig::default()).columns(), 0);
    }

    #[test]
    fn drops_start_at_one() {
        let rain = RainState::new(300.0, RainConfig::default());
        assert!(rain.drops().iter().all(|&d| d == 1));
    }

    #[test]
    fn drops_advance_by_one_per_tick_inside_surface() {
        let (mut surface, _) = RecordingSurface::new(200.0, 10_000.0);
        let mut rain = RainState::new(200.0, RainConfig::default());
        let mut rng = rng();
        for _ in 0..50 {
            rain.tick(&mut surface, &mut rng);
        }
        assert!(rain.drops().iter().all(|&d| d == 51));
    }

    #[test]
    fn resets_only_below_surface() {
        let (mut surface, _) = RecordingSurface::new(300.0, 100.0);
        let config = RainConfig::default();
        let size = config.glyph_size;
        let mut rain = RainState::new(300.0, config);
        let mut rng = rng();
        let mut resets = 0;
        for _ in 0..2_000 {
            let before = rain.drops().to_vec();
            rain.tick(&mut surface, &mut rng);
            for (prev, now) in before.iter().zip(rain.drops()) {
                if *now == prev + 1 {
                    continue;
                }
                assert_eq!(*now, 1, "a column either advances or restarts");
                assert!(f64::from(*prev) * size > 100.0, "reset fired at drop {}", prev);
                resets += 1;
            }
        }
        assert!(resets > 0);
    }

    #[test]
    fn resets_are_staggered() {
        let (mut surface, _) = RecordingSurface::new(500.0, 50.0);
        let mut rain = RainState::new(500.0, RainConfig::default());
        let mut rng = rng();
        for _ in 0..40 {
            rain.tick(&mut surface, &mut rng);
        }
        let first = rain.drops()[0];
        assert!(rain.drops().iter().any(|&d| d != first));
    }

    #[test]
    fn frame_starts_with_overlay() {
        let (mut surface, log) = RecordingSurface::new(30.0, 100.0);
        let mut rain = RainState::new(30.0, RainConfig::default());
        rain.tick(&mut surface, &mut rng());
        let log = log.borrow();
        assert_eq!(
            log[0],
            Paint::Rect {
                fill: "rgba(0, 0, 0, 0.04)".to_string(),
                x: 0.0,
                y: 0.0,
                w: 30.0,
                h: 100.0
            }
        );
        assert_eq!(log[1], Paint::Font("10px monospace".to_string()));
    }

    #[test]
    fn glyphs_cycle_palette_by_column() {
        let (mut surface, log) = RecordingSurface::new(40.0, 100.0);
        let config = RainConfig::default();
        let alphabet = config.alphabet;
        let mut rain = RainState::new(40.0, config);
        rain.tick(&mut surface, &mut rng());

        let texts: Vec<_> = log
            .borrow()
            .iter()
            .filter_map(|paint| match paint {
                Paint::Text { fill, glyph, x, y } => Some((fill.clone(), *glyph, *x, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 4);
        let fills: Vec<_> = texts.iter().map(|t| t.0.as_str()).collect();
        assert_eq!(fills, ["#00ff41", "#ff0040", "#0080ff", "#00ff41"]);
        for (column, (_, glyph, x, y)) in texts.iter().enumerate() {
            assert!(alphabet.contains(*glyph));
            assert_eq!(*x, column as f64 * 10.0);
            assert_eq!(*y, 10.0);
        }
    }
}
