use rand::Rng;

use crate::config::RainConfig;
use crate::rain::drops::RainState;
use crate::rain::surface::Surface;
use crate::rain::timer::Scheduler;

/// A running rain effect. Owns the timer; stopping or dropping it cancels
/// every further frame.
pub struct RainLoop<H> {
    ticker: Option<H>,
}

impl<H> RainLoop<H> {
    pub fn start<S, T, R>(mut surface: S, scheduler: &T, config: RainConfig, mut rng: R) -> Self
    where
        S: Surface + 'static,
        T: Scheduler<Handle = H>,
        R: Rng + 'static,
    {
        let period_ms = config.period_ms;
        let mut rain = RainState::new(surface.width(), config);
        log::info!("Starting rain: {} columns every {}ms", rain.columns(), period_ms);

        let ticker = scheduler.every(period_ms, Box::new(move || rain.tick(&mut surface, &mut rng)));
        Self { ticker: Some(ticker) }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn stop(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            drop(ticker);
            log::debug!("Rain stopped");
        }
    }
}

impl<H> Drop for RainLoop<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rain::surface::testing::{Paint, RecordingSurface};
    use crate::rain::timer::testing::ManualScheduler;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn overlays(log: &[Paint]) -> usize {
        log.iter().filter(|p| matches!(p, Paint::Rect { .. })).count()
    }

    #[test]
    fn each_tick_paints_a_frame() {
        let scheduler = ManualScheduler::default();
        let (surface, log) = RecordingSurface::new(100.0, 400.0);
        let rain = RainLoop::start(surface, &scheduler, RainConfig::default(), StdRng::seed_from_u64(1));
        assert!(rain.is_running());
        assert!(log.borrow().is_empty());

        for _ in 0..3 {
            scheduler.fire();
        }
        assert_eq!(overlays(&log.borrow()), 3);
        // overlay + font + one glyph per column
        assert_eq!(log.borrow().len(), 3 * (2 + 10));
    }

    #[test]
    fn no_paint_after_stop() {
        let scheduler = ManualScheduler::default();
        let (surface, log) = RecordingSurface::new(100.0, 400.0);
        let rain = RainLoop::start(surface, &scheduler, RainConfig::default(), StdRng::seed_from_u64(2));

        scheduler.fire();
        scheduler.fire();
        let painted = log.borrow().len();

        rain.stop();
        assert_eq!(scheduler.live(), 0);
        for _ in 0..5 {
            scheduler.fire();
        }
        assert_eq!(log.borrow().len(), painted);
    }

    #[test]
    fn drop_cancels_timer() {
        let scheduler = ManualScheduler::default();
        let (surface, log) = RecordingSurface::new(50.0, 400.0);
        {
            let _rain = RainLoop::start(surface, &scheduler, RainConfig::default(), StdRng::seed_from_u64(3));
            scheduler.fire();
        }
        let painted = log.borrow().len();
        scheduler.fire();
        assert_eq!(scheduler.live(), 0);
        assert_eq!(log.borrow().len(), painted);
    }

    #[test]
    fn empty_surface_only_paints_overlay() {
        let scheduler = ManualScheduler::default();
        let (surface, log) = RecordingSurface::new(0.0, 0.0);
        let _rain = RainLoop::start(surface, &scheduler, RainConfig::default(), StdRng::seed_from_u64(4));
        scheduler.fire();
        assert_eq!(log.borrow().len(), 2);
    }
}
