use gloo_timers::callback::Interval;

/// Source of repeating ticks. Dropping the returned handle cancels the
/// ticks.
pub trait Scheduler {
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser `setInterval` through gloo.
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, move || tick())
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::Scheduler;

    type Slots = Rc<RefCell<Vec<Option<Box<dyn FnMut()>>>>>;

    /// Scheduler whose ticks only happen when the test calls `fire`.
    #[derive(Default)]
    pub struct ManualScheduler {
        slots: Slots,
    }

    pub struct ManualHandle {
        slots: Slots,
        slot: usize,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(entry) = self.slots.borrow_mut().get_mut(self.slot) {
                *entry = None;
            }
        }
    }

    impl ManualScheduler {
        /// Runs every live tick once.
        pub fn fire(&self) {
            let count = self.slots.borrow().len();
            for slot in 0..count {
                let tick = self.slots.borrow_mut()[slot].take();
                if let Some(mut tick) = tick {
                    tick();
                    self.slots.borrow_mut()[slot] = Some(tick);
                }
            }
        }

        pub fn live(&self) -> usize {
            self.slots.borrow().iter().filter(|s| s.is_some()).count()
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn every(&self, _period_ms: u32, tick: Box<dyn FnMut()>) -> ManualHandle {
            let mut slots = self.slots.borrow_mut();
            slots.push(Some(tick));
            ManualHandle { slots: self.slots.clone(), slot: slots.len() - 1 }
        }
    }
}
