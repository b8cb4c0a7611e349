//! Tick scheduling: interval timers and the force-rescan latch.

/// Independent repeating timers driven by host frame time.
///
/// `check` returns true at most once per period for each timer id.
pub struct Interval {
    elapsed: Vec<f32>,
}

impl Interval {
    pub fn new(timers: usize) -> Self {
        Interval {
            elapsed: vec![0.0; timers],
        }
    }

    /// Advance every timer by `delta` seconds.
    pub fn advance(&mut self, delta: f32) {
        if !delta.is_finite() || delta <= 0.0 {
            return;
        }
        for elapsed in &mut self.elapsed {
            *elapsed += delta;
        }
    }

    /// True if timer `id` has run for at least `period` seconds; restarts it if so.
    pub fn check(&mut self, id: usize, period: f32) -> bool {
        match self.elapsed.get_mut(id) {
            Some(elapsed) if *elapsed >= period => {
                *elapsed = 0.0;
                true
            }
            _ => false,
        }
    }
}

/// Structural world changes, any number of which collapse into one rescan.
#[derive(Debug)]
pub struct RescanLatch {
    dirty: bool,
}

impl Default for RescanLatch {
    fn default() -> Self {
        RescanLatch { dirty: true }
    }
}

impl RescanLatch {
    pub fn set(&mut self) {
        self.dirty = true;
    }

    pub fn is_set(&self) -> bool {
        self.dirty
    }

    /// Clear the latch, returning whether it was set.
    pub fn take(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
