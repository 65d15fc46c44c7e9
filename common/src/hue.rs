use serde::{Deserialize, Serialize};

/// Parameters of the background hue sweep.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct HueCycle {
    pub start: f64,
    pub end: f64,
    pub period_ms: f64,
}

impl Default for HueCycle {
    fn default() -> Self {
        HueCycle {
            start: 180.0,
            end: 300.0,
            period_ms: 15000.0,
        }
    }
}

impl HueCycle {
    // triangle wave: start -> end over the first half of the period, then back
    pub fn hue_at(&self, elapsed_ms: f64) -> f64 {
        if self.period_ms <= 0.0 {
            return self.start;
        }

        let mut progress = elapsed_ms.rem_euclid(self.period_ms) / self.period_ms;
        if progress > 0.5 {
            progress = 1.0 - progress;
        }
        progress *= 2.0;

        self.start + (self.end - self.start) * progress
    }
}

// hue clock
//
// the first frame timestamp becomes the origin, every later timestamp is
// measured against it
#[derive(Clone, Copy, Debug, Default)]
pub struct HueClock {
    origin: Option<f64>,
}

impl HueClock {
    pub fn elapsed(&mut self, timestamp_ms: f64) -> f64 {
        let origin = *self.origin.get_or_insert(timestamp_ms);
        timestamp_ms - origin
    }
}
