use serde::{Deserialize, Serialize};

/// A headline number on the page, counted up from zero when it scrolls into view.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: String,
    pub target: u64,
    #[serde(default)]
    pub suffix: String,
}

// counter animation
//
// each frame adds target / speed, so the count reaches the target after
// roughly `speed` frames regardless of how large the target is.  intermediate
// values are rounded up, and the final frame shows the exact target.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    count: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, speed: u32) -> Self {
        let speed = speed.max(1);

        CounterAnimation {
            target,
            increment: target as f64 / speed as f64,
            count: 0.0,
            finished: false,
        }
    }

    /// Advances one frame and returns the value to display.
    pub fn tick(&mut self) -> u64 {
        if self.finished {
            return self.target;
        }

        self.count += self.increment;

        if self.count < self.target as f64 {
            self.count.ceil() as u64
        } else {
            self.finished = true;
            self.target
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn target(&self) -> u64 {
        self.target
    }
}

// fraction of an element's height inside the viewport, given its top and
// bottom edges relative to the viewport top
pub fn visible_fraction(top: f64, bottom: f64, viewport_height: f64) -> f64 {
    let height = bottom - top;
    if height <= 0.0 {
        return 0.0;
    }

    let visible = bottom.min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: u64, speed: u32) -> Vec<u64> {
        let mut counter = CounterAnimation::new(target, speed);
        let mut frames = Vec::new();
        while !counter.is_finished() {
            frames.push(counter.tick());
            assert!(frames.len() <= speed as usize + 1, "counter never finished");
        }
        frames
    }

    #[test]
    fn ends_exactly_at_target() {
        for target in [1, 7, 150, 250, 5000, 2_000_000] {
            let frames = run(target, 200);
            assert_eq!(frames.last(), Some(&target));
        }
    }

    #[test]
    fn never_decreases_or_overshoots() {
        let frames = run(987, 200);
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert!(frames.iter().all(|v| *v <= 987));
    }

    #[test]
    fn takes_about_speed_frames() {
        let frames = run(5000, 200);
        assert!((199..=201).contains(&frames.len()), "took {} frames", frames.len());
    }

    #[test]
    fn rounds_intermediate_values_up() {
        let mut counter = CounterAnimation::new(3, 200);
        assert_eq!(counter.tick(), 1);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = CounterAnimation::new(0, 200);
        assert_eq!(counter.tick(), 0);
        assert!(counter.is_finished());
    }

    #[test]
    fn zero_speed_is_treated_as_one_frame() {
        let mut counter = CounterAnimation::new(40, 0);
        assert_eq!(counter.tick(), 40);
        assert!(counter.is_finished());
        assert_eq!(counter.tick(), 40);
    }

    #[test]
    fn visibility_of_element_in_viewport() {
        assert_eq!(visible_fraction(100.0, 200.0, 800.0), 1.0);
        assert_eq!(visible_fraction(750.0, 850.0, 800.0), 0.5);
        assert_eq!(visible_fraction(-50.0, 50.0, 800.0), 0.5);
        assert_eq!(visible_fraction(900.0, 1000.0, 800.0), 0.0);
        assert_eq!(visible_fraction(-300.0, -100.0, 800.0), 0.0);
        assert_eq!(visible_fraction(10.0, 10.0, 800.0), 0.0);
    }
}
