use super::intent::{ArbiterOutcome, Intent};

pub const DEFAULT_TOUCH_THRESHOLD: f64 = 50.0;
pub const DEFAULT_TOUCH_MAX_DURATION_MS: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct TouchStart {
    y: f64,
    at_ms: f64,
}

/// One swipe, one intent. A swipe counts when it travels further than the
/// threshold within the max duration of its touchstart.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchArbiter {
    threshold: f64,
    max_duration_ms: f64,
    start: Option<TouchStart>,
}

impl Default for TouchArbiter {
    fn default() -> Self {
        Self::new(DEFAULT_TOUCH_THRESHOLD, DEFAULT_TOUCH_MAX_DURATION_MS)
    }
}

impl TouchArbiter {
    pub fn new(threshold: f64, max_duration_ms: f64) -> Self {
        Self {
            threshold,
            max_duration_ms,
            start: None,
        }
    }

    #[cfg(test)]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn start(&mut self, y: f64, now_ms: f64, enabled: bool) {
        self.start = if enabled {
            Some(TouchStart { y, at_ms: now_ms })
        } else {
            None
        };
    }

    pub fn moved(&mut self, y: f64, now_ms: f64, enabled: bool) -> ArbiterOutcome {
        if !enabled {
            return ArbiterOutcome::IGNORED;
        }
        let Some(start) = self.start else {
            return ArbiterOutcome::IGNORED;
        };

        // Finger moving up scrolls content down.
        let delta = start.y - y;
        let elapsed = now_ms - start.at_ms;
        if delta.abs() <= self.threshold || elapsed >= self.max_duration_ms {
            return ArbiterOutcome::IGNORED;
        }

        self.start = None;
        ArbiterOutcome::fire(if delta > 0.0 { Intent::Next } else { Intent::Prev })
    }

    pub fn end(&mut self) {
        self.start = None;
    }
}
