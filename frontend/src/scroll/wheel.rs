use super::intent::{ArbiterOutcome, Intent};

pub const DEFAULT_WHEEL_THRESHOLD: f64 = 50.0;
pub const DEFAULT_WHEEL_COOLDOWN_MS: f64 = 800.0;

/// Turns a stream of wheel deltas into single next/prev intents.
///
/// Deltas accumulate until their magnitude reaches the threshold. After an
/// intent fires nothing else can fire for `cooldown_ms`; events in that window
/// and events while disabled are suppressed and leave the accumulator as is.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelArbiter {
    threshold: f64,
    cooldown_ms: f64,
    accumulated: f64,
    last_fire_ms: Option<f64>,
}

impl Default for WheelArbiter {
    fn default() -> Self {
        Self::new(DEFAULT_WHEEL_THRESHOLD, DEFAULT_WHEEL_COOLDOWN_MS)
    }
}

impl WheelArbiter {
    pub fn new(threshold: f64, cooldown_ms: f64) -> Self {
        Self {
            threshold,
            cooldown_ms,
            accumulated: 0.0,
            last_fire_ms: None,
        }
    }

    pub fn set_cooldown_ms(&mut self, cooldown_ms: f64) {
        self.cooldown_ms = cooldown_ms;
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    fn cooling_down(&self, now_ms: f64) -> bool {
        self.last_fire_ms
            .map(|last| now_ms - last < self.cooldown_ms)
            .unwrap_or(false)
    }

    pub fn ingest(&mut self, delta_y: f64, now_ms: f64, enabled: bool) -> ArbiterOutcome {
        if !enabled || self.cooling_down(now_ms) {
            return ArbiterOutcome::suppressed();
        }
        if !delta_y.is_finite() || delta_y == 0.0 {
            return ArbiterOutcome::IGNORED;
        }

        self.accumulated += delta_y;
        if self.accumulated.abs() < self.threshold {
            return ArbiterOutcome::IGNORED;
        }

        let intent = if self.accumulated > 0.0 {
            Intent::Next
        } else {
            Intent::Prev
        };
        self.accumulated = 0.0;
        self.last_fire_ms = Some(now_ms);
        ArbiterOutcome::fire(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_deltas_accumulate_into_one_intent() {
        let mut wheel = WheelArbiter::default();
        let intents: Vec<_> = [10.0, 10.0, 10.0, 10.0, 10.0]
            .iter()
            .enumerate()
            .filter_map(|(i, &d)| wheel.ingest(d, i as f64 * 16.0, true).intent)
            .collect();
        assert_eq!(intents, vec![Intent::Next]);
        assert_eq!(wheel.accumulated(), 0.0);
    }

    #[test]
    fn negative_deltas_go_back() {
        let mut wheel = WheelArbiter::default();
        assert_eq!(wheel.ingest(-80.0, 0.0, true).intent, Some(Intent::Prev));
    }

    #[test]
    fn cooldown_suppresses_and_holds_accumulator() {
        let mut wheel = WheelArbiter::new(50.0, 800.0);
        assert_eq!(wheel.ingest(60.0, 0.0, true), ArbiterOutcome::fire(Intent::Next));

        let during = wheel.ingest(200.0, 500.0, true);
        assert_eq!(during, ArbiterOutcome::suppressed());
        assert_eq!(wheel.accumulated(), 0.0);

        assert_eq!(wheel.ingest(60.0, 800.0, true).intent, Some(Intent::Next));
    }

    #[test]
    fn disabled_suppresses_everything() {
        let mut wheel = WheelArbiter::default();
        wheel.ingest(30.0, 0.0, true);
        assert_eq!(wheel.ingest(30.0, 10.0, false), ArbiterOutcome::suppressed());
        assert_eq!(wheel.accumulated(), 30.0);
        assert_eq!(wheel.ingest(30.0, 20.0, true).intent, Some(Intent::Next));
    }

    #[test]
    fn below_threshold_passes_through() {
        let mut wheel = WheelArbiter::default();
        assert_eq!(wheel.ingest(20.0, 0.0, true), ArbiterOutcome::IGNORED);
        assert_eq!(wheel.ingest(0.0, 5.0, true), ArbiterOutcome::IGNORED);
        assert_eq!(wheel.ingest(f64::NAN, 6.0, true), ArbiterOutcome::IGNORED);
        assert_eq!(wheel.accumulated(), 20.0);
    }

    #[test]
    fn opposite_directions_cancel_out() {
        let mut wheel = WheelArbiter::default();
        wheel.ingest(40.0, 0.0, true);
        assert_eq!(wheel.ingest(-40.0, 10.0, true).intent, None);
        assert_eq!(wheel.accumulated(), 0.0);
    }
}
