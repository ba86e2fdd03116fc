//! Wall-clock stopwatch helpers.

use std::time::{Duration, Instant};

/// Time a single call of `f`.
pub fn measure<F: FnOnce()>(f: F) -> Duration {
    measure_with(f).1
}

/// Time a single call of `f`, keeping its result.
pub fn measure_with<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Duration in fractional milliseconds.
#[inline]
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_covers_the_call() {
        let elapsed = measure(|| std::thread::sleep(Duration::from_millis(5)));
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_measure_with_returns_result() {
        let (value, _) = measure_with(|| 21 * 2);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_as_millis_f64() {
        assert!((as_millis_f64(Duration::from_micros(1500)) - 1.5).abs() < 1e-9);
        assert_eq!(as_millis_f64(Duration::ZERO), 0.0);
    }
}
