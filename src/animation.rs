//! Animation with bezier easing curves
//!
//! Drives transient widget effects such as the button tap ripple. Every
//! time-dependent query has an `_at(now)` form so callers (and tests) can
//! step an animation with their own clock.

use std::time::{Duration, Instant};

/// Standard duration for short feedback animations
pub const DURATION_STANDARD_MS: u32 = 300;

/// Bezier easing function type
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    #[default]
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Custom cubic bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Standard easing presets (CSS-like)
    pub const EASE: Easing = Easing::CubicBezier(0.25, 0.1, 0.25, 1.0);
    pub const EASE_IN: Easing = Easing::CubicBezier(0.42, 0.0, 1.0, 1.0);
    pub const EASE_OUT: Easing = Easing::CubicBezier(0.0, 0.0, 0.58, 1.0);
    pub const EASE_IN_OUT: Easing = Easing::CubicBezier(0.42, 0.0, 0.58, 1.0);

    /// Parse easing from string name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace('-', "_").as_str() {
            "linear" => Some(Easing::Linear),
            "ease" => Some(Easing::EASE),
            "ease_in" | "easein" => Some(Easing::EaseIn),
            "ease_out" | "easeout" => Some(Easing::EaseOut),
            "ease_in_out" | "easeinout" => Some(Easing::EaseInOut),
            _ => None,
        }
    }

    /// Calculate the eased value for a given progress (0.0 to 1.0)
    pub fn ease(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, *x1, *y1, *x2, *y2),
        }
    }
}

/// Cubic bezier interpolation from (0,0) to (1,1)
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Newton-Raphson for s where x(s) = t, then y(s)
    let mut s = t;

    for _ in 0..8 {
        let x = bezier_sample(s, x1, x2) - t;
        if x.abs() < 0.0001 {
            break;
        }
        let dx = bezier_derivative(s, x1, x2);
        if dx.abs() < 0.0001 {
            break;
        }
        s -= x / dx;
    }

    bezier_sample(s.clamp(0.0, 1.0), y1, y2)
}

/// B(s) = 3(1-s)²s·p1 + 3(1-s)s²·p2 + s³
#[inline]
fn bezier_sample(s: f32, p1: f32, p2: f32) -> f32 {
    let one_minus_s = 1.0 - s;
    3.0 * one_minus_s * one_minus_s * s * p1 + 3.0 * one_minus_s * s * s * p2 + s * s * s
}

/// B'(s) = 3(1-s)²·p1 + 6(1-s)s·(p2-p1) + 3s²·(1-p2)
#[inline]
fn bezier_derivative(s: f32, p1: f32, p2: f32) -> f32 {
    let one_minus_s = 1.0 - s;
    3.0 * one_minus_s * one_minus_s * p1
        + 6.0 * one_minus_s * s * (p2 - p1)
        + 3.0 * s * s * (1.0 - p2)
}

/// A single eased transition from `from` to `to`
#[derive(Debug, Clone)]
pub struct Animation {
    /// Start time, `None` while stopped
    start_time: Option<Instant>,
    /// Duration in milliseconds
    duration_ms: u32,
    from: f32,
    to: f32,
    easing: Easing,
}

impl Animation {
    /// Create a stopped animation
    pub fn new(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            start_time: None,
            duration_ms,
            from,
            to,
            easing,
        }
    }

    /// Animation of progress from 0.0 to 1.0
    pub fn progress_curve(duration_ms: u32, easing: Easing) -> Self {
        Self::new(0.0, 1.0, duration_ms, easing)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms as u64)
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Start (or restart) from the beginning
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        self.start_time = Some(now);
    }

    /// Stop without reaching the end value
    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Linear progress (0.0 to 1.0), 0.0 while stopped
    pub fn progress_at(&self, now: Instant) -> f32 {
        let Some(start) = self.start_time else {
            return 0.0;
        };
        if self.duration_ms == 0 {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(start).as_millis() as f32;
        (elapsed / self.duration_ms as f32).min(1.0)
    }

    /// Current eased value
    pub fn value_at(&self, now: Instant) -> f32 {
        let eased = self.easing.ease(self.progress_at(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn value(&self) -> f32 {
        self.value_at(Instant::now())
    }

    /// Started and not yet at the end
    pub fn is_running_at(&self, now: Instant) -> bool {
        self.is_started() && self.progress_at(now) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_easing() {
        let easing = Easing::Linear;
        assert!((easing.ease(0.0) - 0.0).abs() < 0.001);
        assert!((easing.ease(0.5) - 0.5).abs() < 0.001);
        assert!((easing.ease(1.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_ease_out() {
        // Ease out should be faster at the start
        assert!(Easing::EaseOut.ease(0.5) > 0.5);
    }

    #[test]
    fn test_ease_in() {
        // Ease in should be slower at the start
        assert!(Easing::EaseIn.ease(0.5) < 0.5);
    }

    #[test]
    fn test_cubic_bezier_endpoints() {
        let easing = Easing::CubicBezier(0.25, 0.1, 0.25, 1.0);
        assert!((easing.ease(0.0) - 0.0).abs() < 0.01);
        assert!((easing.ease(1.0) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_easing_from_name() {
        assert_eq!(Easing::from_name("ease-out"), Some(Easing::EaseOut));
        assert_eq!(Easing::from_name("Linear"), Some(Easing::Linear));
        assert_eq!(Easing::from_name("bouncy"), None);
    }

    #[test]
    fn test_animation_progress_over_time() {
        let start = Instant::now();
        let mut anim = Animation::progress_curve(300, Easing::Linear);

        assert!(!anim.is_running_at(start));
        assert_eq!(anim.value_at(start), 0.0);

        anim.start_at(start);
        assert!(anim.is_running_at(start));
        let half = anim.value_at(start + Duration::from_millis(150));
        assert!((half - 0.5).abs() < 0.001);

        let end = start + Duration::from_millis(300);
        assert_eq!(anim.value_at(end), 1.0);
        assert!(!anim.is_running_at(end));
    }

    #[test]
    fn test_animation_restart_and_stop() {
        let start = Instant::now();
        let mut anim = Animation::progress_curve(100, Easing::Linear);

        anim.start_at(start);
        let later = start + Duration::from_millis(80);
        anim.start_at(later);
        assert_eq!(anim.progress_at(later), 0.0);

        anim.stop();
        assert!(!anim.is_started());
        assert_eq!(anim.progress_at(later + Duration::from_millis(10)), 0.0);
    }
}
