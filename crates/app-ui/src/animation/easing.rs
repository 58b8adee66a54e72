use serde::{Deserialize, Serialize};

/// Animation easing function.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Standard `ease` curve, cubic-bezier(0.42, 0, 1, 1).
    Ease,
    /// `Ease` applied symmetrically: slow start, fast middle, slow end.
    #[default]
    EaseInOut,
    /// Custom cubic bezier curve.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply easing function to normalized time (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Ease => ease(t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    ease(t * 2.0) / 2.0
                } else {
                    1.0 - ease((1.0 - t) * 2.0) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_sample(t, *x1, *y1, *x2, *y2),
        }
    }
}

fn ease(t: f32) -> f32 {
    cubic_bezier_sample(t, 0.42, 0.0, 1.0, 1.0)
}

/// Sample cubic bezier curve at time t.
fn cubic_bezier_sample(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let s = solve_curve_x(t, x1, x2);
    cubic_bezier_value(s, y1, y2)
}

/// Find the curve parameter whose x equals `x`.
///
/// Newton-Raphson first; falls back to bisection where the slope flattens.
fn solve_curve_x(x: f32, x1: f32, x2: f32) -> f32 {
    let mut guess = x;
    for _ in 0..8 {
        let err = cubic_bezier_value(guess, x1, x2) - x;
        if err.abs() < 1e-6 {
            return guess;
        }
        let dx = cubic_bezier_derivative(guess, x1, x2);
        if dx.abs() < 1e-6 {
            break;
        }
        guess -= err / dx;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    guess = x;
    for _ in 0..32 {
        let value = cubic_bezier_value(guess, x1, x2);
        if (value - x).abs() < 1e-6 {
            break;
        }
        if value < x {
            lo = guess;
        } else {
            hi = guess;
        }
        guess = (lo + hi) / 2.0;
    }
    guess
}

fn cubic_bezier_value(t: f32, p1: f32, p2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * p1 + 3.0 * mt * t2 * p2 + t3
}

fn cubic_bezier_derivative(t: f32, p1: f32, p2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::Ease,
            Easing::EaseInOut,
            Easing::CubicBezier(0.4, 0.0, 0.2, 1.0),
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::EaseInOut.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseInOut.apply(2.0), 1.0);
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let easing = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((easing.apply(t) - t).abs() < EPS);
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let easing = Easing::EaseInOut;
        assert!((easing.apply(0.5) - 0.5).abs() < EPS);
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let sum = easing.apply(t) + easing.apply(1.0 - t);
            assert!((sum - 1.0).abs() < EPS, "t = {t}, sum = {sum}");
        }
    }

    #[test]
    fn test_ease_in_out_is_monotonic_and_bounded() {
        let easing = Easing::EaseInOut;
        let mut previous = 0.0;
        for i in 0..=100 {
            let value = easing.apply(i as f32 / 100.0);
            assert!((0.0..=1.0).contains(&value));
            assert!(value + 1e-5 >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_ease_starts_slow() {
        assert!(Easing::EaseInOut.apply(0.1) < 0.1);
        assert!(Easing::EaseInOut.apply(0.9) > 0.9);
    }

    #[test]
    fn test_easing_serialization() {
        let json = serde_json::to_string(&Easing::EaseInOut).unwrap();
        assert_eq!(json, "\"ease_in_out\"");
        let restored: Easing = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, Easing::EaseInOut);
    }
}
