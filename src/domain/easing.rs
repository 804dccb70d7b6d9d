// SPDX-License-Identifier: MPL-2.0
//! Timing curves for overlay animations.
//!
//! Curves are expressed as CSS-style cubic Béziers anchored at `(0, 0)` and
//! `(1, 1)`. Sampling solves the curve's x polynomial for the parameter and
//! returns the matching y, so overshooting curves report values above `1.0`.

/// Timing curve used for one animation leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    /// Constant speed. Used by progress bars.
    #[default]
    Linear,
    /// Material "standard" curve, `cubic-bezier(0.4, 0, 0.2, 1)`. Toast exit.
    Standard,
    /// `cubic-bezier(0.42, 0, 1, 1)`. Modal card exit.
    EaseIn,
    /// Overshooting pop, `cubic-bezier(0.34, 1.56, 0.64, 1)`. Entrances.
    Pop,
}

impl Easing {
    /// Control points `(x1, y1, x2, y2)` of the curve.
    #[must_use]
    pub fn control_points(self) -> (f32, f32, f32, f32) {
        match self {
            Easing::Linear => (0.0, 0.0, 1.0, 1.0),
            Easing::Standard => (0.4, 0.0, 0.2, 1.0),
            Easing::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Easing::Pop => (0.34, 1.56, 0.64, 1.0),
        }
    }

    /// Samples the curve at linear progress `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if self == Easing::Linear || t == 0.0 || t == 1.0 {
            return t;
        }
        let (x1, y1, x2, y2) = self.control_points();
        let s = solve_parameter(t, x1, x2);
        bezier(s, y1, y2)
    }
}

/// One coordinate of a cubic Bézier with endpoints 0 and 1.
fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Finds `s` such that `bezier(s, x1, x2) == x`.
///
/// Newton iterations first, bisection when the slope flattens out.
fn solve_parameter(x: f32, x1: f32, x2: f32) -> f32 {
    const EPSILON: f32 = 1e-6;

    let mut s = x;
    for _ in 0..8 {
        let error = bezier(s, x1, x2) - x;
        if error.abs() < EPSILON {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < EPSILON {
            break;
        }
        s -= error / slope;
    }

    let (mut low, mut high) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = bezier(s, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            low = s;
        } else {
            high = s;
        }
        s = (low + high) / 2.0;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ALL: [Easing; 4] = [Easing::Linear, Easing::Standard, Easing::EaseIn, Easing::Pop];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert_abs_diff_eq!(easing.apply(0.0), 0.0);
            assert_abs_diff_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_abs_diff_eq!(Easing::Standard.apply(-1.0), 0.0);
        assert_abs_diff_eq!(Easing::Standard.apply(4.0), 1.0);
    }

    #[test]
    fn linear_is_identity() {
        assert_abs_diff_eq!(Easing::Linear.apply(0.37), 0.37);
    }

    #[test]
    fn ease_in_lags_behind_linear() {
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
    }

    #[test]
    fn standard_is_ahead_of_linear_at_midpoint() {
        assert!(Easing::Standard.apply(0.5) > 0.5);
    }

    #[test]
    fn pop_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::Pop.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "pop curve should overshoot, peak was {peak}");
    }

    #[test]
    fn parameter_solver_inverts_x_polynomial() {
        let (x1, _, x2, _) = Easing::Standard.control_points();
        for i in 1..10 {
            let x = i as f32 / 10.0;
            let s = solve_parameter(x, x1, x2);
            assert_abs_diff_eq!(bezier(s, x1, x2), x, epsilon = 1e-4);
        }
    }
}
