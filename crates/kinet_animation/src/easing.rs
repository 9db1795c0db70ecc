//! Easing functions for timed animations

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    /// CSS-style cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1)
    Bezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match *self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Bezier(x1, y1, x2, y2) => bezier_ease(t, x1, y1, x2, y2),
        }
    }
}

/// Cubic bezier easing matching CSS `cubic-bezier()`.
///
/// Solves x(p) = t with Newton-Raphson, falling back to bisection when the
/// slope flattens out. Runs in f64 so repeated per-frame evaluation does not
/// jitter.
fn bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = t as f64;
    let (ax, bx, cx) = coefficients(x1 as f64, x2 as f64);
    let (ay, by, cy) = coefficients(y1 as f64, y2 as f64);

    let mut p = x;
    for _ in 0..8 {
        let err = sample(ax, bx, cx, p) - x;
        if err.abs() < 1e-7 {
            return sample(ay, by, cy, p) as f32;
        }
        let slope = (3.0 * ax * p + 2.0 * bx) * p + cx;
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    // Bisection always converges on [0, 1].
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    p = x;
    for _ in 0..20 {
        let val = sample(ax, bx, cx, p);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    sample(ay, by, cy, p) as f32
}

/// Polynomial coefficients for one axis of a unit-endpoint cubic bezier.
fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (a, b, c)
}

#[inline]
fn sample(a: f64, b: f64, c: f64, t: f64) -> f64 {
    ((a * t + b) * t + c) * t
}
