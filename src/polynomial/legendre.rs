//! Legendre polynomial evaluation.
//!
//! Legendre polynomials P_n(x) are orthogonal on [-1, 1] with weight 1:
//! ∫_{-1}^{1} P_m(x) P_n(x) dx = 2/(2n+1) δ_{mn}
//!
//! Values are produced by Bonnet's three-term recurrence. Outside [-1, 1]
//! the polynomials grow like |x|^n and eventually overflow; once a term is
//! no longer finite the recurrence degenerates to `P_n = x * P_{n-1}`, so
//! infinities keep their IEEE-754 sign and NaN stays NaN.

/// Iterator over P_0(x), P_1(x), P_2(x), ... for a fixed x.
///
/// The recurrence is written with k = 1/n:
///
/// ```text
/// P_0(x) = 1
/// P_1(x) = x
/// P_n(x) = (2 - k) x P_{n-1}(x) - (1 - k) P_{n-2}(x)
/// ```
///
/// If P_{n-1}(x) is not finite, P_n(x) = x P_{n-1}(x) instead. Only the
/// finiteness of P_{n-1} is checked; P_{n-2} is ignored.
///
/// The iterator is unbounded; use [`Iterator::take`] to limit it.
///
/// # Example
///
/// ```
/// use legendre_encoding::polynomial::LegendreRecurrence;
///
/// let p: Vec<f64> = LegendreRecurrence::new(0.5).take(3).collect();
/// assert_eq!(p, vec![1.0, 0.5, -0.125]);
/// ```
#[derive(Clone, Debug)]
pub struct LegendreRecurrence {
    x: f64,
    /// Degree of the next value to yield.
    n: usize,
    /// P_{n-2}
    p_prev: f64,
    /// P_{n-1}
    p_curr: f64,
}

impl LegendreRecurrence {
    /// Start the recurrence at P_0 for the given abscissa.
    pub fn new(x: f64) -> Self {
        Self {
            x,
            n: 0,
            p_prev: 1.0,
            p_curr: x,
        }
    }

    /// The abscissa the polynomials are evaluated at.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Degree of the value the next call to `next` yields.
    #[inline]
    pub fn degree(&self) -> usize {
        self.n
    }
}

impl Iterator for LegendreRecurrence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let n = self.n;
        self.n += 1;

        match n {
            0 => Some(1.0),
            1 => Some(self.x),
            _ => {
                let x = self.x;
                let p_next = if self.p_curr.is_finite() {
                    let k = 1.0 / n as f64;
                    (2.0 - k) * x * self.p_curr - (1.0 - k) * self.p_prev
                } else {
                    x * self.p_curr
                };
                self.p_prev = self.p_curr;
                self.p_curr = p_next;
                Some(p_next)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Evaluate Legendre polynomial P_n(x) using the three-term recurrence.
///
/// Same overflow policy as [`LegendreRecurrence`].
pub fn legendre(n: usize, x: f64) -> f64 {
    // The iterator never ends, so nth always yields.
    LegendreRecurrence::new(x).nth(n).unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legendre_values() {
        // P_0(x) = 1
        assert!((legendre(0, 0.5) - 1.0).abs() < 1e-14);

        // P_1(x) = x
        assert!((legendre(1, 0.5) - 0.5).abs() < 1e-14);

        // P_2(x) = (3x^2 - 1)/2
        let x = 0.5;
        let expected = (3.0 * x * x - 1.0) / 2.0;
        assert!((legendre(2, x) - expected).abs() < 1e-14);

        // P_3(x) = (5x^3 - 3x)/2
        let expected = (5.0 * x * x * x - 3.0 * x) / 2.0;
        assert!((legendre(3, x) - expected).abs() < 1e-14);

        // P_4(x) = (35x^4 - 30x^2 + 3)/8
        let expected = (35.0 * x.powi(4) - 30.0 * x * x + 3.0) / 8.0;
        assert!((legendre(4, x) - expected).abs() < 1e-14);
    }

    #[test]
    fn test_legendre_at_boundaries() {
        // P_n(1) = 1 for all n
        for n in 0..=8 {
            assert!((legendre(n, 1.0) - 1.0).abs() < 1e-13);
        }

        // P_n(-1) = (-1)^n
        for n in 0..=8 {
            let expected = if n % 2 == 0 { 1.0 } else { -1.0 };
            assert!((legendre(n, -1.0) - expected).abs() < 1e-13);
        }
    }

    #[test]
    fn test_recurrence_matches_bonnet_form() {
        // (n+1) P_{n+1} = (2n+1) x P_n - n P_{n-1}
        for &x in &[-0.9, -0.5, 0.0, 0.3, 0.75, 1.0] {
            let p: Vec<f64> = LegendreRecurrence::new(x).take(10).collect();
            for n in 1..9 {
                let lhs = (n + 1) as f64 * p[n + 1];
                let rhs = (2 * n + 1) as f64 * x * p[n] - n as f64 * p[n - 1];
                assert!((lhs - rhs).abs() < 1e-12, "n = {}, x = {}", n, x);
            }
        }
    }

    #[test]
    fn test_bounded_inside_interval() {
        // |P_n(x)| <= 1 on [-1, 1]
        for i in 0..=20 {
            let x = -1.0 + 0.1 * i as f64;
            for p in LegendreRecurrence::new(x).take(30) {
                assert!(p.is_finite());
                assert!(p.abs() <= 1.0 + 1e-12);
            }
        }
    }

    #[test]
    fn test_overflow_keeps_sign() {
        let x = -(2.0f64).powi(1000);
        let p: Vec<f64> = LegendreRecurrence::new(x).take(5).collect();
        assert_eq!(p[0], 1.0);
        assert_eq!(p[1], x);
        assert_eq!(p[2], f64::INFINITY);
        assert_eq!(p[3], f64::NEG_INFINITY);
        assert_eq!(p[4], f64::INFINITY);
    }

    #[test]
    fn test_infinite_argument() {
        let p: Vec<f64> = LegendreRecurrence::new(f64::NEG_INFINITY).take(4).collect();
        assert_eq!(p, vec![1.0, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY]);
    }

    #[test]
    fn test_nan_propagates() {
        let mut it = LegendreRecurrence::new(f64::NAN);
        assert_eq!(it.next(), Some(1.0));
        for _ in 0..5 {
            assert!(it.next().is_some_and(f64::is_nan));
        }
    }

    #[test]
    fn test_degree_tracks_position() {
        let mut it = LegendreRecurrence::new(0.2);
        assert_eq!(it.degree(), 0);
        it.next();
        it.next();
        assert_eq!(it.degree(), 2);
        assert_eq!(it.x(), 0.2);
    }
}
