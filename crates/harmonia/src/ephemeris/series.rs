//! Periodic-term series evaluation.
//!
//! A term `(A, B, C)` contributes `A·cos(B + C·τ)`. VSOP87-style quantities
//! are power series whose coefficients are themselves such sums:
//! `X = Σ_k (Σ terms_k) · τ^k`.

/// One periodic term
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicTerm {
    pub amplitude: f64,
    pub phase: f64,
    pub frequency: f64,
}

impl PeriodicTerm {
    pub const fn new(amplitude: f64, phase: f64, frequency: f64) -> Self {
        Self { amplitude, phase, frequency }
    }

    pub fn evaluate(&self, tau: f64) -> f64 {
        self.amplitude * (self.phase + self.frequency * tau).cos()
    }
}

/// Sum of a fixed term table at `tau`.
pub fn sum(terms: &[PeriodicTerm], tau: f64) -> f64 {
    terms.iter().map(|term| term.evaluate(tau)).sum()
}

/// Power series `Σ_k sum(tables[k]) · τ^k`, evaluated Horner-style.
pub fn power_series(tables: &[&[PeriodicTerm]], tau: f64) -> f64 {
    tables
        .iter()
        .rev()
        .fold(0.0, |acc, table| acc * tau + sum(table, tau))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [PeriodicTerm; 2] = [
        PeriodicTerm::new(2.0, 0.0, 0.0),
        PeriodicTerm::new(1.0, 0.0, std::f64::consts::PI),
    ];

    #[test]
    fn test_sum_at_origin() {
        assert!((sum(&TABLE, 0.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_sum_at_one() {
        // cos(pi) = -1
        assert!((sum(&TABLE, 1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_power_series_weights_by_tau() {
        let constant: &[PeriodicTerm] = &[PeriodicTerm::new(1.0, 0.0, 0.0)];
        let linear: &[PeriodicTerm] = &[PeriodicTerm::new(2.0, 0.0, 0.0)];
        // 1 + 2·0.5
        assert!((power_series(&[constant, linear], 0.5) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_table_is_zero() {
        assert_eq!(sum(&[], 12.0), 0.0);
        assert_eq!(power_series(&[], 12.0), 0.0);
    }
}
