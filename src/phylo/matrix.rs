use crate::error::ParseError;

/// A symmetric, zero-diagonal pairwise distance matrix over a set of
/// labeled taxa.
///
/// Stored as a single flat, row-major buffer rather than `Vec<Vec<f64>>`:
/// one allocation, one level of indirection, and the same layout
/// `biorust-core`'s own `DistanceMatrix` uses for the same reason.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    labels: Vec<Box<str>>,
    data: Vec<f64>,
    n: usize,
}

impl DistanceMatrix {
    /// Validates and constructs a matrix from a label list and a flattened
    /// `n*n` row-major buffer of distances. This is the only constructor;
    /// every structural invariant is checked here so that a successfully
    /// constructed `DistanceMatrix` is read-only-safe for the engine and
    /// renderers for the rest of its lifetime.
    pub fn new(labels: Vec<Box<str>>, data: Vec<f64>) -> Result<Self, ParseError> {
        let n = labels.len();
        assert_eq!(
            data.len(),
            n * n,
            "distance matrix data length mismatch: expected {}, got {}",
            n * n,
            data.len()
        );

        for i in 0..n {
            let dii = data[i * n + i];
            // The diagonal is compared as single-precision zero,
            // tolerating floating-point noise from upstream conversion.
            if dii as f32 != 0.0f32 {
                return Err(ParseError::NonZeroDiagonal { index: i, value: dii });
            }
            for j in 0..n {
                let dij = data[i * n + j];
                let dji = data[j * n + i];
                if dij != dji {
                    return Err(ParseError::Asymmetric {
                        i,
                        j,
                        dij,
                        dji,
                    });
                }
                if !dij.is_finite() || dij < 0.0 {
                    return Err(ParseError::MalformedNumber {
                        row: i,
                        col: j,
                        field: dij.to_string(),
                    });
                }
            }
        }

        Ok(Self { labels, data, n })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn labels(&self) -> &[Box<str>] {
        &self.labels
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    pub fn set(&mut self, i: usize, j: usize, val: f64) {
        self.data[i * self.n + j] = val;
        self.data[j * self.n + i] = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<Box<str>> {
        names.iter().map(|s| s.to_string().into_boxed_str()).collect()
    }

    #[test]
    fn accepts_valid_matrix() {
        let dm = DistanceMatrix::new(labels(&["A", "B"]), vec![0.0, 5.0, 5.0, 0.0]).unwrap();
        assert_eq!(dm.n(), 2);
        assert_eq!(dm.get(0, 1), 5.0);
    }

    #[test]
    fn rejects_nonzero_diagonal() {
        let err = DistanceMatrix::new(labels(&["A", "B"]), vec![0.1, 5.0, 5.0, 0.0]).unwrap_err();
        assert!(matches!(err, ParseError::NonZeroDiagonal { index: 0, .. }));
    }

    #[test]
    fn rejects_asymmetric() {
        let err = DistanceMatrix::new(labels(&["A", "B"]), vec![0.0, 5.0, 5.01, 0.0]).unwrap_err();
        assert!(matches!(err, ParseError::Asymmetric { i: 0, j: 1, .. }));
    }

    #[test]
    fn tolerates_single_precision_diagonal_noise() {
        // A double-precision diagonal value so small it underflows to
        // 0.0 when cast to f32 must still be accepted.
        let noisy = 1.0e-40_f64;
        let dm = DistanceMatrix::new(labels(&["A", "B"]), vec![noisy, 5.0, 5.0, 0.0]);
        assert!(dm.is_ok());
    }

    #[test]
    fn rejects_diagonal_noise_within_f32_precision() {
        let not_so_noisy = 1.0e-10_f64;
        let err =
            DistanceMatrix::new(labels(&["A", "B"]), vec![not_so_noisy, 5.0, 5.0, 0.0]).unwrap_err();
        assert!(matches!(err, ParseError::NonZeroDiagonal { index: 0, .. }));
    }
}
