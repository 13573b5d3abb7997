use rand::Rng;
use std::ops::{Index, IndexMut};

use crate::error::{NetworkError, Result};

/// Dense row-major matrix of `f64`.
///
/// Element `(r, c)` lives at `data[r * cols + c]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Fills a `rows x cols` matrix with independent draws from U[-1, 1],
    /// in row-major order.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let data = (0..rows * cols).map(|_| uniform_unit(rng)).collect();
        Matrix { rows, cols, data }
    }

    /// Wraps an existing row-major buffer, checking that it has `rows * cols` entries.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Matrix> {
        NetworkError::check_len("matrix data", rows * cols, data.len())?;
        Ok(Matrix { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Borrow row `r` as a slice of length `cols`.
    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    pub fn row_mut(&mut self, r: usize) -> &mut [f64] {
        let cols = self.cols;
        &mut self.data[r * cols..(r + 1) * cols]
    }

    /// The underlying row-major storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        &self.data[r * self.cols + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        &mut self.data[r * self.cols + c]
    }
}

/// One draw from U[-1, 1).
pub fn uniform_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>() * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn indexing_is_row_major() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = Matrix::from_vec(2, 2, vec![0.0; 3]).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::DimensionMismatch { expected: 4, actual: 3, .. }
        ));
    }

    #[test]
    fn random_values_stay_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random(16, 16, &mut rng);
        assert_eq!(m.as_slice().len(), 256);
        assert!(m.as_slice().iter().all(|&x| (-1.0..=1.0).contains(&x)));
    }

    #[test]
    fn row_mut_writes_through() {
        let mut m = Matrix::from_vec(2, 2, vec![0.0; 4]).unwrap();
        m.row_mut(1)[0] = 9.0;
        assert_eq!(m[(1, 0)], 9.0);
    }
}
