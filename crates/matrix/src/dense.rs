//! Heap-allocated dense square matrix backed by `ndarray`.

use std::fmt;

use chainscope_graph::Graph;
use chainscope_scc::Partition;
use ndarray::{Array2, ArrayView1, Axis};

use crate::error::MatrixError;

/// Dense `n x n` matrix of `f64`.
///
/// Every operation that produces a matrix allocates a fresh one; no two
/// matrices share storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Array2<f64>,
}

/// Rejects sizes that are empty or whose `n * n` entries cannot be
/// addressed.
fn check_size(n: usize) -> Result<(), MatrixError> {
    let bytes = n
        .checked_mul(n)
        .and_then(|len| len.checked_mul(std::mem::size_of::<f64>()));
    match bytes {
        Some(b) if n > 0 && b <= isize::MAX as usize => Ok(()),
        _ => Err(MatrixError::InvalidSize { n }),
    }
}

impl Matrix {
    /// Returns an `n x n` matrix of zeros.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidSize`] if `n == 0` or `n * n` entries
    /// overflow the address space.
    pub fn zeros(n: usize) -> Result<Self, MatrixError> {
        check_size(n)?;
        Ok(Self {
            data: Array2::zeros((n, n)),
        })
    }

    /// Returns the `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidSize`] under the same conditions as
    /// [`Matrix::zeros`].
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        check_size(n)?;
        Ok(Self {
            data: Array2::eye(n),
        })
    }

    /// Builds a matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidSize`] for no rows and
    /// [`MatrixError::NotSquare`] if any row length differs from the number
    /// of rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        let n = rows.len();
        let mut m = Self::zeros(n)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(MatrixError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            m.data.row_mut(i).assign(&ArrayView1::from(row.as_slice()));
        }
        Ok(m)
    }

    /// Builds the full transition matrix of a graph.
    ///
    /// Entry `(i, j)` is the probability of moving from state `i + 1` to
    /// state `j + 1`. Duplicate edges accumulate.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidSize`] if the graph has too many states
    /// for a dense matrix.
    pub fn from_graph(graph: &Graph) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(graph.n_states())?;
        for edge in graph.edges() {
            m.data[[edge.from_index(), edge.to_index()]] += edge.probability();
        }
        Ok(m)
    }

    /// Returns the dimension `n`.
    pub fn size(&self) -> usize {
        self.data.nrows()
    }

    /// Returns the entry at `(row, col)`, both 0-based.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= size()`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        let n = self.size();
        assert!(row < n && col < n, "index ({row}, {col}) out of bounds");
        self.data[[row, col]]
    }

    /// Sets the entry at `(row, col)`, both 0-based.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= size()`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let n = self.size();
        assert!(row < n && col < n, "index ({row}, {col}) out of bounds");
        self.data[[row, col]] = value;
    }

    /// Returns a view of row `i`.
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.data.row(i)
    }

    /// Iterates over the diagonal entries.
    pub fn diagonal(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.diag().into_iter().copied()
    }

    /// Overwrites this matrix with the contents of `src`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the sizes differ; the
    /// destination is left untouched.
    pub fn copy_from(&mut self, src: &Matrix) -> Result<(), MatrixError> {
        self.check_same_size(src)?;
        self.data.assign(&src.data);
        Ok(())
    }

    /// Returns the product `self * other`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the sizes differ.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_same_size(other)?;
        Ok(Matrix {
            data: self.data.dot(&other.data),
        })
    }

    /// Returns the sum of absolute entrywise differences.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the sizes differ.
    pub fn difference(&self, other: &Matrix) -> Result<f64, MatrixError> {
        self.check_same_size(other)?;
        Ok((&self.data - &other.data).mapv(f64::abs).sum())
    }

    /// Returns `alpha * self + (1 - alpha) * other`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the sizes differ.
    pub fn mix(&self, other: &Matrix, alpha: f64) -> Result<Matrix, MatrixError> {
        self.check_same_size(other)?;
        Ok(Matrix {
            data: &self.data * alpha + &other.data * (1.0 - alpha),
        })
    }

    /// Returns `self^k` by repeated multiplication; `k = 0` gives the identity.
    pub fn power(&self, k: usize) -> Matrix {
        if k == 0 {
            return Matrix {
                data: Array2::eye(self.size()),
            };
        }
        let mut data = self.data.clone();
        for _ in 1..k {
            data = data.dot(&self.data);
        }
        Matrix { data }
    }

    /// Returns the row vector `v * self`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::VectorLength`] if `v.len() != size()`.
    pub fn left_multiply_vector(&self, v: &[f64]) -> Result<Vec<f64>, MatrixError> {
        if v.len() != self.size() {
            return Err(MatrixError::VectorLength {
                expected: self.size(),
                got: v.len(),
            });
        }
        Ok(ArrayView1::from(v).dot(&self.data).to_vec())
    }

    /// Extracts the rows and columns of the given 1-based states, in the
    /// given order, into a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidSize`] for an empty selection and
    /// [`MatrixError::StateOutOfRange`] for a state outside `1..=size()`.
    pub fn submatrix(&self, states: &[usize]) -> Result<Matrix, MatrixError> {
        let n = self.size();
        if let Some(&state) = states.iter().find(|&&s| s == 0 || s > n) {
            return Err(MatrixError::StateOutOfRange { state, size: n });
        }
        check_size(states.len())?;
        let indices: Vec<usize> = states.iter().map(|s| s - 1).collect();
        Ok(Matrix {
            data: self
                .data
                .select(Axis(0), &indices)
                .select(Axis(1), &indices),
        })
    }

    /// Extracts the transition submatrix of one class, rows and columns in
    /// the class's member order.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Scc`] for an unknown class index,
    /// [`MatrixError::EmptyClass`] for a class with no members, and
    /// [`MatrixError::StateOutOfRange`] if a member lies outside the matrix.
    pub fn submatrix_for_class(
        &self,
        partition: &Partition,
        class_index: usize,
    ) -> Result<Matrix, MatrixError> {
        let class = partition.class(class_index)?;
        if class.is_empty() {
            return Err(MatrixError::EmptyClass { index: class_index });
        }
        self.submatrix(class.members())
    }

    fn check_same_size(&self, other: &Matrix) -> Result<(), MatrixError> {
        if self.size() != other.size() {
            return Err(MatrixError::DimensionMismatch {
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.rows() {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:.2}")).collect();
            writeln!(f, "[{}]", cells.join("  "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn m(rows: &[&[f64]]) -> Matrix {
        let rows: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
        Matrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn zeros_rejects_empty() {
        assert_eq!(Matrix::zeros(0), Err(MatrixError::InvalidSize { n: 0 }));
        assert_eq!(Matrix::identity(0), Err(MatrixError::InvalidSize { n: 0 }));
    }

    #[test]
    fn oversized_dimension_is_rejected() {
        assert_eq!(
            Matrix::zeros(usize::MAX),
            Err(MatrixError::InvalidSize { n: usize::MAX })
        );
        assert_eq!(
            Matrix::identity(1 << 32),
            Err(MatrixError::InvalidSize { n: 1 << 32 })
        );
        assert!(Matrix::zeros(1 << 31).is_err());
    }

    #[test]
    fn zeros_and_identity() {
        let z = Matrix::zeros(3).unwrap();
        assert!((0..3).all(|i| z.row(i).iter().all(|&v| v == 0.0)));
        let id = Matrix::identity(3).unwrap();
        assert_eq!(id.diagonal().collect::<Vec<_>>(), vec![1.0, 1.0, 1.0]);
        assert_eq!(id.get(0, 1), 0.0);
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = Matrix::from_rows(&[vec![1.0, 0.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn from_graph_places_probabilities() {
        let mut g = Graph::new(3).unwrap();
        g.add_edge(1, 2, 0.3).unwrap();
        g.add_edge(1, 3, 0.7).unwrap();
        g.add_edge(3, 3, 1.0).unwrap();
        let mat = Matrix::from_graph(&g).unwrap();
        assert_eq!(mat.size(), 3);
        assert_abs_diff_eq!(mat.get(0, 1), 0.3);
        assert_abs_diff_eq!(mat.get(0, 2), 0.7);
        assert_abs_diff_eq!(mat.get(2, 2), 1.0);
        assert_abs_diff_eq!(mat.get(1, 0), 0.0);
    }

    #[test]
    fn from_graph_accumulates_duplicates() {
        let mut g = Graph::new(2).unwrap();
        g.add_edge(1, 2, 0.25).unwrap();
        g.add_edge(1, 2, 0.5).unwrap();
        let mat = Matrix::from_graph(&g).unwrap();
        assert_abs_diff_eq!(mat.get(0, 1), 0.75);
    }

    #[test]
    fn multiply_known_product() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[0.0, 1.0], &[1.0, 0.0]]);
        assert_eq!(a.multiply(&b).unwrap(), m(&[&[2.0, 1.0], &[4.0, 3.0]]));
    }

    #[test]
    fn multiply_rejects_mismatch() {
        let a = Matrix::identity(2).unwrap();
        let b = Matrix::identity(3).unwrap();
        assert_eq!(
            a.multiply(&b),
            Err(MatrixError::DimensionMismatch { left: 2, right: 3 })
        );
        assert!(a.difference(&b).is_err());
        assert!(a.mix(&b, 0.5).is_err());
    }

    #[test]
    fn difference_is_l1() {
        let a = m(&[&[1.0, 0.0], &[0.5, 0.5]]);
        let b = m(&[&[0.0, 1.0], &[0.5, 0.25]]);
        assert_abs_diff_eq!(a.difference(&b).unwrap(), 2.25);
        assert_abs_diff_eq!(a.difference(&a).unwrap(), 0.0);
    }

    #[test]
    fn mix_is_affine() {
        let a = m(&[&[0.0, 1.0], &[1.0, 0.0]]);
        let id = Matrix::identity(2).unwrap();
        let lazy = a.mix(&id, 0.5).unwrap();
        assert_eq!(lazy, m(&[&[0.5, 0.5], &[0.5, 0.5]]));
    }

    #[test]
    fn copy_from_overwrites() {
        let src = m(&[&[0.1, 0.9], &[0.4, 0.6]]);
        let mut dst = Matrix::zeros(2).unwrap();
        dst.copy_from(&src).unwrap();
        assert_eq!(dst, src);
        let mut wrong = Matrix::zeros(3).unwrap();
        assert!(wrong.copy_from(&src).is_err());
        assert_eq!(wrong, Matrix::zeros(3).unwrap());
    }

    #[test]
    fn power_of_swap() {
        let swap = m(&[&[0.0, 1.0], &[1.0, 0.0]]);
        assert_eq!(swap.power(0), Matrix::identity(2).unwrap());
        assert_eq!(swap.power(1), swap);
        assert_eq!(swap.power(2), Matrix::identity(2).unwrap());
        assert_eq!(swap.power(3), swap);
    }

    #[test]
    fn left_multiply_vector_row_times_matrix() {
        let p = m(&[&[0.9, 0.1], &[0.5, 0.5]]);
        let out = p.left_multiply_vector(&[1.0, 0.0]).unwrap();
        assert_abs_diff_eq!(out[0], 0.9);
        assert_abs_diff_eq!(out[1], 0.1);
        assert_eq!(
            p.left_multiply_vector(&[1.0]),
            Err(MatrixError::VectorLength {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn submatrix_follows_member_order() {
        let full = m(&[
            &[0.0, 0.1, 0.2],
            &[1.0, 1.1, 1.2],
            &[2.0, 2.1, 2.2],
        ]);
        let sub = full.submatrix(&[3, 1]).unwrap();
        assert_eq!(sub, m(&[&[2.2, 2.0], &[0.2, 0.0]]));
    }

    #[test]
    fn submatrix_rejects_bad_selection() {
        let full = Matrix::identity(2).unwrap();
        assert_eq!(full.submatrix(&[]), Err(MatrixError::InvalidSize { n: 0 }));
        assert_eq!(
            full.submatrix(&[1, 3]),
            Err(MatrixError::StateOutOfRange { state: 3, size: 2 })
        );
    }

    #[test]
    fn submatrix_for_class_uses_partition() {
        let full = m(&[
            &[0.0, 1.0, 0.0],
            &[1.0, 0.0, 0.0],
            &[0.5, 0.0, 0.5],
        ]);
        let partition = Partition::from_members(vec![vec![2, 1], vec![3]], 3);
        let sub = full.submatrix_for_class(&partition, 0).unwrap();
        assert_eq!(sub, m(&[&[0.0, 1.0], &[1.0, 0.0]]));
        let single = full.submatrix_for_class(&partition, 1).unwrap();
        assert_eq!(single, m(&[&[0.5]]));
        assert!(matches!(
            full.submatrix_for_class(&partition, 2),
            Err(MatrixError::Scc(_))
        ));
    }

    #[test]
    fn display_two_decimals() {
        let p = m(&[&[0.5, 0.5], &[0.25, 0.75]]);
        assert_eq!(p.to_string(), "[0.50  0.50]\n[0.25  0.75]\n");
    }
}
