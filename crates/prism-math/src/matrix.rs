//! Row-major 4×4 matrices.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

use crate::error::{MathError, Result};
use crate::Float;

/// A 4×4 matrix stored row-major: `m[row][col]`.
///
/// `Default` is the zero matrix; use [`Matrix4x4::IDENTITY`] for the identity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix4x4 {
    /// Entries, `m[row][col]`.
    pub m: [[Float; 4]; 4],
}

impl Matrix4x4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// The identity matrix.
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Build from sixteen entries in row-major order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        t00: Float,
        t01: Float,
        t02: Float,
        t03: Float,
        t10: Float,
        t11: Float,
        t12: Float,
        t13: Float,
        t20: Float,
        t21: Float,
        t22: Float,
        t23: Float,
        t30: Float,
        t31: Float,
        t32: Float,
        t33: Float,
    ) -> Self {
        Self {
            m: [
                [t00, t01, t02, t03],
                [t10, t11, t12, t13],
                [t20, t21, t22, t23],
                [t30, t31, t32, t33],
            ],
        }
    }

    /// Whether this is exactly the identity.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        let mut r = Self::default();
        for (i, row) in r.m.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = self.m[j][i];
            }
        }
        r
    }

    /// Determinant of the upper-left 3×3 block.
    pub fn determinant3x3(&self) -> Float {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Inverse by Gauss-Jordan elimination with full pivoting.
    ///
    /// Returns [`MathError::SingularMatrix`] when a pivot column is reused or
    /// the chosen pivot is zero.
    pub fn inverse(&self) -> Result<Self> {
        let mut indxc = [0usize; 4];
        let mut indxr = [0usize; 4];
        let mut ipiv = [0u8; 4];
        let mut minv = self.m;

        for i in 0..4 {
            let mut irow = 0;
            let mut icol = 0;
            let mut big: Float = 0.0;
            // Choose the largest remaining entry as pivot.
            for j in 0..4 {
                if ipiv[j] == 1 {
                    continue;
                }
                for k in 0..4 {
                    match ipiv[k] {
                        0 => {
                            if minv[j][k].abs() >= big {
                                big = minv[j][k].abs();
                                irow = j;
                                icol = k;
                            }
                        }
                        1 => {}
                        _ => return Err(MathError::SingularMatrix("pivot reused")),
                    }
                }
            }
            ipiv[icol] += 1;
            if ipiv[icol] > 1 {
                return Err(MathError::SingularMatrix("pivot reused"));
            }
            if irow != icol {
                minv.swap(irow, icol);
            }
            indxr[i] = irow;
            indxc[i] = icol;

            let pivot = minv[icol][icol];
            if pivot == 0.0 || pivot.is_nan() {
                return Err(MathError::SingularMatrix("zero pivot"));
            }

            let pivinv = 1.0 / pivot;
            minv[icol][icol] = 1.0;
            for v in minv[icol].iter_mut() {
                *v *= pivinv;
            }

            // Eliminate the pivot column from every other row.
            for j in 0..4 {
                if j == icol {
                    continue;
                }
                let save = minv[j][icol];
                minv[j][icol] = 0.0;
                for k in 0..4 {
                    minv[j][k] -= minv[icol][k] * save;
                }
            }
        }

        // Undo the column swaps in reverse order.
        for j in (0..4).rev() {
            if indxr[j] != indxc[j] {
                for row in minv.iter_mut() {
                    row.swap(indxr[j], indxc[j]);
                }
            }
        }

        Ok(Self { m: minv })
    }
}

impl From<[[Float; 4]; 4]> for Matrix4x4 {
    fn from(m: [[Float; 4]; 4]) -> Self {
        Self { m }
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut r = Self::default();
        for i in 0..4 {
            for j in 0..4 {
                r.m[i][j] = self.m[i][0] * rhs.m[0][j]
                    + self.m[i][1] * rhs.m[1][j]
                    + self.m[i][2] * rhs.m[2][j]
                    + self.m[i][3] * rhs.m[3][j];
            }
        }
        r
    }
}

impl fmt::Display for Matrix4x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.m.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, " [ {} {} {} {} ]", row[0], row[1], row[2], row[3])?;
            if i < 3 {
                writeln!(f)?;
            }
        }
        write!(f, " ]")
    }
}
