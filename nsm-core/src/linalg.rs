//! Small dense linear solves for hosts that produce sediment fluxes.
//!
//! NSM-I reads `SOD_Bed`, `JNH4`, `JNO3`, `JSRP` and `JDIC` as forcing when `use_SedFlux`
//! is set. A two-layer sediment model computing those fluxes between steps balances each
//! dissolved species across the aerobic and anaerobic layers, which is a 2x2 system per
//! species. The kinetics never call this themselves.

use crate::errors::{NsmError, NsmResult};

/// Solve the 2x2 system `[[a11, a12], [a21, a22]] . [x1, x2] = [b1, b2]` by Cramer's rule.
///
/// Returns [`NsmError::SingularMatrix`] when the determinant is exactly zero.
///
/// ```
/// use nsm_core::linalg::solve_2x2;
///
/// // Layer balance: (k1 + s) * c1 - s * c2 = j, -s * c1 + (k2 + s) * c2 = 0
/// let (k1, k2, s, j) = (0.5, 0.2, 0.2, 1.2);
/// let (c1, c2) = solve_2x2(k1 + s, -s, -s, k2 + s, j, 0.0).unwrap();
/// assert!((c1 - 2.0).abs() < 1e-12);
/// assert!((c2 - 1.0).abs() < 1e-12);
/// ```
pub fn solve_2x2(
    a11: f64,
    a12: f64,
    a21: f64,
    a22: f64,
    b1: f64,
    b2: f64,
) -> NsmResult<(f64, f64)> {
    let det = a11 * a22 - a12 * a21;
    if det == 0.0 {
        return Err(NsmError::SingularMatrix);
    }
    let x1 = (b1 * a22 - a12 * b2) / det;
    let x2 = (a11 * b2 - b1 * a21) / det;
    Ok((x1, x2))
}
