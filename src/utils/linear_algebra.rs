// src/utils/linear_algebra.rs

use nalgebra::{DMatrix, DVector};

/// Builds the explicit transition operator for 1D advection with a first-order
/// upwind (donor-cell) scheme and positive velocity.
///
/// Row `i >= 1` holds `1 - C[i]` on the diagonal and `C[i]` on the
/// sub-diagonal, so each node takes a Courant-weighted share from its upwind
/// neighbor. Row 0 is the identity row: the first node is held fixed
/// (Dirichlet). The last node follows the interior rule; no outflow
/// condition is imposed on the right.
///
/// # Arguments
///
/// * `courant` - Courant number `u * dt / dx` for each node.
///
/// # Returns
///
/// * A lower-bidiagonal matrix of size \(N \times N\),
///   where \(N\) is the number of nodes.
pub fn build_upwind_transition_operator(courant: &DVector<f64>) -> DMatrix<f64> {
    let n = courant.len();
    let mut transition = DMatrix::zeros(n, n);
    if n == 0 {
        return transition;
    }

    transition[(0, 0)] = 1.0;
    for i in 1..n {
        transition[(i, i)] = 1.0 - courant[i];
        transition[(i, i - 1)] = courant[i];
    }

    transition
}
