use crate::StrError;
use russell_lab::{Matrix, Vector};
use russell_sparse::CooMatrix;

/// Assembles local vector into global vector
///
/// # Output
///
/// * `rr_global` -- is the global vector R with length = `n_equation`
///
/// # Input
///
/// * `r_local` -- is the local vector r; only the first `n_equation_local` entries are used
/// * `local_to_global` -- is an array holding all equation numbers (len = `n_equation_local`)
/// * `prescribed` -- tells whether a global equation number has prescribed
///   DOF or not. Its length is equal to the total number of DOFs `n_equation`.
///
/// # Panics
///
/// This function will panic if the indices are out-of-bounds
#[inline]
pub fn assemble_vector(rr_global: &mut Vector, r_local: &Vector, local_to_global: &[usize], prescribed: &[bool]) {
    for (l, g) in local_to_global.iter().enumerate() {
        if !prescribed[*g] {
            rr_global[*g] += r_local[l];
        }
    }
}

/// Assembles local matrix into global matrix
///
/// # Output
///
/// * `kk_global` -- is the global square (sparse) matrix K with dims = (`n_equation`,`n_equation`)
///
/// # Input
///
/// * `kk_local` -- is the local square matrix K; only the leading
///   (`n_equation_local`,`n_equation_local`) block is used
/// * `local_to_global` -- is an array holding all equation numbers (len = `n_equation_local`)
/// * `prescribed` -- tells whether a global equation number has prescribed
///   DOF or not. Its length is equal to the total number of DOFs `n_equation`.
///
/// # Panics
///
/// This function will panic if the indices are out-of-bounds
///
/// Returns an error if the CooMatrix runs out of room (see `Equations::nnz_sup`)
#[inline]
pub fn assemble_matrix(
    kk_global: &mut CooMatrix,
    kk_local: &Matrix,
    local_to_global: &[usize],
    prescribed: &[bool],
) -> Result<(), StrError> {
    for (l, g) in local_to_global.iter().enumerate() {
        if !prescribed[*g] {
            for (ll, gg) in local_to_global.iter().enumerate() {
                if !prescribed[*gg] {
                    kk_global.put(*g, *gg, kk_local.get(l, ll))?;
                }
            }
        }
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{assemble_matrix, assemble_vector};
    use russell_lab::{Matrix, Vector};
    use russell_sparse::{CooMatrix, Sym};

    #[test]
    fn assemble_vector_works() {
        //       {4} 4---.__
        //          / \     `--.___3 {3}  [#] indicates id
        //         /   \          / \     {#} indicates equation id
        //        /     \  [1]   /   \
        //       /  [0]  \      / [2] \
        //      /         \    /       \
        // {0} 0---.__     \  /      ___2 {2}
        //            `--.__\/__.---'
        //               {1} 1
        let l2g = vec![vec![0, 1, 4], vec![1, 3, 4], vec![1, 2, 3]];
        let neq = 5;
        let mut ff = Vector::new(neq);
        // local vectors are larger than needed (fixed capacity); the tail is ignored
        let f0 = Vector::from(&[/*    */ 10.0, /*    */ 11.0, /*    */ 14.0, 1e9]);
        let f1 = Vector::from(&[/*  */ 2100.0, /*  */ 2300.0, /*  */ 2400.0, 1e9]);
        let f2 = Vector::from(&[/**/ 310000.0, /**/ 320000.0, /**/ 330000.0, 1e9]);
        let mut prescribed = vec![false; neq];
        prescribed[2] = true;
        assemble_vector(&mut ff, &f0, &l2g[0], &prescribed);
        assemble_vector(&mut ff, &f1, &l2g[1], &prescribed);
        assemble_vector(&mut ff, &f2, &l2g[2], &prescribed);
        assert_eq!(ff.as_data(), &[10.0, 312111.0, /*prescribed*/ 0.0, 332300.0, 2414.0]);
    }

    #[test]
    fn assemble_matrix_works() {
        let l2g = vec![vec![0, 1, 4], vec![1, 3, 4], vec![1, 2, 3]];
        let neq = 5;
        let mut kk = CooMatrix::new(neq, neq, 3 * 9, Sym::No).unwrap();
        #[rustfmt::skip]
        let k0 = Matrix::from(&[
            [10.0, 11.0, 14.0],
            [10.0, 11.0, 14.0],
            [10.0, 11.0, 14.0],
        ]);
        #[rustfmt::skip]
        let k1 = Matrix::from(&[
            [2100.0, 2300.0, 2400.0],
            [2100.0, 2300.0, 2400.0],
            [2100.0, 2300.0, 2400.0],
        ]);
        #[rustfmt::skip]
        let k2 = Matrix::from(&[
            [310000.0, 320000.0, 330000.0],
            [310000.0, 320000.0, 330000.0],
            [310000.0, 320000.0, 330000.0],
        ]);
        let mut prescribed = vec![false; neq];
        prescribed[2] = true;
        assemble_matrix(&mut kk, &k0, &l2g[0], &prescribed).unwrap();
        assemble_matrix(&mut kk, &k1, &l2g[1], &prescribed).unwrap();
        assemble_matrix(&mut kk, &k2, &l2g[2], &prescribed).unwrap();
        let kk_mat = kk.as_dense();
        #[rustfmt::skip]
        let correct = [
            [10.0,     11.0, /*prescribed*/ 0.0,      0.0,   14.0], // 0
            [10.0, 312111.0, /*prescribed*/ 0.0, 332300.0, 2414.0], // 1
            [ 0.0,      0.0, /*prescribed*/ 0.0,      0.0,    0.0], // 2 (all prescribed)
            [ 0.0, 312100.0, /*prescribed*/ 0.0, 332300.0, 2400.0], // 3
            [10.0,   2111.0, /*prescribed*/ 0.0,   2300.0, 2414.0], // 4
        ];
        for i in 0..neq {
            for j in 0..neq {
                assert_eq!(kk_mat.get(i, j), correct[i][j]);
            }
        }
    }

    #[test]
    fn assemble_matrix_captures_errors() {
        let l2g = [0, 1];
        let mut kk = CooMatrix::new(2, 2, 3, Sym::No).unwrap();
        let k0 = Matrix::filled(2, 2, 1.0);
        assert!(assemble_matrix(&mut kk, &k0, &l2g, &[false, false]).is_err());
        // prescribed equations do not take room
        let mut kk = CooMatrix::new(2, 2, 1, Sym::No).unwrap();
        assemble_matrix(&mut kk, &k0, &l2g, &[false, true]).unwrap();
        assert_eq!(kk.as_dense().get(0, 0), 1.0);
    }
}
