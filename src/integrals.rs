//! Converged-integral extraction in the molecular-orbital basis.
//!
//! Both extractors are pure reads over a finished calculation: nothing is
//! cached, and calling them before the SCF has run yields whatever the
//! engine's initial state contains.

use nalgebra::DMatrix;
use ndarray::Array4;

use crate::engine::{Engine, PermutationSymmetry};
use crate::error::Result;
use crate::molecule::Molecule;
use crate::scf::ScfCalculation;

/// One-electron integrals in the MO basis: `C^T * H_core * C`.
///
/// The orbital count of the result is the MO count, i.e. the column count
/// of the coefficient matrix.
pub fn one_body_integrals<E: Engine>(scf: &ScfCalculation<'_, E>) -> DMatrix<f64> {
    let coeffs = scf.mo_coefficients();
    let h_core = scf.core_hamiltonian();
    coeffs.transpose() * h_core * coeffs
}

/// Two-electron integrals in the MO basis, chemists' index order, full
/// n^4 storage.
///
/// The engine transforms its AO integrals over the converged coefficients
/// into a permutation-folded tensor; unfolding to full storage makes every
/// index run over all orbitals independently.
pub fn two_body_integrals<E: Engine>(
    molecule: &Molecule<'_, E>,
    scf: &ScfCalculation<'_, E>,
) -> Result<Array4<f64>> {
    let coeffs = scf.mo_coefficients();
    let n_orbitals = coeffs.ncols();
    let engine = molecule.engine();
    let folded = engine.transform_two_electron(molecule.handle(), &coeffs)?;
    engine.restore(&folded, PermutationSymmetry::None, n_orbitals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineObject;
    use crate::error::Error;
    use crate::spec::{Atom, MolecularSpec};
    use itertools::iproduct;
    use nalgebra::DVector;

    // Mock engine with fixed coefficient and core Hamiltonian matrices and
    // a pair-folded two-electron tensor. Values are integer-valued so every
    // float comparison below is exact.
    struct MockEngine {
        coeffs: DMatrix<f64>,
        h_core: DMatrix<f64>,
    }

    struct MockMolecule;

    impl EngineObject for MockMolecule {
        fn class_name(&self) -> &str {
            "Mole"
        }
    }

    struct FoldedEri {
        n: usize,
        // npair x npair, row-major over composite pair indices.
        vals: Vec<f64>,
    }

    fn pair_index(i: usize, j: usize) -> usize {
        let (hi, lo) = if i >= j { (i, j) } else { (j, i) };
        hi * (hi + 1) / 2 + lo
    }

    impl Engine for MockEngine {
        type Molecule = MockMolecule;
        type Scf = ();
        type TwoElectron = FoldedEri;

        fn name(&self) -> &str {
            "mockchem"
        }

        fn molecule_class(&self) -> &str {
            "Mole"
        }

        fn build_molecule(&self, _: &MolecularSpec, _: bool) -> Result<Self::Molecule> {
            Ok(MockMolecule)
        }

        fn restricted_scf(&self, _: &Self::Molecule) -> Result<Self::Scf> {
            Ok(())
        }

        fn restricted_open_shell_scf(&self, _: &Self::Molecule) -> Result<Self::Scf> {
            todo!()
        }

        fn verbosity(&self, _: &Self::Scf) -> i32 {
            todo!()
        }

        fn set_verbosity(&self, _: &mut Self::Scf, _: i32) {
            todo!()
        }

        fn run_scf(&self, _: &mut Self::Scf) -> Result<f64> {
            todo!()
        }

        fn mo_coefficients(&self, _: &Self::Scf) -> DMatrix<f64> {
            self.coeffs.clone()
        }

        fn core_hamiltonian(&self, _: &Self::Scf) -> DMatrix<f64> {
            self.h_core.clone()
        }

        fn orbital_energies(&self, _: &Self::Scf) -> DVector<f64> {
            todo!()
        }

        fn transform_two_electron(
            &self,
            _: &Self::Molecule,
            coeffs: &DMatrix<f64>,
        ) -> Result<Self::TwoElectron> {
            let n = coeffs.ncols();
            let npair = n * (n + 1) / 2;
            let mut vals = vec![0.0; npair * npair];
            for (p, q) in iproduct!(0..npair, 0..npair) {
                vals[p * npair + q] = (10 * (p.min(q) + 1) + p.max(q) + 1) as f64;
            }
            Ok(FoldedEri { n, vals })
        }

        fn restore(
            &self,
            folded: &Self::TwoElectron,
            symmetry: PermutationSymmetry,
            n_orbitals: usize,
        ) -> Result<Array4<f64>> {
            if symmetry != PermutationSymmetry::None {
                return Err(Error::Engine {
                    message: "only full storage is supported".to_string(),
                });
            }
            if n_orbitals != folded.n {
                return Err(Error::Engine {
                    message: "orbital count does not match the folded tensor".to_string(),
                });
            }
            let n = folded.n;
            let npair = n * (n + 1) / 2;
            Ok(Array4::from_shape_fn((n, n, n, n), |(i, j, k, l)| {
                folded.vals[pair_index(i, j) * npair + pair_index(k, l)]
            }))
        }

        fn nuclear_repulsion(&self, _: &Self::Molecule) -> f64 {
            todo!()
        }

        fn spin(&self, _: &Self::Molecule) -> u32 {
            0
        }
    }

    fn pipeline_over(engine: &MockEngine) -> (Molecule<'_, MockEngine>, ScfCalculation<'_, MockEngine>) {
        let spec = MolecularSpec::new(vec![Atom::new("H", [0.0, 0.0, 0.0])], "sto-3g");
        let molecule = Molecule::from_spec(engine, &spec).unwrap();
        let scf = ScfCalculation::new(&molecule).unwrap();
        (molecule, scf)
    }

    #[test]
    fn test_one_body_is_core_hamiltonian_in_mo_basis() {
        // Rectangular C pins the output size to the MO count, not the AO
        // count. Expected entries are worked out by hand.
        let engine = MockEngine {
            coeffs: DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 0.0, 1.0, 2.0, 1.0]),
            h_core: DMatrix::from_row_slice(
                3,
                3,
                &[-2.0, 1.0, 0.0, 1.0, -1.0, 2.0, 0.0, 2.0, -3.0],
            ),
        };
        let (_molecule, scf) = pipeline_over(&engine);

        let one_body = one_body_integrals(&scf);
        assert_eq!(one_body.shape(), (2, 2));
        let expected = DMatrix::from_row_slice(2, 2, &[-14.0, -1.0, -1.0, 0.0]);
        assert_eq!(one_body, expected);
    }

    #[test]
    fn test_two_body_has_full_storage_and_pair_symmetry() {
        let n = 3;
        let engine = MockEngine {
            coeffs: DMatrix::identity(n, n),
            h_core: DMatrix::identity(n, n),
        };
        let (molecule, scf) = pipeline_over(&engine);

        // The mock only honors full-storage restoration, so success here
        // also pins the symmetry mode the extractor asks for.
        let two_body = two_body_integrals(&molecule, &scf).unwrap();
        assert_eq!(two_body.shape(), &[n, n, n, n]);

        for (i, j, k, l) in iproduct!(0..n, 0..n, 0..n, 0..n) {
            let v = two_body[[i, j, k, l]];
            assert_eq!(v, two_body[[j, i, k, l]]);
            assert_eq!(v, two_body[[i, j, l, k]]);
            assert_eq!(v, two_body[[k, l, i, j]]);
        }

        // (1 0 | 2 1): bra pair 1, ket pair 4 in triangular order.
        assert_eq!(two_body[[1, 0, 2, 1]], 25.0);
    }
}
