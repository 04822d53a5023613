//! Electronic-structure engine abstraction.
//!
//! An [`Engine`] is an external quantum-chemistry package driven through a
//! narrow call surface: build a finalized molecule, construct and run the
//! matching SCF calculation, and hand back converged quantities. All heavy
//! numerics (SCF iteration, AO to MO transforms, symmetry restoration)
//! happen on the engine side of this trait; the pipeline only sequences the
//! calls.

use nalgebra::{DMatrix, DVector};
use ndarray::Array4;

use crate::error::Result;
use crate::spec::MolecularSpec;

/// Degree of permutation symmetry of a packed two-electron tensor.
///
/// Real-orbital two-electron integrals are invariant under index swaps
/// within each bra/ket pair and under exchanging the pairs, which engines
/// exploit to store the tensor compressed. The pipeline always asks for
/// [`None`](PermutationSymmetry::None), full n^4 storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermutationSymmetry {
    /// No symmetry folding: every index runs over all orbitals.
    None,
    /// Folded over the (ij) and (kl) pairs.
    Fourfold,
    /// Folded over both pairs and the pair exchange.
    Eightfold,
}

/// Engine-native object carrying a runtime class discriminator.
///
/// Foreign handles are opaque; the class name is the one property every
/// engine object must report so wrappers can validate what they were given.
pub trait EngineObject {
    /// Class name the object reports at runtime.
    fn class_name(&self) -> &str;
}

/// External electronic-structure engine.
///
/// Implementations adapt one concrete package (or a test double) to the
/// pipeline. Engine objects stay opaque behind the associated types; the
/// pipeline only moves them between calls on this trait.
///
/// Accessors on converged state (`mo_coefficients`, `orbital_energies`, ...)
/// are infallible: called before [`run_scf`](Engine::run_scf) they return
/// whatever initial state the engine keeps, which is garbage for the
/// pipeline's purposes but not an error.
pub trait Engine {
    /// Finalized molecule handle.
    type Molecule: EngineObject;
    /// SCF calculation object, mutated in place by [`run_scf`](Engine::run_scf).
    type Scf;
    /// Permutation-folded MO-basis two-electron tensor, engine-native layout.
    type TwoElectron;

    /// Engine name used in logs and error reports.
    fn name(&self) -> &str;

    /// Class name of the molecule handles this engine builds.
    fn molecule_class(&self) -> &str;

    /// Build and finalize a molecule from the spec.
    ///
    /// Geometry, basis name, charge, and spin pass through unchanged;
    /// `use_symmetry` controls the engine's point-group detection. Malformed
    /// geometry or an unsupported basis surface as an engine-reported error.
    fn build_molecule(&self, spec: &MolecularSpec, use_symmetry: bool) -> Result<Self::Molecule>;

    /// Construct a closed-shell (RHF) calculation for the molecule.
    fn restricted_scf(&self, molecule: &Self::Molecule) -> Result<Self::Scf>;

    /// Construct a restricted open-shell (ROHF) calculation for the molecule.
    fn restricted_open_shell_scf(&self, molecule: &Self::Molecule) -> Result<Self::Scf>;

    /// Current verbosity level of the calculation object.
    fn verbosity(&self, scf: &Self::Scf) -> i32;

    /// Set the verbosity level of the calculation object; 0 is silent.
    fn set_verbosity(&self, scf: &mut Self::Scf, level: i32);

    /// Drive the SCF to convergence, returning the converged total energy.
    fn run_scf(&self, scf: &mut Self::Scf) -> Result<f64>;

    /// MO coefficient matrix of a converged calculation, AO rows by MO
    /// columns.
    fn mo_coefficients(&self, scf: &Self::Scf) -> DMatrix<f64>;

    /// AO-basis core Hamiltonian (kinetic plus nuclear attraction).
    fn core_hamiltonian(&self, scf: &Self::Scf) -> DMatrix<f64>;

    /// Orbital energies of a converged calculation.
    fn orbital_energies(&self, scf: &Self::Scf) -> DVector<f64>;

    /// Transform the AO two-electron integrals over `coeffs` into the MO
    /// basis, returning the engine's folded form.
    fn transform_two_electron(
        &self,
        molecule: &Self::Molecule,
        coeffs: &DMatrix<f64>,
    ) -> Result<Self::TwoElectron>;

    /// Unfold a transformed tensor to `symmetry` with `n_orbitals` per index.
    fn restore(
        &self,
        folded: &Self::TwoElectron,
        symmetry: PermutationSymmetry,
        n_orbitals: usize,
    ) -> Result<Array4<f64>>;

    /// Nuclear repulsion energy of the molecule.
    fn nuclear_repulsion(&self, molecule: &Self::Molecule) -> f64;

    /// Unpaired-electron count the molecule was built with.
    fn spin(&self, molecule: &Self::Molecule) -> u32;
}
