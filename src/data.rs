//! Final molecular data record and the pipeline that assembles it.

use nalgebra::{DMatrix, DVector};
use ndarray::Array4;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::Engine;
use crate::error::Result;
use crate::integrals::{one_body_integrals, two_body_integrals};
use crate::molecule::Molecule;
use crate::scf::ScfCalculation;
use crate::spec::MolecularSpec;

/// Converged Hartree-Fock results for one molecular system.
///
/// Assembled once at the end of the pipeline and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MolecularData {
    /// The system description the pipeline was run with.
    pub spec: MolecularSpec,
    /// Nuclear repulsion energy in Hartree.
    pub nuclear_repulsion: f64,
    /// MO-basis one-electron integrals, n_orbitals by n_orbitals.
    pub one_body_integrals: DMatrix<f64>,
    /// MO-basis two-electron integrals, chemists' order, full n^4 storage.
    pub two_body_integrals: Array4<f64>,
    /// Converged total Hartree-Fock energy in Hartree.
    pub hf_energy: f64,
    /// MO energies.
    pub orbital_energies: DVector<f64>,
}

impl MolecularData {
    /// MO count of the integral tensors.
    pub fn n_orbitals(&self) -> usize {
        self.one_body_integrals.nrows()
    }
}

/// Run the full pipeline for `spec` on `engine`.
///
/// Stages run strictly in order: build the molecule, construct the matching
/// SCF variant, run it silenced, extract the one- and two-electron MO
/// integrals, read the nuclear repulsion energy, and package the record.
/// The first failing stage aborts the rest; there are no partial records.
pub fn compute_molecular_data<E: Engine>(
    engine: &E,
    spec: &MolecularSpec,
) -> Result<MolecularData> {
    info!("Computing molecular data via {}", engine.name());

    let molecule = Molecule::from_spec(engine, spec)?;
    let mut scf = ScfCalculation::new(&molecule)?;
    let hf_energy = scf.run()?;

    let one_body_integrals = one_body_integrals(&scf);
    let two_body_integrals = two_body_integrals(&molecule, &scf)?;
    let nuclear_repulsion = molecule.nuclear_repulsion();
    let orbital_energies = scf.orbital_energies();

    info!(
        "Molecular data ready: {} orbitals, E_HF = {:.10} Hartree",
        one_body_integrals.nrows(),
        hf_energy
    );
    Ok(MolecularData {
        spec: spec.clone(),
        nuclear_repulsion,
        one_body_integrals,
        two_body_integrals,
        hf_energy,
        orbital_energies,
    })
}
