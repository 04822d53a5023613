//! SCF calculation wrapper: variant selection and the silenced run.

use std::fmt;

use nalgebra::{DMatrix, DVector};
use tracing::info;

use crate::engine::Engine;
use crate::error::Result;
use crate::molecule::Molecule;

/// Hartree-Fock variant, resolved from the molecule's spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScfKind {
    /// Closed-shell restricted Hartree-Fock.
    Restricted,
    /// Restricted open-shell Hartree-Fock.
    RestrictedOpenShell,
}

impl ScfKind {
    /// Any unpaired electrons require the open-shell variant.
    pub fn for_spin(spin: u32) -> Self {
        if spin != 0 {
            ScfKind::RestrictedOpenShell
        } else {
            ScfKind::Restricted
        }
    }
}

/// An engine SCF calculation tied to the molecule it was built from.
///
/// Lifecycle: construct, [`run`](Self::run) once, then read the converged
/// quantities. Reading before a run hands back whatever initial state the
/// engine keeps in the object; running twice repeats the work but is not an
/// error.
pub struct ScfCalculation<'e, E: Engine> {
    engine: &'e E,
    kind: ScfKind,
    scf: E::Scf,
}

impl<'e, E: Engine> ScfCalculation<'e, E> {
    /// Construct the SCF object matching the molecule's shell structure.
    ///
    /// The variant is resolved once, here; nothing else in the pipeline
    /// branches on spin.
    pub fn new(molecule: &Molecule<'e, E>) -> Result<Self> {
        let engine = molecule.engine();
        let kind = ScfKind::for_spin(molecule.spin());
        let scf = match kind {
            ScfKind::Restricted => {
                info!("Using restricted SCF (RHF) for a closed-shell system");
                engine.restricted_scf(molecule.handle())?
            }
            ScfKind::RestrictedOpenShell => {
                info!(
                    "Using restricted open-shell SCF (ROHF) with spin={}",
                    molecule.spin()
                );
                engine.restricted_open_shell_scf(molecule.handle())?
            }
        };
        Ok(ScfCalculation { engine, kind, scf })
    }

    /// The resolved Hartree-Fock variant.
    pub fn kind(&self) -> ScfKind {
        self.kind
    }

    /// Drive the engine's convergence procedure, returning the total energy.
    ///
    /// The engine's own output is silenced for the duration of the run and
    /// the prior verbosity level is restored whether or not the run
    /// succeeds; only then is the outcome surfaced.
    pub fn run(&mut self) -> Result<f64> {
        let saved = self.engine.verbosity(&self.scf);
        self.engine.set_verbosity(&mut self.scf, 0);
        let outcome = self.engine.run_scf(&mut self.scf);
        self.engine.set_verbosity(&mut self.scf, saved);

        let energy = outcome?;
        info!("SCF converged: E = {:.10} Hartree", energy);
        Ok(energy)
    }

    /// MO coefficient matrix, AO rows by MO columns.
    pub fn mo_coefficients(&self) -> DMatrix<f64> {
        self.engine.mo_coefficients(&self.scf)
    }

    /// AO-basis core Hamiltonian.
    pub fn core_hamiltonian(&self) -> DMatrix<f64> {
        self.engine.core_hamiltonian(&self.scf)
    }

    /// Orbital energies.
    pub fn orbital_energies(&self) -> DVector<f64> {
        self.engine.orbital_energies(&self.scf)
    }

    /// Borrow the underlying engine calculation object.
    pub fn inner(&self) -> &E::Scf {
        &self.scf
    }
}

impl<E: Engine> fmt::Debug for ScfCalculation<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScfCalculation")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
