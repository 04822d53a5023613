//! Molecule wrapper over an engine-built handle.

use std::fmt;

use tracing::info;

use crate::engine::{Engine, EngineObject};
use crate::error::{Error, Result};
use crate::spec::MolecularSpec;

/// An engine molecule handle, validated once at construction.
///
/// The handle itself is opaque; wrapping checks its runtime class against the
/// class the engine builds molecules as, and everything after that is
/// read-only access through the engine.
pub struct Molecule<'e, E: Engine> {
    engine: &'e E,
    handle: E::Molecule,
}

impl<'e, E: Engine> Molecule<'e, E> {
    /// Build a molecule from `spec` and wrap it.
    ///
    /// Point-group symmetry detection is switched off so the engine's
    /// orbital ordering stays deterministic across runs.
    pub fn from_spec(engine: &'e E, spec: &MolecularSpec) -> Result<Self> {
        info!(
            "Building molecule: {} atoms, basis {}, charge {}, spin {}",
            spec.n_atoms(),
            spec.basis,
            spec.charge,
            spec.spin
        );
        let handle = engine.build_molecule(spec, false)?;
        Self::from_handle(engine, handle)
    }

    /// Wrap an existing engine handle.
    ///
    /// Fails with [`Error::ClassMismatch`] when the handle does not report
    /// the engine's molecule class. No partial wrapper is produced on
    /// failure.
    pub fn from_handle(engine: &'e E, handle: E::Molecule) -> Result<Self> {
        let expected = engine.molecule_class();
        let found = handle.class_name();
        if found != expected {
            return Err(Error::ClassMismatch {
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
        Ok(Molecule { engine, handle })
    }

    /// Borrow the underlying engine handle.
    pub fn handle(&self) -> &E::Molecule {
        &self.handle
    }

    /// Unpaired-electron count the molecule was built with.
    pub fn spin(&self) -> u32 {
        self.engine.spin(&self.handle)
    }

    /// Nuclear repulsion energy in Hartree.
    pub fn nuclear_repulsion(&self) -> f64 {
        self.engine.nuclear_repulsion(&self.handle)
    }

    pub(crate) fn engine(&self) -> &'e E {
        self.engine
    }
}

// The handle itself is opaque, so only the validated surface is shown.
impl<E: Engine> fmt::Debug for Molecule<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Molecule")
            .field("class", &self.handle.class_name())
            .field("spin", &self.spin())
            .finish_non_exhaustive()
    }
}
