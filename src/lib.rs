//! Molecular Hartree-Fock integral pipeline.
//!
//! Drives an external electronic-structure engine from a [`MolecularSpec`]
//! to a [`MolecularData`] record: build the molecule, run the matching
//! restricted SCF variant with the engine silenced, then extract the one-
//! and two-electron integrals in the molecular-orbital basis.
//!
//! The heavy numerics live entirely on the engine side of the [`Engine`]
//! trait; this crate owns the conversion pipeline and its data types.
//!
//! A pipeline run is synchronous and blocking, holds no shared mutable
//! state, and assumes exclusive use of the engine for its duration unless
//! the engine itself guarantees otherwise.

pub mod data;
pub mod engine;
pub mod error;
pub mod integrals;
pub mod molecule;
pub mod scf;
pub mod spec;

pub use data::{compute_molecular_data, MolecularData};
pub use engine::{Engine, EngineObject, PermutationSymmetry};
pub use error::{Error, Result};
pub use integrals::{one_body_integrals, two_body_integrals};
pub use molecule::Molecule;
pub use scf::{ScfCalculation, ScfKind};
pub use spec::{Atom, MolecularSpec};
