//! Molecular system description.
//!
//! [`MolecularSpec`] is the crate's input type: a Cartesian geometry plus the
//! basis set name, net charge, and unpaired-electron count. The pipeline
//! hands all of it to the engine verbatim; element symbols and basis names
//! are validated by the engine, not here.

use periodic_table_on_an_enum::Element;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Atomic position in the molecular geometry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Atom {
    pub element: String,
    pub coords: [f64; 3],
}

impl Atom {
    pub fn new(element: impl Into<String>, coords: [f64; 3]) -> Self {
        Atom {
            element: element.into(),
            coords,
        }
    }
}

/// Complete description of the molecular system to compute.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MolecularSpec {
    pub geometry: Vec<Atom>,
    /// Basis set name, passed to the engine unchanged.
    pub basis: String,
    /// Net molecular charge.
    pub charge: i32,
    /// Number of unpaired electrons; 0 is a closed shell.
    pub spin: u32,
}

impl MolecularSpec {
    /// Neutral closed-shell system with the given geometry and basis.
    pub fn new(geometry: Vec<Atom>, basis: impl Into<String>) -> Self {
        MolecularSpec {
            geometry,
            basis: basis.into(),
            charge: 0,
            spin: 0,
        }
    }

    pub fn n_atoms(&self) -> usize {
        self.geometry.len()
    }

    /// Total nuclear charge, summed over the geometry.
    pub fn nuclear_charge(&self) -> Result<u32> {
        let mut total = 0u32;
        for atom in &self.geometry {
            let element =
                Element::from_symbol(&atom.element).ok_or_else(|| Error::UnknownElement {
                    symbol: atom.element.clone(),
                })?;
            total += element.get_atomic_number() as u32;
        }
        Ok(total)
    }

    /// Electron count implied by the nuclear charge and the net charge.
    ///
    /// Negative for over-ionized inputs; the engine decides what to do with
    /// those.
    pub fn n_electrons(&self) -> Result<i32> {
        Ok(self.nuclear_charge()? as i32 - self.charge)
    }
}
