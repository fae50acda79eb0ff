use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    symbol: String,
    x: f64,
    y: f64,
    z: f64,
}

impl Atom {
    pub fn new(symbol: &str, x: f64, y: f64, z: f64) -> Self {
        Self {
            symbol: symbol.to_owned(),
            x,
            y,
            z,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn coord(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Display for Atom {
    /// one line of a `$molecule` section, without the trailing newline
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<2}  {:12.6}  {:12.6}  {:12.6}",
            self.symbol, self.x, self.y, self.z
        )
    }
}

/// An ordered list of atoms along with the net charge and spin multiplicity of
/// the system. Nothing here is validated: an empty atom list or a multiplicity
/// of zero should be rejected by whatever builds the Molecule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    charge: isize,
    multiplicity: usize,
    atoms: Vec<Atom>,
}

impl Molecule {
    pub fn new(charge: isize, multiplicity: usize, atoms: Vec<Atom>) -> Self {
        Self {
            charge,
            multiplicity,
            atoms,
        }
    }

    pub fn charge(&self) -> isize {
        self.charge
    }

    pub fn multiplicity(&self) -> usize {
        self.multiplicity
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// whether `self` has at least one atom and a multiplicity of at least one
    pub fn is_well_formed(&self) -> bool {
        !self.atoms.is_empty() && self.multiplicity >= 1
    }
}

impl Display for Molecule {
    /// the body of a `$molecule` section: the charge and multiplicity line
    /// followed by one line per atom, in order
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {}", self.charge, self.multiplicity)?;
        for atom in &self.atoms {
            writeln!(f, "{atom}")?;
        }
        Ok(())
    }
}
