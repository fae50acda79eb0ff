use std::fmt::Display;

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::geom::Molecule;

use super::Program;

pub use self::options::*;
pub mod options;


/// width of the key column in the `$rem` section
const KEY_WIDTH: usize = 18;

/// QChem holds the [QChemOptions] shared by every input file it writes. Input
/// files get the `.in` extension
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QChem {
    pub options: QChemOptions,
}

impl QChem {
    pub fn new(options: QChemOptions) -> Self {
        Self { options }
    }
}

impl Program for QChem {
    fn extension(&self) -> &'static str {
        "in"
    }

    fn render(&self, mol: &Molecule, title: Option<&str>) -> String {
        render(mol, &self.options, title)
    }
}

/// A complete Q-Chem input file, borrowing its pieces. The [Display]
/// implementation writes the `$comment` (if requested by
/// [QChemOptions::include_comment]), `$molecule`, and `$rem` sections, each
/// closed by `$end` and separated by a blank line.
pub struct QChemInput<'a> {
    pub mol: &'a Molecule,
    pub opts: &'a QChemOptions,
    pub title: Option<&'a str>,
}

impl QChemInput<'_> {
    /// the caller's title if there is a non-empty one, otherwise one built from
    /// the basis and method like `6-31G*/BHHLYP MRSF-TDDFT`
    pub fn title(&self) -> String {
        match self.title {
            Some(t) if !t.is_empty() => t.to_owned(),
            _ => {
                format!("{}/{} MRSF-TDDFT", self.opts.basis, self.opts.method())
            }
        }
    }
}

impl Display for QChemInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.opts.include_comment {
            let title = self.title();
            trace!("using title `{title}`");
            writeln!(f, "$comment")?;
            writeln!(f, "  1 {title}")?;
            writeln!(f, "  2")?;
            writeln!(f, "$end")?;
            writeln!(f)?;
        }

        write!(f, "$molecule\n{}$end\n\n", self.mol)?;

        writeln!(f, "$rem")?;
        for (key, value) in self.opts.rem() {
            writeln!(f, "{key:<width$} {value}", width = KEY_WIDTH)?;
        }
        writeln!(f, "$end")
    }
}

/// Render the Q-Chem input for `mol` with the settings in `opts`. If `title` is
/// None, a title is generated from `opts`. It is only used when
/// `opts.include_comment` is set.
pub fn render(mol: &Molecule, opts: &QChemOptions, title: Option<&str>) -> String {
    if !mol.is_well_formed() {
        warn!(
            "rendering a molecule with {} atoms and multiplicity {}",
            mol.atoms().len(),
            mol.multiplicity()
        );
    }
    QChemInput { mol, opts, title }.to_string()
}
