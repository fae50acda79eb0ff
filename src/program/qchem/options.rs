use std::{fs::read_to_string, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::program::Error;

/// Settings for a single Q-Chem job, written to the `$rem` section. The
/// defaults describe an MRSF-TDDFT single point:
///
/// ```text
/// JOBTYPE            SP
/// UNRESTRICTED       FALSE
/// BASIS              6-31G*
/// EXCHANGE           BHHLYP
/// SCF_GUESS          CORE
/// SCF_CONVERGENCE    10
/// SCF_ALGORITHM      DIIS
/// MAX_SCF_CYCLES     100
/// SPIN_FLIP          2
/// CIS_N_ROOTS        4
/// CIS_SINGLETS       TRUE
/// CIS_TRIPLETS       FALSE
/// CIS_CONVERGENCE    8
/// MAX_CIS_CYCLES     100
/// ```
///
/// When deserialized, any missing field takes its default value, so an options
/// file only needs to mention the settings it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QChemOptions {
    pub jobtype: String,
    pub unrestricted: bool,

    pub basis: String,
    /// the exchange functional
    pub exchange: String,

    pub scf_guess: String,
    /// written as the exponent n in a threshold of 10^-n
    pub scf_convergence: usize,
    pub scf_algorithm: String,
    pub max_scf_cycles: usize,

    pub spin_flip: usize,
    pub cis_n_roots: usize,
    pub cis_singlets: bool,
    pub cis_triplets: bool,
    pub cis_convergence: usize,
    pub max_cis_cycles: usize,

    /// emit the `$comment` section
    pub include_comment: bool,
}

impl Default for QChemOptions {
    fn default() -> Self {
        Self {
            jobtype: String::from("SP"),
            unrestricted: false,
            basis: String::from("6-31G*"),
            exchange: String::from("BHHLYP"),
            scf_guess: String::from("CORE"),
            scf_convergence: 10,
            scf_algorithm: String::from("DIIS"),
            max_scf_cycles: 100,
            spin_flip: 2,
            cis_n_roots: 4,
            cis_singlets: true,
            cis_triplets: false,
            cis_convergence: 8,
            max_cis_cycles: 100,
            include_comment: true,
        }
    }
}

impl FromStr for QChemOptions {
    type Err = Error;

    /// parse options from a JSON object like `{"basis": "cc-pVDZ"}`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

#[inline]
fn tf(b: bool) -> String {
    String::from(if b { "TRUE" } else { "FALSE" })
}

impl QChemOptions {
    /// load options from the JSON file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let s = read_to_string(path)?;
        serde_json::from_str(&s).map_err(|e| Error::config(path, e))
    }

    /// The name of the method used in generated titles. The method is fully
    /// determined by the exchange functional, which is also what the `$rem`
    /// EXCHANGE line selects, so this is never stored separately.
    pub fn method(&self) -> &str {
        &self.exchange
    }

    /// the `$rem` keys and their values, in the order they are written
    pub fn rem(&self) -> [(&'static str, String); 14] {
        [
            ("JOBTYPE", self.jobtype.clone()),
            ("UNRESTRICTED", tf(self.unrestricted)),
            ("BASIS", self.basis.clone()),
            ("EXCHANGE", self.method().to_owned()),
            ("SCF_GUESS", self.scf_guess.clone()),
            ("SCF_CONVERGENCE", self.scf_convergence.to_string()),
            ("SCF_ALGORITHM", self.scf_algorithm.clone()),
            ("MAX_SCF_CYCLES", self.max_scf_cycles.to_string()),
            ("SPIN_FLIP", self.spin_flip.to_string()),
            ("CIS_N_ROOTS", self.cis_n_roots.to_string()),
            ("CIS_SINGLETS", tf(self.cis_singlets)),
            ("CIS_TRIPLETS", tf(self.cis_triplets)),
            ("CIS_CONVERGENCE", self.cis_convergence.to_string()),
            ("MAX_CIS_CYCLES", self.max_cis_cycles.to_string()),
        ]
    }
}
