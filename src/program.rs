use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::debug;
use thiserror::Error;

use crate::geom::Molecule;

pub mod qchem;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to load options from {path}: {source}")]
    Config {
        path: String,
        source: serde_json::Error,
    },

    #[error("failed to parse options: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    pub fn config(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Config {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

pub trait Program {
    /// the extension appended to `filename` by [Program::write_input]
    fn extension(&self) -> &'static str;

    /// Render the full input file for `mol`. `title` overrides any title the
    /// Program would generate for itself.
    fn render(&self, mol: &Molecule, title: Option<&str>) -> String;

    /// Write the rendered input for `mol` to `filename` with
    /// [Program::extension] appended and return the path of the new file.
    /// `filename` should not include an extension
    fn write_input(
        &self,
        filename: &str,
        mol: &Molecule,
        title: Option<&str>,
    ) -> Result<PathBuf, Error> {
        let path = PathBuf::from(format!("{filename}.{}", self.extension()));
        let body = self.render(mol, title);
        let mut file = File::create(&path)?;
        file.write_all(body.as_bytes())?;
        debug!("wrote {} bytes to {}", body.len(), path.display());
        Ok(path)
    }
}
