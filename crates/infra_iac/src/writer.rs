//! Writes generated variables as `*.tfvars.json` files.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::IacResult;
use crate::pipeline::GeneratedVars;
use crate::tfvars::TfVars;
use crate::transformer::ResourceKind;

/// Writer for Terraform variable files.
pub struct TfVarsWriter {
    output_dir: PathBuf,
}

impl TfVarsWriter {
    /// Create a writer targeting an output directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write one document to `{kind}.tfvars.json`.
    pub fn write(&self, kind: ResourceKind, vars: &TfVars) -> IacResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join(kind.file_name());
        fs::write(&path, vars.to_json_pretty()?)?;
        debug!("Wrote {:?}", path);
        Ok(path)
    }

    /// Write every generated document; returns the paths in kind order.
    pub fn write_all(&self, outputs: &GeneratedVars) -> IacResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(outputs.len());
        for (kind, vars) in outputs {
            written.push(self.write(*kind, vars)?);
        }

        info!("Generated {} tfvars file(s) in {:?}", written.len(), self.output_dir);
        Ok(written)
    }
}
