//! Analysis unit files.
//!
//! A unit is one JSON document holding the types the host resolved and the
//! typed expression statements to inspect:
//!
//! ```json
//! { "name": "Orders", "types": [ ... ], "statements": [ ... ] }
//! ```

use crate::error::{CollscopeError, Result};
use collscope_java::{Expr, SyntaxTree, TypeDecl, TypeUniverse};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

pub const UNIT_EXTENSION: &str = "json";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisUnit {
    /// Defaults to the file stem when loaded from disk.
    #[serde(default)]
    pub name: String,
    /// Declarations layered over the bundled stdlib; a repeated FQN replaces it.
    #[serde(default)]
    pub types: Vec<TypeDecl>,
    #[serde(default)]
    pub statements: Vec<Expr>,
}

impl AnalysisUnit {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut unit = Self::from_json(&content).map_err(|e| CollscopeError::InvalidUnit {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if unit.name.is_empty() {
            unit.name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default()
                .to_string();
        }
        debug!(
            unit = %unit.name,
            types = unit.types.len(),
            statements = unit.statements.len(),
            "Loaded unit"
        );
        Ok(unit)
    }

    /// The unit's declarations, optionally on top of the bundled stdlib.
    pub fn universe(&self, stdlib: Option<&TypeUniverse>) -> TypeUniverse {
        let mut universe = stdlib.cloned().unwrap_or_default();
        universe.extend(self.types.iter().cloned());
        universe
    }

    pub fn tree(&self) -> SyntaxTree {
        SyntaxTree::from_statements(&self.statements)
    }
}

/// Expands the inputs into unit files: files are taken as given, directories
/// are walked for `*.json` in file-name order.
pub fn discover_units(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let before = found.len();
            found.extend(
                WalkDir::new(input)
                    .sort_by_file_name()
                    .into_iter()
                    .filter_map(|entry| entry.ok())
                    .filter(|entry| entry.file_type().is_file())
                    .map(|entry| entry.into_path())
                    .filter(|path| path.extension().is_some_and(|ext| ext == UNIT_EXTENSION)),
            );
            debug!("Found {} unit(s) under {}", found.len() - before, input.display());
        } else if input.is_file() {
            found.push(input.clone());
        } else {
            return Err(CollscopeError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} does not exist", input.display()),
            )));
        }
    }
    Ok(found)
}
