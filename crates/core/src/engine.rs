//! Runs the inspections over analysis units.

use crate::config::CollscopeConfig;
use crate::error::Result;
use crate::unit::AnalysisUnit;
use collscope_api::models::Diagnostic;
use collscope_java::{TypeUniverse, analyze};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Findings for one unit, together with the rendered source they point into.
#[derive(Debug, Clone, Serialize)]
pub struct UnitReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl UnitReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub struct AnalysisEngine {
    config: CollscopeConfig,
    stdlib: Option<TypeUniverse>,
}

impl AnalysisEngine {
    pub fn new(config: CollscopeConfig) -> Self {
        let stdlib = config.include_stdlib.then(TypeUniverse::stdlib);
        Self { config, stdlib }
    }

    pub fn config(&self) -> &CollscopeConfig {
        &self.config
    }

    /// Analyzes a unit with its own type universe and seen-call memory.
    pub fn analyze_unit(&self, unit: &AnalysisUnit) -> UnitReport {
        let universe = unit.universe(self.stdlib.as_ref());
        let tree = unit.tree();
        let diagnostics = analyze(&tree, &universe, &self.config.analysis);

        UnitReport {
            name: unit.name.clone(),
            path: None,
            source: tree.source().to_string(),
            diagnostics,
        }
    }

    pub fn analyze_file(&self, path: &Path) -> Result<UnitReport> {
        let unit = AnalysisUnit::from_file(path)?;
        let mut report = self.analyze_unit(&unit);
        report.path = Some(path.to_path_buf());
        Ok(report)
    }

    /// Analyzes the files in parallel; results keep the input order.
    pub fn analyze_files(&self, paths: &[PathBuf]) -> Vec<Result<UnitReport>> {
        let start = Instant::now();
        let results: Vec<Result<UnitReport>> = paths
            .par_iter()
            .map(|path| {
                let result = self.analyze_file(path);
                if let Err(e) = &result {
                    warn!("Skipping {}: {}", path.display(), e);
                }
                result
            })
            .collect();

        let findings: usize = results
            .iter()
            .filter_map(|r| r.as_ref().ok())
            .map(|report| report.diagnostics.len())
            .sum();
        info!(
            "Analyzed {} unit(s) in {:?}, {} finding(s)",
            paths.len(),
            start.elapsed(),
            findings
        );
        results
    }
}
