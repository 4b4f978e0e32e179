//! Output formatter trait for CLI results.

use anyhow::Result;
use maltcat_core::CatalogReport;
use maltcat_core::InspectionResult;
use serde::Serialize;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format a section heading
    fn format_section(&self, title: &str);

    /// Format the catalog read from an archive
    fn format_catalog_report(&self, archive: &Path, report: &CatalogReport) -> Result<()>;

    /// Format the inspection results of a graph's index directories
    fn format_inspection(
        &self,
        graph_root: &Path,
        inspector: &str,
        results: &[(String, InspectionResult)],
    ) -> Result<()>;
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
        }
    }
}
