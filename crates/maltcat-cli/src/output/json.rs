//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use maltcat_core::CatalogReport;
use maltcat_core::InspectionResult;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct FieldOutput {
    name: String,
    #[serde(rename = "type")]
    field_type: String,
    description: String,
    display_name: String,
}

#[derive(Debug, Serialize)]
struct EntityTypeOutput {
    id: String,
    display_name: String,
    fields: Vec<FieldOutput>,
}

#[derive(Debug, Serialize)]
struct SkippedOutput {
    entry: String,
    reason: String,
}

#[derive(Debug, Serialize)]
struct CatalogOutput {
    archive: String,
    entries_total: usize,
    entries_matched: usize,
    entity_types: Vec<EntityTypeOutput>,
    skipped: Vec<SkippedOutput>,
    duration_ms: u128,
}

#[derive(Debug, Default, Serialize)]
struct ResultOutput {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    stdout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stderr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl From<&InspectionResult> for ResultOutput {
    fn from(result: &InspectionResult) -> Self {
        let output = Self {
            kind: result.kind(),
            ..Self::default()
        };
        match result.clone() {
            InspectionResult::Succeeded { stdout } => Self {
                stdout: Some(stdout),
                ..output
            },
            InspectionResult::Failed { exit_code, stderr } => Self {
                exit_code,
                stderr: Some(stderr),
                ..output
            },
            InspectionResult::Listed { names, reason } => Self {
                names: Some(names),
                reason: Some(reason),
                ..output
            },
            InspectionResult::Absent => output,
            InspectionResult::Exception { message } => Self {
                message: Some(message),
                ..output
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct DirectoryOutput {
    name: String,
    path: String,
    result: ResultOutput,
}

#[derive(Debug, Serialize)]
struct InspectionOutput {
    graph_root: String,
    inspector: String,
    directories: Vec<DirectoryOutput>,
}

impl OutputFormatter for JsonFormatter {
    fn format_section(&self, _title: &str) {}

    fn format_catalog_report(&self, archive: &Path, report: &CatalogReport) -> Result<()> {
        let entity_types = report
            .catalog
            .iter()
            .map(|definition| EntityTypeOutput {
                id: definition.id().to_string(),
                display_name: definition.display_name().to_string(),
                fields: definition
                    .fields()
                    .iter()
                    .map(|field| FieldOutput {
                        name: field.name.clone(),
                        field_type: field.field_type.clone(),
                        description: field.description.clone(),
                        display_name: field.display_name.clone(),
                    })
                    .collect(),
            })
            .collect();

        let data = CatalogOutput {
            archive: archive.display().to_string(),
            entries_total: report.entries_total,
            entries_matched: report.entries_matched,
            entity_types,
            skipped: report
                .skipped
                .iter()
                .map(|s| SkippedOutput {
                    entry: s.entry.clone(),
                    reason: s.reason.clone(),
                })
                .collect(),
            duration_ms: report.duration.as_millis(),
        };

        Self::output(&JsonOutput::success("catalog", data))
    }

    fn format_inspection(
        &self,
        graph_root: &Path,
        inspector: &str,
        results: &[(String, InspectionResult)],
    ) -> Result<()> {
        let data = InspectionOutput {
            graph_root: graph_root.display().to_string(),
            inspector: inspector.to_string(),
            directories: results
                .iter()
                .map(|(name, result)| DirectoryOutput {
                    name: name.clone(),
                    path: graph_root.join(name).display().to_string(),
                    result: result.into(),
                })
                .collect(),
        };

        Self::output(&JsonOutput::success("inspect", data))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_result_output_is_tagged() {
        let listed = InspectionResult::Listed {
            names: vec!["segments_1".to_string()],
            reason: "helper not configured".to_string(),
        };
        let json = serde_json::to_value(ResultOutput::from(&listed)).unwrap();
        assert_eq!(json["kind"], "listed");
        assert_eq!(json["names"][0], "segments_1");

        let json = serde_json::to_value(ResultOutput::from(&InspectionResult::Absent)).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "absent" }));

        let failed = InspectionResult::Failed {
            exit_code: Some(1),
            stderr: "no segments file".to_string(),
        };
        let json = serde_json::to_value(ResultOutput::from(&failed)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "failed", "exit_code": 1, "stderr": "no segments file" })
        );
    }

    #[test]
    fn test_field_type_is_renamed() {
        let field = FieldOutput {
            name: "ipAddress".to_string(),
            field_type: "string".to_string(),
            description: String::new(),
            display_name: "ipAddress".to_string(),
        };
        let json = serde_json::to_value(field).unwrap();
        assert_eq!(json["type"], "string");
    }
}
