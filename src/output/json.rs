// Thu Aug 06 2026 - Alex

use crate::delta::{Delta, Difference};
use crate::model::MemberKind;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Machine-readable comparison report.
#[derive(Debug, Clone, Serialize)]
pub struct CompatReport {
    pub previous: String,
    pub current: String,
    pub compatibility: String,
    pub differences: Vec<DifferenceRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DifferenceRecord {
    pub action: String,
    pub kind: String,
    pub class_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
}

impl CompatReport {
    pub fn from_delta(previous: &str, current: &str, delta: &Delta) -> Self {
        Self {
            previous: previous.to_string(),
            current: current.to_string(),
            compatibility: delta.compute_compatibility_type().to_string(),
            differences: delta.differences().iter().map(DifferenceRecord::from).collect(),
        }
    }
}

impl From<&Difference> for DifferenceRecord {
    fn from(difference: &Difference) -> Self {
        let info = difference.info();
        let (member, descriptor) = match info.kind() {
            MemberKind::Class => (None, None),
            _ => {
                let descriptor = match info {
                    crate::model::MemberInfo::Method(m) => Some(m.descriptor().to_string()),
                    crate::model::MemberInfo::Field(f) => Some(f.descriptor().to_string()),
                    crate::model::MemberInfo::Class(_) => None,
                };
                (Some(info.name().to_string()), descriptor)
            }
        };
        Self {
            action: difference.action().to_string(),
            kind: info.kind().to_string(),
            class_name: difference.class_name().to_string(),
            member,
            descriptor,
        }
    }
}

/// JSON serializer for compatibility reports, pretty by default.
pub struct JsonReporter {
    pretty: bool,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn serialize(&self, report: &CompatReport) -> Result<String, ReportError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        result.map_err(|e| ReportError::Serialization(e.to_string()))
    }

    pub fn write_to_file<P: AsRef<Path>>(
        &self,
        report: &CompatReport,
        path: P,
    ) -> Result<(), ReportError> {
        let text = self.serialize(report)?;
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        writer.write_all(text.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccessFlags, FieldInfo, MemberInfo};
    use std::collections::BTreeSet;

    #[test]
    fn test_report_carries_verdict_and_records() {
        let mut differences = BTreeSet::new();
        differences.insert(Difference::Add {
            class_name: "com.example.Foo".to_string(),
            info: MemberInfo::Field(FieldInfo::new(AccessFlags::PUBLIC, "limit", "I", None, None)),
        });
        let delta = Delta::new(differences);

        let report = CompatReport::from_delta("lib-1.0.jar", "lib-1.1.jar", &delta);
        assert_eq!(report.compatibility, "BACKWARD_COMPATIBLE_USER");
        assert_eq!(report.differences.len(), 1);
        let record = &report.differences[0];
        assert_eq!(record.action, "Added");
        assert_eq!(record.kind, "Field");
        assert_eq!(record.member.as_deref(), Some("limit"));
        assert_eq!(record.descriptor.as_deref(), Some("I"));
    }

    #[test]
    fn test_compact_serialization_is_single_line() {
        let delta = Delta::default();
        let report = CompatReport::from_delta("a", "b", &delta);
        let text = JsonReporter::new().with_pretty(false).serialize(&report).unwrap();
        assert!(!text.contains('\n'));
        assert!(text.contains("BACKWARD_COMPATIBLE_IMPLEMENTER"));
    }
}
