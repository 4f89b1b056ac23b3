// Thu Aug 06 2026 - Alex

pub mod dump;
pub mod json;

pub use dump::{access_details, TextDumper};
pub use json::{CompatReport, DifferenceRecord, JsonReporter, ReportError};
