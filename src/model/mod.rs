// Mon Aug 03 2026 - Alex

pub mod access;
pub mod class;
pub mod member;

pub use access::{AccessFlags, MemberKind};
pub use class::{ClassInfo, ClassInfoBuilder};
pub use member::{FieldInfo, FieldValue, MemberInfo, MethodInfo};

/// Convert an internal (slash/`$` separated) class name into the dotted
/// display form. Inner-class markers collapse into plain dots.
pub fn display_name(internal_name: &str) -> String {
    internal_name
        .chars()
        .map(|ch| match ch {
            '/' | '$' => '.',
            other => other,
        })
        .collect()
}
