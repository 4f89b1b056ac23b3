// Mon Aug 03 2026 - Alex

use crate::model::access::{AccessFlags, MemberKind};
use crate::model::class::ClassInfo;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Constant value attached to a field in the binary.
#[derive(Debug, Clone)]
pub enum FieldValue {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Str(String),
}

impl FieldValue {
    fn rank(&self) -> u8 {
        match self {
            FieldValue::Int(_) => 0,
            FieldValue::Long(_) => 1,
            FieldValue::Float(_) => 2,
            FieldValue::Double(_) => 3,
            FieldValue::Str(_) => 4,
        }
    }

    // Floats compare by bit pattern so values can live in sets.
    fn bits(&self) -> u64 {
        match self {
            FieldValue::Int(v) => *v as u32 as u64,
            FieldValue::Long(v) => *v as u64,
            FieldValue::Float(v) => v.to_bits() as u64,
            FieldValue::Double(v) => v.to_bits(),
            FieldValue::Str(_) => 0,
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Str(a), FieldValue::Str(b)) => a == b,
            _ => self.rank() == other.rank() && self.bits() == other.bits(),
        }
    }
}

impl Eq for FieldValue {}

impl Hash for FieldValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            FieldValue::Str(s) => s.hash(state),
            _ => self.bits().hash(state),
        }
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Str(a), FieldValue::Str(b)) => a.cmp(b),
            _ => self
                .rank()
                .cmp(&other.rank())
                .then_with(|| self.bits().cmp(&other.bits())),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Long(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Double(v) => write!(f, "{}", v),
            FieldValue::Str(v) => write!(f, "{:?}", v),
        }
    }
}

/// Information about one method as declared in the binary.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodInfo {
    access: AccessFlags,
    name: String,
    descriptor: String,
    signature: Option<String>,
    exceptions: Option<Vec<String>>,
}

impl MethodInfo {
    pub fn new(
        access: AccessFlags,
        name: &str,
        descriptor: &str,
        signature: Option<String>,
        exceptions: Option<Vec<String>>,
    ) -> Self {
        Self {
            access,
            name: name.to_string(),
            descriptor: descriptor.to_string(),
            signature,
            exceptions,
        }
    }

    pub fn access(&self) -> AccessFlags {
        self.access
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    pub fn exceptions(&self) -> Option<&[String]> {
        self.exceptions.as_deref()
    }

    /// Map key: methods are identified by name plus descriptor.
    pub fn key(&self) -> String {
        format!("{}{}", self.name, self.descriptor)
    }

    pub fn with_deprecated(&self) -> Self {
        let mut copy = self.clone();
        copy.access = copy.access.with_deprecated();
        copy
    }
}

/// Information about one field as declared in the binary.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldInfo {
    access: AccessFlags,
    name: String,
    descriptor: String,
    signature: Option<String>,
    value: Option<FieldValue>,
}

impl FieldInfo {
    pub fn new(
        access: AccessFlags,
        name: &str,
        descriptor: &str,
        signature: Option<String>,
        value: Option<FieldValue>,
    ) -> Self {
        Self {
            access,
            name: name.to_string(),
            descriptor: descriptor.to_string(),
            signature,
            value,
        }
    }

    pub fn access(&self) -> AccessFlags {
        self.access
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    pub fn with_deprecated(&self) -> Self {
        let mut copy = self.clone();
        copy.access = copy.access.with_deprecated();
        copy
    }
}

/// Closed set of member variants a difference can be about.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MemberInfo {
    Class(ClassInfo),
    Method(MethodInfo),
    Field(FieldInfo),
}

impl MemberInfo {
    pub fn kind(&self) -> MemberKind {
        match self {
            MemberInfo::Class(_) => MemberKind::Class,
            MemberInfo::Method(_) => MemberKind::Method,
            MemberInfo::Field(_) => MemberKind::Field,
        }
    }

    pub fn access(&self) -> AccessFlags {
        match self {
            MemberInfo::Class(c) => c.access(),
            MemberInfo::Method(m) => m.access(),
            MemberInfo::Field(f) => f.access(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MemberInfo::Class(c) => c.name(),
            MemberInfo::Method(m) => m.name(),
            MemberInfo::Field(f) => f.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_equality_by_bits() {
        assert_eq!(FieldValue::Float(1.5), FieldValue::Float(1.5));
        assert_ne!(FieldValue::Float(1.5), FieldValue::Float(2.5));
        assert_ne!(FieldValue::Int(1), FieldValue::Long(1));
        assert_eq!(
            FieldValue::Str("a".to_string()),
            FieldValue::Str("a".to_string())
        );
    }

    #[test]
    fn test_method_key_includes_descriptor() {
        let m = MethodInfo::new(AccessFlags::PUBLIC, "run", "(I)V", None, None);
        assert_eq!(m.key(), "run(I)V");
    }

    #[test]
    fn test_with_deprecated_only_touches_the_flag() {
        let f = FieldInfo::new(AccessFlags::PUBLIC, "limit", "I", None, Some(FieldValue::Int(3)));
        let d = f.with_deprecated();
        assert!(d.access().is_deprecated());
        assert_eq!(d.name(), f.name());
        assert_eq!(d.value(), f.value());
    }
}
