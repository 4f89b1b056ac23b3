// Wed Aug 05 2026 - Alex

use crate::model::{MemberInfo, MemberKind};
use std::cmp::Ordering;
use std::fmt;

/// One typed structural change, scoped to the dotted name of the class
/// it belongs to. Change and Deprecate carry both sides of the member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Difference {
    Add {
        class_name: String,
        info: MemberInfo,
    },
    Remove {
        class_name: String,
        info: MemberInfo,
    },
    Change {
        class_name: String,
        info: MemberInfo,
        modified: MemberInfo,
    },
    Deprecate {
        class_name: String,
        info: MemberInfo,
        modified: MemberInfo,
    },
}

impl Difference {
    /// Dotted display name of the owning class.
    pub fn class_name(&self) -> &str {
        match self {
            Difference::Add { class_name, .. }
            | Difference::Remove { class_name, .. }
            | Difference::Change { class_name, .. }
            | Difference::Deprecate { class_name, .. } => class_name,
        }
    }

    /// The member as it was on the previous side (or the added member).
    pub fn info(&self) -> &MemberInfo {
        match self {
            Difference::Add { info, .. }
            | Difference::Remove { info, .. }
            | Difference::Change { info, .. }
            | Difference::Deprecate { info, .. } => info,
        }
    }

    /// The member as it is on the current side, for Change/Deprecate.
    pub fn modified_info(&self) -> Option<&MemberInfo> {
        match self {
            Difference::Change { modified, .. } | Difference::Deprecate { modified, .. } => {
                Some(modified)
            }
            _ => None,
        }
    }

    pub fn kind(&self) -> MemberKind {
        self.info().kind()
    }

    pub fn action(&self) -> &'static str {
        match self {
            Difference::Add { .. } => "Added",
            Difference::Remove { .. } => "Removed",
            Difference::Change { .. } => "Changed",
            Difference::Deprecate { .. } => "Deprecated",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Difference::Add { .. } => 0,
            Difference::Remove { .. } => 1,
            Difference::Change { .. } => 2,
            Difference::Deprecate { .. } => 3,
        }
    }
}

impl PartialOrd for Difference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Ordered by owning class name first; the remaining keys only make the
// order total and deterministic.
impl Ord for Difference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.class_name()
            .cmp(other.class_name())
            .then_with(|| self.rank().cmp(&other.rank()))
            .then_with(|| self.info().name().cmp(other.info().name()))
            .then_with(|| self.info().cmp(other.info()))
            .then_with(|| self.modified_info().cmp(&other.modified_info()))
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} in {}",
            self.action(),
            self.kind(),
            self.info().name(),
            self.class_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccessFlags, FieldInfo, MethodInfo};

    fn field(name: &str) -> MemberInfo {
        MemberInfo::Field(FieldInfo::new(AccessFlags::PUBLIC, name, "I", None, None))
    }

    #[test]
    fn test_ordering_is_by_class_name_first() {
        let a = Difference::Remove { class_name: "a.A".to_string(), info: field("z") };
        let b = Difference::Add { class_name: "b.B".to_string(), info: field("a") };
        assert!(a < b);
    }

    #[test]
    fn test_identical_tuples_are_equal() {
        let a = Difference::Add { class_name: "a.A".to_string(), info: field("x") };
        let b = Difference::Add { class_name: "a.A".to_string(), info: field("x") };
        assert_eq!(a, b);
    }

    #[test]
    fn test_accessors() {
        let m = MemberInfo::Method(MethodInfo::new(AccessFlags::PUBLIC, "run", "()V", None, None));
        let d = Difference::Deprecate {
            class_name: "a.A".to_string(),
            info: m.clone(),
            modified: m,
        };
        assert_eq!(d.class_name(), "a.A");
        assert_eq!(d.action(), "Deprecated");
        assert!(d.modified_info().is_some());
    }
}
