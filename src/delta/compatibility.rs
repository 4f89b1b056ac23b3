// Wed Aug 05 2026 - Alex

use crate::delta::difference::Difference;
use crate::model::{ClassInfo, MemberInfo};
use crate::version::{Element, Version, VersionError};
use std::collections::BTreeSet;
use std::fmt;

/// Compatibility verdict for a set of differences, ordered from most to
/// least compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompatibilityType {
    BackwardCompatibleImplementer,
    BackwardCompatibleUser,
    NonBackwardCompatible,
}

impl CompatibilityType {
    /// The lesser (least compatible) of two verdicts.
    fn worst(self, other: CompatibilityType) -> CompatibilityType {
        self.max(other)
    }
}

impl fmt::Display for CompatibilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompatibilityType::BackwardCompatibleImplementer => {
                write!(f, "BACKWARD_COMPATIBLE_IMPLEMENTER")
            }
            CompatibilityType::BackwardCompatibleUser => write!(f, "BACKWARD_COMPATIBLE_USER"),
            CompatibilityType::NonBackwardCompatible => write!(f, "NON_BACKWARD_COMPATIBLE"),
        }
    }
}

/// Immutable set of structural differences between two class
/// collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delta {
    differences: BTreeSet<Difference>,
}

impl Delta {
    pub fn new(differences: BTreeSet<Difference>) -> Self {
        Self { differences }
    }

    pub fn differences(&self) -> &BTreeSet<Difference> {
        &self.differences
    }

    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.differences.len()
    }

    /// Reduce the difference set to a compatibility verdict using
    /// binary-compatibility heuristics. The policy is deliberately
    /// conservative: any removal, and any method- or field-level
    /// change, is non-backward-compatible.
    pub fn compute_compatibility_type(&self) -> CompatibilityType {
        let mut has_change = false;
        let mut has_addition = false;

        for difference in &self.differences {
            match difference {
                // Nothing outweighs a removal.
                Difference::Remove { .. } => return CompatibilityType::NonBackwardCompatible,
                Difference::Change { .. } => has_change = true,
                Difference::Add { .. } | Difference::Deprecate { .. } => has_addition = true,
            }
        }

        if has_change {
            let mut verdict = CompatibilityType::BackwardCompatibleImplementer;
            for difference in &self.differences {
                if let Difference::Change { info, modified, .. } = difference {
                    verdict = verdict.worst(change_compatibility(info, modified));
                    if verdict == CompatibilityType::NonBackwardCompatible {
                        break;
                    }
                }
            }
            verdict
        } else if has_addition {
            CompatibilityType::BackwardCompatibleUser
        } else {
            CompatibilityType::BackwardCompatibleImplementer
        }
    }

    /// Infer the next version from the previous release and this delta.
    pub fn infer(&self, previous: &Version) -> Result<Version, VersionError> {
        if previous.is_in_development() {
            return Err(VersionError::InvalidArgument(format!(
                "Cannot infer for in-development version <{}>",
                previous
            )));
        }
        Ok(infer_next_version(previous, self.compute_compatibility_type()))
    }

    /// Check that `current` bumps `previous` at least as far as this
    /// delta requires. The current version must be newer than the
    /// previous one; a current version still in development passes
    /// trivially since pre-1.0 carries no compatibility contract.
    pub fn validate(&self, previous: &Version, current: &Version) -> Result<bool, VersionError> {
        if current <= previous {
            return Err(VersionError::InvalidArgument(format!(
                "Current version <{}> must be more recent than previous version <{}>",
                current, previous
            )));
        }
        if current.is_in_development() {
            return Ok(true);
        }
        let floor = self.infer(previous)?;
        Ok(current.release() >= floor)
    }
}

/// Next version implied by a compatibility verdict: PATCH for
/// implementer-compatible, MINOR for user-compatible, MAJOR otherwise.
pub fn infer_next_version(version: &Version, compatibility: CompatibilityType) -> Version {
    match compatibility {
        CompatibilityType::BackwardCompatibleImplementer => version.next(Element::Patch),
        CompatibilityType::BackwardCompatibleUser => version.next(Element::Minor),
        CompatibilityType::NonBackwardCompatible => version.next(Element::Major),
    }
}

/// Verdict for a single Change difference. Class-level changes get
/// fine-grained heuristics; method- and field-level changes are not
/// special-cased (for now) and resolve to the least compatible verdict.
fn change_compatibility(info: &MemberInfo, modified: &MemberInfo) -> CompatibilityType {
    match (info, modified) {
        (MemberInfo::Class(old), MemberInfo::Class(new)) => class_change_compatibility(old, new),
        _ => CompatibilityType::NonBackwardCompatible,
    }
}

fn class_change_compatibility(old: &ClassInfo, new: &ClassInfo) -> CompatibilityType {
    if old.supername() != new.supername() {
        return CompatibilityType::NonBackwardCompatible;
    }

    let old_interfaces: BTreeSet<&str> = old.interfaces().keys().map(String::as_str).collect();
    let new_interfaces: BTreeSet<&str> = new.interfaces().keys().map(String::as_str).collect();
    if !new_interfaces.is_superset(&old_interfaces) {
        // An implemented interface was dropped.
        return CompatibilityType::NonBackwardCompatible;
    }

    let mut verdict = CompatibilityType::BackwardCompatibleImplementer;
    if new_interfaces.len() > old_interfaces.len() {
        // New interfaces break implementers, not users.
        verdict = verdict.worst(CompatibilityType::BackwardCompatibleUser);
    }

    if old.access().is_public() && !new.access().is_public() {
        return CompatibilityType::NonBackwardCompatible;
    }

    if new.format_version() > old.format_version() {
        return CompatibilityType::NonBackwardCompatible;
    }

    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccessFlags, ClassInfoBuilder, FieldInfo, MemberInfo, MethodInfo};

    fn field_member(name: &str) -> MemberInfo {
        MemberInfo::Field(FieldInfo::new(AccessFlags::PUBLIC, name, "I", None, None))
    }

    fn class(access: AccessFlags, version: u32, supername: &str, interfaces: &[&str]) -> ClassInfo {
        ClassInfoBuilder::new(version, access, "com/example/Foo")
            .supername(Some(supername.to_string()))
            .interfaces(interfaces.iter().map(|s| s.to_string()).collect())
            .build()
            .unwrap()
    }

    fn class_change(old: ClassInfo, new: ClassInfo) -> Delta {
        let mut differences = BTreeSet::new();
        differences.insert(Difference::Change {
            class_name: "com.example.Foo".to_string(),
            info: MemberInfo::Class(old),
            modified: MemberInfo::Class(new),
        });
        Delta::new(differences)
    }

    #[test]
    fn test_empty_delta_is_implementer_compatible() {
        assert_eq!(
            Delta::default().compute_compatibility_type(),
            CompatibilityType::BackwardCompatibleImplementer
        );
    }

    #[test]
    fn test_adds_are_user_compatible() {
        let mut differences = BTreeSet::new();
        differences.insert(Difference::Add {
            class_name: "a.A".to_string(),
            info: field_member("x"),
        });
        assert_eq!(
            Delta::new(differences).compute_compatibility_type(),
            CompatibilityType::BackwardCompatibleUser
        );
    }

    #[test]
    fn test_remove_outweighs_any_number_of_adds() {
        let mut differences = BTreeSet::new();
        for i in 0..5 {
            differences.insert(Difference::Add {
                class_name: "a.A".to_string(),
                info: field_member(&format!("f{}", i)),
            });
        }
        differences.insert(Difference::Remove {
            class_name: "a.A".to_string(),
            info: field_member("gone"),
        });
        assert_eq!(
            Delta::new(differences).compute_compatibility_type(),
            CompatibilityType::NonBackwardCompatible
        );
    }

    #[test]
    fn test_member_level_change_is_non_backward_compatible() {
        let mut differences = BTreeSet::new();
        let m = MemberInfo::Method(MethodInfo::new(AccessFlags::PUBLIC, "run", "()V", None, None));
        differences.insert(Difference::Change {
            class_name: "a.A".to_string(),
            info: m.clone(),
            modified: m,
        });
        assert_eq!(
            Delta::new(differences).compute_compatibility_type(),
            CompatibilityType::NonBackwardCompatible
        );
    }

    #[test]
    fn test_grown_interface_set_is_user_compatible() {
        let old = class(AccessFlags::PUBLIC, 52, "java/lang/Object", &["com/example/I1"]);
        let new = class(
            AccessFlags::PUBLIC,
            52,
            "java/lang/Object",
            &["com/example/I1", "com/example/I2"],
        );
        let delta = class_change(old, new);
        assert_eq!(
            delta.compute_compatibility_type(),
            CompatibilityType::BackwardCompatibleUser
        );
        let previous = Version::parse("1.1.0").unwrap();
        assert!(delta.validate(&previous, &Version::parse("1.2.0").unwrap()).unwrap());
        assert!(!delta.validate(&previous, &Version::parse("1.1.1").unwrap()).unwrap());
    }

    #[test]
    fn test_dropped_interface_is_non_backward_compatible() {
        let old = class(
            AccessFlags::PUBLIC,
            52,
            "java/lang/Object",
            &["com/example/I1", "com/example/I2"],
        );
        let new = class(AccessFlags::PUBLIC, 52, "java/lang/Object", &["com/example/I1"]);
        let delta = class_change(old, new);
        assert_eq!(
            delta.compute_compatibility_type(),
            CompatibilityType::NonBackwardCompatible
        );
        let previous = Version::parse("1.1.0").unwrap();
        assert!(!delta.validate(&previous, &Version::parse("1.2.0").unwrap()).unwrap());
        assert!(delta.validate(&previous, &Version::parse("2.0.0").unwrap()).unwrap());
    }

    #[test]
    fn test_changed_superclass_is_non_backward_compatible() {
        let old = class(AccessFlags::PUBLIC, 52, "com/example/BaseA", &[]);
        let new = class(AccessFlags::PUBLIC, 52, "com/example/BaseB", &[]);
        assert_eq!(
            class_change(old, new).compute_compatibility_type(),
            CompatibilityType::NonBackwardCompatible
        );
    }

    #[test]
    fn test_visibility_drop_is_non_backward_compatible() {
        let old = class(AccessFlags::PUBLIC, 52, "java/lang/Object", &[]);
        let new = class(AccessFlags::PRIVATE, 52, "java/lang/Object", &[]);
        assert_eq!(
            class_change(old, new).compute_compatibility_type(),
            CompatibilityType::NonBackwardCompatible
        );
    }

    #[test]
    fn test_format_version_increase_is_non_backward_compatible() {
        let old = class(AccessFlags::PUBLIC, 52, "java/lang/Object", &[]);
        let new = class(AccessFlags::PUBLIC, 55, "java/lang/Object", &[]);
        assert_eq!(
            class_change(old, new).compute_compatibility_type(),
            CompatibilityType::NonBackwardCompatible
        );
    }

    #[test]
    fn test_deprecate_is_user_compatible() {
        let old = FieldInfo::new(AccessFlags::PUBLIC, "limit", "I", None, None);
        let new = old.with_deprecated();
        let mut differences = BTreeSet::new();
        differences.insert(Difference::Deprecate {
            class_name: "a.A".to_string(),
            info: MemberInfo::Field(old),
            modified: MemberInfo::Field(new),
        });
        let delta = Delta::new(differences);
        assert_eq!(
            delta.compute_compatibility_type(),
            CompatibilityType::BackwardCompatibleUser
        );
        let previous = Version::parse("1.1.0").unwrap();
        assert!(delta.validate(&previous, &Version::parse("1.2.0").unwrap()).unwrap());
    }

    #[test]
    fn test_infer_next_version_per_verdict() {
        let version = Version::new(1, 2, 3);
        assert_eq!(
            infer_next_version(&version, CompatibilityType::NonBackwardCompatible),
            Version::new(2, 0, 0)
        );
        assert_eq!(
            infer_next_version(&version, CompatibilityType::BackwardCompatibleUser),
            Version::new(1, 3, 0)
        );
        assert_eq!(
            infer_next_version(&version, CompatibilityType::BackwardCompatibleImplementer),
            Version::new(1, 2, 4)
        );
    }

    #[test]
    fn test_infer_rejects_in_development_previous() {
        assert!(Delta::default().infer(&Version::new(0, 9, 0)).is_err());
    }

    #[test]
    fn test_validate_rejects_non_increasing_versions() {
        let delta = Delta::default();
        let v110 = Version::parse("1.1.0").unwrap();
        assert!(delta.validate(&v110, &v110).is_err());
        assert!(delta.validate(&v110, &Version::parse("1.0.0").unwrap()).is_err());
    }

    #[test]
    fn test_validate_in_development_current_passes() {
        let mut differences = BTreeSet::new();
        differences.insert(Difference::Remove {
            class_name: "a.A".to_string(),
            info: field_member("gone"),
        });
        let delta = Delta::new(differences);
        let previous = Version::parse("0.1.0").unwrap();
        assert!(delta.validate(&previous, &Version::parse("0.1.1").unwrap()).unwrap());
    }

    #[test]
    fn test_validate_accepts_pre_release_of_the_required_bump() {
        let mut differences = BTreeSet::new();
        differences.insert(Difference::Add {
            class_name: "a.A".to_string(),
            info: field_member("x"),
        });
        let delta = Delta::new(differences);
        let previous = Version::parse("1.1.0").unwrap();
        // Release form of 1.2.0-SNAPSHOT meets the inferred 1.2.0 floor.
        assert!(delta
            .validate(&previous, &Version::parse("1.2.0-SNAPSHOT").unwrap())
            .unwrap());
    }
}
