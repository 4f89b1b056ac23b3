// Tue Aug 04 2026 - Alex

use crate::model::{ClassInfo, FieldInfo, MethodInfo};
use std::collections::BTreeSet;

/// Pluggable selection/equality strategy: which members take part in a
/// diff at all, and what counts as a change between two builds of the
/// same member.
pub trait DiffPolicy {
    fn class_interesting(&self, class: &ClassInfo) -> bool;
    fn method_interesting(&self, method: &MethodInfo) -> bool;
    fn field_interesting(&self, field: &FieldInfo) -> bool;

    fn class_differs(&self, old: &ClassInfo, new: &ClassInfo) -> bool;
    fn method_differs(&self, old: &MethodInfo, new: &MethodInfo) -> bool;
    fn field_differs(&self, old: &FieldInfo, new: &FieldInfo) -> bool;
}

/// Default policy: a member is interesting iff it is not synthetic and
/// reachable from outside the package (public or protected). Classes
/// differ on access flags, superclass or interface set; methods on
/// access flags or declared exceptions; fields on access flags or
/// constant value.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardPolicy;

impl StandardPolicy {
    pub fn new() -> Self {
        StandardPolicy
    }

    fn exported(access: crate::model::AccessFlags) -> bool {
        !access.is_synthetic() && (access.is_public() || access.is_protected())
    }
}

impl DiffPolicy for StandardPolicy {
    fn class_interesting(&self, class: &ClassInfo) -> bool {
        Self::exported(class.access())
    }

    fn method_interesting(&self, method: &MethodInfo) -> bool {
        Self::exported(method.access())
    }

    fn field_interesting(&self, field: &FieldInfo) -> bool {
        Self::exported(field.access())
    }

    fn class_differs(&self, old: &ClassInfo, new: &ClassInfo) -> bool {
        if old.access() != new.access() {
            return true;
        }
        // The hierarchy root legitimately has no superclass.
        if old.supername() != new.supername() {
            return true;
        }
        let old_interfaces: BTreeSet<&str> = old.interfaces().keys().map(String::as_str).collect();
        let new_interfaces: BTreeSet<&str> = new.interfaces().keys().map(String::as_str).collect();
        old_interfaces != new_interfaces
    }

    fn method_differs(&self, old: &MethodInfo, new: &MethodInfo) -> bool {
        if old.access() != new.access() {
            return true;
        }
        match (old.exceptions(), new.exceptions()) {
            (None, None) => false,
            (Some(a), Some(b)) => {
                let a: BTreeSet<&String> = a.iter().collect();
                let b: BTreeSet<&String> = b.iter().collect();
                a != b
            }
            _ => true,
        }
    }

    fn field_differs(&self, old: &FieldInfo, new: &FieldInfo) -> bool {
        old.access() != new.access() || old.value() != new.value()
    }
}
