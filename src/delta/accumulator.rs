// Wed Aug 05 2026 - Alex

use crate::delta::compatibility::Delta;
use crate::delta::difference::Difference;
use crate::delta::filter::ClassFilter;
use crate::diff::error::DiffError;
use crate::diff::handler::DiffHandler;
use crate::model::{display_name, ClassInfo, FieldInfo, MemberInfo, MethodInfo};
use std::collections::BTreeSet;

/// Diff handler that collects leaf events into a flat set of typed
/// differences tagged with the owning class name. Container events are
/// ignored. Holds the current class context, so use a fresh instance
/// per diff run.
#[derive(Debug, Default)]
pub struct DeltaAccumulator {
    current_class_name: Option<String>,
    filter: ClassFilter,
    differences: BTreeSet<Difference>,
}

impl DeltaAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulator restricted by include/exclude glob patterns over
    /// dotted class names.
    pub fn with_filters(includes: &[String], excludes: &[String]) -> Self {
        Self {
            current_class_name: None,
            filter: ClassFilter::new(includes, excludes),
            differences: BTreeSet::new(),
        }
    }

    pub fn delta(&self) -> Delta {
        Delta::new(self.differences.clone())
    }

    pub fn into_delta(self) -> Delta {
        Delta::new(self.differences)
    }

    fn current_class(&self) -> Result<&str, DiffError> {
        self.current_class_name
            .as_deref()
            .ok_or_else(|| DiffError::Sink("member event outside a class-changed block".to_string()))
    }

    fn considered(&self, dotted_name: &str) -> bool {
        self.filter.is_considered(dotted_name)
    }
}

impl DiffHandler for DeltaAccumulator {
    fn class_added(&mut self, class: &ClassInfo) -> Result<(), DiffError> {
        let name = display_name(class.name());
        if self.considered(&name) {
            self.differences.insert(Difference::Add {
                class_name: name,
                info: MemberInfo::Class(class.clone()),
            });
        }
        Ok(())
    }

    fn class_removed(&mut self, class: &ClassInfo) -> Result<(), DiffError> {
        let name = display_name(class.name());
        if self.considered(&name) {
            self.differences.insert(Difference::Remove {
                class_name: name,
                info: MemberInfo::Class(class.clone()),
            });
        }
        Ok(())
    }

    fn start_class_changed(&mut self, internal_name: &str) -> Result<(), DiffError> {
        self.current_class_name = Some(display_name(internal_name));
        Ok(())
    }

    fn end_class_changed(&mut self) -> Result<(), DiffError> {
        self.current_class_name = None;
        Ok(())
    }

    fn class_changed(&mut self, old: &ClassInfo, new: &ClassInfo) -> Result<(), DiffError> {
        let name = display_name(old.name());
        if self.considered(&name) {
            self.differences.insert(Difference::Change {
                class_name: name,
                info: MemberInfo::Class(old.clone()),
                modified: MemberInfo::Class(new.clone()),
            });
        }
        Ok(())
    }

    fn class_deprecated(&mut self, old: &ClassInfo, new: &ClassInfo) -> Result<(), DiffError> {
        let name = display_name(old.name());
        if self.considered(&name) {
            self.differences.insert(Difference::Deprecate {
                class_name: name,
                info: MemberInfo::Class(old.clone()),
                modified: MemberInfo::Class(new.clone()),
            });
        }
        Ok(())
    }

    fn field_added(&mut self, field: &FieldInfo) -> Result<(), DiffError> {
        let name = self.current_class()?.to_string();
        if self.considered(&name) {
            self.differences.insert(Difference::Add {
                class_name: name,
                info: MemberInfo::Field(field.clone()),
            });
        }
        Ok(())
    }

    fn field_removed(&mut self, field: &FieldInfo) -> Result<(), DiffError> {
        let name = self.current_class()?.to_string();
        if self.considered(&name) {
            self.differences.insert(Difference::Remove {
                class_name: name,
                info: MemberInfo::Field(field.clone()),
            });
        }
        Ok(())
    }

    fn field_changed(&mut self, old: &FieldInfo, new: &FieldInfo) -> Result<(), DiffError> {
        let name = self.current_class()?.to_string();
        if self.considered(&name) {
            self.differences.insert(Difference::Change {
                class_name: name,
                info: MemberInfo::Field(old.clone()),
                modified: MemberInfo::Field(new.clone()),
            });
        }
        Ok(())
    }

    fn field_deprecated(&mut self, old: &FieldInfo, new: &FieldInfo) -> Result<(), DiffError> {
        let name = self.current_class()?.to_string();
        if self.considered(&name) {
            self.differences.insert(Difference::Deprecate {
                class_name: name,
                info: MemberInfo::Field(old.clone()),
                modified: MemberInfo::Field(new.clone()),
            });
        }
        Ok(())
    }

    fn method_added(&mut self, method: &MethodInfo) -> Result<(), DiffError> {
        let name = self.current_class()?.to_string();
        if self.considered(&name) {
            self.differences.insert(Difference::Add {
                class_name: name,
                info: MemberInfo::Method(method.clone()),
            });
        }
        Ok(())
    }

    fn method_removed(&mut self, method: &MethodInfo) -> Result<(), DiffError> {
        let name = self.current_class()?.to_string();
        if self.considered(&name) {
            self.differences.insert(Difference::Remove {
                class_name: name,
                info: MemberInfo::Method(method.clone()),
            });
        }
        Ok(())
    }

    fn method_changed(&mut self, old: &MethodInfo, new: &MethodInfo) -> Result<(), DiffError> {
        let name = self.current_class()?.to_string();
        if self.considered(&name) {
            self.differences.insert(Difference::Change {
                class_name: name,
                info: MemberInfo::Method(old.clone()),
                modified: MemberInfo::Method(new.clone()),
            });
        }
        Ok(())
    }

    fn method_deprecated(&mut self, old: &MethodInfo, new: &MethodInfo) -> Result<(), DiffError> {
        let name = self.current_class()?.to_string();
        if self.considered(&name) {
            self.differences.insert(Difference::Deprecate {
                class_name: name,
                info: MemberInfo::Method(old.clone()),
                modified: MemberInfo::Method(new.clone()),
            });
        }
        Ok(())
    }
}
