// Tue Aug 04 2026 - Alex

use crate::diff::error::DiffError;
use crate::diff::handler::DiffHandler;
use crate::diff::policy::DiffPolicy;
use crate::model::{ClassInfo, FieldInfo, MethodInfo};
use std::collections::{BTreeMap, BTreeSet};

/// Compares two named collections of classes and pushes an ordered
/// sequence of difference events onto a [`DiffHandler`]. The engine
/// only reads its inputs; all results are observable through the
/// handler.
pub struct ClassDiffer<'a> {
    policy: &'a dyn DiffPolicy,
}

impl<'a> ClassDiffer<'a> {
    pub fn new(policy: &'a dyn DiffPolicy) -> Self {
        Self { policy }
    }

    pub fn diff(
        &self,
        handler: &mut dyn DiffHandler,
        previous_name: &str,
        current_name: &str,
        previous: &BTreeMap<String, ClassInfo>,
        current: &BTreeMap<String, ClassInfo>,
    ) -> Result<(), DiffError> {
        log::debug!(
            "diffing {} ({} classes) against {} ({} classes)",
            previous_name,
            previous.len(),
            current_name,
            current.len()
        );

        handler.start_diff(previous_name, current_name)?;

        handler.start_old_contents()?;
        for class in previous.values() {
            if self.policy.class_interesting(class) {
                handler.contains(class)?;
            }
        }
        handler.end_old_contents()?;

        handler.start_new_contents()?;
        for class in current.values() {
            if self.policy.class_interesting(class) {
                handler.contains(class)?;
            }
        }
        handler.end_new_contents()?;

        let previous_names: BTreeSet<&str> = previous.keys().map(String::as_str).collect();
        let current_names: BTreeSet<&str> = current.keys().map(String::as_str).collect();

        handler.start_removed()?;
        for name in previous_names.difference(&current_names) {
            let class = &previous[*name];
            if self.policy.class_interesting(class) {
                handler.class_removed(class)?;
            }
        }
        handler.end_removed()?;

        handler.start_added()?;
        for name in current_names.difference(&previous_names) {
            let class = &current[*name];
            if self.policy.class_interesting(class) {
                handler.class_added(class)?;
            }
        }
        handler.end_added()?;

        handler.start_changed()?;
        for name in previous_names.intersection(&current_names) {
            let old = &previous[*name];
            let new = &current[*name];
            if self.policy.class_interesting(old) || self.policy.class_interesting(new) {
                self.diff_class(handler, name, old, new, previous, current)?;
            }
        }
        handler.end_changed()?;

        handler.end_diff()?;
        Ok(())
    }

    /// Diff one class present on both sides: resolve member sets with
    /// the superclass chains taken into account, then emit the per-class
    /// event block. The block is skipped entirely when nothing fired.
    #[allow(clippy::too_many_arguments)]
    fn diff_class(
        &self,
        handler: &mut dyn DiffHandler,
        name: &str,
        old: &ClassInfo,
        new: &ClassInfo,
        previous: &BTreeMap<String, ClassInfo>,
        current: &BTreeMap<String, ClassInfo>,
    ) -> Result<(), DiffError> {
        let old_inherited = inherited_member_keys(previous, old);
        let new_inherited = inherited_member_keys(current, new);

        let methods = MemberDiff::resolve(
            old.methods(),
            new.methods(),
            &old_inherited.methods,
            &new_inherited.methods,
            |m| self.policy.method_interesting(m),
            |a, b| self.policy.method_differs(a, b),
        );
        let fields = MemberDiff::resolve(
            old.fields(),
            new.fields(),
            &old_inherited.fields,
            &new_inherited.fields,
            |f| self.policy.field_interesting(f),
            |a, b| self.policy.field_differs(a, b),
        );

        let class_changed = self.policy.class_differs(old, new);
        if !class_changed && methods.is_empty() && fields.is_empty() {
            return Ok(());
        }

        log::debug!("class {} changed", name);
        handler.start_class_changed(name)?;

        handler.start_removed()?;
        for key in &fields.removed {
            handler.field_removed(&old.fields()[*key])?;
        }
        for key in &methods.removed {
            handler.method_removed(&old.methods()[*key])?;
        }
        handler.end_removed()?;

        handler.start_added()?;
        for key in &fields.added {
            handler.field_added(&new.fields()[*key])?;
        }
        for key in &methods.added {
            handler.method_added(&new.methods()[*key])?;
        }
        handler.end_added()?;

        handler.start_changed()?;
        if class_changed {
            if self.class_only_deprecated(old, new) {
                handler.class_deprecated(old, new)?;
            } else {
                handler.class_changed(old, new)?;
            }
        }
        for key in &fields.changed {
            let (old_field, new_field) = (&old.fields()[*key], &new.fields()[*key]);
            if self.field_only_deprecated(old_field, new_field) {
                handler.field_deprecated(old_field, new_field)?;
            } else {
                handler.field_changed(old_field, new_field)?;
            }
        }
        for key in &methods.changed {
            let (old_method, new_method) = (&old.methods()[*key], &new.methods()[*key]);
            if self.method_only_deprecated(old_method, new_method) {
                handler.method_deprecated(old_method, new_method)?;
            } else {
                handler.method_changed(old_method, new_method)?;
            }
        }
        handler.end_changed()?;

        handler.end_class_changed()?;
        Ok(())
    }

    // A change is a pure deprecation when the deprecated flag flipped on
    // and forcing it onto the old member makes the difference vanish.
    fn class_only_deprecated(&self, old: &ClassInfo, new: &ClassInfo) -> bool {
        !old.access().is_deprecated()
            && new.access().is_deprecated()
            && !self.policy.class_differs(&old.with_deprecated(), new)
    }

    fn method_only_deprecated(&self, old: &MethodInfo, new: &MethodInfo) -> bool {
        !old.access().is_deprecated()
            && new.access().is_deprecated()
            && !self.policy.method_differs(&old.with_deprecated(), new)
    }

    fn field_only_deprecated(&self, old: &FieldInfo, new: &FieldInfo) -> bool {
        !old.access().is_deprecated()
            && new.access().is_deprecated()
            && !self.policy.field_differs(&old.with_deprecated(), new)
    }
}

/// Removed/added/changed member keys for one member kind, in sorted
/// order.
struct MemberDiff<'c> {
    removed: Vec<&'c str>,
    added: Vec<&'c str>,
    changed: Vec<&'c str>,
}

impl<'c> MemberDiff<'c> {
    /// Set algebra over one member kind. A member missing from the new
    /// side but satisfied by a new-side ancestor is not removed; a
    /// member new to this class but already inherited on the old side
    /// is not added.
    fn resolve<M>(
        old_members: &'c BTreeMap<String, M>,
        new_members: &'c BTreeMap<String, M>,
        old_inherited: &BTreeSet<&'c str>,
        new_inherited: &BTreeSet<&'c str>,
        interesting: impl Fn(&M) -> bool,
        differs: impl Fn(&M, &M) -> bool,
    ) -> Self {
        let old_keys: BTreeSet<&str> = old_members
            .iter()
            .filter(|(_, m)| interesting(m))
            .map(|(k, _)| k.as_str())
            .collect();
        let new_keys: BTreeSet<&str> = new_members
            .iter()
            .filter(|(_, m)| interesting(m))
            .map(|(k, _)| k.as_str())
            .collect();

        let shared: BTreeSet<&str> = old_keys.intersection(&new_keys).copied().collect();

        let removed = old_keys
            .iter()
            .copied()
            .filter(|k| !shared.contains(k) && !new_inherited.contains(k))
            .collect();
        let added = new_keys
            .iter()
            .copied()
            .filter(|k| !shared.contains(k) && !old_inherited.contains(k))
            .collect();
        let changed = shared
            .iter()
            .copied()
            .filter(|k| differs(&old_members[*k], &new_members[*k]))
            .collect();

        Self { removed, added, changed }
    }

    fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty() && self.changed.is_empty()
    }
}

struct InheritedKeys<'c> {
    methods: BTreeSet<&'c str>,
    fields: BTreeSet<&'c str>,
}

/// Member keys a class picks up from its superclass chain: walk
/// `supername` links while each ancestor exists in the collection,
/// merging every non-private inherited member not already shadowed by a
/// more-derived declaration.
fn inherited_member_keys<'c>(
    collection: &'c BTreeMap<String, ClassInfo>,
    class: &'c ClassInfo,
) -> InheritedKeys<'c> {
    let mut method_keys: BTreeSet<&'c str> = class.methods().keys().map(String::as_str).collect();
    let mut field_keys: BTreeSet<&'c str> = class.fields().keys().map(String::as_str).collect();
    let mut methods = BTreeSet::new();
    let mut fields = BTreeSet::new();

    let mut visited: BTreeSet<&str> = BTreeSet::new();
    let mut ancestor = class.supername();
    while let Some(supername) = ancestor {
        // A cycle in supername links means corrupt input; stop walking.
        if !visited.insert(supername) {
            log::warn!("superclass cycle detected at {}", supername);
            break;
        }
        let Some(info) = collection.get(supername) else {
            break;
        };
        for (key, method) in info.methods() {
            if !method.access().is_private() && method_keys.insert(key.as_str()) {
                methods.insert(key.as_str());
            }
        }
        for (key, field) in info.fields() {
            if !field.access().is_private() && field_keys.insert(key.as_str()) {
                fields.insert(key.as_str());
            }
        }
        ancestor = info.supername();
    }

    InheritedKeys { methods, fields }
}
