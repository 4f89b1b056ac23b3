// Tue Aug 04 2026 - Alex

use crate::diff::error::DiffError;
use crate::model::{ClassInfo, FieldInfo, MethodInfo};

/// Push-style protocol through which the diff engine reports its
/// findings. Calls arrive as a well-nested sequence:
///
/// ```text
/// start_diff
///   start_old_contents (contains)* end_old_contents
///   start_new_contents (contains)* end_new_contents
///   start_removed (class_removed)* end_removed
///   start_added (class_added)* end_added
///   start_changed
///     ( start_class_changed
///         start_removed (field_removed | method_removed)* end_removed
///         start_added (field_added | method_added)* end_added
///         start_changed
///           [class_changed | class_deprecated]
///           (field_changed | field_deprecated | method_changed | method_deprecated)*
///         end_changed
///       end_class_changed )*
///   end_changed
/// end_diff
/// ```
///
/// Every method defaults to a no-op so consumers only override the
/// events they care about. Any call may fail with a propagated sink
/// error.
pub trait DiffHandler {
    fn start_diff(&mut self, _previous: &str, _current: &str) -> Result<(), DiffError> {
        Ok(())
    }

    fn start_old_contents(&mut self) -> Result<(), DiffError> {
        Ok(())
    }

    fn end_old_contents(&mut self) -> Result<(), DiffError> {
        Ok(())
    }

    fn start_new_contents(&mut self) -> Result<(), DiffError> {
        Ok(())
    }

    fn end_new_contents(&mut self) -> Result<(), DiffError> {
        Ok(())
    }

    fn contains(&mut self, _class: &ClassInfo) -> Result<(), DiffError> {
        Ok(())
    }

    fn start_removed(&mut self) -> Result<(), DiffError> {
        Ok(())
    }

    fn class_removed(&mut self, _class: &ClassInfo) -> Result<(), DiffError> {
        Ok(())
    }

    fn end_removed(&mut self) -> Result<(), DiffError> {
        Ok(())
    }

    fn start_added(&mut self) -> Result<(), DiffError> {
        Ok(())
    }

    fn class_added(&mut self, _class: &ClassInfo) -> Result<(), DiffError> {
        Ok(())
    }

    fn end_added(&mut self) -> Result<(), DiffError> {
        Ok(())
    }

    fn start_changed(&mut self) -> Result<(), DiffError> {
        Ok(())
    }

    fn start_class_changed(&mut self, _internal_name: &str) -> Result<(), DiffError> {
        Ok(())
    }

    fn field_removed(&mut self, _field: &FieldInfo) -> Result<(), DiffError> {
        Ok(())
    }

    fn method_removed(&mut self, _method: &MethodInfo) -> Result<(), DiffError> {
        Ok(())
    }

    fn field_added(&mut self, _field: &FieldInfo) -> Result<(), DiffError> {
        Ok(())
    }

    fn method_added(&mut self, _method: &MethodInfo) -> Result<(), DiffError> {
        Ok(())
    }

    fn class_changed(&mut self, _old: &ClassInfo, _new: &ClassInfo) -> Result<(), DiffError> {
        Ok(())
    }

    fn class_deprecated(&mut self, _old: &ClassInfo, _new: &ClassInfo) -> Result<(), DiffError> {
        Ok(())
    }

    fn field_changed(&mut self, _old: &FieldInfo, _new: &FieldInfo) -> Result<(), DiffError> {
        Ok(())
    }

    fn field_deprecated(&mut self, _old: &FieldInfo, _new: &FieldInfo) -> Result<(), DiffError> {
        Ok(())
    }

    fn method_changed(&mut self, _old: &MethodInfo, _new: &MethodInfo) -> Result<(), DiffError> {
        Ok(())
    }

    fn method_deprecated(&mut self, _old: &MethodInfo, _new: &MethodInfo) -> Result<(), DiffError> {
        Ok(())
    }

    fn end_class_changed(&mut self) -> Result<(), DiffError> {
        Ok(())
    }

    fn end_changed(&mut self) -> Result<(), DiffError> {
        Ok(())
    }

    fn end_diff(&mut self) -> Result<(), DiffError> {
        Ok(())
    }
}
