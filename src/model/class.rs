// Mon Aug 03 2026 - Alex

use crate::model::access::AccessFlags;
use crate::model::member::{FieldInfo, MethodInfo};
use crate::signature::{parse_class_signature, SignatureError};
use std::collections::BTreeMap;

/// Information about one class as declared in the binary, with its
/// declared methods and fields. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassInfo {
    format_version: u32,
    access: AccessFlags,
    name: String,
    signature: Option<String>,
    formal_type_params: Option<String>,
    supername: Option<String>,
    super_signature: Option<String>,
    interfaces: BTreeMap<String, String>,
    methods: BTreeMap<String, MethodInfo>,
    fields: BTreeMap<String, FieldInfo>,
}

impl ClassInfo {
    pub fn format_version(&self) -> u32 {
        self.format_version
    }

    pub fn access(&self) -> AccessFlags {
        self.access
    }

    /// Internal (slash/`$` separated) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    pub fn formal_type_params(&self) -> Option<&str> {
        self.formal_type_params.as_deref()
    }

    /// None only for the root of the class hierarchy.
    pub fn supername(&self) -> Option<&str> {
        self.supername.as_deref()
    }

    pub fn super_signature(&self) -> Option<&str> {
        self.super_signature.as_deref()
    }

    /// Implemented interfaces, internal name to per-interface signature
    /// (empty string when the class signature carries none).
    pub fn interfaces(&self) -> &BTreeMap<String, String> {
        &self.interfaces
    }

    /// Declared methods keyed by name plus descriptor.
    pub fn methods(&self) -> &BTreeMap<String, MethodInfo> {
        &self.methods
    }

    /// Declared fields keyed by name.
    pub fn fields(&self) -> &BTreeMap<String, FieldInfo> {
        &self.fields
    }

    pub fn with_deprecated(&self) -> Self {
        let mut copy = self.clone();
        copy.access = copy.access.with_deprecated();
        copy
    }
}

/// One-shot builder for a [`ClassInfo`]. Constructed per class and
/// consumed exactly once by [`ClassInfoBuilder::build`]; there is no
/// reset, so state cannot leak between classes.
#[derive(Debug)]
pub struct ClassInfoBuilder {
    format_version: u32,
    access: AccessFlags,
    name: String,
    signature: Option<String>,
    supername: Option<String>,
    interfaces: Vec<String>,
    methods: BTreeMap<String, MethodInfo>,
    fields: BTreeMap<String, FieldInfo>,
}

impl ClassInfoBuilder {
    pub fn new(format_version: u32, access: AccessFlags, name: &str) -> Self {
        Self {
            format_version,
            access,
            name: name.to_string(),
            signature: None,
            supername: None,
            interfaces: Vec::new(),
            methods: BTreeMap::new(),
            fields: BTreeMap::new(),
        }
    }

    pub fn signature(mut self, signature: Option<String>) -> Self {
        self.signature = signature;
        self
    }

    pub fn supername(mut self, supername: Option<String>) -> Self {
        self.supername = supername;
        self
    }

    pub fn interfaces(mut self, interfaces: Vec<String>) -> Self {
        self.interfaces = interfaces;
        self
    }

    pub fn add_method(&mut self, method: MethodInfo) {
        self.methods.insert(method.key(), method);
    }

    pub fn add_field(&mut self, field: FieldInfo) {
        self.fields.insert(field.name().to_string(), field);
    }

    /// Consume the builder, decoding the class signature (when present)
    /// into formal type parameters, superclass signature and
    /// per-interface signatures.
    pub fn build(self) -> Result<ClassInfo, SignatureError> {
        let parsed = match self.signature.as_deref() {
            Some(text) => Some(parse_class_signature(text)?),
            None => None,
        };

        let formal_type_params = parsed
            .as_ref()
            .map(|p| p.formal_type_params.clone())
            .filter(|s| !s.is_empty());
        let super_signature = parsed
            .as_ref()
            .map(|p| p.super_signature.clone())
            .filter(|s| !s.is_empty());

        let mut interfaces = BTreeMap::new();
        for name in &self.interfaces {
            let sig = parsed
                .as_ref()
                .and_then(|p| p.interface_signatures.get(name))
                .cloned()
                .unwrap_or_default();
            interfaces.insert(name.clone(), sig);
        }

        Ok(ClassInfo {
            format_version: self.format_version,
            access: self.access,
            name: self.name,
            signature: self.signature,
            formal_type_params,
            supername: self.supername,
            super_signature,
            interfaces,
            methods: self.methods,
            fields: self.fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::access::AccessFlags;

    #[test]
    fn test_builder_collects_members() {
        let mut builder = ClassInfoBuilder::new(52, AccessFlags::PUBLIC, "com/example/Foo")
            .supername(Some("java/lang/Object".to_string()))
            .interfaces(vec!["java/io/Serializable".to_string()]);
        builder.add_method(MethodInfo::new(AccessFlags::PUBLIC, "run", "()V", None, None));
        builder.add_field(FieldInfo::new(AccessFlags::PRIVATE, "count", "I", None, None));

        let info = builder.build().unwrap();
        assert_eq!(info.name(), "com/example/Foo");
        assert_eq!(info.supername(), Some("java/lang/Object"));
        assert!(info.methods().contains_key("run()V"));
        assert!(info.fields().contains_key("count"));
        assert_eq!(info.interfaces().get("java/io/Serializable").unwrap(), "");
    }

    #[test]
    fn test_builder_routes_signature_parts() {
        let sig = "<T:Ljava/lang/Object;>Ljava/util/AbstractList<TT;>;Ljava/util/List<TT;>;";
        let builder = ClassInfoBuilder::new(52, AccessFlags::PUBLIC, "com/example/Bar")
            .signature(Some(sig.to_string()))
            .supername(Some("java/util/AbstractList".to_string()))
            .interfaces(vec!["java/util/List".to_string()]);

        let info = builder.build().unwrap();
        assert_eq!(info.formal_type_params(), Some("<T:Ljava/lang/Object;>"));
        assert_eq!(info.super_signature(), Some("Ljava/util/AbstractList<TT;>;"));
        assert_eq!(
            info.interfaces().get("java/util/List").unwrap(),
            "Ljava/util/List<TT;>;"
        );
    }

    #[test]
    fn test_duplicate_member_keys_keep_last() {
        let mut builder = ClassInfoBuilder::new(52, AccessFlags::PUBLIC, "com/example/Foo");
        builder.add_method(MethodInfo::new(AccessFlags::PUBLIC, "run", "()V", None, None));
        builder.add_method(MethodInfo::new(AccessFlags::PROTECTED, "run", "()V", None, None));
        let info = builder.build().unwrap();
        assert_eq!(info.methods().len(), 1);
        assert!(info.methods().get("run()V").unwrap().access().is_protected());
    }
}
