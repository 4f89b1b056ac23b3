// Mon Aug 03 2026 - Alex

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Declared modifiers of a class, method or field, using the bit
    /// values stored in the class-file format. DEPRECATED is a pseudo
    /// flag synthesized from the Deprecated attribute by the loader.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct AccessFlags: u32 {
        const PUBLIC       = 0x0001;
        const PRIVATE      = 0x0002;
        const PROTECTED    = 0x0004;
        const STATIC       = 0x0008;
        const FINAL        = 0x0010;
        const SUPER        = 0x0020;
        const SYNCHRONIZED = 0x0020;
        const VOLATILE     = 0x0040;
        const BRIDGE       = 0x0040;
        // One bit, two meanings: transient on fields, varargs on methods.
        const TRANSIENT    = 0x0080;
        const VARARGS      = 0x0080;
        const NATIVE       = 0x0100;
        const INTERFACE    = 0x0200;
        const ABSTRACT     = 0x0400;
        const STRICT       = 0x0800;
        const SYNTHETIC    = 0x1000;
        const ANNOTATION   = 0x2000;
        const ENUM         = 0x4000;
        const DEPRECATED   = 0x2_0000;
    }
}

/// Which kind of member owns a set of access flags. Shared-bit flags
/// (transient/varargs) are interpreted against this tag, never against
/// the bit value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MemberKind {
    Class,
    Method,
    Field,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Class => write!(f, "Class"),
            MemberKind::Method => write!(f, "Method"),
            MemberKind::Field => write!(f, "Field"),
        }
    }
}

impl AccessFlags {
    /// Build from a raw class-file value, keeping unknown bits.
    pub fn from_raw(raw: u32) -> Self {
        AccessFlags::from_bits_retain(raw)
    }

    pub fn raw(&self) -> u32 {
        self.bits()
    }

    pub fn is_public(&self) -> bool {
        self.contains(AccessFlags::PUBLIC)
    }

    pub fn is_protected(&self) -> bool {
        self.contains(AccessFlags::PROTECTED)
    }

    pub fn is_private(&self) -> bool {
        self.contains(AccessFlags::PRIVATE)
    }

    /// Package-private is the absence of the three declared visibilities.
    pub fn is_package_private(&self) -> bool {
        !self.intersects(AccessFlags::PUBLIC | AccessFlags::PROTECTED | AccessFlags::PRIVATE)
    }

    pub fn is_abstract(&self) -> bool {
        self.contains(AccessFlags::ABSTRACT)
    }

    pub fn is_annotation(&self) -> bool {
        self.contains(AccessFlags::ANNOTATION)
    }

    pub fn is_bridge(&self) -> bool {
        self.contains(AccessFlags::BRIDGE)
    }

    pub fn is_deprecated(&self) -> bool {
        self.contains(AccessFlags::DEPRECATED)
    }

    pub fn is_enum(&self) -> bool {
        self.contains(AccessFlags::ENUM)
    }

    pub fn is_final(&self) -> bool {
        self.contains(AccessFlags::FINAL)
    }

    pub fn is_interface(&self) -> bool {
        self.contains(AccessFlags::INTERFACE)
    }

    pub fn is_native(&self) -> bool {
        self.contains(AccessFlags::NATIVE)
    }

    pub fn is_static(&self) -> bool {
        self.contains(AccessFlags::STATIC)
    }

    pub fn is_strict(&self) -> bool {
        self.contains(AccessFlags::STRICT)
    }

    pub fn is_super(&self) -> bool {
        self.contains(AccessFlags::SUPER)
    }

    pub fn is_synchronized(&self) -> bool {
        self.contains(AccessFlags::SYNCHRONIZED)
    }

    pub fn is_synthetic(&self) -> bool {
        self.contains(AccessFlags::SYNTHETIC)
    }

    pub fn is_volatile(&self) -> bool {
        self.contains(AccessFlags::VOLATILE)
    }

    /// Transient only means transient on classes and fields.
    pub fn is_transient(&self, kind: MemberKind) -> bool {
        kind != MemberKind::Method && self.contains(AccessFlags::TRANSIENT)
    }

    /// Varargs only means varargs on methods.
    pub fn is_varargs(&self, kind: MemberKind) -> bool {
        kind == MemberKind::Method && self.contains(AccessFlags::VARARGS)
    }

    /// The single visibility level that holds for these flags.
    pub fn access_level(&self) -> &'static str {
        if self.is_public() {
            "public"
        } else if self.is_protected() {
            "protected"
        } else if self.is_private() {
            "private"
        } else {
            "package"
        }
    }

    /// Copy of these flags with the deprecated pseudo flag forced on.
    pub fn with_deprecated(self) -> Self {
        self | AccessFlags::DEPRECATED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_is_exclusive() {
        let public = AccessFlags::PUBLIC | AccessFlags::FINAL;
        assert!(public.is_public());
        assert!(!public.is_package_private());
        assert_eq!(public.access_level(), "public");

        let package = AccessFlags::STATIC;
        assert!(package.is_package_private());
        assert_eq!(package.access_level(), "package");
    }

    #[test]
    fn test_shared_bit_depends_on_owner_kind() {
        let flags = AccessFlags::from_raw(0x0080);
        assert!(flags.is_transient(MemberKind::Field));
        assert!(flags.is_transient(MemberKind::Class));
        assert!(!flags.is_transient(MemberKind::Method));
        assert!(flags.is_varargs(MemberKind::Method));
        assert!(!flags.is_varargs(MemberKind::Field));
    }

    #[test]
    fn test_unknown_bits_are_kept() {
        let flags = AccessFlags::from_raw(0x8001);
        assert!(flags.is_public());
        assert_eq!(flags.raw(), 0x8001);
    }

    #[test]
    fn test_with_deprecated() {
        let flags = AccessFlags::PUBLIC;
        assert!(!flags.is_deprecated());
        assert!(flags.with_deprecated().is_deprecated());
        assert!(flags.with_deprecated().is_public());
    }
}
