// Thu Aug 06 2026 - Alex

use crate::delta::{Delta, Difference};
use crate::model::{MemberInfo, MemberKind};
use std::io::{self, Write};

/// Plain-text renderer for a [`Delta`]. Differences come out sorted,
/// grouped under one header per owning class.
pub struct TextDumper<W: Write> {
    out: W,
}

impl TextDumper<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TextDumper<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn dump(&mut self, delta: &Delta) -> io::Result<()> {
        let mut current_class = "";
        for difference in delta.differences() {
            if difference.class_name() != current_class {
                current_class = difference.class_name();
                writeln!(self.out, "Class {}", current_class)?;
            }
            writeln!(self.out, "  {}", describe(difference))?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn describe(difference: &Difference) -> String {
    let mut line = format!("{} {}", difference.action(), difference.kind());
    if difference.kind() != MemberKind::Class {
        line.push(' ');
        line.push_str(difference.info().name());
    }
    if let Some(modified) = difference.modified_info() {
        let details = access_details(difference.info(), modified);
        if !details.is_empty() {
            line.push(' ');
            line.push_str(&details);
        }
    }
    line
}

/// Human-readable summary of the modifiers that flipped between the two
/// sides of a change, as `added: ...` and `removed: ...` lists.
pub fn access_details(previous: &MemberInfo, current: &MemberInfo) -> String {
    let mut added = Vec::new();
    let mut removed = Vec::new();

    let mut note = |label: &'static str, before: bool, after: bool| {
        if before != after {
            if before {
                removed.push(label);
            } else {
                added.push(label);
            }
        }
    };

    let (p, c) = (previous.access(), current.access());
    let kind = previous.kind();
    note("abstract", p.is_abstract(), c.is_abstract());
    note("annotation", p.is_annotation(), c.is_annotation());
    note("bridge", p.is_bridge(), c.is_bridge());
    note("deprecated", p.is_deprecated(), c.is_deprecated());
    note("enum", p.is_enum(), c.is_enum());
    note("final", p.is_final(), c.is_final());
    note("interface", p.is_interface(), c.is_interface());
    note("native", p.is_native(), c.is_native());
    note("package-private", p.is_package_private(), c.is_package_private());
    note("private", p.is_private(), c.is_private());
    note("protected", p.is_protected(), c.is_protected());
    note("public", p.is_public(), c.is_public());
    note("static", p.is_static(), c.is_static());
    note("strict", p.is_strict(), c.is_strict());
    note("super", p.is_super(), c.is_super());
    note("synchronized", p.is_synchronized(), c.is_synchronized());
    note("synthetic", p.is_synthetic(), c.is_synthetic());
    note("transient", p.is_transient(kind), c.is_transient(kind));
    note("varargs", p.is_varargs(kind), c.is_varargs(kind));
    note("volatile", p.is_volatile(), c.is_volatile());

    let mut details = String::new();
    if !added.is_empty() {
        details.push_str("added: ");
        details.push_str(&added.join(" "));
    }
    if !removed.is_empty() {
        if !details.is_empty() {
            details.push(' ');
        }
        details.push_str("removed: ");
        details.push_str(&removed.join(" "));
    }
    details
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccessFlags, FieldInfo, MemberInfo};
    use std::collections::BTreeSet;

    fn field(access: AccessFlags) -> MemberInfo {
        MemberInfo::Field(FieldInfo::new(access, "limit", "I", None, None))
    }

    #[test]
    fn test_access_details_lists_flipped_modifiers() {
        let details = access_details(
            &field(AccessFlags::PUBLIC),
            &field(AccessFlags::PUBLIC | AccessFlags::FINAL | AccessFlags::DEPRECATED),
        );
        assert_eq!(details, "added: deprecated final");
    }

    #[test]
    fn test_access_details_reports_visibility_swap() {
        let details = access_details(&field(AccessFlags::PUBLIC), &field(AccessFlags::PROTECTED));
        assert_eq!(details, "added: protected removed: public");
    }

    #[test]
    fn test_dump_groups_by_class() {
        let mut differences = BTreeSet::new();
        differences.insert(Difference::Add {
            class_name: "com.example.Foo".to_string(),
            info: field(AccessFlags::PUBLIC),
        });
        differences.insert(Difference::Change {
            class_name: "com.example.Foo".to_string(),
            info: field(AccessFlags::PUBLIC),
            modified: field(AccessFlags::PUBLIC | AccessFlags::FINAL),
        });
        let delta = Delta::new(differences);

        let mut dumper = TextDumper::new(Vec::new());
        dumper.dump(&delta).unwrap();
        let text = String::from_utf8(dumper.into_inner()).unwrap();
        assert_eq!(
            text,
            "Class com.example.Foo\n  Added Field limit\n  Changed Field limit added: final\n"
        );
    }
}
