// Thu Aug 06 2026 - Alex

use crate::loader::constant_pool::ConstantPool;
use crate::loader::error::LoadError;
use crate::loader::reader::ByteReader;
use crate::model::{AccessFlags, ClassInfo, ClassInfoBuilder, FieldInfo, FieldValue, MethodInfo};

const MAGIC: u32 = 0xCAFE_BABE;

/// Parse the bytes of one compiled class into a [`ClassInfo`].
///
/// Only the structural surface is decoded: versions, access flags,
/// names, superclass and interfaces, field/method declarations and the
/// Signature / Exceptions / ConstantValue / Deprecated / Synthetic
/// attributes. Code and debug attributes are skipped by length.
pub fn parse_class(data: &[u8]) -> Result<ClassInfo, LoadError> {
    let mut reader = ByteReader::new(data);

    if reader.read_u32()? != MAGIC {
        return Err(LoadError::BadMagic);
    }
    let minor = reader.read_u16()? as u32;
    let major = reader.read_u16()? as u32;
    // Single version word, minor in the high half, as loaders
    // conventionally report it.
    let format_version = (minor << 16) | major;

    let pool = ConstantPool::parse(&mut reader)?;

    let mut access = AccessFlags::from_raw(reader.read_u16()? as u32);
    let name = pool.class_name(reader.read_u16()?)?.to_string();
    let supername = pool
        .optional_class_name(reader.read_u16()?)?
        .map(|s| s.to_string());

    let interface_count = reader.read_u16()?;
    let mut interfaces = Vec::with_capacity(interface_count as usize);
    for _ in 0..interface_count {
        interfaces.push(pool.class_name(reader.read_u16()?)?.to_string());
    }

    let mut fields = Vec::new();
    for _ in 0..reader.read_u16()? {
        fields.push(parse_field(&mut reader, &pool)?);
    }

    let mut methods = Vec::new();
    for _ in 0..reader.read_u16()? {
        methods.push(parse_method(&mut reader, &pool)?);
    }

    let mut signature = None;
    for _ in 0..reader.read_u16()? {
        match parse_attribute(&mut reader, &pool)? {
            Attribute::Signature(text) => signature = Some(text),
            Attribute::Deprecated => access = access.with_deprecated(),
            Attribute::Synthetic => access |= AccessFlags::SYNTHETIC,
            _ => {}
        }
    }

    let mut builder = ClassInfoBuilder::new(format_version, access, &name)
        .signature(signature)
        .supername(supername)
        .interfaces(interfaces);
    for field in fields {
        builder.add_field(field);
    }
    for method in methods {
        builder.add_method(method);
    }
    log::debug!("loaded class {}", name);
    builder.build().map_err(LoadError::from)
}

fn parse_field(reader: &mut ByteReader<'_>, pool: &ConstantPool) -> Result<FieldInfo, LoadError> {
    let mut access = AccessFlags::from_raw(reader.read_u16()? as u32);
    let name = pool.utf8(reader.read_u16()?)?.to_string();
    let descriptor = pool.utf8(reader.read_u16()?)?.to_string();

    let mut signature = None;
    let mut value: Option<FieldValue> = None;
    for _ in 0..reader.read_u16()? {
        match parse_attribute(reader, pool)? {
            Attribute::Signature(text) => signature = Some(text),
            Attribute::ConstantValue(v) => value = Some(v),
            Attribute::Deprecated => access = access.with_deprecated(),
            Attribute::Synthetic => access |= AccessFlags::SYNTHETIC,
            _ => {}
        }
    }

    Ok(FieldInfo::new(access, &name, &descriptor, signature, value))
}

fn parse_method(reader: &mut ByteReader<'_>, pool: &ConstantPool) -> Result<MethodInfo, LoadError> {
    let mut access = AccessFlags::from_raw(reader.read_u16()? as u32);
    let name = pool.utf8(reader.read_u16()?)?.to_string();
    let descriptor = pool.utf8(reader.read_u16()?)?.to_string();

    let mut signature = None;
    let mut exceptions = None;
    for _ in 0..reader.read_u16()? {
        match parse_attribute(reader, pool)? {
            Attribute::Signature(text) => signature = Some(text),
            Attribute::Exceptions(list) => exceptions = Some(list),
            Attribute::Deprecated => access = access.with_deprecated(),
            Attribute::Synthetic => access |= AccessFlags::SYNTHETIC,
            _ => {}
        }
    }

    Ok(MethodInfo::new(access, &name, &descriptor, signature, exceptions))
}

enum Attribute {
    Signature(String),
    ConstantValue(FieldValue),
    Exceptions(Vec<String>),
    Deprecated,
    Synthetic,
    Skipped,
}

fn parse_attribute(
    reader: &mut ByteReader<'_>,
    pool: &ConstantPool,
) -> Result<Attribute, LoadError> {
    let name = pool.utf8(reader.read_u16()?)?;
    let length = reader.read_u32()? as usize;

    match name {
        "Signature" if length == 2 => {
            let index = reader.read_u16()?;
            Ok(Attribute::Signature(pool.utf8(index)?.to_string()))
        }
        "ConstantValue" if length == 2 => {
            let index = reader.read_u16()?;
            Ok(Attribute::ConstantValue(pool.field_value(index)?))
        }
        "Exceptions" => {
            let count = reader.read_u16()?;
            if length != 2 + 2 * count as usize {
                return Err(LoadError::Malformed(
                    "Exceptions attribute length mismatch".to_string(),
                ));
            }
            let mut list = Vec::with_capacity(count as usize);
            for _ in 0..count {
                list.push(pool.class_name(reader.read_u16()?)?.to_string());
            }
            Ok(Attribute::Exceptions(list))
        }
        "Deprecated" if length == 0 => Ok(Attribute::Deprecated),
        "Synthetic" if length == 0 => Ok(Attribute::Synthetic),
        _ => {
            reader.skip(length)?;
            Ok(Attribute::Skipped)
        }
    }
}
