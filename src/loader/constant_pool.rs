// Thu Aug 06 2026 - Alex

use crate::loader::error::LoadError;
use crate::loader::reader::ByteReader;
use crate::model::FieldValue;

const TAG_UTF8: u8 = 1;
const TAG_INTEGER: u8 = 3;
const TAG_FLOAT: u8 = 4;
const TAG_LONG: u8 = 5;
const TAG_DOUBLE: u8 = 6;
const TAG_CLASS: u8 = 7;
const TAG_STRING: u8 = 8;
const TAG_FIELDREF: u8 = 9;
const TAG_METHODREF: u8 = 10;
const TAG_INTERFACE_METHODREF: u8 = 11;
const TAG_NAME_AND_TYPE: u8 = 12;
const TAG_METHOD_HANDLE: u8 = 15;
const TAG_METHOD_TYPE: u8 = 16;
const TAG_DYNAMIC: u8 = 17;
const TAG_INVOKE_DYNAMIC: u8 = 18;
const TAG_MODULE: u8 = 19;
const TAG_PACKAGE: u8 = 20;

#[derive(Debug, Clone)]
pub enum Constant {
    Utf8(String),
    Integer(i32),
    Float(f32),
    Long(i64),
    Double(f64),
    Class(u16),
    Str(u16),
    // References and dynamics only occupy their slots; the structural
    // model never looks inside them.
    Opaque,
    /// Second slot of a long/double entry.
    Reserved,
}

/// The constant pool of one class file, 1-based as in the format.
#[derive(Debug)]
pub struct ConstantPool {
    entries: Vec<Constant>,
}

impl ConstantPool {
    pub fn parse(reader: &mut ByteReader<'_>) -> Result<Self, LoadError> {
        let count = reader.read_u16()?;
        let mut entries = vec![Constant::Reserved];

        let mut index = 1;
        while index < count {
            let tag = reader.read_u8()?;
            let constant = match tag {
                TAG_UTF8 => {
                    let length = reader.read_u16()? as usize;
                    let bytes = reader.read_bytes(length)?;
                    Constant::Utf8(decode_modified_utf8(bytes)?)
                }
                TAG_INTEGER => Constant::Integer(reader.read_u32()? as i32),
                TAG_FLOAT => Constant::Float(f32::from_bits(reader.read_u32()?)),
                TAG_LONG => Constant::Long(reader.read_u64()? as i64),
                TAG_DOUBLE => Constant::Double(f64::from_bits(reader.read_u64()?)),
                TAG_CLASS => Constant::Class(reader.read_u16()?),
                TAG_STRING => Constant::Str(reader.read_u16()?),
                TAG_FIELDREF | TAG_METHODREF | TAG_INTERFACE_METHODREF | TAG_NAME_AND_TYPE
                | TAG_DYNAMIC | TAG_INVOKE_DYNAMIC => {
                    reader.skip(4)?;
                    Constant::Opaque
                }
                TAG_METHOD_HANDLE => {
                    reader.skip(3)?;
                    Constant::Opaque
                }
                TAG_METHOD_TYPE | TAG_MODULE | TAG_PACKAGE => {
                    reader.skip(2)?;
                    Constant::Opaque
                }
                other => {
                    return Err(LoadError::Malformed(format!(
                        "unknown constant pool tag {} at index {}",
                        other, index
                    )))
                }
            };

            let wide = matches!(constant, Constant::Long(_) | Constant::Double(_));
            entries.push(constant);
            if wide {
                entries.push(Constant::Reserved);
                index += 1;
            }
            index += 1;
        }

        Ok(Self { entries })
    }

    fn get(&self, index: u16) -> Result<&Constant, LoadError> {
        self.entries
            .get(index as usize)
            .ok_or(LoadError::BadConstantIndex(index))
    }

    pub fn utf8(&self, index: u16) -> Result<&str, LoadError> {
        match self.get(index)? {
            Constant::Utf8(text) => Ok(text),
            _ => Err(LoadError::BadConstantIndex(index)),
        }
    }

    /// Internal name referenced by a Class constant.
    pub fn class_name(&self, index: u16) -> Result<&str, LoadError> {
        match self.get(index)? {
            Constant::Class(name_index) => self.utf8(*name_index),
            _ => Err(LoadError::BadConstantIndex(index)),
        }
    }

    /// Class name for an index that may be zero (no superclass).
    pub fn optional_class_name(&self, index: u16) -> Result<Option<&str>, LoadError> {
        if index == 0 {
            Ok(None)
        } else {
            self.class_name(index).map(Some)
        }
    }

    /// The value behind a ConstantValue attribute.
    pub fn field_value(&self, index: u16) -> Result<FieldValue, LoadError> {
        match self.get(index)? {
            Constant::Integer(v) => Ok(FieldValue::Int(*v)),
            Constant::Float(v) => Ok(FieldValue::Float(*v)),
            Constant::Long(v) => Ok(FieldValue::Long(*v)),
            Constant::Double(v) => Ok(FieldValue::Double(*v)),
            Constant::Str(utf8_index) => Ok(FieldValue::Str(self.utf8(*utf8_index)?.to_string())),
            _ => Err(LoadError::BadConstantIndex(index)),
        }
    }
}

/// Decode the modified UTF-8 used by the class-file format: no NUL
/// bytes, supplementary characters stored as surrogate pairs of 3-byte
/// sequences.
fn decode_modified_utf8(bytes: &[u8]) -> Result<String, LoadError> {
    let mut units: Vec<u16> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let a = bytes[i];
        if a & 0x80 == 0 {
            units.push(a as u16);
            i += 1;
        } else if a & 0xE0 == 0xC0 {
            let b = *bytes
                .get(i + 1)
                .ok_or_else(|| LoadError::Malformed("truncated utf8 sequence".to_string()))?;
            units.push((((a & 0x1F) as u16) << 6) | (b & 0x3F) as u16);
            i += 2;
        } else if a & 0xF0 == 0xE0 {
            let b = *bytes
                .get(i + 1)
                .ok_or_else(|| LoadError::Malformed("truncated utf8 sequence".to_string()))?;
            let c = *bytes
                .get(i + 2)
                .ok_or_else(|| LoadError::Malformed("truncated utf8 sequence".to_string()))?;
            units.push((((a & 0x0F) as u16) << 12) | (((b & 0x3F) as u16) << 6) | (c & 0x3F) as u16);
            i += 3;
        } else {
            return Err(LoadError::Malformed(format!(
                "invalid utf8 lead byte 0x{:02X}",
                a
            )));
        }
    }
    String::from_utf16(&units).map_err(|_| LoadError::Malformed("invalid utf16 data".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_bytes(entries: &[&[u8]]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&((entries.len() + 1) as u16).to_be_bytes());
        for entry in entries {
            data.extend_from_slice(entry);
        }
        data
    }

    fn utf8_entry(text: &str) -> Vec<u8> {
        let mut entry = vec![TAG_UTF8];
        entry.extend_from_slice(&(text.len() as u16).to_be_bytes());
        entry.extend_from_slice(text.as_bytes());
        entry
    }

    #[test]
    fn test_utf8_and_class_lookup() {
        let utf8 = utf8_entry("java/lang/Object");
        let class = vec![TAG_CLASS, 0x00, 0x01];
        let data = pool_bytes(&[&utf8, &class]);
        let mut reader = ByteReader::new(&data);
        let pool = ConstantPool::parse(&mut reader).unwrap();
        assert_eq!(pool.utf8(1).unwrap(), "java/lang/Object");
        assert_eq!(pool.class_name(2).unwrap(), "java/lang/Object");
        assert_eq!(pool.optional_class_name(0).unwrap(), None);
    }

    #[test]
    fn test_long_takes_two_slots() {
        let long = {
            let mut e = vec![TAG_LONG];
            e.extend_from_slice(&42u64.to_be_bytes());
            e
        };
        let utf8 = utf8_entry("after");
        // count is entries + reserved slot + 1
        let mut data = Vec::new();
        data.extend_from_slice(&4u16.to_be_bytes());
        data.extend_from_slice(&long);
        data.extend_from_slice(&utf8);
        let mut reader = ByteReader::new(&data);
        let pool = ConstantPool::parse(&mut reader).unwrap();
        assert!(matches!(pool.field_value(1).unwrap(), FieldValue::Long(42)));
        assert_eq!(pool.utf8(3).unwrap(), "after");
    }

    #[test]
    fn test_bad_index_is_rejected() {
        let data = pool_bytes(&[]);
        let mut reader = ByteReader::new(&data);
        let pool = ConstantPool::parse(&mut reader).unwrap();
        assert!(pool.utf8(1).is_err());
    }

    #[test]
    fn test_unknown_tag_is_malformed() {
        let data = pool_bytes(&[&[0xFF]]);
        let mut reader = ByteReader::new(&data);
        assert!(matches!(
            ConstantPool::parse(&mut reader),
            Err(LoadError::Malformed(_))
        ));
    }
}
