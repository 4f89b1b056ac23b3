// Mon Aug 03 2026 - Alex

use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Unexpected end of signature: {0}")]
    UnexpectedEnd(String),
    #[error("Unexpected character '{found}' at offset {offset} in signature: {text}")]
    UnexpectedChar { found: char, offset: usize, text: String },
}

/// Decoded parts of a generic class signature. All parts default to
/// empty when the class carries no signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSignature {
    /// Formal type parameter block, verbatim, including angle brackets.
    pub formal_type_params: String,
    /// Superclass type production, verbatim.
    pub super_signature: String,
    /// One entry per implemented-interface production, keyed by the
    /// first class-type name in that production. Nested class types
    /// inside the same production never re-key the entry.
    pub interface_signatures: BTreeMap<String, String>,
}

/// Walk the class-signature production of the generic-signature grammar:
/// an optional `<...>` formal-parameter block, the superclass type, then
/// one type production per implemented interface.
pub fn parse_class_signature(text: &str) -> Result<ParsedSignature, SignatureError> {
    let mut cursor = Cursor::new(text);
    let mut parsed = ParsedSignature::default();

    if cursor.peek() == Some(b'<') {
        let start = cursor.pos;
        cursor.skip_formal_params()?;
        parsed.formal_type_params = text[start..cursor.pos].to_string();
    }

    let start = cursor.pos;
    cursor.skip_type_signature()?;
    parsed.super_signature = text[start..cursor.pos].to_string();

    while !cursor.at_end() {
        let start = cursor.pos;
        cursor.skip_type_signature()?;
        let production = &text[start..cursor.pos];
        if let Some(key) = first_class_name(production) {
            parsed
                .interface_signatures
                .entry(key)
                .or_insert_with(|| production.to_string());
        }
    }

    Ok(parsed)
}

/// First class-type name appearing in a type production: the token
/// after the leading `L`, up to the first `;`, `<` or `.`.
fn first_class_name(production: &str) -> Option<String> {
    let bytes = production.as_bytes();
    let start = production.find('L')? + 1;
    let mut end = start;
    while end < bytes.len() && !matches!(bytes[end], b';' | b'<' | b'.') {
        end += 1;
    }
    Some(production[start..end].to_string())
}

struct Cursor<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, bytes: text.as_bytes(), pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) -> Result<u8, SignatureError> {
        let b = self
            .peek()
            .ok_or_else(|| SignatureError::UnexpectedEnd(self.text.to_string()))?;
        self.pos += 1;
        Ok(b)
    }

    fn unexpected(&self, found: u8) -> SignatureError {
        SignatureError::UnexpectedChar {
            found: found as char,
            offset: self.pos,
            text: self.text.to_string(),
        }
    }

    /// Skip a balanced `<...>` formal type parameter block.
    fn skip_formal_params(&mut self) -> Result<(), SignatureError> {
        let mut depth = 0usize;
        loop {
            match self.bump()? {
                b'<' => depth += 1,
                b'>' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
    }

    /// Skip one type signature: a primitive, an array, a type variable
    /// or a class type.
    fn skip_type_signature(&mut self) -> Result<(), SignatureError> {
        match self.bump()? {
            b'B' | b'C' | b'D' | b'F' | b'I' | b'J' | b'S' | b'Z' | b'V' => Ok(()),
            b'[' => self.skip_type_signature(),
            b'T' => {
                while self.bump()? != b';' {}
                Ok(())
            }
            b'L' => self.skip_class_type_body(),
            other => Err(self.unexpected(other)),
        }
    }

    /// Skip the remainder of a class type after its leading `L`: name
    /// segments, optional type arguments, inner-class suffixes, final `;`.
    fn skip_class_type_body(&mut self) -> Result<(), SignatureError> {
        loop {
            match self.bump()? {
                b';' => return Ok(()),
                b'<' => self.skip_type_args()?,
                _ => {}
            }
        }
    }

    /// Skip type arguments after the opening `<` has been consumed.
    fn skip_type_args(&mut self) -> Result<(), SignatureError> {
        loop {
            match self.peek() {
                Some(b'>') => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(b'*') => self.pos += 1,
                Some(b'+') | Some(b'-') => {
                    self.pos += 1;
                    self.skip_type_signature()?;
                }
                Some(_) => self.skip_type_signature()?,
                None => return Err(SignatureError::UnexpectedEnd(self.text.to_string())),
            }
        }
    }
}
