// Mon Aug 03 2026 - Alex

pub mod parser;

pub use parser::{parse_class_signature, ParsedSignature, SignatureError};
