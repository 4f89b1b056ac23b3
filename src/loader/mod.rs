// Thu Aug 06 2026 - Alex

pub mod archive;
pub mod classfile;
pub mod constant_pool;
pub mod error;
pub mod reader;

pub use archive::load_classes;
pub use classfile::parse_class;
pub use constant_pool::{Constant, ConstantPool};
pub use error::LoadError;
pub use reader::ByteReader;
