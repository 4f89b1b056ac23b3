// Wed Aug 05 2026 - Alex

pub mod accumulator;
pub mod compatibility;
pub mod difference;
pub mod filter;

pub use accumulator::DeltaAccumulator;
pub use compatibility::{infer_next_version, CompatibilityType, Delta};
pub use difference::Difference;
pub use filter::{compile_pattern, ClassFilter};
