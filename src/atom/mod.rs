// atom/mod.rs
// Re-exports for the atom module

mod types;
pub mod bond;
pub mod electron;

pub use bond::{Bond, BondParams, BondType};
pub use electron::{Electron, QuantumNumbers};
pub use types::*;
