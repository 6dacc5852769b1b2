// simulation/mod.rs
// Re-exports and module declarations for simulation submodules

pub mod simulation;
pub mod thermal;
pub use simulation::*;
