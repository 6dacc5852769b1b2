//! Emergent molecular chemistry: atoms with Aufbau electron shells, Morse /
//! Coulomb / Lennard-Jones / VSEPR forces, energy-driven ionic and covalent
//! bonding, and molecules recovered as connected components of the bond graph.

pub mod atom;
pub mod cell_list;
pub mod commands;
pub mod config;
pub mod elements;
pub mod error;
pub mod init_config;
pub mod interaction;
pub mod io;
pub mod molecule;
pub mod profiler;
pub mod quantum;
pub mod render;
pub mod simulation;
pub mod units;

pub use error::{Error, Result};
pub use simulation::Simulation;

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
