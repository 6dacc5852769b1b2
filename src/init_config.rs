// init_config.rs
// Handles loading and parsing the initial scenario from init_config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use ultraviolet::Vec3;

use crate::config::SimConfig;
use crate::elements::ElementTable;
use crate::error::{Error, Result};
use crate::simulation::Simulation;

pub const DEFAULT_PATH: &str = "init_config.toml";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InitConfig {
    /// Overrides for any `SimConfig` field; omitted fields keep their defaults.
    pub simulation: Option<SimConfig>,
    /// Element database in JSON form. Relative paths resolve against the scenario file.
    pub elements_file: Option<PathBuf>,
    #[serde(default)]
    pub atoms: Vec<AtomConfig>,
    /// Frames the headless driver runs.
    pub frames: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AtomConfig {
    pub element: ElementRef,
    pub position: [f32; 3],
}

/// An element given either by atomic number or by symbol.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ElementRef {
    Number(u32),
    Symbol(String),
}

impl ElementRef {
    pub fn resolve(&self, table: &ElementTable) -> Result<u32> {
        match self {
            ElementRef::Number(z) if table.has(*z) => Ok(*z),
            ElementRef::Number(z) => Err(Error::UnknownElement(format!("Z={}", z))),
            ElementRef::Symbol(s) => table
                .by_symbol(s)
                .map(|e| e.atomic_number)
                .ok_or_else(|| Error::UnknownElement(s.clone())),
        }
    }
}

impl InitConfig {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        if let (Some(file), Some(dir)) = (config.elements_file.as_mut(), path.parent()) {
            if file.is_relative() {
                *file = dir.join(&*file);
            }
        }
        Ok(config)
    }

    pub fn load_default() -> Result<Self> {
        Self::load_from_file(DEFAULT_PATH)
    }

    pub fn sim_config(&self) -> SimConfig {
        self.simulation.clone().unwrap_or_default()
    }

    /// The element table named by `elements_file`, or the builtin one.
    pub fn element_table(&self) -> Result<Arc<ElementTable>> {
        match &self.elements_file {
            Some(path) => Ok(Arc::new(ElementTable::load_json_file(path)?)),
            None => Ok(ElementTable::builtin()),
        }
    }

    /// Build a simulation and spawn every listed atom, in file order.
    ///
    /// All element references are checked before anything is spawned.
    pub fn build_simulation(&self) -> Result<Simulation> {
        let table = self.element_table()?;
        let resolved = self
            .atoms
            .iter()
            .map(|a| {
                let [x, y, z] = a.position;
                Ok((a.element.resolve(&table)?, Vec3::new(x, y, z)))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut sim = Simulation::with_elements(table, self.sim_config());
        for (z, pos) in resolved {
            sim.spawn_atom(z, pos);
        }
        log::info!("Scenario loaded: {} atoms, {} bonds", sim.atom_count(), sim.bond_count());
        Ok(sim)
    }
}
