// io.rs
// Snapshot save/load: gzip-compressed bincode, with a JSON export for inspection

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::atom::Atom;
use crate::config::SimConfig;
use crate::error::Result;
use crate::interaction::{InteractionEngine, ReactionEvent};
use crate::profile_scope;
use crate::simulation::Simulation;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Everything needed to resume a run. Bonds and electrons travel inside the atoms;
/// molecules and forces are recomputed on restore.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub atoms: Vec<Atom>,
    pub config: SimConfig,
    pub sim_time: f32,
    #[serde(default)]
    pub step_count: u64,
    #[serde(default)]
    pub reaction_log: Vec<ReactionEvent>,
}

impl Snapshot {
    pub fn from_simulation(sim: &Simulation) -> Self {
        Self {
            atoms: sim.atoms.clone(),
            config: sim.config.clone(),
            sim_time: sim.sim_time,
            step_count: sim.step_count,
            reaction_log: sim.reaction_log().to_vec(),
        }
    }

    /// Replace the simulation's population, configuration and clock with this snapshot.
    /// The element table the simulation already holds is kept.
    pub fn apply_to(self, sim: &mut Simulation) {
        sim.config = self.config;
        sim.engine = InteractionEngine::new(&sim.config);
        sim.restore(self.atoms, self.sim_time, self.reaction_log);
        sim.step_count = self.step_count;
    }
}

/// Write `sim` to `path` as gzip-compressed bincode.
///
/// The data goes to a sibling temporary file first and is renamed into place.
pub fn save_state<P: AsRef<Path>>(path: P, sim: &Simulation) -> Result<()> {
    profile_scope!("save_state");
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let snapshot = Snapshot::from_simulation(sim);
    let tmp_path = path.with_extension({
        let mut os = path.extension().map(|e| e.to_os_string()).unwrap_or_default();
        os.push(".tmp");
        os
    });
    {
        let file = std::fs::File::create(&tmp_path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::fast());
        bincode::serialize_into(&mut encoder, &snapshot)?;
        let mut writer = encoder.finish()?;
        writer.flush()?;
    }
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Write `sim` as pretty-printed JSON (uncompressed).
pub fn export_json<P: AsRef<Path>>(path: P, sim: &Simulation) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &Snapshot::from_simulation(sim))?;
    writer.flush()?;
    Ok(())
}

/// Read a snapshot written by [`save_state`] or [`export_json`], compressed or not.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<Snapshot> {
    profile_scope!("load_state");
    let data = std::fs::read(path.as_ref())?;
    match maybe_decompress_gzip(&data)? {
        Some(decoded) => parse_snapshot_bytes(&decoded),
        None => parse_snapshot_bytes(&data),
    }
}

fn maybe_decompress_gzip(data: &[u8]) -> Result<Option<Vec<u8>>> {
    if !data.starts_with(&GZIP_MAGIC) {
        return Ok(None);
    }
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(Some(out))
}

fn parse_snapshot_bytes(bytes: &[u8]) -> Result<Snapshot> {
    if bytes.first() == Some(&b'{') {
        if let Ok(snapshot) = serde_json::from_slice::<Snapshot>(bytes) {
            return Ok(snapshot);
        }
    }
    Ok(bincode::deserialize(bytes)?)
}
