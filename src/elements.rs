//! Periodic table records and the read-only registry the core looks them up in.
//!
//! The registry is loaded once and shared by `Arc`; atoms only carry their
//! atomic number and borrow records from here. Unknown numbers resolve to a
//! zero-valued sentinel so a bad spawn request yields an inert particle.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::units;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
    #[default]
    Unknown,
}

impl ElementCategory {
    /// Parse the free-form category tags found in element databases
    /// ("noble_gas", "noble gas", "Noble Gas", ...).
    pub fn from_tag(tag: &str) -> Self {
        let norm: String = tag
            .trim()
            .to_ascii_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();
        match norm.as_str() {
            "alkali_metal" => ElementCategory::AlkaliMetal,
            "alkaline_earth_metal" => ElementCategory::AlkalineEarthMetal,
            "transition_metal" => ElementCategory::TransitionMetal,
            "post_transition_metal" => ElementCategory::PostTransitionMetal,
            "metalloid" => ElementCategory::Metalloid,
            "nonmetal" | "diatomic_nonmetal" | "polyatomic_nonmetal" | "reactive_nonmetal" => {
                ElementCategory::Nonmetal
            }
            "halogen" => ElementCategory::Halogen,
            "noble_gas" => ElementCategory::NobleGas,
            "lanthanide" => ElementCategory::Lanthanide,
            "actinide" => ElementCategory::Actinide,
            _ => ElementCategory::Unknown,
        }
    }
}

/// Static properties of one element. Energies in eV, radii in pm.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct ElementData {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    pub atomic_mass: f32,
    pub electronegativity: f32,
    pub ionization_energy: f32,
    pub electron_affinity: f32,
    pub atomic_radius: f32,
    pub covalent_radius: f32,
    pub vdw_radius: f32,
    pub valence_electrons: u32,
    pub period: u32,
    pub group: u32,
    pub category: ElementCategory,
    pub color: [u8; 3],
}

impl ElementData {
    /// True for the zero record returned on failed lookups.
    pub fn is_sentinel(&self) -> bool {
        self.atomic_number == 0
    }

    pub fn is_noble_gas(&self) -> bool {
        self.category == ElementCategory::NobleGas
    }

    pub fn covalent_radius_a(&self) -> f32 {
        units::pm_to_angstrom(self.covalent_radius)
    }

    pub fn vdw_radius_a(&self) -> f32 {
        units::pm_to_angstrom(self.vdw_radius)
    }

    pub fn atomic_radius_a(&self) -> f32 {
        units::pm_to_angstrom(self.atomic_radius)
    }

    /// Electrons the valence shell holds when full: 2 in period 1, 8 otherwise.
    pub fn shell_capacity(&self) -> u32 {
        if self.period <= 1 {
            2
        } else {
            8
        }
    }

    /// Unpaired valence electrons of the neutral atom, i.e. its bonding capacity.
    pub fn bonding_capacity(&self) -> u32 {
        let v = self.valence_electrons.min(self.shell_capacity());
        v.min(self.shell_capacity() - v)
    }

    pub fn color_f32(&self) -> [f32; 3] {
        [
            self.color[0] as f32 / 255.0,
            self.color[1] as f32 / 255.0,
            self.color[2] as f32 / 255.0,
        ]
    }
}

/// One record as it appears in the JSON element database. Any field may be
/// missing or null.
#[derive(Debug, Deserialize)]
struct ElementRecord {
    atomic_number: Option<u32>,
    symbol: Option<String>,
    name: Option<String>,
    atomic_mass: Option<f32>,
    electronegativity: Option<f32>,
    #[serde(rename = "ionization_energy_eV")]
    ionization_energy: Option<f32>,
    #[serde(rename = "electron_affinity_eV")]
    electron_affinity: Option<f32>,
    atomic_radius_pm: Option<f32>,
    covalent_radius_pm: Option<f32>,
    vdw_radius_pm: Option<f32>,
    valence_electrons: Option<u32>,
    period: Option<u32>,
    group: Option<u32>,
    category: Option<String>,
    color_rgb: Option<[u8; 3]>,
}

impl From<ElementRecord> for ElementData {
    fn from(r: ElementRecord) -> Self {
        ElementData {
            atomic_number: r.atomic_number.unwrap_or(0),
            symbol: r.symbol.unwrap_or_else(|| "?".to_string()),
            name: r.name.unwrap_or_else(|| "Unknown".to_string()),
            atomic_mass: r.atomic_mass.unwrap_or(1.0),
            electronegativity: r.electronegativity.unwrap_or(0.0),
            ionization_energy: r.ionization_energy.unwrap_or(0.0),
            electron_affinity: r.electron_affinity.unwrap_or(0.0),
            atomic_radius: r.atomic_radius_pm.unwrap_or(100.0),
            covalent_radius: r.covalent_radius_pm.unwrap_or(100.0),
            vdw_radius: r.vdw_radius_pm.unwrap_or(150.0),
            valence_electrons: r.valence_electrons.unwrap_or(0),
            period: r.period.unwrap_or(0),
            group: r.group.unwrap_or(0),
            category: r
                .category
                .as_deref()
                .map(ElementCategory::from_tag)
                .unwrap_or_default(),
            color: r.color_rgb.unwrap_or([255, 255, 255]),
        }
    }
}

/// Lookup table keyed by atomic number. Never mutated after construction.
#[derive(Debug, Default)]
pub struct ElementTable {
    elements: HashMap<u32, ElementData>,
    sentinel: ElementData,
}

impl ElementTable {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ElementData>,
    {
        let mut elements = HashMap::new();
        for e in records {
            if e.atomic_number == 0 {
                continue;
            }
            elements.insert(e.atomic_number, e);
        }
        Self {
            elements,
            sentinel: ElementData::default(),
        }
    }

    /// Parse an element database: a JSON object whose values are element records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, ElementRecord> = serde_json::from_str(json)?;
        let table = Self::from_records(raw.into_values().map(ElementData::from));
        log::info!("Loaded {} elements", table.len());
        Ok(table)
    }

    pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Shared handle to the compiled-in table.
    pub fn builtin() -> Arc<ElementTable> {
        Arc::clone(&BUILTIN_ELEMENTS)
    }

    /// Record for `atomic_number`, or the zero sentinel when absent.
    pub fn get(&self, atomic_number: u32) -> &ElementData {
        self.elements.get(&atomic_number).unwrap_or(&self.sentinel)
    }

    pub fn has(&self, atomic_number: u32) -> bool {
        self.elements.contains_key(&atomic_number)
    }

    /// Case-insensitive symbol lookup.
    pub fn by_symbol(&self, symbol: &str) -> Option<&ElementData> {
        self.elements
            .values()
            .find(|e| e.symbol.eq_ignore_ascii_case(symbol.trim()))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn atomic_numbers(&self) -> Vec<u32> {
        let mut zs: Vec<u32> = self.elements.keys().copied().collect();
        zs.sort_unstable();
        zs
    }
}

struct Row(
    u32,
    &'static str,
    &'static str,
    f32, // mass
    f32, // electronegativity
    f32, // ionization energy
    f32, // electron affinity
    f32, // atomic radius
    f32, // covalent radius
    f32, // vdw radius
    u32, // valence
    u32, // period
    u32, // group
    ElementCategory,
    [u8; 3],
);

use ElementCategory::*;

#[rustfmt::skip]
const BUILTIN_DATA: &[Row] = &[
    Row(1,  "H",  "Hydrogen",    1.008,   2.20, 13.598, 0.754,  53.0,  31.0, 120.0, 1, 1, 1,  Nonmetal,            [255, 255, 255]),
    Row(2,  "He", "Helium",      4.0026,  0.00, 24.587, 0.0,    31.0,  28.0, 140.0, 2, 1, 18, NobleGas,            [217, 255, 255]),
    Row(3,  "Li", "Lithium",     6.94,    0.98,  5.392, 0.618, 167.0, 128.0, 182.0, 1, 2, 1,  AlkaliMetal,         [204, 128, 255]),
    Row(4,  "Be", "Beryllium",   9.0122,  1.57,  9.323, 0.0,   112.0,  96.0, 153.0, 2, 2, 2,  AlkalineEarthMetal,  [194, 255, 0]),
    Row(5,  "B",  "Boron",      10.81,    2.04,  8.298, 0.277,  87.0,  84.0, 192.0, 3, 2, 13, Metalloid,           [255, 181, 181]),
    Row(6,  "C",  "Carbon",     12.011,   2.55, 11.260, 1.262,  67.0,  76.0, 170.0, 4, 2, 14, Nonmetal,            [144, 144, 144]),
    Row(7,  "N",  "Nitrogen",   14.007,   3.04, 14.534, 0.0,    56.0,  71.0, 155.0, 5, 2, 15, Nonmetal,            [48, 80, 248]),
    Row(8,  "O",  "Oxygen",     15.999,   3.44, 13.618, 1.461,  48.0,  66.0, 152.0, 6, 2, 16, Nonmetal,            [255, 13, 13]),
    Row(9,  "F",  "Fluorine",   18.998,   3.98, 17.423, 3.401,  42.0,  57.0, 147.0, 7, 2, 17, Halogen,             [144, 224, 80]),
    Row(10, "Ne", "Neon",       20.180,   0.00, 21.565, 0.0,    38.0,  58.0, 154.0, 8, 2, 18, NobleGas,            [179, 227, 245]),
    Row(11, "Na", "Sodium",     22.990,   0.93,  5.139, 0.548, 190.0, 166.0, 227.0, 1, 3, 1,  AlkaliMetal,         [171, 92, 242]),
    Row(12, "Mg", "Magnesium",  24.305,   1.31,  7.646, 0.0,   145.0, 141.0, 173.0, 2, 3, 2,  AlkalineEarthMetal,  [138, 255, 0]),
    Row(13, "Al", "Aluminium",  26.982,   1.61,  5.986, 0.441, 118.0, 121.0, 184.0, 3, 3, 13, PostTransitionMetal, [191, 166, 166]),
    Row(14, "Si", "Silicon",    28.085,   1.90,  8.152, 1.390, 111.0, 111.0, 210.0, 4, 3, 14, Metalloid,           [240, 200, 160]),
    Row(15, "P",  "Phosphorus", 30.974,   2.19, 10.487, 0.746,  98.0, 107.0, 180.0, 5, 3, 15, Nonmetal,            [255, 128, 0]),
    Row(16, "S",  "Sulfur",     32.06,    2.58, 10.360, 2.077,  88.0, 105.0, 180.0, 6, 3, 16, Nonmetal,            [255, 255, 48]),
    Row(17, "Cl", "Chlorine",   35.45,    3.16, 12.968, 3.613,  79.0, 102.0, 175.0, 7, 3, 17, Halogen,             [31, 240, 31]),
    Row(18, "Ar", "Argon",      39.948,   0.00, 15.760, 0.0,    71.0, 106.0, 188.0, 8, 3, 18, NobleGas,            [128, 209, 227]),
    Row(19, "K",  "Potassium",  39.098,   0.82,  4.341, 0.501, 243.0, 203.0, 275.0, 1, 4, 1,  AlkaliMetal,         [143, 64, 212]),
    Row(20, "Ca", "Calcium",    40.078,   1.00,  6.113, 0.025, 194.0, 176.0, 231.0, 2, 4, 2,  AlkalineEarthMetal,  [61, 255, 0]),
    Row(21, "Sc", "Scandium",   44.956,   1.36,  6.561, 0.188, 184.0, 170.0, 211.0, 2, 4, 3,  TransitionMetal,     [230, 230, 230]),
    Row(22, "Ti", "Titanium",   47.867,   1.54,  6.828, 0.079, 176.0, 160.0, 211.0, 2, 4, 4,  TransitionMetal,     [191, 194, 199]),
    Row(23, "V",  "Vanadium",   50.942,   1.63,  6.746, 0.525, 171.0, 153.0, 207.0, 2, 4, 5,  TransitionMetal,     [166, 166, 171]),
    Row(24, "Cr", "Chromium",   51.996,   1.66,  6.767, 0.666, 166.0, 139.0, 206.0, 1, 4, 6,  TransitionMetal,     [138, 153, 199]),
    Row(25, "Mn", "Manganese",  54.938,   1.55,  7.434, 0.0,   161.0, 139.0, 205.0, 2, 4, 7,  TransitionMetal,     [156, 122, 199]),
    Row(26, "Fe", "Iron",       55.845,   1.83,  7.902, 0.151, 156.0, 132.0, 204.0, 2, 4, 8,  TransitionMetal,     [224, 102, 51]),
    Row(27, "Co", "Cobalt",     58.933,   1.88,  7.881, 0.662, 152.0, 126.0, 200.0, 2, 4, 9,  TransitionMetal,     [240, 144, 160]),
    Row(28, "Ni", "Nickel",     58.693,   1.91,  7.640, 1.156, 149.0, 124.0, 197.0, 2, 4, 10, TransitionMetal,     [80, 208, 80]),
    Row(29, "Cu", "Copper",     63.546,   1.90,  7.726, 1.235, 145.0, 132.0, 196.0, 1, 4, 11, TransitionMetal,     [200, 128, 51]),
    Row(30, "Zn", "Zinc",       65.38,    1.65,  9.394, 0.0,   142.0, 122.0, 201.0, 2, 4, 12, TransitionMetal,     [125, 128, 176]),
    Row(31, "Ga", "Gallium",    69.723,   1.81,  5.999, 0.43,  136.0, 122.0, 187.0, 3, 4, 13, PostTransitionMetal, [194, 143, 143]),
    Row(32, "Ge", "Germanium",  72.630,   2.01,  7.900, 1.233, 125.0, 120.0, 211.0, 4, 4, 14, Metalloid,           [102, 143, 143]),
    Row(33, "As", "Arsenic",    74.922,   2.18,  9.789, 0.804, 114.0, 119.0, 185.0, 5, 4, 15, Metalloid,           [189, 128, 227]),
    Row(34, "Se", "Selenium",   78.971,   2.55,  9.752, 2.021, 103.0, 120.0, 190.0, 6, 4, 16, Nonmetal,            [255, 161, 0]),
    Row(35, "Br", "Bromine",    79.904,   2.96, 11.814, 3.364,  94.0, 120.0, 185.0, 7, 4, 17, Halogen,             [166, 41, 41]),
    Row(36, "Kr", "Krypton",    83.798,   3.00, 14.000, 0.0,    88.0, 116.0, 202.0, 8, 4, 18, NobleGas,            [92, 184, 209]),
    Row(47, "Ag", "Silver",    107.87,    1.93,  7.576, 1.302, 165.0, 145.0, 172.0, 1, 5, 11, TransitionMetal,     [192, 192, 192]),
    Row(50, "Sn", "Tin",       118.71,    1.96,  7.344, 1.112, 145.0, 139.0, 217.0, 4, 5, 14, PostTransitionMetal, [102, 128, 128]),
    Row(53, "I",  "Iodine",    126.90,    2.66, 10.451, 3.059, 115.0, 139.0, 198.0, 7, 5, 17, Halogen,             [148, 0, 148]),
    Row(54, "Xe", "Xenon",     131.29,    2.60, 12.130, 0.0,   108.0, 140.0, 216.0, 8, 5, 18, NobleGas,            [66, 158, 176]),
    Row(55, "Cs", "Caesium",   132.91,    0.79,  3.894, 0.472, 298.0, 244.0, 343.0, 1, 6, 1,  AlkaliMetal,         [87, 23, 143]),
    Row(56, "Ba", "Barium",    137.33,    0.89,  5.212, 0.145, 253.0, 215.0, 268.0, 2, 6, 2,  AlkalineEarthMetal,  [0, 201, 0]),
    Row(78, "Pt", "Platinum",  195.08,    2.28,  8.959, 2.128, 177.0, 136.0, 175.0, 1, 6, 10, TransitionMetal,     [208, 208, 224]),
    Row(79, "Au", "Gold",      196.97,    2.54,  9.226, 2.309, 174.0, 136.0, 166.0, 1, 6, 11, TransitionMetal,     [255, 209, 35]),
    Row(80, "Hg", "Mercury",   200.59,    2.00, 10.438, 0.0,   171.0, 132.0, 155.0, 2, 6, 12, TransitionMetal,     [184, 184, 208]),
    Row(82, "Pb", "Lead",      207.2,     2.33,  7.417, 0.364, 154.0, 146.0, 202.0, 4, 6, 14, PostTransitionMetal, [87, 89, 97]),
];

impl From<&Row> for ElementData {
    fn from(r: &Row) -> Self {
        ElementData {
            atomic_number: r.0,
            symbol: r.1.to_string(),
            name: r.2.to_string(),
            atomic_mass: r.3,
            electronegativity: r.4,
            ionization_energy: r.5,
            electron_affinity: r.6,
            atomic_radius: r.7,
            covalent_radius: r.8,
            vdw_radius: r.9,
            valence_electrons: r.10,
            period: r.11,
            group: r.12,
            category: r.13,
            color: r.14,
        }
    }
}

pub static BUILTIN_ELEMENTS: Lazy<Arc<ElementTable>> =
    Lazy::new(|| Arc::new(ElementTable::from_records(BUILTIN_DATA.iter().map(ElementData::from))));
