// atom/electron.rs
// Electron quantum numbers and the Aufbau shell filler

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Quantum numbers of one electron. `spin` is +1 or -1 for ±1/2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuantumNumbers {
    pub n: u32,
    pub l: u32,
    pub m: i32,
    pub spin: i8,
}

/// A bound electron. Owned by exactly one atom; moved, never copied, on transfer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Electron {
    pub qn: QuantumNumbers,
}

impl Electron {
    pub fn new(n: u32, l: u32, m: i32, spin: i8) -> Self {
        Self {
            qn: QuantumNumbers { n, l, m, spin },
        }
    }
}

/// Highest principal and angular quantum numbers the filler knows about.
const MAX_N: u32 = 7;
const MAX_L: u32 = 3;

/// Subshells (n, l) sorted by n+l, then n (Madelung order).
pub static AUFBAU_ORDER: Lazy<Vec<(u32, u32)>> = Lazy::new(|| {
    let mut order: Vec<(u32, u32)> = (1..=MAX_N)
        .flat_map(|n| (0..n.min(MAX_L + 1)).map(move |l| (n, l)))
        .collect();
    order.sort_by_key(|&(n, l)| (n + l, n));
    order
});

/// Electrons a subshell of angular momentum `l` holds.
pub fn subshell_capacity(l: u32) -> u32 {
    2 * (2 * l + 1)
}

/// Ground-state electron list for a neutral atom, in Aufbau order.
///
/// Each subshell walks m from -l to +l, placing spin up then spin down
/// on every m before moving on.
pub fn fill_electron_shells(atomic_number: u32) -> Vec<Electron> {
    let mut electrons = Vec::with_capacity(atomic_number as usize);
    let mut remaining = atomic_number;
    for &(n, l) in AUFBAU_ORDER.iter() {
        if remaining == 0 {
            break;
        }
        let li = l as i32;
        'subshell: for m in -li..=li {
            for spin in [1i8, -1i8] {
                if remaining == 0 {
                    break 'subshell;
                }
                electrons.push(Electron::new(n, l, m, spin));
                remaining -= 1;
            }
        }
    }
    electrons
}

/// Highest principal quantum number present, 0 for no electrons.
pub fn outermost_shell(electrons: &[Electron]) -> u32 {
    electrons.iter().map(|e| e.qn.n).max().unwrap_or(0)
}

/// Number of electrons in the outermost shell.
pub fn count_valence_electrons(electrons: &[Electron]) -> usize {
    let max_n = outermost_shell(electrons);
    electrons.iter().filter(|e| e.qn.n == max_n && max_n > 0).count()
}

/// (n, l) pairs for every electron, the input Slater's rules work on.
pub fn nl_pairs(electrons: &[Electron]) -> Vec<(u32, u32)> {
    electrons.iter().map(|e| (e.qn.n, e.qn.l)).collect()
}
