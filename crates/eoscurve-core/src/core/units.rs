//! Unit conventions shared across the crate.
//!
//! Model tables store energies in eV per formula unit; DFT reference tables
//! store unnormalized totals. Everything is plotted in meV per formula unit.

/// Conversion factor from eV to meV.
pub const EV_TO_MEV: f64 = 1000.0;

/// Atoms per SiO2 formula unit. DFT totals are normalized per formula unit
/// by dividing through `atom_count / FORMULA_UNIT_ATOMS`.
pub const FORMULA_UNIT_ATOMS: f64 = 3.0;
