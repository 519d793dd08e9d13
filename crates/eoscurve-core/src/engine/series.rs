//! Transformations from raw table columns to plotted series.
//!
//! Model tables are already per formula unit: volume passes through
//! unchanged and energy is scaled eV → meV. DFT tables carry cell totals in
//! the opposite column order (energy, volume); both columns are divided by
//! the number of formula units in the cell, and the energy is offset by the
//! shared reference energy before scaling.

use crate::core::io::table::{NumericTable, TableError};
use crate::core::models::series::EnergyVolumeSeries;
use crate::core::models::structure::StructureInfo;
use crate::core::units::{EV_TO_MEV, FORMULA_UNIT_ATOMS};

/// Reference energy in eV per formula unit: the minimum of the reference
/// structure's DFT energy column, normalized per formula unit.
pub fn reference_energy(dft_table: &NumericTable) -> Result<f64, TableError> {
    Ok(dft_table.column_min(0)? / FORMULA_UNIT_ATOMS)
}

/// Builds the model-predicted curve for one (potential, structure) pair.
pub fn model_series(table: &NumericTable) -> Result<EnergyVolumeSeries, TableError> {
    Ok(table
        .column_pair(0, 1)?
        .map(|(volume, energy_ev)| (volume, energy_ev * EV_TO_MEV))
        .collect())
}

/// Builds the DFT scatter points for one structure, normalized per formula
/// unit and offset by the reference energy.
pub fn dft_series(
    table: &NumericTable,
    structure: &StructureInfo,
    reference_energy_ev: f64,
) -> Result<EnergyVolumeSeries, TableError> {
    let formula_units = structure.formula_units();
    Ok(table
        .column_pair(0, 1)?
        .map(|(total_energy, total_volume)| {
            let volume = total_volume / formula_units;
            let energy = (total_energy / formula_units - reference_energy_ev) * EV_TO_MEV;
            (volume, energy)
        })
        .collect())
}
