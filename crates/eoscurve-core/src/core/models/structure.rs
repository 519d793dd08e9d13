use serde::{Deserialize, Serialize};

/// A crystal polymorph included in every panel of the figure.
///
/// One record replaces the parallel id/name/file/atom-count/color arrays a
/// quick analysis script would use, so the fields of one structure can never
/// drift out of alignment with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct StructureInfo {
    /// Short identifier, e.g. `quartz`. Used to select the reference structure.
    pub id: String,
    /// Name shown in the legend, e.g. `α-quartz`.
    pub display_name: String,
    /// File name of the structure's table inside each dataset directory,
    /// e.g. `quartz.dat`.
    pub file_name: String,
    /// Atoms in the simulation cell the DFT totals were computed for.
    pub atom_count: u32,
    /// Series color as a `#rrggbb` hex string.
    pub color: String,
}

impl StructureInfo {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        file_name: impl Into<String>,
        atom_count: u32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            file_name: file_name.into(),
            atom_count,
            color: color.into(),
        }
    }

    /// Number of formula units in the structure's DFT cell.
    pub fn formula_units(&self) -> f64 {
        f64::from(self.atom_count) / crate::core::units::FORMULA_UNIT_ATOMS
    }
}
