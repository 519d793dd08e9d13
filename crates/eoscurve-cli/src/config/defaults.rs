//! The built-in dataset description: six interatomic-potential models and
//! six silica polymorphs, reproducing the published comparison figure when
//! no config file is given.

use eoscurve::core::models::potential::PotentialInfo;
use eoscurve::core::models::structure::StructureInfo;

/// Structure whose DFT energy minimum defines the energy zero.
pub const REFERENCE_STRUCTURE: &str = "quartz";

pub fn potentials() -> Vec<PotentialInfo> {
    vec![
        PotentialInfo::new("GAP", "GAP"),
        PotentialInfo::new("linearACE", "linear ACE"),
        PotentialInfo::new("MACE", "MACE"),
        PotentialInfo::new("MTP-26", "MTP"),
        PotentialInfo::new("nonlinearACE", "nonlinear ACE"),
        PotentialInfo::new("NNP", "HDNNP"),
    ]
}

pub fn structures() -> Vec<StructureInfo> {
    vec![
        StructureInfo::new("coesite", "coesite", "coesite.dat", 48, "#e9162d"),
        StructureInfo::new(
            "cristobalite",
            "α-cristobalite",
            "cristobalite.dat",
            12,
            "#8f2be7",
        ),
        StructureInfo::new("moganite", "moganite", "moganite.dat", 36, "#fb4fd9"),
        StructureInfo::new("quartz", "α-quartz", "quartz.dat", 9, "#007bd8"),
        StructureInfo::new("stishovite", "stishovite", "stishovite.dat", 6, "#00e1da"),
        StructureInfo::new(
            "tridymite",
            "monoclinic tridymite",
            "tridymite.dat",
            144,
            "#f28200",
        ),
    ]
}
