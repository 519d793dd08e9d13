use crate::core::models::potential::PotentialInfo;
use crate::core::models::structure::StructureInfo;
use crate::render::layout::{FigureGeometry, PANEL_COUNT};
use crate::render::style;
use std::path::PathBuf;
use thiserror::Error;

/// Default name of the composed figure, written into the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "SiO_energy_volume.png";

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("The figure grid has {expected} panels, but {found} potential(s) were configured")]
    PanelCount { expected: usize, found: usize },

    #[error("At least one structure is required")]
    NoStructures,

    #[error("Duplicate structure id '{0}'")]
    DuplicateStructure(String),

    #[error("Reference structure '{0}' is not in the structure list")]
    UnknownReferenceStructure(String),

    #[error("Structure '{id}' has invalid color '{color}' (expected #rrggbb)")]
    InvalidColor { id: String, color: String },
}

/// Everything the figure workflow needs: the models to compare, the
/// structures to overlay, where the dataset lives and where the image goes.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureConfig {
    pub potentials: Vec<PotentialInfo>,
    pub structures: Vec<StructureInfo>,
    /// Id of the structure whose DFT minimum defines the energy zero.
    pub reference_structure: String,
    pub data_dir: PathBuf,
    pub output_path: PathBuf,
    pub geometry: FigureGeometry,
}

impl FigureConfig {
    /// Checks the invariants the renderer relies on. The builder runs this
    /// automatically; hand-assembled configs are re-checked by the workflow.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.potentials.len() != PANEL_COUNT {
            return Err(ConfigError::PanelCount {
                expected: PANEL_COUNT,
                found: self.potentials.len(),
            });
        }
        if self.structures.is_empty() {
            return Err(ConfigError::NoStructures);
        }
        for (i, structure) in self.structures.iter().enumerate() {
            if self.structures[..i].iter().any(|s| s.id == structure.id) {
                return Err(ConfigError::DuplicateStructure(structure.id.clone()));
            }
            if style::parse_hex_color(&structure.color).is_none() {
                return Err(ConfigError::InvalidColor {
                    id: structure.id.clone(),
                    color: structure.color.clone(),
                });
            }
        }
        if self.reference().is_none() {
            return Err(ConfigError::UnknownReferenceStructure(
                self.reference_structure.clone(),
            ));
        }
        Ok(())
    }

    /// The structure record named by `reference_structure`, if present.
    pub fn reference(&self) -> Option<&StructureInfo> {
        self.structures
            .iter()
            .find(|s| s.id == self.reference_structure)
    }
}

#[derive(Default)]
pub struct FigureConfigBuilder {
    potentials: Option<Vec<PotentialInfo>>,
    structures: Option<Vec<StructureInfo>>,
    reference_structure: Option<String>,
    data_dir: Option<PathBuf>,
    output_path: Option<PathBuf>,
    geometry: Option<FigureGeometry>,
}

impl FigureConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn potentials(mut self, potentials: Vec<PotentialInfo>) -> Self {
        self.potentials = Some(potentials);
        self
    }
    pub fn structures(mut self, structures: Vec<StructureInfo>) -> Self {
        self.structures = Some(structures);
        self
    }
    pub fn reference_structure(mut self, id: impl Into<String>) -> Self {
        self.reference_structure = Some(id.into());
        self
    }
    pub fn data_dir(mut self, path: PathBuf) -> Self {
        self.data_dir = Some(path);
        self
    }
    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }
    pub fn geometry(mut self, geometry: FigureGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn build(self) -> Result<FigureConfig, ConfigError> {
        let config = FigureConfig {
            potentials: self
                .potentials
                .ok_or(ConfigError::MissingParameter("potentials"))?,
            structures: self
                .structures
                .ok_or(ConfigError::MissingParameter("structures"))?,
            reference_structure: self
                .reference_structure
                .ok_or(ConfigError::MissingParameter("reference_structure"))?,
            data_dir: self
                .data_dir
                .ok_or(ConfigError::MissingParameter("data_dir"))?,
            output_path: self
                .output_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
            geometry: self.geometry.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six_potentials() -> Vec<PotentialInfo> {
        (0..6)
            .map(|i| PotentialInfo::new(format!("pot{i}"), format!("Potential {i}")))
            .collect()
    }

    fn one_structure() -> Vec<StructureInfo> {
        vec![StructureInfo::new(
            "quartz",
            "α-quartz",
            "quartz.dat",
            9,
            "#007bd8",
        )]
    }

    fn valid_builder() -> FigureConfigBuilder {
        FigureConfigBuilder::new()
            .potentials(six_potentials())
            .structures(one_structure())
            .reference_structure("quartz")
            .data_dir(PathBuf::from("."))
    }

    #[test]
    fn build_succeeds_and_applies_defaults() {
        let config = valid_builder().build().unwrap();
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(config.geometry, FigureGeometry::default());
        assert_eq!(config.reference().unwrap().atom_count, 9);
    }

    #[test]
    fn build_fails_without_required_parameters() {
        let result = FigureConfigBuilder::new().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter("potentials"))
        ));
    }

    #[test]
    fn wrong_potential_count_is_rejected() {
        let result = valid_builder()
            .potentials(vec![PotentialInfo::new("GAP", "GAP")])
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::PanelCount {
                expected: 6,
                found: 1
            })
        ));
    }

    #[test]
    fn empty_structure_list_is_rejected() {
        let result = valid_builder().structures(Vec::new()).build();
        assert!(matches!(result, Err(ConfigError::NoStructures)));
    }

    #[test]
    fn duplicate_structure_ids_are_rejected() {
        let mut structures = one_structure();
        structures.push(structures[0].clone());
        let result = valid_builder().structures(structures).build();
        assert!(matches!(result, Err(ConfigError::DuplicateStructure(id)) if id == "quartz"));
    }

    #[test]
    fn unknown_reference_structure_is_rejected() {
        let result = valid_builder().reference_structure("stishovite").build();
        assert!(
            matches!(result, Err(ConfigError::UnknownReferenceStructure(id)) if id == "stishovite")
        );
    }

    #[test]
    fn invalid_color_is_rejected() {
        let mut structures = one_structure();
        structures[0].color = "blue".to_string();
        let result = valid_builder().structures(structures).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidColor { ref color, .. }) if color == "blue"
        ));
    }
}
