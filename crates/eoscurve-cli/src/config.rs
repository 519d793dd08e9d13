pub mod defaults;

use crate::error::{CliError, Result};
use eoscurve::core::models::potential::PotentialInfo;
use eoscurve::core::models::structure::StructureInfo;
use eoscurve::engine::config::{FigureConfig, FigureConfigBuilder};
use eoscurve::render::layout::FigureGeometry;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialFigureSettings {
    output: Option<PathBuf>,
    reference_structure: Option<String>,
    width_cm: Option<f64>,
    height_cm: Option<f64>,
    dpi: Option<u32>,
}

/// The optional TOML config file. Anything left out falls back to the
/// built-in silica dataset description in [`defaults`].
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialFigureConfig {
    figure: Option<PartialFigureSettings>,
    potentials: Option<Vec<PotentialInfo>>,
    structures: Option<Vec<StructureInfo>>,
}

impl PartialFigureConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves the final configuration. Precedence per field: CLI argument,
    /// then config file, then built-in default.
    pub fn merge_with_cli(
        self,
        data_dir: &Path,
        output: Option<&Path>,
        dpi: Option<u32>,
    ) -> Result<FigureConfig> {
        let settings = self.figure.unwrap_or_default();

        let mut geometry = FigureGeometry::default();
        if let Some(width_cm) = settings.width_cm {
            geometry.width_cm = width_cm;
        }
        if let Some(height_cm) = settings.height_cm {
            geometry.height_cm = height_cm;
        }
        if let Some(dpi) = dpi.or(settings.dpi) {
            geometry.dpi = dpi;
        }

        let mut builder = FigureConfigBuilder::new()
            .potentials(self.potentials.unwrap_or_else(defaults::potentials))
            .structures(self.structures.unwrap_or_else(defaults::structures))
            .reference_structure(
                settings
                    .reference_structure
                    .unwrap_or_else(|| defaults::REFERENCE_STRUCTURE.to_string()),
            )
            .data_dir(data_dir.to_path_buf())
            .geometry(geometry);

        if let Some(path) = output.map(Path::to_path_buf).or(settings.output) {
            builder = builder.output_path(path);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }
}

/// Loads the optional config file and merges it with the CLI arguments.
pub fn load_figure_config(
    config_file: Option<&Path>,
    data_dir: &Path,
    output: Option<&Path>,
    dpi: Option<u32>,
) -> Result<FigureConfig> {
    let partial = match config_file {
        Some(path) => PartialFigureConfig::from_file(path)?,
        None => PartialFigureConfig::default(),
    };
    partial.merge_with_cli(data_dir, output, dpi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_reproduce_the_builtin_dataset() {
        let config = load_figure_config(None, Path::new("data"), None, None).unwrap();

        assert_eq!(config.potentials.len(), 6);
        assert_eq!(config.structures.len(), 6);
        assert_eq!(config.reference_structure, "quartz");
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.output_path, PathBuf::from("SiO_energy_volume.png"));
        assert_eq!(config.geometry, FigureGeometry::default());
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("figure.toml");
        fs::write(
            &path,
            r#"
            [figure]
            output = "custom.png"
            dpi = 150
            "#,
        )
        .unwrap();

        let config = load_figure_config(Some(&path), Path::new("."), None, None).unwrap();
        assert_eq!(config.output_path, PathBuf::from("custom.png"));
        assert_eq!(config.geometry.dpi, 150);
        // Untouched fields keep their defaults.
        assert_eq!(config.geometry.width_cm, 17.0);
        assert_eq!(config.potentials.len(), 6);
    }

    #[test]
    fn cli_arguments_override_the_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("figure.toml");
        fs::write(
            &path,
            r#"
            [figure]
            output = "from-file.png"
            dpi = 150
            "#,
        )
        .unwrap();

        let config = load_figure_config(
            Some(&path),
            Path::new("."),
            Some(Path::new("from-cli.png")),
            Some(300),
        )
        .unwrap();
        assert_eq!(config.output_path, PathBuf::from("from-cli.png"));
        assert_eq!(config.geometry.dpi, 300);
    }

    #[test]
    fn custom_structure_list_replaces_the_default_one() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("figure.toml");
        fs::write(
            &path,
            r##"
            [figure]
            reference-structure = "rutile"

            [[structures]]
            id = "rutile"
            display-name = "rutile"
            file-name = "rutile.dat"
            atom-count = 6
            color = "#112233"
            "##,
        )
        .unwrap();

        let config = load_figure_config(Some(&path), Path::new("."), None, None).unwrap();
        assert_eq!(config.structures.len(), 1);
        assert_eq!(config.reference_structure, "rutile");
        assert_eq!(config.structures[0].atom_count, 6);
    }

    #[test]
    fn invalid_dataset_description_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("figure.toml");
        // Only one potential: the 2x3 grid cannot be filled.
        fs::write(
            &path,
            r#"
            [[potentials]]
            id = "GAP"
            label = "GAP"
            "#,
        )
        .unwrap();

        let result = load_figure_config(Some(&path), Path::new("."), None, None);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("figure.toml");
        fs::write(&path, "this is not toml").unwrap();

        let result = load_figure_config(Some(&path), Path::new("."), None, None);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }
}
