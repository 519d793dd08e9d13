//! The end-to-end figure workflow: load every table, transform it into
//! plottable series, and write the composed image.

use crate::core::io::dataset::DatasetRoot;
use crate::engine::config::{ConfigError, FigureConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::series;
use crate::render;
use crate::render::legend::LegendEntry;
use crate::render::panel::{PanelData, PanelSeries};
use crate::render::style;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureReport {
    /// Reference energy in eV per formula unit.
    pub reference_energy_ev: f64,
    /// Number of panels drawn.
    pub panels: usize,
    /// Where the figure was written.
    pub output: PathBuf,
}

#[instrument(skip_all, name = "figure_workflow")]
pub fn run(
    config: &FigureConfig,
    reporter: &ProgressReporter,
) -> Result<FigureReport, EngineError> {
    config.validate()?;

    let dataset = DatasetRoot::new(&config.data_dir);
    let reference = config.reference().ok_or_else(|| {
        ConfigError::UnknownReferenceStructure(config.reference_structure.clone())
    })?;

    let reference_table = dataset.load_dft_reference(reference)?;
    let reference_energy = series::reference_energy(&reference_table)?;
    info!(
        "Reference energy from '{}': {:.6} eV per formula unit.",
        reference.id, reference_energy
    );
    reporter.report(Progress::ReferenceEnergy {
        energy_ev: reference_energy,
    });

    let total_tables = (config.potentials.len() * config.structures.len() * 2) as u64;
    reporter.report(Progress::LoadingStart { total_tables });

    let mut panels = Vec::with_capacity(config.potentials.len());
    for potential in &config.potentials {
        let mut panel_series = Vec::with_capacity(config.structures.len());
        for structure in &config.structures {
            let model_table = dataset.load_model_curve(potential, structure)?;
            reporter.report(Progress::TableLoaded);
            let dft_table = dataset.load_dft_reference(structure)?;
            reporter.report(Progress::TableLoaded);

            panel_series.push(PanelSeries {
                color: structure_color(structure)?,
                model: series::model_series(&model_table)?,
                dft: series::dft_series(&dft_table, structure, reference_energy)?,
            });
        }
        panels.push(PanelData {
            title: potential.label.clone(),
            series: panel_series,
        });
    }

    reporter.report(Progress::RenderingStart {
        total_panels: panels.len() as u64,
    });

    let entries = config
        .structures
        .iter()
        .map(|structure| {
            Ok(LegendEntry {
                label: structure.display_name.clone(),
                color: structure_color(structure)?,
            })
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    render::figure::render(&config.output_path, &config.geometry, &panels, &entries)?;

    info!("Figure written to {}.", config.output_path.display());
    reporter.report(Progress::Finished {
        output: config.output_path.clone(),
    });

    Ok(FigureReport {
        reference_energy_ev: reference_energy,
        panels: panels.len(),
        output: config.output_path.clone(),
    })
}

fn structure_color(
    structure: &crate::core::models::structure::StructureInfo,
) -> Result<plotters::style::RGBColor, ConfigError> {
    style::parse_hex_color(&structure.color).ok_or_else(|| ConfigError::InvalidColor {
        id: structure.id.clone(),
        color: structure.color.clone(),
    })
}
