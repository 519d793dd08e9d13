use crate::cli::RenderArgs;
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use eoscurve::engine::progress::ProgressReporter;
use eoscurve::workflows;
use tracing::info;

pub fn run(args: RenderArgs) -> Result<()> {
    let figure_config = config::load_figure_config(
        args.config.as_deref(),
        &args.data_dir,
        args.output.as_deref(),
        args.dpi,
    )?;

    info!(
        "Rendering {} panels × {} structures from {}.",
        figure_config.potentials.len(),
        figure_config.structures.len(),
        figure_config.data_dir.display()
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let report = workflows::figure::run(&figure_config, &reporter)?;

    println!(
        "✓ Figure with {} panel(s) written to: {}",
        report.panels,
        report.output.display()
    );
    println!(
        "  Reference energy: {:.6} eV per formula unit",
        report.reference_energy_ev
    );

    Ok(())
}
