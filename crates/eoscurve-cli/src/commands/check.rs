use crate::cli::CheckArgs;
use crate::config;
use crate::error::{CliError, Result};
use eoscurve::core::io::dataset::DatasetRoot;
use tracing::info;

pub fn run(args: CheckArgs) -> Result<()> {
    let figure_config = config::load_figure_config(args.config.as_deref(), &args.data_dir, None, None)?;

    let expected =
        figure_config.structures.len() * (figure_config.potentials.len() + 1);
    println!(
        "Checking {} table(s) under {}...",
        expected,
        figure_config.data_dir.display()
    );

    let dataset = DatasetRoot::new(&figure_config.data_dir);
    let issues = dataset.check(&figure_config.potentials, &figure_config.structures);

    if issues.is_empty() {
        info!("Dataset check passed: {} tables readable.", expected);
        println!("✓ Dataset complete: all {} tables are present and readable.", expected);
        return Ok(());
    }

    for issue in &issues {
        eprintln!("  ✗ {}", issue);
    }
    Err(CliError::Dataset(format!(
        "{} problem(s) found in {}",
        issues.len(),
        figure_config.data_dir.display()
    )))
}
