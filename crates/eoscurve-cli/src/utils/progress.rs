use eoscurve::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Maps workflow progress events onto one indicatif bar: a counting bar
/// while tables load, a spinner while the canvas is drawn.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0).with_style(Self::spinner_style());
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb.disable_steady_tick();
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::ReferenceEnergy { energy_ev } => {
                    pb.println(format!(
                        "Reference energy: {:.6} eV per formula unit",
                        energy_ev
                    ));
                }
                Progress::LoadingStart { total_tables } => {
                    pb.reset();
                    pb.set_style(Self::bar_style());
                    pb.set_length(total_tables);
                    pb.set_position(0);
                    pb.set_message("Loading tables");
                }
                Progress::TableLoaded => {
                    pb.inc(1);
                }
                Progress::RenderingStart { total_panels } => {
                    pb.reset();
                    pb.set_length(0);
                    pb.set_style(Self::spinner_style());
                    pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    pb.set_message(format!("Rendering {} panels", total_panels));
                }
                Progress::Finished { output } => {
                    pb.disable_steady_tick();
                    pb.finish_with_message(format!("✓ Wrote {}", output.display()));
                }
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
