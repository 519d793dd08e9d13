use std::path::PathBuf;

/// Events emitted while a figure is being produced, in the order the
/// workflow reaches them.
#[derive(Debug, Clone)]
pub enum Progress {
    /// The reference energy has been computed (eV per formula unit).
    ReferenceEnergy { energy_ev: f64 },

    /// Table loading is about to begin; `total_tables` loads will follow.
    LoadingStart { total_tables: u64 },
    /// One model or DFT table finished loading.
    TableLoaded,

    /// All data is in memory and drawing starts.
    RenderingStart { total_panels: u64 },

    /// The composed figure was written to disk.
    Finished { output: PathBuf },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// A sink for [`Progress`] events. Without a callback every report is a
/// no-op, so library callers that do not care pay nothing.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
