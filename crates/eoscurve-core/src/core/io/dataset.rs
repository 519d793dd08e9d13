use super::table::{NumericTable, TableError};
use crate::core::models::potential::PotentialInfo;
use crate::core::models::structure::StructureInfo;
use std::path::{Path, PathBuf};

/// Directory name holding the DFT reference tables, one per structure.
pub const DFT_REFERENCE_DIR: &str = "dft_ref";

/// The on-disk dataset layout.
///
/// Relative to one root directory, each potential owns a directory of
/// per-structure model curves and `dft_ref/` holds the shared reference
/// tables:
///
/// ```text
/// <root>/<potential-id>/<structure-file>   model curve (volume, energy)
/// <root>/dft_ref/<structure-file>          DFT points (energy, volume)
/// ```
#[derive(Debug, Clone)]
pub struct DatasetRoot {
    root: PathBuf,
}

/// A problem found while checking the dataset layout.
#[derive(Debug)]
pub enum DatasetIssue {
    Missing { path: PathBuf },
    Invalid { path: PathBuf, error: TableError },
}

impl std::fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetIssue::Missing { path } => write!(f, "missing file: {}", path.display()),
            DatasetIssue::Invalid { path, error } => {
                write!(f, "unreadable table {}: {}", path.display(), error)
            }
        }
    }
}

impl DatasetRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn model_curve_path(&self, potential: &PotentialInfo, structure: &StructureInfo) -> PathBuf {
        self.root.join(&potential.id).join(&structure.file_name)
    }

    pub fn dft_reference_path(&self, structure: &StructureInfo) -> PathBuf {
        self.root.join(DFT_REFERENCE_DIR).join(&structure.file_name)
    }

    /// Loads the model-predicted curve for one (potential, structure) pair.
    pub fn load_model_curve(
        &self,
        potential: &PotentialInfo,
        structure: &StructureInfo,
    ) -> Result<NumericTable, TableError> {
        NumericTable::load(&self.model_curve_path(potential, structure))
    }

    /// Loads the DFT reference table for one structure.
    pub fn load_dft_reference(&self, structure: &StructureInfo) -> Result<NumericTable, TableError> {
        NumericTable::load(&self.dft_reference_path(structure))
    }

    /// Scans every table the figure will need and collects everything that
    /// is missing or fails to parse, instead of stopping at the first error.
    pub fn check(
        &self,
        potentials: &[PotentialInfo],
        structures: &[StructureInfo],
    ) -> Vec<DatasetIssue> {
        let mut issues = Vec::new();

        for structure in structures {
            Self::check_table(self.dft_reference_path(structure), &mut issues);
        }
        for potential in potentials {
            for structure in structures {
                Self::check_table(self.model_curve_path(potential, structure), &mut issues);
            }
        }

        issues
    }

    fn check_table(path: PathBuf, issues: &mut Vec<DatasetIssue>) {
        if !path.exists() {
            issues.push(DatasetIssue::Missing { path });
            return;
        }
        if let Err(error) = NumericTable::load(&path) {
            issues.push(DatasetIssue::Invalid { path, error });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn quartz() -> StructureInfo {
        StructureInfo::new("quartz", "α-quartz", "quartz.dat", 9, "#007bd8")
    }

    fn gap() -> PotentialInfo {
        PotentialInfo::new("GAP", "GAP")
    }

    #[test]
    fn paths_follow_the_expected_layout() {
        let root = DatasetRoot::new("/data");
        assert_eq!(
            root.model_curve_path(&gap(), &quartz()),
            PathBuf::from("/data/GAP/quartz.dat")
        );
        assert_eq!(
            root.dft_reference_path(&quartz()),
            PathBuf::from("/data/dft_ref/quartz.dat")
        );
    }

    #[test]
    fn load_model_curve_reads_the_table() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("GAP")).unwrap();
        fs::write(dir.path().join("GAP/quartz.dat"), "35.0 0.01\n40.0 0.05\n").unwrap();

        let root = DatasetRoot::new(dir.path());
        let table = root.load_model_curve(&gap(), &quartz()).unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn check_reports_missing_and_invalid_tables() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(DFT_REFERENCE_DIR)).unwrap();
        fs::write(dir.path().join("dft_ref/quartz.dat"), "not a number\n").unwrap();
        // GAP/quartz.dat is absent entirely.

        let root = DatasetRoot::new(dir.path());
        let issues = root.check(&[gap()], &[quartz()]);

        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0], DatasetIssue::Invalid { .. }));
        assert!(matches!(issues[1], DatasetIssue::Missing { .. }));
    }

    #[test]
    fn check_passes_on_a_complete_dataset() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(DFT_REFERENCE_DIR)).unwrap();
        fs::create_dir(dir.path().join("GAP")).unwrap();
        fs::write(dir.path().join("dft_ref/quartz.dat"), "-23.0 100.0\n").unwrap();
        fs::write(dir.path().join("GAP/quartz.dat"), "35.0 0.01\n").unwrap();

        let root = DatasetRoot::new(dir.path());
        assert!(root.check(&[gap()], &[quartz()]).is_empty());
    }
}
