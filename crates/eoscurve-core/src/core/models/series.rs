/// One plotted point: volume in Å³ per formula unit, energy in meV per
/// formula unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyVolumePoint {
    pub volume: f64,
    pub energy: f64,
}

/// An ordered set of energy-volume points ready for drawing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnergyVolumeSeries {
    pub points: Vec<EnergyVolumePoint>,
}

impl EnergyVolumeSeries {
    pub fn new(points: Vec<EnergyVolumePoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter_xy(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().map(|p| (p.volume, p.energy))
    }
}

impl FromIterator<(f64, f64)> for EnergyVolumeSeries {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self {
            points: iter
                .into_iter()
                .map(|(volume, energy)| EnergyVolumePoint { volume, energy })
                .collect(),
        }
    }
}
