pub mod potential;
pub mod series;
pub mod structure;
