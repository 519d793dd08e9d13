//! # eoscurve Core Library
//!
//! A library for producing comparative energy-volume equation-of-state figures:
//! a grid of panels, one per interatomic-potential model, each overlaying the
//! model's predicted curves for a set of crystal structures against
//! density-functional-theory (DFT) reference points.
//!
//! ## Architectural Philosophy
//!
//! The library keeps a strict layered architecture so that the numeric
//! transformations stay testable in isolation from any drawing backend.
//!
//! - **[`core`]: The Foundation.** Stateless metadata records
//!   (`PotentialInfo`, `StructureInfo`), the whitespace-table reader, and the
//!   on-disk dataset layout.
//!
//! - **[`engine`]: The Logic Core.** Figure configuration with validation,
//!   the energy/volume series transformations (normalization, reference-energy
//!   offset, eV-to-meV scaling), and progress reporting.
//!
//! - **[`render`]: The Drawing Layer.** Plotters-based geometry, panel,
//!   inset, and legend rendering onto a bitmap canvas.
//!
//! - **[`workflows`]: The Public API.** The highest-level entry point that
//!   loads a dataset, transforms it, and writes the composed figure.

pub mod core;
pub mod engine;
pub mod render;
pub mod workflows;
