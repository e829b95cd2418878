//! Output module for simulation results
//!
//! This module hands simulation results to the two output collaborators:
//! - **Visualization**: PNG/SVG plots using plotters, or plain plot data
//! - **Export**: CSV text payload for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs                ← This file
//! ├── visualization/        ← Plots
//! │   ├── config.rs
//! │   └── concentration.rs
//! └── export/               ← Data export
//!     ├── mod.rs            (Exporter trait, payload)
//!     ├── table.rs          (row-aligned table)
//!     └── csv.rs
//! ```
//!
//! Both sides read the same [`SimulationResult`](crate::solver::SimulationResult),
//! so legend labels and CSV headers are always identical and in the same order.

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{plot_concentration, plot_lines, PlotConfig, PlotLine};

pub use export::{
    export_csv,
    CsvConfig,
    CsvExporter,
    ExportError,
    ExportPayload,
    ExportTable,
    Exporter,
};
