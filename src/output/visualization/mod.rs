//! Visualization of simulation results
//!
//! This module renders concentration series using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Plot configuration (`PlotConfig`)
//! - **concentration**: Concentration vs time, one line per depth
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use contam_rs::output::visualization::{plot_concentration, PlotConfig};
//!
//! let result = solver.solve(&scenario, &config)?;
//!
//! // Default look: title, axis labels, grid, legend
//! plot_concentration(&result, "concentration.png", None)?;
//!
//! // Custom title
//! let config = PlotConfig::titled("Liner breakthrough");
//! plot_concentration(&result, "liner.svg", Some(&config))?;
//! ```

pub mod concentration;
pub mod config;

pub use concentration::{plot_concentration, plot_lines, PlotLine};
pub use config::PlotConfig;
