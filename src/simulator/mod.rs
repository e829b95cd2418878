//! Refresh cycle
//!
//! One cycle takes a complete [`ParameterSnapshot`], validates it, evaluates
//! every selected depth and prepares both outputs. Nothing is carried over
//! between cycles.
//!
//! ```text
//! ParameterSnapshot ──validate──► TransportParameters + DepthSet + grid
//!                                         │
//!                                 AnalyticalSolver
//!                                         │
//!                                 SimulationResult ──► PlotLine list / PNG / SVG
//!                                         │
//!                                 ExportTable ──► CsvExporter ──► ExportPayload
//! ```
//!
//! # Example
//!
//! ```rust
//! use contam_rs::simulator::{ParameterSnapshot, Simulator};
//!
//! let cycle = Simulator::new().refresh(&ParameterSnapshot::default()).unwrap();
//! assert_eq!(cycle.result.len(), 3);
//! assert_eq!(cycle.export.file_name, "contaminant_concentration.csv");
//! assert!(cycle.export.body.starts_with("Time (days),Depth 10 cm,Depth 50 cm,Depth 90 cm"));
//! ```

pub mod params;

pub use params::{
    ParameterRange,
    ParameterSnapshot,
    DECAY_RANGE,
    DEFAULT_DEPTHS,
    DEPTH_CHOICES,
    DISPERSION_RANGE,
    SOURCE_CONCENTRATION_RANGE,
    T_MAX_RANGE,
};

use std::path::Path;

use log::info;

use crate::error::{Error, Result};
use crate::models::{ErfcDecayModel, TransportParameters};
use crate::output::export::{CsvConfig, CsvExporter, CsvMetadata, ExportPayload, ExportTable, Exporter};
use crate::output::visualization::{plot_concentration, plot_lines, PlotConfig, PlotLine};
use crate::solver::{AnalyticalSolver, Scenario, SimulationResult, Solver};

/// Everything one refresh cycle produces
#[derive(Debug, Clone)]
pub struct CycleOutput {
    /// Validated model parameters
    pub parameters: TransportParameters,

    /// One series per selected depth
    pub result: SimulationResult,

    /// CSV payload, ready to be offered for download
    pub export: ExportPayload,
}

impl CycleOutput {
    /// Plot data, labeled like the CSV columns
    pub fn plot_lines(&self) -> Vec<PlotLine> {
        plot_lines(&self.result)
    }

    /// Render the concentration plot (`.svg` → vector, anything else → PNG)
    pub fn render_plot(&self, path: &Path, config: Option<&PlotConfig>) -> Result<()> {
        plot_concentration(&self.result, &path.to_string_lossy(), config)
            .map_err(|e| Error::Plot(e.to_string()))?;
        info!("Plot written to {}", path.display());
        Ok(())
    }
}

/// Stateless driver of the refresh cycle
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    solver: AnalyticalSolver,
    csv: CsvConfig,
    include_metadata: bool,
}

impl Simulator {
    /// Simulator with the default solver and CSV format, no metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: replace the solver
    pub fn with_solver(mut self, solver: AnalyticalSolver) -> Self {
        self.solver = solver;
        self
    }

    /// Builder pattern: CSV formatting
    pub fn with_csv_config(mut self, csv: CsvConfig) -> Self {
        self.csv = csv;
        self
    }

    /// Builder pattern: prefix the CSV with `#` metadata comments
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Run one full cycle for `snapshot`
    ///
    /// # Errors
    ///
    /// - [`Error::Parameter`] for an out-of-range input or a repeated depth
    /// - [`Error::Export`] if the CSV configuration is invalid
    pub fn refresh(&self, snapshot: &ParameterSnapshot) -> Result<CycleOutput> {
        snapshot.validate()?;

        let parameters = snapshot.transport_parameters()?;
        let scenario = Scenario::new(Box::new(ErfcDecayModel::new(parameters)), snapshot.depth_set()?);
        let result = self.solver.solve(&scenario, &snapshot.solver_configuration())?;

        let table = ExportTable::from_result(&result)?;
        let mut csv = self.csv.clone();
        if self.include_metadata {
            csv = csv.with_metadata(CsvMetadata::from_simulation(&result, &parameters));
        }
        let export = CsvExporter::new(csv).payload(&table)?;

        info!(
            "Refreshed: C0={} mg/L, D={} cm²/day, k={} 1/day, t_max={} days, {} depth(s), {} bytes of CSV",
            parameters.source_concentration(),
            parameters.dispersion(),
            parameters.decay(),
            snapshot.t_max,
            result.len(),
            export.body.len()
        );

        Ok(CycleOutput {
            parameters,
            result,
            export,
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================
