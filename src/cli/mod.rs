//! Command-line front end for `contam-sim`
//!
//! Parameters come from the defaults, optionally replaced by a JSON file
//! (`--params`), then by individual flags. One refresh cycle runs, the CSV is
//! written to `--out-dir` (or printed with `--stdout`) and the plot is
//! rendered when `--plot` names a file.
//!
//! ```text
//! contam-sim --c0 250 --dispersion 20 --depths 10,30,50 --plot breakthrough.svg
//! ```

pub mod logging;

use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use crate::error::Result;
use crate::output::visualization::PlotConfig;
use crate::simulator::{CycleOutput, ParameterSnapshot, Simulator};

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "contam-sim")]
#[command(about = "Evaluate 1D contaminant transport with dispersion and decay, export CSV and plot")]
pub struct Args {
    /// JSON parameter file; missing fields take their defaults
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Source concentration C0 in mg/L [10, 500]
    #[arg(long, allow_negative_numbers = true)]
    pub c0: Option<f64>,

    /// Dispersion coefficient D in cm²/day [1, 100]
    #[arg(long, allow_negative_numbers = true)]
    pub dispersion: Option<f64>,

    /// Decay coefficient k in 1/day [0, 0.2]
    #[arg(long, allow_negative_numbers = true)]
    pub decay: Option<f64>,

    /// Upper bound of the time grid in days [10, 300]
    #[arg(long = "t-max", allow_negative_numbers = true)]
    pub t_max: Option<f64>,

    /// Comma-separated depths in cm, from 10, 30, 50, 70, 90
    #[arg(long, value_delimiter = ',')]
    pub depths: Option<Vec<f64>>,

    /// Directory the CSV file is written to
    #[arg(long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,

    /// Render the plot to this file (.png or .svg)
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Prefix the CSV with `#` metadata comment lines
    #[arg(long)]
    pub metadata: bool,

    /// Print the CSV to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log-level")]
    pub log_level: Option<String>,
}

impl Args {
    /// Parameter snapshot after applying the file and the flag overrides
    pub fn snapshot(&self) -> Result<ParameterSnapshot> {
        let mut snapshot = match &self.params {
            Some(path) => {
                info!("Loading parameters from {}", path.display());
                ParameterSnapshot::from_json_file(path)?
            }
            None => ParameterSnapshot::default(),
        };

        if let Some(c0) = self.c0 {
            snapshot.source_concentration = c0;
        }
        if let Some(d) = self.dispersion {
            snapshot.dispersion = d;
        }
        if let Some(k) = self.decay {
            snapshot.decay = k;
        }
        if let Some(t_max) = self.t_max {
            snapshot.t_max = t_max;
        }
        if let Some(depths) = &self.depths {
            snapshot.depths = depths.clone();
        }

        Ok(snapshot)
    }
}

/// Run one cycle and deliver its outputs
pub fn run(args: &Args) -> Result<CycleOutput> {
    let snapshot = args.snapshot()?;
    let cycle = Simulator::new().with_metadata(args.metadata).refresh(&snapshot)?;

    if args.stdout {
        print!("{}", cycle.export.body);
    } else {
        let path = deliver_csv(&cycle, &args.out_dir)?;
        info!("CSV written to {} ({})", path.display(), cycle.export.mime_type);
    }

    if let Some(plot_path) = &args.plot {
        cycle.render_plot(plot_path, Some(&PlotConfig::default()))?;
    }

    Ok(cycle)
}

fn deliver_csv(cycle: &CycleOutput, out_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir)?;
    Ok(cycle.export.write_into(out_dir)?)
}

// =================================================================================================
// Tests
// =================================================================================================
