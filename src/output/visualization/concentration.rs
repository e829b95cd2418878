//! Concentration-versus-time plots
//!
//! One line per depth, x = time (days), y = concentration (mg/L), with a
//! legend keyed by the same depth labels used as CSV column headers.
//!
//! Two entry points:
//!
//! - [`plot_lines`]: the plot as data, for renderers other than plotters
//! - [`plot_concentration`]: render with plotters to PNG or SVG
//!
//! # Usage
//!
//! ```rust,ignore
//! use contam_rs::output::visualization::plot_concentration;
//!
//! let result = solver.solve(&scenario, &config)?;
//! plot_concentration(&result, "breakthrough.svg", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::PlotConfig;
use crate::solver::SimulationResult;

/// One plotted line: legend label and `(time, concentration)` points
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLine {
    /// Legend label (e.g. `"Depth 10 cm"`)
    pub label: String,

    /// `(time, concentration)` pairs in time order
    pub points: Vec<(f64, f64)>,
}

/// Build one line per depth series, in selection order
pub fn plot_lines(result: &SimulationResult) -> Vec<PlotLine> {
    result
        .series
        .iter()
        .map(|s| PlotLine {
            label: s.label.clone(),
            points: result.time_grid.iter().zip(s.values.iter()).collect(),
        })
        .collect()
}

/// Plot concentration against time for every depth of a result
///
/// # Arguments
///
/// * `result`     : Simulation result (time grid + one series per depth)
/// * `output_path`: Output file path (`.svg` → vector, anything else → bitmap)
/// * `config`     : Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if the backend cannot write to `output_path`.
pub fn plot_concentration(
    result: &SimulationResult,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    let lines = plot_lines(result);
    let max_time = result.time_grid.last();
    let max_conc = result.max_concentration().unwrap_or(0.0).max(1e-10);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_concentration_impl(backend, &lines, config, max_time, max_conc)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_concentration_impl(backend, &lines, config, max_time, max_conc)
        }
    }
}

// =================================================================================================
// Private Plot Implementation
// =================================================================================================

fn plot_concentration_impl<DB: DrawingBackend>(
    backend: DB,
    lines: &[PlotLine],
    config: &PlotConfig,
    max_time: f64,
    max_conc: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 32).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..max_time, 0.0..(max_conc * 1.1))?;

    let x_formatter = |x: &f64| format!("{:.0}", x);
    let y_formatter = |y: &f64| format!("{:.2}", y);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(config.xlabel.as_str())
        .y_desc(config.ylabel.as_str())
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    for (idx, line) in lines.iter().enumerate() {
        let color = config.series_color(idx);

        chart
            .draw_series(LineSeries::new(
                line.points.iter().copied(),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(line.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    if !lines.is_empty() {
        chart
            .configure_series_labels()
            .background_style(&config.background.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
