//! Bar chart rendering for the report.

use std::path::Path;

use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use tracing::info;

use crate::errors::CorsinatorError;

/// Renders the two-bar vulnerability chart PNG, overwriting any
/// existing file at `path`.
pub fn render(vulnerable: usize, non_vulnerable: usize, path: &Path) -> Result<(), CorsinatorError> {
    draw(vulnerable, non_vulnerable, path).map_err(|e| CorsinatorError::Chart(e.to_string()))?;
    info!("Chart saved to {}", path.display());
    Ok(())
}

fn draw(
    vulnerable: usize,
    non_vulnerable: usize,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = vulnerable.max(non_vulnerable).max(1) as i32 + 1;
    let mut chart = ChartBuilder::on(&root)
        .caption("CORS Vulnerability Report", ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(48)
        .build_cartesian_2d((0i32..1i32).into_segmented(), 0i32..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Number of URLs")
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(0) => "Vulnerable".to_string(),
            SegmentValue::CenterOf(1) => "Non-vulnerable".to_string(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(RED.mix(0.7).filled())
            .margin(40)
            .data([(0, vulnerable as i32), (1, non_vulnerable as i32)]),
    )?;

    root.present()?;
    Ok(())
}
