//! IPC comparison chart.
//!
//! Grouped bar chart with one group per workload and one bar per
//! experiment (or experiment/configuration), written as SVG.

use super::table::{Column, ComparisonTable};
use crate::common::{AnalysisError, Result};
use plotters::prelude::*;
use std::fmt::Display;
use std::path::Path;

const SIZE: (u32, u32) = (1200, 600);

fn chart_err<E: Display>(e: E) -> AnalysisError {
    AnalysisError::Chart(e.to_string())
}

/// Draws IPC per workload, one series per experiment or configuration.
pub fn render_ipc_chart(table: &ComparisonTable, path: &Path) -> Result<()> {
    let series = table.series();
    let workloads = table.workloads();
    if workloads.is_empty() {
        return Err(AnalysisError::Chart("no data to plot".to_string()));
    }

    // One empty slot between workload groups.
    let stride = series.len() + 1;
    let slots = workloads.len() * stride;
    let label_slot = series.len().saturating_sub(1) / 2;

    let y_max = table
        .rows()
        .iter()
        .map(|r| r.value(Column::Ipc))
        .fold(0.0_f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "IPC Comparison Across Experiments and Workloads",
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..slots as i32).into_segmented(), 0.0..y_max)
        .map_err(chart_err)?;

    let x_label = |v: &SegmentValue<i32>| match v {
        SegmentValue::Exact(s) | SegmentValue::CenterOf(s) => {
            let s = *s as usize;
            if s % stride == label_slot {
                workloads.get(s / stride).map_or(String::new(), |w| w.to_string())
            } else {
                String::new()
            }
        }
        SegmentValue::Last => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&x_label)
        .x_desc("Workload")
        .y_desc("Instructions Per Cycle (IPC)")
        .draw()
        .map_err(chart_err)?;

    for (i, name) in series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let bars = workloads.iter().enumerate().filter_map(|(w, workload)| {
            let ipc = table.find_series(name, workload)?.value(Column::Ipc);
            let x = (w * stride + i) as i32;
            Some(Rectangle::new(
                [(SegmentValue::Exact(x), 0.0), (SegmentValue::Exact(x + 1), ipc)],
                color.filled(),
            ))
        });
        chart
            .draw_series(bars)
            .map_err(chart_err)?
            .label(name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
