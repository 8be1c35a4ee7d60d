//! Read-side chart rendering of the stored price history.
//!
//! Reads the whole prices table, groups rows by asset, and draws one line
//! series per asset against time. Purely read-only; it can run at any point,
//! including while the ETL loop is writing, with visibility governed by
//! SQLite's own locking.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use plotters::prelude::*;

use crate::config::TIMESTAMP_FORMAT;
use crate::storage;

/// What a render call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The store held no rows; nothing was drawn
    NoData,
    /// A chart was written with this many series and total points
    Rendered { series: usize, points: usize },
}

/// Render the full price history of `db_path` as an SVG line chart at
/// `out_path`. An empty or missing table yields [`RenderOutcome::NoData`]
/// without touching the output path.
pub fn render(db_path: &str, out_path: &str) -> Result<RenderOutcome> {
    let rows = storage::read_all(db_path)?;
    if rows.is_empty() {
        return Ok(RenderOutcome::NoData);
    }

    // Group by asset in first-seen order, one polyline per asset
    let mut series: Vec<(String, Vec<(NaiveDateTime, f64)>)> = Vec::new();
    for row in &rows {
        let ts = NaiveDateTime::parse_from_str(&row.captured_at, TIMESTAMP_FORMAT)
            .with_context(|| format!("bad capture stamp {:?} for {}", row.captured_at, row.asset))?;
        if let Some(entry) = series.iter_mut().find(|entry| entry.0 == row.asset) {
            entry.1.push((ts, row.price_usd));
        } else {
            series.push((row.asset.clone(), vec![(ts, row.price_usd)]));
        }
    }

    let mut min_t = series[0].1[0].0;
    let mut max_t = min_t;
    let mut min_p = series[0].1[0].1;
    let mut max_p = min_p;
    for (_, points) in &series {
        for &(t, p) in points {
            min_t = min_t.min(t);
            max_t = max_t.max(t);
            min_p = min_p.min(p);
            max_p = max_p.max(p);
        }
    }

    // A single-cycle store collapses either axis to a point; pad so the
    // coordinate ranges stay non-degenerate
    if min_t == max_t {
        max_t = max_t + chrono::Duration::minutes(1);
    }
    let pad = ((max_p - min_p) * 0.05).max(max_p.abs().max(1.0) * 0.01);

    let root = SVGBackend::new(out_path, (1024, 512)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Crypto Prices Over Time", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(70)
        .y_label_area_size(70)
        .build_cartesian_2d(
            plotters::coord::types::RangedDateTime::from(min_t..max_t),
            (min_p - pad)..(max_p + pad),
        )?;

    chart
        .configure_mesh()
        .x_desc("Timestamp")
        .y_desc("Price (USD)")
        .x_label_style(("sans-serif", 13).into_font().transform(FontTransform::Rotate90))
        .x_label_formatter(&|t: &NaiveDateTime| t.format("%m-%d %H:%M").to_string())
        .draw()?;

    for (idx, (asset, points)) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))?
            .label(asset.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x - 12, y), (x, y)], color));
        chart.draw_series(
            points
                .iter()
                .map(|&(t, p)| Circle::new((t, p), 3, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(RenderOutcome::Rendered {
        series: series.len(),
        points: rows.len(),
    })
}
