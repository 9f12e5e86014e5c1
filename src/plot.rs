// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Ledger metrics over time, one line chart per metric.

use crate::errors::{Error, Result};
use crate::models::Transaction;
use chrono::{Duration, NaiveDate};
use plotters::backend::{BitMapBackend, DrawingBackend, SVGBackend};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use std::str::FromStr;

const TITLE: &str = "Gold Metrics Over Time";
const SIZE: (u32, u32) = (1000, 600);
const LABEL_SIZE: i32 = 16;
const MARKER_SIZE: i32 = 8;
const DASH: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Svg,
    Png,
}

impl ChartFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Svg => "svg",
            ChartFormat::Png => "png",
        }
    }
}

impl FromStr for ChartFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(ChartFormat::Svg),
            "png" => Ok(ChartFormat::Png),
            other => Err(format!("Unknown chart format '{}' (use svg|png)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Rate,
    Quantity,
    Cost,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Rate, Metric::Quantity, Metric::Cost];

    pub fn value(&self, t: &Transaction) -> f64 {
        match self {
            Metric::Rate => t.rate,
            Metric::Quantity => t.quantity,
            Metric::Cost => t.cost,
        }
    }

    pub fn series_label(&self) -> &'static str {
        match self {
            Metric::Rate => "Gram Per CHF",
            Metric::Quantity => "Quantity Purchased",
            Metric::Cost => "Cost",
        }
    }

    pub fn y_desc(&self) -> &'static str {
        match self {
            Metric::Rate => "CHF Per Gram",
            Metric::Quantity => "Quantity Purchased",
            Metric::Cost => "Cost",
        }
    }

    pub fn color(&self) -> RGBColor {
        match self {
            Metric::Rate => BLUE,
            Metric::Quantity => GREEN,
            Metric::Cost => RED,
        }
    }

    pub fn file_stem(&self) -> &'static str {
        match self {
            Metric::Rate => "rate",
            Metric::Quantity => "quantity",
            Metric::Cost => "cost",
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rate" => Ok(Metric::Rate),
            "quantity" => Ok(Metric::Quantity),
            "cost" => Ok(Metric::Cost),
            other => Err(format!("Unknown metric '{}' (use rate|quantity|cost)", other)),
        }
    }
}

/// Points for `metric`, ordered by date. Rows sharing a date keep ledger order.
pub fn series(rows: &[Transaction], metric: Metric) -> Vec<(NaiveDate, f64)> {
    let mut sorted: Vec<&Transaction> = rows.iter().collect();
    sorted.sort_by_key(|t| t.date);
    sorted
        .into_iter()
        .map(|t| (t.date, metric.value(t)))
        .collect()
}

pub fn draw(rows: &[Transaction], metric: Metric, path: &Path, format: ChartFormat) -> Result<()> {
    let points = series(rows, metric);
    if points.is_empty() {
        return Err(Error::NothingToPlot);
    }
    // A NaN or infinite value would give plotters an unusable axis range
    if let Some((d, v)) = points.iter().find(|(_, v)| !v.is_finite()) {
        return Err(Error::Plot(format!(
            "{} on {} is not a finite number ({})",
            metric.series_label(),
            d,
            v
        )));
    }
    match format {
        ChartFormat::Svg => {
            let root = SVGBackend::new(path, SIZE).into_drawing_area();
            render(&root, &points, metric)
        }
        ChartFormat::Png => {
            let root = BitMapBackend::new(path, SIZE).into_drawing_area();
            render(&root, &points, metric)
        }
    }
}

fn plot_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Plot(e.to_string())
}

fn render<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    points: &[(NaiveDate, f64)],
    metric: Metric,
) -> Result<()> {
    let first = points.first().ok_or(Error::NothingToPlot)?.0;
    // x is days since the first date so the axis needs no date ranged type
    let xs: Vec<(i32, f64)> = points
        .iter()
        .map(|(d, v)| ((*d - first).num_days() as i32, *v))
        .collect();
    let span = xs.last().map(|p| p.0).unwrap_or(0);
    let min = xs.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max = xs.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    let pad = if max - min > 0.0 {
        (max - min) * 0.1
    } else {
        max.abs().max(1.0) * 0.1
    };

    root.fill(&WHITE).map_err(plot_err)?;
    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, ("sans-serif", 30).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(-1..span + 1, (min - pad)..(max + pad))
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc(metric.y_desc())
        .label_style(("sans-serif", LABEL_SIZE))
        .x_label_formatter(&|d| {
            (first + Duration::days(*d as i64))
                .format("%Y-%m-%d")
                .to_string()
        })
        .draw()
        .map_err(plot_err)?;

    let color = metric.color();
    chart
        .draw_series(DashedLineSeries::new(
            xs.iter().copied(),
            DASH,
            DASH / 2,
            color.stroke_width(2),
        ))
        .map_err(plot_err)?
        .label(metric.series_label())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    chart
        .draw_series(
            xs.iter()
                .map(|&(x, y)| Circle::new((x, y), MARKER_SIZE, color.filled())),
        )
        .map_err(plot_err)?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)
}
