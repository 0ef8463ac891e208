//! Decade-change bar charts
//!
//! Two grouped bar charts over the decade spans: absolute change and
//! percent change. Bars are grouped by span on the x axis with one bar
//! per fuel, using the same palette as the trend chart. Span labels are
//! drawn manually under each group center so the categorical axis stays
//! aligned regardless of tick placement.

use std::collections::BTreeSet;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::palette::FUEL_PALETTE;
use super::style::FigureStyle;
use super::{render_err, style};
use crate::data::ChangeRecord;
use crate::error::{Error, Result};

/// Render the absolute-change bar chart (quadrillion BTU per decade).
pub fn render_absolute(records: &[ChangeRecord], path: &Path, attribution: &str) -> Result<()> {
    render_bars(
        records,
        style::ABSOLUTE_CHANGE,
        path,
        attribution,
        |r| Some(r.absolute),
        false,
    )
}

/// Render the percent-change bar chart. Bars whose rate is undefined
/// (zero prior value) are skipped; y ticks are formatted as percentages.
pub fn render_percent(records: &[ChangeRecord], path: &Path, attribution: &str) -> Result<()> {
    render_bars(
        records,
        style::PERCENT_CHANGE,
        path,
        attribution,
        |r| r.percent,
        true,
    )
}

fn render_bars(
    records: &[ChangeRecord],
    fig: FigureStyle,
    path: &Path,
    attribution: &str,
    value_of: impl Fn(&ChangeRecord) -> Option<f64>,
    percent_ticks: bool,
) -> Result<()> {
    if records.is_empty() {
        return Err(Error::Render(
            "no change records to plot in bar chart".to_string(),
        ));
    }

    // Span labels sort correctly as strings (4-digit years)
    let spans: Vec<String> = records
        .iter()
        .map(|r| r.span.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let n_spans = spans.len();

    // Y extent over the plotted values, always including zero
    let mut lo = 0.0f64;
    let mut hi = 0.0f64;
    for record in records {
        if let Some(v) = value_of(record) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if lo == hi {
        hi = lo + 1.0;
    }
    let pad = 0.05 * (hi - lo);
    let (y_lo, y_hi) = (lo - pad, hi + pad);

    let (width, height) = (fig.width_px(), fig.height_px());
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(fig.px(8.0))
        .caption(
            fig.title,
            ("sans-serif", fig.px(fig.title_pt))
                .into_font()
                .style(FontStyle::Bold),
        )
        .x_label_area_size(fig.px(18.0))
        .y_label_area_size(fig.px(26.0))
        .build_cartesian_2d(0.0..n_spans as f64, y_lo..y_hi)
        .map_err(render_err)?;

    let grid = RGBColor(style::GRID_GRAY, style::GRID_GRAY, style::GRID_GRAY)
        .mix(style::GRID_OPACITY);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .light_line_style(&TRANSPARENT)
        .bold_line_style(&grid)
        .axis_style(&TRANSPARENT)
        .y_label_formatter(&move |v: &f64| {
            if percent_ticks {
                format!("{:.0}%", v * 100.0)
            } else {
                format!("{:.1}", v)
            }
        })
        .label_style(("sans-serif", fig.px(fig.tick_pt)))
        .draw()
        .map_err(render_err)?;

    // Grouped bars: each span owns [i, i+1), the fuel group fills the
    // central 80% of it
    let n_fuels = FUEL_PALETTE.len().max(1) as f64;
    let bar_width = 0.8 / n_fuels;
    let glyph = fig.px(8.0) as i32;

    for (fuel_idx, fuel) in FUEL_PALETTE.fuels().enumerate() {
        let rgb = FUEL_PALETTE.color_or_default(fuel);
        let color = RGBColor(rgb[0], rgb[1], rgb[2]);

        let bars: Vec<Rectangle<(f64, f64)>> = records
            .iter()
            .filter(|r| r.fuel == fuel)
            .filter_map(|r| {
                let value = value_of(r)?;
                let span_idx = spans.iter().position(|s| *s == r.span)?;
                let x0 = span_idx as f64 + 0.1 + fuel_idx as f64 * bar_width;
                let x1 = x0 + bar_width * 0.92;
                Some(Rectangle::new([(x0, 0.0), (x1, value)], color.filled()))
            })
            .collect();

        chart
            .draw_series(bars)
            .map_err(render_err)?
            .label(fuel)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - glyph / 2), (x + glyph, y + glyph / 2)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::MiddleRight)
        .border_style(&TRANSPARENT)
        .background_style(&WHITE.mix(0.6))
        .label_font(("sans-serif", fig.px(fig.legend_pt)))
        .draw()
        .map_err(render_err)?;

    // Span labels centered under each group
    let tick_style = TextStyle::from(("sans-serif", fig.px(fig.tick_pt)).into_font())
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (i, span) in spans.iter().enumerate() {
        let (label_x, _) = chart.backend_coord(&(i as f64 + 0.5, y_lo));
        let (_, bottom_y) = chart.backend_coord(&(0.0, y_lo));
        root.draw(&Text::new(
            span.clone(),
            (label_x, bottom_y + fig.px(3.0) as i32),
            tick_style.clone(),
        ))
        .map_err(render_err)?;
    }

    // Unit label (absolute chart only; the percent chart has none)
    if !fig.unit_label.is_empty() {
        root.draw(&Text::new(
            fig.unit_label,
            (fig.px(34.0) as i32, fig.px(30.0) as i32),
            ("sans-serif", fig.px(fig.label_pt)).into_font(),
        ))
        .map_err(render_err)?;
    }

    let attr_style = TextStyle::from(
        ("sans-serif", fig.px(10.0))
            .into_font()
            .style(FontStyle::Italic),
    )
    .pos(Pos::new(HPos::Right, VPos::Bottom));
    root.draw(&Text::new(
        attribution.to_string(),
        ((width - fig.px(6.0)) as i32, (height - fig.px(2.0)) as i32),
        attr_style,
    ))
    .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}
