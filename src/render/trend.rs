//! Long-run consumption trend chart
//!
//! One line per fuel category across all years, clipped to the fixed
//! axis ranges in `style`, with the palette's deterministic colors.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::palette::FUEL_PALETTE;
use super::{render_err, style};
use crate::data::Observation;
use crate::error::{Error, Result};

/// Render the multi-series line chart to a PNG file.
pub fn render(observations: &[Observation], path: &Path, attribution: &str) -> Result<()> {
    if observations.is_empty() {
        return Err(Error::Render(
            "no observations to plot in trend chart".to_string(),
        ));
    }

    let fig = style::TREND;
    let (width, height) = (fig.width_px(), fig.height_px());

    // One point series per fuel, in palette draw order
    let mut series: Vec<(&str, [u8; 3], Vec<(f64, f64)>)> = FUEL_PALETTE
        .fuels()
        .map(|fuel| (fuel, FUEL_PALETTE.color_or_default(fuel), Vec::new()))
        .collect();
    for obs in observations {
        if let Some(idx) = FUEL_PALETTE.index_of(&obs.fuel) {
            series[idx].2.push((obs.year as f64, obs.value));
        }
    }
    for (_, _, points) in &mut series {
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
    }

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
        .x_label_area_size(fig.px(16.0))
        .y_label_area_size(fig.px(24.0))
        .build_cartesian_2d(
            style::TREND_X_RANGE.0..style::TREND_X_RANGE.1,
            style::TREND_Y_RANGE.0..style::TREND_Y_RANGE.1,
        )
        .map_err(render_err)?;

    // Horizontal gridlines only, no axis spines
    let grid = RGBColor(style::GRID_GRAY, style::GRID_GRAY, style::GRID_GRAY)
        .mix(style::GRID_OPACITY);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(&TRANSPARENT)
        .bold_line_style(&grid)
        .axis_style(&TRANSPARENT)
        .x_label_formatter(&|v: &f64| format!("{:.0}", v))
        .y_label_formatter(&|v: &f64| format!("{:.0}", v))
        .label_style(("sans-serif", fig.px(fig.tick_pt)))
        .draw()
        .map_err(render_err)?;

    let stroke = fig.px(1.8);
    let glyph = fig.px(14.0) as i32;
    for (fuel, rgb, points) in &series {
        if points.is_empty() {
            continue;
        }
        let color = RGBColor(rgb[0], rgb[1], rgb[2]);
        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(stroke),
            ))
            .map_err(render_err)?
            .label(*fuel)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + glyph, y)], color.stroke_width(stroke))
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

    // Unit label under the title, left-aligned with the plot area
    root.draw(&Text::new(
        fig.unit_label,
        (fig.px(34.0) as i32, fig.px(30.0) as i32),
        ("sans-serif", fig.px(fig.label_pt)).into_font(),
    ))
    .map_err(render_err)?;

    // Italic attribution in the bottom-right corner
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("trend.png");
        let err = render(&[], &out, "Plot created by test").unwrap_err();
        assert!(matches!(err, Error::Render(_)));
        assert!(!out.exists());
    }
}
