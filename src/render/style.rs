//! Static figure styling
//!
//! All chart cosmetics live here as one configuration table per figure:
//! canvas size, font point sizes, titles, axis clips, grid color. Nothing
//! in the renderers hardcodes a size or label.

/// Output raster density. Pixel dimensions are inches × DPI.
pub const DPI: f64 = 600.0;

/// Trend chart x-axis clip (years)
pub const TREND_X_RANGE: (f64, f64) = (1635.0, 2017.0);

/// Trend chart y-axis clip (quadrillion BTU)
pub const TREND_Y_RANGE: (f64, f64) = (0.0, 45.0);

/// Horizontal gridline gray level (0-255) and opacity
pub const GRID_GRAY: u8 = 128;
pub const GRID_OPACITY: f64 = 0.3;

/// Styling for one figure
#[derive(Debug, Clone, Copy)]
pub struct FigureStyle {
    pub width_in: f64,
    pub height_in: f64,
    pub title: &'static str,
    pub unit_label: &'static str,
    pub title_pt: f64,
    pub label_pt: f64,
    pub tick_pt: f64,
    pub legend_pt: f64,
}

impl FigureStyle {
    pub fn width_px(&self) -> u32 {
        (self.width_in * DPI).round() as u32
    }

    pub fn height_px(&self) -> u32 {
        (self.height_in * DPI).round() as u32
    }

    /// Convert a font point size to pixels at the figure's DPI
    pub fn px(&self, pt: f64) -> u32 {
        (pt * DPI / 72.0).round() as u32
    }
}

/// Long-run consumption line chart
pub const TREND: FigureStyle = FigureStyle {
    width_in: 8.2,
    height_in: 4.4,
    title: "US Primary Energy Consumption by Source (1635-2017)",
    unit_label: "Quadrillion British Thermal Units",
    title_pt: 20.0,
    label_pt: 15.0,
    tick_pt: 11.0,
    legend_pt: 12.0,
};

/// Absolute decade-change bar chart
pub const ABSOLUTE_CHANGE: FigureStyle = FigureStyle {
    width_in: 10.0,
    height_in: 5.6,
    title: "Change in US Fuel Consumption by Source (1845-1905)",
    unit_label: "Quadrillion British Thermal Units",
    title_pt: 20.0,
    label_pt: 15.0,
    tick_pt: 11.0,
    legend_pt: 12.0,
};

/// Percent decade-change bar chart
pub const PERCENT_CHANGE: FigureStyle = FigureStyle {
    width_in: 10.0,
    height_in: 5.6,
    title: "Percent Change in US Fuel Consumption by Source (1845-1905)",
    unit_label: "",
    title_pt: 20.0,
    label_pt: 15.0,
    tick_pt: 11.0,
    legend_pt: 12.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_dimensions_at_600_dpi() {
        assert_eq!(TREND.width_px(), 4920);
        assert_eq!(TREND.height_px(), 2640);
        assert_eq!(ABSOLUTE_CHANGE.width_px(), 6000);
        assert_eq!(ABSOLUTE_CHANGE.height_px(), 3360);
    }

    #[test]
    fn test_point_to_pixel_scaling() {
        // 72pt = 1in = DPI pixels
        assert_eq!(TREND.px(72.0), 600);
        assert_eq!(TREND.px(20.0), 167);
    }
}
