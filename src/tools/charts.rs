//! Chart tools
//!
//! Render the weight trend and macro breakdown charts as PNG images.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat, RgbImage};
use serde::{Deserialize, Serialize};

use crate::models::MacroTargets;
use crate::nutrition::{macro_breakdown, MacroBreakdown};

// ============================================================================
// Color Constants (RGB 0-255)
// ============================================================================

const COLOR_PROTEIN: (u8, u8, u8) = (76, 175, 80);   // Green
const COLOR_CARBS: (u8, u8, u8) = (33, 150, 243);    // Blue
const COLOR_FAT: (u8, u8, u8) = (255, 152, 0);       // Orange
const COLOR_WEIGHT: (u8, u8, u8) = (76, 175, 80);

pub const DEFAULT_CHART_WIDTH: u32 = 800;
pub const DEFAULT_CHART_HEIGHT: u32 = 400;

const MACRO_LABELS: [&str; 3] = ["Protein", "Carbohydrate", "Fat"];

/// One point of the weight trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightPoint {
    pub label: String,
    pub weight_kg: f64,
}

/// Sample series shown before a user has any history
pub fn sample_weight_series() -> Vec<WeightPoint> {
    [
        ("Jan", 75.0),
        ("Feb", 74.2),
        ("Mar", 73.8),
        ("Apr", 73.1),
        ("May", 72.5),
        ("Jun", 71.9),
        ("Jul", 71.2),
        ("Aug", 70.8),
    ]
    .iter()
    .map(|(label, weight_kg)| WeightPoint {
        label: label.to_string(),
        weight_kg: *weight_kg,
    })
    .collect()
}

/// Response for the chart tools
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub chart: String,
    pub width: u32,
    pub height: u32,
    pub mime_type: &'static str,
    pub file_path: Option<String>,
    #[serde(skip)]
    pub png_base64: String,
}

// ============================================================================
// Chart Generation (plotters)
// ============================================================================

/// Y axis bounds with one kilogram of padding either side
pub fn weight_axis_range(points: &[WeightPoint]) -> Option<(f64, f64)> {
    if points.is_empty() {
        return None;
    }
    let min = points.iter().map(|p| p.weight_kg).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.weight_kg).fold(f64::NEG_INFINITY, f64::max);
    Some(((min - 1.0).floor(), (max + 1.0).ceil()))
}

/// Generate the weight trend line chart as PNG bytes
pub fn generate_weight_chart(points: &[WeightPoint], width: u32, height: u32) -> Result<Vec<u8>, String> {
    use plotters::prelude::*;

    let (y_min, y_max) = weight_axis_range(points).ok_or("No data to chart")?;
    if points.iter().any(|p| !p.weight_kg.is_finite() || p.weight_kg <= 0.0) {
        return Err("Weights must be positive numbers".to_string());
    }

    let mut buffer = vec![0u8; (width * height * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0..(points.len() as i32), y_min..y_max)
            .map_err(|e| e.to_string())?;

        chart.configure_mesh()
            .disable_x_mesh()
            .x_labels(points.len().min(12))
            .x_label_formatter(&|x| {
                if *x >= 0 && (*x as usize) < points.len() {
                    points[*x as usize].label.clone()
                } else {
                    String::new()
                }
            })
            .y_desc("Weight (kg)")
            .draw()
            .map_err(|e| e.to_string())?;

        let color = RGBColor(COLOR_WEIGHT.0, COLOR_WEIGHT.1, COLOR_WEIGHT.2);
        let series: Vec<(i32, f64)> = points.iter()
            .enumerate()
            .map(|(i, p)| (i as i32, p.weight_kg))
            .collect();

        chart.draw_series(AreaSeries::new(series.clone(), y_min, color.mix(0.1)))
            .map_err(|e| e.to_string())?;

        chart.draw_series(LineSeries::new(series.clone(), color.stroke_width(2)))
            .map_err(|e| e.to_string())?;

        chart.draw_series(series.iter().map(|(x, y)| {
            Circle::new((*x, *y), 4, color.filled())
        })).map_err(|e| e.to_string())?;

        root.present().map_err(|e| e.to_string())?;
    }

    encode_png(buffer, width, height)
}

/// Generate the macro breakdown bar chart (percent of calories) as PNG bytes
pub fn generate_macro_chart(targets: &MacroTargets, width: u32, height: u32) -> Result<Vec<u8>, String> {
    use plotters::prelude::*;

    if targets.protein_grams < 0 || targets.carb_grams < 0 || targets.fat_grams < 0 {
        return Err("Macro grams must not be negative".to_string());
    }
    let breakdown = macro_breakdown(targets).ok_or("No data to chart")?;
    let shares = macro_shares(&breakdown);

    let mut buffer = vec![0u8; (width * height * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d((0..(shares.len() as i32)).into_segmented(), 0.0..100.0)
            .map_err(|e| e.to_string())?;

        chart.configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) => MACRO_LABELS
                    .get(*i as usize)
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .y_desc("% of calories")
            .draw()
            .map_err(|e| e.to_string())?;

        chart.draw_series(shares.iter().enumerate().map(|(i, (pct, rgb))| {
            let x = i as i32;
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(x), 0.0), (SegmentValue::Exact(x + 1), *pct)],
                RGBColor(rgb.0, rgb.1, rgb.2).filled(),
            );
            bar.set_margin(0, 0, 15, 15);
            bar
        })).map_err(|e| e.to_string())?;

        root.present().map_err(|e| e.to_string())?;
    }

    encode_png(buffer, width, height)
}

fn macro_shares(breakdown: &MacroBreakdown) -> [(f64, (u8, u8, u8)); 3] {
    [
        (breakdown.protein_percent, COLOR_PROTEIN),
        (breakdown.carbs_percent, COLOR_CARBS),
        (breakdown.fat_percent, COLOR_FAT),
    ]
}

/// Convert an RGB buffer to PNG
fn encode_png(buffer: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, String> {
    let img = RgbImage::from_raw(width, height, buffer)
        .ok_or("Failed to create image from buffer")?;

    let mut png_bytes = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| e.to_string())?;

    Ok(png_bytes)
}

// ============================================================================
// Chart Tools
// ============================================================================

fn finish_chart(
    chart: &str,
    png_bytes: Vec<u8>,
    width: u32,
    height: u32,
    output_path: Option<&str>,
) -> Result<ChartResponse, String> {
    if let Some(path) = output_path {
        let path = Path::new(path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory: {}", e))?;
        }
        std::fs::write(path, &png_bytes)
            .map_err(|e| format!("Failed to write chart: {}", e))?;
        tracing::info!("Wrote {} chart to {}", chart, path.display());
    }

    Ok(ChartResponse {
        chart: chart.to_string(),
        width,
        height,
        mime_type: "image/png",
        file_path: output_path.map(str::to_string),
        png_base64: STANDARD.encode(&png_bytes),
    })
}

/// Render the weight trend, using the sample series when no points are given
pub fn render_weight_chart(
    points: Option<Vec<WeightPoint>>,
    output_path: Option<&str>,
) -> Result<ChartResponse, String> {
    let points = points.unwrap_or_else(sample_weight_series);
    let png = generate_weight_chart(&points, DEFAULT_CHART_WIDTH, DEFAULT_CHART_HEIGHT)?;
    finish_chart("weight_trend", png, DEFAULT_CHART_WIDTH, DEFAULT_CHART_HEIGHT, output_path)
}

/// Render the macro breakdown of a set of daily targets
pub fn render_macro_chart(
    targets: &MacroTargets,
    output_path: Option<&str>,
) -> Result<ChartResponse, String> {
    let png = generate_macro_chart(targets, DEFAULT_CHART_WIDTH, DEFAULT_CHART_HEIGHT)?;
    finish_chart("macro_breakdown", png, DEFAULT_CHART_WIDTH, DEFAULT_CHART_HEIGHT, output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_series() {
        let series = sample_weight_series();
        assert_eq!(series.len(), 8);
        assert_eq!(series[0].weight_kg, 75.0);
        assert_eq!(series[7].label, "Aug");
    }

    #[test]
    fn test_weight_axis_range() {
        assert_eq!(weight_axis_range(&sample_weight_series()), Some((69.0, 76.0)));
        assert_eq!(weight_axis_range(&[]), None);
    }

    #[test]
    fn test_empty_weight_chart_is_error() {
        let err = generate_weight_chart(&[], 100, 100).unwrap_err();
        assert_eq!(err, "No data to chart");
    }

    #[test]
    fn test_invalid_weight_rejected() {
        let points = vec![WeightPoint { label: "Jan".to_string(), weight_kg: -3.0 }];
        assert!(generate_weight_chart(&points, 100, 100).is_err());
    }

    #[test]
    fn test_empty_macro_chart_is_error() {
        let targets = MacroTargets { calories: 0, protein_grams: 0, carb_grams: 0, fat_grams: 0 };
        assert!(render_macro_chart(&targets, None).is_err());
    }

    #[test]
    fn test_negative_macro_grams_rejected() {
        let targets = MacroTargets { calories: 1000, protein_grams: 200, carb_grams: -50, fat_grams: 30 };
        let err = render_macro_chart(&targets, None).unwrap_err();
        assert_eq!(err, "Macro grams must not be negative");
    }

    #[test]
    fn test_macro_shares_order() {
        let breakdown = MacroBreakdown { protein_percent: 25.0, carbs_percent: 45.0, fat_percent: 30.0 };
        let shares = macro_shares(&breakdown);
        assert_eq!(shares[0], (25.0, COLOR_PROTEIN));
        assert_eq!(shares[1], (45.0, COLOR_CARBS));
        assert_eq!(shares[2], (30.0, COLOR_FAT));
    }
}
