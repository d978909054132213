//! Weekly PDF report generation (printpdf)
//!
//! One portrait summary page with the fixed-column table, then one
//! landscape page per metric with its trend chart embedded.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::*;
use serde::Serialize;

use crate::models::DailyEntry;
use crate::report::charts::render_report_chart;
use crate::report::weekly::{series_for, summary_rows, Metric, SummaryRow};

const COLOR_TITLE: (u8, u8, u8) = (0, 112, 192);
const COLOR_BLACK: (u8, u8, u8) = (0, 0, 0);
const COLOR_GRAY: (u8, u8, u8) = (128, 128, 128);
const COLOR_ERROR: (u8, u8, u8) = (255, 0, 0);

// A4 page in mm
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 15.0;

#[derive(Debug, Serialize)]
pub struct WeeklyReport {
    pub file_path: PathBuf,
    pub days: usize,
    pub date_range: String,
}

fn rgb_to_printpdf(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        None,
    ))
}

fn add_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    x: Mm,
    y: Mm,
    size: f32,
    color: (u8, u8, u8),
) {
    layer.set_fill_color(rgb_to_printpdf(color.0, color.1, color.2));
    layer.use_text(text, size, x, y, font);
}

fn add_line(
    layer: &PdfLayerReference,
    x1: Mm,
    y1: Mm,
    x2: Mm,
    y2: Mm,
    color: (u8, u8, u8),
    width: f32,
) {
    layer.set_outline_color(rgb_to_printpdf(color.0, color.1, color.2));
    layer.set_outline_thickness(width);

    let line = Line {
        points: vec![(Point::new(x1, y1), false), (Point::new(x2, y2), false)],
        is_closed: false,
    };
    layer.add_line(line);
}

fn format_optional(value: Option<f64>, places: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", places, v),
        None => "-".to_string(),
    }
}

/// Generate the weekly PDF report for the given entries.
///
/// The file lands in `output_dir` as
/// `weekly_report_<start>_to_<end>.pdf`.
pub fn generate_weekly_report(
    entries: &[DailyEntry],
    start_date: &str,
    end_date: &str,
    output_dir: &Path,
) -> Result<WeeklyReport, String> {
    if entries.is_empty() {
        return Err(format!(
            "No diary entries found between {} and {}",
            start_date, end_date
        ));
    }

    let rows = summary_rows(entries);

    let (doc, page1, layer1) = PdfDocument::new(
        "Weekly Fitness Report",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| e.to_string())?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| e.to_string())?;

    let layer = doc.get_page(page1).get_layer(layer1);
    let mut y = PAGE_HEIGHT - 20.0;

    // Title
    add_text(
        &layer,
        &font_bold,
        "Weekly Fitness Report",
        Mm(MARGIN_LEFT),
        Mm(y),
        18.0,
        COLOR_TITLE,
    );
    y -= 10.0;

    add_text(
        &layer,
        &font,
        &format!("Week: {} to {}", start_date, end_date),
        Mm(MARGIN_LEFT),
        Mm(y),
        11.0,
        COLOR_BLACK,
    );
    let now = chrono::Local::now().format("%Y-%m-%d").to_string();
    add_text(
        &layer,
        &font,
        &format!("Generated: {}", now),
        Mm(130.0),
        Mm(y),
        11.0,
        COLOR_BLACK,
    );
    y -= 8.0;

    add_line(
        &layer,
        Mm(MARGIN_LEFT),
        Mm(y),
        Mm(PAGE_WIDTH - MARGIN_LEFT),
        Mm(y),
        COLOR_GRAY,
        0.5,
    );
    y -= 10.0;

    // Summary table
    let col_widths = [32.0, 28.0, 32.0, 28.0, 28.0, 20.0];
    let headers = ["Date", "Weight (kg)", "Calories", "Protein (g)", "Net Cal", "BMI"];

    let mut col_x = MARGIN_LEFT;
    for (i, header) in headers.iter().enumerate() {
        add_text(&layer, &font_bold, header, Mm(col_x), Mm(y), 9.0, COLOR_BLACK);
        col_x += col_widths[i];
    }
    y -= 6.0;

    for row in &rows {
        let SummaryRow {
            date,
            weight,
            total_calories,
            total_protein,
            net_calories,
            bmi,
        } = row;

        let values = [
            date.clone(),
            format_optional(*weight, 1),
            format!("{:.1}", total_calories),
            format!("{:.1}", total_protein),
            format!("{:.1}", net_calories),
            format_optional(*bmi, 2),
        ];

        col_x = MARGIN_LEFT;
        for (i, value) in values.iter().enumerate() {
            add_text(&layer, &font, value, Mm(col_x), Mm(y), 9.0, COLOR_BLACK);
            col_x += col_widths[i];
        }
        y -= 6.0;
    }

    // One landscape chart page per metric
    for metric in Metric::ALL {
        let (page, layer_idx) = doc.add_page(Mm(PAGE_HEIGHT), Mm(PAGE_WIDTH), "Chart Page");
        let chart_layer = doc.get_page(page).get_layer(layer_idx);

        let mut y2 = PAGE_WIDTH - 20.0;

        add_text(
            &chart_layer,
            &font_bold,
            metric.title(),
            Mm(MARGIN_LEFT),
            Mm(y2),
            16.0,
            COLOR_TITLE,
        );
        add_text(
            &chart_layer,
            &font,
            &format!("{} - {}", start_date, end_date),
            Mm(190.0),
            Mm(y2),
            11.0,
            COLOR_BLACK,
        );
        y2 -= 10.0;

        let series = series_for(entries, metric);
        match render_report_chart(&series, metric) {
            Ok(png_bytes) => {
                let dynamic_image = printpdf::image_crate::load_from_memory(&png_bytes)
                    .map_err(|e| e.to_string())?;
                let pdf_image = Image::from_dynamic_image(&dynamic_image);

                // 1000x400 pixels at 120 DPI = ~212mm x 85mm
                let transform = ImageTransform {
                    translate_x: Some(Mm(MARGIN_LEFT)),
                    translate_y: Some(Mm(y2 - 90.0)),
                    dpi: Some(120.0),
                    ..Default::default()
                };

                pdf_image.add_to_layer(chart_layer.clone(), transform);
            }
            Err(e) => {
                // A metric with no data (e.g. no weigh-ins this week)
                // still gets its page, with a note instead of a chart
                add_text(
                    &chart_layer,
                    &font,
                    &format!("Chart unavailable: {}", e),
                    Mm(MARGIN_LEFT),
                    Mm(y2 - 10.0),
                    9.0,
                    COLOR_ERROR,
                );
            }
        }
    }

    // Save PDF
    std::fs::create_dir_all(output_dir).map_err(|e| e.to_string())?;
    let file_path = output_dir.join(format!(
        "weekly_report_{}_to_{}.pdf",
        start_date, end_date
    ));

    let file = File::create(&file_path).map_err(|e| e.to_string())?;
    let mut writer = BufWriter::new(file);
    doc.save(&mut writer).map_err(|e| e.to_string())?;

    tracing::info!("wrote weekly report {}", file_path.display());

    Ok(WeeklyReport {
        file_path,
        days: rows.len(),
        date_range: format!("{} to {}", start_date, end_date),
    })
}
