//! Trend chart rendering (plotters)
//!
//! Renders one metric series as a line-and-marker PNG. Days with no
//! value break the line, so a gap in the data stays visible as a gap in
//! the trend.

use crate::report::weekly::Metric;

const LINE_COLOR: (u8, u8, u8) = (0, 112, 192);

/// Render a metric series to PNG bytes
pub fn render_metric_chart(
    series: &[(String, Option<f64>)],
    title: &str,
    y_desc: &str,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, String> {
    use plotters::prelude::*;

    if series.is_empty() {
        return Err("No data to chart".to_string());
    }

    let present: Vec<f64> = series.iter().filter_map(|(_, v)| *v).collect();
    if present.is_empty() {
        return Err("No values to chart".to_string());
    }

    let y_min = present.iter().cloned().fold(f64::INFINITY, f64::min);
    let y_max = present.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let pad = ((y_max - y_min) * 0.1).max(1.0);

    let line_rgb = RGBColor(LINE_COLOR.0, LINE_COLOR.1, LINE_COLOR.2);

    let mut buffer = vec![0u8; (width * height * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 20))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(-1..(series.len() as i32), (y_min - pad)..(y_max + pad))
            .map_err(|e| e.to_string())?;

        chart
            .configure_mesh()
            .x_labels(series.len().min(10))
            .x_label_formatter(&|x| {
                if *x >= 0 && (*x as usize) < series.len() {
                    let date = &series[*x as usize].0;
                    date.split('-').skip(1).collect::<Vec<_>>().join("/")
                } else {
                    String::new()
                }
            })
            .y_desc(y_desc)
            .draw()
            .map_err(|e| e.to_string())?;

        // Split into runs of consecutive present values so the line
        // breaks where a day has no data
        let mut runs: Vec<Vec<(i32, f64)>> = Vec::new();
        let mut run: Vec<(i32, f64)> = Vec::new();
        for (i, (_, value)) in series.iter().enumerate() {
            match value {
                Some(v) => run.push((i as i32, *v)),
                None => {
                    if !run.is_empty() {
                        runs.push(std::mem::take(&mut run));
                    }
                }
            }
        }
        if !run.is_empty() {
            runs.push(run);
        }

        for segment in &runs {
            if segment.len() > 1 {
                chart
                    .draw_series(LineSeries::new(
                        segment.iter().cloned(),
                        line_rgb.stroke_width(2),
                    ))
                    .map_err(|e| e.to_string())?;
            }
            chart
                .draw_series(
                    segment
                        .iter()
                        .map(|(x, y)| Circle::new((*x, *y), 3, line_rgb.filled())),
                )
                .map_err(|e| e.to_string())?;
        }

        root.present().map_err(|e| e.to_string())?;
    }

    // Convert RGB buffer to PNG
    let img = image::RgbImage::from_raw(width, height, buffer)
        .ok_or("Failed to create image from buffer")?;

    let mut png_bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(
            &mut std::io::Cursor::new(&mut png_bytes),
            image::ImageFormat::Png,
        )
        .map_err(|e| e.to_string())?;

    Ok(png_bytes)
}

/// Render the chart for one report metric at the standard report size
pub fn render_report_chart(
    series: &[(String, Option<f64>)],
    metric: Metric,
) -> Result<Vec<u8>, String> {
    render_metric_chart(series, metric.title(), metric.y_label(), 1000, 400)
}
