//! Fitness Diary (fitdiary)
//!
//! Generates the trailing-week summary: per-metric trend chart PNGs and
//! the weekly PDF report, from the stored diary.

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use fitdiary::report::{self, charts, Metric};
use fitdiary::store::{DiaryStore, DEFAULT_STORE_FILE};

/// Get the diary store path from environment or use default
fn get_store_path() -> PathBuf {
    std::env::var("FITDIARY_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(parent) = path.parent() {
                    if let Some(grandparent) = parent.parent() {
                        path = grandparent.to_path_buf();
                    }
                }
            }

            path.push(DEFAULT_STORE_FILE);
            path
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fitdiary=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let store_path = get_store_path();
    eprintln!("Diary store: {}", store_path.display());

    let store = DiaryStore::new(&store_path);
    let diary = store.load()?;
    if diary.is_empty() {
        eprintln!("No data saved yet.");
        return Ok(());
    }

    let (start_date, end_date) = report::trailing_week();
    let entries = report::select_range(&diary, &start_date, &end_date);
    if entries.is_empty() {
        eprintln!("No data in last 7 days.");
        return Ok(());
    }

    let output_dir = store_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("reports");
    std::fs::create_dir_all(&output_dir)?;

    // Standalone chart PNGs for each tracked metric
    for metric in Metric::ALL {
        let series = report::series_for(&entries, metric);
        match charts::render_report_chart(&series, metric) {
            Ok(png_bytes) => {
                let chart_path = output_dir.join(format!(
                    "{}_{}_to_{}.png",
                    metric.key(),
                    start_date,
                    end_date
                ));
                std::fs::write(&chart_path, png_bytes)?;
                tracing::info!("wrote chart {}", chart_path.display());
            }
            Err(e) => {
                tracing::warn!("chart for {} skipped: {}", metric.key(), e);
            }
        }
    }

    let weekly = report::generate_weekly_report(&entries, &start_date, &end_date, &output_dir)
        .map_err(|e| format!("report generation failed: {}", e))?;

    eprintln!(
        "Weekly report for {} ({} days): {}",
        weekly.date_range,
        weekly.days,
        weekly.file_path.display()
    );

    Ok(())
}
