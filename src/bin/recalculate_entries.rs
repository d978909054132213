//! Simple utility to rebuild the derived fields of stored diary entries
//! Usage: cargo run --bin recalculate_entries -- [date]

use std::path::PathBuf;

use fitdiary::store::{DiaryStore, DEFAULT_STORE_FILE};

fn get_store_path() -> PathBuf {
    std::env::var("FITDIARY_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

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
    let args: Vec<String> = std::env::args().collect();
    let only_date = args.get(1).map(|s| s.as_str());

    let store_path = get_store_path();
    println!("Diary store: {}", store_path.display());

    let store = DiaryStore::new(&store_path);
    let mut diary = store.load()?;

    if diary.is_empty() {
        println!("No entries to recalculate.");
        return Ok(());
    }

    let mut changed = 0usize;
    for (date, entry) in diary.iter_mut() {
        if let Some(d) = only_date {
            if d != date {
                continue;
            }
        }

        let rebuilt = entry.recalculate();
        println!(
            "{}: calories {:.1} -> {:.1}, protein {:.1} -> {:.1}, net {:.1} -> {:.1}",
            date,
            entry.total_calories,
            rebuilt.total_calories,
            entry.total_protein,
            rebuilt.total_protein,
            entry.net_calories,
            rebuilt.net_calories
        );

        if rebuilt != *entry {
            *entry = rebuilt;
            changed += 1;
        }
    }

    if changed > 0 {
        store.save(&diary)?;
    }
    println!(
        "Updated {} entr{}.",
        changed,
        if changed == 1 { "y" } else { "ies" }
    );

    Ok(())
}
