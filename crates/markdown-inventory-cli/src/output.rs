//! Result files: numbered stems and JSON writers.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// `<name>_results_<date>-<NNNN>`, numbered one above the highest run already
/// in `dir` for that name and date.
pub fn next_result_stem(dir: &Path, name: &str, date: NaiveDate) -> Result<String> {
    let prefix = format!("{name}_results_{}-", date.format("%Y-%m-%d"));
    let mut highest = 0;

    if dir.exists() {
        for entry in fs::read_dir(dir).with_context(|| format!("Reading {}", dir.display()))? {
            let file_name = entry?.file_name();
            let Some(rest) = file_name.to_str().and_then(|f| f.strip_prefix(&prefix)) else {
                continue;
            };
            let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
            if let Ok(n) = digits.parse::<u32>() {
                highest = highest.max(n);
            }
        }
    }

    Ok(format!("{prefix}{:04}", highest + 1))
}

pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = fs::File::create(path).with_context(|| format!("Creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Writing {}", path.display()))?;
    writer.flush()?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

pub fn result_path(dir: &Path, stem: &str, suffix: &str) -> PathBuf {
    dir.join(format!("{stem}{suffix}.json"))
}
