//! Content age: how many days ago each article's `ms.date` was set, tallied
//! per top-level folder.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::io::{IoError, scan_all_markdown_files};

/// Tolerates stray whitespace and quotes seen around dates in real headers.
static MS_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"ms\.date:\s*"?(\d{1,2}/\d{1,2}/\d{2,4})"?"#).expect("valid ms.date regex")
});

/// Folders that never hold articles.
pub const EXCLUDED_FOLDERS: [&str; 2] = ["media", "breadcrumb"];

#[derive(Debug, thiserror::Error)]
pub enum AgeError {
    #[error("Article has no ms.date")]
    MissingDate,
    #[error("Malformed ms.date {0:?}")]
    MalformedDate(String),
}

/// Ages (in days) with their mean and sample standard deviation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgeStats {
    pub values: Vec<i64>,
    pub mean: f64,
    pub stddev: f64,
}

impl AgeStats {
    pub fn from_values(values: Vec<i64>) -> Self {
        let n = values.len();
        let mean = if n > 0 {
            values.iter().sum::<i64>() as f64 / n as f64
        } else {
            0.0
        };
        let stddev = if n > 1 {
            let sq: f64 = values.iter().map(|&v| (v as f64 - mean).powi(2)).sum();
            (sq / (n - 1) as f64).sqrt()
        } else {
            0.0
        };
        Self {
            values,
            mean,
            stddev,
        }
    }
}

/// Per-folder stats plus the stats of articles sitting directly in the root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgeTally {
    pub folders: BTreeMap<String, AgeStats>,
    pub root: AgeStats,
}

/// Days between the article's `ms.date` (month/day/year) and `today`.
pub fn article_age(content: &str, today: NaiveDate) -> Result<i64, AgeError> {
    let raw = MS_DATE
        .captures(content)
        .and_then(|c| c.get(1))
        .ok_or(AgeError::MissingDate)?
        .as_str();

    // `%Y` alone would read a two-digit year as the first century.
    let four_digit_year = raw.rsplit('/').next().is_some_and(|y| y.len() == 4);
    let date = NaiveDate::parse_from_str(raw, "%m/%d/%Y")
        .ok()
        .filter(|_| four_digit_year)
        .ok_or_else(|| AgeError::MalformedDate(raw.to_string()))?;
    Ok((today - date).num_days())
}

/// Tallies article ages below `root`, one bucket per top-level folder.
///
/// Every `.md` file counts, index and TOC pages included. Symlinked folders
/// are not followed.
pub fn tally_age(root: &Path, today: NaiveDate) -> Result<AgeTally, IoError> {
    let excluded: Vec<String> = EXCLUDED_FOLDERS.iter().map(|s| s.to_string()).collect();
    let mut tally = AgeTally::default();
    let mut root_ages = Vec::new();

    let mut entries = fs::read_dir(root)?
        .map(|e| {
            let e = e?;
            Ok((e.path(), e.file_type()?))
        })
        .collect::<Result<Vec<_>, std::io::Error>>()?;
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    for (path, file_type) in entries {
        if !file_type.is_dir() {
            if !path.is_dir() && path.extension().is_some_and(|ext| ext == "md") {
                root_ages.extend(file_age(&path, today));
            }
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if excluded.iter().any(|e| e == name) {
            continue;
        }

        let ages = scan_all_markdown_files(&path, &excluded)?
            .iter()
            .filter_map(|file| file_age(file, today))
            .collect();
        tally
            .folders
            .insert(name.to_string(), AgeStats::from_values(ages));
    }

    tally.root = AgeStats::from_values(root_ages);
    Ok(tally)
}

fn file_age(path: &Path, today: NaiveDate) -> Option<i64> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Could not read {}: {e}", path.display());
            return None;
        }
    };
    let content = String::from_utf8_lossy(&bytes);

    match article_age(&content, today) {
        Ok(age) => Some(age),
        Err(AgeError::MissingDate) => {
            log::info!("File contains no ms.date; skipping: {}", path.display());
            None
        }
        Err(e) => {
            log::warn!("{e}; skipping: {}", path.display());
            None
        }
    }
}

/// Human-readable summary: one line per folder, then the overall figures.
pub fn render_summary(tally: &AgeTally) -> String {
    let mut out = String::new();
    for (name, stats) in &tally.folders {
        out.push_str(&format!(
            "{name}: mean {}, stddev: {}\n",
            significant(stats.mean),
            significant(stats.stddev)
        ));
    }
    out.push_str(&format!("OVERALL MEAN: {}\n", significant(tally.root.mean)));
    out.push_str(&format!("OVERALL STDDEV: {}\n", significant(tally.root.stddev)));
    out
}

/// Formats with five significant digits, dropping trailing zeros. Magnitudes
/// of 1e5 and above (or below 1e-4) switch to exponent notation, e.g.
/// `1.2346e+05`.
fn significant(v: f64) -> String {
    if v == 0.0 || !v.is_finite() {
        return format!("{v}");
    }

    // Rounding to five digits first can carry into the next power of ten.
    let rounded = format!("{v:.4e}");
    let (mantissa, exponent) = rounded.split_once('e').unwrap_or((&rounded, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if !(-4..5).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.abs()
        );
    }

    let decimals = (4 - exponent) as usize;
    trim_fraction(&format!("{v:.decimals$}")).to_string()
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
