use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tokio::task::spawn_blocking;

use crate::{JobListing, Result};

const FILE_PREFIX: &str = "jpmc_analyst_jobs_";
const FILE_SUFFIX: &str = ".csv";
const HEADER: [&str; 2] = ["title", "link"];

/// `jpmc_analyst_jobs_<YYYY-MM-DD>.csv` for the given day.
pub fn filename_for(date: NaiveDate) -> String {
    format!("{FILE_PREFIX}{}{FILE_SUFFIX}", date.format("%Y-%m-%d"))
}

/// Dated filename for today, in local time.
pub fn default_filename() -> String {
    filename_for(Local::now().date_naive())
}

/// Writes the listings as a `title,link` CSV, creating or truncating the file.
/// Without an explicit `path` the file lands in the working directory under [`default_filename`].
/// Returns the path that was written.
pub async fn save_to_csv(jobs: Vec<JobListing>, path: Option<PathBuf>) -> Result<PathBuf> {
    let path = path.unwrap_or_else(|| PathBuf::from(default_filename()));

    spawn_blocking(move || -> Result<PathBuf> {
        write_csv(&jobs, &path)?;
        Ok(path)
    })
    .await?
}

/// Blocking part of [`save_to_csv`]. Rows end in CRLF.
/// The header comes from the first serialized row, or is written by hand when there are no jobs.
pub fn write_csv(jobs: &[JobListing], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(path)?;
    if jobs.is_empty() {
        writer.write_record(HEADER)?;
    }
    for job in jobs {
        writer.serialize(job)?;
    }
    writer.flush()?;
    Ok(())
}
