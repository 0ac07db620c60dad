use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;

use crate::parse::parse_page;
use crate::request::{JobsClient, PageSource};
use crate::write::save_to_csv;
use crate::{info_time, Config, JobListing, Result};

/// How many listings the console preview shows.
const PREVIEW_LEN: usize = 5;

/// Waits between two page requests.
pub(crate) trait Pacer {
    async fn pause(&mut self);
}

/// Sleeps for a fixed interval.
pub(crate) struct FixedDelay(pub Duration);

impl Pacer for FixedDelay {
    async fn pause(&mut self) {
        tokio::time::sleep(self.0).await;
    }
}

/// Scrapes the configured site and writes the results to CSV.
/// Returns the path of the written file, or `None` when no jobs were found.
pub async fn process_site(config: &Config) -> Result<Option<PathBuf>> {
    let start_time = Local::now();
    info_time!("Fetching all analyst jobs in the US from JPMC...");

    let client = JobsClient::new(config)?;
    let jobs = fetch_all_jobs(&client, &mut FixedDelay(config.page_delay), config).await?;
    info_time!(start_time, "Found {} analyst job listings in the US", jobs.len());

    if jobs.is_empty() {
        info_time!("No jobs found.");
        return Ok(None);
    }

    print_preview(&jobs);

    let count = jobs.len();
    let local_now = Local::now();
    let path = save_to_csv(jobs, config.output.clone()).await?;
    info_time!(local_now, "Saved {} jobs to {}", count, path.display());

    Ok(Some(path))
}

/// Requests consecutive pages until one parses to no listings, and collects everything before it.
///
/// Pauses between pages, but not after the empty page that ends the run.
/// With `config.max_pages` set, also stops once that many non-empty pages were collected.
pub(crate) async fn fetch_all_jobs<S, P>(
    source: &S,
    pacer: &mut P,
    config: &Config,
) -> Result<Vec<JobListing>>
where
    S: PageSource,
    P: Pacer,
{
    config.validate()?;
    let page_limit = if config.max_pages > 0 {
        config.max_pages
    } else {
        usize::MAX
    };

    let mut all_jobs = Vec::new();
    let mut offset = 0;
    let mut page = 1;

    loop {
        info_time!(
            "Page {} (jobs {}-{})...",
            page,
            offset + 1,
            offset + config.page_size
        );
        let data = source.fetch_page(offset).await?;
        let jobs = parse_page(&data, &config.site_url);

        if jobs.is_empty() {
            info_time!("found EMPTY page, stopping");
            break;
        }

        all_jobs.extend(jobs);
        if page >= page_limit {
            info_time!("reached the page limit of {}", page_limit);
            break;
        }
        offset += config.page_size;
        page += 1;
        pacer.pause().await;
    }

    Ok(all_jobs)
}

fn print_preview(jobs: &[JobListing]) {
    println!("\n--- Preview (first {PREVIEW_LEN}) ---");
    for job in jobs.iter().take(PREVIEW_LEN) {
        println!("  {}", job.title);
        println!("    {}", job.link);
        println!();
    }
}
