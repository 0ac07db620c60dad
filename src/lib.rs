//! JPMC CAREERS SCRAPER
//! Pages through the Oracle HCM requisitions API for analyst roles in the US
//! and writes the titles and links to a CSV file.

mod error;
mod macros;
pub mod parse;
pub mod process;
pub mod request;
pub mod write;

use std::path::PathBuf;
use std::time::Duration;

pub use error::{Error, Result};
#[doc(hidden)]
pub use chrono;
pub use parse::JobListing;

const API_URL: &str =
    "https://jpmc.fa.oraclecloud.com/hcmRestApi/resources/latest/recruitingCEJobRequisitions";
const SITE_URL: &str = "https://jpmc.fa.oraclecloud.com/hcmUI/CandidateExperience/en/sites/CX_1001/job";
const SITE_NUMBER: &str = "CX_1001";
/// "Analysts" entry of the category facet.
const ANALYSTS_CATEGORY_ID: &str = "300000086153065";
/// "United States" entry of the location facet.
const UNITED_STATES_LOCATION_ID: &str = "300000000289738";
const PAGE_SIZE: usize = 25;
const SORT_BY: &str = "POSTING_DATES_DESC";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)";
const PAGE_DELAY: Duration = Duration::from_secs(1);
/// If set to 0 the limit is set to usize::MAX
const MAX_PAGES: usize = 0;

/// Everything a run needs to know about the site it is scraping.
/// `Config::default()` targets analyst jobs in the US.
#[derive(Clone, Debug)]
pub struct Config {
    /// Requisitions endpoint.
    pub api_url: String,
    /// Base of the candidate-facing job pages, a requisition id is appended to it.
    pub site_url: String,
    pub site_number: String,
    pub category_id: String,
    pub location_id: String,
    /// Records per page, also the step between offsets. Must be greater than zero.
    pub page_size: usize,
    pub sort_by: String,
    pub request_timeout: Duration,
    pub user_agent: String,
    /// Pause between two consecutive page requests.
    pub page_delay: Duration,
    /// Stop after this many non-empty pages. 0 means no limit, the run only ends on an empty page.
    pub max_pages: usize,
    /// Where to write the CSV. `None` derives a dated filename in the working directory.
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: API_URL.into(),
            site_url: SITE_URL.into(),
            site_number: SITE_NUMBER.into(),
            category_id: ANALYSTS_CATEGORY_ID.into(),
            location_id: UNITED_STATES_LOCATION_ID.into(),
            page_size: PAGE_SIZE,
            sort_by: SORT_BY.into(),
            request_timeout: REQUEST_TIMEOUT,
            user_agent: USER_AGENT.into(),
            page_delay: PAGE_DELAY,
            max_pages: MAX_PAGES,
            output: None,
        }
    }
}

impl Config {
    /// Rejects settings that would keep the pagination loop from advancing.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidConfig("page_size must be greater than zero"));
        }
        Ok(())
    }
}
