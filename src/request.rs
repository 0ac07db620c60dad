use std::time::Duration;

use reqwest::{header, Client, Request};
use serde_json::Value;

use crate::{Config, Result};

/// Source of raw result pages, addressed by the offset of their first record.
pub(crate) trait PageSource {
    async fn fetch_page(&self, offset: usize) -> Result<Value>;
}

/// Requisitions API client bound to a single category + location filter.
#[derive(Clone, Debug)]
pub struct JobsClient {
    client: Client,
    api_url: String,
    user_agent: String,
    timeout: Duration,
    site_number: String,
    category_id: String,
    location_id: String,
    page_size: usize,
    sort_by: String,
}

impl JobsClient {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.request_timeout,
            site_number: config.site_number.clone(),
            category_id: config.category_id.clone(),
            location_id: config.location_id.clone(),
            page_size: config.page_size,
            sort_by: config.sort_by.clone(),
        })
    }

    /// The `finder` query value, selecting one page of the filtered and sorted requisitions.
    pub fn finder(&self, offset: usize) -> String {
        format!(
            "findReqs;siteNumber={},limit={},offset={offset},sortBy={},selectedCategoriesFacet={},selectedLocationsFacet={}",
            self.site_number, self.page_size, self.sort_by, self.category_id, self.location_id,
        )
    }

    /// Builds the GET request for the page starting at `offset` without sending it.
    pub fn page_request(&self, offset: usize) -> Result<Request> {
        let finder = self.finder(offset);
        let req = self
            .client
            .get(&self.api_url)
            .query(&[
                ("onlyData", "true"),
                ("expand", "requisitionList.secondaryLocations"),
                ("finder", finder.as_str()),
            ])
            .header(header::USER_AGENT, &self.user_agent)
            .timeout(self.timeout)
            .build()?;
        Ok(req)
    }

    /// Requests a page and returns its JSON body.
    /// Non-success statuses are turned into errors, nothing is retried.
    pub async fn fetch_page(&self, offset: usize) -> Result<Value> {
        let req = self.page_request(offset)?;
        let res = self.client.execute(req).await?.error_for_status()?;
        let body = res.json::<Value>().await?;
        Ok(body)
    }
}

impl PageSource for JobsClient {
    async fn fetch_page(&self, offset: usize) -> Result<Value> {
        JobsClient::fetch_page(self, offset).await
    }
}
