use serde::Serialize;
use serde_json::Value;

/// Placeholder title for requisitions that come without one.
pub const MISSING_TITLE: &str = "N/A";

/// One job posting as it ends up in the CSV, fields in column order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JobListing {
    pub title: String,
    pub link: String,
}

/// Pulls the job listings out of a single page of the requisitions API.
///
/// Only the first element of `items` is looked at, its `requisitionList` holds the postings.
/// An absent or empty container yields an empty `Vec`, which is how the last page is recognised.
/// Missing fields never fail: `Title` falls back to [`MISSING_TITLE`] and `Id` to an empty id.
pub fn parse_page(page: &Value, site_url: &str) -> Vec<JobListing> {
    let requisitions = match first_item(page)
        .and_then(|item| item.get("requisitionList"))
        .and_then(Value::as_array)
    {
        Some(reqs) => reqs,
        None => return Vec::new(),
    };

    requisitions
        .iter()
        .map(|req| JobListing {
            title: title_of(req),
            link: format!("{site_url}/{}", id_of(req)),
        })
        .collect()
}

#[inline]
fn first_item(page: &Value) -> Option<&Value> {
    page.get("items")?.as_array()?.first()
}

#[inline]
fn title_of(req: &Value) -> String {
    match req.get("Title") {
        Some(Value::String(title)) => title.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => MISSING_TITLE.to_string(),
    }
}

// Ids are strings in practice, but numeric ids render the same way in a link.
#[inline]
fn id_of(req: &Value) -> String {
    match req.get("Id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const SITE: &str = "https://example.test/sites/CX_1001/job";

    fn page_of(reqs: Value) -> Value {
        json!({ "items": [ { "requisitionList": reqs, "TotalJobsCount": 99 } ], "count": 1 })
    }

    #[test]
    fn keeps_length_and_order() {
        let reqs: Vec<Value> = (0..25)
            .map(|i| json!({ "Id": format!("{}", 1000 + i), "Title": format!("Analyst {i}") }))
            .collect();
        let jobs = parse_page(&page_of(Value::Array(reqs)), SITE);

        assert_eq!(jobs.len(), 25);
        for (i, job) in jobs.iter().enumerate() {
            assert_eq!(job.title, format!("Analyst {i}"));
            assert_eq!(job.link, format!("{SITE}/{}", 1000 + i));
        }
    }

    #[test]
    fn empty_items_is_empty_page() {
        assert!(parse_page(&json!({ "items": [] }), SITE).is_empty());
    }

    #[test]
    fn missing_requisition_list_is_empty_page() {
        assert!(parse_page(&json!({ "items": [ { "TotalJobsCount": 0 } ] }), SITE).is_empty());
        assert!(parse_page(&json!({ "items": [ { "requisitionList": [] } ] }), SITE).is_empty());
    }

    #[test]
    fn unexpected_shapes_are_empty_pages() {
        assert!(parse_page(&json!({}), SITE).is_empty());
        assert!(parse_page(&json!({ "items": "nope" }), SITE).is_empty());
        assert!(parse_page(&json!({ "items": [ { "requisitionList": {} } ] }), SITE).is_empty());
        assert!(parse_page(&json!([1, 2, 3]), SITE).is_empty());
        assert!(parse_page(&Value::Null, SITE).is_empty());
    }

    #[test]
    fn only_first_item_is_read() {
        let page = json!({
            "items": [
                { "requisitionList": [ { "Id": "1", "Title": "First" } ] },
                { "requisitionList": [ { "Id": "2", "Title": "Second" } ] },
            ]
        });
        let jobs = parse_page(&page, SITE);

        assert_eq!(jobs, vec![JobListing { title: "First".into(), link: format!("{SITE}/1") }]);
    }

    #[test]
    fn missing_fields_fall_back() {
        let jobs = parse_page(&page_of(json!([ { "Id": "42" }, { "Title": "No id" }, {} ])), SITE);

        assert_eq!(jobs[0].title, "N/A");
        assert_eq!(jobs[0].link, format!("{SITE}/42"));
        assert_eq!(jobs[1].title, "No id");
        assert_eq!(jobs[1].link, format!("{SITE}/"));
        assert_eq!(jobs[2], JobListing { title: "N/A".into(), link: format!("{SITE}/") });
    }

    #[test]
    fn null_title_and_numeric_id() {
        let jobs = parse_page(&page_of(json!([ { "Id": 210_512_345, "Title": null } ])), SITE);

        assert_eq!(jobs[0].title, MISSING_TITLE);
        assert_eq!(jobs[0].link, format!("{SITE}/210512345"));
    }
}
