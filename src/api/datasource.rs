//! Remote Data Source
//!
//! One GET per query against a list endpoint, normalized into a
//! [`ResultPage`].

use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;

use super::ApiClient;
use crate::error::FetchError;
use crate::models::{Projection, QuerySpec, RawRow, ResultPage};
use crate::query::build_query_params;

/// Anything that can produce a page of rows for a query
#[async_trait(?Send)]
pub trait DataSource {
    async fn fetch_page(&self, query: &QuerySpec) -> Result<ResultPage, FetchError>;
}

/// List endpoint response envelope
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "iTotalRecords")]
    total_records: usize,
    #[serde(rename = "iTotalDisplayRecords")]
    total_display_records: usize,
    #[serde(rename = "aaData")]
    rows: Vec<RawRow>,
}

/// Parse a list response body.
///
/// At most `iTotalDisplayRecords` rows are consumed, and never more than the
/// requested page size. The page size is the request's, not the server's.
pub fn parse_envelope(body: &str, page_size: usize, projection: Projection) -> Result<ResultPage, FetchError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| FetchError::Envelope(e.to_string()))?;

    let take = envelope
        .total_display_records
        .min(envelope.rows.len())
        .min(page_size);
    let rows = envelope.rows.iter().take(take).map(projection).collect();

    Ok(ResultPage {
        rows,
        total_results: envelope.total_records,
        page_size,
    })
}

/// [`DataSource`] backed by one of the `/api/<entity>.json` endpoints
#[derive(Clone)]
pub struct RemoteDataSource {
    api: ApiClient,
    endpoint: &'static str,
    projection: Projection,
}

impl fmt::Debug for RemoteDataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteDataSource")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl RemoteDataSource {
    pub fn new(api: ApiClient, endpoint: &'static str, projection: Projection) -> Self {
        Self {
            api,
            endpoint,
            projection,
        }
    }
}

#[async_trait(?Send)]
impl DataSource for RemoteDataSource {
    async fn fetch_page(&self, query: &QuerySpec) -> Result<ResultPage, FetchError> {
        log::debug!(
            target: "datasource",
            "[DATA] GET {} page={} size={} sort={} asc={}",
            self.endpoint,
            query.page,
            query.page_size,
            query.sort_column,
            query.sort_ascending
        );
        let body = self
            .api
            .get_text(self.endpoint, &build_query_params(query))
            .await?;
        parse_envelope(&body, query.page_size, self.projection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{field_text, RowRecord};
    use serde_json::json;

    fn by_name(row: &RawRow) -> RowRecord {
        RowRecord::new().text("Name", field_text(row, "Name"))
    }

    fn rows(n: usize) -> Vec<serde_json::Value> {
        (0..n).map(|i| json!({"Name": format!("row {}", i)})).collect()
    }

    #[test]
    fn test_envelope_maps_rows_and_totals() {
        let body = json!({"iTotalRecords": 137, "iTotalDisplayRecords": 25, "aaData": rows(25)}).to_string();
        let page = parse_envelope(&body, 25, by_name).unwrap();
        assert_eq!(page.rows.len(), 25);
        assert_eq!(page.total_results, 137);
        assert_eq!(page.page_size, 25);
        assert_eq!(page.rows[3].get("Name").unwrap().label(), "row 3");
    }

    #[test]
    fn test_display_count_bounds_consumed_rows() {
        let body = json!({"iTotalRecords": 40, "iTotalDisplayRecords": 2, "aaData": rows(5)}).to_string();
        assert_eq!(parse_envelope(&body, 25, by_name).unwrap().rows.len(), 2);

        // claims more than it sent
        let body = json!({"iTotalRecords": 40, "iTotalDisplayRecords": 9, "aaData": rows(3)}).to_string();
        assert_eq!(parse_envelope(&body, 25, by_name).unwrap().rows.len(), 3);

        // more than was asked for
        let body = json!({"iTotalRecords": 40, "iTotalDisplayRecords": 40, "aaData": rows(40)}).to_string();
        let page = parse_envelope(&body, 10, by_name).unwrap();
        assert_eq!((page.rows.len(), page.page_size), (10, 10));
    }

    #[test]
    fn test_missing_fields_are_fetch_errors() {
        for body in [
            json!({"iTotalDisplayRecords": 0, "aaData": []}).to_string(),
            json!({"iTotalRecords": 0, "aaData": []}).to_string(),
            json!({"iTotalRecords": 0, "iTotalDisplayRecords": 0}).to_string(),
            "<html>oops</html>".to_string(),
        ] {
            assert!(matches!(parse_envelope(&body, 25, by_name), Err(FetchError::Envelope(_))));
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod http_tests {
    use super::*;
    use crate::config::ConsoleConfig;
    use crate::error::FETCH_FAILED_MESSAGE;
    use crate::models::{field_text, FilterToken, FilterValue, Operator, RowRecord};
    use crate::query::{parse_filter, serialize_filter};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

    fn by_path(row: &RawRow) -> RowRecord {
        RowRecord::new().text("Path", field_text(row, "FilePath"))
    }

    fn source(server: &MockServer) -> RemoteDataSource {
        let config = ConsoleConfig {
            api_base: server.uri(),
            request_timeout: Duration::from_millis(500),
            ..ConsoleConfig::default()
        };
        RemoteDataSource::new(ApiClient::new(&config), "/api/files.json", by_path)
    }

    fn envelope(total: usize, n: usize) -> serde_json::Value {
        let rows: Vec<_> = (0..n).map(|i| json!({"FilePath": format!("C:\\f{}.exe", i)})).collect();
        json!({"iTotalRecords": total, "iTotalDisplayRecords": n, "aaData": rows})
    }

    /// Stub server side of the filter contract: decodes `filter` and
    /// compares it to the expected tokens
    struct FilterDecodesTo(Vec<FilterToken>);

    impl Match for FilterDecodesTo {
        fn matches(&self, request: &Request) -> bool {
            request
                .url
                .query_pairs()
                .find(|(k, _)| k == "filter")
                .and_then(|(_, v)| parse_filter(&v).ok())
                .map_or(false, |tokens| tokens == self.0)
        }
    }

    #[tokio::test]
    async fn test_sends_paging_and_sort_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/files.json"))
            .and(query_param("start", "50"))
            .and(query_param("length", "25"))
            .and(query_param("sort", "Last Seen"))
            .and(query_param("sa", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(137, 25)))
            .expect(1)
            .mount(&server)
            .await;

        let mut query = QuerySpec::new("Last Seen", 25);
        query.page = 2;
        query.sort_ascending = false;
        let page = source(&server).fetch_page(&query).await.unwrap();
        assert_eq!(page.rows.len(), 25);
        assert_eq!(page.total_results, 137);
    }

    #[tokio::test]
    async fn test_same_query_twice_yields_same_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/files.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(3, 3)))
            .expect(2)
            .mount(&server)
            .await;

        let source = source(&server);
        let query = QuerySpec::new("Path", 25);
        let first = source.fetch_page(&query).await.unwrap();
        let second = source.fetch_page(&query).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_two_token_filter_decodes_identically_on_server() {
        let tokens = vec![
            FilterToken::text("ProductName", "Chrome"),
            FilterToken::new("Count", Some(Operator::Gt), FilterValue::Int(5)),
        ];
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(FilterDecodesTo(tokens.clone()))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(1, 1)))
            .expect(1)
            .mount(&server)
            .await;

        let mut query = QuerySpec::new("Path", 25);
        query.filter = serialize_filter(&tokens);
        let page = source(&server).fetch_page(&query).await.unwrap();
        assert_eq!(page.rows.len(), 1);
    }

    #[tokio::test]
    async fn test_server_error_is_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("{\"aaData\": []}"))
            .expect(1)
            .mount(&server)
            .await;

        let err = source(&server).fetch_page(&QuerySpec::new("Path", 25)).await.unwrap_err();
        assert_eq!(err, FetchError::Status(500));
        assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_malformed_envelope_is_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"aaData": []})))
            .mount(&server)
            .await;

        let err = source(&server).fetch_page(&QuerySpec::new("Path", 25)).await.unwrap_err();
        assert!(matches!(err, FetchError::Envelope(_)));
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(envelope(1, 1))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let err = source(&server).fetch_page(&QuerySpec::new("Path", 25)).await.unwrap_err();
        assert_eq!(err, FetchError::Timeout(500));
        assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
    }
}
