//! Query Serializer
//!
//! Converts filter tokens and grid state into the wire-level query the
//! list endpoints understand.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{FilterToken, QuerySpec};

/// Characters left unescaped in query components (RFC 3986 unreserved)
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode a token sequence as a JSON array. No tokens is the empty string.
pub fn serialize_filter(tokens: &[FilterToken]) -> String {
    if tokens.is_empty() {
        return String::new();
    }
    // Tokens hold only strings, integers and unit enums
    serde_json::to_string(tokens).unwrap_or_default()
}

/// Inverse of [`serialize_filter`]
pub fn parse_filter(filter: &str) -> Result<Vec<FilterToken>, serde_json::Error> {
    if filter.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(filter)
}

/// Query parameters for one list request, in wire order
pub fn build_query_params(spec: &QuerySpec) -> Vec<(&'static str, String)> {
    vec![
        ("start", spec.offset().to_string()),
        ("length", spec.page_size.to_string()),
        ("filter", spec.filter.clone()),
        ("sort", spec.sort_column.clone()),
        ("sa", spec.sort_ascending.to_string()),
    ]
}

/// Percent-encode `key=value` pairs into a query string (no leading `?`)
pub fn encode_query(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, QUERY_COMPONENT),
                utf8_percent_encode(value, QUERY_COMPONENT)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a query string into pairs. `+` is treated as a space.
pub fn decode_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    percent_decode_str(&raw).decode_utf8_lossy().into_owned()
}

/// In-app link to a detail page keyed by one identifier
pub fn detail_href(path: &str, key: &str, id: &str) -> String {
    format!("{}?{}", path, encode_query(&[(key, id.to_string())]))
}

/// Number of pages needed for `total` rows
pub fn page_count(total: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total.div_ceil(page_size)
}

/// Index of the last valid page; 0 when there are no rows
pub fn last_page(total: usize, page_size: usize) -> usize {
    page_count(total, page_size).saturating_sub(1)
}

pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.min(last_page(total, page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FilterValue, Operator};
    use pretty_assertions::assert_eq;

    fn sample_tokens() -> Vec<FilterToken> {
        vec![
            FilterToken::text("ProductName", "Chrome"),
            FilterToken::new("Count", Some(Operator::Gt), FilterValue::Int(5)),
            FilterToken::new("LastSeen", Some(Operator::Ge), FilterValue::Text("2015-03-01".into())),
            FilterToken::new("Path", Some(Operator::NotContains), FilterValue::Text("C:\\Temp & \"x\"".into())),
        ]
    }

    #[test]
    fn test_empty_filter_is_empty_string() {
        assert_eq!(serialize_filter(&[]), "");
        assert_eq!(parse_filter("").unwrap(), Vec::<FilterToken>::new());
        assert_eq!(parse_filter("   ").unwrap(), Vec::<FilterToken>::new());
    }

    #[test]
    fn test_round_trip_preserves_order_and_fields() {
        let tokens = sample_tokens();
        let wire = serialize_filter(&tokens);
        assert_eq!(parse_filter(&wire).unwrap(), tokens);

        let mut reversed = tokens.clone();
        reversed.reverse();
        assert_eq!(parse_filter(&serialize_filter(&reversed)).unwrap(), reversed);
    }

    #[test]
    fn test_quoted_number_stays_text() {
        let tokens = parse_filter(r#"[{"category":"Count","operator":">","value":"5"}]"#).unwrap();
        assert_eq!(tokens[0].value, FilterValue::Text("5".into()));
        let tokens = parse_filter(r#"[{"category":"Count","operator":"gt","value":5}]"#).unwrap();
        assert_eq!(tokens[0].value, FilterValue::Int(5));
        assert_eq!(tokens[0].operator, Some(Operator::Gt));
    }

    #[test]
    fn test_serialized_shape() {
        let wire = serialize_filter(&sample_tokens()[..2]);
        assert_eq!(
            wire,
            r#"[{"category":"ProductName","value":"Chrome"},{"category":"Count","operator":">","value":5}]"#
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_filter("not json").is_err());
        assert!(parse_filter(r#"[{"category":"Count"}]"#).is_err());
    }

    #[test]
    fn test_build_query_params() {
        let spec = QuerySpec {
            filter: "[]".into(),
            sort_column: "Last Seen".into(),
            sort_ascending: false,
            page: 2,
            page_size: 25,
        };
        assert_eq!(
            build_query_params(&spec),
            vec![
                ("start", "50".to_string()),
                ("length", "25".to_string()),
                ("filter", "[]".to_string()),
                ("sort", "Last Seen".to_string()),
                ("sa", "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_equal_specs_build_equal_params() {
        let a = QuerySpec::new("Count", 10);
        let b = a.clone();
        assert_eq!(encode_query(&build_query_params(&a)), encode_query(&build_query_params(&b)));
    }

    #[test]
    fn test_encode_and_decode_query() {
        let params = vec![("filter", r#"[{"category":"Path","value":"a b&c"}]"#.to_string()), ("sort", "Last Seen".to_string())];
        let encoded = encode_query(&params);
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('"'));
        let decoded = decode_query(&encoded);
        assert_eq!(decoded[0].1, params[0].1);
        assert_eq!(decoded[1], ("sort".to_string(), "Last Seen".to_string()));
        assert_eq!(decode_query("?uuid=a+b"), vec![("uuid".to_string(), "a b".to_string())]);
    }

    #[test]
    fn test_detail_href() {
        assert_eq!(detail_href("/fileinfo", "sha256", "ab12"), "/fileinfo?sha256=ab12");
        assert_eq!(detail_href("/systeminfo", "uuid", "a/b c"), "/systeminfo?uuid=a%2Fb%20c");
    }

    #[test]
    fn test_page_math() {
        assert_eq!(page_count(137, 25), 6);
        assert_eq!(page_count(125, 25), 5);
        assert_eq!(page_count(0, 25), 0);
        assert_eq!(last_page(137, 25), 5);
        assert_eq!(last_page(0, 25), 0);
        assert_eq!(clamp_page(page_count(137, 25), 137, 25), 5);
        assert_eq!(clamp_page(2, 137, 25), 2);
        assert_eq!(clamp_page(9, 0, 25), 0);
    }
}
