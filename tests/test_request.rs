use lantern::http::fields::FieldMap;
use lantern::http::request::{Request, RequestLine};

fn request(fields: FieldMap) -> Request {
    Request {
        request_line: RequestLine {
            method: "GET".to_string(),
            target: "/".to_string(),
            version: "HTTP/1.1".to_string(),
        },
        field_lines: fields,
        body: vec![],
    }
}

#[test]
fn test_field_map_lookup_is_case_insensitive() {
    let mut fields = FieldMap::new();
    fields.insert("User-Agent", "curl/8.0");

    assert_eq!(fields.get("user-agent"), Some("curl/8.0"));
    assert_eq!(fields.get("USER-AGENT"), Some("curl/8.0"));
    assert_eq!(fields.get("User-Agent"), Some("curl/8.0"));
    assert_eq!(fields.get("Missing"), None);
}

#[test]
fn test_field_map_preserves_insertion_order() {
    let mut fields = FieldMap::new();
    fields.insert("Content-Type", "text/plain");
    fields.insert("Content-Length", "5");
    fields.insert("X-Last", "z");

    let names: Vec<&str> = fields.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["Content-Type", "Content-Length", "X-Last"]);
}

#[test]
fn test_field_map_duplicate_insert_overwrites_in_place() {
    let mut fields = FieldMap::new();
    fields.insert("X-Tag", "one");
    fields.insert("Host", "example.com");
    fields.insert("x-tag", "two");

    assert_eq!(fields.len(), 2);
    assert_eq!(fields.get("X-Tag"), Some("two"));

    // The original spelling and position are kept
    let first = fields.iter().next().unwrap();
    assert_eq!(first, ("X-Tag", "two"));
}

#[test]
fn test_field_map_from_iterator() {
    let fields: FieldMap = [("A", "1"), ("B", "2"), ("a", "3")].into_iter().collect();

    assert_eq!(fields.len(), 2);
    assert_eq!(fields.get("A"), Some("3"));
    assert_eq!(fields.get("B"), Some("2"));
}

#[test]
fn test_request_content_length_parsing() {
    let req = request([("Content-Length", "42")].into_iter().collect());
    assert_eq!(req.content_length(), 42);
}

#[test]
fn test_request_content_length_missing() {
    let req = request(FieldMap::new());
    assert_eq!(req.content_length(), 0);
}

#[test]
fn test_request_content_length_invalid() {
    let req = request([("Content-Length", "not-a-number")].into_iter().collect());
    assert_eq!(req.content_length(), 0);
}

#[test]
fn test_request_keep_alive_http11_default() {
    let req = request(FieldMap::new());
    assert!(req.keep_alive());
}

#[test]
fn test_request_keep_alive_close() {
    let req = request([("Connection", "close")].into_iter().collect());
    assert!(!req.keep_alive());
}

#[test]
fn test_request_keep_alive_case_insensitive_value() {
    let req = request([("Connection", "Keep-Alive")].into_iter().collect());
    assert!(req.keep_alive());
}
