use flate2::read::GzDecoder;
use lantern::http::encoding::{accepts_gzip, negotiate, split_comma_list};
use lantern::http::fields::FieldMap;
use lantern::http::request::{Request, RequestLine};
use lantern::http::response::{Response, ResponseBuilder, Status};
use std::io::Read;

fn request_with_accept_encoding(value: Option<&str>) -> Request {
    let mut fields = FieldMap::new();
    if let Some(value) = value {
        fields.insert("Accept-Encoding", value);
    }
    Request {
        request_line: RequestLine {
            method: "GET".to_string(),
            target: "/echo/abc".to_string(),
            version: "HTTP/1.1".to_string(),
        },
        field_lines: fields,
        body: vec![],
    }
}

fn plain_response(body: &[u8]) -> Response {
    ResponseBuilder::new(Status::Ok)
        .header("Content-Type", "text/plain")
        .body(body.to_vec())
        .build()
}

fn gunzip(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    GzDecoder::new(data).read_to_end(&mut out).unwrap();
    out
}

#[test]
fn test_split_comma_list_trims_members() {
    let members: Vec<&str> = split_comma_list("gzip, deflate ,br").collect();
    assert_eq!(members, vec!["gzip", "deflate", "br"]);
}

#[test]
fn test_split_comma_list_trailing_comma_yields_empty_member() {
    let members: Vec<&str> = split_comma_list("gzip,").collect();
    assert_eq!(members, vec!["gzip", ""]);
}

#[test]
fn test_accepts_gzip_among_other_codings() {
    let req = request_with_accept_encoding(Some("gzip, deflate"));
    assert!(accepts_gzip(&req));
}

#[test]
fn test_accepts_gzip_with_trailing_comma() {
    let req = request_with_accept_encoding(Some("gzip,"));
    assert!(accepts_gzip(&req));
}

#[test]
fn test_rejects_other_codings() {
    let req = request_with_accept_encoding(Some("deflate"));
    assert!(!accepts_gzip(&req));
}

#[test]
fn test_rejects_absent_header() {
    let req = request_with_accept_encoding(None);
    assert!(!accepts_gzip(&req));
}

#[test]
fn test_empty_member_never_matches() {
    let req = request_with_accept_encoding(Some(","));
    assert!(!accepts_gzip(&req));
}

#[test]
fn test_negotiate_compresses_and_updates_headers() {
    let req = request_with_accept_encoding(Some("gzip, deflate"));
    let mut resp = plain_response(b"hello gzip world");

    negotiate(&req, &mut resp).unwrap();

    assert_eq!(resp.headers.get("Content-Encoding"), Some("gzip"));
    assert_eq!(
        resp.headers.get("Content-Length"),
        Some(resp.body.len().to_string().as_str())
    );
    assert_eq!(gunzip(&resp.body), b"hello gzip world".to_vec());
}

#[test]
fn test_negotiate_leaves_response_untouched_without_gzip() {
    let req = request_with_accept_encoding(Some("deflate"));
    let mut resp = plain_response(b"plain");
    let before = resp.clone();

    negotiate(&req, &mut resp).unwrap();

    assert_eq!(resp, before);
}

#[test]
fn test_negotiate_leaves_response_untouched_without_header() {
    let req = request_with_accept_encoding(None);
    let mut resp = plain_response(b"plain");
    let before = resp.clone();

    negotiate(&req, &mut resp).unwrap();

    assert_eq!(resp, before);
}
