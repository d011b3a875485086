use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::{self, Write};

use crate::http::request::Request;
use crate::http::response::Response;

/// Splits a comma-separated field value into trimmed members.
///
/// A trailing comma yields a final empty member, which never matches any
/// coding name ("gzip," is the members ["gzip", ""]).
pub fn split_comma_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim)
}

/// Whether the request's Accept-Encoding lists gzip.
pub fn accepts_gzip(request: &Request) -> bool {
    request
        .field("Accept-Encoding")
        .map(|v| split_comma_list(v).any(|member| member == "gzip"))
        .unwrap_or(false)
}

/// Applies content negotiation to a response, in place.
///
/// When the request accepts gzip, the body is replaced by its compressed
/// form and Content-Encoding / Content-Length are updated to match.
/// Otherwise the response is left untouched. Runs once per response,
/// between routing and rendering.
pub fn negotiate(request: &Request, response: &mut Response) -> io::Result<()> {
    if !accepts_gzip(request) {
        return Ok(());
    }

    let compressed = gzip_compress(&response.body)?;
    response
        .headers
        .insert("Content-Length", compressed.len().to_string());
    response.headers.insert("Content-Encoding", "gzip");
    response.body = compressed;

    Ok(())
}

fn gzip_compress(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
