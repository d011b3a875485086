use std::fs;
use std::path::PathBuf;

use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, Status};
use crate::routes::Handler;

/// `GET /` — 200 with an empty body.
pub struct RootHandler;

impl Handler for RootHandler {
    fn handle(&self, request: &Request) -> Option<Response> {
        if request.method() != "GET" || request.target() != "/" {
            return None;
        }
        Some(ResponseBuilder::new(Status::Ok).build())
    }
}

/// `GET /echo/{s}` — 200 text/plain with body `{s}`.
pub struct EchoHandler;

impl Handler for EchoHandler {
    fn handle(&self, request: &Request) -> Option<Response> {
        if request.method() != "GET" {
            return None;
        }
        let echo = request.target().strip_prefix("/echo/")?;
        if echo.is_empty() || echo.contains('/') {
            return None;
        }
        Some(
            ResponseBuilder::new(Status::Ok)
                .header("Content-Type", "text/plain")
                .body(echo.as_bytes().to_vec())
                .build(),
        )
    }
}

/// `GET /user-agent` — 200 text/plain echoing the User-Agent field value.
pub struct UserAgentHandler;

impl Handler for UserAgentHandler {
    fn handle(&self, request: &Request) -> Option<Response> {
        if request.method() != "GET" || request.target() != "/user-agent" {
            return None;
        }
        let agent = request.field("User-Agent").unwrap_or("");
        Some(
            ResponseBuilder::new(Status::Ok)
                .header("Content-Type", "text/plain")
                .body(agent.as_bytes().to_vec())
                .build(),
        )
    }
}

/// `GET`/`POST /files/{name}` — whole-file read/write under a configured
/// base directory. I/O failure is "not applicable", so the router falls
/// through and the client sees a 404.
pub struct FileHandler {
    directory: PathBuf,
}

impl FileHandler {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    /// Resolves the target's filename segment against the base directory.
    /// The segment must be a single plain name: non-empty, no separators,
    /// not `..`.
    fn resolve(&self, target: &str) -> Option<PathBuf> {
        let name = target.strip_prefix("/files/")?;
        if name.is_empty() || name.contains('/') || name.contains('\\') || name == ".." {
            return None;
        }
        Some(self.directory.join(name))
    }
}

impl Handler for FileHandler {
    fn handle(&self, request: &Request) -> Option<Response> {
        let path = self.resolve(request.target())?;

        match request.method() {
            "GET" => {
                let contents = fs::read(&path).ok()?;
                Some(
                    ResponseBuilder::new(Status::Ok)
                        .header("Content-Type", "application/octet-stream")
                        .body(contents)
                        .build(),
                )
            }
            "POST" => {
                fs::write(&path, &request.body).ok()?;
                Some(ResponseBuilder::new(Status::Created).build())
            }
            _ => None,
        }
    }
}
