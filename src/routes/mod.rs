//! Request routing.
//!
//! A [`Router`] holds an ordered list of handlers; the first handler that
//! recognizes a request produces the response. Ordering is significant and
//! caller-controlled, so overlapping patterns get explicit precedence.
//! A handler signals "not applicable" with `None` — plain control flow,
//! never an error. If no handler matches, the connection loop supplies the
//! default 404.

pub mod handlers;

use crate::http::request::Request;
use crate::http::response::Response;
use handlers::{EchoHandler, FileHandler, RootHandler, UserAgentHandler};
use std::path::PathBuf;

pub trait Handler: Send + Sync {
    /// Produces a response, or `None` when this handler does not apply.
    fn handle(&self, request: &Request) -> Option<Response>;
}

/// Ordered list of handlers; first match wins.
pub struct Router {
    handlers: Vec<Box<dyn Handler>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler. Registration order is match order.
    pub fn register(mut self, handler: impl Handler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Returns the first non-`None` response, or `None` if no handler matched.
    pub fn route(&self, request: &Request) -> Option<Response> {
        self.handlers.iter().find_map(|h| h.handle(request))
    }

    /// The standard route table: root, echo, user-agent, and (only when a
    /// base directory is configured) the file routes.
    pub fn with_defaults(directory: Option<PathBuf>) -> Self {
        let mut router = Router::new()
            .register(RootHandler)
            .register(EchoHandler)
            .register(UserAgentHandler);

        if let Some(directory) = directory {
            router = router.register(FileHandler::new(directory));
        }

        router
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
