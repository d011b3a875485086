//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.1 server core with support for
//! keep-alive connections and gzip content negotiation.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`cursor`**: A 3-octet lookahead window over the raw byte stream
//! - **`parser`**: Incrementally scans the cursor into structured requests
//! - **`fields`**: Ordered, case-insensitive field-name/value mapping
//! - **`request`**: HTTP request representation and header helpers
//! - **`response`**: HTTP response representation with builder pattern
//! - **`encoding`**: Accept-Encoding negotiation (gzip)
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`connection`**: The main connection handler implementing the
//!   request-response state machine
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Parse the next request from the cursor
//!        └──────┬──────┘
//!               │ Request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route + content negotiation
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Keep-Alive → Reading (same connection, same cursor)
//!               └─ Close → Closed
//! ```
//!
//! The cursor (and therefore any already-buffered bytes of the next
//! request) survives the trip back to `Reading`, so back-to-back requests
//! on one connection are parsed without byte loss or duplication.
//!
//! # Example
//!
//! ```ignore
//! use lantern::http::connection::Connection;
//! use lantern::routes::Router;
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let router = Arc::new(Router::with_defaults(None));
//!     let listener = TcpListener::bind("127.0.0.1:4221").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let router = Arc::clone(&router);
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, router);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod cursor;
pub mod encoding;
pub mod fields;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
