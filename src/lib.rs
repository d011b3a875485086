//! Lantern - Minimal Asynchronous HTTP/1.1 Server
//!
//! Core library for the HTTP protocol layer, routing, and the accept loop.

pub mod config;
pub mod http;
pub mod routes;
pub mod server;
