//! tinyhttpd - minimal HTTP/1.1 origin server
//!
//! Core library for request parsing, routing and the connection loop.

pub mod config;
pub mod http;
pub mod routes;
pub mod server;
pub mod store;
