//! HTTP/1.1 protocol handling.
//!
//! - **`connection`**: per-connection loop implementing the request-response state machine
//! - **`parser`**: parses requests out of the connection buffer
//! - **`request`**: request representation and header accessors
//! - **`path`**: splits a request target into route key and argument
//! - **`response`**: response representation and header layout
//! - **`encoding`**: `Accept-Encoding` negotiation and gzip body encoding
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for a complete request
//!        └──────┬──────┘
//!               │ Request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Dispatch to the route handler
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Keep-Alive → Reading (same connection)
//!               └─ Connection: close → Closed
//! ```
//!
//! End of stream, a read error or a malformed request also lead to `Closed`.

pub mod connection;
pub mod encoding;
pub mod parser;
pub mod path;
pub mod request;
pub mod response;
pub mod writer;
