//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: each client connection carries
//! exactly one request and one response, then closes. Only the request line
//! and a `Content-Length` header are honored; every other header is read and
//! discarded.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection handler (parse → route → respond → close)
//! - **`parser`**: parses an incoming request from a byte buffer
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation with constructors
//! - **`writer`**: serializes and writes responses to the client
//! - **`mime`**: content type detection based on file extensions

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
