//! Access gate module
//!
//! Turns the raw `Authorization` header value of a request into the user it
//! authenticates, or the reason it does not.

mod service;


pub use service::{extract_token, AccessGate};
