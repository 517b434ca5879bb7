//! Credential verification module
//!
//! Checks a username/password pair against the user directory. Passwords are
//! stored as salted bcrypt hashes; both failure modes (unknown user, wrong
//! password) surface as the same `InvalidCredentials` error.

mod password;
mod service;


pub use password::{hash_cost, hash_password, verify_password};
pub use service::CredentialVerifier;
