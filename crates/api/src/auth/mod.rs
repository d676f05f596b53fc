//! Token generation and credential hashing.

pub mod jwt;
pub mod password;
