// src/infrastructure/security/mod.rs
pub mod credentials;
pub mod password;
