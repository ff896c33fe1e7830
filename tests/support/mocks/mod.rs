// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod repos;
pub mod security;
pub mod storage;
pub mod time;
pub mod util;

pub use repos::{InMemoryArticleRepo, RepoCall};
pub use security::{EDITOR_PASSWORD, EDITOR_USERNAME, StaticCredentialVerifier, editor};
pub use storage::RecordingImageStorage;
pub use time::fixed_now;
pub use util::{FixedClock, SequenceTokens};
