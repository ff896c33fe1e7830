use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
    pub authenticated_at: DateTime<Utc>,
}
