//! Admin user entity.

/// Administrator account able to open a session on the admin panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Argon2 PHC string; never serialized
    pub password_hash: String,
}
