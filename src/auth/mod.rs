//! Authentication for the single admin identity.

pub mod credentials;
pub mod handlers;
pub mod middleware;
pub mod password;

pub use credentials::AdminCredentials;
pub use handlers::*;
pub use middleware::{AuthContext, OptionalAuth, SESSION_COOKIE_NAME};
