//! Authentication
//!
//! Users are authenticated by an external identity service that issues
//! HS256 access tokens. This module only verifies them.

mod jwt;
mod middleware;

pub use jwt::{Claims, JwtService};
pub use middleware::AuthUser;
