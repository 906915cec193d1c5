//! Authentication Module
//!
//! Password checks, access token issue/validation and the bearer header
//! extractor used by protected handlers.

mod authenticator;
mod extractor;
mod token;

pub use authenticator::Authenticator;
pub use extractor::BearerToken;
pub use token::{Claims, TokenError, TokenService};
