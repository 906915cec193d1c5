//! Data shapes for the posting API
//!
//! Stored entities plus the DTOs used for serializing/deserializing HTTP
//! request and response bodies.

pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::{Post, User};
pub use requests::{LoginForm, PostCreate, SignupRequest, MAX_POST_BYTES};
pub use responses::{DeleteResponse, ErrorResponse, HealthResponse, TokenResponse};
