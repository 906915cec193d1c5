//! API Module
//!
//! HTTP handlers and routing for the posting API.
//!
//! # Endpoints
//! - `POST /signup` - Register and receive a token
//! - `POST /login` - Exchange form credentials for a token
//! - `POST /addpost` - Create a post (bearer)
//! - `GET /getposts` - List own posts, cached per user (bearer)
//! - `DELETE /deletepost/:post_id` - Delete an owned post (bearer)
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
