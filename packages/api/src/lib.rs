//! # API crate: client side of the inventory backend
//!
//! Everything the frontends need to talk to the inventory REST backend lives here.
//! The backend itself is a separate service; this crate only owns the request and
//! response shapes, the HTTP client, and the checks that run before a request is sent.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Backend base URL resolved from the environment (`BACKEND_URL`) |
//! | [`client`] | [`ApiClient`], a thin `reqwest` wrapper over the user endpoints |
//! | [`error`] | [`ApiError`], with the server's `message` field surfaced as `Display` |
//! | [`models`] | [`RegisterRequest`] and the client-safe [`UserInfo`] projection |
//! | [`validate`] | [`validate_email`], the structural email check used by the forms |

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod validate;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{RegisterRequest, UserInfo};
pub use validate::validate_email;
