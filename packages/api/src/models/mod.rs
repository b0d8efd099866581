//! Data models shared with the frontends.

mod user;

pub use user::{RegisterRequest, UserInfo};
