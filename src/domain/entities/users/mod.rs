//! Users Entity Module
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new(username, email, full_name, password_hash, avatar_url, None);
//! ```

pub mod user;
