//! Request and response models of the JSONPlaceholder API
//!
//! Response models ignore unknown fields and tolerate missing ones.

mod comment;
mod post;
mod user;

pub use comment::CommentResponse;
pub use post::{Post, PostRequest, PostResponse};
pub use user::{Address, Company, UserResponse};
