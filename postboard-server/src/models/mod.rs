//! Domain models shared by the store and the HTTP layer

pub mod envelope;
pub mod pagination;
pub mod post;

pub use envelope::{Envelope, Payload, Status};
pub use pagination::{Pagination, PaginationParams};
pub use post::{CreatePostRequest, Created, Post};
