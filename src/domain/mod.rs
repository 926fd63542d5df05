mod post;
mod resource_id;

pub use post::{Comment, NewPost, Post};
pub use resource_id::ResourceId;
