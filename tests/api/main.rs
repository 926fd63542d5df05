#[path = "../common/mod.rs"]
mod common;

mod comments;
mod create_post;
mod delete_post;
