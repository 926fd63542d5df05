//! Fixture data taken from the API's published guide.
//!
//! Every expectation in the contract table is generated from these values.

/// Number of posts served by `GET /posts`
pub const POSTS_TOTAL: usize = 100;
pub const POSTS_PER_USER: usize = 10;
pub const COMMENTS_PER_POST: usize = 5;

pub const SINGLE_RESOURCE_CONTENT_TYPE: &str = "application/json; charset=utf-8";

pub const VALID_POST_IDS: [i64; 4] = [1, 50, 99, 100];
pub const VALID_USER_IDS: [i64; 4] = [1, 5, 9, 10];

/// Well-formed but absent identifiers (404)
pub const NON_EXISTENT_POST_IDS: [i64; 3] = [0, 101, 435];
pub const NON_EXISTENT_USER_IDS: [i64; 3] = [0, 11, 43];

/// Tokens that are not identifiers at all (400)
pub const INVALID_POST_IDS: [&str; 2] = ["a", "!"];
pub const INVALID_USER_IDS: [&str; 2] = ["a", "!"];

pub const NEW_POST_TITLE: &str = "foo";
pub const NEW_POST_BODY: &str = "bar";
pub const NEW_POST_USER_ID: i64 = 1;
