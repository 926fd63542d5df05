//! The expectation table: which request must produce which status,
//! content type and body.

use crate::api_client::ApiRequest;
use crate::domain::{NewPost, ResourceId};
use crate::fixtures::{
    COMMENTS_PER_POST, INVALID_POST_IDS, INVALID_USER_IDS, NEW_POST_BODY, NEW_POST_TITLE,
    NEW_POST_USER_ID, NON_EXISTENT_POST_IDS, NON_EXISTENT_USER_IDS, POSTS_PER_USER, POSTS_TOTAL,
    SINGLE_RESOURCE_CONTENT_TYPE, VALID_POST_IDS, VALID_USER_IDS,
};
use reqwest::StatusCode;
use serde_json::Value;

const POST_FIELDS: [&str; 4] = ["userId", "id", "title", "body"];

/// A single failed assertion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Violation {
    #[error("expected status {expected}, got {actual}")]
    Status {
        expected: StatusCode,
        actual: StatusCode,
    },
    #[error("expected content type {expected:?}, got {actual:?}")]
    ContentType {
        expected: &'static str,
        actual: Option<String>,
    },
    #[error("response body is not JSON: {0}")]
    NotJson(String),
    #[error("unexpected body: {0}")]
    Body(String),
}

/// Predicate over a decoded JSON response body.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyCheck {
    Ignore,
    /// A JSON array with exactly this many elements.
    ListLength(usize),
    /// An object with exactly the four post fields.
    PostShape,
    /// `count` elements whose `key` equals `value`, and no others.
    AllMatch {
        key: &'static str,
        value: i64,
        count: usize,
    },
    /// The submitted post echoed back, plus a generated `id`.
    EchoedPost(NewPost),
}

impl BodyCheck {
    pub fn evaluate(&self, body: &Value) -> Result<(), Violation> {
        match self {
            BodyCheck::Ignore => Ok(()),
            BodyCheck::ListLength(expected) => {
                let elements = as_array(body)?;
                if elements.len() != *expected {
                    return Err(Violation::Body(format!(
                        "expected {} elements, got {}",
                        expected,
                        elements.len()
                    )));
                }
                Ok(())
            }
            BodyCheck::PostShape => check_post_fields(body),
            BodyCheck::AllMatch { key, value, count } => {
                let elements = as_array(body)?;
                let matching = elements
                    .iter()
                    .filter(|element| element.get(*key).and_then(Value::as_i64) == Some(*value))
                    .count();
                if matching != elements.len() {
                    return Err(Violation::Body(format!(
                        "{} of {} elements have {} != {}",
                        elements.len() - matching,
                        elements.len(),
                        key,
                        value
                    )));
                }
                if matching != *count {
                    return Err(Violation::Body(format!(
                        "expected {} elements with {} == {}, got {}",
                        count, key, value, matching
                    )));
                }
                Ok(())
            }
            BodyCheck::EchoedPost(sent) => {
                check_post_fields(body)?;
                let echoes_payload = body["title"] == sent.title.as_str()
                    && body["body"] == sent.body.as_str()
                    && body["userId"] == sent.user_id;
                if !echoes_payload {
                    return Err(Violation::Body(format!(
                        "created post does not echo the payload: {}",
                        body
                    )));
                }
                Ok(())
            }
        }
    }
}

fn as_array(body: &Value) -> Result<&Vec<Value>, Violation> {
    body.as_array()
        .ok_or_else(|| Violation::Body(format!("expected a JSON array, got {}", body)))
}

fn check_post_fields(body: &Value) -> Result<(), Violation> {
    let object = body
        .as_object()
        .ok_or_else(|| Violation::Body(format!("expected a JSON object, got {}", body)))?;
    let has_every_field = POST_FIELDS.iter().all(|field| object.contains_key(*field));
    if object.len() != POST_FIELDS.len() || !has_every_field {
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        return Err(Violation::Body(format!(
            "expected exactly the fields {:?}, got {:?}",
            POST_FIELDS, keys
        )));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Expectation {
    pub name: String,
    pub request: ApiRequest,
    pub status: StatusCode,
    pub content_type: Option<&'static str>,
    pub body: BodyCheck,
}

impl Expectation {
    fn new(name: impl Into<String>, request: ApiRequest, status: StatusCode) -> Self {
        Self {
            name: name.into(),
            request,
            status,
            content_type: None,
            body: BodyCheck::Ignore,
        }
    }

    fn with_content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = Some(content_type);
        self
    }

    fn with_body(mut self, body: BodyCheck) -> Self {
        self.body = body;
        self
    }
}

pub fn valid_new_post() -> NewPost {
    NewPost {
        title: NEW_POST_TITLE.to_string(),
        body: NEW_POST_BODY.to_string(),
        user_id: NEW_POST_USER_ID,
    }
}

/// Payloads that must be rejected with 400, keyed by a short description.
pub fn malformed_post_payloads() -> Vec<(&'static str, Option<Value>)> {
    use serde_json::json;
    vec![
        ("empty body", None),
        ("only a title", Some(json!({"title": "foo"}))),
        (
            "userId of the wrong type",
            Some(json!({"title": "foo", "body": "bar", "userId": "a"})),
        ),
        ("no userId", Some(json!({"title": "foo", "body": "bar"}))),
        (
            "title of the wrong type",
            Some(json!({"title": 1, "body": "bar", "userId": 1})),
        ),
        ("no title", Some(json!({"body": "bar", "userId": 1}))),
        (
            "body of the wrong type",
            Some(json!({"title": "foo", "body": 1, "userId": 1})),
        ),
        ("no body", Some(json!({"title": "foo", "userId": 1}))),
    ]
}

/// Every expectation of the contract, positive cases first.
pub fn contract() -> Vec<Expectation> {
    let mut expectations = vec![
        Expectation::new("list all posts", ApiRequest::ListPosts, StatusCode::OK)
            .with_body(BodyCheck::ListLength(POSTS_TOTAL)),
    ];

    for user_id in VALID_USER_IDS {
        expectations.push(
            Expectation::new(
                format!("list posts of user {}", user_id),
                ApiRequest::ListPostsByUser(ResourceId::Numeric(user_id)),
                StatusCode::OK,
            )
            .with_body(BodyCheck::AllMatch {
                key: "userId",
                value: user_id,
                count: POSTS_PER_USER,
            }),
        );
    }

    for post_id in VALID_POST_IDS {
        let id = ResourceId::Numeric(post_id);
        expectations.push(
            Expectation::new(
                format!("get post {}", post_id),
                ApiRequest::GetPost(id),
                StatusCode::OK,
            )
            .with_content_type(SINGLE_RESOURCE_CONTENT_TYPE)
            .with_body(BodyCheck::PostShape),
        );
        expectations.push(
            Expectation::new(
                format!("list comments of post {}", post_id),
                ApiRequest::ListComments(id),
                StatusCode::OK,
            )
            .with_body(BodyCheck::AllMatch {
                key: "postId",
                value: post_id,
                count: COMMENTS_PER_POST,
            }),
        );
        expectations.push(Expectation::new(
            format!("delete post {}", post_id),
            ApiRequest::DeletePost(id),
            StatusCode::OK,
        ));
    }

    let new_post = valid_new_post();
    expectations.push(
        Expectation::new(
            "create a post",
            ApiRequest::CreatePost(Some(new_post.to_json())),
            StatusCode::CREATED,
        )
        .with_body(BodyCheck::EchoedPost(new_post)),
    );

    let user_ids = NON_EXISTENT_USER_IDS
        .into_iter()
        .map(|id| (ResourceId::Numeric(id), StatusCode::NOT_FOUND))
        .chain(
            INVALID_USER_IDS
                .into_iter()
                .map(|token| (ResourceId::Raw(token), StatusCode::BAD_REQUEST)),
        );
    for (user_id, status) in user_ids {
        expectations.push(Expectation::new(
            format!("list posts of user {:?}", user_id.to_string()),
            ApiRequest::ListPostsByUser(user_id),
            status,
        ));
    }

    let post_ids = NON_EXISTENT_POST_IDS
        .into_iter()
        .map(|id| (ResourceId::Numeric(id), StatusCode::NOT_FOUND))
        .chain(
            INVALID_POST_IDS
                .into_iter()
                .map(|token| (ResourceId::Raw(token), StatusCode::BAD_REQUEST)),
        );
    for (post_id, status) in post_ids {
        let shown = format!("{:?}", post_id.to_string());
        expectations.push(Expectation::new(
            format!("get post {}", shown),
            ApiRequest::GetPost(post_id),
            status,
        ));
        expectations.push(Expectation::new(
            format!("list comments of post {}", shown),
            ApiRequest::ListComments(post_id),
            status,
        ));
        expectations.push(Expectation::new(
            format!("delete post {}", shown),
            ApiRequest::DeletePost(post_id),
            status,
        ));
    }

    for (description, payload) in malformed_post_payloads() {
        expectations.push(Expectation::new(
            format!("create a post with {}", description),
            ApiRequest::CreatePost(payload),
            StatusCode::BAD_REQUEST,
        ));
    }

    expectations
}
