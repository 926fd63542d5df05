use crate::common::{assert_status, count_matching, json_body};
use crate::stub_api::spawn_stub_api;
use posts_contract::fixtures::{
    COMMENTS_PER_POST, INVALID_POST_IDS, NON_EXISTENT_POST_IDS, VALID_POST_IDS,
};

#[tokio::test]
async fn get_comments_of_a_valid_post_returns_200() {
    let stub = spawn_stub_api().await;
    let api = &stub.api;

    for post_id in VALID_POST_IDS {
        let response = api.list_comments(post_id).await;

        assert_status(&response, 200, &format!("GET /posts/{}/comments", post_id));
    }
}

#[tokio::test]
async fn get_comments_of_a_valid_post_returns_only_its_comments() {
    let stub = spawn_stub_api().await;
    let api = &stub.api;

    for post_id in VALID_POST_IDS {
        let body = json_body(api.list_comments(post_id).await).await;

        assert_eq!(
            count_matching(&body, "postId", post_id),
            COMMENTS_PER_POST,
            "Wrong number of comments for post {}",
            post_id
        );
    }
}

#[tokio::test]
async fn get_comments_of_a_non_existent_post_returns_404() {
    let stub = spawn_stub_api().await;
    let api = &stub.api;

    for post_id in NON_EXISTENT_POST_IDS {
        let response = api.list_comments(post_id).await;

        assert_status(&response, 404, &format!("GET /posts/{}/comments", post_id));
    }
}

#[tokio::test]
async fn get_comments_of_an_invalid_post_id_returns_400() {
    let stub = spawn_stub_api().await;
    let api = &stub.api;

    for post_id in INVALID_POST_IDS {
        let response = api.list_comments(post_id).await;

        assert_status(&response, 400, &format!("GET /posts/{}/comments", post_id));
    }
}
