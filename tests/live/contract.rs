use crate::common::{assert_status, count_matching, json_body};
use crate::live_api::live_api;
use posts_contract::expectations::{contract, valid_new_post};
use posts_contract::fixtures::{
    COMMENTS_PER_POST, POSTS_PER_USER, POSTS_TOTAL, SINGLE_RESOURCE_CONTENT_TYPE, VALID_POST_IDS,
    VALID_USER_IDS,
};
use posts_contract::verifier::ContractVerifier;

#[tokio::test]
async fn live_api_lists_every_post() {
    let api = live_api();

    let response = api.list_posts().await;

    assert_status(&response, 200, "GET /posts");
    let body = json_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), POSTS_TOTAL);
}

#[tokio::test]
async fn live_api_filters_posts_by_user() {
    let api = live_api();

    for user_id in VALID_USER_IDS {
        let body = json_body(api.list_posts_by_user(user_id).await).await;

        assert_eq!(count_matching(&body, "userId", user_id), POSTS_PER_USER);
    }
}

#[tokio::test]
async fn live_api_serves_single_posts_as_json() {
    let api = live_api();

    for post_id in VALID_POST_IDS {
        let response = api.get_post(post_id).await;

        assert_status(&response, 200, &format!("GET /posts/{}", post_id));
        assert_eq!(
            response.headers()["Content-Type"],
            SINGLE_RESOURCE_CONTENT_TYPE
        );
        assert_eq!(json_body(response).await.as_object().unwrap().len(), 4);
    }
}

#[tokio::test]
async fn live_api_lists_comments_of_a_post() {
    let api = live_api();

    for post_id in VALID_POST_IDS {
        let body = json_body(api.list_comments(post_id).await).await;

        assert_eq!(count_matching(&body, "postId", post_id), COMMENTS_PER_POST);
    }
}

#[tokio::test]
async fn live_api_deletes_existing_posts() {
    let api = live_api();

    for post_id in VALID_POST_IDS {
        let response = api.delete_post(post_id).await;

        assert_status(&response, 200, &format!("DELETE /posts/{}", post_id));
    }
}

#[tokio::test]
async fn live_api_creates_a_post() {
    let api = live_api();
    let payload = valid_new_post().to_json();

    let response = api.create_post(Some(&payload)).await;

    assert_status(&response, 201, "POST /posts with a valid body");
    let body = json_body(response).await;
    assert_eq!(body["title"], "foo");
    assert!(body.get("id").is_some());
}

#[tokio::test]
async fn live_api_honours_the_whole_contract() {
    let api = live_api();
    let verifier = ContractVerifier::new(api.api_client.clone());

    let report = verifier
        .run(&contract())
        .await
        .expect("The live API could not be reached");

    report.log_summary();
    let failures: Vec<_> = report.failures().collect();
    assert!(failures.is_empty(), "{:#?}", failures);
}
