use crate::common::assert_status;
use crate::stub_api::spawn_stub_api;
use posts_contract::fixtures::{INVALID_POST_IDS, NON_EXISTENT_POST_IDS, VALID_POST_IDS};

#[tokio::test]
async fn delete_post_by_valid_id_returns_200() {
    let stub = spawn_stub_api().await;
    let api = &stub.api;

    for post_id in VALID_POST_IDS {
        let response = api.delete_post(post_id).await;

        assert_status(&response, 200, &format!("DELETE /posts/{}", post_id));
    }
}

#[tokio::test]
async fn delete_post_by_non_existent_id_returns_404() {
    let stub = spawn_stub_api().await;
    let api = &stub.api;

    for post_id in NON_EXISTENT_POST_IDS {
        let response = api.delete_post(post_id).await;

        assert_status(&response, 404, &format!("DELETE /posts/{}", post_id));
    }
}

#[tokio::test]
async fn delete_post_by_invalid_id_returns_400() {
    let stub = spawn_stub_api().await;
    let api = &stub.api;

    for post_id in INVALID_POST_IDS {
        let response = api.delete_post(post_id).await;

        assert_status(&response, 400, &format!("DELETE /posts/{}", post_id));
    }
}
