use crate::common::{TRACING, TestApi};
use posts_contract::configuration::get_configuration;
use std::sync::LazyLock;

/// Client for the remote service named in `configuration/`.
pub fn live_api() -> TestApi {
    LazyLock::force(&TRACING);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let api_client = configuration
        .api
        .client()
        .expect("Failed to build API client.");
    TestApi { api_client }
}
