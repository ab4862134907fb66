use crate::{
    api::{ApiClient, ApiConfig},
    notify::ToastQueue,
    store::LocalState,
};
use std::{net::TcpListener, sync::Arc};
use wiremock::MockServer;

pub fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

/// Client pointed at `{server}/api` with fresh in-memory state.
#[allow(clippy::expect_used)]
pub fn client_for(server: &MockServer) -> ApiClient {
    let config = ApiConfig {
        override_url: Some(format!("{}/api", server.uri())),
        ..ApiConfig::default()
    };
    ApiClient::new(&config, LocalState::in_memory()).expect("mock server URL is valid")
}

pub fn toasts() -> Arc<ToastQueue> {
    Arc::new(ToastQueue::default())
}
