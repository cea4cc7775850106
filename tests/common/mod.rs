use review_report::configuration::get_configuration;
use review_report::db::{InMemoryReviewStore, ReviewStore};
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub store: Arc<InMemoryReviewStore>,
}

pub async fn spawn_app() -> TestApp {
    let store = Arc::new(InMemoryReviewStore::new());
    let address = spawn_app_with_store(store.clone()).await;

    TestApp { address, store }
}

// we have to run server in another thread
pub async fn spawn_app_with_store(store: Arc<dyn ReviewStore>) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let configuration = get_configuration().expect("Failed to get configuration");

    let server = review_report::startup::run(listener, store, configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    address
}
