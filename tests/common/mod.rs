use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use contactbox::config::Config;

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON contact submission, return (body, status).
    pub async fn submit(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/contact"))
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a valid contact and assert it was stored.
    pub async fn submit_ok(&self, name: &str, email: &str, message: &str) {
        let (body, status) = self
            .submit(&json!({ "name": name, "email": email, "message": message }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "submit failed: {body}");
    }

    /// GET the submission listing, return (body, status).
    pub async fn list(&self) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url("/api/contacts"))
            .send()
            .await
            .expect("list request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET the rendered submissions page, return (html, status).
    pub async fn page(&self) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url("/submissions"))
            .send()
            .await
            .expect("page request failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }

    /// Row count straight from the store.
    pub async fn stored_count(&self) -> i64 {
        contactbox::db::submissions::count(&self.pool)
            .await
            .expect("count query failed")
    }
}

fn admin_url(base_url: &str) -> String {
    base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.to_string())
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app() -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    let db_name = format!("contactbox_test_{}", Uuid::now_v7().to_string().replace('-', ""));

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 65_536,
        db_max_connections: 5,
        log_level: "warn".to_string(),
    };

    let app = contactbox::build_app(pool.clone(), config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        pool,
        client: Client::new(),
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
