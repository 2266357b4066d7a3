//! End-to-end tests driving the full HTTP stack over a real socket.
//!
//! Each test spins up the API against a throwaway data directory, binds an
//! ephemeral port, and talks to it with a plain HTTP client.

use serde_json::{Value, json};

use linkshelf_api::http::router::build_router;
use linkshelf_api::state::AppState;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
    // Held so the database directory outlives the server task.
    _data_dir: tempfile::TempDir,
}

impl TestApp {
    async fn spawn() -> Self {
        let data_dir = tempfile::tempdir().unwrap();
        let state = AppState::init_at(data_dir.path().to_path_buf())
            .await
            .unwrap();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = build_router(state);

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
            _data_dir: data_dir,
        }
    }

    async fn post(&self, path: &str, body: Value) -> reqwest::Response {
        self.client
            .post(format!("{}{path}", self.base_url))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    async fn signup(&self, email: &str, password: &str) -> String {
        let resp = self
            .post("/auth/signup", json!({ "email": email, "password": password }))
            .await;
        assert_eq!(resp.status(), 201);
        let body: Value = resp.json().await.unwrap();
        body["access_token"].as_str().unwrap().to_string()
    }
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .get(format!("{}/health", app.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_signup_validation() {
    let app = TestApp::spawn().await;

    // Missing password
    let resp = app
        .post("/auth/signup", json!({ "email": "moll@gmail.com" }))
        .await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    // Missing email
    let resp = app.post("/auth/signup", json!({ "password": "123456" })).await;
    assert_eq!(resp.status(), 400);

    // Empty body
    let resp = app.post("/auth/signup", json!({})).await;
    assert_eq!(resp.status(), 400);

    // Malformed email
    let resp = app
        .post(
            "/auth/signup",
            json!({ "email": "not-an-email", "password": "123456" }),
        )
        .await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_missing_and_malformed_bodies_use_error_shape() {
    let app = TestApp::spawn().await;

    // No body at all (and no content type)
    let resp = app
        .client
        .post(format!("{}/auth/signup", app.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    // Malformed JSON
    let resp = app
        .client
        .post(format!("{}/auth/signup", app.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    // Authenticated routes behave the same
    let token = app.signup("moll@gmail.com", "123456").await;
    let resp = app
        .client
        .post(format!("{}/bookmarks", app.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_signin_validation_and_failures() {
    let app = TestApp::spawn().await;
    app.signup("moll@gmail.com", "123456").await;

    // Missing fields behave like signup
    let resp = app.post("/auth/signin", json!({ "email": "moll@gmail.com" })).await;
    assert_eq!(resp.status(), 400);

    let resp = app.post("/auth/signin", json!({})).await;
    assert_eq!(resp.status(), 400);

    // Wrong password
    let resp = app
        .post(
            "/auth/signin",
            json!({ "email": "moll@gmail.com", "password": "wrong" }),
        )
        .await;
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");

    // Unknown account
    let resp = app
        .post(
            "/auth/signin",
            json!({ "email": "nobody@gmail.com", "password": "123456" }),
        )
        .await;
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_duplicate_signup_conflicts() {
    let app = TestApp::spawn().await;
    app.signup("moll@gmail.com", "123456").await;

    let resp = app
        .post(
            "/auth/signup",
            json!({ "email": "moll@gmail.com", "password": "other" }),
        )
        .await;
    assert_eq!(resp.status(), 409);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "EMAIL_TAKEN");
}

#[tokio::test]
async fn test_signin_issues_fresh_token() {
    let app = TestApp::spawn().await;
    let signup_token = app.signup("moll@gmail.com", "123456").await;
    assert!(signup_token.starts_with("lshelf_"));

    let resp = app
        .post(
            "/auth/signin",
            json!({ "email": "moll@gmail.com", "password": "123456" }),
        )
        .await;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    let signin_token = body["access_token"].as_str().unwrap().to_string();

    assert!(signin_token.starts_with("lshelf_"));
    assert_ne!(signup_token, signin_token);

    // Both tokens resolve to the same account
    for token in [&signup_token, &signin_token] {
        let resp = app
            .client
            .get(format!("{}/users/me", app.base_url))
            .bearer_auth(token)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let me: Value = resp.json().await.unwrap();
        assert_eq!(me["email"], "moll@gmail.com");
    }
}

#[tokio::test]
async fn test_profile_shape_and_edit() {
    let app = TestApp::spawn().await;
    let token = app.signup("moll@gmail.com", "123456").await;

    let resp = app
        .client
        .get(format!("{}/users/me", app.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let me: Value = resp.json().await.unwrap();
    assert_eq!(me["email"], "moll@gmail.com");
    assert!(me["firstName"].is_null());
    assert!(me.get("createdAt").is_some());
    // Hashes never leave the server
    assert!(me.get("password_hash").is_none());
    assert!(me.get("passwordHash").is_none());

    let resp = app
        .client
        .patch(format!("{}/users", app.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "firstName": "Moll",
            "email": "moll@moll.com",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["firstName"], "Moll");
    assert_eq!(updated["email"], "moll@moll.com");
    assert!(updated["lastName"].is_null());

    // New email works for signin
    let resp = app
        .post(
            "/auth/signin",
            json!({ "email": "moll@moll.com", "password": "123456" }),
        )
        .await;
    assert_eq!(resp.status(), 201);
}

#[tokio::test]
async fn test_edit_user_rejects_bad_email() {
    let app = TestApp::spawn().await;
    let token = app.signup("moll@gmail.com", "123456").await;

    let resp = app
        .client
        .patch(format!("{}/users", app.base_url))
        .bearer_auth(&token)
        .json(&json!({ "email": "nope" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_requests_without_token_are_unauthorized() {
    let app = TestApp::spawn().await;

    for (method, path) in [
        ("GET", "/users/me"),
        ("PATCH", "/users"),
        ("GET", "/bookmarks"),
        ("POST", "/bookmarks"),
    ] {
        let req = match method {
            "GET" => app.client.get(format!("{}{path}", app.base_url)),
            "PATCH" => app
                .client
                .patch(format!("{}{path}", app.base_url))
                .json(&json!({})),
            _ => app
                .client
                .post(format!("{}{path}", app.base_url))
                .json(&json!({})),
        };
        let resp = req.send().await.unwrap();
        assert_eq!(resp.status(), 401, "{method} {path}");
    }

    // Garbage token is also rejected
    let resp = app
        .client
        .get(format!("{}/bookmarks", app.base_url))
        .bearer_auth("lshelf_bogus")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_bookmark_crud_flow() {
    let app = TestApp::spawn().await;
    let token = app.signup("moll@gmail.com", "123456").await;

    // Starts empty
    let resp = app
        .client
        .get(format!("{}/bookmarks", app.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let list: Value = resp.json().await.unwrap();
    assert_eq!(list, json!([]));

    // Create
    let resp = app
        .client
        .post(format!("{}/bookmarks", app.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "link": "https://google.com",
            "title": "Google",
            "description": "Search engine",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let created: Value = resp.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["link"], "https://google.com");
    assert_eq!(created["title"], "Google");
    assert_eq!(created["description"], "Search engine");

    // List has one entry
    let resp = app
        .client
        .get(format!("{}/bookmarks", app.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let list: Value = resp.json().await.unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["id"], id.as_str());

    // Get by id
    let resp = app
        .client
        .get(format!("{}/bookmarks/{id}", app.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched["title"], "Google");

    // Partial edit keeps the other fields
    let resp = app
        .client
        .patch(format!("{}/bookmarks/{id}", app.base_url))
        .bearer_auth(&token)
        .json(&json!({ "description": "The search engine" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let edited: Value = resp.json().await.unwrap();
    assert_eq!(edited["description"], "The search engine");
    assert_eq!(edited["link"], "https://google.com");

    // Delete, then the list is empty again
    let resp = app
        .client
        .delete(format!("{}/bookmarks/{id}", app.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(format!("{}/bookmarks/{id}", app.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = app
        .client
        .get(format!("{}/bookmarks", app.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let list: Value = resp.json().await.unwrap();
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_create_bookmark_validation() {
    let app = TestApp::spawn().await;
    let token = app.signup("moll@gmail.com", "123456").await;

    // Missing link
    let resp = app
        .client
        .post(format!("{}/bookmarks", app.base_url))
        .bearer_auth(&token)
        .json(&json!({ "title": "Google" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Missing title
    let resp = app
        .client
        .post(format!("{}/bookmarks", app.base_url))
        .bearer_auth(&token)
        .json(&json!({ "link": "https://google.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Garbage id in the path
    let resp = app
        .client
        .get(format!("{}/bookmarks/not-a-uuid", app.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_cross_user_isolation() {
    let app = TestApp::spawn().await;
    let owner = app.signup("moll@gmail.com", "123456").await;
    let intruder = app.signup("other@gmail.com", "123456").await;

    let resp = app
        .client
        .post(format!("{}/bookmarks", app.base_url))
        .bearer_auth(&owner)
        .json(&json!({ "link": "https://google.com", "title": "Google" }))
        .send()
        .await
        .unwrap();
    let created: Value = resp.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    // Foreign bookmarks are invisible to reads
    let resp = app
        .client
        .get(format!("{}/bookmarks/{id}", app.base_url))
        .bearer_auth(&intruder)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = app
        .client
        .get(format!("{}/bookmarks", app.base_url))
        .bearer_auth(&intruder)
        .send()
        .await
        .unwrap();
    let list: Value = resp.json().await.unwrap();
    assert_eq!(list, json!([]));

    // Mutations on a foreign bookmark are denied outright
    let resp = app
        .client
        .patch(format!("{}/bookmarks/{id}", app.base_url))
        .bearer_auth(&intruder)
        .json(&json!({ "title": "Hijacked" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);

    let resp = app
        .client
        .delete(format!("{}/bookmarks/{id}", app.base_url))
        .bearer_auth(&intruder)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);

    // Owner still sees the bookmark untouched
    let resp = app
        .client
        .get(format!("{}/bookmarks/{id}", app.base_url))
        .bearer_auth(&owner)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched["title"], "Google");
}
