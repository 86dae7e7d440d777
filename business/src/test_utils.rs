//! Mock-server harness for the business flow tests.
//!
//! ```ignore
//! let mut test_ctx = TestContext::new().await;
//! test_ctx.mock_users_page(1, "id,asc", vec![sample_user(1, "admin")], 21).await;
//! test_ctx.frame();
//! test_ctx.flush_and_wait().await;
//! ```

use std::time::Duration;

use roster_states::StateCtx;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::user_management::{advance_updates, sync_location};
use crate::{BusinessConfig, USER_MANAGEMENT_BASE, User, register_user_management};

pub struct TestContext {
    pub mock_server: MockServer,
    pub ctx: StateCtx,
}

impl TestContext {
    /// Router at the users screen with no query string.
    pub async fn new() -> Self {
        Self::at(USER_MANAGEMENT_BASE).await
    }

    pub async fn at(initial_href: &str) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        let mut ctx = StateCtx::new();
        register_user_management(&mut ctx, BusinessConfig::new(mock_server.uri()), initial_href);

        Self { mock_server, ctx }
    }

    /// The per-frame bookkeeping the UI does before drawing.
    pub fn frame(&mut self) {
        self.ctx.sync_computes();
        sync_location(&mut self.ctx);
        advance_updates(&mut self.ctx);
    }

    /// Spawns queued commands and waits for every task to finish.
    pub async fn flush_and_wait(&mut self) {
        self.ctx.sync_computes();
        self.ctx.flush_commands();

        let timeout = Duration::from_secs(5);
        let start = std::time::Instant::now();
        while self.ctx.task_count() > 0 {
            assert!(
                start.elapsed() < timeout,
                "Timed out waiting for pending tasks ({} still in JoinSet)",
                self.ctx.task_count()
            );
            if self.ctx.task_set_mut().join_next().await.is_some() {
                self.ctx.sync_computes();
            }
        }
        self.ctx.sync_computes();
    }

    /// Runs frames until nothing new gets queued.
    pub async fn settle(&mut self) {
        for _ in 0..8 {
            self.frame();
            if !self.ctx.has_pending_commands() {
                return;
            }
            self.flush_and_wait().await;
        }
    }

    pub async fn mock_account(&self, login: &str) {
        Mock::given(method("GET"))
            .and(path("/api/account"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "login": login,
                "authorities": ["ROLE_ADMIN"]
            })))
            .mount(&self.mock_server)
            .await;
    }

    /// `page` is zero-based, as the backend sees it.
    pub async fn mock_users_page(&self, page: u32, sort: &str, users: Vec<User>, total: u64) {
        self.mock_users_page_delayed(page, sort, users, total, Duration::ZERO)
            .await;
    }

    pub async fn mock_users_page_delayed(
        &self,
        page: u32,
        sort: &str,
        users: Vec<User>,
        total: u64,
        delay: Duration,
    ) {
        Mock::given(method("GET"))
            .and(path("/api/admin/users"))
            .and(query_param("page", page.to_string()))
            .and(query_param("sort", sort))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Total-Count", total.to_string())
                    .set_body_json(users)
                    .set_delay(delay),
            )
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_update_user(&self) {
        Mock::given(method("PUT"))
            .and(path("/api/admin/users"))
            .respond_with(|request: &wiremock::Request| {
                ResponseTemplate::new(200).set_body_bytes(request.body.clone())
            })
            .mount(&self.mock_server)
            .await;
    }

    /// Fails the PUT for `login` with `status`; other updates keep echoing.
    pub async fn mock_update_user_failing(&self, login: &str, status: u16) {
        Mock::given(method("PUT"))
            .and(path("/api/admin/users"))
            .and(body_partial_json(serde_json::json!({ "login": login })))
            .respond_with(ResponseTemplate::new(status))
            .with_priority(1)
            .mount(&self.mock_server)
            .await;
    }

    /// Logins of the users sent to `PUT /api/admin/users`, in arrival order.
    pub async fn put_logins(&self) -> Vec<String> {
        self.requests_to("PUT", "/api/admin/users")
            .await
            .iter()
            .filter_map(|request| serde_json::from_slice::<User>(&request.body).ok())
            .map(|user| user.login)
            .collect()
    }

    /// Requests the mock server received for `method path`.
    pub async fn requests_to(&self, http_method: &str, url_path: &str) -> Vec<wiremock::Request> {
        self.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.method.as_str() == http_method && r.url.path() == url_path)
            .collect()
    }

    pub async fn shutdown(&mut self) {
        self.ctx.shutdown().await;
    }
}

pub fn sample_user(id: i64, login: &str) -> User {
    User {
        id: Some(id),
        login: login.to_owned(),
        first_name: Some("Sample".to_owned()),
        email: Some(format!("{login}@localhost")),
        activated: true,
        lang_key: Some("en".to_owned()),
        authorities: vec!["ROLE_USER".to_owned()],
        created_by: Some("system".to_owned()),
        ..User::default()
    }
}
