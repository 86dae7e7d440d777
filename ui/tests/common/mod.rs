use std::time::Duration;

use egui_kittest::Harness;
use roster_business::{BusinessConfig, USER_MANAGEMENT_BASE};
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DEFAULT_NETWORK_WAIT_MS: u64 = 50;

/// Lets spawned command tasks make progress on the test runtime.
pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, RosterApp> {
        &self.harness
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// App on the users screen, backed by a server that returns `users`
    /// for every page.
    pub async fn new_app(users: serde_json::Value, total: u64) -> Self {
        Self::new_app_at(USER_MANAGEMENT_BASE, users, total).await
    }

    pub async fn new_app_at(initial_href: &str, users: serde_json::Value, total: u64) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/account"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "login": "admin",
                "authorities": ["ROLE_ADMIN"]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/admin/users"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Total-Count", total.to_string())
                    .set_body_json(users),
            )
            .mount(&mock_server)
            .await;

        let state = State::at(BusinessConfig::new(mock_server.uri()), initial_href);
        let app = RosterApp::new(state);
        let harness = Harness::builder()
            .with_size(egui::vec2(1400.0, 900.0))
            .build_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    /// Steps frames, yielding to the runtime between them, so commands
    /// finish and their results get drawn.
    pub async fn step_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.harness.step();
            yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
        }
        self.harness.step();
    }
}

pub fn user_json(id: i64, login: &str, activated: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "login": login,
        "email": format!("{login}@localhost"),
        "activated": activated,
        "langKey": "en",
        "authorities": ["ROLE_USER"],
        "createdBy": "system",
        "createdDate": "2021-03-04T10:20:30Z",
        "lastModifiedBy": "admin",
        "lastModifiedDate": null
    })
}
