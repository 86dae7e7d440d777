//! Calls against the admin user endpoints.
//!
//! Every helper takes the [`BusinessConfig`] for the base URL and bearer
//! token, and returns plain data. Mapping results into computes is left to
//! the commands.

use thiserror::Error;
use url::form_urlencoded;

use crate::BusinessConfig;
use crate::http::{Client, RequestBuilder, Response};
use crate::user::{Account, User};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Query sent to `GET /admin/users`. `page` is zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersQuery {
    pub page: u32,
    pub size: usize,
    pub sort: String,
}

/// One page of users plus the backend's total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersPage {
    pub users: Vec<User>,
    pub total_items: u64,
}

const TOTAL_COUNT_HEADER: &str = "x-total-count";

fn authorized(request: RequestBuilder, config: &BusinessConfig) -> RequestBuilder {
    request
        .header("accept", "application/json")
        .bearer(config.auth_token())
}

async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.message))?;
    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }
    Ok(response)
}

/// GET `/admin/users?page=&size=&sort=`
pub async fn list_users(config: &BusinessConfig, query: &UsersQuery) -> ApiResult<UsersPage> {
    let url = format!(
        "{}/admin/users?page={}&size={}&sort={}",
        config.api_url(),
        query.page,
        query.size,
        form_urlencoded::byte_serialize(query.sort.as_bytes()).collect::<String>()
    );

    let response = send(authorized(Client::get(url), config)).await?;
    let users: Vec<User> = response
        .json()
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    let total_items = response
        .header(TOTAL_COUNT_HEADER)
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(users.len() as u64);

    Ok(UsersPage { users, total_items })
}

/// PUT `/admin/users` with the full user record.
pub async fn update_user(config: &BusinessConfig, user: &User) -> ApiResult<User> {
    let url = format!("{}/admin/users", config.api_url());
    let request = authorized(Client::put(url), config)
        .json(user)
        .map_err(|e| ApiError::Encode(e.to_string()))?;

    send(request)
        .await?
        .json()
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET `/account`
pub async fn get_account(config: &BusinessConfig) -> ApiResult<Account> {
    let url = format!("{}/account", config.api_url());

    send(authorized(Client::get(url), config))
        .await?
        .json()
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn user(login: &str) -> serde_json::Value {
        serde_json::json!({ "id": 1, "login": login, "activated": true, "authorities": [] })
    }

    #[tokio::test]
    async fn list_users_reads_total_count_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/users"))
            .and(query_param("page", "1"))
            .and(query_param("size", "20"))
            .and(query_param("sort", "login,desc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Total-Count", "42")
                    .set_body_json(vec![user("alice"), user("bob")]),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = BusinessConfig::new(server.uri());
        let page = list_users(
            &config,
            &UsersQuery {
                page: 1,
                size: 20,
                sort: "login,desc".to_owned(),
            },
        )
        .await
        .expect("page should load");

        assert_eq!(page.total_items, 42);
        assert_eq!(page.users.len(), 2);
        assert_eq!(page.users[1].login, "bob");
    }

    #[tokio::test]
    async fn missing_total_header_falls_back_to_length() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vec![user("alice")]))
            .mount(&server)
            .await;

        let config = BusinessConfig::new(server.uri());
        let page = list_users(
            &config,
            &UsersQuery {
                page: 0,
                size: 20,
                sort: "id,asc".to_owned(),
            },
        )
        .await
        .expect("page should load");

        assert_eq!(page.total_items, 1);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/account"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let config = BusinessConfig::new(server.uri());
        let err = get_account(&config).await.expect_err("unauthorized");

        assert_eq!(err, ApiError::Status(401));
    }

    #[tokio::test]
    async fn bearer_token_is_sent_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/account"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "login": "admin", "authorities": [] })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = BusinessConfig {
            auth_token: Some("secret".to_owned()),
            ..BusinessConfig::new(server.uri())
        };
        let account = get_account(&config).await.expect("account");

        assert_eq!(account.login, "admin");
    }

    #[tokio::test]
    async fn garbage_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/admin/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let config = BusinessConfig::new(server.uri());
        let err = update_user(&config, &User::default())
            .await
            .expect_err("decode failure");

        assert!(matches!(err, ApiError::Decode(_)));
    }
}
