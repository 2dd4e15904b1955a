use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use teamroles_application::UserDirectory;
use teamroles_core::AppResult;
use teamroles_domain::{User, UserId};

use crate::http_directory_client::DirectoryHttpClient;

/// User directory adapter backed by the users HTTP API.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: DirectoryHttpClient,
}

impl HttpUserDirectory {
    /// Creates an adapter for the users API rooted at `base_url`.
    #[must_use]
    pub fn new(http_client: reqwest::Client, base_url: Url) -> Self {
        Self {
            client: DirectoryHttpClient::new(http_client, base_url),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserPayload {
    id: UserId,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
    #[serde(default)]
    location: Option<String>,
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        Self {
            id: payload.id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            display_name: payload.display_name,
            avatar_url: payload.avatar_url,
            location: payload.location,
        }
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn get_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self
            .client
            .fetch_optional::<UserPayload>(format!("v1/users/{user_id}").as_str())
            .await?
            .map(User::from))
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self
            .client
            .fetch_list::<UserPayload>("v1/users")
            .await?
            .into_iter()
            .map(User::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use teamroles_application::UserDirectory;
    use teamroles_domain::UserId;

    use super::HttpUserDirectory;

    #[tokio::test]
    async fn get_user_honours_base_path() {
        let server = MockServer::start().await;
        let user_id = UserId::new();
        Mock::given(method("GET"))
            .and(path(format!("/directory/v1/users/{user_id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": user_id,
                "firstName": "Gianni",
                "lastName": "Wehner",
                "displayName": "gianniWehner",
                "location": "Brakus",
            })))
            .mount(&server)
            .await;

        let base_url = Url::parse(format!("{}/directory", server.uri()).as_str())
            .unwrap_or_else(|error| panic!("mock server uri is invalid: {error}"));
        let user = HttpUserDirectory::new(reqwest::Client::new(), base_url)
            .get_user(user_id)
            .await;

        let Ok(Some(user)) = user else {
            panic!("expected user to be found: {user:?}");
        };
        assert_eq!(user.first_name.as_deref(), Some("Gianni"));
        assert_eq!(user.display_name.as_deref(), Some("gianniWehner"));
        assert_eq!(user.avatar_url, None);
    }

    #[tokio::test]
    async fn empty_listing_decodes_as_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let base_url = Url::parse(server.uri().as_str())
            .unwrap_or_else(|error| panic!("mock server uri is invalid: {error}"));
        let users = HttpUserDirectory::new(reqwest::Client::new(), base_url)
            .list_users()
            .await;

        assert_eq!(users, Ok(Vec::new()));
    }
}
