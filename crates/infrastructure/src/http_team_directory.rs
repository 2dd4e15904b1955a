use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use teamroles_application::TeamDirectory;
use teamroles_core::AppResult;
use teamroles_domain::{Team, TeamId, UserId};

use crate::http_directory_client::DirectoryHttpClient;

/// Team directory adapter backed by the teams HTTP API.
///
/// Reads `GET {base}/v1/teams` and `GET {base}/v1/teams/{id}`.
#[derive(Debug, Clone)]
pub struct HttpTeamDirectory {
    client: DirectoryHttpClient,
}

impl HttpTeamDirectory {
    /// Creates an adapter for the teams API rooted at `base_url`.
    #[must_use]
    pub fn new(http_client: reqwest::Client, base_url: Url) -> Self {
        Self {
            client: DirectoryHttpClient::new(http_client, base_url),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamPayload {
    id: TeamId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    team_lead_id: Option<UserId>,
    #[serde(default)]
    team_member_ids: Vec<UserId>,
}

impl From<TeamPayload> for Team {
    fn from(payload: TeamPayload) -> Self {
        Team::new(
            payload.id,
            payload.name,
            payload.team_lead_id,
            payload.team_member_ids,
        )
    }
}

#[async_trait]
impl TeamDirectory for HttpTeamDirectory {
    async fn get_team(&self, team_id: TeamId) -> AppResult<Option<Team>> {
        Ok(self
            .client
            .fetch_optional::<TeamPayload>(format!("v1/teams/{team_id}").as_str())
            .await?
            .map(Team::from))
    }

    async fn list_teams(&self) -> AppResult<Vec<Team>> {
        Ok(self
            .client
            .fetch_list::<TeamPayload>("v1/teams")
            .await?
            .into_iter()
            .map(Team::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use teamroles_application::TeamDirectory;
    use teamroles_core::AppError;
    use teamroles_domain::{TeamId, UserId};

    use super::HttpTeamDirectory;

    async fn directory_for(server: &MockServer) -> HttpTeamDirectory {
        let base_url = Url::parse(server.uri().as_str())
            .unwrap_or_else(|error| panic!("mock server uri is invalid: {error}"));
        HttpTeamDirectory::new(reqwest::Client::new(), base_url)
    }

    #[tokio::test]
    async fn get_team_decodes_directory_payload() {
        let server = MockServer::start().await;
        let team_id = TeamId::new();
        let lead = UserId::new();
        let member = UserId::new();
        Mock::given(method("GET"))
            .and(path(format!("/v1/teams/{team_id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": team_id,
                "name": "System Team",
                "teamLeadId": lead,
                "teamMemberIds": [member],
            })))
            .mount(&server)
            .await;

        let team = directory_for(&server).await.get_team(team_id).await;

        let Ok(Some(team)) = team else {
            panic!("expected team to be found: {team:?}");
        };
        assert_eq!(team.id(), team_id);
        assert_eq!(team.name(), Some("System Team"));
        assert!(team.includes(lead));
        assert!(team.includes(member));
    }

    #[tokio::test]
    async fn missing_team_is_absent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let team = directory_for(&server).await.get_team(TeamId::new()).await;

        assert_eq!(team, Ok(None));
    }

    #[tokio::test]
    async fn null_body_is_absent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
            .mount(&server)
            .await;

        let team = directory_for(&server).await.get_team(TeamId::new()).await;

        assert_eq!(team, Ok(None));
    }

    #[tokio::test]
    async fn server_error_is_distinct_from_absent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let team = directory_for(&server).await.get_team(TeamId::new()).await;

        assert!(matches!(team, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn unreachable_directory_is_distinct_from_absent() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap_or_else(|error| panic!("failed to reserve a local port: {error}"));
        let address = listener
            .local_addr()
            .unwrap_or_else(|error| panic!("failed to read reserved address: {error}"));
        drop(listener);
        let base_url = Url::parse(format!("http://{address}").as_str())
            .unwrap_or_else(|error| panic!("reserved address is not a url: {error}"));

        let team = HttpTeamDirectory::new(reqwest::Client::new(), base_url)
            .get_team(TeamId::new())
            .await;

        assert!(matches!(team, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn null_listing_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
            .mount(&server)
            .await;

        let teams = directory_for(&server).await.list_teams().await;

        assert_eq!(teams, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn list_teams_decodes_every_team() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": TeamId::new(), "teamLeadId": UserId::new(), "teamMemberIds": [] },
                { "id": TeamId::new(), "name": "Ordinary Coral Lynx" },
            ])))
            .mount(&server)
            .await;

        let teams = directory_for(&server).await.list_teams().await;

        assert_eq!(teams.map(|teams| teams.len()), Ok(2));
    }
}
