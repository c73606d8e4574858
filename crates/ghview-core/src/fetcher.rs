// ── Profile fetching ──
//
// `ProfileSource` is the seam between the shell and the network. The shell
// only ever sees `Result<Profile, ErrorKind>`; transport detail stops here.

use std::future::Future;

use ghview_api::{GithubClient, TransportConfig};
use tracing::{debug, warn};

use crate::config::FetcherConfig;
use crate::error::ErrorKind;
use crate::model::Profile;

/// Anything that can resolve a username to a [`Profile`].
///
/// Implementations must issue at most one lookup per call and must not
/// cache or retry.
pub trait ProfileSource: Send + Sync + 'static {
    fn fetch_profile(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Profile, ErrorKind>> + Send;
}

/// [`ProfileSource`] backed by the GitHub users endpoint.
#[derive(Debug, Clone)]
pub struct ProfileFetcher {
    client: GithubClient,
}

impl ProfileFetcher {
    /// Build a fetcher with its own HTTP client.
    pub fn new(config: &FetcherConfig) -> Result<Self, ghview_api::Error> {
        let transport = TransportConfig::default().with_timeout(config.timeout);
        let client = GithubClient::new(config.base_url.clone(), &transport)?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn with_client(client: GithubClient) -> Self {
        Self { client }
    }
}

impl ProfileSource for ProfileFetcher {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, ErrorKind> {
        match self.client.get_user(username).await {
            Ok(user) => {
                debug!(username, "profile fetched");
                Ok(Profile::from(user))
            }
            Err(e) => {
                let kind = ErrorKind::from(&e);
                warn!(username, error = %e, ?kind, "profile fetch failed");
                Err(kind)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn fetcher_for(server: &MockServer) -> ProfileFetcher {
        let config = FetcherConfig::new(Url::parse(&server.uri()).unwrap());
        ProfileFetcher::new(&config).unwrap()
    }

    #[tokio::test]
    async fn fetch_success_maps_to_profile() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/joshuaai"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "login": "joshuaai",
                "avatar_url": "https://x/a.png"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let profile = fetcher_for(&server)
            .await
            .fetch_profile("joshuaai")
            .await
            .unwrap();

        assert_eq!(
            profile,
            Profile {
                username: "joshuaai".into(),
                display_name: "joshuaai".into(),
                avatar_url: "https://x/a.png".into(),
            }
        );
    }

    #[tokio::test]
    async fn fetch_maps_failures_to_kinds() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/doesnotexist"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/broken"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/garbled"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"login\":"))
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&server).await;

        assert_eq!(
            fetcher.fetch_profile("doesnotexist").await,
            Err(ErrorKind::NotFound)
        );
        assert_eq!(
            fetcher.fetch_profile("broken").await,
            Err(ErrorKind::ServerError)
        );
        assert_eq!(
            fetcher.fetch_profile("garbled").await,
            Err(ErrorKind::ParseError)
        );
    }

    #[tokio::test]
    async fn unreachable_server_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = FetcherConfig::new(Url::parse(&format!("http://{addr}")).unwrap());
        let fetcher = ProfileFetcher::new(&config).unwrap();

        assert_eq!(
            fetcher.fetch_profile("joshuaai").await,
            Err(ErrorKind::NetworkError)
        );
    }
}
