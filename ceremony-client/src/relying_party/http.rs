use reqwest::{header::ACCEPT, Client};
use url::Url;

use super::{Endpoint, Endpoints, RelyingParty, Response, TransportError};

/// A [`RelyingParty`] reached over http(s) with [`reqwest`].
///
/// Endpoint paths are resolved against `base_url`. Outside of the browser the underlying client
/// keeps a cookie store, so the session the start endpoint opens is carried to the finish
/// endpoint. Inside the browser `fetch` already does that for same-origin requests.
pub struct HttpRelyingParty {
    client: Client,
    base_url: Url,
    endpoints: Endpoints,
}

impl HttpRelyingParty {
    /// Create a Relying Party at `base_url` with the default [`Endpoints`].
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);

        Ok(Self::with_client(builder.build()?, base_url))
    }

    /// Use an already configured [`reqwest::Client`]. It is the caller's job to enable cookies
    /// on it.
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self {
            client,
            base_url,
            endpoints: Endpoints::default(),
        }
    }

    /// Override the endpoint paths.
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    fn url(&self, endpoint: Endpoint) -> Result<Url, TransportError> {
        self.base_url
            .join(self.endpoints.path(endpoint))
            .map_err(|e| TransportError::Unreachable(format!("invalid {endpoint} url: {e}")))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl RelyingParty for HttpRelyingParty {
    async fn post(
        &self,
        endpoint: Endpoint,
        body: Option<serde_json::Value>,
    ) -> Result<Response, TransportError> {
        let url = self.url(endpoint)?;
        log::debug!("POST {url}");

        let mut request = self.client.post(url).header(ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;

        Ok(Response {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls_resolve_against_base() {
        let rp = HttpRelyingParty::new(Url::parse("https://shop.example/app/").unwrap())
            .expect("failed to build client");

        assert_eq!(
            rp.url(Endpoint::RegistrationStart).unwrap().as_str(),
            "https://shop.example/webauthn/register/start"
        );
        assert_eq!(
            rp.url(Endpoint::LoginFinish).unwrap().as_str(),
            "https://shop.example/webauthn/login/finish"
        );
    }

    #[test]
    fn relative_endpoints_stay_under_base() {
        let rp = HttpRelyingParty::new(Url::parse("https://shop.example/app/").unwrap())
            .unwrap()
            .endpoints(Endpoints {
                registration_start: "passkeys/register/options".into(),
                ..Default::default()
            });

        assert_eq!(
            rp.url(Endpoint::RegistrationStart).unwrap().as_str(),
            "https://shop.example/app/passkeys/register/options"
        );
    }
}
