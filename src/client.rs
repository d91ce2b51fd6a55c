//! HTTP client for a running catalog server.
//!
//! Every request declares the client's media type in `Content-Type`, which is
//! how the server picks the codec for both the request and the response.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};

use crate::codec::{API_PREFIX, MediaType};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// What the server answered, kept raw so callers can print or inspect it
#[derive(Debug, Clone)]
pub struct ClientResponse {
    pub method: Method,
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl ClientResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    media: MediaType,
    http: Client,
}

impl CatalogClient {
    pub fn new(base_url: &str, media: MediaType) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            media,
            http: Client::new(),
        }
    }

    pub fn media(&self) -> MediaType {
        self.media
    }

    /// Same server, other representation
    pub fn with_media(&self, media: MediaType) -> Self {
        Self {
            base_url: self.base_url.clone(),
            media,
            http: self.http.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}/{}", self.base_url, API_PREFIX, path.trim_start_matches('/'))
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: String,
    ) -> Result<ClientResponse, ClientError> {
        let url = self.url(path);
        tracing::debug!("{} {} ({})", method, url, self.media.as_str());

        let response = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, self.media.as_str())
            .query(query)
            .body(body)
            .send()
            .await
            .map_err(|source| ClientError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let final_url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|source| ClientError::Http { url, source })?;

        Ok(ClientResponse {
            method,
            url: final_url,
            status,
            content_type,
            body,
        })
    }

    /// `GET /api/{route}`
    pub async fn list(&self, route: &str) -> Result<ClientResponse, ClientError> {
        self.send(Method::GET, route, &[], String::new()).await
    }

    /// `GET /api/{route}/{id}`
    pub async fn get(&self, route: &str, id: i32) -> Result<ClientResponse, ClientError> {
        self.send(Method::GET, &format!("{}/{}", route, id), &[], String::new())
            .await
    }

    /// `POST /api/{route}` with a body already encoded in the client's media type
    pub async fn create(
        &self,
        route: &str,
        body: impl Into<String>,
    ) -> Result<ClientResponse, ClientError> {
        self.send(Method::POST, route, &[], body.into()).await
    }

    /// `PUT /api/{route}/{id}`
    pub async fn update(
        &self,
        route: &str,
        id: i32,
        body: impl Into<String>,
    ) -> Result<ClientResponse, ClientError> {
        self.send(Method::PUT, &format!("{}/{}", route, id), &[], body.into())
            .await
    }

    /// `DELETE /api/{route}/{id}`
    pub async fn delete(&self, route: &str, id: i32) -> Result<ClientResponse, ClientError> {
        self.send(Method::DELETE, &format!("{}/{}", route, id), &[], String::new())
            .await
    }

    /// `GET /api/pieces/{id}/evaluations`; omitted parameters use the server defaults
    pub async fn evaluations_for_piece(
        &self,
        piece_id: i32,
        date: Option<&str>,
        start: Option<u64>,
        end: Option<u64>,
    ) -> Result<ClientResponse, ClientError> {
        let mut query = Vec::new();
        if let Some(date) = date {
            query.push(("date", date.to_string()));
        }
        if let Some(start) = start {
            query.push(("start", start.to_string()));
        }
        if let Some(end) = end {
            query.push(("end", end.to_string()));
        }
        self.send(
            Method::GET,
            &format!("pieces/{}/evaluations", piece_id),
            &query,
            String::new(),
        )
        .await
    }

    /// `GET /api/studios/{id}/pieces`
    pub async fn count_pieces_by_studio(
        &self,
        studio_id: i32,
    ) -> Result<ClientResponse, ClientError> {
        self.send(
            Method::GET,
            &format!("studios/{}/pieces", studio_id),
            &[],
            String::new(),
        )
        .await
    }

    /// `GET /api/evaluations?pattern=`
    pub async fn search_evaluations(&self, pattern: &str) -> Result<ClientResponse, ClientError> {
        self.send(
            Method::GET,
            "evaluations",
            &[("pattern", pattern.to_string())],
            String::new(),
        )
        .await
    }
}
