use anyhow::Result;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;

use crate::config::ApiConfig;
use crate::todo::{StatusFilter, TodoItem};

/// Client for the todo API server.
///
/// Wraps a single `reqwest::Client` carrying the server base URL and a
/// JSON default header. Built once at startup and shared by reference;
/// nothing mutates it afterwards.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct DescriptionPayload<'a> {
    description: &'a str,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a request for `path` relative to the base URL. Headers set
    /// on the returned builder take precedence over the client defaults.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
    }

    /// Sends a request, treating error statuses as failures. Every
    /// response and error goes through [`intercept`] before it reaches
    /// the caller.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let outcome = match request.send().await {
            Ok(response) => response.error_for_status(),
            Err(error) => Err(error),
        };
        Ok(intercept(outcome)?)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        self.execute(self.request(Method::GET, path)).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<Response> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    pub async fn list_todos(&self, filter: StatusFilter) -> Result<Vec<TodoItem>> {
        let mut request = self.request(Method::GET, "/todos");
        if let Some(status) = filter.as_query() {
            request = request.query(&[("status", status)]);
        }
        Ok(self.execute(request).await?.json().await?)
    }

    pub async fn get_todo(&self, id: u64) -> Result<TodoItem> {
        Ok(self.get(&format!("/todos/{}", id)).await?.json().await?)
    }

    pub async fn create_todo(&self, description: &str) -> Result<TodoItem> {
        let response = self.post("/todos", &DescriptionPayload { description }).await?;
        Ok(response.json().await?)
    }

    pub async fn update_todo(&self, id: u64, description: &str) -> Result<TodoItem> {
        let response = self
            .put(&format!("/todos/{}", id), &DescriptionPayload { description })
            .await?;
        Ok(response.json().await?)
    }

    pub async fn complete_todo(&self, id: u64) -> Result<TodoItem> {
        let request = self.request(Method::POST, &format!("/todos/{}/complete", id));
        Ok(self.execute(request).await?.json().await?)
    }

    pub async fn delete_todo(&self, id: u64) -> Result<()> {
        self.delete(&format!("/todos/{}", id)).await?;
        Ok(())
    }
}

/// Hook run on every response before it reaches the caller. Successful
/// responses and errors are currently forwarded untouched; this is the
/// place to hang cross-cutting response handling later.
fn intercept(outcome: reqwest::Result<Response>) -> reqwest::Result<Response> {
    match outcome {
        Ok(response) => Ok(response),
        Err(error) => Err(error),
    }
}

/// True when `err` is an HTTP error response with status 404.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<reqwest::Error>()
        .is_some_and(|e| e.status() == Some(StatusCode::NOT_FOUND))
}
