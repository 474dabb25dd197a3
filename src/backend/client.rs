//! Backend Client
//!
//! HTTP+JSON client for the connection manager's `/client/` and `/upload/` endpoints.

use crate::backend::Backend;
use crate::backend::error::BackendError;
use crate::consts::cli_consts::{UPLOAD_FIELD, connect_timeout};
use crate::record::{ClientDetail, ConnectionRecord, DataEnvelope, MessageResponse};
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, ClientBuilder, RequestBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with dashboard version
const USER_AGENT: &str = concat!("proxy-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    server_url: String,
}

impl BackendClient {
    pub fn new(server_url: &str) -> Result<Self, BackendError> {
        let client = ClientBuilder::new()
            .connect_timeout(connect_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            server_url: server_url.trim_end_matches('/').to_string(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.server_url, endpoint.trim_start_matches('/'))
    }

    fn client_endpoint(id: &str) -> String {
        format!("client/{}", urlencoding::encode(id))
    }

    async fn handle_response_status(response: Response) -> Result<Response, BackendError> {
        if !response.status().is_success() {
            return Err(BackendError::from_response(response).await);
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, BackendError> {
        let response = request.send().await?;
        let response = Self::handle_response_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, BackendError> {
        let url = self.build_url(endpoint);
        debug!("GET {}", url);
        Self::send_json(self.client.get(&url)).await
    }

    async fn delete_request(&self, endpoint: &str) -> Result<MessageResponse, BackendError> {
        let url = self.build_url(endpoint);
        debug!("DELETE {}", url);
        Self::send_json(self.client.delete(&url)).await
    }
}

#[async_trait::async_trait]
impl Backend for BackendClient {
    async fn list_clients(&self) -> Result<Vec<ConnectionRecord>, BackendError> {
        let envelope: DataEnvelope<Vec<ConnectionRecord>> = self.get_request("client/").await?;
        Ok(envelope.data)
    }

    async fn get_client(&self, id: &str) -> Result<ClientDetail, BackendError> {
        let envelope: DataEnvelope<ClientDetail> =
            self.get_request(&Self::client_endpoint(id)).await?;
        Ok(envelope.data)
    }

    async fn add_client(
        &self,
        user_id: &str,
        proxy_url: Option<String>,
    ) -> Result<MessageResponse, BackendError> {
        let url = self.build_url("client/");
        debug!("POST {} user_id={}", url, user_id);

        let mut query = vec![("user_id", user_id.to_string())];
        if let Some(proxy_url) = proxy_url.filter(|p| !p.is_empty()) {
            query.push(("proxy_url", proxy_url));
        }
        Self::send_json(self.client.post(&url).query(&query)).await
    }

    async fn delete_client(&self, id: &str) -> Result<MessageResponse, BackendError> {
        self.delete_request(&Self::client_endpoint(id)).await
    }

    async fn delete_all_clients(&self) -> Result<MessageResponse, BackendError> {
        self.delete_request("client/").await
    }

    async fn upload_file(&self, file_name: &str, contents: Vec<u8>) -> Result<u16, BackendError> {
        let url = self.build_url("upload/");
        debug!("POST {} ({} bytes)", url, contents.len());

        let part = Part::bytes(contents).file_name(file_name.to_string());
        let form = Form::new().part(UPLOAD_FIELD, part);
        let response = self.client.post(&url).multipart(form).send().await?;
        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Multipart, Path, Query};
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use std::collections::HashMap;

    async fn spawn_backend(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn list() -> Json<Value> {
        Json(json!({
            "data": [
                {"id": "a", "user_id": "u1", "status": 2, "proxy_url": "socks5://p:1"},
                {"id": "b", "user_id": "u2", "status": 0}
            ],
            "message": "success"
        }))
    }

    async fn detail(Path(id): Path<String>) -> Json<Value> {
        Json(json!({
            "data": {"status": 2, "proxy_url": null, "logs": [[id, "hello"]]},
            "message": "success"
        }))
    }

    async fn delete_one(Path(id): Path<String>) -> Json<Value> {
        Json(json!({"data": id, "message": "success"}))
    }

    async fn delete_all() -> Json<Value> {
        Json(json!({"data": [], "message": "success"}))
    }

    async fn add(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        let proxy = params.get("proxy_url").cloned().unwrap_or_default();
        Json(json!({
            "data": format!("{}|{}", params["user_id"], proxy),
            "message": "create success"
        }))
    }

    async fn upload(mut multipart: Multipart) -> StatusCode {
        while let Ok(Some(field)) = multipart.next_field().await {
            let name = field.name().map(str::to_string);
            let file_name = field.file_name().map(str::to_string);
            let data = field.bytes().await.unwrap_or_default();
            if name.as_deref() == Some("file")
                && file_name.as_deref() == Some("accounts.txt")
                && data.as_ref() == b"u1==socks5://p:1\nu2\n"
            {
                return StatusCode::OK;
            }
        }
        StatusCode::BAD_REQUEST
    }

    fn backend_router() -> Router {
        Router::new()
            .route("/client/", get(list).post(add).delete(delete_all))
            .route("/client/{id}", get(detail).delete(delete_one))
            .route("/upload/", post(upload))
    }

    #[tokio::test]
    async fn test_list_clients() {
        let url = spawn_backend(backend_router()).await;
        let client = BackendClient::new(&url).unwrap();

        let records = client.list_clients().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].proxy_url.as_deref(), Some("socks5://p:1"));
        assert_eq!(records[1].proxy_url, None);
    }

    #[tokio::test]
    async fn test_get_client_encodes_id() {
        let url = spawn_backend(backend_router()).await;
        let client = BackendClient::new(&format!("{}/", url)).unwrap();

        let detail = client.get_client("a b").await.unwrap();
        assert_eq!(detail.log_lines(), vec!["[a b] -- hello".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_endpoints() {
        let url = spawn_backend(backend_router()).await;
        let client = BackendClient::new(&url).unwrap();

        assert!(client.delete_client("a").await.unwrap().is_success());
        assert!(client.delete_all_clients().await.unwrap().is_success());
    }

    #[tokio::test]
    async fn test_add_client_skips_empty_proxy() {
        let url = spawn_backend(backend_router()).await;
        let client = BackendClient::new(&url).unwrap();

        let response = client
            .add_client("u9", Some(String::new()))
            .await
            .unwrap();
        assert!(response.is_created());
        assert_eq!(response.data, Some(json!("u9|")));

        let response = client
            .add_client("u9", Some("http://p:2".to_string()))
            .await
            .unwrap();
        assert_eq!(response.data, Some(json!("u9|http://p:2")));
    }

    #[tokio::test]
    async fn test_upload_sends_file_field() {
        let url = spawn_backend(backend_router()).await;
        let client = BackendClient::new(&url).unwrap();

        let status = client
            .upload_file("accounts.txt", b"u1==socks5://p:1\nu2\n".to_vec())
            .await
            .unwrap();
        assert_eq!(status, 200);
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error() {
        let app = Router::new().route(
            "/client/",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let url = spawn_backend(app).await;
        let client = BackendClient::new(&url).unwrap();

        match client.list_clients().await {
            Err(BackendError::Http { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Bind and drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = BackendClient::new(&format!("http://{}", addr)).unwrap();
        assert!(matches!(
            client.list_clients().await,
            Err(BackendError::Reqwest(_))
        ));
    }
}
