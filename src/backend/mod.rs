use crate::backend::error::BackendError;
use crate::record::{ClientDetail, ConnectionRecord, MessageResponse};

pub(crate) mod client;
pub use client::BackendClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// List every tracked connection.
    async fn list_clients(&self) -> Result<Vec<ConnectionRecord>, BackendError>;

    /// Get the status, proxy and recent logs of one connection.
    async fn get_client(&self, id: &str) -> Result<ClientDetail, BackendError>;

    /// Start tracking a new connection for `user_id`.
    async fn add_client(
        &self,
        user_id: &str,
        proxy_url: Option<String>,
    ) -> Result<MessageResponse, BackendError>;

    /// Stop and forget one connection.
    async fn delete_client(&self, id: &str) -> Result<MessageResponse, BackendError>;

    /// Stop and forget every connection.
    async fn delete_all_clients(&self) -> Result<MessageResponse, BackendError>;

    /// Upload an accounts file. Only the HTTP status of the reply is returned.
    async fn upload_file(&self, file_name: &str, contents: Vec<u8>) -> Result<u16, BackendError>;
}
