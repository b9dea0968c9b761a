use async_trait::async_trait;

use crate::models::{ContentId, ListUploadsPage, SessionHandle};

/// Error of the storage collaborator, one variant per operation. Errors are
/// caught at the call site, logged, and surfaced to the user only as a short
/// status string; nothing propagates further.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    Login(String),
    Upload(String),
    List(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Login(msg) => write!(f, "Login error: {}", msg),
            StorageError::Upload(msg) => write!(f, "Upload error: {}", msg),
            StorageError::List(msg) => write!(f, "List error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Async boundary to the decentralized storage network. The network's auth
/// handshake, content addressing and transfer protocol all live behind this
/// trait; the widget treats them as opaque.
#[async_trait(?Send)]
pub trait StorageClient {
    /// Start an email login. Suspends until the verification email is
    /// confirmed; resolves to a session scoped to a storage space.
    async fn login(&self, email: &str) -> Result<SessionHandle, StorageError>;

    /// Store one file, resolving to its content-addressed identifier.
    async fn upload_file(&self, bytes: &[u8]) -> Result<ContentId, StorageError>;

    /// Fetch at most `size` of the most recent uploads.
    async fn list_uploads(
        &self,
        session: &SessionHandle,
        size: usize,
    ) -> Result<ListUploadsPage, StorageError>;
}
