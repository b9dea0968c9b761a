// ============================================================================
// STORACHA CLIENT - StorageClient over the @storacha/client JS glue
// ============================================================================
// Stateless on the Rust side: the JS layer owns the client instance and the
// current space (see static/storacha.js), this type only awaits promises.
// ============================================================================

use async_trait::async_trait;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use super::storage_client::{StorageClient, StorageError};
use crate::models::{ContentId, ListUploadsPage, SessionHandle};
use crate::utils::storacha_ffi;

pub struct StorachaClient;

impl StorachaClient {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StorachaClient {
    fn default() -> Self {
        Self::new()
    }
}

fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[async_trait(?Send)]
impl StorageClient for StorachaClient {
    async fn login(&self, email: &str) -> Result<SessionHandle, StorageError> {
        log::info!("🔐 Requesting Storacha session for {}", email);

        let value = JsFuture::from(storacha_ffi::storacha_login(email))
            .await
            .map_err(|e| StorageError::Login(js_error_message(&e)))?;

        let space_did = value
            .as_string()
            .ok_or_else(|| StorageError::Login("login did not return a space DID".to_string()))?;

        log::info!("✅ Session scoped to space {}", space_did);
        Ok(SessionHandle::new(space_did))
    }

    async fn upload_file(&self, bytes: &[u8]) -> Result<ContentId, StorageError> {
        log::info!("📤 Uploading {} bytes to Storacha...", bytes.len());

        let value = JsFuture::from(storacha_ffi::storacha_upload_file(bytes))
            .await
            .map_err(|e| StorageError::Upload(js_error_message(&e)))?;

        value
            .as_string()
            .ok_or_else(|| StorageError::Upload("upload did not return a CID".to_string()))
    }

    async fn list_uploads(
        &self,
        session: &SessionHandle,
        size: usize,
    ) -> Result<ListUploadsPage, StorageError> {
        let promise = storacha_ffi::storacha_list_uploads(&session.space_did, size as u32);
        let value = JsFuture::from(promise)
            .await
            .map_err(|e| StorageError::List(js_error_message(&e)))?;

        // The glue returns JSON across the FFI boundary
        let json = value
            .as_string()
            .ok_or_else(|| StorageError::List("list did not return JSON".to_string()))?;

        serde_json::from_str(&json).map_err(|e| StorageError::List(format!("Parse error: {}", e)))
    }
}
