// ============================================================================
// UPLOAD WIDGET - state machine over the StorageClient collaborator
// ============================================================================
// Owns the UploadStore behind a RefCell and notifies subscribers after every
// mutation. No yew types here; the use_uploads hook adapts it to components.
// RefCell borrows never cross an .await.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{UiState, UploadRecord};
use crate::services::StorageClient;
use crate::stores::UploadStore;
use crate::utils::constants::UPLOAD_PAGE_SIZE;

pub struct UploadWidget {
    client: Rc<dyn StorageClient>,
    store: RefCell<UploadStore>,
    subscribers: RefCell<Vec<Box<dyn Fn()>>>,
}

impl UploadWidget {
    pub fn new(client: Rc<dyn StorageClient>) -> Self {
        Self {
            client,
            store: RefCell::new(UploadStore::default()),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Register a callback fired after every state mutation.
    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    pub fn snapshot(&self) -> UploadStore {
        self.store.borrow().clone()
    }

    fn update<F: FnOnce(&mut UploadStore)>(&self, updater: F) {
        updater(&mut *self.store.borrow_mut());
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }

    /// Single login attempt; a failure is terminal until the user resubmits.
    pub async fn submit_login(&self, email: &str) {
        let email = email.trim().to_string();
        if email.is_empty() {
            self.update(|store| store.status = "Enter an email address first.".to_string());
            return;
        }
        if self.store.borrow().ui_state != UiState::AnonymousIdle {
            log::warn!("⚠️ Login already in progress, ignoring");
            return;
        }

        self.update(|store| {
            store.email = email.clone();
            store.ui_state = UiState::Authenticating;
            store.status = "Sending verification email...".to_string();
        });

        match self.client.login(&email).await {
            Ok(session) => {
                log::info!("✅ Logged in as {}", email);
                self.update(|store| {
                    store.session = Some(session);
                    store.ui_state = UiState::Authenticated;
                    store.status = "Logged in! Fetching files...".to_string();
                });
                self.refresh_uploads().await;
            }
            Err(e) => {
                log::error!("❌ Login failed: {}", e);
                self.update(|store| {
                    store.ui_state = UiState::AnonymousIdle;
                    store.status = "Login failed. Check console.".to_string();
                });
            }
        }
    }

    /// Upload one file. Re-entrant calls while an upload is in flight are
    /// ignored; the in-flight state is cleared on every exit path.
    pub async fn submit_upload(&self, bytes: Vec<u8>) {
        {
            let store = self.store.borrow();
            if store.session.is_none() {
                log::warn!("⚠️ Upload requested without a session, ignoring");
                return;
            }
            if store.ui_state == UiState::UploadingInProgress {
                log::warn!("⏳ Upload already in flight, ignoring");
                return;
            }
        }

        self.update(|store| {
            store.ui_state = UiState::UploadingInProgress;
            store.status = "Uploading to Storacha...".to_string();
        });

        let result = self.client.upload_file(&bytes).await;

        // Clear the in-flight state before looking at the outcome
        self.update(|store| store.ui_state = UiState::Authenticated);

        match result {
            Ok(cid) => {
                log::info!("✅ Upload stored, CID: {}", cid);
                self.update(|store| store.status = format!("Success! CID: {}", cid));
                self.refresh_uploads().await;
            }
            Err(e) => {
                log::error!("❌ Upload failed: {}", e);
                self.update(|store| store.status = "Upload failed.".to_string());
            }
        }
    }

    /// Replace the displayed list with the most recent uploads. Failures are
    /// logged and silently leave the previous list displayed.
    pub async fn refresh_uploads(&self) {
        let session = match self.store.borrow().session.clone() {
            Some(session) => session,
            None => return,
        };

        match self.client.list_uploads(&session, UPLOAD_PAGE_SIZE).await {
            Ok(page) => {
                let uploads: Vec<UploadRecord> = page
                    .results
                    .into_iter()
                    .map(|item| UploadRecord::from_content_id(item.root))
                    .collect();
                log::info!("📂 Upload list refreshed: {} entries", uploads.len());
                self.update(|store| store.uploads = uploads);
            }
            Err(e) => {
                log::error!("❌ Error fetching upload list: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::future::Future;
    use std::pin::Pin;
    use std::rc::Rc;
    use std::task::{Context, Poll};

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;
    use crate::models::{ContentId, ListUploadsPage, ListedUpload, SessionHandle};
    use crate::services::{StorageClient, StorageError};
    use crate::utils::truncate_cid;

    #[derive(Default)]
    struct MockClient {
        fail_login: bool,
        fail_upload: bool,
        fail_list: Cell<bool>,
        slow_upload: bool,
        listed: RefCell<Vec<ContentId>>,
        login_calls: Cell<usize>,
        upload_calls: Cell<usize>,
        list_calls: Cell<usize>,
    }

    /// Resolves on its second poll, so a concurrent call can interleave.
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    #[async_trait(?Send)]
    impl StorageClient for MockClient {
        async fn login(&self, _email: &str) -> Result<SessionHandle, StorageError> {
            self.login_calls.set(self.login_calls.get() + 1);
            if self.fail_login {
                return Err(StorageError::Login("verification rejected".to_string()));
            }
            Ok(SessionHandle::new("did:key:zSpace".to_string()))
        }

        async fn upload_file(&self, _bytes: &[u8]) -> Result<ContentId, StorageError> {
            self.upload_calls.set(self.upload_calls.get() + 1);
            if self.slow_upload {
                YieldOnce(false).await;
            }
            if self.fail_upload {
                return Err(StorageError::Upload("transfer aborted".to_string()));
            }
            let cid = "bafyABC".to_string();
            self.listed.borrow_mut().insert(0, cid.clone());
            Ok(cid)
        }

        async fn list_uploads(
            &self,
            _session: &SessionHandle,
            size: usize,
        ) -> Result<ListUploadsPage, StorageError> {
            self.list_calls.set(self.list_calls.get() + 1);
            if self.fail_list.get() {
                return Err(StorageError::List("gateway timeout".to_string()));
            }
            let results = self
                .listed
                .borrow()
                .iter()
                .take(size)
                .cloned()
                .map(|root| ListedUpload { root })
                .collect();
            Ok(ListUploadsPage { results })
        }
    }

    fn widget_over(mock: &Rc<MockClient>) -> UploadWidget {
        UploadWidget::new(mock.clone())
    }

    #[test]
    fn login_success_authenticates_and_refreshes_once() {
        let mock = Rc::new(MockClient::default());
        mock.listed.borrow_mut().push("bafy123".to_string());
        let widget = widget_over(&mock);

        block_on(widget.submit_login("a@b.com"));

        let store = widget.snapshot();
        assert_eq!(store.ui_state, UiState::Authenticated);
        assert!(store.session.is_some());
        assert_eq!(mock.list_calls.get(), 1);
        assert_eq!(store.uploads.len(), 1);
    }

    #[test]
    fn login_failure_stays_anonymous_without_refresh() {
        let mock = Rc::new(MockClient {
            fail_login: true,
            ..Default::default()
        });
        let widget = widget_over(&mock);

        block_on(widget.submit_login("a@b.com"));

        let store = widget.snapshot();
        assert_eq!(store.ui_state, UiState::AnonymousIdle);
        assert!(store.session.is_none());
        assert_eq!(mock.list_calls.get(), 0);
        assert_eq!(store.status, "Login failed. Check console.");
    }

    #[test]
    fn empty_email_never_reaches_the_client() {
        let mock = Rc::new(MockClient::default());
        let widget = widget_over(&mock);

        block_on(widget.submit_login("   "));

        assert_eq!(mock.login_calls.get(), 0);
        assert_eq!(widget.snapshot().ui_state, UiState::AnonymousIdle);
    }

    #[test]
    fn second_upload_while_in_flight_is_ignored() {
        let mock = Rc::new(MockClient {
            slow_upload: true,
            ..Default::default()
        });
        let widget = widget_over(&mock);
        block_on(widget.submit_login("a@b.com"));

        block_on(async {
            futures::join!(
                widget.submit_upload(vec![1; 10]),
                widget.submit_upload(vec![2; 10]),
            );
        });

        assert_eq!(mock.upload_calls.get(), 1);
        assert_eq!(widget.snapshot().ui_state, UiState::Authenticated);
    }

    #[test]
    fn upload_without_session_is_ignored() {
        let mock = Rc::new(MockClient::default());
        let widget = widget_over(&mock);

        block_on(widget.submit_upload(vec![1, 2, 3]));

        assert_eq!(mock.upload_calls.get(), 0);
    }

    #[test]
    fn in_flight_state_clears_on_upload_failure() {
        let mock = Rc::new(MockClient {
            fail_upload: true,
            ..Default::default()
        });
        let widget = widget_over(&mock);
        block_on(widget.submit_login("a@b.com"));

        block_on(widget.submit_upload(vec![0; 4]));

        let store = widget.snapshot();
        assert_eq!(store.ui_state, UiState::Authenticated);
        assert_eq!(store.status, "Upload failed.");
        // No refresh on failure: only the login refresh happened
        assert_eq!(mock.list_calls.get(), 1);
    }

    #[test]
    fn list_results_map_to_gateway_links() {
        let mock = Rc::new(MockClient::default());
        mock.listed.borrow_mut().push("bafy123".to_string());
        let widget = widget_over(&mock);

        block_on(widget.submit_login("a@b.com"));

        let store = widget.snapshot();
        assert_eq!(
            store.uploads[0].gateway_url,
            "https://storacha.link/ipfs/bafy123"
        );
    }

    #[test]
    fn failed_refresh_keeps_previous_list() {
        let mock = Rc::new(MockClient::default());
        mock.listed.borrow_mut().push("bafyOld".to_string());
        let widget = widget_over(&mock);
        block_on(widget.submit_login("a@b.com"));
        assert_eq!(widget.snapshot().uploads.len(), 1);

        mock.fail_list.set(true);
        block_on(widget.submit_upload(vec![9; 3]));

        let store = widget.snapshot();
        assert_eq!(store.uploads.len(), 1);
        assert_eq!(store.uploads[0].content_id, "bafyOld");
    }

    #[test]
    fn email_login_upload_refresh_scenario() {
        let mock = Rc::new(MockClient::default());
        let widget = widget_over(&mock);

        block_on(widget.submit_login("a@b.com"));
        assert_eq!(widget.snapshot().email, "a@b.com");
        assert!(widget.snapshot().uploads.is_empty());

        block_on(widget.submit_upload(vec![0u8; 10]));

        let store = widget.snapshot();
        assert_eq!(store.status, "Success! CID: bafyABC");
        assert_eq!(store.uploads.len(), 1);
        assert_eq!(
            store.uploads[0].gateway_url,
            "https://storacha.link/ipfs/bafyABC"
        );
        assert_eq!(truncate_cid(&store.uploads[0].content_id), "bafyABC...");
    }
}
