use crate::models::{SessionHandle, UiState, UploadRecord};

/// Snapshot of the widget state handed to yew on every notification.
/// Cloneable and comparable so components can diff it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadStore {
    pub email: String,
    pub ui_state: UiState,
    pub session: Option<SessionHandle>,
    pub uploads: Vec<UploadRecord>,
    pub status: String,
}
