pub mod session;
pub mod ui_state;
pub mod upload;

pub use session::SessionHandle;
pub use ui_state::UiState;
pub use upload::{ContentId, ListUploadsPage, ListedUpload, UploadRecord};
