/// Phase of the upload widget. Exactly one holds at any time; the machine
/// only resets on page reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    AnonymousIdle,
    Authenticating,
    Authenticated,
    UploadingInProgress,
}
