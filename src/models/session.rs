/// Opaque handle for an authenticated Storacha session, scoped to the
/// storage space selected at login. Never explicitly destroyed; it lives
/// until the page reloads.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionHandle {
    pub space_did: String,
}

impl SessionHandle {
    pub fn new(space_did: String) -> Self {
        Self { space_did }
    }
}
