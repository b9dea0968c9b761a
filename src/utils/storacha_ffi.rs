// ============================================================================
// STORACHA FFI - Foreign Function Interface for the @storacha/client glue
// ============================================================================
// Thin promise-returning wrappers only - no state, no logic. The JS side
// (static/storacha.js) owns the client instance and the current space.
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Creates the client, starts the email login flow (the promise stays
    /// pending until the verification email is confirmed) and selects the
    /// account's first storage space. Resolves to the space DID.
    #[wasm_bindgen(js_name = storachaLogin)]
    pub fn storacha_login(email: &str) -> js_sys::Promise;

    /// Resolves to the CID of the stored file.
    #[wasm_bindgen(js_name = storachaUploadFile)]
    pub fn storacha_upload_file(bytes: &[u8]) -> js_sys::Promise;

    /// Resolves to a JSON string of shape {"results":[{"root":"<cid>"}]}.
    #[wasm_bindgen(js_name = storachaListUploads)]
    pub fn storacha_list_uploads(space_did: &str, size: u32) -> js_sys::Promise;
}
