// ============================================================================
// STORACHA UPLOADER - email login, file upload, gateway links (Rust/WASM)
// ============================================================================
// - components: yew views (no business logic)
// - hooks: glue between yew state and the viewmodel
// - viewmodels: the widget state machine
// - services: StorageClient boundary to @storacha/client
// - models / stores / utils: shared data types and helpers
// ============================================================================

pub mod components;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;
