pub mod storacha;
pub mod storage_client;

pub use storacha::StorachaClient;
pub use storage_client::{StorageClient, StorageError};
