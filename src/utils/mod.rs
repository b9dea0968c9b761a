pub mod constants;
pub mod file_reader;
pub mod format;
pub mod storacha_ffi;

pub use file_reader::read_file_bytes;
pub use format::truncate_cid;
