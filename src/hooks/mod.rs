pub mod use_uploads;

pub use use_uploads::{use_uploads, UseUploadsHandle};
