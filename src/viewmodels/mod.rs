pub mod upload_widget;

pub use upload_widget::UploadWidget;
