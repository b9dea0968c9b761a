pub mod app;
pub mod login_screen;
pub mod upload_list;
pub mod upload_panel;

pub use app::App;
pub use login_screen::LoginScreen;
pub use upload_list::UploadList;
pub use upload_panel::UploadPanel;
