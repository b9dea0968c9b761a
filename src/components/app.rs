use yew::prelude::*;

use super::{LoginScreen, UploadList, UploadPanel};
use crate::hooks::use_uploads;
use crate::models::UiState;

#[function_component(App)]
pub fn app() -> Html {
    let uploads = use_uploads();
    let store = (*uploads.state).clone();

    let logged_in = store.session.is_some();

    html! {
        <div class="app-container">
            <h1>{"🚀 Mini Storacha DApp"}</h1>

            if !logged_in {
                <LoginScreen
                    on_login={uploads.login.clone()}
                    authenticating={store.ui_state == UiState::Authenticating}
                />
            } else {
                <UploadPanel
                    email={store.email.clone()}
                    uploading={store.ui_state == UiState::UploadingInProgress}
                    on_upload={uploads.upload.clone()}
                />
            }

            if !store.status.is_empty() {
                <p class="status-line">{"📝 "}{store.status.clone()}</p>
            }

            if logged_in {
                <UploadList uploads={store.uploads.clone()} />
            }
        </div>
    }
}
