// ============================================================================
// USE UPLOADS HOOK - bridges the UploadWidget viewmodel into yew state
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::services::StorachaClient;
use crate::stores::UploadStore;
use crate::utils::read_file_bytes;
use crate::viewmodels::UploadWidget;

#[derive(Clone)]
pub struct UseUploadsHandle {
    pub state: UseStateHandle<UploadStore>,
    pub login: Callback<String>,
    pub upload: Callback<web_sys::File>,
}

#[hook]
pub fn use_uploads() -> UseUploadsHandle {
    let widget = use_memo((), |_| UploadWidget::new(Rc::new(StorachaClient::new())));
    let state = use_state(UploadStore::default);

    // Mirror every viewmodel mutation into yew state
    {
        let widget = widget.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let source = widget.clone();
            widget.subscribe(move || state.set(source.snapshot()));
            || ()
        });
    }

    let login = {
        let widget = widget.clone();
        Callback::from(move |email: String| {
            let widget = widget.clone();
            wasm_bindgen_futures::spawn_local(async move {
                widget.submit_login(&email).await;
            });
        })
    };

    let upload = {
        let widget = widget.clone();
        Callback::from(move |file: web_sys::File| {
            let widget = widget.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match read_file_bytes(&file).await {
                    Ok(bytes) => widget.submit_upload(bytes).await,
                    Err(e) => log::error!("❌ Could not read the selected file: {}", e),
                }
            });
        })
    };

    UseUploadsHandle {
        state,
        login,
        upload,
    }
}
