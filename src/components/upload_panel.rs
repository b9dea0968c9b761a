use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UploadPanelProps {
    pub email: String,
    pub uploading: bool,
    pub on_upload: Callback<web_sys::File>,
}

#[function_component(UploadPanel)]
pub fn upload_panel(props: &UploadPanelProps) -> Html {
    let file_ref = use_node_ref();

    let on_change = {
        let file_ref = file_ref.clone();
        let on_upload = props.on_upload.clone();

        Callback::from(move |_e: Event| {
            if let Some(input) = file_ref.cast::<HtmlInputElement>() {
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    on_upload.emit(file);
                }
            }
        })
    };

    html! {
        <div class="upload-panel">
            <h3>{"Step 2: Upload Data"}</h3>
            <p>{"Logged in as: "}<b>{props.email.clone()}</b></p>

            <input
                type="file"
                ref={file_ref}
                onchange={on_change}
                disabled={props.uploading}
            />

            if props.uploading {
                <p>{"⏳ Uploading... please wait"}</p>
            }
        </div>
    }
}
