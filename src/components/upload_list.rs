use yew::prelude::*;

use crate::models::UploadRecord;
use crate::utils::truncate_cid;

#[derive(Properties, PartialEq)]
pub struct UploadListProps {
    pub uploads: Vec<UploadRecord>,
}

#[function_component(UploadList)]
pub fn upload_list(props: &UploadListProps) -> Html {
    html! {
        <div class="upload-list">
            <h3>{"📂 Recent Uploads"}</h3>
            <ul>
                { for props.uploads.iter().map(|upload| html! {
                    <li key={upload.content_id.clone()}>
                        <a href={upload.gateway_url.clone()} target="_blank" rel="noreferrer">
                            { truncate_cid(&upload.content_id) }
                        </a>
                        <br />
                        <small>{"Gateway Link"}</small>
                    </li>
                }) }
            </ul>
        </div>
    }
}
