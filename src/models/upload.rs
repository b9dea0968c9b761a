use serde::Deserialize;

use crate::utils::constants::GATEWAY_URL;

/// Content-addressed identifier returned by the storage network.
pub type ContentId = String;

/// One displayed upload. The list is rebuilt wholesale on every refresh,
/// records are never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRecord {
    pub content_id: ContentId,
    pub gateway_url: String,
}

impl UploadRecord {
    /// The gateway URL is a pure function of the CID.
    pub fn from_content_id(content_id: ContentId) -> Self {
        let gateway_url = format!("{}/{}", GATEWAY_URL, content_id);
        Self {
            content_id,
            gateway_url,
        }
    }
}

/// Wire shape of one entry in the collaborator's upload list.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ListedUpload {
    pub root: ContentId,
}

/// Wire shape of the collaborator's `listUploads` response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ListUploadsPage {
    pub results: Vec<ListedUpload>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_url_is_pure_function_of_cid() {
        let record = UploadRecord::from_content_id("bafy123".to_string());
        assert_eq!(record.content_id, "bafy123");
        assert_eq!(record.gateway_url, "https://storacha.link/ipfs/bafy123");
    }

    #[test]
    fn list_page_deserializes_from_wire_json() {
        let page: ListUploadsPage =
            serde_json::from_str(r#"{"results":[{"root":"bafy123"}]}"#).unwrap();
        assert_eq!(
            page.results,
            vec![ListedUpload {
                root: "bafy123".to_string()
            }]
        );
    }
}
