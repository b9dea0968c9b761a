/// Link label for an upload: the first 15 characters of the CID followed by
/// "...". Shorter CIDs keep their full text.
pub fn truncate_cid(cid: &str) -> String {
    let head: String = cid.chars().take(15).collect();
    format!("{}...", head)
}
