/// Public IPFS gateway used to build shareable links.
/// Configured at compile time via the GATEWAY_URL env var (see build.rs);
/// defaults to the Storacha gateway.
pub const GATEWAY_URL: &str = match option_env!("GATEWAY_URL") {
    Some(url) => url,
    None => "https://storacha.link/ipfs",
};

/// Most-recent uploads fetched per list refresh.
pub const UPLOAD_PAGE_SIZE: usize = 10;
