/// Payload key holding the items of a list response
pub const DEFAULT_LIST_KEY: &str = "list";
/// Log filter used when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Header carrying the bearer token on authenticated requests
pub const AUTHORIZATION_HEADER: &str = "Authorization";
