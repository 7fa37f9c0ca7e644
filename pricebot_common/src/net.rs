//! Shared networking constants and helpers used by the server and the registration tool.

/// Default bind address of the webhook server.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
/// Base URL of the chat platform REST API.
pub const DISCORD_API_URL: &str = "https://discord.com/api/v10";
/// Base URL of the price source API.
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Header carrying the hex-encoded Ed25519 signature.
pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
/// Header carrying the signed timestamp.
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Builds the command registration URL, guild-scoped when `guild_id` is set.
pub fn commands_url(api_base: &str, application_id: &str, guild_id: Option<&str>) -> String {
    let base = format!(
        "{}/applications/{}",
        api_base.trim_end_matches('/'),
        application_id
    );
    match guild_id {
        Some(guild) => format!("{}/guilds/{}/commands", base, guild),
        None => format!("{}/commands", base),
    }
}

/// Builds the price lookup URL without query parameters.
pub fn simple_price_url(api_base: &str) -> String {
    format!("{}/simple/price", api_base.trim_end_matches('/'))
}
