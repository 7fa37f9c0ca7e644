//! Registration of the slash command set with the chat platform.
//!
//! Uses a single `PUT` with the full definition array, which replaces whatever
//! is registered. Running it again with the same set changes nothing.
use clap::Args;
use log::{debug, info};

use crate::commands::ApplicationCommand;
use crate::error::BotError;
use crate::net::{DISCORD_API_URL, commands_url};
use crate::result::Result;

/// Command-line/environment options describing where to register commands.
///
/// Token and application id are optional here so the server can embed the
/// options without requiring them; `into_settings` enforces them.
#[derive(Debug, Clone, Args)]
pub struct RegistrationArgs {
    /// Bot token used to authorize the registration.
    #[arg(long, env = "DISCORD_BOT_TOKEN", hide_env_values = true)]
    pub bot_token: Option<String>,

    /// Application (client) id owning the commands.
    #[arg(long, env = "DISCORD_CLIENT_ID")]
    pub application_id: Option<String>,

    /// Guild to register the commands in; global registration when omitted.
    #[arg(long, env = "DISCORD_GUILD_ID")]
    pub guild_id: Option<String>,

    /// Base URL of the platform REST API.
    #[arg(long, env = "DISCORD_API_URL", default_value = DISCORD_API_URL)]
    pub discord_url: String,
}

impl RegistrationArgs {
    /// Validates the options into registration settings.
    pub fn into_settings(self) -> Result<RegistrationSettings> {
        let bot_token = non_empty(self.bot_token)
            .ok_or_else(|| BotError::Config("DISCORD_BOT_TOKEN must be set".to_string()))?;
        let application_id = non_empty(self.application_id)
            .ok_or_else(|| BotError::Config("DISCORD_CLIENT_ID must be set".to_string()))?;
        Ok(RegistrationSettings {
            api_base: self.discord_url,
            application_id,
            bot_token,
            guild_id: non_empty(self.guild_id),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Credentials and target of a registration.
#[derive(Debug, Clone)]
pub struct RegistrationSettings {
    /// Base URL of the platform REST API.
    pub api_base: String,
    /// Application (client) id.
    pub application_id: String,
    /// Bot token used in the `Authorization` header.
    pub bot_token: String,
    /// Guild to scope the commands to; global when `None`.
    pub guild_id: Option<String>,
}

/// HTTP client uploading command definitions.
#[derive(Debug, Clone)]
pub struct CommandRegistrar {
    http_client: reqwest::Client,
    settings: RegistrationSettings,
}

impl CommandRegistrar {
    /// Creates a registrar with its own HTTP client.
    pub fn new(settings: RegistrationSettings) -> Self {
        Self::with_client(reqwest::Client::new(), settings)
    }

    /// Creates a registrar sharing an existing HTTP client.
    pub fn with_client(http_client: reqwest::Client, settings: RegistrationSettings) -> Self {
        Self {
            http_client,
            settings,
        }
    }

    /// Endpoint the definitions are uploaded to.
    pub fn url(&self) -> String {
        commands_url(
            &self.settings.api_base,
            &self.settings.application_id,
            self.settings.guild_id.as_deref(),
        )
    }

    /// Replaces the registered command set with `commands`.
    ///
    /// Returns the number of commands the platform reports back.
    pub async fn register(&self, commands: &[ApplicationCommand]) -> Result<usize> {
        let url = self.url();
        debug!("Registering {} command(s) at {}", commands.len(), url);

        let response = self
            .http_client
            .put(&url)
            .header("Authorization", format!("Bot {}", self.settings.bot_token))
            .json(commands)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Command registration rejected: {} {}", status, body);
            return Err(BotError::Upstream {
                status: status.as_u16(),
                message: body,
            });
        }

        let registered: Vec<serde_json::Value> = response.json().await?;
        info!(
            "Registered {} command(s) ({})",
            registered.len(),
            match &self.settings.guild_id {
                Some(guild) => format!("guild {}", guild),
                None => "global".to_string(),
            }
        );
        Ok(registered.len())
    }
}
