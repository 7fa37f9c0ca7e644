//! Slash command definitions registered with the chat platform.
//!
//! The set is static: `/crypto price coin:<coin> currency:<currency>`. It is
//! always uploaded as a whole, so registering it twice is harmless.
use serde::{Serialize, Serializer};

use crate::coins::{Coin, Currency};
use crate::interaction::{COIN_OPTION, COMMAND_NAME, CURRENCY_OPTION, PRICE_SUBCOMMAND};

/// Command type of a slash command typed in the chat input.
pub const CHAT_INPUT: u8 = 1;

/// Option types used by the command set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    /// Nested sub-command.
    SubCommand = 1,
    /// Free text or choice value.
    String = 3,
}

impl Serialize for OptionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Top-level command definition.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationCommand {
    /// Command type, always `CHAT_INPUT`.
    #[serde(rename = "type")]
    pub kind: u8,
    /// Command name as typed by users.
    pub name: String,
    /// Help text shown by the client.
    pub description: String,
    /// Sub-commands or options.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDefinition>,
}

/// Definition of a sub-command or option.
#[derive(Debug, Clone, Serialize)]
pub struct OptionDefinition {
    /// Option type.
    #[serde(rename = "type")]
    pub kind: OptionType,
    /// Option name.
    pub name: String,
    /// Help text.
    pub description: String,
    /// Whether the user must provide the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Fixed set of accepted values.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<OptionChoice>,
    /// Nested options of a sub-command.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDefinition>,
}

/// A selectable value of a choice option.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OptionChoice {
    /// Label shown to the user.
    pub name: String,
    /// Value sent back in the interaction.
    pub value: String,
}

fn string_option(name: &str, description: &str, choices: Vec<OptionChoice>) -> OptionDefinition {
    OptionDefinition {
        kind: OptionType::String,
        name: name.to_string(),
        description: description.to_string(),
        required: Some(true),
        choices,
        options: Vec::new(),
    }
}

/// Full command set of the bot.
pub fn definitions() -> Vec<ApplicationCommand> {
    let coin_choices = Coin::all()
        .into_iter()
        .map(|coin| OptionChoice {
            name: coin.display_name().to_string(),
            value: coin.to_string(),
        })
        .collect();
    let currency_choices = Currency::all()
        .into_iter()
        .map(|currency| OptionChoice {
            name: currency.code(),
            value: currency.to_string(),
        })
        .collect();

    vec![ApplicationCommand {
        kind: CHAT_INPUT,
        name: COMMAND_NAME.to_string(),
        description: "Cryptocurrency tools".to_string(),
        options: vec![OptionDefinition {
            kind: OptionType::SubCommand,
            name: PRICE_SUBCOMMAND.to_string(),
            description: "Get the current price of a coin".to_string(),
            required: None,
            choices: Vec::new(),
            options: vec![
                string_option(COIN_OPTION, "Coin to look up", coin_choices),
                string_option(CURRENCY_OPTION, "Currency to quote in", currency_choices),
            ],
        }],
    }]
}
