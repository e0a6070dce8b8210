//! Defines the JSON protocol used for communication between the cache
//! and provider binaries over stdin/stdout.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::remote::entry::WireEntry;

pub trait ProviderCommand: Serialize {
    type Response: DeserializeOwned;
    fn command() -> Command;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    ListEntries,
}

/// Request sent from the cache to a provider.
#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    pub command: Command,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Response sent from a provider to the cache.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response<T> {
    Success { data: T },
    Error { error: String },
}

impl<T: Serialize> Response<T> {
    /// Serialize a success response, for provider binaries to print.
    pub fn success(data: T) -> String {
        serde_json::to_string(&Response::Success { data }).unwrap()
    }
}

impl Response<()> {
    /// Serialize an error response, for provider binaries to print.
    pub fn error(msg: &str) -> String {
        serde_json::to_string(&Response::<()>::Error {
            error: msg.to_string(),
        })
        .unwrap()
    }
}

/// List entries scheduled within a time range.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListEntries {
    /// Provider-specific config (e.g., account id, workspace id)
    #[serde(flatten)]
    pub remote_config: serde_json::Map<String, serde_json::Value>,
    /// RFC 3339 range bounds
    pub from: String,
    pub to: String,
}

impl ProviderCommand for ListEntries {
    type Response = Vec<WireEntry>;
    fn command() -> Command {
        Command::ListEntries
    }
}
