//! Provider subprocess calls.
//!
//! A provider is an external binary (e.g. `contentcal-provider-notion`)
//! that speaks the JSON protocol in [`crate::remote::protocol`] over
//! stdin/stdout. The protocol is language-agnostic: any executable that
//! speaks it can back the read service.
//!
//! Providers manage their own credentials; the cache only forwards
//! provider-specific parameters from the remote config.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::time::timeout;
use tracing::debug;

use contentcal_core::{CalError, CalResult};

use crate::remote::protocol::{ProviderCommand, Request, Response};

const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// A named provider binary, resolved on PATH at call time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Provider(String);

impl Provider {
    pub fn from_name(name: &str) -> Self {
        Provider(name.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    fn binary_path(&self) -> CalResult<PathBuf> {
        let binary_name = format!("contentcal-provider-{}", self.0);
        which::which(&binary_name).map_err(|_| {
            CalError::ProviderNotInstalled(format!(
                "Provider '{}' not found. Install it with:\n  cargo install {}",
                self.0, binary_name
            ))
        })
    }

    /// Call a typed provider command and return its response.
    ///
    /// The response type comes from the command's associated type, so a
    /// command can't be paired with the wrong payload at compile time.
    pub async fn call<C: ProviderCommand>(&self, cmd: C) -> CalResult<C::Response> {
        let params =
            serde_json::to_value(cmd).map_err(|e| CalError::Serialization(e.to_string()))?;
        let request = Request {
            command: C::command(),
            params,
        };
        timeout(PROVIDER_TIMEOUT, self.exchange(&request))
            .await
            .map_err(|_| CalError::ProviderTimeout(PROVIDER_TIMEOUT.as_secs()))?
    }

    /// Spawn the binary, hand it one request line, and parse the one
    /// response it prints before exiting.
    async fn exchange<R: DeserializeOwned>(&self, request: &Request) -> CalResult<R> {
        let request_json =
            serde_json::to_string(request).map_err(|e| CalError::Serialization(e.to_string()))?;
        let binary_path = self.binary_path()?;

        debug!(provider = %self.0, command = ?request.command, "calling provider binary");

        let mut child = tokio::process::Command::new(&binary_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                CalError::Provider(format!("Failed to spawn {}: {}", binary_path.display(), e))
            })?;

        // unwrap safe: stdin was piped above
        let mut stdin = child.stdin.take().unwrap();
        stdin
            .write_all(format!("{request_json}\n").as_bytes())
            .await?;
        drop(stdin);

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(CalError::Provider(format!(
                "Provider exited with status: {}",
                output.status.code().unwrap_or(-1)
            )));
        }

        parse_response(&output.stdout)
    }
}

fn parse_response<R: DeserializeOwned>(stdout: &[u8]) -> CalResult<R> {
    let response_str = String::from_utf8_lossy(stdout);
    if response_str.trim().is_empty() {
        return Err(CalError::Provider("Provider returned no response".into()));
    }

    let response: Response<R> = serde_json::from_str(&response_str)
        .map_err(|e| CalError::Provider(format!("Failed to parse response: {}", e)))?;

    match response {
        Response::Success { data } => Ok(data),
        Response::Error { error } => Err(CalError::Provider(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_success_and_error() {
        let ok: Vec<String> = parse_response(br#"{"status":"success","data":["x"]}"#).unwrap();
        assert_eq!(ok, vec!["x".to_string()]);

        let err = parse_response::<Vec<String>>(br#"{"status":"error","error":"no token"}"#);
        assert!(matches!(err, Err(CalError::Provider(msg)) if msg == "no token"));
    }

    #[test]
    fn test_parse_response_rejects_empty_output() {
        assert!(parse_response::<()>(b"  \n").is_err());
    }

    #[test]
    fn test_missing_binary_reports_not_installed() {
        let provider = Provider::from_name("definitely-not-installed");
        assert!(matches!(
            provider.binary_path(),
            Err(CalError::ProviderNotInstalled(_))
        ));
    }
}
