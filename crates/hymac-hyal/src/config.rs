//! TOML-based configuration for the hybrid access layer.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Access layer configuration.
///
/// Defaults: two in-flight data requests, three duplicate fingerprints,
/// 400-byte private payload copies, two-minute dual-confirm bound.
#[derive(Debug, Clone, Deserialize)]
pub struct HyalConfig {
    /// Number of concurrently outstanding data requests.
    #[serde(default = "default_ledger_capacity")]
    pub ledger_capacity: usize,

    /// Number of received-frame fingerprints kept for duplicate detection.
    #[serde(default = "default_dedup_capacity")]
    pub dedup_capacity: usize,

    /// Largest MSDU kept as a private copy for backup-medium resends.
    /// Larger frames are still transmitted on the requested medium, but
    /// failover and probing are skipped for them.
    #[serde(default = "default_payload_copy_limit")]
    pub payload_copy_limit: usize,

    /// Bound in milliseconds on waiting for the second confirmation of a
    /// dual-medium operation. When the bound elapses the operation is
    /// resolved with the first medium's status so the request slot cannot
    /// be leaked by a silent medium. `None` disables the bound; the wait
    /// is then unbounded.
    #[serde(default = "default_dual_confirm_timeout_ms")]
    pub dual_confirm_timeout_ms: Option<u64>,
}

fn default_ledger_capacity() -> usize {
    2
}

fn default_dedup_capacity() -> usize {
    3
}

fn default_payload_copy_limit() -> usize {
    400
}

fn default_dual_confirm_timeout_ms() -> Option<u64> {
    Some(120_000)
}

impl Default for HyalConfig {
    fn default() -> Self {
        HyalConfig {
            ledger_capacity: default_ledger_capacity(),
            dedup_capacity: default_dedup_capacity(),
            payload_copy_limit: default_payload_copy_limit(),
            dual_confirm_timeout_ms: default_dual_confirm_timeout_ms(),
        }
    }
}

impl HyalConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: HyalConfig =
            toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ledger_capacity == 0 {
            return Err(ConfigError::Invalid("ledger capacity must be non-zero"));
        }
        if self.dedup_capacity == 0 {
            return Err(ConfigError::Invalid("dedup capacity must be non-zero"));
        }
        Ok(())
    }
}
