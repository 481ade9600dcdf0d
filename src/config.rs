//! Prover configuration. Parses a TOML document into a strongly-typed structure and builds the
//! registry of named moduli from it.
//!
//! ```toml
//! backend = "montgomery"
//! timeout_ms = 60000
//!
//! [moduli.rsa-2048]
//! hex = "c7970ceedcc3b0754490201a7aa6..."
//! ```

use crate::{BackendKind, Error, Modulus, Result};
use alloc::{collections::BTreeMap, string::String, sync::Arc};
use serde::Deserialize;
use std::{fs, path::Path, time::Duration};
use tracing::{debug, warn};

/// Top-level prover configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProverConfig {
    /// Named moduli computations can refer to. No modulus is built in.
    pub moduli: BTreeMap<String, ModulusConfig>,

    /// Squaring strategy used for every computation.
    pub backend: BackendKind,

    /// Optional per-computation deadline in milliseconds, measured from submission.
    pub timeout_ms: Option<u64>,
}

/// A single configured modulus.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModulusConfig {
    /// Big-endian hexadecimal value of `N`.
    pub hex: String,
}

impl ProverConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        Ok(toml::from_str::<ProverConfig>(data)?)
    }

    /// Load a configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(&path)?;
        let cfg = Self::from_toml_str(&data)?;
        debug!(
            path = %path.as_ref().display(),
            moduli = cfg.moduli.len(),
            "loaded prover configuration"
        );
        Ok(cfg)
    }

    /// Per-computation deadline, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Validate every configured modulus and build the registry.
    pub fn registry(&self) -> Result<ModulusRegistry> {
        ModulusRegistry::from_config(self)
    }
}

/// Validated moduli, addressable by name and shared read-only between computations.
#[derive(Clone, Debug, Default)]
pub struct ModulusRegistry {
    moduli: BTreeMap<String, Arc<Modulus>>,
}

impl ModulusRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from the `moduli` table of a configuration.
    pub fn from_config(config: &ProverConfig) -> Result<Self> {
        let mut registry = Self::new();

        for (name, entry) in &config.moduli {
            let modulus = Modulus::from_be_hex(entry.hex.trim()).inspect_err(|err| {
                warn!(modulus = %name, error = %err, "rejecting configured modulus");
            })?;
            registry.insert(name.clone(), modulus);
        }

        Ok(registry)
    }

    /// Register `modulus` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, modulus: Modulus) -> Arc<Modulus> {
        let modulus = Arc::new(modulus);
        self.moduli.insert(name.into(), modulus.clone());
        modulus
    }

    /// Look up a modulus by name.
    pub fn get(&self, name: &str) -> Option<&Arc<Modulus>> {
        self.moduli.get(name)
    }

    /// Look up a modulus by name, failing with [`Error::UnknownModulus`].
    pub fn resolve(&self, name: &str) -> Result<Arc<Modulus>> {
        self.get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownModulus(name.into()))
    }

    /// Registered names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.moduli.keys().map(String::as_str)
    }

    /// Number of registered moduli.
    pub fn len(&self) -> usize {
        self.moduli.len()
    }

    /// Is the registry empty?
    pub fn is_empty(&self) -> bool {
        self.moduli.is_empty()
    }
}
