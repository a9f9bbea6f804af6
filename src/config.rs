use mosaic_primitives::constants::{COLLECTION_NAME, COLLECTION_SYMBOL};

/// Construction-time settings of an engine. Everything here except the name and
/// symbol can be changed later by the administrator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    pub name: String,
    pub symbol: String,
    /// Initial locator prefix, e.g. `ipfs://<cid>/`.
    pub base_prefix: String,
    /// Issuance starts paused unless this is cleared.
    pub start_paused: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: COLLECTION_NAME.to_owned(),
            symbol: COLLECTION_SYMBOL.to_owned(),
            base_prefix: String::new(),
            start_paused: true,
        }
    }
}

impl EngineConfig {
    /// Default collection settings with the given locator prefix.
    #[must_use]
    pub fn with_base_prefix(base_prefix: impl Into<String>) -> Self {
        Self { base_prefix: base_prefix.into(), ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_conservative() {
        let cfg = EngineConfig::default();
        assert!(cfg.start_paused);
        assert_eq!(cfg.name, "Crypto Baby Animals Mosaic");
        assert_eq!(EngineConfig::with_base_prefix("ipfs://x/").base_prefix, "ipfs://x/");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: EngineConfig = serde_json::from_str(r#"{"base_prefix":"ipfs://1234567890/"}"#).unwrap();
        assert_eq!(cfg.base_prefix, "ipfs://1234567890/");
        assert!(cfg.start_paused);
        assert_eq!(cfg.symbol, "CBAM");
    }
}
