// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! `ConfigurationService` is the accessor surface the rest of an application
//! depends on. Implementors only provide [`ConfigurationService::get`]; every
//! named getter is a provided method that resolves its catalog key through
//! `get`, so a getter and the generic lookup of its key can never disagree.

use crate::domain::{ConfigKey, ConfigValue, EnvKey, Stage};

/// Read-only accessor over a configuration source.
///
/// A missing key is a normal outcome and resolves to `None`. Callers decide
/// whether a missing value matters and what to fall back to.
///
/// # Examples
///
/// ```rust
/// use appenv::domain::{ConfigKey, ConfigValue, ConfigurationService};
///
/// struct Fixed;
///
/// impl ConfigurationService for Fixed {
///     fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
///         match key.as_str() {
///             "API_BASE_URL" => Some(ConfigValue::from("https://api.example.com")),
///             "DEBUG" => Some(ConfigValue::from("true")),
///             _ => None,
///         }
///     }
/// }
///
/// let config = Fixed;
/// assert_eq!(config.api_base_url().unwrap(), "https://api.example.com");
/// assert!(config.is_debug_mode());
/// assert!(config.api_key().is_none());
/// ```
pub trait ConfigurationService {
    /// Looks up any key in the source.
    ///
    /// Returns `None` when the key is not configured. Never fails.
    fn get(&self, key: &ConfigKey) -> Option<ConfigValue>;

    /// Looks up a key given as a string slice.
    fn get_str(&self, key: &str) -> Option<ConfigValue> {
        self.get(&ConfigKey::from(key))
    }

    /// Looks up a catalog key.
    fn lookup(&self, key: EnvKey) -> Option<ConfigValue> {
        self.get(&ConfigKey::from(key))
    }

    /// Looks up a key, falling back to `default` when it is not configured.
    fn get_or_default(&self, key: &ConfigKey, default: &str) -> ConfigValue {
        self.get(key).unwrap_or_else(|| ConfigValue::from(default))
    }

    /// Returns `true` if the key is configured, even with an empty value.
    fn has(&self, key: &ConfigKey) -> bool {
        self.get(key).is_some()
    }

    /// Whether this is a debug build.
    ///
    /// Reads the `DEBUG` entry and applies [`ConfigValue::is_true`]: only a
    /// case-insensitive `"true"` counts. An absent entry reads as `false`.
    fn is_debug_mode(&self) -> bool {
        self.lookup(EnvKey::Debug)
            .map(|value| value.is_true())
            .unwrap_or(false)
    }

    /// The build stage implied by [`ConfigurationService::is_debug_mode`].
    fn stage(&self) -> Stage {
        Stage::from_debug_flag(self.is_debug_mode())
    }

    /// Base URL of the backend API.
    fn api_base_url(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::ApiBaseUrl)
    }

    /// Backend API key.
    fn api_key(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::ApiKey)
    }

    /// Build or deployment environment name.
    fn environment(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::Environment)
    }

    /// Flow blockchain network selector.
    fn flow_network(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::FlowNetwork)
    }

    /// Flow access node URL.
    fn flow_access_node_url(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::FlowAccessNodeUrl)
    }

    /// Flow wallet discovery URL.
    fn flow_discovery_wallet_url(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::FlowDiscoveryWalletUrl)
    }

    /// Drive backup encryption key.
    fn drive_aes_key(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::DriveAesKey)
    }

    /// Drive backup encryption IV.
    fn drive_aes_iv(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::DriveAesIv)
    }

    /// WalletConnect project id.
    fn wallet_connect_project_id(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::WalletConnectProjectId)
    }

    /// Instabug token for development builds.
    fn instabug_token_dev(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::InstabugTokenDev)
    }

    /// Instabug token for production builds.
    fn instabug_token_prod(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::InstabugTokenProd)
    }

    /// Crowdin project id.
    fn crowdin_project_id(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::CrowdinProjectId)
    }

    /// Crowdin API token.
    fn crowdin_api_token(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::CrowdinApiToken)
    }

    /// Crowdin distribution hash.
    fn crowdin_distribution(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::CrowdinDistribution)
    }

    /// Mixpanel token for development builds.
    fn mixpanel_token_dev(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::MixpanelTokenDev)
    }

    /// Mixpanel token for production builds.
    fn mixpanel_token_prod(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::MixpanelTokenProd)
    }

    /// Dropbox app key for development builds.
    fn dropbox_app_key_dev(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::DropboxAppKeyDev)
    }

    /// Dropbox app key for production builds.
    fn dropbox_app_key_prod(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::DropboxAppKeyProd)
    }

    /// Request signing key.
    fn x_signature_key(&self) -> Option<ConfigValue> {
        self.lookup(EnvKey::XSignatureKey)
    }

    /// Instabug token for the given stage.
    fn instabug_token(&self, stage: Stage) -> Option<ConfigValue> {
        self.lookup(stage.select(EnvKey::InstabugTokenDev, EnvKey::InstabugTokenProd))
    }

    /// Mixpanel token for the given stage.
    fn mixpanel_token(&self, stage: Stage) -> Option<ConfigValue> {
        self.lookup(stage.select(EnvKey::MixpanelTokenDev, EnvKey::MixpanelTokenProd))
    }

    /// Dropbox app key for the given stage.
    fn dropbox_app_key(&self, stage: Stage) -> Option<ConfigValue> {
        self.lookup(stage.select(EnvKey::DropboxAppKeyDev, EnvKey::DropboxAppKeyProd))
    }

    /// Instabug token for [`ConfigurationService::stage`].
    fn instabug_token_for_current_stage(&self) -> Option<ConfigValue> {
        self.instabug_token(self.stage())
    }

    /// Mixpanel token for [`ConfigurationService::stage`].
    fn mixpanel_token_for_current_stage(&self) -> Option<ConfigValue> {
        self.mixpanel_token(self.stage())
    }

    /// Dropbox app key for [`ConfigurationService::stage`].
    fn dropbox_app_key_for_current_stage(&self) -> Option<ConfigValue> {
        self.dropbox_app_key(self.stage())
    }
}
