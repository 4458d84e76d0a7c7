// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed catalog of recognized configuration keys.
//!
//! Each [`EnvKey`] variant names exactly one entry in the configuration source
//! and exactly one method on the scripting bridge. The string forms are the
//! contract with whatever populates the source, so they must not change.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// A recognized configuration key.
///
/// # Examples
///
/// ```
/// use appenv::domain::EnvKey;
///
/// assert_eq!(EnvKey::ApiBaseUrl.as_str(), "API_BASE_URL");
/// assert_eq!(EnvKey::ApiBaseUrl.method_name(), "getApiBaseUrl");
/// assert_eq!(EnvKey::from_key("DEBUG"), Some(EnvKey::Debug));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EnvKey {
    /// Debug build flag, read as a boolean.
    Debug,
    /// Base URL of the backend API.
    ApiBaseUrl,
    /// Backend API key.
    ApiKey,
    /// Build or deployment environment name.
    Environment,
    /// Flow blockchain network selector.
    FlowNetwork,
    /// Flow access node URL.
    FlowAccessNodeUrl,
    /// Flow wallet discovery URL.
    FlowDiscoveryWalletUrl,
    /// Drive backup encryption key.
    DriveAesKey,
    /// Drive backup encryption IV.
    DriveAesIv,
    /// WalletConnect project id.
    WalletConnectProjectId,
    /// Instabug crash reporting token, development builds.
    InstabugTokenDev,
    /// Instabug crash reporting token, production builds.
    InstabugTokenProd,
    /// Crowdin localization project id.
    CrowdinProjectId,
    /// Crowdin localization API token.
    CrowdinApiToken,
    /// Crowdin distribution hash.
    CrowdinDistribution,
    /// Mixpanel analytics token, development builds.
    MixpanelTokenDev,
    /// Mixpanel analytics token, production builds.
    MixpanelTokenProd,
    /// Dropbox app key, development builds.
    DropboxAppKeyDev,
    /// Dropbox app key, production builds.
    DropboxAppKeyProd,
    /// Key used to sign outgoing API requests.
    XSignatureKey,
}

static BY_KEY: Lazy<HashMap<&'static str, EnvKey>> =
    Lazy::new(|| EnvKey::ALL.iter().map(|k| (k.as_str(), *k)).collect());

static BY_METHOD: Lazy<HashMap<&'static str, EnvKey>> =
    Lazy::new(|| EnvKey::ALL.iter().map(|k| (k.method_name(), *k)).collect());

impl EnvKey {
    /// Every recognized key, in catalog order.
    pub const ALL: [EnvKey; 20] = [
        EnvKey::Debug,
        EnvKey::ApiBaseUrl,
        EnvKey::ApiKey,
        EnvKey::Environment,
        EnvKey::FlowNetwork,
        EnvKey::FlowAccessNodeUrl,
        EnvKey::FlowDiscoveryWalletUrl,
        EnvKey::DriveAesKey,
        EnvKey::DriveAesIv,
        EnvKey::WalletConnectProjectId,
        EnvKey::InstabugTokenDev,
        EnvKey::InstabugTokenProd,
        EnvKey::CrowdinProjectId,
        EnvKey::CrowdinApiToken,
        EnvKey::CrowdinDistribution,
        EnvKey::MixpanelTokenDev,
        EnvKey::MixpanelTokenProd,
        EnvKey::DropboxAppKeyDev,
        EnvKey::DropboxAppKeyProd,
        EnvKey::XSignatureKey,
    ];

    /// Returns the key string used in the configuration source.
    pub const fn as_str(self) -> &'static str {
        match self {
            EnvKey::Debug => "DEBUG",
            EnvKey::ApiBaseUrl => "API_BASE_URL",
            EnvKey::ApiKey => "API_KEY",
            EnvKey::Environment => "APP_ENV",
            EnvKey::FlowNetwork => "FLOW_NETWORK",
            EnvKey::FlowAccessNodeUrl => "FLOW_ACCESS_NODE_URL",
            EnvKey::FlowDiscoveryWalletUrl => "FLOW_DISCOVERY_WALLET_URL",
            EnvKey::DriveAesKey => "DRIVE_AES_KEY",
            EnvKey::DriveAesIv => "DRIVE_AES_IV",
            EnvKey::WalletConnectProjectId => "WALLET_CONNECT_PROJECT_ID",
            EnvKey::InstabugTokenDev => "INSTABUG_TOKEN_DEV",
            EnvKey::InstabugTokenProd => "INSTABUG_TOKEN_PROD",
            EnvKey::CrowdinProjectId => "CROWDIN_PROJECT_ID",
            EnvKey::CrowdinApiToken => "CROWDIN_API_TOKEN",
            EnvKey::CrowdinDistribution => "CROWDIN_DISTRIBUTION",
            EnvKey::MixpanelTokenDev => "MIXPANEL_TOKEN_DEV",
            EnvKey::MixpanelTokenProd => "MIXPANEL_TOKEN_PROD",
            EnvKey::DropboxAppKeyDev => "DROPBOX_APP_KEY_DEV",
            EnvKey::DropboxAppKeyProd => "DROPBOX_APP_KEY_PROD",
            EnvKey::XSignatureKey => "X_SIGNATURE_KEY",
        }
    }

    /// Returns the method name the scripting bridge exports for this key.
    pub const fn method_name(self) -> &'static str {
        match self {
            EnvKey::Debug => "isDebugMode",
            EnvKey::ApiBaseUrl => "getApiBaseUrl",
            EnvKey::ApiKey => "getApiKey",
            EnvKey::Environment => "getEnvironment",
            EnvKey::FlowNetwork => "getFlowNetwork",
            EnvKey::FlowAccessNodeUrl => "getFlowAccessNodeUrl",
            EnvKey::FlowDiscoveryWalletUrl => "getFlowDiscoveryWalletUrl",
            EnvKey::DriveAesKey => "getDriveAesKey",
            EnvKey::DriveAesIv => "getDriveAesIv",
            EnvKey::WalletConnectProjectId => "getWalletConnectProjectId",
            EnvKey::InstabugTokenDev => "getInstabugTokenDev",
            EnvKey::InstabugTokenProd => "getInstabugTokenProd",
            EnvKey::CrowdinProjectId => "getCrowdinProjectId",
            EnvKey::CrowdinApiToken => "getCrowdinApiToken",
            EnvKey::CrowdinDistribution => "getCrowdinDistribution",
            EnvKey::MixpanelTokenDev => "getMixpanelTokenDev",
            EnvKey::MixpanelTokenProd => "getMixpanelTokenProd",
            EnvKey::DropboxAppKeyDev => "getDropboxAppKeyDev",
            EnvKey::DropboxAppKeyProd => "getDropboxAppKeyProd",
            EnvKey::XSignatureKey => "getXSignatureKey",
        }
    }

    /// Whether the value is a credential that must not appear in logs or
    /// `Debug` output.
    pub const fn is_secret(self) -> bool {
        matches!(
            self,
            EnvKey::ApiKey
                | EnvKey::DriveAesKey
                | EnvKey::DriveAesIv
                | EnvKey::InstabugTokenDev
                | EnvKey::InstabugTokenProd
                | EnvKey::CrowdinApiToken
                | EnvKey::MixpanelTokenDev
                | EnvKey::MixpanelTokenProd
                | EnvKey::DropboxAppKeyDev
                | EnvKey::DropboxAppKeyProd
                | EnvKey::XSignatureKey
        )
    }

    /// Whether the value is the debug flag, which crosses the bridge as a
    /// boolean rather than a string.
    pub const fn is_flag(self) -> bool {
        matches!(self, EnvKey::Debug)
    }

    /// Looks up the catalog entry for a source key string.
    pub fn from_key(key: &str) -> Option<EnvKey> {
        BY_KEY.get(key).copied()
    }

    /// Looks up the catalog entry for a bridge method name.
    pub fn from_method(method: &str) -> Option<EnvKey> {
        BY_METHOD.get(method).copied()
    }
}

impl fmt::Display for EnvKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
