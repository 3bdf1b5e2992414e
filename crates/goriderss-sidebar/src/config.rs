//! Sidebar configuration: branding, identity defaults, rewards summary,
//! and the endpoints the session client talks to.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::identity::{SecondaryLine, UserProfile, FILE_BASE};

/// Environment variable overriding [`SidebarConfig::api_base`].
pub const API_BASE_ENV: &str = "GORIDERSS_API_BASE";

/// Top-level configuration for the dashboard sidebar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Origin serving `/api/me` and `/api/logout`
    pub api_base: String,
    /// Prefix for avatar file ids
    pub file_base: String,
    /// Session field shown under the display name
    pub secondary_line: SecondaryLine,
    pub branding: Branding,
    /// Identity shown until (or unless) the session answers
    pub user: UserProfile,
    pub rewards: RewardsSummary,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:3000".to_string(),
            file_base: FILE_BASE.to_string(),
            secondary_line: SecondaryLine::default(),
            branding: Branding::default(),
            user: UserProfile::default(),
            rewards: RewardsSummary::default(),
        }
    }
}

impl SidebarConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads a TOML config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Applies the `GORIDERSS_API_BASE` override if it is set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        self.with_api_base(std::env::var(API_BASE_ENV).ok())
    }

    /// Replaces `api_base` with `base` unless it is missing or empty.
    ///
    /// Later calls win, so apply the environment first and the command line
    /// flag last.
    pub fn with_api_base(mut self, base: Option<String>) -> Self {
        if let Some(base) = base.filter(|b| !b.is_empty()) {
            self.api_base = base;
        }
        self
    }
}

/// Brand mark shown at the top of the sidebar and in the mobile top bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    pub image: String,
    pub alt: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            image: "/assets/primaryLogo.png".to_string(),
            alt: "GoRiderss".to_string(),
        }
    }
}

/// Figures for the rewards card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardsSummary {
    pub trips: Option<u32>,
    pub live_text: Option<String>,
}

impl Default for RewardsSummary {
    fn default() -> Self {
        Self {
            trips: Some(15),
            live_text: Some("Live: On Trip".to_string()),
        }
    }
}

impl RewardsSummary {
    /// Badge text, e.g. "15 Trips". A missing count reads as zero.
    pub fn trips_label(&self) -> String {
        format!("{} Trips", self.trips.unwrap_or(0))
    }

    pub fn live_label(&self) -> &str {
        match self.live_text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => "Live",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::PresenceStatus;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SidebarConfig::default();
        assert_eq!(config.file_base, "https://api.goriderss.app/api/v1/file/");
        assert_eq!(config.branding.alt, "GoRiderss");
        assert_eq!(config.secondary_line, SecondaryLine::FullName);
        assert_eq!(config.rewards.trips_label(), "15 Trips");
        assert_eq!(config.rewards.live_label(), "Live: On Trip");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SidebarConfig::from_toml_str(
            r#"
            api_base = "https://app.goriderss.app"
            secondary_line = "address"

            [user]
            name = "Asha"
            status = "offline"

            [rewards]
            trips = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.api_base, "https://app.goriderss.app");
        assert_eq!(config.secondary_line, SecondaryLine::Address);
        assert_eq!(config.user.name.as_deref(), Some("Asha"));
        assert_eq!(config.user.role.as_deref(), Some("Member"));
        assert_eq!(config.user.status, PresenceStatus::Offline);
        assert_eq!(config.rewards.trips_label(), "3 Trips");
        assert_eq!(config.rewards.live_label(), "Live: On Trip");
        assert_eq!(config.branding, Branding::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = SidebarConfig::from_toml_str("secondary_line = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[branding]\nalt = \"Riders Club\"").unwrap();

        let config = SidebarConfig::load(file.path()).unwrap();
        assert_eq!(config.branding.alt, "Riders Club");
        assert_eq!(config.branding.image, "/assets/primaryLogo.png");
    }

    #[test]
    fn test_load_missing_file() {
        let err = SidebarConfig::load(Path::new("/nonexistent/goriderss.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_api_base_override() {
        let config = SidebarConfig::default().with_api_base(Some("https://staging.goriderss.app".to_string()));
        assert_eq!(config.api_base, "https://staging.goriderss.app");
    }

    #[test]
    fn test_empty_or_missing_api_base_is_ignored() {
        let config = SidebarConfig::default()
            .with_api_base(Some(String::new()))
            .with_api_base(None);
        assert_eq!(config.api_base, "http://localhost:3000");
    }

    #[test]
    fn test_flag_beats_env_value() {
        let config = SidebarConfig::default()
            .with_api_base(Some("https://from-env.example".to_string()))
            .with_api_base(Some("https://from-flag.example".to_string()));
        assert_eq!(config.api_base, "https://from-flag.example");
    }

    #[test]
    fn test_env_override_reads_variable() {
        // Only this test touches GORIDERSS_API_BASE.
        unsafe { std::env::set_var(API_BASE_ENV, "https://env.goriderss.app") };
        let from_env = SidebarConfig::default().with_env_overrides();
        unsafe { std::env::set_var(API_BASE_ENV, "") };
        let from_empty = SidebarConfig::default().with_env_overrides();
        unsafe { std::env::remove_var(API_BASE_ENV) };

        assert_eq!(from_env.api_base, "https://env.goriderss.app");
        assert_eq!(from_empty.api_base, "http://localhost:3000");
    }

    #[test]
    fn test_rewards_fallback_labels() {
        let empty = RewardsSummary {
            trips: None,
            live_text: Some(String::new()),
        };
        assert_eq!(empty.trips_label(), "0 Trips");
        assert_eq!(empty.live_label(), "Live");
    }
}
