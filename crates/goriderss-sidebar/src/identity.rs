//! Display identity: the session response shape, the snapshot taken from it,
//! and the per-field fallback chain used when rendering the profile card.

use serde::{Deserialize, Serialize};

/// File service prefix; an avatar file id appended to it forms the image URL.
pub const FILE_BASE: &str = "https://api.goriderss.app/api/v1/file/";

/// Avatar shown when neither the session nor the caller provides one.
pub const DEFAULT_AVATAR: &str = "/assets/dummyUser.png";

/// Body of `GET /api/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeResponse {
    pub ok: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// User fields carried by the session endpoint. All optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub avatar_file_id: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Identity fields taken from one successful session fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentitySnapshot {
    pub user_name: Option<String>,
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub avatar_url: Option<String>,
}

impl IdentitySnapshot {
    /// Builds a snapshot from a session response.
    ///
    /// Returns `None` when the endpoint reports `ok: false`. An `ok` response
    /// without a user yields an empty snapshot.
    pub fn from_response(response: MeResponse, file_base: &str) -> Option<Self> {
        if !response.ok {
            return None;
        }
        let user = response.user.unwrap_or_default();
        let avatar_url = avatar_url_for(&user, file_base);

        Some(Self {
            user_name: non_empty(user.user_name),
            full_name: non_empty(user.full_name),
            address: non_empty(user.address),
            avatar_url,
        })
    }
}

/// Avatar URL for a session user: file id first, then the direct URL.
pub fn avatar_url_for(user: &SessionUser, file_base: &str) -> Option<String> {
    match present(user.avatar_file_id.as_deref()) {
        Some(file_id) => Some(format!("{file_base}{file_id}")),
        None => present(user.avatar_url.as_deref()).map(str::to_string),
    }
}

/// Presence shown by the dot on the profile card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    #[default]
    Online,
    Offline,
}

/// Caller-supplied identity defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: Option<String>,
    pub role: Option<String>,
    pub avatar_url: Option<String>,
    pub status: PresenceStatus,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: Some("Rider".to_string()),
            role: Some("Member".to_string()),
            avatar_url: Some(DEFAULT_AVATAR.to_string()),
            status: PresenceStatus::Online,
        }
    }
}

/// Which session field feeds the line under the display name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryLine {
    #[default]
    FullName,
    Address,
}

/// Values the profile card renders. Recomputed on every render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub display_name: String,
    pub secondary_line: String,
    pub avatar_url: String,
}

impl ResolvedIdentity {
    pub fn resolve(
        snapshot: Option<&IdentitySnapshot>,
        defaults: &UserProfile,
        secondary: SecondaryLine,
    ) -> Self {
        let remote_secondary = snapshot.and_then(|s| match secondary {
            SecondaryLine::FullName => s.full_name.as_deref(),
            SecondaryLine::Address => s.address.as_deref(),
        });

        Self {
            display_name: resolve_field(
                snapshot.and_then(|s| s.user_name.as_deref()),
                defaults.name.as_deref(),
                "",
            )
            .to_string(),
            secondary_line: resolve_field(remote_secondary, defaults.role.as_deref(), "")
                .to_string(),
            avatar_url: resolve_field(
                snapshot.and_then(|s| s.avatar_url.as_deref()),
                defaults.avatar_url.as_deref(),
                DEFAULT_AVATAR,
            )
            .to_string(),
        }
    }
}

/// First non-empty value of remote, caller default, literal.
pub fn resolve_field<'a>(remote: Option<&'a str>, caller: Option<&'a str>, literal: &'a str) -> &'a str {
    present(remote).or_else(|| present(caller)).unwrap_or(literal)
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
