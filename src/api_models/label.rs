use serde::{Deserialize, Serialize};

/// A named badge with icons: player and clan labels, and leagues.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_urls: Option<IconUrls>,
}

impl Label {
    /// Numeric identifier, stable across languages.
    pub fn id(&self) -> Option<i32> {
        self.id
    }

    /// Display name, localized by the API.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn icon_urls(&self) -> Option<&IconUrls> {
        self.icon_urls.as_ref()
    }
}

/// Icon URLs of a label or league, by size.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IconUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    tiny: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    small: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    medium: Option<String>,
}

impl IconUrls {
    pub fn tiny(&self) -> Option<&str> {
        self.tiny.as_deref()
    }

    pub fn small(&self) -> Option<&str> {
        self.small.as_deref()
    }

    pub fn medium(&self) -> Option<&str> {
        self.medium.as_deref()
    }
}

/// Clan badge URLs, by size.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BadgeUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    small: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    large: Option<String>,
}

impl BadgeUrls {
    pub fn small(&self) -> Option<&str> {
        self.small.as_deref()
    }

    pub fn medium(&self) -> Option<&str> {
        self.medium.as_deref()
    }

    pub fn large(&self) -> Option<&str> {
        self.large.as_deref()
    }
}
