//! Catalog server domain types.
//!
//! These shapes are shared with the browser frontend, so the serialized
//! form uses camelCase keys and the status/grade enums serialize to the
//! literal strings the UI renders.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Runtime health of a catalog server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    /// Server is reachable and serving tools
    #[default]
    Online,
    /// Server is reachable but unhealthy
    Degraded,
    /// Server is unreachable
    Offline,
}

impl ServerStatus {
    /// Parse a status from its wire string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "online" => Some(Self::Online),
            "degraded" => Some(Self::Degraded),
            "offline" => Some(Self::Offline),
            _ => None,
        }
    }

    /// Convert status to its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Degraded => "degraded",
            Self::Offline => "offline",
        }
    }
}

impl std::fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse A/B/C trust label attached to a server.
///
/// New registrations start at grade B until reviewed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityGrade {
    A,
    #[default]
    B,
    C,
}

impl SecurityGrade {
    /// Parse a grade from its wire string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            _ => None,
        }
    }

    /// Convert grade to its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl std::fmt::Display for SecurityGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How clients authenticate against a server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    /// No authentication required
    #[default]
    None,
    /// Static API key
    ApiKey,
    /// OAuth flow
    Oauth,
}

impl AuthMethod {
    /// Parse an auth method from its wire string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "apikey" => Some(Self::ApiKey),
            "oauth" => Some(Self::Oauth),
            _ => None,
        }
    }

    /// Convert auth method to its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ApiKey => "apikey",
            Self::Oauth => "oauth",
        }
    }
}

/// Fixed category set a server registers under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServerCategory {
    #[default]
    #[serde(rename = "Developer Tools")]
    DeveloperTools,
    #[serde(rename = "Maps & Location")]
    MapsLocation,
    #[serde(rename = "Weather & Environment")]
    WeatherEnvironment,
    #[serde(rename = "News & Media")]
    NewsMedia,
    Productivity,
    Communication,
    Database,
    #[serde(rename = "E-Commerce")]
    ECommerce,
    #[serde(rename = "AI & ML")]
    AiMl,
    #[serde(rename = "Language & Translation")]
    LanguageTranslation,
    Finance,
    #[serde(rename = "Social Media")]
    SocialMedia,
}

impl ServerCategory {
    /// All categories in display order.
    pub const ALL: [Self; 12] = [
        Self::DeveloperTools,
        Self::MapsLocation,
        Self::WeatherEnvironment,
        Self::NewsMedia,
        Self::Productivity,
        Self::Communication,
        Self::Database,
        Self::ECommerce,
        Self::AiMl,
        Self::LanguageTranslation,
        Self::Finance,
        Self::SocialMedia,
    ];

    /// Parse a category from its display string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Developer Tools" => Some(Self::DeveloperTools),
            "Maps & Location" => Some(Self::MapsLocation),
            "Weather & Environment" => Some(Self::WeatherEnvironment),
            "News & Media" => Some(Self::NewsMedia),
            "Productivity" => Some(Self::Productivity),
            "Communication" => Some(Self::Communication),
            "Database" => Some(Self::Database),
            "E-Commerce" => Some(Self::ECommerce),
            "AI & ML" => Some(Self::AiMl),
            "Language & Translation" => Some(Self::LanguageTranslation),
            "Finance" => Some(Self::Finance),
            "Social Media" => Some(Self::SocialMedia),
            _ => None,
        }
    }

    /// Convert category to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DeveloperTools => "Developer Tools",
            Self::MapsLocation => "Maps & Location",
            Self::WeatherEnvironment => "Weather & Environment",
            Self::NewsMedia => "News & Media",
            Self::Productivity => "Productivity",
            Self::Communication => "Communication",
            Self::Database => "Database",
            Self::ECommerce => "E-Commerce",
            Self::AiMl => "AI & ML",
            Self::LanguageTranslation => "Language & Translation",
            Self::Finance => "Finance",
            Self::SocialMedia => "Social Media",
        }
    }
}

impl std::fmt::Display for ServerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single named capability exposed by a server.
///
/// Tools are owned exclusively by their parent server and never shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Tool identifier, unique within its server.
    pub id: String,

    /// Tool name (function name).
    pub name: String,

    /// Human-readable description.
    pub description: String,

    /// Parameter name to type-description mapping.
    pub parameters: HashMap<String, String>,
}

impl Tool {
    /// Create a new tool definition with no parameters.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            parameters: HashMap::new(),
        }
    }

    /// Add a declared parameter.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), ty.into());
        self
    }
}

/// A registered tool-provider in the catalog.
///
/// Created from a [`NewServer`] registration, mutated only by the admin
/// verify action, and removed only by reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpServer {
    /// Catalog identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Short icon glyph shown in listings.
    pub icon: String,

    /// Publishing organisation or author.
    pub publisher: String,

    /// What the server does.
    pub description: String,

    /// Registration category.
    pub category: ServerCategory,

    /// Current health.
    pub status: ServerStatus,

    /// Whether an administrator has reviewed this server.
    pub verified: bool,

    /// Average user rating, 0.0 when unrated.
    pub rating: f64,

    /// Total download count.
    pub downloads: u64,

    /// Trust label.
    pub security_grade: SecurityGrade,

    /// License identifier (e.g. "MIT").
    pub license: String,

    /// Date of the last published update.
    pub last_updated: NaiveDate,

    /// How clients authenticate.
    pub auth_method: AuthMethod,

    /// Tools this server exposes, in declaration order.
    pub tools: Vec<Tool>,
}

impl McpServer {
    /// Number of tools this server exposes.
    ///
    /// Always derived from the tool list; there is no stored counter to
    /// fall out of sync.
    #[must_use]
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }
}

/// A server registration that has not been added to the catalog yet.
///
/// The endpoint and documentation URLs are collected and validated at
/// registration time but are not part of the public catalog record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewServer {
    /// Display name.
    pub name: String,

    /// What the server does.
    pub description: String,

    /// Registration category.
    pub category: ServerCategory,

    /// Connection endpoint URL.
    pub endpoint: String,

    /// How clients authenticate.
    pub auth_method: AuthMethod,

    /// Publishing organisation; defaults to "Unknown" when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// License identifier; defaults to "MIT" when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Source repository URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    /// Documentation URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
}

impl NewServer {
    /// Create a registration with the required fields.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: ServerCategory,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
            endpoint: endpoint.into(),
            auth_method: AuthMethod::None,
            publisher: None,
            license: None,
            github_url: None,
            docs_url: None,
        }
    }

    /// Set the publisher.
    #[must_use]
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    /// Set the license.
    #[must_use]
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    /// Set the auth method.
    #[must_use]
    pub const fn with_auth_method(mut self, auth_method: AuthMethod) -> Self {
        self.auth_method = auth_method;
        self
    }

    /// Set the source repository URL.
    #[must_use]
    pub fn with_github_url(mut self, url: impl Into<String>) -> Self {
        self.github_url = Some(url.into());
        self
    }

    /// Set the documentation URL.
    #[must_use]
    pub fn with_docs_url(mut self, url: impl Into<String>) -> Self {
        self.docs_url = Some(url.into());
        self
    }

    /// Build the catalog record for this registration.
    ///
    /// New servers start online, unverified, unrated, at grade B, with an
    /// empty tool list. The caller supplies the assigned id and today's
    /// date.
    #[must_use]
    pub fn into_server(self, id: String, today: NaiveDate) -> McpServer {
        McpServer {
            id,
            name: self.name,
            icon: "🔧".to_string(),
            publisher: self.publisher.unwrap_or_else(|| "Unknown".to_string()),
            description: self.description,
            category: self.category,
            status: ServerStatus::Online,
            verified: false,
            rating: 0.0,
            downloads: 0,
            security_grade: SecurityGrade::B,
            license: self.license.unwrap_or_else(|| "MIT".to_string()),
            last_updated: today,
            auth_method: self.auth_method,
            tools: Vec::new(),
        }
    }
}
