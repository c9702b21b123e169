//! Canned platform content for demos and tests.
//!
//! The seed is deterministic: every call returns the same servers,
//! users and counters in the same order, with stable ids, so scenarios
//! and assertions can reference rows by name. One server per category,
//! with enough variety in status, verification and grades to exercise
//! every catalog filter.

use chrono::{DateTime, NaiveDate, Utc};

use mcphub_core::domain::server::{
    AuthMethod, McpServer, SecurityGrade, ServerCategory, ServerStatus, Tool,
};
use mcphub_core::domain::stats::ActivityCounters;
use mcphub_core::domain::user::{User, UserRole, UserStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

fn seen(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    date(y, m, d)
        .and_hms_opt(h, 0, 0)
        .expect("valid time of day")
        .and_utc()
}

/// The seeded catalog, one server per category.
#[must_use]
pub fn seed_servers() -> Vec<McpServer> {
    vec![
        McpServer {
            id: "server-github".to_string(),
            name: "GitHub".to_string(),
            icon: "🐙".to_string(),
            publisher: "GitHub".to_string(),
            description: "Repository search, issue management and file access over the GitHub API"
                .to_string(),
            category: ServerCategory::DeveloperTools,
            status: ServerStatus::Online,
            verified: true,
            rating: 4.8,
            downloads: 125_400,
            security_grade: SecurityGrade::A,
            license: "MIT".to_string(),
            last_updated: date(2025, 6, 14),
            auth_method: AuthMethod::Oauth,
            tools: vec![
                Tool::new(
                    "github-1",
                    "search_repositories",
                    "Search public repositories by keyword",
                )
                .with_parameter("query", "string")
                .with_parameter("limit", "number"),
                Tool::new("github-2", "create_issue", "Open an issue on a repository")
                    .with_parameter("repo", "string")
                    .with_parameter("title", "string")
                    .with_parameter("body", "string"),
                Tool::new(
                    "github-3",
                    "get_file_contents",
                    "Read a file from a repository",
                )
                .with_parameter("repo", "string")
                .with_parameter("path", "string"),
            ],
        },
        McpServer {
            id: "server-google-maps".to_string(),
            name: "Google Maps".to_string(),
            icon: "🗺️".to_string(),
            publisher: "Google".to_string(),
            description: "Geocoding, routing and place details from the Google Maps platform"
                .to_string(),
            category: ServerCategory::MapsLocation,
            status: ServerStatus::Online,
            verified: true,
            rating: 4.7,
            downloads: 98_200,
            security_grade: SecurityGrade::A,
            license: "Apache-2.0".to_string(),
            last_updated: date(2025, 6, 10),
            auth_method: AuthMethod::ApiKey,
            tools: vec![
                Tool::new("maps-1", "geocode", "Resolve an address to coordinates")
                    .with_parameter("address", "string"),
                Tool::new("maps-2", "directions", "Compute a route between two points")
                    .with_parameter("origin", "string")
                    .with_parameter("destination", "string"),
                Tool::new("maps-3", "place_details", "Look up details for a place")
                    .with_parameter("place_id", "string"),
            ],
        },
        McpServer {
            id: "server-openweather".to_string(),
            name: "OpenWeather".to_string(),
            icon: "🌤️".to_string(),
            publisher: "OpenWeather Ltd".to_string(),
            description: "Current conditions and multi-day forecasts for any city worldwide"
                .to_string(),
            category: ServerCategory::WeatherEnvironment,
            status: ServerStatus::Online,
            verified: true,
            rating: 4.5,
            downloads: 76_800,
            security_grade: SecurityGrade::A,
            license: "MIT".to_string(),
            last_updated: date(2025, 5, 28),
            auth_method: AuthMethod::ApiKey,
            tools: vec![
                Tool::new("weather-1", "current_weather", "Current conditions for a city")
                    .with_parameter("city", "string"),
                Tool::new("weather-2", "forecast", "Daily forecast for a city")
                    .with_parameter("city", "string")
                    .with_parameter("days", "number"),
            ],
        },
        McpServer {
            id: "server-hackernews".to_string(),
            name: "Hacker News".to_string(),
            icon: "📰".to_string(),
            publisher: "Community".to_string(),
            description: "Front page stories and comment threads from the Hacker News firehose"
                .to_string(),
            category: ServerCategory::NewsMedia,
            status: ServerStatus::Degraded,
            verified: true,
            rating: 4.2,
            downloads: 41_300,
            security_grade: SecurityGrade::B,
            license: "MIT".to_string(),
            last_updated: date(2025, 4, 19),
            auth_method: AuthMethod::None,
            tools: vec![
                Tool::new("hn-1", "top_stories", "Fetch the current front page")
                    .with_parameter("limit", "number"),
                Tool::new("hn-2", "story_comments", "Fetch the comment tree for a story")
                    .with_parameter("story_id", "number"),
            ],
        },
        McpServer {
            id: "server-notion".to_string(),
            name: "Notion".to_string(),
            icon: "📝".to_string(),
            publisher: "Notion Labs".to_string(),
            description: "Search, create and append to pages in a connected Notion workspace"
                .to_string(),
            category: ServerCategory::Productivity,
            status: ServerStatus::Online,
            verified: true,
            rating: 4.6,
            downloads: 88_900,
            security_grade: SecurityGrade::A,
            license: "Proprietary".to_string(),
            last_updated: date(2025, 6, 2),
            auth_method: AuthMethod::Oauth,
            tools: vec![
                Tool::new("notion-1", "search_pages", "Search pages by title and content")
                    .with_parameter("query", "string"),
                Tool::new("notion-2", "create_page", "Create a page under a parent")
                    .with_parameter("parent_id", "string")
                    .with_parameter("title", "string"),
                Tool::new("notion-3", "append_block", "Append a content block to a page")
                    .with_parameter("page_id", "string")
                    .with_parameter("content", "string"),
            ],
        },
        McpServer {
            id: "server-slack".to_string(),
            name: "Slack".to_string(),
            icon: "💬".to_string(),
            publisher: "Slack Technologies".to_string(),
            description: "Post messages and browse channels in a connected Slack workspace"
                .to_string(),
            category: ServerCategory::Communication,
            status: ServerStatus::Online,
            verified: true,
            rating: 4.4,
            downloads: 67_100,
            security_grade: SecurityGrade::A,
            license: "Apache-2.0".to_string(),
            last_updated: date(2025, 5, 21),
            auth_method: AuthMethod::Oauth,
            tools: vec![
                Tool::new("slack-1", "post_message", "Post a message to a channel")
                    .with_parameter("channel", "string")
                    .with_parameter("text", "string"),
                Tool::new("slack-2", "list_channels", "List channels visible to the bot"),
            ],
        },
        McpServer {
            id: "server-postgres".to_string(),
            name: "PostgreSQL".to_string(),
            icon: "🐘".to_string(),
            publisher: "Community".to_string(),
            description: "Read-only SQL queries and schema inspection against a Postgres database"
                .to_string(),
            category: ServerCategory::Database,
            status: ServerStatus::Online,
            verified: true,
            rating: 4.9,
            downloads: 112_700,
            security_grade: SecurityGrade::A,
            license: "PostgreSQL".to_string(),
            last_updated: date(2025, 6, 12),
            auth_method: AuthMethod::None,
            tools: vec![
                Tool::new("pg-1", "run_query", "Execute a read-only SQL query")
                    .with_parameter("sql", "string"),
                Tool::new("pg-2", "list_tables", "List tables in the connected database"),
                Tool::new("pg-3", "describe_table", "Show the columns of a table")
                    .with_parameter("table", "string"),
            ],
        },
        McpServer {
            id: "server-shopify".to_string(),
            name: "Shopify".to_string(),
            icon: "🛒".to_string(),
            publisher: "Shopify".to_string(),
            description: "Product listings and order status lookups for a Shopify storefront"
                .to_string(),
            category: ServerCategory::ECommerce,
            status: ServerStatus::Online,
            verified: false,
            rating: 3.9,
            downloads: 15_600,
            security_grade: SecurityGrade::B,
            license: "Proprietary".to_string(),
            last_updated: date(2025, 6, 7),
            auth_method: AuthMethod::ApiKey,
            tools: vec![
                Tool::new("shopify-1", "list_products", "List products in the storefront")
                    .with_parameter("limit", "number"),
                Tool::new("shopify-2", "order_status", "Look up the status of an order")
                    .with_parameter("order_id", "string"),
            ],
        },
        McpServer {
            id: "server-huggingface".to_string(),
            name: "Hugging Face".to_string(),
            icon: "🤗".to_string(),
            publisher: "Hugging Face".to_string(),
            description: "Model discovery and hosted inference on the Hugging Face Hub"
                .to_string(),
            category: ServerCategory::AiMl,
            status: ServerStatus::Online,
            verified: true,
            rating: 4.7,
            downloads: 93_500,
            security_grade: SecurityGrade::A,
            license: "Apache-2.0".to_string(),
            last_updated: date(2025, 6, 16),
            auth_method: AuthMethod::ApiKey,
            tools: vec![
                Tool::new("hf-1", "model_search", "Search models on the Hub")
                    .with_parameter("query", "string"),
                Tool::new("hf-2", "run_inference", "Run inference on a hosted model")
                    .with_parameter("model_id", "string")
                    .with_parameter("input", "string"),
            ],
        },
        McpServer {
            id: "server-deepl".to_string(),
            name: "DeepL".to_string(),
            icon: "🌍".to_string(),
            publisher: "DeepL SE".to_string(),
            description: "High-quality machine translation and language detection".to_string(),
            category: ServerCategory::LanguageTranslation,
            status: ServerStatus::Degraded,
            verified: true,
            rating: 4.6,
            downloads: 54_200,
            security_grade: SecurityGrade::A,
            license: "Proprietary".to_string(),
            last_updated: date(2025, 5, 30),
            auth_method: AuthMethod::ApiKey,
            tools: vec![
                Tool::new("deepl-1", "translate", "Translate text to a target language")
                    .with_parameter("text", "string")
                    .with_parameter("target_lang", "string"),
                Tool::new("deepl-2", "detect_language", "Detect the language of a text")
                    .with_parameter("text", "string"),
            ],
        },
        McpServer {
            id: "server-stripe".to_string(),
            name: "Stripe".to_string(),
            icon: "💳".to_string(),
            publisher: "Stripe".to_string(),
            description: "Payment links and charge history for a connected Stripe account"
                .to_string(),
            category: ServerCategory::Finance,
            status: ServerStatus::Online,
            verified: false,
            rating: 4.1,
            downloads: 22_900,
            security_grade: SecurityGrade::B,
            license: "Proprietary".to_string(),
            last_updated: date(2025, 6, 5),
            auth_method: AuthMethod::ApiKey,
            tools: vec![
                Tool::new("stripe-1", "create_payment_link", "Create a shareable payment link")
                    .with_parameter("amount", "number")
                    .with_parameter("currency", "string"),
                Tool::new("stripe-2", "list_charges", "List recent charges")
                    .with_parameter("limit", "number"),
            ],
        },
        McpServer {
            id: "server-bluesky".to_string(),
            name: "Bluesky".to_string(),
            icon: "🦋".to_string(),
            publisher: "Bluesky PBC".to_string(),
            description: "Post and search on the Bluesky social network via the AT Protocol"
                .to_string(),
            category: ServerCategory::SocialMedia,
            status: ServerStatus::Offline,
            verified: false,
            rating: 3.6,
            downloads: 8_400,
            security_grade: SecurityGrade::C,
            license: "MIT".to_string(),
            last_updated: date(2025, 3, 11),
            auth_method: AuthMethod::Oauth,
            tools: vec![
                Tool::new("bsky-1", "create_post", "Publish a post")
                    .with_parameter("text", "string"),
                Tool::new("bsky-2", "search_posts", "Search recent posts")
                    .with_parameter("query", "string"),
            ],
        },
    ]
}

/// The seeded user directory.
///
/// `user-1` is the platform administrator, matching the fixed account id
/// the login flow hands out.
#[must_use]
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "user-1".to_string(),
            username: "admin".to_string(),
            email: "admin@mcphub.dev".to_string(),
            role: UserRole::Admin,
            servers_count: 0,
            last_active: seen(2025, 6, 21, 9),
            status: UserStatus::Active,
        },
        User {
            id: "user-2".to_string(),
            username: "ada_dev".to_string(),
            email: "ada@stellarsoft.io".to_string(),
            role: UserRole::Developer,
            servers_count: 3,
            last_active: seen(2025, 6, 21, 7),
            status: UserStatus::Active,
        },
        User {
            id: "user-3".to_string(),
            username: "marco".to_string(),
            email: "marco@gmail.com".to_string(),
            role: UserRole::User,
            servers_count: 0,
            last_active: seen(2025, 6, 20, 22),
            status: UserStatus::Active,
        },
        User {
            id: "user-4".to_string(),
            username: "nina_codes".to_string(),
            email: "nina@devhouse.co".to_string(),
            role: UserRole::Developer,
            servers_count: 2,
            last_active: seen(2025, 6, 19, 15),
            status: UserStatus::Active,
        },
        User {
            id: "user-5".to_string(),
            username: "soren".to_string(),
            email: "soren@outlook.com".to_string(),
            role: UserRole::User,
            servers_count: 0,
            last_active: seen(2025, 5, 2, 11),
            status: UserStatus::Suspended,
        },
        User {
            id: "user-6".to_string(),
            username: "priya_ml".to_string(),
            email: "priya@mlworks.ai".to_string(),
            role: UserRole::Developer,
            servers_count: 1,
            last_active: seen(2025, 6, 18, 13),
            status: UserStatus::Active,
        },
        User {
            id: "user-7".to_string(),
            username: "jules".to_string(),
            email: "jules@proton.me".to_string(),
            role: UserRole::User,
            servers_count: 0,
            last_active: seen(2025, 6, 17, 19),
            status: UserStatus::Pending,
        },
        User {
            id: "user-8".to_string(),
            username: "tomasz".to_string(),
            email: "tomasz@kawa.dev".to_string(),
            role: UserRole::User,
            servers_count: 0,
            last_active: seen(2025, 6, 20, 8),
            status: UserStatus::Active,
        },
    ]
}

/// The seeded 24-hour activity counters.
#[must_use]
pub const fn seed_activity() -> ActivityCounters {
    ActivityCounters {
        active_today: 6,
        api_calls: 12_847,
    }
}
