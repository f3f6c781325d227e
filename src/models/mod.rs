use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

pub const DEFAULT_TITLE: &str = "Cryzen Embed";
pub const DEFAULT_DESCRIPTION: &str = "Custom Discord embed";
pub const DEFAULT_IMAGE_URL: &str = "https://i.imgur.com/1XvNqw8.png";
pub const DEFAULT_COLOR: &str = "#0099ff";
pub const DEFAULT_OG_TYPE: &str = "website";
pub const DEFAULT_SITE_NAME: &str = "Cryzen";

/// Timestamp format used wherever a creation time is shown to clients.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// Embed Models
// ============================================================================

/// One registered preview. Built once by the create handler and never
/// mutated afterwards; the store hands out shared `Arc`s of it.
#[derive(Debug, Clone)]
pub struct EmbedRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub color: String,
    pub og_type: String,
    pub site_name: String,
    /// Absolute view URL, derived from the inbound request's host and `id`.
    pub url: String,
    pub created_at: DateTime<Local>,
}

impl EmbedRecord {
    pub fn created_display(&self) -> String {
        self.created_at.format(CREATED_AT_FORMAT).to_string()
    }
}

/// Body of `POST /create`. Every field is optional; absent (or `null`)
/// fields take the documented defaults.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateEmbedRequest {
    #[validate(length(max = 256, message = "title must be at most 256 characters"))]
    #[schema(example = "Your Embed Title")]
    pub title: Option<String>,
    #[validate(length(
        max = 4096,
        message = "description must be at most 4096 characters"
    ))]
    #[schema(example = "Your embed description")]
    pub description: Option<String>,
    #[validate(length(max = 2048, message = "image_url must be at most 2048 characters"))]
    #[schema(example = "https://example.com/image.png")]
    pub image_url: Option<String>,
    #[validate(length(max = 32, message = "color must be at most 32 characters"))]
    #[schema(example = "#0099ff")]
    pub color: Option<String>,
    #[validate(length(max = 64, message = "og_type must be at most 64 characters"))]
    #[schema(example = "website")]
    pub og_type: Option<String>,
    #[validate(length(max = 256, message = "site_name must be at most 256 characters"))]
    #[schema(example = "Your Site Name")]
    pub site_name: Option<String>,
}

impl CreateEmbedRequest {
    /// Parse and validate a raw request body.
    ///
    /// An empty body, `null` and `{}` all count as "no data" and are
    /// rejected; anything else must be a JSON object.
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(no_data());
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::Validation(format!("Invalid JSON: {e}")))?;

        match &value {
            Value::Null => return Err(no_data()),
            Value::Object(map) if map.is_empty() => return Err(no_data()),
            Value::Object(_) => {}
            _ => {
                return Err(AppError::Validation(
                    "Request body must be a JSON object".into(),
                ))
            }
        }

        let req: CreateEmbedRequest = serde_json::from_value(value)
            .map_err(|e| AppError::Validation(format!("Invalid embed data: {e}")))?;
        req.validate()?;
        Ok(req)
    }

    pub fn into_record(self, id: String, url: String, created_at: DateTime<Local>) -> EmbedRecord {
        EmbedRecord {
            id,
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            image_url: self
                .image_url
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
            color: self.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            og_type: self.og_type.unwrap_or_else(|| DEFAULT_OG_TYPE.to_string()),
            site_name: self
                .site_name
                .unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
            url,
            created_at,
        }
    }
}

fn no_data() -> AppError {
    AppError::Validation("No JSON data provided".into())
}

// ============================================================================
// Response Models
// ============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateEmbedResponse {
    pub success: bool,
    #[schema(example = "3f9c2a1b")]
    pub embed_id: String,
    #[schema(example = "https://embeds.example.com/embed/3f9c2a1b")]
    pub url: String,
    pub message: String,
}

/// Listing entry returned by `GET /list`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmbedSummary {
    pub id: String,
    pub title: String,
    pub url: String,
    #[schema(example = "2024-05-01 18:30:00")]
    pub created: String,
}

impl From<&EmbedRecord> for EmbedSummary {
    fn from(record: &EmbedRecord) -> Self {
        EmbedSummary {
            id: record.id.clone(),
            title: record.title.clone(),
            url: record.url.clone(),
            created: record.created_display(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmbedListResponse {
    pub embeds: Vec<EmbedSummary>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "Cryzen Discord Embed Server")]
    pub service: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
