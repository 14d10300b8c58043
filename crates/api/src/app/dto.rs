use serde::{Deserialize, Serialize};

// -------------------------
// Request DTOs
// -------------------------

// Product create/update bodies decode straight into `storefront_products::ProductInput`.

#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
}

impl ListProductsQuery {
    /// The category filter, if one was given and is non-empty.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub filter: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "UP",
            message: "Service is running",
        }
    }
}
