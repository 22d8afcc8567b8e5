//! Client helpers for the provider's data API (`/rest/v1/*`). Reads use the
//! anon key; row-level security on the provider decides what is visible.

use crate::app_lib::{AppError, config::AppConfig, get_json_with_headers};
use crate::features::todos::types::Todo;

/// Fetches every visible row of the `todos` table.
pub async fn list_todos() -> Result<Vec<Todo>, AppError> {
    let config = AppConfig::load();
    if config.api_base_url.trim().is_empty() || config.api_anon_key.trim().is_empty() {
        return Err(AppError::Config(
            "Provider URL is not configured.".to_string(),
        ));
    }

    let headers = vec![
        ("apikey".to_string(), config.api_anon_key.clone()),
        (
            "Authorization".to_string(),
            format!("Bearer {}", config.api_anon_key),
        ),
    ];

    get_json_with_headers(&config.api_base_url, "/rest/v1/todos?select=*", &headers).await
}
