//! On-demand SEO generation route.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use seo_pipeline::SeoFields;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for the generation endpoint.
///
/// `propertyName` identifies which editor field triggered the request;
/// the response always carries all three fields, so it is accepted for
/// widget symmetry but not interpreted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSeoRequest {
    pub fragment: Uuid,

    #[serde(default)]
    pub property_name: Option<String>,
}

/// Generate SEO fields for a fragment on demand.
pub async fn generate_seo_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateSeoRequest>,
) -> Result<Json<SeoFields>, ApiError> {
    let fragment = state
        .store
        .get(request.fragment)
        .await?
        .ok_or(ApiError::FragmentNotFound(request.fragment))?;

    info!(
        fragment = %request.fragment,
        property = ?request.property_name,
        "generating SEO fields"
    );

    let fields = state.pipeline.generate(&fragment).await?;
    Ok(Json(fields))
}
