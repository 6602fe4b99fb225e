use crate::registry::ViewEntry;
use crate::server::state::ApiState;
use axum::{Json, extract::State};
use serde::Serialize;
use sitehub_domain::constants::FEATURES_TAG;

/// A loaded feature module, as reported by the resolved registry.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub(super) struct FeatureModuleResponse {
    /// Module name
    name: String,
    /// Resolved capability names
    capabilities: Vec<&'static str>,
    /// Loadable view entries
    views: Vec<ViewEntry>,
}

#[utoipa::path(
    get,
    path = "/features",
    responses((status = OK, description = "Loaded feature modules", body = [FeatureModuleResponse])),
    tag = FEATURES_TAG,
)]
#[allow(clippy::unused_async)]
pub(super) async fn features_handler(
    State(state): State<ApiState>,
) -> Json<Vec<FeatureModuleResponse>> {
    let modules = state
        .registry()
        .modules()
        .map(|module| FeatureModuleResponse {
            name: module.name().to_owned(),
            capabilities: module.capabilities().names(),
            views: module.views().to_vec(),
        })
        .collect();

    Json(modules)
}
