//! Handler for `GET|POST /templates`.

use axum::{Json, extract::Query};
use outreach_core::template::{EmailTemplate, catalogue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct TemplateParams {
  pub role:    Option<String>,
  pub country: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
  pub templates: Vec<EmailTemplate>,
}

/// `GET|POST /templates[?role=...&country=...]`
///
/// Placeholders are left in place unless both `role` and `country` are given.
pub async fn handler(Query(params): Query<TemplateParams>) -> Json<TemplatesResponse> {
  let templates = match (params.role.as_deref(), params.country.as_deref()) {
    (Some(role), Some(country)) => catalogue().iter().map(|t| t.render(role, country)).collect(),
    _ => catalogue(),
  };
  Json(TemplatesResponse { templates })
}
