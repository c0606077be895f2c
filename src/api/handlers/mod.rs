//! REST endpoint handlers organized by resource.

pub mod auth;
pub mod creator;
pub mod dashboard;
pub mod enums;
pub mod marketplace;
pub mod project;
pub mod project_campaigns;
pub mod settings;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes. Paths are absolute.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(system::routes())
        .merge(auth::routes())
        .merge(creator::routes())
        .merge(settings::routes())
        .merge(dashboard::routes())
        .merge(marketplace::routes())
        .merge(project_campaigns::routes())
        .merge(project::routes())
        .merge(enums::routes())
}
