//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every handler. Response schemas referenced from the
//! handler annotations are collected automatically; the envelope types are
//! listed explicitly so they appear even when only referenced generically.

use utoipa::OpenApi;

use crate::api::handlers::{
    auth, creator, dashboard, enums, marketplace, project, project_campaigns, settings, system,
};
use crate::error::{ErrorBody, ErrorResponse};

/// OpenAPI document for the mock API.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "AW3 Platform Mock API",
        description = "Fixture-backed mock of the AW3 creator/project campaign marketplace. Every `/api` response is wrapped in a `{ success, data | error, timestamp }` envelope.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        system::root_handler,
        system::health_handler,
        system::openapi_json,
        system::openapi_yaml,
        auth::wallet_connect,
        auth::verify_signature,
        auth::register,
        auth::refresh,
        auth::logout,
        auth::nonce,
        creator::get_profile,
        creator::update_profile,
        creator::social_verification,
        creator::list_campaigns,
        creator::get_campaign,
        creator::list_applications,
        creator::submit_application,
        creator::get_application,
        creator::list_deliverables,
        creator::submit_deliverable,
        creator::get_deliverable,
        creator::earnings,
        creator::earnings_history,
        creator::cvpi_score,
        creator::cvpi_history,
        creator::certificates,
        settings::get_language,
        settings::update_language,
        settings::get_rate,
        settings::update_rate,
        settings::get_notification,
        settings::update_notification,
        settings::get_privacy,
        settings::update_privacy,
        settings::get_security,
        settings::update_security,
        dashboard::trending,
        dashboard::live,
        dashboard::action_items,
        dashboard::analytics,
        dashboard::campaign_options,
        marketplace::public_campaigns,
        marketplace::stats,
        project::dashboard_stats,
        project_campaigns::list_campaigns,
        project_campaigns::create_campaign,
        project_campaigns::get_campaign,
        project_campaigns::update_campaign,
        project_campaigns::delete_campaign,
        project_campaigns::pause_campaign,
        project_campaigns::resume_campaign,
        project_campaigns::extend_campaign,
        project_campaigns::invite_creators,
        project_campaigns::export_report,
        project_campaigns::campaign_metrics,
        project_campaigns::campaign_overview,
        project_campaigns::campaign_analytics,
        project_campaigns::campaign_financials,
        project::estimate_fees,
        project::list_applications,
        project::get_application,
        project::approve_applications,
        project::reject_applications,
        project::application_deliverables,
        project::list_deliverables,
        project::get_deliverable,
        project::verify_deliverable,
        project::request_revision,
        project::reject_deliverable,
        project::discover_creators,
        project::recommended_creators,
        project::get_creator,
        project::analytics_overview,
        enums::list_tables,
        enums::get_table,
        enums::lookup,
    ),
    components(schemas(ErrorResponse, ErrorBody)),
    tags(
        (name = "System", description = "Service index, health and API documentation"),
        (name = "Auth", description = "Wallet sign-in and session tokens"),
        (name = "Creator", description = "Creator profile, campaigns, applications, deliverables, earnings and CVPI"),
        (name = "Settings", description = "Creator settings"),
        (name = "Dashboard", description = "Creator dashboard and filter options"),
        (name = "Marketplace", description = "Anonymous marketplace listing"),
        (name = "Project", description = "Project campaigns, applications, deliverables, creators and analytics"),
        (name = "Enums", description = "Numeric code lookup tables"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn every_route_group_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/auth/nonce/{walletAddress}",
            "/api/creator/campaigns/{id}",
            "/api/creator/settings/security",
            "/api/filters/campaign-options",
            "/api/public/marketplace/stats",
            "/api/project/campaigns/{id}/financials",
            "/api/project/fees/estimate",
            "/api/enums/{domain}/{code}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn document_renders_as_yaml() {
        let Ok(yaml) = ApiDoc::openapi().to_yaml() else {
            panic!("yaml feature renders the document");
        };
        assert!(yaml.contains("AW3 Platform Mock API"));
    }
}
