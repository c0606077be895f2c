//! Data Transfer Objects for REST request/response serialization.
//!
//! Field names are camelCase on the wire. Request bodies that carry enum
//! codes validate them against the lookup tables before use.

pub mod auth_dto;
pub mod campaign_dto;
pub mod common_dto;
pub mod creator_dto;
pub mod dashboard_dto;
pub mod enum_dto;
pub mod project_dto;
pub mod settings_dto;

pub use auth_dto::*;
pub use campaign_dto::*;
pub use common_dto::*;
pub use creator_dto::*;
pub use dashboard_dto::*;
pub use enum_dto::*;
pub use project_dto::*;
pub use settings_dto::*;
