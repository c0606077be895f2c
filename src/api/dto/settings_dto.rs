//! Creator settings DTOs.
//!
//! Every settings group has a default value and an update body whose
//! supplied fields are echoed over the defaults.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Language and timezone preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LanguageSettings {
    /// ISO-639-1 language code.
    pub language: String,
    /// IANA timezone name.
    pub timezone: String,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            timezone: "UTC".to_string(),
        }
    }
}

/// Update body for [`LanguageSettings`].
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LanguageSettingsUpdate {
    /// ISO-639-1 language code.
    pub language: Option<String>,
    /// IANA timezone name.
    pub timezone: Option<String>,
}

impl LanguageSettingsUpdate {
    /// Applies the supplied fields over the defaults.
    #[must_use]
    pub fn apply(self) -> LanguageSettings {
        let base = LanguageSettings::default();
        LanguageSettings {
            language: self.language.unwrap_or(base.language),
            timezone: self.timezone.unwrap_or(base.timezone),
        }
    }
}

/// Creator pricing.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RateSettings {
    /// Hourly rate.
    pub hourly_rate: f64,
    /// Daily rate.
    pub daily_rate: f64,
    /// Flat per-project rate.
    pub project_rate: f64,
    /// Settlement currency.
    pub currency: String,
    /// Smallest campaign budget accepted.
    pub minimum_budget: f64,
}

impl Default for RateSettings {
    fn default() -> Self {
        Self {
            hourly_rate: 100.0,
            daily_rate: 800.0,
            project_rate: 5000.0,
            currency: "USDC".to_string(),
            minimum_budget: 500.0,
        }
    }
}

/// Update body for [`RateSettings`].
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RateSettingsUpdate {
    /// Hourly rate.
    pub hourly_rate: Option<f64>,
    /// Daily rate.
    pub daily_rate: Option<f64>,
    /// Flat per-project rate.
    pub project_rate: Option<f64>,
    /// Settlement currency.
    pub currency: Option<String>,
    /// Smallest campaign budget accepted.
    pub minimum_budget: Option<f64>,
}

impl RateSettingsUpdate {
    /// Applies the supplied fields over the defaults.
    #[must_use]
    pub fn apply(self) -> RateSettings {
        let base = RateSettings::default();
        RateSettings {
            hourly_rate: self.hourly_rate.unwrap_or(base.hourly_rate),
            daily_rate: self.daily_rate.unwrap_or(base.daily_rate),
            project_rate: self.project_rate.unwrap_or(base.project_rate),
            currency: self.currency.unwrap_or(base.currency),
            minimum_budget: self.minimum_budget.unwrap_or(base.minimum_budget),
        }
    }
}

/// Notification switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct NotificationSettings {
    /// Email notifications.
    pub email_notifications: bool,
    /// Push notifications.
    pub push_notifications: bool,
    /// Campaign status changes.
    pub campaign_updates: bool,
    /// Application decisions.
    pub application_updates: bool,
    /// Payment releases.
    pub payment_notifications: bool,
    /// Marketing emails.
    pub marketing_emails: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            campaign_updates: true,
            application_updates: true,
            payment_notifications: true,
            marketing_emails: false,
        }
    }
}

/// Update body for [`NotificationSettings`].
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettingsUpdate {
    /// Email notifications.
    pub email_notifications: Option<bool>,
    /// Push notifications.
    pub push_notifications: Option<bool>,
    /// Campaign status changes.
    pub campaign_updates: Option<bool>,
    /// Application decisions.
    pub application_updates: Option<bool>,
    /// Payment releases.
    pub payment_notifications: Option<bool>,
    /// Marketing emails.
    pub marketing_emails: Option<bool>,
}

impl NotificationSettingsUpdate {
    /// Applies the supplied fields over the defaults.
    #[must_use]
    pub fn apply(self) -> NotificationSettings {
        let base = NotificationSettings::default();
        NotificationSettings {
            email_notifications: self.email_notifications.unwrap_or(base.email_notifications),
            push_notifications: self.push_notifications.unwrap_or(base.push_notifications),
            campaign_updates: self.campaign_updates.unwrap_or(base.campaign_updates),
            application_updates: self.application_updates.unwrap_or(base.application_updates),
            payment_notifications: self
                .payment_notifications
                .unwrap_or(base.payment_notifications),
            marketing_emails: self.marketing_emails.unwrap_or(base.marketing_emails),
        }
    }
}

/// Profile visibility controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    /// `PUBLIC` or `PRIVATE`.
    pub profile_visibility: String,
    /// Show earnings on the public profile.
    pub show_earnings: bool,
    /// Show completed campaigns.
    pub show_completed_campaigns: bool,
    /// Show linked social accounts.
    pub show_social_accounts: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            profile_visibility: "PUBLIC".to_string(),
            show_earnings: false,
            show_completed_campaigns: true,
            show_social_accounts: true,
        }
    }
}

/// Update body for [`PrivacySettings`].
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettingsUpdate {
    /// `PUBLIC` or `PRIVATE`.
    pub profile_visibility: Option<String>,
    /// Show earnings on the public profile.
    pub show_earnings: Option<bool>,
    /// Show completed campaigns.
    pub show_completed_campaigns: Option<bool>,
    /// Show linked social accounts.
    pub show_social_accounts: Option<bool>,
}

impl PrivacySettingsUpdate {
    /// Applies the supplied fields over the defaults.
    #[must_use]
    pub fn apply(self) -> PrivacySettings {
        let base = PrivacySettings::default();
        PrivacySettings {
            profile_visibility: self.profile_visibility.unwrap_or(base.profile_visibility),
            show_earnings: self.show_earnings.unwrap_or(base.show_earnings),
            show_completed_campaigns: self
                .show_completed_campaigns
                .unwrap_or(base.show_completed_campaigns),
            show_social_accounts: self
                .show_social_accounts
                .unwrap_or(base.show_social_accounts),
        }
    }
}

/// A device allowed to skip login alerts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrustedDevice {
    /// Device identifier.
    pub device_id: Uuid,
    /// Browser and OS description.
    pub device_name: String,
    /// Last sign-in from this device.
    pub last_used: String,
}

/// Account security settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    /// Two-factor authentication on.
    pub two_factor_enabled: bool,
    /// Alert on sign-in from a new device.
    pub login_alerts: bool,
    /// Trusted devices.
    pub trusted_devices: Vec<TrustedDevice>,
}

impl SecuritySettings {
    /// Stored settings with one trusted device.
    #[must_use]
    pub fn current() -> Self {
        Self {
            two_factor_enabled: false,
            login_alerts: true,
            trusted_devices: vec![TrustedDevice {
                device_id: Uuid::new_v4(),
                device_name: "Chrome on Windows".to_string(),
                last_used: "2024-12-10T09:30:00Z".to_string(),
            }],
        }
    }
}

/// Update body for [`SecuritySettings`]. The device list is replaced.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettingsUpdate {
    /// Two-factor authentication on.
    pub two_factor_enabled: Option<bool>,
    /// Alert on sign-in from a new device.
    pub login_alerts: Option<bool>,
    /// Replacement trusted-device list. Defaults to empty.
    pub trusted_devices: Option<Vec<TrustedDevice>>,
}

impl SecuritySettingsUpdate {
    /// Applies the supplied fields over the defaults.
    #[must_use]
    pub fn apply(self) -> SecuritySettings {
        SecuritySettings {
            two_factor_enabled: self.two_factor_enabled.unwrap_or(false),
            login_alerts: self.login_alerts.unwrap_or(true),
            trusted_devices: self.trusted_devices.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_updates_yield_defaults() {
        assert_eq!(
            LanguageSettingsUpdate::default().apply(),
            LanguageSettings::default()
        );
        assert_eq!(
            RateSettingsUpdate::default().apply(),
            RateSettings::default()
        );
        assert_eq!(
            NotificationSettingsUpdate::default().apply(),
            NotificationSettings::default()
        );
        assert_eq!(
            PrivacySettingsUpdate::default().apply(),
            PrivacySettings::default()
        );
        assert!(
            SecuritySettingsUpdate::default()
                .apply()
                .trusted_devices
                .is_empty()
        );
    }

    #[test]
    fn supplied_fields_win_including_falsy_values() {
        let update = NotificationSettingsUpdate {
            email_notifications: Some(false),
            marketing_emails: Some(true),
            ..NotificationSettingsUpdate::default()
        };
        let applied = update.apply();
        assert!(!applied.email_notifications);
        assert!(applied.marketing_emails);
        assert!(applied.push_notifications);

        let rate = RateSettingsUpdate {
            hourly_rate: Some(0.0),
            currency: Some("AW3".into()),
            ..RateSettingsUpdate::default()
        }
        .apply();
        assert!(rate.hourly_rate.abs() < f64::EPSILON);
        assert_eq!(rate.currency, "AW3");
        assert!((rate.daily_rate - 800.0).abs() < f64::EPSILON);
    }
}
