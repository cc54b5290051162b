//! Account notification settings.

use serde::{Deserialize, Serialize};

/// Notification toggles on the account settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct NotificationPreferences {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub promotional_emails: bool,
    pub order_updates: bool,
    pub newsletter_subscription: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: false,
            promotional_emails: true,
            order_updates: true,
            newsletter_subscription: true,
        }
    }
}
