//! Desktop notifications over the freedesktop D-Bus interface.
//!
//! Fire-and-forget: each alert is sent from its own task and failures are
//! only logged.

use crate::config::NotificationConfig;
use log::{info, warn};
use std::collections::HashMap;
use std::sync::Arc;
use zbus::Connection;
use zbus::zvariant::Value;

/// Urgency hint value for "critical".
const URGENCY_CRITICAL: u8 = 2;
/// Let the server pick the expiry.
const DEFAULT_EXPIRY: i32 = -1;

#[zbus::proxy(
    interface = "org.freedesktop.Notifications",
    default_service = "org.freedesktop.Notifications",
    default_path = "/org/freedesktop/Notifications"
)]
trait Notifications {
    fn notify(
        &self,
        app_name: &str,
        replaces_id: u32,
        app_icon: &str,
        summary: &str,
        body: &str,
        actions: &[&str],
        hints: &HashMap<&str, &Value<'_>>,
        expire_timeout: i32,
    ) -> zbus::Result<u32>;
}

pub struct Notifier {
    connection: Option<Connection>,
    config: Arc<NotificationConfig>,
}

impl Notifier {
    /// Connect to the session bus. Without one, alerts are dropped with a warning.
    pub async fn connect(config: NotificationConfig) -> Self {
        let connection = match Connection::session().await {
            Ok(connection) => Some(connection),
            Err(e) => {
                warn!("No session bus, battery alerts disabled: {}", e);
                None
            }
        };

        Notifier {
            connection,
            config: Arc::new(config),
        }
    }

    /// Raise the low-battery alert without waiting for the result.
    pub fn battery_low(&self) {
        let Some(connection) = self.connection.clone() else {
            warn!("Battery low, but notifications are unavailable");
            return;
        };
        let config = Arc::clone(&self.config);

        tokio::spawn(async move {
            if let Err(e) = send(&connection, &config).await {
                warn!("Failed to send battery notification: {}", e);
            } else {
                info!("Battery low notification sent");
            }
        });
    }
}

async fn send(connection: &Connection, config: &NotificationConfig) -> zbus::Result<u32> {
    let proxy = NotificationsProxy::new(connection).await?;

    let urgency = Value::from(URGENCY_CRITICAL);
    let hints = HashMap::from([("urgency", &urgency)]);

    proxy
        .notify(
            &config.app_name,
            0,
            &config.icon,
            &config.summary,
            &config.body,
            &[],
            &hints,
            DEFAULT_EXPIRY,
        )
        .await
}
