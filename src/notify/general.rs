use crate::notify::{self, DispatchError, DispatchOutcome};
use crate::ports::push::PushSender;
use crate::ports::store::DocumentStore;
use crate::types::payload::{PushMessage, PushNotification};
use crate::types::records::{self, Fields, NotificationRecord, UserRecord};

use std::collections::HashMap;

/// Relays a newly created notification record to its owning user's device.
#[derive(Debug, Clone)]
pub struct GeneralNotificationDispatcher<D, P> {
    store: D,
    push: P,
}

impl<D, P> GeneralNotificationDispatcher<D, P>
where
    D: DocumentStore,
    P: PushSender,
{
    pub fn new(store: D, push: P) -> Self {
        Self { store, push }
    }

    pub async fn handle(
        &self,
        user_id: &str,
        fields: &Fields,
    ) -> Result<DispatchOutcome, DispatchError<D::Error>> {
        let record: NotificationRecord = records::parse(fields)?;

        let user = self
            .store
            .get_document("users", user_id)
            .await
            .map_err(DispatchError::Store)?;
        let user: UserRecord = match user {
            Some(fields) => records::parse(&fields)?,
            None => {
                println!("user {user_id} not found");
                return Ok(DispatchOutcome::SkippedMissingUser);
            }
        };

        let token = match notify::non_empty(user.fcm_token.as_deref()) {
            Some(token) => token.to_string(),
            None => {
                println!("no push token for user {user_id}");
                return Ok(DispatchOutcome::SkippedNoToken);
            }
        };

        let push_message = PushMessage {
            notification: PushNotification {
                title: notify::non_empty(record.title.as_deref())
                    .unwrap_or("New Notification")
                    .to_string(),
                body: notify::non_empty(record.body.as_deref())
                    .unwrap_or("Check your app for updates.")
                    .to_string(),
            },
            data: HashMap::from([
                (
                    "type".to_string(),
                    notify::non_empty(record.kind.as_deref())
                        .unwrap_or("general")
                        .to_string(),
                ),
                (
                    "projectId".to_string(),
                    record.project_id.clone().unwrap_or_default(),
                ),
                ("click_action".to_string(), notify::CLICK_ACTION.to_string()),
            ]),
            token,
        };

        match self.push.send(&push_message).await {
            Ok(()) => {
                println!("general notification sent to {user_id}");
                Ok(DispatchOutcome::Sent {
                    success_count: 1,
                    failure_count: 0,
                })
            }
            Err(err) => {
                eprintln!("error sending general notification: {err}");
                Ok(DispatchOutcome::DeliveryFailed {
                    reason: err.to_string(),
                })
            }
        }
    }
}
