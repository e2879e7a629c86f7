use crate::notify::{self, DispatchError, DispatchOutcome};
use crate::ports::push::PushSender;
use crate::ports::store::DocumentStore;
use crate::types::payload::{MulticastMessage, PushNotification};
use crate::types::records::{self, Fields, Message, Project, UserRecord};

use std::collections::HashMap;

/// Fans a newly created chat message out to every project member except the
/// sender, one multicast push per triggering message.
#[derive(Debug, Clone)]
pub struct ChatNotificationDispatcher<D, P> {
    store: D,
    push: P,
}

impl<D, P> ChatNotificationDispatcher<D, P>
where
    D: DocumentStore,
    P: PushSender,
{
    pub fn new(store: D, push: P) -> Self {
        Self { store, push }
    }

    pub async fn handle(
        &self,
        project_id: &str,
        fields: &Fields,
    ) -> Result<DispatchOutcome, DispatchError<D::Error>> {
        let message: Message = records::parse(fields)?;
        let sender_email = notify::normalize_email(message.sender_email.as_deref().unwrap_or(""));

        println!("new message from {sender_email} in project {project_id}");

        let project = self
            .store
            .get_document("projects", project_id)
            .await
            .map_err(DispatchError::Store)?;
        let project: Project = match project {
            Some(fields) => records::parse(&fields)?,
            None => {
                println!("project {project_id} not found");
                return Ok(DispatchOutcome::SkippedMissingProject);
            }
        };

        let recipients: Vec<&str> = project
            .members
            .iter()
            .map(String::as_str)
            .filter(|member| notify::normalize_email(member) != sender_email)
            .collect();
        if recipients.is_empty() {
            println!("no recipients in project {project_id} (sender is the only member)");
            return Ok(DispatchOutcome::SkippedNoRecipients);
        }

        // The lookup uses the member string exactly as written in the project
        // document, not its normalized form; a differently-cased user record
        // will not match.
        let mut tokens = Vec::new();
        for recipient in &recipients {
            let user = self
                .store
                .find_by_field("users", "email", recipient)
                .await
                .map_err(DispatchError::Store)?;
            if let Some(fields) = user {
                let user: UserRecord = records::parse(&fields)?;
                if let Some(token) = notify::non_empty(user.fcm_token.as_deref()) {
                    tokens.push(token.to_string());
                }
            }
        }

        if tokens.is_empty() {
            println!("no push tokens for recipients in project {project_id}");
            return Ok(DispatchOutcome::SkippedNoTokens);
        }

        let sender_label = notify::non_empty(message.sender_name.as_deref())
            .unwrap_or_else(|| local_part(&sender_email));
        let project_name = notify::non_empty(project.name.as_deref()).unwrap_or("Project");
        let multicast = MulticastMessage {
            notification: PushNotification {
                title: format!("{sender_label} in {project_name}"),
                body: message.text.clone().unwrap_or_default(),
            },
            data: HashMap::from([
                ("type".to_string(), "chat".to_string()),
                ("projectId".to_string(), project_id.to_string()),
                ("click_action".to_string(), notify::CLICK_ACTION.to_string()),
            ]),
            tokens,
        };

        match self.push.send_multicast(&multicast).await {
            Ok(outcome) => {
                println!(
                    "chat notifications sent: {} successful, {} failed",
                    outcome.success_count, outcome.failure_count
                );
                Ok(DispatchOutcome::Sent {
                    success_count: outcome.success_count,
                    failure_count: outcome.failure_count,
                })
            }
            Err(err) => {
                eprintln!("error sending chat notifications: {err}");
                Ok(DispatchOutcome::DeliveryFailed {
                    reason: err.to_string(),
                })
            }
        }
    }
}

fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
