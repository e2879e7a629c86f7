use crate::notify::chat::ChatNotificationDispatcher;
use crate::notify::general::GeneralNotificationDispatcher;
use crate::notify::{DispatchError, DispatchOutcome};
use crate::ports::push::PushSender;
use crate::ports::store::DocumentStore;
use crate::types::records::Fields;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    Dispatched(DispatchOutcome),
    Unmatched,
}

/// Routes document-creation events to the handler registered for their path.
///
/// Two patterns are registered, with parameters extracted positionally:
/// `projects/{projectId}/messages/{messageId}` and
/// `users/{userId}/notifications/{notiId}`.
pub struct TriggerRouter<D, P> {
    chat: ChatNotificationDispatcher<D, P>,
    general: GeneralNotificationDispatcher<D, P>,
}

impl<D, P> TriggerRouter<D, P>
where
    D: DocumentStore,
    P: PushSender,
{
    pub fn new(store: D, push: P) -> Self {
        Self {
            chat: ChatNotificationDispatcher::new(store.clone(), push.clone()),
            general: GeneralNotificationDispatcher::new(store, push),
        }
    }

    pub async fn dispatch_create(
        &self,
        path: &str,
        fields: &Fields,
    ) -> Result<TriggerOutcome, DispatchError<D::Error>> {
        if let Some((project_id, _message_id)) = match_chat_message(path) {
            let outcome = self.chat.handle(project_id, fields).await?;
            return Ok(TriggerOutcome::Dispatched(outcome));
        }
        if let Some((user_id, _noti_id)) = match_user_notification(path) {
            let outcome = self.general.handle(user_id, fields).await?;
            return Ok(TriggerOutcome::Dispatched(outcome));
        }
        eprintln!("ignoring create event for unmatched document path: {path}");
        Ok(TriggerOutcome::Unmatched)
    }
}

fn match_pattern<'a>(path: &'a str, outer: &str, inner: &str) -> Option<(&'a str, &'a str)> {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    match segments.as_slice() {
        [first, outer_id, second, inner_id]
            if *first == outer && *second == inner && !outer_id.is_empty()
                && !inner_id.is_empty() =>
        {
            Some((*outer_id, *inner_id))
        }
        _ => None,
    }
}

pub(crate) fn match_chat_message(path: &str) -> Option<(&str, &str)> {
    match_pattern(path, "projects", "messages")
}

pub(crate) fn match_user_notification(path: &str) -> Option<(&str, &str)> {
    match_pattern(path, "users", "notifications")
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;
    use crate::notify::tests::{TestSender, TestStore, fields_from};
    use serde_json::json;

    #[test]
    fn match_chat_message__should_extract_both_ids() {
        assert_eq!(
            match_chat_message("projects/p1/messages/m1"),
            Some(("p1", "m1"))
        );
        assert_eq!(
            match_chat_message("/projects/p1/messages/m1/"),
            Some(("p1", "m1"))
        );
    }

    #[test]
    fn match_chat_message__should_reject_other_paths() {
        assert_eq!(match_chat_message("projects/p1/messages"), None);
        assert_eq!(match_chat_message("projects/p1/members/m1"), None);
        assert_eq!(match_chat_message("teams/p1/messages/m1"), None);
        assert_eq!(match_chat_message("projects//messages/m1"), None);
        assert_eq!(match_chat_message("projects/p1/messages/m1/extra"), None);
    }

    #[test]
    fn match_user_notification__should_extract_both_ids() {
        assert_eq!(
            match_user_notification("users/u1/notifications/n1"),
            Some(("u1", "n1"))
        );
        assert_eq!(match_user_notification("users/u1/messages/n1"), None);
    }

    #[tokio::test]
    async fn dispatch_create__should_route_chat_paths() {
        // Given
        let store = TestStore::default();
        store.insert(
            "projects",
            "p1",
            fields_from(json!({"members": ["alice@test.com"]})),
        );
        let sender = TestSender::default();
        let router = TriggerRouter::new(store, sender);
        let fields = fields_from(json!({"senderEmail": "alice@test.com", "text": "hi"}));

        // When
        let outcome = router
            .dispatch_create("projects/p1/messages/m1", &fields)
            .await
            .expect("dispatch");

        // Then
        assert_eq!(
            outcome,
            TriggerOutcome::Dispatched(DispatchOutcome::SkippedNoRecipients)
        );
    }

    #[tokio::test]
    async fn dispatch_create__should_route_notification_paths() {
        // Given
        let store = TestStore::default();
        let sender = TestSender::default();
        let router = TriggerRouter::new(store, sender);
        let fields = fields_from(json!({"title": "Beep"}));

        // When
        let outcome = router
            .dispatch_create("users/u1/notifications/n1", &fields)
            .await
            .expect("dispatch");

        // Then
        assert_eq!(
            outcome,
            TriggerOutcome::Dispatched(DispatchOutcome::SkippedMissingUser)
        );
    }

    #[tokio::test]
    async fn dispatch_create__should_report_unmatched_paths() {
        // Given
        let store = TestStore::default();
        let sender = TestSender::default();
        let router = TriggerRouter::new(store, sender);
        let fields = fields_from(json!({}));

        // When
        let outcome = router
            .dispatch_create("projects/p1/tasks/t1", &fields)
            .await
            .expect("dispatch");

        // Then
        assert_eq!(outcome, TriggerOutcome::Unmatched);
    }
}
