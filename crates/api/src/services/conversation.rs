//! Chat-list aggregation: the derivation of per-conversation presentation
//! state (latest message, unread count, counterpart identity, display
//! name) from normalized rows.
//!
//! The repository returns each derived facet as one batched result set
//! over the caller's candidate chat set; `assemble_summaries` joins them
//! in memory by chat id and orders the result.

use std::cmp::Ordering;
use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::warn;

use courier_database::{
    ChatKind, ChatOverview, ConversationRepository, Counterpart, LatestMessage, UnreadCount,
};

use super::error::ServiceError;
use crate::routes::models::ConversationSummary;

/// Display label for group chats without a name of their own.
const GROUP_CHAT_PLACEHOLDER: &str = "Group chat";

/// Produce the caller's chat list, ordered by latest activity.
///
/// Four storage round trips regardless of chat count: the candidate set,
/// then the latest-message, unread-count, and counterpart batches.
pub async fn list_conversations(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<ConversationSummary>, ServiceError> {
    let repo = ConversationRepository::new(pool.clone());

    let chats = repo.chats_for_user(user_id).await?;
    if chats.is_empty() {
        return Ok(Vec::new());
    }

    let chat_ids: Vec<i64> = chats.iter().map(|chat| chat.id).collect();
    let latest = repo.latest_messages(&chat_ids).await?;
    let unread = repo.unread_counts(user_id).await?;
    let counterparts = repo.counterparts(user_id, &chat_ids).await?;

    Ok(assemble_summaries(chats, latest, unread, counterparts))
}

/// Join the batched facet rows by chat id and derive display state.
fn assemble_summaries(
    chats: Vec<ChatOverview>,
    latest: Vec<LatestMessage>,
    unread: Vec<UnreadCount>,
    counterparts: Vec<Counterpart>,
) -> Vec<ConversationSummary> {
    let latest_by_chat: HashMap<i64, LatestMessage> = latest
        .into_iter()
        .map(|row| (row.chat_id, row))
        .collect();

    let unread_by_chat: HashMap<i64, i64> = unread
        .into_iter()
        .map(|row| (row.chat_id, row.unread))
        .collect();

    let mut others_by_chat: HashMap<i64, Vec<Counterpart>> = HashMap::new();
    for row in counterparts {
        others_by_chat.entry(row.chat_id).or_default().push(row);
    }

    let mut summaries: Vec<ConversationSummary> = chats
        .into_iter()
        .map(|chat| {
            let latest = latest_by_chat.get(&chat.id);
            let unread_count = unread_by_chat.get(&chat.id).copied().unwrap_or(0);
            let others = others_by_chat
                .get(&chat.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let counterpart = resolve_counterpart(&chat, others);

            let display_name = match counterpart {
                Some(other) => other.full_name.clone(),
                None => chat
                    .name
                    .clone()
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| GROUP_CHAT_PLACEHOLDER.to_string()),
            };

            ConversationSummary {
                id: chat.id,
                name: chat.name,
                chat_type: chat.chat_type,
                last_message: latest.map(|row| row.content.clone()),
                last_message_time: latest.map(|row| row.created_at.clone()),
                unread_count,
                other_user_name: counterpart.map(|other| other.full_name.clone()),
                other_user_avatar: counterpart.and_then(|other| other.avatar_url.clone()),
                other_user_status: counterpart.map(|other| other.status.clone()),
                display_name,
            }
        })
        .collect();

    // Latest activity first; chats without messages sort after every chat
    // that has one (NULLS LAST), ties broken by chat id for determinism.
    summaries.sort_by(|a, b| match (&b.last_message_time, &a.last_message_time) {
        (Some(lhs), Some(rhs)) => lhs.cmp(rhs).then_with(|| b.id.cmp(&a.id)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => b.id.cmp(&a.id),
    });

    summaries
}

/// The single other participant of a direct chat, if it is well formed.
///
/// A direct chat carrying more than one other participant breaks the
/// two-party invariant; such rows are reported and left unresolved rather
/// than arbitrarily picking one. Group chats never resolve a counterpart.
fn resolve_counterpart<'a>(
    chat: &ChatOverview,
    others: &'a [Counterpart],
) -> Option<&'a Counterpart> {
    if chat.chat_type != ChatKind::Direct {
        return None;
    }

    match others {
        [only] => Some(only),
        [] => None,
        _ => {
            warn!(
                chat_id = chat.id,
                counterpart_count = others.len(),
                "direct chat has more than one other participant, leaving counterpart unresolved"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat(id: i64, name: Option<&str>, kind: ChatKind) -> ChatOverview {
        ChatOverview {
            id,
            name: name.map(str::to_string),
            chat_type: kind,
        }
    }

    fn latest(chat_id: i64, content: &str, created_at: &str) -> LatestMessage {
        LatestMessage {
            chat_id,
            content: content.to_string(),
            created_at: created_at.to_string(),
        }
    }

    fn counterpart(chat_id: i64, user_id: i64, full_name: &str, status: &str) -> Counterpart {
        Counterpart {
            chat_id,
            user_id,
            full_name: full_name.to_string(),
            avatar_url: None,
            status: status.to_string(),
        }
    }

    #[test]
    fn direct_chat_displays_counterpart_name() {
        let summaries = assemble_summaries(
            vec![chat(1, None, ChatKind::Direct)],
            vec![latest(1, "hi", "2024-01-01T10:00:00+00:00")],
            vec![UnreadCount { chat_id: 1, unread: 3 }],
            vec![counterpart(1, 2, "Bob Baker", "online")],
        );

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].display_name, "Bob Baker");
        assert_eq!(summaries[0].other_user_name.as_deref(), Some("Bob Baker"));
        assert_eq!(summaries[0].other_user_status.as_deref(), Some("online"));
        assert_eq!(summaries[0].unread_count, 3);
        assert_eq!(summaries[0].last_message.as_deref(), Some("hi"));
    }

    #[test]
    fn group_chat_uses_own_name_and_never_a_counterpart() {
        let summaries = assemble_summaries(
            vec![chat(1, Some("Weekend plans"), ChatKind::Group)],
            vec![],
            vec![],
            vec![
                counterpart(1, 2, "Bob", "online"),
                counterpart(1, 3, "Carol", "away"),
            ],
        );

        assert_eq!(summaries[0].display_name, "Weekend plans");
        assert_eq!(summaries[0].other_user_name, None);
    }

    #[test]
    fn unnamed_group_chat_falls_back_to_placeholder() {
        let summaries = assemble_summaries(
            vec![chat(1, None, ChatKind::Group)],
            vec![],
            vec![],
            vec![],
        );

        assert_eq!(summaries[0].display_name, "Group chat");
    }

    #[test]
    fn malformed_direct_chat_leaves_counterpart_unresolved() {
        let summaries = assemble_summaries(
            vec![chat(1, Some("Inconsistent"), ChatKind::Direct)],
            vec![],
            vec![],
            vec![
                counterpart(1, 2, "Bob", "online"),
                counterpart(1, 3, "Carol", "away"),
            ],
        );

        assert_eq!(summaries[0].other_user_name, None);
        assert_eq!(summaries[0].display_name, "Inconsistent");
    }

    #[test]
    fn chats_without_messages_sort_last() {
        let summaries = assemble_summaries(
            vec![
                chat(1, Some("Silent"), ChatKind::Group),
                chat(2, Some("Old"), ChatKind::Group),
                chat(3, Some("Fresh"), ChatKind::Group),
            ],
            vec![
                latest(2, "yesterday", "2024-01-01T10:00:00+00:00"),
                latest(3, "just now", "2024-01-02T10:00:00+00:00"),
            ],
            vec![],
            vec![],
        );

        let order: Vec<i64> = summaries.iter().map(|summary| summary.id).collect();
        assert_eq!(order, vec![3, 2, 1]);
        assert_eq!(summaries[2].unread_count, 0);
        assert_eq!(summaries[2].last_message, None);
    }

    #[test]
    fn message_less_chats_order_among_themselves_by_id_descending() {
        let summaries = assemble_summaries(
            vec![
                chat(1, Some("a"), ChatKind::Group),
                chat(2, Some("b"), ChatKind::Group),
            ],
            vec![],
            vec![],
            vec![],
        );

        let order: Vec<i64> = summaries.iter().map(|summary| summary.id).collect();
        assert_eq!(order, vec![2, 1]);
    }

    #[test]
    fn unread_counts_default_to_zero() {
        let summaries = assemble_summaries(
            vec![chat(1, None, ChatKind::Direct)],
            vec![latest(1, "hello", "2024-01-01T10:00:00+00:00")],
            vec![],
            vec![counterpart(1, 2, "Bob", "offline")],
        );

        assert_eq!(summaries[0].unread_count, 0);
    }
}
