use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub id: EntityId,
    pub caller: String,
    pub transcript_preview: String,
    /// Follow-up actions, rendered as tags.
    pub action_items: Vec<String>,
}
