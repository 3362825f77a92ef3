/// MCP tools mirroring the Habitica API surface
///
/// Every tool is one remote HTTP round trip plus response formatting. The
/// closed `ToolName` enum keys the catalog, the enablement set and the
/// dispatch table, so the three cannot silently drift apart.

pub mod catalog;

// Handlers grouped by API area
pub mod checklist;
pub mod notifications;
pub mod pets;
pub mod shop;
pub mod tags;
pub mod tasks;
pub mod user;

// Re-export catalog construction for the protocol layer
pub use catalog::{catalog, definition};

use std::fmt;
use std::str::FromStr;

/// Every tool this server knows, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    GetUserProfile,
    GetTasks,
    CreateTask,
    ScoreTask,
    UpdateTask,
    DeleteTask,
    GetStats,
    BuyReward,
    GetInventory,
    CastSpell,
    GetTags,
    CreateTag,
    GetPets,
    FeedPet,
    HatchPet,
    GetMounts,
    EquipItem,
    GetNotifications,
    ReadNotification,
    GetShop,
    BuyItem,
    AddChecklistItem,
    UpdateChecklistItem,
    DeleteChecklistItem,
    GetTaskChecklist,
    ScoreChecklistItem,
}

impl ToolName {
    /// All tools in the order the catalog advertises them
    pub const ALL: [ToolName; 26] = [
        ToolName::GetUserProfile,
        ToolName::GetTasks,
        ToolName::CreateTask,
        ToolName::ScoreTask,
        ToolName::UpdateTask,
        ToolName::DeleteTask,
        ToolName::GetStats,
        ToolName::BuyReward,
        ToolName::GetInventory,
        ToolName::CastSpell,
        ToolName::GetTags,
        ToolName::CreateTag,
        ToolName::GetPets,
        ToolName::FeedPet,
        ToolName::HatchPet,
        ToolName::GetMounts,
        ToolName::EquipItem,
        ToolName::GetNotifications,
        ToolName::ReadNotification,
        ToolName::GetShop,
        ToolName::BuyItem,
        ToolName::AddChecklistItem,
        ToolName::UpdateChecklistItem,
        ToolName::DeleteChecklistItem,
        ToolName::GetTaskChecklist,
        ToolName::ScoreChecklistItem,
    ];

    /// Wire name of the tool
    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::GetUserProfile => "get_user_profile",
            ToolName::GetTasks => "get_tasks",
            ToolName::CreateTask => "create_task",
            ToolName::ScoreTask => "score_task",
            ToolName::UpdateTask => "update_task",
            ToolName::DeleteTask => "delete_task",
            ToolName::GetStats => "get_stats",
            ToolName::BuyReward => "buy_reward",
            ToolName::GetInventory => "get_inventory",
            ToolName::CastSpell => "cast_spell",
            ToolName::GetTags => "get_tags",
            ToolName::CreateTag => "create_tag",
            ToolName::GetPets => "get_pets",
            ToolName::FeedPet => "feed_pet",
            ToolName::HatchPet => "hatch_pet",
            ToolName::GetMounts => "get_mounts",
            ToolName::EquipItem => "equip_item",
            ToolName::GetNotifications => "get_notifications",
            ToolName::ReadNotification => "read_notification",
            ToolName::GetShop => "get_shop",
            ToolName::BuyItem => "buy_item",
            ToolName::AddChecklistItem => "add_checklist_item",
            ToolName::UpdateChecklistItem => "update_checklist_item",
            ToolName::DeleteChecklistItem => "delete_checklist_item",
            ToolName::GetTaskChecklist => "get_task_checklist",
            ToolName::ScoreChecklistItem => "score_checklist_item",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for tool names that are not in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTool(pub String);

impl fmt::Display for UnknownTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tool '{}'", self.0)
    }
}

impl std::error::Error for UnknownTool {}

impl FromStr for ToolName {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .iter()
            .copied()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

/// Text blocks a tool hands back to the protocol layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReply {
    pub texts: Vec<String>,
}

impl ToolReply {
    /// Reply with a single text block
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            texts: vec![text.into()],
        }
    }

    /// Reply with multiple text blocks
    pub fn texts(texts: Vec<String>) -> Self {
        Self { texts }
    }
}

/// Pretty-print a JSON payload for a listing reply
pub(crate) fn pretty(value: &serde_json::Value) -> Result<String, crate::api::ApiError> {
    Ok(serde_json::to_string_pretty(value)?)
}
