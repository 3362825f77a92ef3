/// User tools: profile, stats, inventory, spells and equipment
///
/// The profile, stats and inventory tools are different projections of the
/// same /user resource.

use serde::Deserialize;

use crate::api::{data, subtree, ApiError, HabiticaClient};
use crate::i18n::Language;
use crate::tools::{pretty, ToolReply};

/// Equipment slot categories accepted by equip_item
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipType {
    Mount,
    Pet,
    Costume,
    Equipped,
}

impl EquipType {
    pub fn as_str(self) -> &'static str {
        match self {
            EquipType::Mount => "mount",
            EquipType::Pet => "pet",
            EquipType::Costume => "costume",
            EquipType::Equipped => "equipped",
        }
    }
}

/// Parameters for cast_spell
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastSpellParams {
    pub spell_id: String,
    pub target_id: Option<String>,
}

/// Parameters for equip_item
#[derive(Debug, Deserialize)]
pub struct EquipItemParams {
    #[serde(rename = "type")]
    pub equip_type: EquipType,
    pub key: String,
}

/// Fetch the full user profile
pub async fn get_user_profile(client: &HabiticaClient) -> Result<ToolReply, ApiError> {
    let envelope = client.get("/user").await?;
    Ok(ToolReply::text(pretty(data(&envelope)?)?))
}

/// Fetch character statistics (health, experience, mana, gold, level)
pub async fn get_stats(client: &HabiticaClient) -> Result<ToolReply, ApiError> {
    let envelope = client.get("/user").await?;
    Ok(ToolReply::text(pretty(subtree(&envelope, &["data", "stats"])?)?))
}

/// Fetch the full inventory subtree
pub async fn get_inventory(client: &HabiticaClient) -> Result<ToolReply, ApiError> {
    let envelope = client.get("/user").await?;
    Ok(ToolReply::text(pretty(subtree(&envelope, &["data", "items"])?)?))
}

/// Cast a class spell, optionally at a target
pub async fn cast_spell(
    client: &HabiticaClient,
    lang: Language,
    params: CastSpellParams,
) -> Result<ToolReply, ApiError> {
    let path = format!("/user/class/cast/{}", params.spell_id);
    match params.target_id.as_deref() {
        Some(target) => client.post_query(&path, &[("targetId", target)]).await?,
        None => client.post(&path).await?,
    };
    Ok(ToolReply::text(lang.select(
        format!("Successfully cast spell: {}", params.spell_id),
        format!("已成功施放技能：{}", params.spell_id),
    )))
}

/// Equip or unequip gear, a pet, a mount or a costume piece
pub async fn equip_item(
    client: &HabiticaClient,
    lang: Language,
    params: EquipItemParams,
) -> Result<ToolReply, ApiError> {
    client
        .post(&format!(
            "/user/equip/{}/{}",
            params.equip_type.as_str(),
            params.key
        ))
        .await?;
    Ok(ToolReply::text(lang.select(
        format!("Successfully equipped {}: {}", params.equip_type.as_str(), params.key),
        format!("已成功装备 {}：{}", params.equip_type.as_str(), params.key),
    )))
}
