/// Pet and mount tools: listing, feeding and hatching
///
/// Pets and mounts live inside the /user inventory subtree; feeding and
/// hatching are dedicated endpoints keyed by item names.

use serde::Deserialize;
use serde_json::Value;

use crate::api::{subtree, ApiError, HabiticaClient};
use crate::i18n::Language;
use crate::tools::{pretty, ToolReply};

/// Parameters for feed_pet
#[derive(Debug, Deserialize)]
pub struct FeedPetParams {
    pub pet: String,
    pub food: String,
}

/// Parameters for hatch_pet
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HatchPetParams {
    pub egg: String,
    pub hatching_potion: String,
}

/// Fetch all owned pets with their feed status
pub async fn get_pets(client: &HabiticaClient) -> Result<ToolReply, ApiError> {
    let envelope = client.get("/user").await?;
    Ok(ToolReply::text(pretty(subtree(
        &envelope,
        &["data", "items", "pets"],
    )?)?))
}

/// Feed one food item to a pet
pub async fn feed_pet(
    client: &HabiticaClient,
    lang: Language,
    params: FeedPetParams,
) -> Result<ToolReply, ApiError> {
    let envelope = client
        .post(&format!("/user/feed/{}/{}", params.pet, params.food))
        .await?;

    let mut message = lang.select(
        format!("Successfully fed pet {}!", params.pet),
        format!("已成功喂食宠物 {}！", params.pet),
    );
    // Habitica puts the growth summary in the envelope's message field.
    if let Some(note) = envelope.get("message").and_then(Value::as_str) {
        message.push(' ');
        message.push_str(note);
    }
    Ok(ToolReply::text(message))
}

/// Hatch a pet from an egg and a hatching potion
pub async fn hatch_pet(
    client: &HabiticaClient,
    lang: Language,
    params: HatchPetParams,
) -> Result<ToolReply, ApiError> {
    client
        .post(&format!(
            "/user/hatch/{}/{}",
            params.egg, params.hatching_potion
        ))
        .await?;
    Ok(ToolReply::text(lang.select(
        format!(
            "Successfully hatched pet! Got {}-{}",
            params.egg, params.hatching_potion
        ),
        format!(
            "已成功孵化宠物！获得 {}-{}",
            params.egg, params.hatching_potion
        ),
    )))
}

/// Fetch all owned mounts
pub async fn get_mounts(client: &HabiticaClient) -> Result<ToolReply, ApiError> {
    let envelope = client.get("/user").await?;
    Ok(ToolReply::text(pretty(subtree(
        &envelope,
        &["data", "items", "mounts"],
    )?)?))
}
