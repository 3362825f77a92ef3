/// Shop tools: browsing shops and purchasing items or custom rewards

use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::{data, ApiError, HabiticaClient};
use crate::i18n::Language;
use crate::tools::{pretty, ToolReply};

/// Shop categories accepted by get_shop
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub enum ShopType {
    #[default]
    #[serde(rename = "market")]
    Market,
    #[serde(rename = "questShop")]
    QuestShop,
    #[serde(rename = "timeTravelersShop")]
    TimeTravelersShop,
    #[serde(rename = "seasonalShop")]
    SeasonalShop,
}

impl ShopType {
    pub fn as_str(self) -> &'static str {
        match self {
            ShopType::Market => "market",
            ShopType::QuestShop => "questShop",
            ShopType::TimeTravelersShop => "timeTravelersShop",
            ShopType::SeasonalShop => "seasonalShop",
        }
    }
}

/// Parameters for get_shop
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetShopParams {
    #[serde(default)]
    pub shop_type: ShopType,
}

/// Parameters for buy_reward
#[derive(Debug, Deserialize)]
pub struct BuyRewardParams {
    pub key: String,
}

/// Parameters for buy_item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyItemParams {
    pub item_key: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Remaining gold after a purchase, when the response reports it
fn remaining_gold(payload: &Value) -> Option<f64> {
    payload.get("gp").and_then(Value::as_f64)
}

/// Browse one of the Habitica shops
pub async fn get_shop(
    client: &HabiticaClient,
    params: GetShopParams,
) -> Result<ToolReply, ApiError> {
    let envelope = client
        .get(&format!("/shops/{}", params.shop_type.as_str()))
        .await?;
    Ok(ToolReply::text(pretty(&envelope)?))
}

/// Buy a custom reward with gold
pub async fn buy_reward(
    client: &HabiticaClient,
    lang: Language,
    params: BuyRewardParams,
) -> Result<ToolReply, ApiError> {
    let envelope = client
        .post(&format!("/user/buy/{}", params.key))
        .await?;
    let result = data(&envelope)?;

    let message = match remaining_gold(result) {
        Some(gp) => lang.select(
            format!("Successfully bought reward! Remaining gold: {gp:.1}"),
            format!("已成功购买奖励！剩余金币：{gp:.1}"),
        ),
        None => lang.select(
            "Successfully bought reward!".to_string(),
            "已成功购买奖励！".to_string(),
        ),
    };
    Ok(ToolReply::text(message))
}

/// Buy an item from a shop
pub async fn buy_item(
    client: &HabiticaClient,
    lang: Language,
    params: BuyItemParams,
) -> Result<ToolReply, ApiError> {
    let envelope = client
        .post_json(
            &format!("/user/buy/{}", params.item_key),
            json!({ "quantity": params.quantity }),
        )
        .await?;
    let result = data(&envelope)?;

    let message = match remaining_gold(result) {
        Some(gp) => lang.select(
            format!(
                "Successfully bought {} x{}! Remaining gold: {gp:.1}",
                params.item_key, params.quantity
            ),
            format!(
                "已成功购买 {} x{}！剩余金币：{gp:.1}",
                params.item_key, params.quantity
            ),
        ),
        None => lang.select(
            format!("Successfully bought {} x{}!", params.item_key, params.quantity),
            format!("已成功购买 {} x{}！", params.item_key, params.quantity),
        ),
    };
    Ok(ToolReply::text(message))
}
