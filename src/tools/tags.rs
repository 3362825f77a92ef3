/// Tag tools: listing and creating task tags

use serde::Deserialize;
use serde_json::json;

use crate::api::{data, str_field, ApiError, HabiticaClient};
use crate::i18n::Language;
use crate::tools::{pretty, ToolReply};

/// Parameters for create_tag
#[derive(Debug, Deserialize)]
pub struct CreateTagParams {
    pub name: String,
}

/// Fetch all of the user's tags
pub async fn get_tags(client: &HabiticaClient) -> Result<ToolReply, ApiError> {
    let envelope = client.get("/tags").await?;
    Ok(ToolReply::text(pretty(&envelope)?))
}

/// Create a new tag
pub async fn create_tag(
    client: &HabiticaClient,
    lang: Language,
    params: CreateTagParams,
) -> Result<ToolReply, ApiError> {
    let envelope = client
        .post_json("/tags", json!({ "name": params.name }))
        .await?;
    let tag = data(&envelope)?;
    let name = str_field(tag, "name")?;
    let id = str_field(tag, "id")?;
    Ok(ToolReply::text(lang.select(
        format!("Successfully created tag: {name} (ID: {id})"),
        format!("已成功创建标签：{name}（ID：{id}）"),
    )))
}
