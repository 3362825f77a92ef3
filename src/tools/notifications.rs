/// Notification tools: listing pending notifications and marking them read

use serde::Deserialize;

use crate::api::{ApiError, HabiticaClient};
use crate::i18n::Language;
use crate::tools::{pretty, ToolReply};

/// Parameters for read_notification
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadNotificationParams {
    pub notification_id: String,
}

/// Fetch all pending notifications
pub async fn get_notifications(client: &HabiticaClient) -> Result<ToolReply, ApiError> {
    let envelope = client.get("/notifications").await?;
    Ok(ToolReply::text(pretty(&envelope)?))
}

/// Mark one notification as read
pub async fn read_notification(
    client: &HabiticaClient,
    lang: Language,
    params: ReadNotificationParams,
) -> Result<ToolReply, ApiError> {
    client
        .post(&format!("/notifications/{}/read", params.notification_id))
        .await?;
    Ok(ToolReply::text(lang.select(
        format!(
            "Successfully marked notification as read (ID: {})",
            params.notification_id
        ),
        format!("已成功将通知标记为已读（ID：{}）", params.notification_id),
    )))
}
