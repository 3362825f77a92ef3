/// Checklist tools: sub-items nested under a task
///
/// Habitica returns the whole parent task after every checklist mutation,
/// so handlers dig the affected item back out of the task's checklist
/// array when they can.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::{data, str_field, ApiError, HabiticaClient};
use crate::i18n::Language;
use crate::tools::ToolReply;

/// Parameters for add_checklist_item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChecklistItemParams {
    pub task_id: String,
    pub text: String,
}

/// Parameters for update_checklist_item
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChecklistItemParams {
    #[serde(skip_serializing)]
    pub task_id: String,
    #[serde(skip_serializing)]
    pub item_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Parameters for delete_checklist_item and score_checklist_item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItemRef {
    pub task_id: String,
    pub item_id: String,
}

/// Parameters for get_task_checklist
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTaskChecklistParams {
    pub task_id: String,
}

/// Find a checklist entry inside a task payload by a field value
fn find_item<'a>(task: &'a Value, key: &str, wanted: &str) -> Option<&'a Value> {
    task.get("checklist")
        .and_then(Value::as_array)
        .and_then(|items| {
            items
                .iter()
                .rev()
                .find(|item| item.get(key).and_then(Value::as_str) == Some(wanted))
        })
}

/// Add a sub-task to an existing task
pub async fn add_checklist_item(
    client: &HabiticaClient,
    lang: Language,
    params: AddChecklistItemParams,
) -> Result<ToolReply, ApiError> {
    let envelope = client
        .post_json(
            &format!("/tasks/{}/checklist", params.task_id),
            json!({ "text": params.text }),
        )
        .await?;
    let task = data(&envelope)?;

    // The response carries the whole task; report the id the new item got.
    let message = match find_item(task, "text", &params.text) {
        Some(item) => {
            let id = str_field(item, "id")?;
            lang.select(
                format!("Successfully added checklist item: {} (ID: {})", params.text, id),
                format!("已成功添加清单项：{}（ID：{}）", params.text, id),
            )
        }
        None => lang.select(
            format!("Successfully added checklist item: {}", params.text),
            format!("已成功添加清单项：{}", params.text),
        ),
    };
    Ok(ToolReply::text(message))
}

/// Change a checklist item's text or completion status
pub async fn update_checklist_item(
    client: &HabiticaClient,
    lang: Language,
    params: UpdateChecklistItemParams,
) -> Result<ToolReply, ApiError> {
    let path = format!("/tasks/{}/checklist/{}", params.task_id, params.item_id);
    let body = serde_json::to_value(&params)?;
    client.put_json(&path, body).await?;

    let label = params.text.as_deref().unwrap_or(&params.item_id);
    Ok(ToolReply::text(lang.select(
        format!("Successfully updated checklist item: {label}"),
        format!("已成功更新清单项：{label}"),
    )))
}

/// Permanently remove a checklist item from its task
pub async fn delete_checklist_item(
    client: &HabiticaClient,
    lang: Language,
    params: ChecklistItemRef,
) -> Result<ToolReply, ApiError> {
    client
        .delete(&format!(
            "/tasks/{}/checklist/{}",
            params.task_id, params.item_id
        ))
        .await?;
    Ok(ToolReply::text(lang.select(
        format!("Successfully deleted checklist item (ID: {})", params.item_id),
        format!("已成功删除清单项（ID：{}）", params.item_id),
    )))
}

/// List a task's checklist items with their completion state
pub async fn get_task_checklist(
    client: &HabiticaClient,
    lang: Language,
    params: GetTaskChecklistParams,
) -> Result<ToolReply, ApiError> {
    let envelope = client.get(&format!("/tasks/{}", params.task_id)).await?;
    let task = data(&envelope)?;
    let text = str_field(task, "text")?;
    let empty = Vec::new();
    let checklist = task
        .get("checklist")
        .and_then(Value::as_array)
        .unwrap_or(&empty);

    let header = lang.select(
        format!("Task: {text}\nChecklist items ({}):", checklist.len()),
        format!("任务：{text}\n清单项（{}）：", checklist.len()),
    );

    let listing = if checklist.is_empty() {
        lang.select("No checklist items found", "未找到清单项").to_string()
    } else {
        checklist
            .iter()
            .map(|item| {
                let done = item
                    .get("completed")
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                let marker = if done { "✓" } else { "○" };
                let text = item.get("text").and_then(Value::as_str).unwrap_or("");
                let id = item.get("id").and_then(Value::as_str).unwrap_or("");
                format!("{marker} {text} (ID: {id})")
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    Ok(ToolReply::texts(vec![header, listing]))
}

/// Toggle a checklist item between complete and incomplete
pub async fn score_checklist_item(
    client: &HabiticaClient,
    lang: Language,
    params: ChecklistItemRef,
) -> Result<ToolReply, ApiError> {
    let envelope = client
        .post(&format!(
            "/tasks/{}/checklist/{}/score",
            params.task_id, params.item_id
        ))
        .await?;
    let task = data(&envelope)?;

    let message = match find_item(task, "id", &params.item_id) {
        Some(item) => {
            let text = str_field(item, "text")?;
            let completed = item
                .get("completed")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            lang.select(
                format!("Successfully scored checklist item: {text} (completed: {completed})"),
                format!("已成功切换清单项：{text}（已完成：{completed}）"),
            )
        }
        None => lang.select(
            format!("Successfully scored checklist item (ID: {})", params.item_id),
            format!("已成功切换清单项（ID：{}）", params.item_id),
        ),
    };
    Ok(ToolReply::text(message))
}
