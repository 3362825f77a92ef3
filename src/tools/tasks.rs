/// Task tools: listing, creation, scoring, update and deletion
///
/// These cover the /tasks endpoints. Listing echoes the full response
/// payload; mutations summarize the fields a user cares about.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{data, str_field, ApiError, HabiticaClient};
use crate::i18n::Language;
use crate::tools::{pretty, ToolReply};

/// Task type filter accepted by get_tasks
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskTypeFilter {
    Habits,
    Dailys,
    Todos,
    Rewards,
}

impl TaskTypeFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskTypeFilter::Habits => "habits",
            TaskTypeFilter::Dailys => "dailys",
            TaskTypeFilter::Todos => "todos",
            TaskTypeFilter::Rewards => "rewards",
        }
    }
}

/// Task kind accepted by create_task
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Habit,
    Daily,
    Todo,
    Reward,
}

/// Scoring direction for habits
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Parameters for get_tasks
#[derive(Debug, Default, Deserialize)]
pub struct GetTasksParams {
    #[serde(rename = "type")]
    pub task_type: Option<TaskTypeFilter>,
}

/// Checklist item seeded while creating a task
#[derive(Debug, Deserialize, Serialize)]
pub struct ChecklistSeed {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// Parameters for create_task
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateTaskParams {
    #[serde(rename = "type")]
    pub task_type: TaskKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checklist: Option<Vec<ChecklistSeed>>,
}

/// Parameters for score_task
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTaskParams {
    pub task_id: String,
    #[serde(default)]
    pub direction: Direction,
}

/// Parameters for update_task
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskParams {
    #[serde(skip_serializing)]
    pub task_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Parameters for delete_task
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskParams {
    pub task_id: String,
}

/// Fetch the user's tasks, optionally filtered by type
pub async fn get_tasks(
    client: &HabiticaClient,
    params: GetTasksParams,
) -> Result<ToolReply, ApiError> {
    let envelope = match params.task_type {
        Some(kind) => {
            client
                .get_query("/tasks/user", &[("type", kind.as_str())])
                .await?
        }
        None => client.get("/tasks/user").await?,
    };
    Ok(ToolReply::text(pretty(&envelope)?))
}

/// Create a new task of any kind
pub async fn create_task(
    client: &HabiticaClient,
    lang: Language,
    params: CreateTaskParams,
) -> Result<ToolReply, ApiError> {
    let body = serde_json::to_value(&params)?;
    let envelope = client.post_json("/tasks/user", body).await?;
    let task = data(&envelope)?;
    let text = str_field(task, "text")?;
    let id = str_field(task, "id")?;
    Ok(ToolReply::text(lang.select(
        format!("Successfully created task: {text} (ID: {id})"),
        format!("已成功创建任务：{text}（ID：{id}）"),
    )))
}

/// Score a task, completing it or registering a habit tick
pub async fn score_task(
    client: &HabiticaClient,
    lang: Language,
    params: ScoreTaskParams,
) -> Result<ToolReply, ApiError> {
    let envelope = client
        .post(&format!(
            "/tasks/{}/score/{}",
            params.task_id,
            params.direction.as_str()
        ))
        .await?;
    let result = data(&envelope)?;

    let mut message = lang.select("Task scored!", "任务已计分！").to_string();
    if let Some(exp) = result.get("exp").and_then(Value::as_f64).filter(|v| *v > 0.0) {
        message.push_str(&lang.select(
            format!(" Gained {exp:.1} experience."),
            format!(" 获得 {exp:.1} 点经验。"),
        ));
    }
    if let Some(gp) = result.get("gp").and_then(Value::as_f64).filter(|v| *v > 0.0) {
        message.push_str(&lang.select(
            format!(" Gained {gp:.1} gold."),
            format!(" 获得 {gp:.1} 金币。"),
        ));
    }
    if let Some(lvl) = result.get("lvl").and_then(Value::as_f64).filter(|v| *v > 0.0) {
        message.push_str(&lang.select(
            format!(" Level up to {lvl:.0}!"),
            format!(" 升到 {lvl:.0} 级！"),
        ));
    }
    Ok(ToolReply::text(message))
}

/// Update an existing task's text, notes or completion status
pub async fn update_task(
    client: &HabiticaClient,
    lang: Language,
    params: UpdateTaskParams,
) -> Result<ToolReply, ApiError> {
    let path = format!("/tasks/{}", params.task_id);
    let body = serde_json::to_value(&params)?;
    let envelope = client.put_json(&path, body).await?;
    let task = data(&envelope)?;
    let text = str_field(task, "text")?;
    Ok(ToolReply::text(lang.select(
        format!("Successfully updated task: {text}"),
        format!("已成功更新任务：{text}"),
    )))
}

/// Permanently delete a task
pub async fn delete_task(
    client: &HabiticaClient,
    lang: Language,
    params: DeleteTaskParams,
) -> Result<ToolReply, ApiError> {
    client.delete(&format!("/tasks/{}", params.task_id)).await?;
    Ok(ToolReply::text(lang.select(
        format!("Successfully deleted task (ID: {})", params.task_id),
        format!("已成功删除任务（ID：{}）", params.task_id),
    )))
}
