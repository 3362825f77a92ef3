/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the server loop that:
/// 1. Reads JSON-RPC requests from stdin, one per line
/// 2. Routes tool calls to the matching Habitica handler
/// 3. Sends JSON-RPC responses to stdout
///
/// Every tool failure is classified exactly once here, at the dispatch
/// boundary, into the protocol's error representation.

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::api::ApiError;
use crate::config::ErrorDetail;
use crate::i18n::Language;
use crate::mcp::protocol::*;
use crate::tools::{self, ToolName, ToolReply};
use crate::{HabiticaServer, ServerError};

/// MCP server handling JSON-RPC over stdin/stdout
pub struct McpServer {
    /// The underlying Habitica adapter
    habitica: HabiticaServer,
}

/// Failure raised while executing one tool call
enum CallError {
    /// Arguments did not match the tool's input shape
    Params(serde_json::Error),
    /// The remote call or response handling failed
    Api(ApiError),
}

impl From<ApiError> for CallError {
    fn from(err: ApiError) -> Self {
        CallError::Api(err)
    }
}

/// Decode tool arguments into a typed parameter struct
fn parse_args<T: serde::de::DeserializeOwned>(args: Value) -> Result<T, CallError> {
    serde_json::from_value(args).map_err(CallError::Params)
}

impl McpServer {
    /// Create a new MCP server around a Habitica adapter
    pub fn new(habitica: HabiticaServer) -> Self {
        Self { habitica }
    }

    /// Run the MCP server, handling JSON-RPC over stdin/stdout
    pub async fn run(&mut self) -> Result<(), ServerError> {
        info!("Starting MCP server, waiting for JSON-RPC requests...");

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut stdout = tokio::io::stdout();

        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("MCP server shutting down (stdin closed)");
                    break;
                }
                Ok(_) => {
                    if let Some(response) = self.process_line(&line).await {
                        let response_str = serde_json::to_string(&response)?;

                        stdout.write_all(response_str.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    async fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Processing request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {e}"),
                    None,
                ));
            }
        };

        self.handle_request(request).await
    }

    /// Handle a JSON-RPC request
    ///
    /// Returns None for notifications, which must not be answered.
    pub async fn handle_request(&mut self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let JsonRpcRequest {
            id, method, params, ..
        } = request;

        let outcome = match method.as_str() {
            "initialize" => self.handle_initialize(),
            "initialized" | "notifications/initialized" => return None,
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tools_call(params).await,
            other => Err(JsonRpcError {
                code: error_codes::METHOD_NOT_FOUND,
                message: format!("Method '{other}' not found"),
                data: None,
            }),
        };

        // Errors for notifications are dropped along with their responses.
        let id = id?;
        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(err) => JsonRpcResponse::failure(id, err),
        })
    }

    /// Handle MCP initialization
    fn handle_initialize(&self) -> Result<Value, JsonRpcError> {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: "habitica-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        serde_json::to_value(result).map_err(internal_error)
    }

    /// Handle tools/list: the enabled subset of the catalog, in catalog order
    fn handle_tools_list(&self) -> Result<Value, JsonRpcError> {
        let config = self.habitica.config();
        let tools: Vec<ToolDefinition> = ToolName::ALL
            .iter()
            .copied()
            .filter(|tool| config.tools.enabled(*tool))
            .map(|tool| tools::definition(tool, config.language))
            .collect();

        serde_json::to_value(json!({ "tools": tools })).map_err(internal_error)
    }

    /// Handle tools/call: enablement check, dispatch, error classification
    async fn handle_tools_call(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let config = self.habitica.config();
        let lang = config.language;

        let params: ToolCallParams = match params {
            Some(params) => serde_json::from_value(params).map_err(|e| JsonRpcError {
                code: error_codes::INVALID_PARAMS,
                message: format!("Invalid parameters: {e}"),
                data: None,
            })?,
            None => {
                return Err(JsonRpcError {
                    code: error_codes::INVALID_PARAMS,
                    message: "Missing parameters".to_string(),
                    data: None,
                })
            }
        };

        let tool: ToolName = params.name.parse().map_err(|_| JsonRpcError {
            code: error_codes::METHOD_NOT_FOUND,
            message: lang.select(
                format!("Unknown tool: {}", params.name),
                format!("未知工具：{}", params.name),
            ),
            data: None,
        })?;

        if !config.tools.enabled(tool) {
            return Err(JsonRpcError {
                code: error_codes::METHOD_NOT_FOUND,
                message: lang.select(
                    format!("Tool '{tool}' is disabled"),
                    format!("工具“{tool}”已被禁用"),
                ),
                data: None,
            });
        }

        let args = Value::Object(params.arguments);
        match self.dispatch(tool, args.clone()).await {
            Ok(reply) => serde_json::to_value(ToolCallResult::from(reply)).map_err(internal_error),
            Err(err) => Err(classify(tool, &args, err, lang, config.error_detail)),
        }
    }

    /// Forward a call to the handler bound to the tool
    ///
    /// The match is exhaustive over `ToolName`, so every catalog entry is
    /// guaranteed a handler at compile time.
    async fn dispatch(&self, tool: ToolName, args: Value) -> Result<ToolReply, CallError> {
        let client = self.habitica.client();
        let lang = self.habitica.config().language;

        let reply = match tool {
            ToolName::GetUserProfile => tools::user::get_user_profile(client).await?,
            ToolName::GetTasks => tools::tasks::get_tasks(client, parse_args(args)?).await?,
            ToolName::CreateTask => {
                tools::tasks::create_task(client, lang, parse_args(args)?).await?
            }
            ToolName::ScoreTask => tools::tasks::score_task(client, lang, parse_args(args)?).await?,
            ToolName::UpdateTask => {
                tools::tasks::update_task(client, lang, parse_args(args)?).await?
            }
            ToolName::DeleteTask => {
                tools::tasks::delete_task(client, lang, parse_args(args)?).await?
            }
            ToolName::GetStats => tools::user::get_stats(client).await?,
            ToolName::BuyReward => tools::shop::buy_reward(client, lang, parse_args(args)?).await?,
            ToolName::GetInventory => tools::user::get_inventory(client).await?,
            ToolName::CastSpell => tools::user::cast_spell(client, lang, parse_args(args)?).await?,
            ToolName::GetTags => tools::tags::get_tags(client).await?,
            ToolName::CreateTag => tools::tags::create_tag(client, lang, parse_args(args)?).await?,
            ToolName::GetPets => tools::pets::get_pets(client).await?,
            ToolName::FeedPet => tools::pets::feed_pet(client, lang, parse_args(args)?).await?,
            ToolName::HatchPet => tools::pets::hatch_pet(client, lang, parse_args(args)?).await?,
            ToolName::GetMounts => tools::pets::get_mounts(client).await?,
            ToolName::EquipItem => tools::user::equip_item(client, lang, parse_args(args)?).await?,
            ToolName::GetNotifications => tools::notifications::get_notifications(client).await?,
            ToolName::ReadNotification => {
                tools::notifications::read_notification(client, lang, parse_args(args)?).await?
            }
            ToolName::GetShop => tools::shop::get_shop(client, parse_args(args)?).await?,
            ToolName::BuyItem => tools::shop::buy_item(client, lang, parse_args(args)?).await?,
            ToolName::AddChecklistItem => {
                tools::checklist::add_checklist_item(client, lang, parse_args(args)?).await?
            }
            ToolName::UpdateChecklistItem => {
                tools::checklist::update_checklist_item(client, lang, parse_args(args)?).await?
            }
            ToolName::DeleteChecklistItem => {
                tools::checklist::delete_checklist_item(client, lang, parse_args(args)?).await?
            }
            ToolName::GetTaskChecklist => {
                tools::checklist::get_task_checklist(client, lang, parse_args(args)?).await?
            }
            ToolName::ScoreChecklistItem => {
                tools::checklist::score_checklist_item(client, lang, parse_args(args)?).await?
            }
        };

        Ok(reply)
    }
}

/// Wrap a serialization failure as an internal protocol error
fn internal_error(e: serde_json::Error) -> JsonRpcError {
    JsonRpcError {
        code: error_codes::INTERNAL_ERROR,
        message: format!("Failed to serialize response: {e}"),
        data: None,
    }
}

/// Translate a tool-call failure into its JSON-RPC representation
///
/// This is the single place failures are classified; handlers never shape
/// their own protocol errors.
fn classify(
    tool: ToolName,
    args: &Value,
    err: CallError,
    lang: Language,
    detail: ErrorDetail,
) -> JsonRpcError {
    match err {
        CallError::Params(e) => JsonRpcError {
            code: error_codes::INVALID_PARAMS,
            message: lang.select(
                format!("Invalid arguments for {tool}: {e}"),
                format!("{tool} 的参数无效：{e}"),
            ),
            data: None,
        },
        CallError::Api(err) => classify_api_error(tool, args, err, lang, detail),
    }
}

/// Map an `ApiError` onto the protocol error taxonomy
fn classify_api_error(
    tool: ToolName,
    args: &Value,
    err: ApiError,
    lang: Language,
    detail: ErrorDetail,
) -> JsonRpcError {
    let rpc = |code: i32, message: String| JsonRpcError {
        code,
        message,
        data: None,
    };

    match err {
        ApiError::Api {
            status,
            code,
            message,
        } => {
            if detail == ErrorDetail::Generic {
                return rpc(
                    error_codes::INTERNAL_ERROR,
                    lang.select(
                        format!("Habitica API error: {message}"),
                        format!("Habitica API 错误：{message}"),
                    ),
                );
            }

            // Known vendor error codes first, then status-class fallbacks.
            match code.as_deref() {
                Some("TaskNotFound") => {
                    let task_id = args
                        .get("taskId")
                        .and_then(Value::as_str)
                        .unwrap_or("unknown");
                    rpc(
                        error_codes::INVALID_PARAMS,
                        lang.select(
                            format!(
                                "Task '{task_id}' was not found. Use get_tasks to list your tasks and their ids"
                            ),
                            format!("找不到任务“{task_id}”。请先使用 get_tasks 查看任务及其 ID"),
                        ),
                    )
                }
                Some("messageNotEnoughGold") => rpc(
                    error_codes::INVALID_REQUEST,
                    lang.select(
                        "Not enough gold for this purchase. Complete tasks to earn more gold"
                            .to_string(),
                        "金币不足，无法完成本次购买。完成任务可以获得更多金币".to_string(),
                    ),
                ),
                Some("messageNotEnoughMana") => rpc(
                    error_codes::INVALID_REQUEST,
                    lang.select(
                        "Not enough mana to cast this spell".to_string(),
                        "法力不足，无法施放该技能".to_string(),
                    ),
                ),
                Some("messageAlreadyOwn") => rpc(
                    error_codes::INVALID_REQUEST,
                    lang.select(
                        "You already own this item".to_string(),
                        "你已经拥有该物品".to_string(),
                    ),
                ),
                Some("petNotOwned") | Some("messageInvalidPetName") => {
                    let pet = args.get("pet").and_then(Value::as_str).unwrap_or("unknown");
                    rpc(
                        error_codes::INVALID_PARAMS,
                        lang.select(
                            format!(
                                "Pet '{pet}' is not in your stable. Use get_pets to list the pets you own"
                            ),
                            format!("你没有宠物“{pet}”。请使用 get_pets 查看已拥有的宠物"),
                        ),
                    )
                }
                Some("spellNotOwned") => rpc(
                    error_codes::INVALID_PARAMS,
                    lang.select(
                        "Your class has not learned this spell".to_string(),
                        "你的职业尚未学会该技能".to_string(),
                    ),
                ),
                _ => match status {
                    401 | 403 => rpc(
                        error_codes::INVALID_REQUEST,
                        lang.select(
                            format!(
                                "Habitica rejected the request: {message}. Check HABITICA_USER_ID and HABITICA_API_TOKEN"
                            ),
                            format!(
                                "Habitica 拒绝了请求：{message}。请检查 HABITICA_USER_ID 和 HABITICA_API_TOKEN"
                            ),
                        ),
                    ),
                    404 => rpc(
                        error_codes::INVALID_PARAMS,
                        lang.select(
                            format!("Habitica resource not found while calling {tool}: {message}"),
                            format!("调用 {tool} 时未找到对应的 Habitica 资源：{message}"),
                        ),
                    ),
                    400..=499 => rpc(
                        error_codes::INVALID_REQUEST,
                        lang.select(
                            format!("Habitica rejected the request: {message}"),
                            format!("Habitica 拒绝了请求：{message}"),
                        ),
                    ),
                    500..=599 => rpc(
                        error_codes::INTERNAL_ERROR,
                        lang.select(
                            format!(
                                "Habitica is having trouble (HTTP {status}): {message}. Try again later"
                            ),
                            format!("Habitica 服务异常（HTTP {status}）：{message}。请稍后再试"),
                        ),
                    ),
                    _ => rpc(
                        error_codes::INTERNAL_ERROR,
                        lang.select(
                            format!("Habitica API error (HTTP {status}): {message}"),
                            format!("Habitica API 错误（HTTP {status}）：{message}"),
                        ),
                    ),
                },
            }
        }
        ApiError::Network(e) => {
            let message = if e.is_timeout() {
                lang.select(
                    format!("Timed out waiting for Habitica while calling {tool}"),
                    format!("调用 {tool} 时等待 Habitica 超时"),
                )
            } else if e.is_connect() {
                lang.select(
                    format!("Could not connect to Habitica while calling {tool}: {e}"),
                    format!("调用 {tool} 时无法连接 Habitica：{e}"),
                )
            } else {
                lang.select(
                    format!("Network error while calling {tool}: {e}"),
                    format!("调用 {tool} 时发生网络错误：{e}"),
                )
            };
            rpc(error_codes::INTERNAL_ERROR, message)
        }
        ApiError::Json(e) => rpc(
            error_codes::INTERNAL_ERROR,
            lang.select(
                format!("Failed to parse the Habitica response for {tool}: {e}"),
                format!("解析 {tool} 的 Habitica 响应失败：{e}"),
            ),
        ),
        ApiError::Shape(shape) => rpc(
            error_codes::INTERNAL_ERROR,
            lang.select(
                format!("Unexpected Habitica response for {tool}: {shape}"),
                format!("{tool} 返回了意外的 Habitica 响应：{shape}"),
            ),
        ),
        other => rpc(
            error_codes::INTERNAL_ERROR,
            lang.select(
                format!("{tool} failed: {other}"),
                format!("{tool} 执行失败：{other}"),
            ),
        ),
    }
}
