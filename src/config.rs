/// Runtime configuration resolved from the environment
///
/// Every knob is read once at startup and kept immutable afterwards. The
/// server threads this value through the protocol and tool layers instead of
/// consulting process state again, and the same structure absorbs what used
/// to be separate program variants: which tools are advertised, how much
/// detail error translation carries, and whether credentials are probed
/// before serving.

use std::collections::HashSet;
use thiserror::Error;

use crate::i18n::Language;
use crate::tools::ToolName;

/// Base URL of the public Habitica API
pub const HABITICA_API_BASE: &str = "https://habitica.com/api/v3";

/// Errors that can occur while resolving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Please set HABITICA_USER_ID and HABITICA_API_TOKEN environment variables")]
    MissingCredentials,

    #[error("Unknown tool name '{0}' in HABITICA_TOOLS")]
    UnknownTool(String),

    #[error("Invalid HABITICA_ERROR_DETAIL value '{0}' (expected 'detailed' or 'generic')")]
    InvalidErrorDetail(String),
}

/// How much context error translation includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorDetail {
    /// Map known Habitica error codes to specific, actionable messages
    #[default]
    Detailed,
    /// Collapse every remote failure into one generic message
    Generic,
}

impl ErrorDetail {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_lowercase().as_str() {
            "detailed" => Ok(ErrorDetail::Detailed),
            "generic" => Ok(ErrorDetail::Generic),
            _ => Err(ConfigError::InvalidErrorDetail(value.to_string())),
        }
    }
}

/// The subset of the tool catalog that is advertised and callable
///
/// Catalog entries outside the set are neither listed nor dispatchable;
/// calling one fails the same way as calling a tool that does not exist.
#[derive(Debug, Clone)]
pub struct ToolSet(HashSet<ToolName>);

impl ToolSet {
    /// The default set: task, tag and checklist management
    pub fn standard() -> Self {
        use ToolName::*;
        Self(HashSet::from([
            GetTasks,
            CreateTask,
            ScoreTask,
            UpdateTask,
            DeleteTask,
            GetTags,
            CreateTag,
            AddChecklistItem,
            UpdateChecklistItem,
            DeleteChecklistItem,
            GetTaskChecklist,
            ScoreChecklistItem,
        ]))
    }

    /// Every catalog entry
    pub fn all() -> Self {
        Self(ToolName::ALL.iter().copied().collect())
    }

    /// Whether a tool is advertised and callable
    pub fn enabled(&self, tool: ToolName) -> bool {
        self.0.contains(&tool)
    }

    /// Parse a comma-separated list of tool names
    pub fn parse(list: &str) -> Result<Self, ConfigError> {
        let mut set = HashSet::new();
        for name in list.split(',') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let tool = name
                .parse::<ToolName>()
                .map_err(|_| ConfigError::UnknownTool(name.to_string()))?;
            set.insert(tool);
        }
        Ok(Self(set))
    }
}

impl Default for ToolSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromIterator<ToolName> for ToolSet {
    fn from_iter<I: IntoIterator<Item = ToolName>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Immutable server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Habitica account id, sent as the x-api-user header
    pub user_id: String,
    /// Habitica API token, sent as the x-api-key header
    pub api_token: String,
    /// Base URL requests are issued against
    pub api_base: String,
    /// Language for descriptions, summaries and errors
    pub language: Language,
    /// Error translation verbosity
    pub error_detail: ErrorDetail,
    /// Tools advertised over tools/list and accepted by tools/call
    pub tools: ToolSet,
    /// Verify credentials with one GET /user before serving
    pub startup_probe: bool,
}

impl Config {
    /// Build a configuration with the given credentials and defaults everywhere else
    pub fn new(user_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            api_token: api_token.into(),
            api_base: HABITICA_API_BASE.to_string(),
            language: Language::default(),
            error_detail: ErrorDetail::default(),
            tools: ToolSet::standard(),
            startup_probe: false,
        }
    }

    /// Resolve configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup
    ///
    /// Split out from `from_env` so tests can supply variables without
    /// mutating the process environment.
    pub fn resolve(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let user_id = get("HABITICA_USER_ID").filter(|v| !v.is_empty());
        let api_token = get("HABITICA_API_TOKEN").filter(|v| !v.is_empty());
        let (user_id, api_token) = match (user_id, api_token) {
            (Some(user_id), Some(api_token)) => (user_id, api_token),
            _ => return Err(ConfigError::MissingCredentials),
        };

        let language = get("MCP_LANG")
            .or_else(|| get("LANG"))
            .map(|tag| Language::from_tag(&tag))
            .unwrap_or_default();

        let error_detail = match get("HABITICA_ERROR_DETAIL") {
            Some(value) => ErrorDetail::parse(&value)?,
            None => ErrorDetail::default(),
        };

        let tools = match get("HABITICA_TOOLS") {
            Some(list) => ToolSet::parse(&list)?,
            None => ToolSet::standard(),
        };

        let startup_probe = get("HABITICA_STARTUP_PROBE")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            user_id,
            api_token,
            api_base: HABITICA_API_BASE.to_string(),
            language,
            error_detail,
            tools,
            startup_probe,
        })
    }
}
