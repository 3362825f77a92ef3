/// Language selection for user-facing text
///
/// Tool descriptions, result summaries and error messages exist as
/// English/Chinese pairs. The language is resolved once at startup from the
/// environment and then carried as a plain value inside the configuration,
/// so nothing ever consults process state at call time.

/// Supported message languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Resolve a language from an environment tag like "en_US" or "zh-CN"
    ///
    /// Any tag whose lowercase form starts with "zh" selects Chinese;
    /// everything else, including an empty tag, selects English.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_lowercase().starts_with("zh") {
            Language::Chinese
        } else {
            Language::English
        }
    }

    /// Pick between the English and Chinese variant of a message
    pub fn select<T>(self, en: T, zh: T) -> T {
        match self {
            Language::English => en,
            Language::Chinese => zh,
        }
    }
}
