//! User-facing message catalogs.
//!
//! There is one conversion pipeline; what differs between the language
//! variants is only the text it prints. A [`Language`] is the selector token
//! accepted on the command line, a [`Catalog`] holds the translated templates
//! for one language, and [`Messages`] renders them.

mod catalogs;

use std::fmt;
use yt2gif_av::TemplateContext;

/// Selector tokens accepted by `--lang`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Language {
    #[default]
    English,
    Italian,
    French,
    German,
    Spanish,
    Portuguese,
    Russian,
    Chinese,
    Japanese,
}

impl Language {
    /// Every supported token, in the order they are listed to users.
    pub const ALL: [Language; 9] = [
        Language::English,
        Language::Italian,
        Language::French,
        Language::German,
        Language::Spanish,
        Language::Portuguese,
        Language::Russian,
        Language::Chinese,
        Language::Japanese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Italian => "italian",
            Language::French => "french",
            Language::German => "german",
            Language::Spanish => "spanish",
            Language::Portuguese => "portuguese",
            Language::Russian => "russian",
            Language::Chinese => "chinese",
            Language::Japanese => "japanese",
        }
    }

    /// The translated catalog, if one ships for this language.
    pub fn catalog(&self) -> Option<&'static Catalog> {
        catalogs::ALL.iter().find(|c| c.language == *self).copied()
    }

    /// Tokens that have a catalog.
    pub fn available() -> Vec<Language> {
        Self::ALL
            .into_iter()
            .filter(|l| l.catalog().is_some())
            .collect()
    }

    /// Comma-separated list of the given tokens.
    pub fn list(languages: &[Language]) -> String {
        languages
            .iter()
            .map(Language::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Full usage text; `{program}`.
    Usage,
    /// Prefix for fatal errors.
    ErrorLabel,
    /// `{tool}`, `{install}`.
    ToolNotFound,
    /// `{command}`, `{code}`.
    CommandFailed,
    /// `{reason}`.
    WorkspaceFailed,
    Interrupted,
    MissingUrl,
    /// `{path}`.
    Saved,
}

/// Translated templates for one language.
#[derive(Debug)]
pub struct Catalog {
    pub language: Language,
    usage: &'static str,
    error_label: &'static str,
    tool_not_found: &'static str,
    command_failed: &'static str,
    workspace_failed: &'static str,
    interrupted: &'static str,
    missing_url: &'static str,
    saved: &'static str,
}

impl Catalog {
    /// Look up the raw template for `key`.
    pub fn get(&self, key: MessageKey) -> &'static str {
        match key {
            MessageKey::Usage => self.usage,
            MessageKey::ErrorLabel => self.error_label,
            MessageKey::ToolNotFound => self.tool_not_found,
            MessageKey::CommandFailed => self.command_failed,
            MessageKey::WorkspaceFailed => self.workspace_failed,
            MessageKey::Interrupted => self.interrupted,
            MessageKey::MissingUrl => self.missing_url,
            MessageKey::Saved => self.saved,
        }
    }
}

/// Renders templates from one catalog.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    catalog: &'static Catalog,
}

impl Messages {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }

    /// Messages for `language`, or `None` when no catalog ships for it.
    pub fn for_language(language: Language) -> Option<Self> {
        language.catalog().map(Self::new)
    }

    pub fn language(&self) -> Language {
        self.catalog.language
    }

    /// Render `key` with the given variables.
    pub fn render(&self, key: MessageKey, vars: &TemplateContext) -> String {
        vars.substitute(self.catalog.get(key))
    }

    /// Render a template that takes no variables.
    pub fn text(&self, key: MessageKey) -> String {
        self.render(key, &TemplateContext::new())
    }

    /// `"<label> <message>"`, as printed to stderr for fatal errors.
    pub fn error_line(&self, message: &str) -> String {
        format!("{} {}", self.catalog.get(MessageKey::ErrorLabel), message)
    }

    pub fn usage(&self, program: &str) -> String {
        self.render(
            MessageKey::Usage,
            &TemplateContext::new().with_var("program", program),
        )
    }

    pub fn saved(&self, path: &std::path::Path) -> String {
        self.render(
            MessageKey::Saved,
            &TemplateContext::new().with_var("path", path.display().to_string()),
        )
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new(&catalogs::ENGLISH)
    }
}
