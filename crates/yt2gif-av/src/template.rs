//! Variable substitution for message templates.

use std::collections::HashMap;

/// Variable substitution context.
///
/// Supports variable substitution in strings using the `{varname}` syntax.
/// Unknown placeholders are left untouched.
///
/// # Example
///
/// ```
/// use yt2gif_av::TemplateContext;
///
/// let ctx = TemplateContext::new()
///     .with_var("tool", "ffmpeg")
///     .with_var("install", "sudo apt install ffmpeg");
///
/// assert_eq!(
///     ctx.substitute("'{tool}' not found. Install with: {install}"),
///     "'ffmpeg' not found. Install with: sudo apt install ffmpeg"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    vars: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty template context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn with_var(mut self, key: &str, value: impl Into<String>) -> Self {
        self.vars.insert(key.to_string(), value.into());
        self
    }

    /// Get a variable value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|s| s.as_str())
    }

    /// Substitute variables in a string.
    ///
    /// The template is scanned once, so values that themselves contain
    /// `{...}` are inserted verbatim.
    pub fn substitute(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            result.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let key = &after[..close];
                    match self.vars.get(key) {
                        Some(value) => result.push_str(value),
                        None => {
                            result.push('{');
                            result.push_str(key);
                            result.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    result.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        result.push_str(rest);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute() {
        let ctx = TemplateContext::new()
            .with_var("command", "ffmpeg -i in.mp4")
            .with_var("code", "1");

        assert_eq!(
            ctx.substitute("command failed: {command} (rc={code})"),
            "command failed: ffmpeg -i in.mp4 (rc=1)"
        );
        assert_eq!(ctx.get("code"), Some("1"));
    }

    #[test]
    fn values_are_not_rescanned() {
        // A user-supplied path may contain a placeholder-looking segment.
        let ctx = TemplateContext::new()
            .with_var("path", "/tmp/{code}.gif")
            .with_var("code", "1");
        assert_eq!(ctx.substitute("saved to {path}"), "saved to /tmp/{code}.gif");
    }

    #[test]
    fn unknown_and_unterminated_placeholders_are_kept() {
        let ctx = TemplateContext::new().with_var("a", "x");
        assert_eq!(ctx.substitute("{a} {b} {a"), "x {b} {a");
    }

    #[test]
    fn non_ascii_templates() {
        let ctx = TemplateContext::new().with_var("path", "clip.gif");
        assert_eq!(
            ctx.substitute("✔ GIF 已保存至：{path}"),
            "✔ GIF 已保存至：clip.gif"
        );
    }
}
