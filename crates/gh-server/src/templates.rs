//! Disk-loaded HTML templates with variable substitution.
//!
//! Templates are plain `.html` files read once at startup. Rendering
//! substitutes `{varname}` placeholders from a [`TemplateContext`]; values
//! are HTML-escaped when they enter the context, and unknown placeholders
//! (including literal CSS braces) are left verbatim.

use std::collections::HashMap;
use std::path::Path;

use gh_core::{Error, Result};

/// Escape a value for safe interpolation into HTML text or attributes.
pub fn html_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const HEX: [u8; 16] = *b"0123456789ABCDEF";

/// Percent-encode a value for use as a URL path segment.
///
/// Entity names go into `href` and `action` attributes; names carrying
/// `?`, `#`, `%`, or spaces would otherwise produce broken links.
pub fn url_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for b in value.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            _ => {
                out.push('%');
                out.push(char::from(HEX[(b >> 4) as usize]));
                out.push(char::from(HEX[(b & 0x0f) as usize]));
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// TemplateContext
// ---------------------------------------------------------------------------

/// Variable substitution context for HTML templates.
///
/// Supports variable substitution in strings using the `{varname}` syntax.
///
/// # Example
///
/// ```
/// use gh_server::templates::TemplateContext;
///
/// let ctx = TemplateContext::new()
///     .with_var("name", "Goblin")
///     .with_var("level", "3");
///
/// assert_eq!(ctx.substitute("<h1>{name} (level {level})</h1>"), "<h1>Goblin (level 3)</h1>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    vars: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty template context.
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    /// Add a variable, HTML-escaping its value.
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    /// Set a variable, HTML-escaping its value.
    pub fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), html_escape(value));
    }

    /// Get a variable value (as stored, i.e. already escaped).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|s| s.as_str())
    }

    /// Substitute variables in a string.
    ///
    /// Variables are in the form `{varname}`. The template is scanned in a
    /// single pass, so substituted values are never themselves rescanned
    /// for placeholders. Only known variables are replaced; anything else
    /// between braces stays as-is.
    pub fn substitute(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open + 1..];
            match tail.find(['{', '}']) {
                Some(close) if tail.as_bytes()[close] == b'}' => {
                    let key = &tail[..close];
                    match self.vars.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push('{');
                            out.push_str(key);
                            out.push('}');
                        }
                    }
                    rest = &tail[close + 1..];
                }
                // Nested or unterminated brace: emit verbatim and move on.
                _ => {
                    out.push('{');
                    rest = tail;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

// ---------------------------------------------------------------------------
// TemplateStore
// ---------------------------------------------------------------------------

/// All HTML templates, keyed by file name (e.g. `lookup_player.html`).
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: HashMap<String, String>,
}

impl TemplateStore {
    /// Load every `.html` file in `dir` into the store.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut templates = HashMap::new();

        let entries = std::fs::read_dir(dir).map_err(|e| {
            Error::Template(format!("cannot read template dir {}: {e}", dir.display()))
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| Error::Template(e.to_string()))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let contents = std::fs::read_to_string(&path).map_err(|e| {
                Error::Template(format!("cannot read template {}: {e}", path.display()))
            })?;
            templates.insert(name.to_string(), contents);
        }

        Ok(Self { templates })
    }

    /// Number of loaded templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True if no templates are loaded.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Render the named template with the given context.
    pub fn render(&self, name: &str, ctx: &TemplateContext) -> Result<String> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| Error::Template(format!("no such template: {name}")))?;
        Ok(ctx.substitute(template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_substitute() {
        let ctx = TemplateContext::new()
            .with_var("name", "Goblin")
            .with_var("health", "10");

        assert_eq!(ctx.substitute("{name}: {health} hp"), "Goblin: 10 hp");
    }

    #[test]
    fn unknown_placeholders_are_left_verbatim() {
        let ctx = TemplateContext::new().with_var("name", "Goblin");
        assert_eq!(
            ctx.substitute("body { margin: 0 } {name}"),
            "body { margin: 0 } Goblin"
        );
    }

    #[test]
    fn values_are_escaped() {
        let ctx = TemplateContext::new().with_var("description", "<script>alert(1)</script>");
        assert_eq!(
            ctx.substitute("{description}"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let ctx = TemplateContext::new()
            .with_var("description", "{password}")
            .with_var("password", "hunter2");
        assert_eq!(ctx.substitute("{description}"), "{password}");
    }

    #[test]
    fn url_escape_covers_reserved_characters() {
        assert_eq!(url_escape("Sonzo She-Dragon"), "Sonzo%20She-Dragon");
        assert_eq!(url_escape("who?"), "who%3F");
        assert_eq!(url_escape("a#b%c"), "a%23b%25c");
        assert_eq!(url_escape("plain_name.v2~"), "plain_name.v2~");
    }

    #[test]
    fn escape_covers_quotes() {
        assert_eq!(html_escape(r#"a "b" & 'c'"#), "a &quot;b&quot; &amp; &#39;c&#39;");
    }

    #[test]
    fn store_load_and_render() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.html");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, "<p>Hello {{who}}</p>").unwrap();

        let store = TemplateStore::load(dir.path()).unwrap();
        assert_eq!(store.len(), 1);

        let ctx = TemplateContext::new().with_var("who", "world");
        assert_eq!(store.render("hello.html", &ctx).unwrap(), "<p>Hello world</p>");
    }

    #[test]
    fn missing_template_is_an_error() {
        let store = TemplateStore::default();
        let err = store.render("nope.html", &TemplateContext::new());
        assert!(matches!(err, Err(Error::Template(_))));
    }

    #[test]
    fn non_html_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();
        std::fs::write(dir.path().join("page.html"), "<p>ok</p>").unwrap();

        let store = TemplateStore::load(dir.path()).unwrap();
        assert_eq!(store.len(), 1);
    }
}
