/// Fenced code block delimiter with owned syntax knowledge.
///
/// A fence line is: optional whitespace, an optional `>` blockquote marker,
/// optional whitespace, exactly three backticks, an optional language token,
/// optional trailing whitespace. Nothing else may follow.
pub struct CodeFence;

/// A recognised fence line and the language token it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    /// Language token after the backticks, if any.
    pub language: Option<String>,
}

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns a [`FenceSig`] when `line` (terminator already stripped) is a fence line.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let rest = line.trim_start();
        let rest = rest.strip_prefix('>').unwrap_or(rest).trim_start();
        let rest = rest.strip_prefix(Self::BACKTICKS)?;
        let token = rest.trim_end();

        if token.is_empty() {
            return Some(FenceSig { language: None });
        }
        // A fourth backtick or inner whitespace means this is not a plain fence.
        if token.starts_with('`') || token.chars().any(char::is_whitespace) {
            return None;
        }
        Some(FenceSig {
            language: Some(token.to_string()),
        })
    }
}
