use super::tag::ClassificationTag;

/// One filename-gated exception: lines of `file` starting with `prefix` get `tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    /// Bare file name (no directories) the rule applies to.
    pub file: String,
    pub prefix: String,
    pub tag: ClassificationTag,
}

impl Override {
    pub fn new(file: &str, prefix: &str, tag: ClassificationTag) -> Self {
        Self {
            file: file.to_string(),
            prefix: prefix.to_string(),
            tag,
        }
    }
}

/// Known false positives in specific articles, corrected by hand.
///
/// These are deliberately not generalised: each row names one article and one
/// line prefix that the generic rules get wrong there.
const BUILTIN: [(&str, &str, ClassificationTag); 4] = [
    // Script output pasted into the article body.
    (
        "tutorial-python-vscode-flask.md",
        "Successfully installed",
        ClassificationTag::HtmlMisc,
    ),
    // Shell prompt lines shown outside a fence.
    (
        "quickstart-python-create-virtual-environment.md",
        "(env) C:\\",
        ClassificationTag::HtmlMisc,
    ),
    // Unfenced install command and POM snippet.
    (
        "java-sdk-azure-get-started.md",
        "mvn install",
        ClassificationTag::CodeBlock,
    ),
    (
        "java-sdk-azure-get-started.md",
        "<dependency>",
        ClassificationTag::CodeBlock,
    ),
];

/// Ordered `(filename, line prefix) -> tag` exceptions; first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    rules: Vec<Override>,
}

impl OverrideTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        Self {
            rules: BUILTIN
                .iter()
                .map(|&(file, prefix, tag)| Override::new(file, prefix, tag))
                .collect(),
        }
    }

    pub fn push(&mut self, rule: Override) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Override] {
        &self.rules
    }

    /// Looks up an override for `line` in `filename` (bare file name).
    pub fn lookup(&self, filename: &str, line: &str) -> Option<ClassificationTag> {
        self.rules
            .iter()
            .find(|r| r.file == filename && line.starts_with(&r.prefix))
            .map(|r| r.tag)
    }
}

impl Extend<Override> for OverrideTable {
    fn extend<I: IntoIterator<Item = Override>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}
