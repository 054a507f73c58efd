use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The structural context of one term occurrence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationTag {
    MetaTitle,
    MetaDescription,
    MetaKeywords,
    MetaOther,
    MetaRedirect,
    LinkText,
    LinkUrl,
    MediaUrl,
    AltText,
    HtmlMisc,
    H1Heading,
    Subheading,
    CodeFence,
    CodeInline,
    CodeBlock,
    TextIntro,
    Text,
    InFilename,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown classification tag: {0}")]
pub struct TagParseError(pub String);

impl ClassificationTag {
    pub const ALL: [ClassificationTag; 18] = [
        Self::MetaTitle,
        Self::MetaDescription,
        Self::MetaKeywords,
        Self::MetaOther,
        Self::MetaRedirect,
        Self::LinkText,
        Self::LinkUrl,
        Self::MediaUrl,
        Self::AltText,
        Self::HtmlMisc,
        Self::H1Heading,
        Self::Subheading,
        Self::CodeFence,
        Self::CodeInline,
        Self::CodeBlock,
        Self::TextIntro,
        Self::Text,
        Self::InFilename,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MetaTitle => "meta_title",
            Self::MetaDescription => "meta_description",
            Self::MetaKeywords => "meta_keywords",
            Self::MetaOther => "meta_other",
            Self::MetaRedirect => "meta_redirect",
            Self::LinkText => "link_text",
            Self::LinkUrl => "link_url",
            Self::MediaUrl => "media_url",
            Self::AltText => "alt_text",
            Self::HtmlMisc => "html_misc",
            Self::H1Heading => "h1_heading",
            Self::Subheading => "subheading",
            Self::CodeFence => "code_fence",
            Self::CodeInline => "code_inline",
            Self::CodeBlock => "code_block",
            Self::TextIntro => "text_intro",
            Self::Text => "text",
            Self::InFilename => "in_filename",
        }
    }
}

impl fmt::Display for ClassificationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassificationTag {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| TagParseError(s.to_string()))
    }
}
