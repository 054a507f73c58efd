use serde::{Deserialize, Serialize};

use crate::parsing::segments::{Segments, kinds::Heading};

use super::Document;

/// Header fields of an article, read from its metadata range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    pub title: String,
    pub description: String,
    pub date: String,
    pub author: String,
    pub ms_author: String,
    pub manager: String,
    pub ms_service: String,
    pub ms_topic: String,
    pub h1: String,
}

#[derive(Clone, Copy)]
enum Field {
    Title,
    Description,
    Date,
    Author,
    MsAuthor,
    Manager,
    MsService,
    MsTopic,
}

/// Keys per field; site generators disagree on names, so several are accepted.
const KEYS: [(Field, &[&str]); 8] = [
    (Field::Title, &["title:", "PageTitle:"]),
    (Field::Description, &["description:", "MetaDescription:"]),
    (Field::Date, &["ms.date:", "DateApproved:"]),
    (Field::Author, &["author:"]),
    (Field::MsAuthor, &["ms.author:"]),
    (Field::Manager, &["manager:"]),
    (Field::MsService, &["ms.service:"]),
    (Field::MsTopic, &["ms.topic:"]),
];

impl ArticleMetadata {
    /// Reads header fields from the first metadata range and the H1 that follows it.
    pub fn extract(doc: &Document, segments: &Segments) -> Self {
        let mut meta = Self::default();
        let header = segments.metadata.first();
        let body_start = header.map_or(1, |r| r.end + 2);

        for line in doc.lines() {
            let text = line.content();

            if header.is_some_and(|r| r.contains(line.number)) {
                meta.apply(text);
                continue;
            }

            if line.number >= body_start
                && !segments.in_code_block(line.number)
                && text.starts_with(Heading::H1_PREFIX)
            {
                meta.h1 = text.trim_start_matches(['#', ' ']).trim_end().to_string();
                break;
            }
        }

        meta
    }

    fn apply(&mut self, line: &str) {
        let Some((field, value)) = KEYS.iter().find_map(|(field, keys)| {
            keys.iter()
                .find_map(|k| line.strip_prefix(k))
                .map(|v| (*field, v.trim().to_string()))
        }) else {
            return;
        };

        let slot = match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Date => &mut self.date,
            Field::Author => &mut self.author,
            Field::MsAuthor => &mut self.ms_author,
            Field::Manager => &mut self.manager,
            Field::MsService => &mut self.ms_service,
            Field::MsTopic => &mut self.ms_topic,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_header_and_h1() {
        let md = "\
---
title: Quickstart
description: Create a function
ms.date: 03/14/2021
author: someone
ms.author: someonems
manager: boss
ms.service: azure-functions
ms.topic: quickstart
---
```
# not the h1
```
# Create your first function
";
        let doc = Document::from_relative_str("a.md", md);
        let meta = ArticleMetadata::extract(&doc, &doc.segments());

        assert_eq!(
            meta,
            ArticleMetadata {
                title: "Quickstart".into(),
                description: "Create a function".into(),
                date: "03/14/2021".into(),
                author: "someone".into(),
                ms_author: "someonems".into(),
                manager: "boss".into(),
                ms_service: "azure-functions".into(),
                ms_topic: "quickstart".into(),
                h1: "Create your first function".into(),
            }
        );
    }

    #[test]
    fn alternate_key_names() {
        let md = "---\nPageTitle: VS Code\nMetaDescription: Editor\nDateApproved: 1/2/2020\n---\n";
        let doc = Document::from_relative_str("a.md", md);
        let meta = ArticleMetadata::extract(&doc, &doc.segments());

        assert_eq!(meta.title, "VS Code");
        assert_eq!(meta.description, "Editor");
        assert_eq!(meta.date, "1/2/2020");
        assert_eq!(meta.h1, "");
    }

    #[test]
    fn no_header_still_finds_h1() {
        let doc = Document::from_relative_str("a.md", "title: not metadata\n# Heading\n");
        let meta = ArticleMetadata::extract(&doc, &doc.segments());

        assert_eq!(meta.title, "");
        assert_eq!(meta.h1, "Heading");
    }
}
