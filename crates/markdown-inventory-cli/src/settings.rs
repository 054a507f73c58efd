//! Maps the TOML config onto engine types.

use std::str::FromStr;

use anyhow::{Context, Result};
use markdown_inventory_config::Config;
use markdown_inventory_engine::report::ScoringModel;
use markdown_inventory_engine::{
    ClassificationTag, ContentSet, OccurrenceClassifier, Override, OverrideTable, TermSet,
};

pub fn content_sets(config: &Config) -> Vec<ContentSet> {
    config
        .content
        .iter()
        .map(|c| ContentSet {
            repo: c.repo.clone(),
            root: c.path.clone(),
            base_url: c.url.clone(),
            exclude_folders: c.exclude_folders.clone(),
        })
        .collect()
}

pub fn term_sets(config: &Config) -> Result<Vec<TermSet>> {
    config
        .inventory
        .iter()
        .map(|inv| TermSet::compile(&inv.name, &inv.terms).map_err(Into::into))
        .collect()
}

/// Built-in languages and overrides, extended by the config.
pub fn classifier(config: &Config) -> Result<OccurrenceClassifier> {
    let mut overrides = OverrideTable::builtin();
    for rule in &config.overrides {
        let tag = ClassificationTag::from_str(&rule.tag)
            .with_context(|| format!("Invalid override for {}", rule.file))?;
        overrides.push(Override::new(&rule.file, &rule.prefix, tag));
    }

    let languages = OccurrenceClassifier::DEFAULT_LANGUAGES
        .iter()
        .map(|l| l.to_string())
        .chain(config.languages.iter().cloned());

    Ok(OccurrenceClassifier::new(languages, overrides))
}

/// Default weights with any configured weights laid over them.
pub fn scoring_model(config: &Config) -> Result<ScoringModel> {
    let mut model = ScoringModel {
        text_threshold: config.scoring.text_threshold,
        ..ScoringModel::default()
    };
    for (name, &weight) in &config.scoring.weights {
        let tag = ClassificationTag::from_str(name).context("Invalid scoring weight")?;
        model.weights.insert(tag, weight);
    }
    Ok(model)
}
