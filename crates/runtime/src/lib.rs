use deptree_core::{NamedEntityMerge, Normalizer, Pipeline, PipelineConfig, QuotationMerge};
use deptree_lexicon::LexiconStore;
use std::sync::Arc;

/// Load the lexicon a config points at, falling back to the embedded seed lexicon.
pub fn load_lexicon(config: &PipelineConfig) -> deptree_core::Result<Arc<LexiconStore>> {
    let store = match &config.lexicon_path {
        Some(path) => {
            tracing::info!("Loading lexicon from {}", path.display());
            LexiconStore::load(path)?
        }
        None => LexiconStore::embedded()?,
    };
    Ok(Arc::new(store))
}

/// Bootstraps the standard processing pipeline.
///
/// Merge passes run in a fixed order (quotations, then named entities) and
/// normalization is backed by the configured lexicon.
pub fn build_default_pipeline(config: &PipelineConfig) -> deptree_core::Result<Pipeline> {
    let mut pipeline = Pipeline::new();

    if config.merge_quotations {
        pipeline = pipeline.with_pass(Box::new(QuotationMerge::new()));
    }
    if config.merge_named_entities {
        pipeline = pipeline.with_pass(Box::new(NamedEntityMerge::new()));
    }
    if config.normalize {
        let lexicon = load_lexicon(config)?;
        pipeline = pipeline.with_normalizer(Normalizer::new(lexicon.clone(), lexicon));
    }

    tracing::debug!(
        "Pipeline ready: passes={:?}, normalize={}",
        pipeline.passes().collect::<Vec<_>>(),
        config.normalize
    );
    Ok(pipeline)
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(deptree_core::logging::init_logging(component, to_stderr))
}
