//! End-to-end processing of one parser result.

use crate::engine::{DependencyTree, TreeBuilder};
use crate::error::Result;
use crate::normalize::Normalizer;
use crate::passes::MergePass;
use deptree_api::{ParseDocument, SentenceParse};

/// Build → merge passes (in registration order) → normalize.
#[derive(Default)]
pub struct Pipeline {
    passes: Vec<Box<dyn MergePass>>,
    normalizer: Option<Normalizer>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pass(mut self, pass: Box<dyn MergePass>) -> Self {
        self.passes.push(pass);
        self
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub fn passes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.passes.iter().map(|p| p.name())
    }

    pub fn normalizer(&self) -> Option<&Normalizer> {
        self.normalizer.as_ref()
    }

    pub fn process(&self, parse: &SentenceParse) -> Result<DependencyTree> {
        let _span = tracing::debug_span!("sentence", text = %parse.text).entered();

        let mut tree = TreeBuilder::from_parse(parse)?;
        for pass in &self.passes {
            tracing::trace!("Applying {} pass", pass.name());
            pass.apply(&mut tree, parse)?;
        }
        if let Some(normalizer) = &self.normalizer {
            normalizer.normalize(&mut tree);
        }
        Ok(tree)
    }

    /// One result per sentence; a malformed sentence does not stop the others.
    pub fn process_document(&self, document: &ParseDocument) -> Vec<Result<DependencyTree>> {
        document
            .sentences
            .iter()
            .enumerate()
            .map(|(i, sentence)| {
                let result = self.process(sentence);
                if let Err(e) = &result {
                    tracing::warn!("Sentence {} failed: {}", i, e);
                }
                result
            })
            .collect()
    }
}
