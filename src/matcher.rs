//! Query entry point: text in, best distinct labels out.

use std::sync::Arc;

use num::Float;
use parking_lot::RwLock;

use crate::{
    config::MatcherConfig,
    error::{MatchError, Result},
    vectorizer::{
        corpus::Corpus,
        evaluate::select::{select_top_distinct, ResultSet},
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        VectorSpaceModel,
    },
};

/// Find the `top_n` labels most similar to `text` in `model`.
///
/// Pure function of its inputs: the same model and text always give the same
/// result. `top_n` is checked before any work is done.
///
/// # Errors
/// - `InvalidArgument` when `top_n == 0`
/// - `EmptyQuery` when `text` is blank after normalization
pub fn find_similar<N, E>(model: &VectorSpaceModel<N, E>, text: &str, top_n: usize) -> Result<ResultSet>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine,
{
    if top_n < 1 {
        return Err(MatchError::invalid_argument("top_n must be at least 1"));
    }
    let query = model.project(text)?;
    let ranking = model.rank(&query);
    let result = select_top_distinct(&ranking.list, top_n)?;
    tracing::debug!(
        known_terms = query.known_terms,
        unknown_terms = query.unknown_terms,
        top_n,
        results = result.len(),
        "query answered"
    );
    Ok(result)
}

/// Shares one frozen model between concurrent queries.
///
/// Queries clone the current `Arc` and release the lock before computing, so
/// [`LabelMatcher::swap_model`] never waits on a running query and a running
/// query keeps the model it started with.
pub struct LabelMatcher<N = f32, E = DefaultTFIDFEngine>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine,
{
    model: RwLock<Arc<VectorSpaceModel<N, E>>>,
    config: MatcherConfig,
}

impl<N, E> LabelMatcher<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine,
{
    pub fn new(model: VectorSpaceModel<N, E>, config: MatcherConfig) -> Self {
        Self {
            model: RwLock::new(Arc::new(model)),
            config,
        }
    }

    /// Validate `config` and build a model from `corpus`.
    pub fn build(corpus: &Corpus, config: MatcherConfig) -> Result<Self> {
        config.validate()?;
        let model = VectorSpaceModel::build_with_config(corpus, &config)?;
        Ok(Self::new(model, config))
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Model currently serving queries
    pub fn model(&self) -> Arc<VectorSpaceModel<N, E>> {
        Arc::clone(&self.model.read())
    }

    /// Replace the model and return the previous one.
    pub fn swap_model(&self, model: VectorSpaceModel<N, E>) -> Arc<VectorSpaceModel<N, E>> {
        let model = Arc::new(model);
        std::mem::replace(&mut *self.model.write(), model)
    }

    /// Build a fresh model from `corpus` and swap it in.
    /// On error the current model keeps serving.
    pub fn rebuild(&self, corpus: &Corpus) -> Result<Arc<VectorSpaceModel<N, E>>> {
        let model = VectorSpaceModel::build_with_config(corpus, &self.config)?;
        let previous = self.swap_model(model);
        tracing::info!(documents = corpus.len(), "model swapped");
        Ok(previous)
    }

    /// See [`find_similar`].
    /// With `reject_unknown_queries` set, a query sharing no term with the
    /// vocabulary fails with `EmptyQuery` instead of scoring 0 everywhere.
    pub fn find_similar(&self, text: &str, top_n: usize) -> Result<ResultSet> {
        if top_n < 1 {
            return Err(MatchError::invalid_argument("top_n must be at least 1"));
        }
        let model = self.model();
        if self.config.reject_unknown_queries && model.project(text)?.is_zero() {
            return Err(MatchError::EmptyQuery);
        }
        find_similar(&*model, text, top_n)
    }

    /// [`LabelMatcher::find_similar`] with the configured `top_n`.
    pub fn find_similar_default(&self, text: &str) -> Result<ResultSet> {
        self.find_similar(text, self.config.top_n)
    }
}
