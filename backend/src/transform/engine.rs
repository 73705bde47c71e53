//! Transformation engine
//!
//! Resolves transformation names against the catalog and applies them with a
//! per-call random source. Seeding the engine (or a single call) makes the
//! randomized effects reproducible.
//!
//! ```rust,ignore
//! use retrotext::transform::Transformer;
//!
//! let transformer = Transformer::new();
//! assert_eq!(transformer.transform("hello", "rot13").unwrap(), "uryyb");
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::catalog::Transformation;
use crate::error::TransformResult;

/// Options shared by every call on a [`Transformer`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformerConfig {
    /// Fixed seed for randomized effects. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Name-based front door to the catalog
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    config: TransformerConfig,
}

impl Transformer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TransformerConfig) -> Self {
        Self { config }
    }

    /// Wire names of every transformation, in catalog order
    pub fn available(&self) -> Vec<&'static str> {
        Transformation::ALL.iter().map(|t| t.name()).collect()
    }

    /// Apply the transformation called `name` to `text`
    pub fn transform(&self, text: &str, name: &str) -> TransformResult<String> {
        self.transform_seeded(text, name, None)
    }

    /// Like [`Transformer::transform`], with a seed that overrides the configured one
    pub fn transform_seeded(
        &self,
        text: &str,
        name: &str,
        seed: Option<u64>,
    ) -> TransformResult<String> {
        let transformation = name.parse::<Transformation>().map_err(|e| {
            tracing::error!(
                transformation = name,
                available = ?self.available(),
                "Unknown transformation requested"
            );
            e
        })?;
        Ok(self.apply(text, transformation, seed))
    }

    /// Apply an already resolved transformation
    pub fn apply(&self, text: &str, transformation: Transformation, seed: Option<u64>) -> String {
        tracing::debug!(
            transformation = transformation.name(),
            input_len = text.chars().count(),
            "Applying transformation"
        );

        let mut rng = match seed.or(self.config.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let result = transformation.apply(text, &mut rng);

        tracing::debug!(
            transformation = transformation.name(),
            output_len = result.chars().count(),
            "Transformation complete"
        );
        result
    }
}
