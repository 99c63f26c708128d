//! Corpus composition
//!
//! Draws from each source in proportion to its ratio, shuffles the
//! concatenation once, then pads toward the target size as the padding
//! policy allows.

use crate::config::{ComposerConfig, PaddingPolicy};
use crate::error::ComposerError;
use crate::source::Source;
use crate::stats::{CompositionStats, SourceStats};
use primer_domain::{Corpus, TaggedExample};
use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, warn};

/// A composed corpus and the statistics describing how it was built
#[derive(Debug, Clone)]
pub struct Composition {
    /// The shuffled, size-targeted corpus
    pub corpus: Corpus,

    /// How each source contributed
    pub stats: CompositionStats,
}

/// Mixes sources into a corpus at target ratios
///
/// # Examples
///
/// ```
/// use primer_composer::{Composer, ComposerConfig, Source};
/// use primer_domain::{TaggedExample, TrainingExample};
/// use std::collections::BTreeMap;
///
/// let examples = |tag: &str| -> Vec<TaggedExample> {
///     (0..10)
///         .map(|i| TaggedExample::new(TrainingExample::pair(format!("Q{}", i), "A").unwrap(), tag))
///         .collect()
/// };
/// let sources = vec![
///     Source::examples("faq", examples("faq")),
///     Source::examples("chat", examples("chat")),
/// ];
/// let ratios = BTreeMap::from([("faq".to_string(), 3.0), ("chat".to_string(), 1.0)]);
///
/// let composer = Composer::new(ComposerConfig::reproducible(7)).unwrap();
/// let composition = composer.compose(sources, &ratios, Some(8)).unwrap();
/// assert_eq!(composition.corpus.count_for("faq"), 6);
/// assert_eq!(composition.corpus.count_for("chat"), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Composer {
    config: ComposerConfig,
}

impl Composer {
    /// Create a composer, validating its configuration
    pub fn new(config: ComposerConfig) -> Result<Self, ComposerError> {
        config.validate().map_err(ComposerError::Config)?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Compose a corpus
    ///
    /// `ratios` maps source names to proportions and is normalized. When it
    /// is empty every source is weighted by its natural size; otherwise
    /// sources it does not name get no share. Without `target_size` the
    /// corpus aims for the combined natural size of the participating
    /// sources.
    pub fn compose(
        &self,
        sources: Vec<Source>,
        ratios: &BTreeMap<String, f64>,
        target_size: Option<usize>,
    ) -> Result<Composition, ComposerError> {
        let weights = scale_weights(resolve_weights(&sources, ratios)?);
        let target = resolve_target(&sources, &weights, target_size)?;
        let quotas = apportion(target, &weights);
        let total_weight: f64 = weights.iter().sum();

        let seed = self.config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);
        debug!("Composing {} examples from {} sources (seed {})", target, sources.len(), seed);

        let mut pool = Vec::with_capacity(target);
        let mut source_stats = Vec::with_capacity(sources.len());

        for ((source, weight), quota) in sources.into_iter().zip(&weights).zip(quotas) {
            let name = source.name().to_string();
            let drawn = draw(source, quota, &mut rng)?;
            let shortfall = quota.saturating_sub(drawn.len());
            if shortfall > 0 {
                warn!(
                    "Source '{}' supplied {} of {} requested examples",
                    name,
                    drawn.len(),
                    quota
                );
            } else {
                debug!("Source '{}' supplied {} examples", name, drawn.len());
            }

            source_stats.push(SourceStats {
                ratio: if total_weight > 0.0 { weight / total_weight } else { 0.0 },
                requested: quota,
                drawn: drawn.len(),
                shortfall,
                name,
            });
            pool.extend(drawn);
        }

        pool.shuffle(&mut rng);

        let deficit = target.saturating_sub(pool.len());
        let padded = self.pad(&mut pool, deficit, target, &mut rng)?;
        let residual_shortfall = deficit - padded;
        if residual_shortfall > 0 {
            warn!(
                "Corpus is {} examples short of the target size {}",
                residual_shortfall, target
            );
        }

        let corpus = Corpus::from_examples(pool);
        let stats = CompositionStats {
            target_size: target,
            seed,
            sources: source_stats,
            padded,
            residual_shortfall,
            final_size: corpus.len(),
            category_counts: corpus.category_counts().clone(),
        };

        info!(
            "Composed corpus of {} examples ({} padded)",
            stats.final_size, stats.padded
        );
        Ok(Composition { corpus, stats })
    }

    /// Resample with replacement from the shuffled pool; returns the number added
    fn pad(
        &self,
        pool: &mut Vec<TaggedExample>,
        deficit: usize,
        target: usize,
        rng: &mut StdRng,
    ) -> Result<usize, ComposerError> {
        if deficit == 0 {
            return Ok(0);
        }
        if self.config.padding == PaddingPolicy::FailOnShortfall {
            return Err(ComposerError::Shortfall {
                requested: target,
                available: pool.len(),
            });
        }

        let base = pool.len();
        if base == 0 {
            return Ok(0);
        }

        let padding = deficit.min(self.config.max_padding(target));
        for _ in 0..padding {
            let idx = rng.gen_range(0..base);
            let duplicate = pool[idx].clone();
            pool.push(duplicate);
        }
        if padding > 0 {
            debug!("Padded corpus with {} duplicates", padding);
        }
        Ok(padding)
    }
}

/// Per-source weights, in source order
fn resolve_weights(
    sources: &[Source],
    ratios: &BTreeMap<String, f64>,
) -> Result<Vec<f64>, ComposerError> {
    let mut names = HashSet::new();
    for source in sources {
        if !names.insert(source.name()) {
            return Err(ComposerError::Config(format!(
                "duplicate source name '{}'",
                source.name()
            )));
        }
    }

    if ratios.is_empty() {
        return Ok(sources.iter().map(|s| s.natural_size() as f64).collect());
    }

    for (name, ratio) in ratios {
        if !names.contains(name.as_str()) {
            return Err(ComposerError::Config(format!(
                "ratio given for unknown source '{}'",
                name
            )));
        }
        if !ratio.is_finite() || *ratio < 0.0 {
            return Err(ComposerError::Config(format!(
                "ratio for source '{}' must be a finite non-negative number, got {}",
                name, ratio
            )));
        }
    }

    let weights: Vec<f64> = sources
        .iter()
        .map(|s| ratios.get(s.name()).copied().unwrap_or(0.0))
        .collect();

    if weights.iter().all(|w| *w == 0.0) {
        return Err(ComposerError::Config("all ratios are zero".to_string()));
    }
    Ok(weights)
}

/// Divide weights by the largest one so their sum stays finite
fn scale_weights(weights: Vec<f64>) -> Vec<f64> {
    let max = weights.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        return weights;
    }
    weights.into_iter().map(|w| w / max).collect()
}

fn resolve_target(
    sources: &[Source],
    weights: &[f64],
    target_size: Option<usize>,
) -> Result<usize, ComposerError> {
    match target_size {
        Some(0) if !sources.is_empty() => Err(ComposerError::Config(
            "target size must be positive when sources are given".to_string(),
        )),
        Some(size) => Ok(size),
        None => {
            let mut total = 0;
            for (source, weight) in sources.iter().zip(weights) {
                if *weight == 0.0 {
                    continue;
                }
                if let Source::Generator(generator) = source {
                    if generator.natural_size() == 0 {
                        return Err(ComposerError::Config(format!(
                            "source '{}' is unbounded; a target size is required",
                            generator.name()
                        )));
                    }
                }
                total += source.natural_size();
            }
            Ok(total)
        }
    }
}

/// Split `target` into integer quotas by largest remainder
///
/// Quotas sum to `target` whenever any weight is positive. Equal remainders
/// go to the earlier source.
fn apportion(target: usize, weights: &[f64]) -> Vec<usize> {
    let total: f64 = weights.iter().sum();
    if target == 0 || total <= 0.0 {
        return vec![0; weights.len()];
    }

    let exact: Vec<f64> = weights.iter().map(|w| target as f64 * w / total).collect();
    let mut quotas: Vec<usize> = exact.iter().map(|q| q.floor() as usize).collect();
    let assigned: usize = quotas.iter().sum();

    let mut order: Vec<usize> = (0..weights.len()).filter(|&i| weights[i] > 0.0).collect();
    order.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.partial_cmp(&ra).unwrap_or(Ordering::Equal).then(a.cmp(&b))
    });

    for &idx in order.iter().take(target.saturating_sub(assigned)) {
        quotas[idx] += 1;
    }
    quotas
}

/// Draw up to `quota` examples from one source
fn draw(
    source: Source,
    quota: usize,
    rng: &mut StdRng,
) -> Result<Vec<TaggedExample>, ComposerError> {
    if quota == 0 {
        return Ok(Vec::new());
    }

    match source {
        Source::Examples { examples, .. } if examples.len() <= quota => Ok(examples),
        Source::Examples { examples, .. } => Ok(index::sample(rng, examples.len(), quota)
            .into_iter()
            .map(|i| examples[i].clone())
            .collect()),
        Source::Generator(generator) => {
            let mut generated = generator
                .generate(quota, rng.gen())
                .map_err(|message| ComposerError::Source {
                    name: generator.name().to_string(),
                    message,
                })?;
            generated.truncate(quota);
            Ok(generated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_domain::{ExampleGenerator, TrainingExample};

    fn tagged(tag: &str, n: usize) -> Vec<TaggedExample> {
        (0..n)
            .map(|i| {
                TaggedExample::new(
                    TrainingExample::pair(format!("{} question {}", tag, i), "answer").unwrap(),
                    tag,
                )
            })
            .collect()
    }

    fn ratios(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    struct Failing;

    impl ExampleGenerator for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn natural_size(&self) -> usize {
            0
        }

        fn generate(&self, _count: usize, _seed: u64) -> Result<Vec<TaggedExample>, String> {
            Err("template bank exhausted".to_string())
        }
    }

    #[test]
    fn test_huge_ratios_still_fill_target() {
        let sources = vec![
            Source::examples("a", tagged("a", 50)),
            Source::examples("b", tagged("b", 50)),
        ];
        let composition = Composer::new(ComposerConfig::reproducible(2))
            .unwrap()
            .compose(sources, &ratios(&[("a", 1e308), ("b", 1e308)]), Some(40))
            .unwrap();
        assert_eq!(composition.corpus.count_for("a"), 20);
        assert_eq!(composition.corpus.count_for("b"), 20);
        assert_eq!(composition.stats.sources[0].ratio, 0.5);
    }

    #[test]
    fn test_apportion_sums_to_target() {
        assert_eq!(apportion(100, &[0.5, 0.3, 0.2]), vec![50, 30, 20]);
        assert_eq!(apportion(10, &[1.0, 1.0, 1.0]), vec![4, 3, 3]);
        assert_eq!(apportion(7, &[2.0, 0.0, 1.0]), vec![5, 0, 2]);
        assert_eq!(apportion(0, &[1.0]), vec![0]);
        assert_eq!(apportion(5, &[0.0, 0.0]), vec![0, 0]);
    }

    #[test]
    fn test_duplicate_source_names_rejected() {
        let sources = vec![
            Source::examples("a", tagged("a", 2)),
            Source::examples("a", tagged("a", 2)),
        ];
        let err = Composer::default()
            .compose(sources, &BTreeMap::new(), None)
            .unwrap_err();
        assert!(matches!(err, ComposerError::Config(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn test_unknown_ratio_source_rejected() {
        let sources = vec![Source::examples("a", tagged("a", 2))];
        let err = Composer::default()
            .compose(sources, &ratios(&[("a", 1.0), ("missing", 1.0)]), None)
            .unwrap_err();
        assert!(matches!(err, ComposerError::Config(msg) if msg.contains("missing")));
    }

    #[test]
    fn test_bad_ratios_rejected() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let sources = vec![Source::examples("a", tagged("a", 2))];
            let result = Composer::default().compose(sources, &ratios(&[("a", bad)]), None);
            assert!(matches!(result, Err(ComposerError::Config(_))), "{}", bad);
        }

        let sources = vec![Source::examples("a", tagged("a", 2))];
        let result = Composer::default().compose(sources, &ratios(&[("a", 0.0)]), None);
        assert!(matches!(result, Err(ComposerError::Config(msg)) if msg.contains("zero")));
    }

    #[test]
    fn test_zero_target_with_sources_rejected() {
        let sources = vec![Source::examples("a", tagged("a", 2))];
        let result = Composer::default().compose(sources, &BTreeMap::new(), Some(0));
        assert!(matches!(result, Err(ComposerError::Config(_))));
    }

    #[test]
    fn test_zero_target_without_sources_is_empty() {
        let composition = Composer::default()
            .compose(Vec::new(), &BTreeMap::new(), Some(0))
            .unwrap();
        assert!(composition.corpus.is_empty());
    }

    #[test]
    fn test_natural_size_default() {
        let sources = vec![
            Source::examples("a", tagged("a", 4)),
            Source::examples("b", tagged("b", 6)),
        ];
        let composition = Composer::new(ComposerConfig::reproducible(1))
            .unwrap()
            .compose(sources, &BTreeMap::new(), None)
            .unwrap();
        assert_eq!(composition.stats.target_size, 10);
        assert_eq!(composition.corpus.count_for("a"), 4);
        assert_eq!(composition.corpus.count_for("b"), 6);
        assert_eq!(composition.stats.padded, 0);
    }

    #[test]
    fn test_unnamed_source_excluded() {
        let sources = vec![
            Source::examples("a", tagged("a", 4)),
            Source::examples("b", tagged("b", 6)),
        ];
        let composition = Composer::new(ComposerConfig::reproducible(1))
            .unwrap()
            .compose(sources, &ratios(&[("a", 1.0)]), None)
            .unwrap();
        assert_eq!(composition.corpus.len(), 4);
        assert_eq!(composition.corpus.count_for("b"), 0);
        assert_eq!(composition.stats.sources[1].requested, 0);
    }

    #[test]
    fn test_sampling_without_replacement() {
        let sources = vec![Source::examples("a", tagged("a", 50))];
        let composition = Composer::new(ComposerConfig::reproducible(3))
            .unwrap()
            .compose(sources, &BTreeMap::new(), Some(20))
            .unwrap();
        let mut questions: Vec<_> = composition
            .corpus
            .examples()
            .iter()
            .map(|t| t.example.first_user().unwrap_or_default().to_string())
            .collect();
        questions.sort();
        questions.dedup();
        assert_eq!(questions.len(), 20);
    }

    #[test]
    fn test_padding_is_capped() {
        let sources = vec![Source::examples("a", tagged("a", 10))];
        let composition = Composer::new(ComposerConfig::reproducible(5))
            .unwrap()
            .compose(sources, &BTreeMap::new(), Some(20))
            .unwrap();
        assert_eq!(composition.stats.padded, 5);
        assert_eq!(composition.stats.residual_shortfall, 5);
        assert_eq!(composition.stats.final_size, 15);
        assert_eq!(composition.stats.total_shortfall(), 10);
    }

    #[test]
    fn test_padding_fills_small_gap() {
        let sources = vec![Source::examples("a", tagged("a", 18))];
        let composition = Composer::new(ComposerConfig::reproducible(5))
            .unwrap()
            .compose(sources, &BTreeMap::new(), Some(20))
            .unwrap();
        assert_eq!(composition.stats.padded, 2);
        assert_eq!(composition.stats.residual_shortfall, 0);
        assert_eq!(composition.corpus.len(), 20);
    }

    #[test]
    fn test_padding_disabled() {
        let config = ComposerConfig {
            seed: Some(5),
            padding: PaddingPolicy::Disabled,
            ..Default::default()
        };
        let sources = vec![Source::examples("a", tagged("a", 18))];
        let composition = Composer::new(config)
            .unwrap()
            .compose(sources, &BTreeMap::new(), Some(20))
            .unwrap();
        assert_eq!(composition.stats.padded, 0);
        assert_eq!(composition.corpus.len(), 18);
        assert_eq!(composition.stats.warnings().len(), 2);
    }

    #[test]
    fn test_fail_on_shortfall() {
        let sources = vec![Source::examples("a", tagged("a", 18))];
        let err = Composer::new(ComposerConfig::strict())
            .unwrap()
            .compose(sources, &BTreeMap::new(), Some(20))
            .unwrap_err();
        assert_eq!(
            err,
            ComposerError::Shortfall {
                requested: 20,
                available: 18
            }
        );
    }

    #[test]
    fn test_generator_failure_names_source() {
        let sources = vec![Source::generator(Failing)];
        let err = Composer::default()
            .compose(sources, &ratios(&[("failing", 1.0)]), Some(3))
            .unwrap_err();
        assert!(matches!(err, ComposerError::Source { name, .. } if name == "failing"));
    }

    #[test]
    fn test_unbounded_generator_needs_target() {
        let sources = vec![Source::generator(Failing)];
        let result = Composer::default().compose(sources, &ratios(&[("failing", 1.0)]), None);
        assert!(matches!(result, Err(ComposerError::Config(msg)) if msg.contains("unbounded")));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ComposerConfig {
            max_duplicate_fraction: 2.0,
            ..Default::default()
        };
        assert!(matches!(Composer::new(config), Err(ComposerError::Config(_))));
    }
}
