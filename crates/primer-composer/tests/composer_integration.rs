//! Integration tests for corpus composition

use primer_composer::{Composer, ComposerConfig, ComposerError, PaddingPolicy, Source};
use primer_domain::{TaggedExample, TrainingExample};
use primer_synthesizer::{
    CuratedSet, CuratedSource, QuestionGenerator, SynthesizerConfig, QUESTION_SOURCE_NAME,
};
use std::collections::BTreeMap;

fn tagged(tag: &str, n: usize) -> Vec<TaggedExample> {
    (0..n)
        .map(|i| {
            TaggedExample::new(
                TrainingExample::pair(format!("{} question {}", tag, i), format!("{} answer", tag))
                    .unwrap(),
                tag,
            )
        })
        .collect()
}

fn three_sources() -> Vec<Source> {
    vec![
        Source::examples("a", tagged("a", 100)),
        Source::examples("b", tagged("b", 100)),
        Source::examples("c", tagged("c", 100)),
    ]
}

fn ratios(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn questions(composer: &Composer, sources: Vec<Source>, r: &BTreeMap<String, f64>) -> Vec<String> {
    composer
        .compose(sources, r, Some(100))
        .unwrap()
        .corpus
        .examples()
        .iter()
        .map(|t| t.example.first_user().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_ratio_convergence() {
    let composer = Composer::new(ComposerConfig::reproducible(42)).unwrap();
    let composition = composer
        .compose(
            three_sources(),
            &ratios(&[("a", 0.5), ("b", 0.3), ("c", 0.2)]),
            Some(100),
        )
        .unwrap();

    let counts = composition.corpus.category_counts();
    for (name, expected) in [("a", 50i64), ("b", 30), ("c", 20)] {
        let actual = counts.get(name).copied().unwrap_or(0) as i64;
        assert!((actual - expected).abs() <= 1, "{}: {}", name, actual);
    }
    assert_eq!(composition.corpus.len(), 100);
    assert_eq!(counts.values().sum::<usize>(), composition.corpus.len());
    assert_eq!(composition.stats.padded, 0);
    assert_eq!(composition.stats.total_shortfall(), 0);
}

#[test]
fn test_ratios_need_not_sum_to_one() {
    let composer = Composer::new(ComposerConfig::reproducible(9)).unwrap();
    let composition = composer
        .compose(
            three_sources(),
            &ratios(&[("a", 5.0), ("b", 3.0), ("c", 2.0)]),
            Some(100),
        )
        .unwrap();
    assert_eq!(composition.corpus.count_for("a"), 50);
    assert_eq!(composition.corpus.count_for("b"), 30);
    assert_eq!(composition.corpus.count_for("c"), 20);
}

#[test]
fn test_same_seed_same_corpus() {
    let composer = Composer::new(ComposerConfig::reproducible(1234)).unwrap();
    let r = ratios(&[("a", 0.5), ("b", 0.3), ("c", 0.2)]);
    let first = questions(&composer, three_sources(), &r);
    let second = questions(&composer, three_sources(), &r);
    assert_eq!(first, second);

    let other = Composer::new(ComposerConfig::reproducible(4321)).unwrap();
    assert_ne!(first, questions(&other, three_sources(), &r));
}

#[test]
fn test_shuffle_mixes_sources() {
    let composer = Composer::new(ComposerConfig::reproducible(77)).unwrap();
    let composition = composer
        .compose(three_sources(), &ratios(&[("a", 1.0), ("b", 1.0)]), Some(100))
        .unwrap();
    let head: Vec<&str> = composition
        .corpus
        .examples()
        .iter()
        .take(50)
        .map(|t| t.category.as_str())
        .collect();
    assert!(head.contains(&"a"));
    assert!(head.contains(&"b"));
}

#[test]
fn test_generator_sources() {
    let generator = QuestionGenerator::new(&SynthesizerConfig::default()).unwrap();
    let sources = vec![
        Source::generator(generator),
        Source::generator(CuratedSource::new(CuratedSet::General)),
        Source::generator(CuratedSource::new(CuratedSet::FeatureWalkthrough)),
    ];
    let r = ratios(&[
        (QUESTION_SOURCE_NAME, 0.8),
        ("general", 0.1),
        ("feature_walkthrough", 0.1),
    ]);

    let composer = Composer::new(ComposerConfig::reproducible(5)).unwrap();
    let composition = composer.compose(sources, &r, Some(200)).unwrap();

    assert_eq!(composition.corpus.len(), 200);
    assert_eq!(composition.corpus.count_for("general"), 20);
    assert_eq!(composition.corpus.count_for("feature_walkthrough"), 20);
    let stats = &composition.stats.sources[0];
    assert_eq!(stats.name, QUESTION_SOURCE_NAME);
    assert_eq!(stats.drawn, 160);
    // question examples are tagged with their own category, not the source name
    assert_eq!(composition.corpus.count_for(QUESTION_SOURCE_NAME), 0);
}

#[test]
fn test_generator_reproducible() {
    let build = || {
        let sources = vec![Source::generator(
            QuestionGenerator::new(&SynthesizerConfig::default()).unwrap(),
        )];
        Composer::new(ComposerConfig::reproducible(11))
            .unwrap()
            .compose(sources, &BTreeMap::new(), Some(50))
            .unwrap()
            .corpus
            .into_examples()
    };
    assert_eq!(build(), build());
}

#[test]
fn test_undersupplied_source_is_padded_within_ceiling() {
    let sources = vec![
        Source::examples("big", tagged("big", 100)),
        Source::examples("small", tagged("small", 5)),
    ];
    let composer = Composer::new(ComposerConfig::reproducible(3)).unwrap();
    let composition = composer
        .compose(sources, &ratios(&[("big", 0.5), ("small", 0.5)]), Some(40))
        .unwrap();

    let small = &composition.stats.sources[1];
    assert_eq!(small.requested, 20);
    assert_eq!(small.drawn, 5);
    assert_eq!(small.shortfall, 15);
    assert_eq!(composition.stats.padded, 10);
    assert_eq!(composition.stats.residual_shortfall, 5);
    assert_eq!(composition.corpus.len(), 35);
    assert!(!composition.stats.warnings().is_empty());
}

#[test]
fn test_shortfall_can_fail() {
    let sources = vec![Source::examples("small", tagged("small", 5))];
    let config = ComposerConfig {
        seed: Some(1),
        padding: PaddingPolicy::FailOnShortfall,
        ..Default::default()
    };
    let err = Composer::new(config)
        .unwrap()
        .compose(sources, &BTreeMap::new(), Some(10))
        .unwrap_err();
    assert!(matches!(err, ComposerError::Shortfall { requested: 10, available: 5 }));
}

#[test]
fn test_stats_serialize() {
    let composer = Composer::new(ComposerConfig::reproducible(8)).unwrap();
    let composition = composer
        .compose(three_sources(), &BTreeMap::new(), Some(30))
        .unwrap();
    let json = serde_json::to_value(&composition.stats).unwrap();
    assert_eq!(json["final_size"], 30);
    assert_eq!(json["seed"], 8);
    assert_eq!(json["sources"].as_array().map(|a| a.len()), Some(3));
}
