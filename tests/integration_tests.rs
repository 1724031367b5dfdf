//! Integration tests for sentence_textrank

use sentence_textrank::*;

/// Sample text for testing
const SAMPLE_TEXT: &str = r#"
Machine learning is a subset of artificial intelligence that provides systems
the ability to automatically learn and improve from experience without being explicitly
programmed. Machine learning focuses on the development of computer programs that can
access data and use it to learn for themselves.

The process of learning begins with observations or data, such as examples, direct
experience, or instruction, in order to look for patterns in data and make better
decisions in the future based on the examples that we provide. The primary aim is to
allow the computers to learn automatically without human intervention or assistance
and adjust actions accordingly!

Deep learning is a subset of machine learning that uses artificial neural networks
with representation learning. Can the learning be supervised, semi-supervised or
unsupervised? It can
"#;

const THREE: &str = "The cat sat. A dog ran fast. The cat and dog played.";

fn all_configs() -> Vec<EngineConfig> {
    let mut configs = Vec::new();
    for encoding in [Encoding::BagOfWords, Encoding::AsIs] {
        for distance in [Distance::Jaccard, Distance::Overlap] {
            for document_frequency in [DocumentFrequency::Substring, DocumentFrequency::ExactToken]
            {
                configs.push(
                    EngineConfig::default()
                        .with_encoding(encoding)
                        .with_distance(distance)
                        .with_document_frequency(document_frequency),
                );
            }
        }
    }
    configs
}

#[test]
fn test_full_pipeline() {
    // Segment
    let sentences = segment_sentences(SAMPLE_TEXT).unwrap();
    assert_eq!(sentences.len(), 6);
    // The dangling "It can" has no terminal punctuation.
    assert!(sentences.iter().all(|s| !s.text.contains("It can")));

    // Encode and build graph
    let stopwords = StopwordFilter::english();
    let encoded: Vec<Vec<String>> = sentences
        .iter()
        .map(|s| Encoding::AsIs.encode(&s.text, &stopwords))
        .collect();
    let graph = SimilarityGraph::build(&encoded, Distance::Jaccard);
    assert_eq!(graph.len(), 6);

    // Saliency
    let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
    let table = FrequencyTable::build(&texts, DocumentFrequency::Substring);
    let seed: Vec<f64> = texts.iter().map(|t| table.saliency(t)).collect();
    assert!(seed.iter().all(|s| s.is_finite() && *s >= 0.0));

    // Propagate
    let result = SaliencyPageRank::new().with_iterations(100).run(&graph, &seed).unwrap();
    assert_eq!(result.scores.len(), 6);
    assert_eq!(result.iterations, 100);

    // The engine must agree with the hand-wired pipeline.
    let mut engine = Engine::new(EngineConfig::default()).unwrap();
    engine.load(SAMPLE_TEXT).unwrap();
    let ranks = engine.ranks().unwrap();
    for (a, b) in ranks.scores.iter().zip(&result.scores) {
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn test_three_sentence_scenario() {
    let mut engine = Engine::new(EngineConfig::default()).unwrap();
    engine.load(THREE).unwrap();
    assert_eq!(engine.document().unwrap().len(), 3);

    let summary = engine.summarize_detailed(|_| 2).unwrap();
    assert_eq!(summary.len(), 2);
    assert!(summary.indices().windows(2).all(|w| w[0] < w[1]));

    let doc = engine.document().unwrap();
    let expected: Vec<&str> = summary
        .indices()
        .iter()
        .map(|&i| doc.sentences()[i].text.as_str())
        .collect();
    assert_eq!(summary.text(), expected.join(" "));
    assert_eq!(engine.summarize(|_| 2).unwrap(), summary.text());
}

#[test]
fn test_summary_keeps_captured_whitespace() {
    let mut engine = Engine::new(EngineConfig::default()).unwrap();
    engine.load(THREE).unwrap();
    // The second sentence keeps its leading space, so the join doubles it.
    assert_eq!(
        engine.summarize(|_| 2).unwrap(),
        "The cat sat.  A dog ran fast."
    );

    engine
        .load("\nMachine learning is great.\nDeep learning is deeper.")
        .unwrap();
    assert_eq!(
        engine.summarize(|_| 2).unwrap(),
        "\nMachine learning is great. \nDeep learning is deeper."
    );
}

#[test]
fn test_load_failure_scenario() {
    let mut engine = Engine::new(EngineConfig::default()).unwrap();
    assert_eq!(
        engine.load("no punctuation here"),
        Err(SummaryError::NoSentencesFound)
    );
    assert!(matches!(engine.state(), EngineState::Unloaded));
}

#[test]
fn test_isolated_pair_scenario() {
    for iterations in [1, 5, 100] {
        let config = EngineConfig::default()
            .with_encoding(Encoding::BagOfWords)
            .with_distance(Distance::Jaccard)
            .with_alpha(0.85)
            .with_iterations(iterations);
        let mut engine = Engine::new(config).unwrap();
        engine.load("Red apples grow.Blue whales swim.").unwrap();

        let ranks = engine.ranks().unwrap();
        assert_eq!(ranks.scores.len(), 2);
        for score in ranks.scores {
            assert!((score - 0.075).abs() < 1e-12);
        }
        assert_eq!(engine.summarize(|_| 1).unwrap(), "Red apples grow.");
    }
}

#[test]
fn test_graph_invariants_for_every_strategy() {
    for config in all_configs() {
        let mut engine = Engine::new(config.clone()).unwrap();
        engine.load(SAMPLE_TEXT).unwrap();
        let graph = engine.document().unwrap().graph();

        for i in 0..graph.len() {
            assert_eq!(graph.weight(i, i), 0.0, "{:?}", config);
            let sum = graph.row_sum(i);
            assert!(
                sum.abs() < 1e-9 || (sum - 1.0).abs() < 1e-9,
                "{:?}: row {} sums to {}",
                config,
                i,
                sum
            );
            assert!(graph.row(i).iter().all(|&w| w >= 0.0));
        }
    }
}

#[test]
fn test_selection_size_and_order_for_every_strategy() {
    for config in all_configs() {
        let mut engine = Engine::new(config).unwrap();
        engine.load(SAMPLE_TEXT).unwrap();
        let n = engine.document().unwrap().len();

        for k in [-1i64, 0, 1, 3, 6, 50] {
            let summary = engine.summarize_detailed(|_| k).unwrap();
            let expected = k.clamp(0, n as i64) as usize;
            assert_eq!(summary.len(), expected);
            assert!(summary.indices().windows(2).all(|w| w[0] < w[1]));

            let doc = engine.document().unwrap();
            for selected in &summary.sentences {
                assert_eq!(selected.text, doc.sentences()[selected.index].text);
            }
        }
    }
}

#[test]
fn test_summarize_is_idempotent() {
    let mut engine = Engine::new(EngineConfig::default()).unwrap();
    engine.load(SAMPLE_TEXT).unwrap();

    let first = engine.summarize(|_| 3).unwrap();
    for _ in 0..5 {
        assert_eq!(engine.summarize(|_| 3).unwrap(), first);
    }
}

#[test]
fn test_zero_iterations_ranks_by_saliency() {
    let mut engine = Engine::new(EngineConfig::default().with_iterations(0)).unwrap();
    engine.load(SAMPLE_TEXT).unwrap();

    let doc = engine.document().unwrap();
    let saliency = doc.saliency();
    assert_eq!(engine.ranks().unwrap().scores, saliency);

    // The single best sentence is the most salient one (earliest on ties).
    let mut best = 0;
    for (i, s) in saliency.iter().enumerate() {
        if *s > saliency[best] {
            best = i;
        }
    }
    let summary = engine.summarize_detailed(|_| 1).unwrap();
    assert_eq!(summary.indices(), vec![best]);
}

#[test]
fn test_alpha_zero_is_uniform() {
    let mut engine = Engine::new(EngineConfig::default().with_alpha(0.0)).unwrap();
    engine.load(SAMPLE_TEXT).unwrap();
    let ranks = engine.ranks().unwrap();
    let n = ranks.scores.len() as f64;
    for score in ranks.scores {
        assert!((score - 1.0 / n).abs() < 1e-12);
    }
    // All tied: the first k sentences win.
    let summary = engine.summarize_detailed(|_| 2).unwrap();
    assert_eq!(summary.indices(), vec![0, 1]);
}

#[test]
fn test_choose_k_receives_loaded_sentences() {
    let mut engine = Engine::new(EngineConfig::default()).unwrap();
    engine.load(THREE).unwrap();

    let mut seen = 0;
    engine
        .summarize(|sentences| {
            seen = sentences.len();
            1
        })
        .unwrap();
    assert_eq!(seen, 3);
}

#[test]
fn test_cancellation_from_another_thread() {
    let mut engine = Engine::new(EngineConfig::default().with_iterations(10_000)).unwrap();
    engine.load(SAMPLE_TEXT).unwrap();

    let token = CancellationToken::new();
    let remote = token.clone();
    std::thread::spawn(move || remote.cancel()).join().unwrap();

    let err = engine.summarize_cancellable(|_| 2, &token).unwrap_err();
    assert!(matches!(err, SummaryError::Cancelled { requested: 10_000, .. }));
}

#[test]
fn test_service_summarizes_page_fragments() {
    let fragments = [
        "Release notes",
        "The parser is faster now. Startup time dropped by half!",
        "Several crashes were fixed. Is the new cache enabled by default? Yes.",
    ];
    let content = collect_content(&fragments[..]);
    assert!(content.starts_with(" Release notes The parser"));

    let response = summarize_page(&content, &SummarizeOptions::default().with_max_sentences(2));
    assert_eq!(response.summary.matches(|c: char| c == '.' || c == '!' || c == '?').count(), 2);

    let reply = handle_message(
        r#"{"action":"summarizePage"}"#,
        &fragments[..],
        &SummarizeOptions::default(),
    )
    .unwrap();
    let response: SummarizeResponse = serde_json::from_str(&reply).unwrap();
    assert!(!response.summary.is_empty());
}
