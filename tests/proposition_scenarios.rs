use corrige::distance::{DistanceMetric, SoundexCode};
use corrige::engine::{EngineConfig, PropositionEngine};
use corrige::error::Result;
use corrige::glossary::Glossary;
use corrige::selector::SelectionMethod;

fn glossary() -> Result<Glossary> {
    Glossary::parse(
        "100 the\n50 that\n50 this\n40 there\n30 these\n20 those\n10 then\n5 than\n",
    )
}

fn every_metric() -> Vec<DistanceMetric> {
    vec![
        DistanceMetric::Null,
        DistanceMetric::Hamming,
        DistanceMetric::NGram { n: 2 },
        DistanceMetric::NGram { n: 3 },
        DistanceMetric::Levenshtein,
        DistanceMetric::soundex(),
        DistanceMetric::soundex_with(DistanceMetric::Hamming),
        DistanceMetric::Jaro { winkler: false },
        DistanceMetric::Jaro { winkler: true },
    ]
}

#[test]
fn test_teh_scenario_ties_resolve_by_glossary_order() -> Result<()> {
    let glossary = Glossary::parse("100 the\n50 that\n50 this\n")?;
    let config = EngineConfig::new(DistanceMetric::NGram { n: 2 })
        .with_selection(SelectionMethod::ExactTopK)
        .with_max_proposition(2);
    let engine = PropositionEngine::new(glossary, config)?;

    assert_eq!(engine.propose_one("teh"), vec!["the", "that"]);
    Ok(())
}

#[test]
fn test_glossary_words_are_returned_unchanged() -> Result<()> {
    let glossary = glossary()?;
    for metric in every_metric() {
        for selection in SelectionMethod::ALL {
            let config = EngineConfig::new(metric.clone()).with_selection(selection);
            let engine = PropositionEngine::new(glossary.clone(), config)?;
            for word in glossary.words() {
                assert_eq!(engine.propose_one(word), vec![word]);
            }
        }
    }
    Ok(())
}

#[test]
fn test_exact_top_k_returns_sorted_true_neighbours() -> Result<()> {
    let glossary = glossary()?;
    let metric = DistanceMetric::Levenshtein;

    for k in 0..=10 {
        let config = EngineConfig::new(metric.clone()).with_max_proposition(k);
        let engine = PropositionEngine::new(glossary.clone(), config)?;
        let props = engine.propose_one("thes");

        assert_eq!(props.len(), k.min(glossary.len()));

        let distances: Vec<f64> = props.iter().map(|w| metric.distance("thes", w)).collect();
        assert!(distances.windows(2).all(|pair| pair[0] <= pair[1]));

        // nothing left out is closer than the last word kept
        if let Some(&worst) = distances.last() {
            for word in glossary.words().filter(|w| !props.iter().any(|p| p == w)) {
                assert!(metric.distance("thes", word) >= worst);
            }
        }
    }
    Ok(())
}

#[test]
fn test_heuristic_selectors_are_bounded() -> Result<()> {
    let glossary = glossary()?;
    for metric in every_metric() {
        for selection in [
            SelectionMethod::RunningMinimum,
            SelectionMethod::BestPlusNearBest,
        ] {
            for k in [1, 3, 20] {
                let config = EngineConfig::new(metric.clone())
                    .with_selection(selection)
                    .with_max_proposition(k);
                let engine = PropositionEngine::new(glossary.clone(), config)?;
                let props = engine.propose_one("thoes");
                assert!(props.len() <= k.min(glossary.len()));
                assert!(props.iter().all(|w| glossary.contains(w)));
            }
        }
    }
    Ok(())
}

#[test]
fn test_null_metric_returns_glossary_members() -> Result<()> {
    let config = EngineConfig::new(DistanceMetric::Null).with_max_proposition(3);
    let engine = PropositionEngine::new(glossary()?, config)?;
    assert_eq!(engine.propose_one("xyz"), vec!["the", "that", "this"]);
    Ok(())
}

#[test]
fn test_degenerate_queries() -> Result<()> {
    let glossary = glossary()?;
    for metric in every_metric() {
        let config = EngineConfig::new(metric.clone()).with_max_proposition(2);
        let engine = PropositionEngine::new(glossary.clone(), config)?;

        for query in ["", "t", "?"] {
            let props = engine.propose_one(query);
            assert!(props.len() <= 2, "{} on {query:?}", metric.name());
        }
    }
    Ok(())
}

#[test]
fn test_batch_collapses_repeated_words() -> Result<()> {
    let engine = PropositionEngine::new(glossary()?, EngineConfig::default())?;
    let batch = engine.propose_batch(vec!["thes", "teh", "thes", "thes"]);

    // three occurrences of "thes" become one entry
    assert_eq!(batch.len(), 2);
    assert_eq!(batch["thes"], engine.propose_one("thes"));
    assert_eq!(batch["teh"], engine.propose_one("teh"));
    Ok(())
}

#[test]
fn test_soundex_codes_and_fast_path() -> Result<()> {
    assert_eq!(SoundexCode::encode("Robert").as_str(), "R163");
    assert_eq!(SoundexCode::encode("Rupert").as_str(), "R163");

    let glossary = Glossary::parse("9 Robert\n8 Rubin\n7 Rupert\n6 Robin\n")?;
    let engine = PropositionEngine::new(glossary, EngineConfig::new(DistanceMetric::soundex()))?;

    assert_eq!(engine.propose_one("Rubert"), vec!["Robert", "Rupert"]);
    assert_eq!(engine.propose_one("Rabin"), vec!["Rubin", "Robin"]);
    Ok(())
}

#[test]
fn test_jaro_winkler_prefers_shared_prefix() -> Result<()> {
    let glossary = Glossary::parse("1 martha\n1 amrtha\n")?;
    let config = EngineConfig::new(DistanceMetric::Jaro { winkler: true });
    let engine = PropositionEngine::new(glossary, config)?;

    assert_eq!(engine.propose_one("marhta")[0], "martha");
    Ok(())
}
