use corrige::distance::DistanceMetric;
use corrige::engine::{EngineConfig, PropositionEngine, SoundexIndexSource};
use corrige::error::{CorrigeError, Result};
use corrige::glossary::Glossary;
use corrige::soundex_index::SoundexIndex;
use corrige::storage::{FileStorage, Storage};
use tempfile::TempDir;

fn glossary() -> Result<Glossary> {
    Glossary::parse("9 Robert\n8 Rubin\n7 Rupert\n6 Ashcraft\n")
}

fn load_config(name: &str) -> EngineConfig {
    EngineConfig::new(DistanceMetric::soundex()).with_soundex_index(SoundexIndexSource::Load {
        name: name.to_string(),
    })
}

#[test]
fn test_index_survives_a_restart() -> Result<()> {
    let temp_dir = TempDir::new()?;

    // "First run": build and persist
    {
        let storage = FileStorage::new(temp_dir.path())?;
        SoundexIndex::build(&glossary()?).save(&storage, "soundex.idx")?;
    }

    // "Restart": load instead of building
    let storage = FileStorage::new(temp_dir.path())?;
    assert_eq!(storage.list_files()?, vec!["soundex.idx"]);

    let engine = PropositionEngine::with_storage(glossary()?, load_config("soundex.idx"), &storage)?;
    assert_eq!(engine.soundex_index(), Some(&SoundexIndex::build(&glossary()?)));
    assert_eq!(engine.propose_one("Rubert"), vec!["Robert", "Rupert"]);
    Ok(())
}

#[test]
fn test_missing_index_fails_without_fallback() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = FileStorage::new(temp_dir.path())?;

    let result = PropositionEngine::with_storage(glossary()?, load_config("soundex.idx"), &storage);
    assert!(matches!(result, Err(CorrigeError::Storage(_))));
    assert!(!storage.file_exists("soundex.idx"));
    Ok(())
}

#[test]
fn test_corrupt_index_fails_without_fallback() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = FileStorage::new(temp_dir.path())?;
    storage.write_all("soundex.idx", b"\x00\x01garbage")?;

    let result = PropositionEngine::with_storage(glossary()?, load_config("soundex.idx"), &storage);
    assert!(matches!(result, Err(CorrigeError::Index(_))));
    Ok(())
}

#[test]
fn test_load_or_build_writes_the_index_once() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = FileStorage::new(temp_dir.path())?;
    let config = EngineConfig::new(DistanceMetric::soundex()).with_soundex_index(
        SoundexIndexSource::LoadOrBuild {
            name: "cached.idx".to_string(),
        },
    );

    let first = PropositionEngine::with_storage(glossary()?, config.clone(), &storage)?;
    assert!(storage.file_exists("cached.idx"));

    let second = PropositionEngine::with_storage(glossary()?, load_config("cached.idx"), &storage)?;
    assert_eq!(first.soundex_index(), second.soundex_index());
    Ok(())
}

#[test]
fn test_non_soundex_metric_ignores_index_source() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = FileStorage::new(temp_dir.path())?;

    let config = load_config("absent.idx").with_selection(Default::default());
    let config = EngineConfig {
        metric: DistanceMetric::Levenshtein,
        ..config
    };
    let engine = PropositionEngine::with_storage(glossary()?, config, &storage)?;
    assert!(engine.soundex_index().is_none());
    assert_eq!(engine.propose_one("Robin")[0], "Rubin");
    Ok(())
}
