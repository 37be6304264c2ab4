//! On-disk formats for dictionaries, registries and configuration.

#[cfg(test)]
mod tests {
    use gibberify_core::{
        CandidateTable, Config, DictionarySet, ForwardDictionary, GibberifyError, Orientation,
        ReverseDictionary, SyllableDictionary,
    };
    use std::fs;

    #[test]
    fn test_dictionary_bincode_and_json_formats() {
        let dir = tempfile::tempdir().unwrap();
        let forward: SyllableDictionary = ForwardDictionary::load_demo().into();
        let reverse: SyllableDictionary =
            ReverseDictionary::from_forward(&ForwardDictionary::load_demo()).into();

        let bin_path = dir.path().join("en-orc.bincode");
        forward.save_bincode(&bin_path).expect("Failed to save bincode");
        let loaded = SyllableDictionary::load_bincode(&bin_path).expect("Failed to load bincode");
        assert_eq!(loaded, forward);

        let json_path = dir.path().join("orc-en.json");
        reverse.save_json(&json_path).expect("Failed to save JSON");
        let loaded = SyllableDictionary::load_json(&json_path).expect("Failed to load JSON");
        assert_eq!(loaded, reverse);
        assert_eq!(loaded.orientation(), Orientation::Reverse);
    }

    #[test]
    fn test_registry_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        let forward: SyllableDictionary = ForwardDictionary::load_demo().into();
        let reverse: SyllableDictionary =
            ReverseDictionary::from_forward(&ForwardDictionary::load_demo()).into();
        forward.save_bincode(dir.path().join("en-orc.bincode")).unwrap();
        reverse.save_json(dir.path().join("orc-en.json")).unwrap();
        fs::write(dir.path().join("README.txt"), "not a dictionary").unwrap();

        let set = DictionarySet::load_dir(dir.path()).expect("Failed to load registry");
        assert_eq!(set.codes(), vec!["en-orc".to_string(), "orc-en".to_string()]);
        assert_eq!(set.get("en", "orc").unwrap(), &forward);
        assert_eq!(set.get("orc", "en").unwrap(), &reverse);
    }

    #[test]
    fn test_registry_rejects_bad_names() {
        let dir = tempfile::tempdir().unwrap();
        let forward: SyllableDictionary = ForwardDictionary::load_demo().into();
        forward.save_json(dir.path().join("orcish.json")).unwrap();

        match DictionarySet::load_dir(dir.path()) {
            Err(GibberifyError::InvalidDictionaryName(path)) => {
                assert!(path.ends_with("orcish.json"))
            }
            other => panic!("expected InvalidDictionaryName, got {:?}", other),
        }
    }

    #[test]
    fn test_registry_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            DictionarySet::load_dir(&missing),
            Err(GibberifyError::Io(_))
        ));
    }

    #[test]
    fn test_corrupt_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en-orc.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            SyllableDictionary::load_json(&path),
            Err(GibberifyError::Json(_))
        ));
    }

    #[test]
    fn test_candidate_table_from_json() {
        let table: CandidateTable =
            serde_json::from_str(r#"{"hel": ["grak", "grak", "muz"], "lo": ["og"]}"#).unwrap();
        let fd = ForwardDictionary::from_candidates(&table, Some(8));
        assert_eq!(fd.len(), 2);
        assert_eq!(fd.lookup("lo"), Some("og"));
        assert!(matches!(fd.lookup("hel"), Some("grak") | Some("muz")));
    }

    #[test]
    fn test_config_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gibberify.toml");
        let config = Config {
            seed: Some(2019),
            preserve_capitalization: true,
            collapse_spaces: false,
        };
        config.save_toml(&path).expect("Failed to save TOML config");
        let loaded = Config::load_toml(&path).expect("Failed to load TOML config");
        assert_eq!(loaded, config);
    }
}
