//! Integration tests for CLI functionality

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    use clap::Parser;
    use number_array::cli::commands::run_session;
    use number_array::cli::{Cli, PersistentConfig};
    use number_array::repl::{ArrayState, LineSource};
    use number_array::sequence::LengthBounds;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["number-array"]);
        assert!(cli.config.is_none());
        assert!(cli.min_len.is_none());
        assert!(!cli.no_color);
        assert!(!cli.plain);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "number-array",
            "--min-len",
            "3",
            "--max-len",
            "7",
            "--no-color",
            "--plain",
            "-c",
            "/tmp/custom.json",
        ]);
        assert_eq!(cli.min_len, Some(3));
        assert_eq!(cli.max_len, Some(7));
        assert!(cli.no_color);
        assert!(cli.plain);
        assert_eq!(cli.config.unwrap().to_str().unwrap(), "/tmp/custom.json");
    }

    #[test]
    fn test_missing_config_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");
        let config = PersistentConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config, PersistentConfig::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let config = PersistentConfig {
            random_min_len: Some(4),
            random_max_len: Some(6),
            color: Some(false),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = PersistentConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.bounds().unwrap(), LengthBounds::new(4, 6).unwrap());
    }

    #[test]
    fn test_partial_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "random_max_len": 8 }"#).unwrap();

        let config = PersistentConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.random_max_len, Some(8));
        assert_eq!(config.bounds().unwrap(), LengthBounds::new(2, 8).unwrap());
    }

    #[test]
    fn test_malformed_config_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let err = PersistentConfig::load(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_requires_json_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        assert!(PersistentConfig::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_run_session_to_exit() {
        let input = LineSource::new(Cursor::new("1\n9, 8\n4\n7\n"));
        let mut output = Vec::new();
        run_session(input, &mut output, ArrayState::new(), false).unwrap();

        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Min number: 8"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_run_session_exhausted_is_error() {
        let input = LineSource::new(Cursor::new("1\n"));
        let result = run_session(input, Vec::new(), ArrayState::new(), false);
        assert!(result.is_err());
    }
}
