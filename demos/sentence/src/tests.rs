//! Tests for the `sentence` front end.

#[cfg(test)]
mod agent_count_tests {
    use crate::input::parse_agent_count;

    #[test]
    fn blank_means_recommended() {
        assert_eq!(parse_agent_count("", 35).unwrap(), 35);
        assert_eq!(parse_agent_count("  ", 35).unwrap(), 35);
    }

    #[test]
    fn explicit_count() {
        assert_eq!(parse_agent_count(" 400 ", 35).unwrap(), 400);
    }

    #[test]
    fn zero_rejected() {
        assert!(parse_agent_count("0", 35).is_err());
    }

    #[test]
    fn non_numeric_rejected() {
        let err = parse_agent_count("lots", 35).unwrap_err();
        assert!(err.to_string().contains("lots"), "got {err}");
        assert!(parse_agent_count("-3", 35).is_err());
    }
}

#[cfg(test)]
mod cli_tests {
    use clap::Parser;

    use crate::Cli;

    #[test]
    fn defaults_follow_run_config() {
        let cli = Cli::parse_from(["sentence", "HI"]);
        let config = cli.run_config();
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_steps, Some(100_000));
        assert_eq!(config.frame_interval, 1);
        assert_eq!(cli.cell_size, 1);
    }

    #[test]
    fn cell_size_flag_parsed() {
        let cli = Cli::parse_from(["sentence", "HI", "--cell-size", "3"]);
        assert_eq!(cli.cell_size, 3);
    }

    #[test]
    fn zero_max_steps_is_unbounded() {
        let cli = Cli::parse_from(["sentence", "HI", "--max-steps", "0", "--seed", "7"]);
        let config = cli.run_config();
        assert_eq!(config.max_steps, None);
        assert_eq!(config.seed, 7);
    }
}

#[cfg(test)]
mod config_tests {
    use std::io::Write;

    use sw_core::SwarmParams;

    use crate::load_params;

    #[test]
    fn partial_json_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        write!(file, r#"{{ "damping": 0.5, "max_step": 0.2 }}"#).unwrap();
        file.flush().unwrap();

        let params = load_params(file.path()).unwrap();
        assert_eq!(params.damping, 0.5);
        assert_eq!(params.max_step, 0.2);
        assert_eq!(params.closeness_threshold, SwarmParams::default().closeness_threshold);
    }

    #[test]
    fn malformed_json_is_error() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        write!(file, "{{ damping: ").unwrap();
        file.flush().unwrap();
        assert!(load_params(file.path()).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_params(std::path::Path::new("/nonexistent/params.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/params.json"));
    }
}
