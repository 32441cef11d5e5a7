use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::{GenerateArgs, WordListFormat};
use crate::error::{CliError, Result};
use crossgrid::core::io::render::CellStyle;
use crossgrid::engine::config as core_config;
use crossgrid::engine::error::EngineError;
use std::path::Path;

pub fn build_config(args: &GenerateArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let grid_file = file_config.grid.take().unwrap_or_default();
    let grid_size = args
        .size
        .or(grid_file.size)
        .unwrap_or(defaults.grid_size);

    let placement_file = file_config.placement.take().unwrap_or_default();
    let policy = if args.seed_first_word {
        core_config::PlacementPolicy::SeedFirstWord
    } else {
        match placement_file.policy.as_deref() {
            Some(value) => parse_policy(value)?,
            None => defaults.policy,
        }
    };

    let output_file = file_config.output.take().unwrap_or_default();
    let style = if args.blank {
        CellStyle::Blank
    } else {
        match output_file.style.as_deref() {
            Some(value) => parse_style(value)?,
            None => defaults.style,
        }
    };

    let input_format = match args.format {
        Some(format) => format,
        None => infer_format(&args.input)?,
    };

    let core_config = core_config::GenerationConfigBuilder::new()
        .grid_size(grid_size)
        .policy(policy)
        .build()
        .map_err(EngineError::from)?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        input_format,
        output_path: args.output.clone(),
        report_path: args.report.clone(),
        style,
        allow_invalid: args.allow_invalid,
        core_config,
    })
}

fn parse_policy(value: &str) -> Result<core_config::PlacementPolicy> {
    value
        .parse::<core_config::PlacementPolicy>()
        .map_err(|e| EngineError::from(e).into())
}

fn parse_style(value: &str) -> Result<CellStyle> {
    match value.trim() {
        "solution" => Ok(CellStyle::Solution),
        "blank" => Ok(CellStyle::Blank),
        other => Err(CliError::Config(format!(
            "Invalid output style '{}'. Expected 'solution' or 'blank'.",
            other
        ))),
    }
}

fn infer_format(path: &Path) -> Result<WordListFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        None => Ok(WordListFormat::Txt),
        Some(ext) if ext.eq_ignore_ascii_case("txt") => Ok(WordListFormat::Txt),
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(WordListFormat::Csv),
        Some(ext) => Err(CliError::Argument(format!(
            "Cannot infer the word-list format from extension '.{}'. Pass --format txt or --format csv.",
            ext
        ))),
    }
}

fn apply_set_values(mut file_config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "grid.size" => {
                file_config.grid.get_or_insert_with(Default::default).size =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
            }
            "placement.policy" => {
                parse_policy(value_str)?;
                file_config
                    .placement
                    .get_or_insert_with(Default::default)
                    .policy = Some(value_str.to_string());
            }
            "output.style" => {
                parse_style(value_str)?;
                file_config.output.get_or_insert_with(Default::default).style =
                    Some(value_str.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(file_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use crossgrid::engine::config::{ConfigError, PlacementPolicy};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config_file(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("crossgrid.toml");
        fs::write(&path, content).unwrap();
        path
    }

    fn parse_args(extra: &[&str]) -> GenerateArgs {
        let mut args = vec!["crossgrid", "generate", "-i", "words.txt"];
        args.extend_from_slice(extra);
        match Cli::parse_from(args).command {
            Commands::Generate(args) => args,
        }
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let config = build_config(&parse_args(&[])).unwrap();
        assert_eq!(config.core_config.grid_size, 10);
        assert_eq!(config.core_config.policy, PlacementPolicy::Strict);
        assert_eq!(config.style, CellStyle::Solution);
        assert_eq!(config.input_format, WordListFormat::Txt);
        assert!(!config.allow_invalid);
        assert!(config.report_path.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
            [grid]
            size = 7
            [placement]
            policy = "seed-first-word"
            [output]
            style = "blank"
            "#,
        );
        let config = build_config(&parse_args(&["-c", path.to_str().unwrap()])).unwrap();
        assert_eq!(config.core_config.grid_size, 7);
        assert_eq!(config.core_config.policy, PlacementPolicy::SeedFirstWord);
        assert_eq!(config.style, CellStyle::Blank);
    }

    #[test]
    fn set_values_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "[grid]\nsize = 7\n");
        let config = build_config(&parse_args(&[
            "-c",
            path.to_str().unwrap(),
            "-S",
            "grid.size=15",
            "-S",
            "output.style=blank",
        ]))
        .unwrap();
        assert_eq!(config.core_config.grid_size, 15);
        assert_eq!(config.style, CellStyle::Blank);
    }

    #[test]
    fn flags_override_set_values() {
        let config = build_config(&parse_args(&[
            "-S",
            "grid.size=15",
            "-S",
            "placement.policy=strict",
            "-n",
            "4",
            "--seed-first-word",
        ]))
        .unwrap();
        assert_eq!(config.core_config.grid_size, 4);
        assert_eq!(config.core_config.policy, PlacementPolicy::SeedFirstWord);
    }

    #[test]
    fn malformed_set_value_is_rejected() {
        let result = build_config(&parse_args(&["-S", "grid.size"]));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("KEY=VALUE")));

        let result = build_config(&parse_args(&["-S", "grid.size=big"]));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("integer")));

        let result = build_config(&parse_args(&["-S", "grid.width=3"]));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("Unsupported")));
    }

    #[test]
    fn invalid_policy_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "[placement]\npolicy = \"random\"\n");
        let result = build_config(&parse_args(&["-c", path.to_str().unwrap()]));
        assert!(matches!(
            result,
            Err(CliError::Core(EngineError::Config(ConfigError::InvalidValue {
                parameter: "placement policy",
                ..
            })))
        ));
    }

    #[test]
    fn invalid_policy_in_set_value_is_a_core_config_error() {
        let err = build_config(&parse_args(&["-S", "placement.policy=greedy"])).unwrap_err();
        assert!(err.to_string().contains("greedy"));
        assert!(matches!(err, CliError::Core(EngineError::Config(_))));
    }

    #[test]
    fn format_is_inferred_from_extension() {
        let args = Cli::parse_from(["crossgrid", "generate", "-i", "list.CSV"]);
        let Commands::Generate(args) = args.command;
        assert_eq!(build_config(&args).unwrap().input_format, WordListFormat::Csv);

        let args = Cli::parse_from(["crossgrid", "generate", "-i", "list.json"]);
        let Commands::Generate(args) = args.command;
        assert!(matches!(build_config(&args), Err(CliError::Argument(_))));

        let args = Cli::parse_from(["crossgrid", "generate", "-i", "list.json", "-f", "csv"]);
        let Commands::Generate(args) = args.command;
        assert_eq!(build_config(&args).unwrap().input_format, WordListFormat::Csv);
    }
}
