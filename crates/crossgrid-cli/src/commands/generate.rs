use crate::cli::{GenerateArgs, WordListFormat};
use crate::config::{AppConfig, build_config};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use crossgrid::core::io::render::{render_grid, render_hints};
use crossgrid::core::io::report::write_report;
use crossgrid::core::io::traits::WordListFile;
use crossgrid::core::io::wordlist::{CsvWordList, HintFile};
use crossgrid::core::models::entry::WordEntry;
use crossgrid::engine::progress::ProgressReporter;
use crossgrid::workflows::generate::{self, GenerationResult};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

pub fn run(args: GenerateArgs, quiet: bool) -> Result<()> {
    info!("Building configuration from defaults, file and CLI arguments...");
    let config = build_config(&args)?;

    info!("Loading word list from {:?}", &config.input_path);
    let entries = read_entries(&config)?;
    info!("Loaded {} word(s).", entries.len());

    let reporter = if quiet {
        ProgressReporter::new()
    } else {
        ProgressReporter::with_callback(CliProgressHandler::new().get_callback())
    };

    let result = generate::run(&entries, &config.core_config, &reporter)?;

    let skipped: Vec<&str> = result.skipped().map(|o| o.word.as_str()).collect();
    if !skipped.is_empty() {
        info!(
            "{} word(s) could not be placed: {}",
            skipped.len(),
            skipped.join(", ")
        );
    }

    if let Some(report_path) = &config.report_path {
        info!("Writing placement report to {:?}", report_path);
        save_report(report_path, &result)?;
    }

    if !result.is_valid && !config.allow_invalid {
        return Err(CliError::InvalidGrid);
    }

    write_puzzle(&config, &result, &entries)
}

fn read_entries(config: &AppConfig) -> Result<Vec<WordEntry>> {
    let entries = match config.input_format {
        WordListFormat::Txt => HintFile::read_from_path(&config.input_path),
        WordListFormat::Csv => CsvWordList::read_from_path(&config.input_path),
    };
    entries.map_err(|e| CliError::FileParsing {
        path: config.input_path.clone(),
        source: e.into(),
    })
}

fn save_report(path: &Path, result: &GenerationResult) -> Result<()> {
    let to_write_error = |source: anyhow::Error| CliError::FileWriting {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(|e| to_write_error(e.into()))?;
    write_report(&result.outcomes, BufWriter::new(file)).map_err(|e| to_write_error(e.into()))
}

fn write_puzzle(config: &AppConfig, result: &GenerationResult, entries: &[WordEntry]) -> Result<()> {
    let mut writer: Box<dyn Write> = match &config.output_path {
        Some(path) => {
            info!("Writing puzzle to {:?}", path);
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(io::stdout().lock()),
    };

    render_grid(&result.grid, config.style, &mut writer)?;
    writeln!(writer)?;
    render_hints(entries, &mut writer)?;
    writer.flush()?;

    if let Some(path) = &config.output_path {
        println!(
            "✓ Puzzle with {} of {} word(s) written to: {}",
            result.placed().count(),
            result.outcomes.len(),
            path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn generate_args(args: &[&str]) -> GenerateArgs {
        let mut argv = vec!["crossgrid", "generate"];
        argv.extend_from_slice(args);
        let Commands::Generate(args) = Cli::parse_from(argv).command;
        args
    }

    #[test]
    fn seeded_two_letter_words_render_grid_and_hints() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("words.txt");
        let output = dir.path().join("puzzle.txt");
        let report = dir.path().join("report.csv");
        fs::write(&input, "AB:first\nAC:second\n").unwrap();

        run(
            generate_args(&[
                "-i",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--report",
                report.to_str().unwrap(),
                "-n",
                "3",
                "--seed-first-word",
            ]),
            true,
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "A B #\nC # #\n# # #\n\nHints\n1. first\n2. second\n"
        );
        assert_eq!(
            fs::read_to_string(&report).unwrap(),
            "index,word,status,row,col,orientation\n\
             0,AB,placed,0,0,horizontal\n\
             1,AC,placed,0,0,vertical\n"
        );
    }

    #[test]
    fn invalid_grid_is_reported_unless_allowed() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("words.txt");
        let output = dir.path().join("puzzle.txt");
        fs::write(&input, "CAT:a pet\n").unwrap();

        let base = [
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-n",
            "3",
            "--seed-first-word",
        ];

        let result = run(generate_args(&base), true);
        assert!(matches!(result, Err(CliError::InvalidGrid)));
        assert!(!output.exists());

        let mut allowed = base.to_vec();
        allowed.push("--allow-invalid");
        run(generate_args(&allowed), true).unwrap();
        assert!(fs::read_to_string(&output).unwrap().starts_with("C A T\n"));
    }

    #[test]
    fn strict_policy_renders_an_empty_grid() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("words.csv");
        let output = dir.path().join("puzzle.txt");
        fs::write(&input, "word,hint\nCAT,a pet\nCAR,a vehicle\n").unwrap();

        run(
            generate_args(&[
                "-i",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "-n",
                "2",
                "--blank",
            ]),
            true,
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "# #\n# #\n\nHints\n1. a pet\n2. a vehicle\n"
        );
    }

    #[test]
    fn malformed_word_list_names_the_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("words.txt");
        fs::write(&input, "no separator here\n").unwrap();

        let result = run(generate_args(&["-i", input.to_str().unwrap()]), true);
        assert!(matches!(result, Err(CliError::FileParsing { path, .. }) if path == input));
    }

    #[test]
    fn zero_grid_size_surfaces_core_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("words.txt");
        fs::write(&input, "CAT:a pet\n").unwrap();

        let result = run(generate_args(&["-i", input.to_str().unwrap(), "-n", "0"]), true);
        assert!(matches!(result, Err(CliError::Core(_))));
    }

    #[test]
    fn unwritable_report_path_is_a_write_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("words.txt");
        let report = dir.path().join("missing").join("report.csv");
        fs::write(&input, "AB:first\n").unwrap();

        let result = run(
            generate_args(&[
                "-i",
                input.to_str().unwrap(),
                "--report",
                report.to_str().unwrap(),
                "-n",
                "3",
            ]),
            true,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Failed to write file"));
        assert!(matches!(err, CliError::FileWriting { path, .. } if path == report));
    }
}
