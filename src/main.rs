use clap::CommandFactory;
use colored::*;
use env_logger::{Builder, Env, Target};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::fs;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use texthl::cli::MatchArgs;
use texthl::output::{formatter_for, RenderOptions};
use texthl::processor::{byte_matcher, highlight_file, highlight_reader};
use texthl::{
    find_matches, Cli, Commands, Config, LineMatch, OutputFormat, Parser,
    Result as TexthlResult, TexthlError,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = setup_logging(&cli) {
        eprintln!("{}", e.to_string().red());
        return ExitCode::from(2);
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::from(2)
        }
    }
}

/// Returns whether anything matched. Errors, including inputs that could
/// not be read, exit with status 2.
fn run(cli: &Cli) -> TexthlResult<bool> {
    let config = Config::load(cli.config.as_deref())?;
    let color = cli.color.unwrap_or(config.display.color);
    colored::control::set_override(color.enabled());
    info!("Running {:?}", cli.command);

    match &cli.command {
        Commands::Match {
            content,
            query,
            matching,
            offsets,
        } => {
            let mut options = matching.apply(config.matching);
            if let Some(unit) = offsets {
                options.offset_unit = *unit;
            }
            let ranges = find_matches(content, query, &options);
            println!("{}", serde_json::to_string(&ranges)?);
            Ok(true)
        }
        Commands::Search {
            query,
            files,
            matching,
            format,
            line_numbers,
            only_matching,
            summary,
        } => {
            let render = RenderOptions {
                line_numbers: *line_numbers || config.display.line_numbers,
                show_path: files.len() > 1,
                only_matching: *only_matching || config.display.only_matching,
                color: color.enabled(),
            };
            let format = format.unwrap_or(config.display.format);
            search(
                &config,
                query,
                files,
                matching,
                format,
                render,
                *summary || config.display.show_summary,
            )
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "texthl", &mut io::stdout());
            Ok(true)
        }
    }
}

fn search(
    config: &Config,
    query: &str,
    files: &[PathBuf],
    matching: &MatchArgs,
    format: OutputFormat,
    render: RenderOptions,
    summary: bool,
) -> TexthlResult<bool> {
    let start_time = Instant::now();
    let matcher = byte_matcher(query, matching.apply(config.matching));
    if matcher.is_empty() {
        warn!("Query {query:?} has no tokens, nothing will be highlighted");
    }

    let mut failed = 0;
    let matches: Vec<LineMatch> = if files.is_empty() {
        let stdin = io::stdin();
        highlight_reader(BufReader::new(stdin.lock()), Path::new("-"), &matcher)?
    } else {
        let results: Vec<_> = files
            .par_iter()
            .map(|path| highlight_file(path, &matcher, &config.input))
            .collect();

        let mut matches = Vec::new();
        for result in results {
            match result {
                Ok(found) => matches.extend(found),
                Err(TexthlError::BinaryFile(path)) => debug!("Skipped {}", path.display()),
                Err(e) => {
                    eprintln!("{}", e.to_string().red());
                    failed += 1;
                }
            }
        }
        matches
    };

    let formatter = formatter_for(format, render);
    let mut stdout = io::stdout().lock();
    stdout.write_all(formatter.format(&matches).as_bytes())?;
    stdout.flush()?;

    if summary {
        let file_count = matches
            .iter()
            .map(|m| &m.path)
            .collect::<std::collections::HashSet<_>>()
            .len();
        eprintln!(
            "{} {} matching line(s) in {} file(s) ({:.2}ms)",
            "Found".green(),
            matches.len(),
            file_count,
            start_time.elapsed().as_secs_f64() * 1000.0
        );
    }
    debug!("Rendered {} line(s) as {}", matches.len(), format);

    // Unreadable inputs fail the run even when other inputs matched.
    if failed > 0 {
        return Err(TexthlError::InputsFailed {
            failed,
            total: files.len(),
        });
    }
    Ok(!matches.is_empty())
}

fn setup_logging(cli: &Cli) -> TexthlResult<()> {
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    if let Some(log_path) = &cli.log {
        if let Some(parent_dir) = log_path.parent() {
            if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
                fs::create_dir_all(parent_dir)?;
            }
        }
        let log_file = fs::File::create(log_path)?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| TexthlError::Logger(e.to_string()))?;
    Ok(())
}
