#![cfg(feature = "cli")]
use std::{env, fs::File};

use anyhow::{Result, bail};
use clap::{CommandFactory as _, Parser as _};
use rayon::iter::{IntoParallelRefIterator as _, ParallelIterator};

use trojanlint::{
    cli::{Args, Commands, print_report, read_config, write_default_config},
    error::Error,
    files::find_py_files,
    lint::lint_file,
    profile::Profile,
    tokenizer::python::PythonTokenizer,
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // load .env file if present

    // parse config from CLI args, environment variables and the `.trojanlint.toml` file.
    let args = Args::parse();
    match args.command {
        Some(Commands::Init) => {
            let path = write_default_config()?;
            println!("Default config was written to {}", path.display());
            println!("Exiting");
            return Ok(());
        }
        Some(Commands::Completions { shell, out }) => {
            let mut command = Args::command();
            let bin_name = command.get_name().to_string();
            match out {
                Some(dir) => {
                    clap_complete::generate_to(shell, &mut command, bin_name, dir)?;
                }
                None => {
                    clap_complete::generate(shell, &mut command, bin_name, &mut std::io::stdout());
                }
            }
            return Ok(());
        }
        None => {}
    }

    let config = read_config(args)?;

    // identify Python files to analyze
    let paths = find_py_files(
        &config.trojanlint.paths,
        &config.trojanlint.exclude,
        config.output.sort,
    )?;
    if paths.is_empty() {
        bail!("no Python file found, nothing to analyze");
    }

    // lint all the requested Python files
    let tokenizer = PythonTokenizer;
    let profile: Profile = config.trojanlint.profile.into();
    let keep_contents = !config.output.compact && !config.output.json;
    let reports = paths
        .par_iter()
        .filter_map(|p| {
            lint_file(&tokenizer, &profile, p, keep_contents)
                .map_err(Into::into)
                .transpose()
        })
        .collect::<Result<Vec<_>>>()?;

    // check if we should output to file or to stderr/stdout
    let mut output_file: Box<dyn std::io::Write> = match config.output.out {
        Some(path) => {
            let _ = miette::set_hook(Box::new(|_| {
                Box::new(
                    miette::MietteHandlerOpts::new()
                        .terminal_links(false)
                        .unicode(false)
                        .color(false)
                        .build(),
                )
            }));
            Box::new(
                File::options()
                    .truncate(true)
                    .create(true)
                    .write(true)
                    .open(&path)
                    .map_err(|err| Error::IOError {
                        path: path.clone(),
                        err,
                    })?,
            )
        }
        None => {
            if reports.is_empty() {
                Box::new(std::io::stdout())
            } else {
                Box::new(std::io::stderr())
            }
        }
    };

    // no hazard was found
    if reports.is_empty() {
        if config.output.json {
            writeln!(&mut output_file, "[]")?;
        } else {
            writeln!(&mut output_file, "No hazard found")?;
        }
        return Ok(());
    }

    // some hazards were found, output according to the desired format (json/text, pretty/compact)
    if config.output.json {
        if config.output.compact {
            writeln!(&mut output_file, "{}", serde_json::to_string(&reports)?)?;
        } else {
            writeln!(&mut output_file, "{}", serde_json::to_string_pretty(&reports)?)?;
        }
    } else {
        let cwd = dunce::canonicalize(env::current_dir()?)?;
        for report in reports {
            print_report(&mut output_file, &cwd, report, config.output.compact)?;
        }
    }
    std::process::exit(1); // indicate that there were findings
}
