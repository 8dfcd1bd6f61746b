mod debug_report;

use ngimete::{Config, Content, Layout, Pipeline, Representation, ScriptMode};
use std::io::{self, IsTerminal, Read};

const LOG_ENV: &str = "NGIMETE_LOG";
const DEFAULT_SHOW: &str = "ortho,script,ipa";

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut pipeline_config = Config::default();
    if let Some(templates) = config.templates {
        pipeline_config = pipeline_config.with_templates(templates);
    }
    let pipeline = match Pipeline::new(pipeline_config) {
        Ok(pipeline) => pipeline,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    if config.trace {
        for line in config.input.trim().lines().filter(|line| !line.trim().is_empty()) {
            debug_report::print_trace(&pipeline.trace(line), config.color);
        }
        return;
    }

    let content = Content::with_pipeline(&config.input, &pipeline);
    println!("{}", content.render(&config.show, config.layout));
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

struct CliConfig {
    input: String,
    show: Vec<Representation>,
    layout: Layout,
    templates: Option<Vec<String>>,
    trace: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut mode = ScriptMode::default();
    let mut layout = Layout::default();
    let mut show = DEFAULT_SHOW.to_string();
    let mut templates: Option<Vec<String>> = None;
    let mut trace = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("ngimete {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--trace" => trace = true,
            "--mode" => {
                let value = value_for(&flag, inline, &mut args)?;
                mode = value.parse().map_err(|err| format!("error: {err} (expected separate or merged)"))?;
            }
            "--layout" => {
                let value = value_for(&flag, inline, &mut args)?;
                layout = value.parse().map_err(|err| format!("error: {err} (expected sequential or grouped)"))?;
            }
            "--show" => show = value_for(&flag, inline, &mut args)?,
            "--templates" => {
                let value = value_for(&flag, inline, &mut args)?;
                let list: Vec<String> = value.split_whitespace().map(str::to_string).collect();
                if list.is_empty() {
                    return Err("error: --templates expects at least one template".to_string());
                }
                templates = Some(list);
            }
            "--input" | "-i" => {
                let value = value_for(&flag, inline, &mut args)?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, show: parse_show(&show, mode)?, layout, templates, trace, color })
}

fn value_for(
    flag: &str,
    inline: Option<String>,
    args: &mut impl Iterator<Item = String>,
) -> Result<String, String> {
    inline.or_else(|| args.next()).ok_or_else(|| format!("error: {flag} expects a value"))
}

/// Comma list of representations; a bare `script` follows `--mode`.
fn parse_show(list: &str, mode: ScriptMode) -> Result<Vec<Representation>, String> {
    let show = list
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| match item {
            "script" | "s" => Ok(Representation::Script(mode)),
            other => other.parse::<Representation>().map_err(|err| format!("error: {err} in --show")),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if show.is_empty() {
        return Err("error: --show selects nothing".to_string());
    }
    Ok(show)
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "ngimete {version}

Orthography, IPA transcription and featural script for Ngimete text.

Usage:
  ngimete [OPTIONS] [--] <text...>
  ngimete [OPTIONS] --input <text>

Options:
  -i, --input <text>         Text to process. If omitted, reads remaining args
                             or stdin when no args are provided.
  --mode <mode>              Script mode for `script`: separate | merged.
                             Default: merged
  --show <list>              Comma list of ortho, script, separate, merged, ipa.
                             Default: {default_show}
  --layout <layout>          sequential (one block per representation) or
                             grouped (one block per line). Default: sequential
  --templates <list>         Whitespace-separated syllable templates replacing
                             the built-in ones.
  --trace                    Print every transcription stage of each line.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}                Log filter (tracing EnvFilter syntax). Default: warn

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments, invalid templates or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        default_show = DEFAULT_SHOW,
        log_env = LOG_ENV,
    )
}
