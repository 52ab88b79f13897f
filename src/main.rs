use anyhow::Result;
use muxline::*;
use pico_args::Arguments;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug)]
struct Args {
    config: Option<PathBuf>,
    section: Option<String>,
    separator: Option<String>,
    help: bool,
}

impl Args {
    fn from_env() -> Result<Self> {
        let mut args = Arguments::from_env();

        Ok(Self {
            config: args
                .opt_value_from_str::<_, PathBuf>("--config")
                .unwrap_or(None)
                .or_else(|| env::var("MUXLINE_CONFIG").ok().map(PathBuf::from)),
            section: args.opt_value_from_str("--section").unwrap_or(None),
            separator: args
                .opt_value_from_str("--separator")
                .unwrap_or(None)
                .or_else(|| env::var("MUXLINE_SEPARATOR").ok()),
            help: args.contains("--help"),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::from_env()?;

    if args.help {
        print_help();
        return Ok(());
    }

    let mut config = config::load_config(args.config).await?;
    if let Some(separator) = args.separator {
        config.separator = Some(separator);
    }

    debug(&format!(
        "Loaded config: enabled={}, separator={:?}",
        config.enabled, config.separator
    ));

    let statusline = StatusLine::from_config(&config, Arc::new(EnvSessionSource));

    match args.section {
        Some(key) => println!("{}", statusline.render(&key).await),
        None => {
            let parts: Vec<String> = statusline
                .render_all()
                .await
                .into_iter()
                .map(|(_, text)| text)
                .filter(|text| !text.is_empty())
                .collect();
            println!("{}", parts.join("  "));
        }
    }

    Ok(())
}

fn print_help() {
    println!("muxline - status-line renderer for multiplexer sessions");
    println!();
    println!("USAGE:");
    println!("    muxline [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --config <FILE>        Custom config file path");
    println!("    --section <KEY>        Render a single section (a, b, c)");
    println!("    --separator <S>        Separator between producer outputs [default: \" | \"]");
    println!("    --help                 Show this help message");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    MUXLINE_CONFIG         Override config path");
    println!("    MUXLINE_SEPARATOR      Override producer separator");
    println!("    MUXLINE_SESSION        Active session name supplied by the host");
    println!("    MUXLINE_DEBUG          Enable debug logging");
}
