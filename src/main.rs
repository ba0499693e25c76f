//! mdi-svg CLI
//!
//! Usage:
//!   mdi-svg [OPTIONS] <ICON>...
//!
//! Options:
//!   -d, --icons-dir <DIR>   Directory containing the icon svg files
//!   -c, --config <FILE>     Configuration file (TOML format)
//!       --class <CLASS>     CSS class for the <svg> tag
//!   -s, --size <N>          Width and height in pixels [default: 24]
//!   -a, --attr <KEY=VALUE>  Extra attribute; an empty value removes it
//!   -v, --verbose           Log lookup details to stderr
//!   -h, --help              Print help

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use mdi_svg::{AttrValue, Attributes, IconConfig, IconError, IconRenderer, IconRequest};

#[derive(Parser)]
#[command(name = "mdi-svg")]
#[command(about = "Render Material Design Icons as inline <svg> markup")]
struct Cli {
    /// Icon names, with or without the "mdi-" prefix
    #[arg(required = true)]
    icons: Vec<String>,

    /// Directory containing the icon svg files
    #[arg(short = 'd', long)]
    icons_dir: Option<PathBuf>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSS class for the <svg> tag
    #[arg(long)]
    class: Option<String>,

    /// Width and height in pixels
    #[arg(short, long, default_value_t = mdi_svg::DEFAULT_SIZE)]
    size: u32,

    /// Extra attribute as KEY=VALUE; an empty VALUE removes the attribute
    #[arg(short, long = "attr", value_parser = parse_attr)]
    attrs: Vec<(String, String)>,

    /// Log lookup details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_attr(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

fn main() {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), IconError> {
    let mut config = match &cli.config {
        Some(path) => IconConfig::from_file(path)?,
        None => IconConfig::default(),
    };
    if let Some(dir) = &cli.icons_dir {
        config = config.with_icons_directory(dir);
    }

    let renderer = IconRenderer::new(config)?;

    let attributes: Attributes = cli
        .attrs
        .iter()
        .map(|(key, value)| {
            let value = if value.is_empty() {
                AttrValue::Absent
            } else {
                AttrValue::from(value.as_str())
            };
            (key.as_str(), value)
        })
        .collect();

    for icon in &cli.icons {
        let mut request = IconRequest::new(icon.as_str())
            .with_size(cli.size)
            .with_attributes(attributes.clone());
        if let Some(class) = &cli.class {
            request = request.with_class(class.as_str());
        }

        println!("{}", renderer.render_request(&request)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attr() {
        assert_eq!(
            parse_attr("title=I am a duck"),
            Ok(("title".to_string(), "I am a duck".to_string()))
        );
        assert_eq!(
            parse_attr("style=a=b"),
            Ok(("style".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_attr("role="), Ok(("role".to_string(), String::new())));
        assert!(parse_attr("role").is_err());
    }

    #[test]
    fn test_cli_parses_options() {
        let cli = Cli::try_parse_from([
            "mdi-svg", "-d", "/srv/icons", "--class", "icon", "-s", "32", "-a", "role=",
            "duck", "mdi-cat",
        ])
        .unwrap();
        assert_eq!(cli.icons, vec!["duck", "mdi-cat"]);
        assert_eq!(cli.size, 32);
        assert_eq!(cli.class.as_deref(), Some("icon"));
        assert_eq!(cli.attrs, vec![("role".to_string(), String::new())]);
    }
}
