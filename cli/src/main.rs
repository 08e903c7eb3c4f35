//! blockrender CLI - rich-text block document renderer

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use blockrender::render::{BlockRenderers, ModifierRenderers};
use blockrender::{
    BlockKind, Blockrender, BlockrenderResult, BlocksRenderer, HtmlOptions, JsonFormat, Modifier,
    ParseOptions,
};

#[derive(Parser)]
#[command(name = "blockrender")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render rich-text block documents to HTML, text, and JSON", long_about = None)]
struct Cli {
    /// Input JSON document
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document to HTML
    Html {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Repair malformed nodes instead of failing
        #[arg(long, env = "BLOCKRENDER_LENIENT")]
        lenient: bool,

        /// Leave diagnostic comments out of the output
        #[arg(long)]
        no_markers: bool,

        /// Close void elements XHTML style
        #[arg(long)]
        xhtml: bool,

        /// Put each top-level block on its own line
        #[arg(long)]
        pretty: bool,

        /// Emit a different tag for a block kind or modifier (e.g. "quote=aside")
        #[arg(long = "tag", value_name = "KIND=TAG", value_parser = parse_tag_override)]
        tags: Vec<(String, String)>,
    },

    /// Render a document to a JSON element tree
    Json {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Repair malformed nodes instead of failing
        #[arg(long, env = "BLOCKRENDER_LENIENT")]
        lenient: bool,
    },

    /// Render a document to plain text
    Text {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Repair malformed nodes instead of failing
        #[arg(long, env = "BLOCKRENDER_LENIENT")]
        lenient: bool,
    },

    /// Show document statistics and unknown types
    Info {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Repair malformed nodes instead of failing
        #[arg(long, env = "BLOCKRENDER_LENIENT")]
        lenient: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Html {
            input,
            output,
            lenient,
            no_markers,
            xhtml,
            pretty,
            tags,
        }) => {
            let options = HtmlOptions::new()
                .with_markers(!no_markers)
                .with_xhtml(xhtml)
                .with_block_newlines(pretty);
            cmd_html(&input, output.as_deref(), lenient, options, &tags)
        }
        Some(Commands::Json {
            input,
            output,
            compact,
            lenient,
        }) => cmd_json(&input, output.as_deref(), compact, lenient),
        Some(Commands::Text {
            input,
            output,
            lenient,
        }) => cmd_text(&input, output.as_deref(), lenient),
        Some(Commands::Info {
            input,
            lenient,
            json,
        }) => cmd_info(&input, lenient, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: render to HTML if input is provided
            if let Some(input) = cli.input {
                cmd_html(&input, None, false, HtmlOptions::default(), &[])
            } else {
                println!("{}", "Usage: blockrender <FILE>".yellow());
                println!("       blockrender --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Parse a `KIND=TAG` pair.
fn parse_tag_override(s: &str) -> Result<(String, String), String> {
    let (kind, tag) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=TAG, got \"{}\"", s))?;
    let (kind, tag) = (kind.trim(), tag.trim());
    if kind.is_empty() || tag.is_empty() {
        return Err(format!("expected KIND=TAG, got \"{}\"", s));
    }
    if !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(format!("invalid tag name \"{}\"", tag));
    }
    Ok((kind.to_string(), tag.to_string()))
}

/// Build a renderer whose default renderers emit the given tag names.
fn renderer_with_tags(tags: &[(String, String)]) -> Result<BlocksRenderer, String> {
    let default_blocks = BlockRenderers::defaults();
    let default_modifiers = ModifierRenderers::defaults();
    let mut renderer = BlocksRenderer::new();

    for (key, tag) in tags {
        let tag = tag.clone();
        if let Ok(kind) = key.parse::<BlockKind>() {
            let base = default_blocks
                .get(kind.as_str())
                .cloned()
                .ok_or_else(|| format!("no default renderer for \"{}\"", key))?;
            log::debug!("Rendering {} as <{}>", kind, tag);
            renderer = renderer.with_block(kind, move |props, ctx| base(props, ctx).renamed(&tag));
        } else if let Ok(modifier) = key.parse::<Modifier>() {
            let base = default_modifiers
                .get(modifier.as_str())
                .cloned()
                .ok_or_else(|| format!("no default renderer for \"{}\"", key))?;
            log::debug!("Rendering {} as <{}>", modifier, tag);
            renderer =
                renderer.with_modifier(modifier, move |props, ctx| base(props, ctx).renamed(&tag));
        } else {
            return Err(format!("unknown block kind or modifier \"{}\"", key));
        }
    }

    Ok(renderer)
}

fn load(input: &Path, lenient: bool, builder: Blockrender) -> blockrender::Result<BlockrenderResult> {
    let options = if lenient {
        ParseOptions::new().lenient()
    } else {
        ParseOptions::new()
    };
    builder.with_parse_options(options).parse_file(input)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    lenient: bool,
    options: HtmlOptions,
    tags: &[(String, String)],
) -> Result<(), Box<dyn std::error::Error>> {
    let renderer = renderer_with_tags(tags)?;
    let builder = Blockrender::new()
        .with_renderer(renderer)
        .with_html_options(options);

    let html = load(input, lenient, builder)?.to_html()?;
    write_output(output, &html)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = load(input, lenient, Blockrender::new())?.to_json(format)?;
    write_output(output, &json)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = load(input, lenient, Blockrender::new())?.to_text()?;
    write_output(output, &text)
}

fn cmd_info(input: &Path, lenient: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = load(input, lenient, Blockrender::new())?;
    let result = parsed.render()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!(
        "{}: {}",
        "Top-level blocks".bold(),
        parsed.content().map_or(0, |c| c.len())
    );

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let stats = &result.stats;
    println!("{}: {}", "Elements".bold(), stats.element_count);
    println!("{}: {}", "Text runs".bold(), stats.text_count);
    println!("{}: {}", "Line breaks".bold(), stats.line_break_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    if result.has_diagnostics() {
        println!();
        println!("{}", "Unknown Types".yellow().bold());
        println!("{}", "─".repeat(40).dimmed());
        if !result.missing_block_types.is_empty() {
            println!(
                "{}: {}",
                "Blocks".bold(),
                result.missing_block_types.join(", ")
            );
        }
        if !result.missing_modifier_types.is_empty() {
            println!(
                "{}: {}",
                "Modifiers".bold(),
                result.missing_modifier_types.join(", ")
            );
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "blockrender".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Rich-text block document renderer");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/blockrender".dimmed()
    );
    println!("License: MIT");
}
