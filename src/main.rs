use anyhow::Context;
use clap::{Parser, Subcommand};

mod conf;
mod defaults;
mod spec;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "fluentbit-confgen")]
#[command(about = "Fluent Bit config generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document spec (doc.json) into agent config text.
    Render {
        #[arg(long)]
        doc: String,

        #[arg(short = 'o', long)]
        out: String,
    },

    /// Write a built-in default document (agent pipeline, or the settings
    /// block with --settings).
    Defaults {
        #[arg(long)]
        settings: bool,

        #[arg(short = 'o', long)]
        out: String,
    },

    /// Parse a rendered config file and report its shape.
    Check { file: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Render { doc, out } => {
            // 1) Parse + validate doc.json.
            let doc_spec: spec::DocSpec = serde_json::from_str(
                &std::fs::read_to_string(&doc).with_context(|| format!("read doc file {}", doc))?,
            )
            .with_context(|| format!("parse doc file {}", doc))?;
            let document = doc_spec.validate_and_build()?;

            // 2) Render.
            let text = conf::render(&document)?;
            std::fs::write(&out, text).with_context(|| format!("write {}", out))?;
            println!("Wrote {}", out);
        }

        Commands::Defaults { settings, out } => {
            let document = if settings {
                defaults::settings_document()
            } else {
                defaults::agent_document()
            };
            let text = conf::render(&document)?;
            std::fs::write(&out, text).with_context(|| format!("write {}", out))?;
            println!("Wrote {}", out);
        }

        Commands::Check { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("read config file {}", file))?;
            let document = conf::parse(&text).with_context(|| format!("check {}", file))?;

            match &document {
                conf::ConfigDocument::Sections(sections) => {
                    println!("{}: {} section(s)", file, sections.len());
                    for section in sections {
                        println!(
                            "  [{}] {} directive(s)",
                            section.name,
                            section.directives.len()
                        );
                    }
                }
                conf::ConfigDocument::Bare(directives) => {
                    println!("{}: bare settings, {} directive(s)", file, directives.len());
                }
            }
        }
    }

    Ok(())
}
