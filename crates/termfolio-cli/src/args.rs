use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use termfolio_core::SectionId;

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(about = "A personal portfolio page, rendered in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, value_name = "PATH")]
    pub content: Option<PathBuf>,

    #[arg(long, default_value = "50", global = true, value_name = "MS")]
    pub tick_rate: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print the page to stdout instead of opening the viewer")]
    Print {
        #[arg(long, help = "Print a single section instead of the whole page")]
        section: Option<SectionArg>,

        #[arg(long, default_value = "text", help = "Output format")]
        format: PrintFormat,

        #[arg(long, default_value = "auto", help = "When to colorize output")]
        color: ColorMode,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SectionArg {
    Intro,
    Work,
    Connect,
}

impl SectionArg {
    pub fn resolve(&self) -> SectionId {
        match self {
            SectionArg::Intro => SectionId::Intro,
            SectionArg::Work => SectionId::Work,
            SectionArg::Connect => SectionId::Connect,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrintFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}
