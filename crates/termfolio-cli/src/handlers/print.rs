use anyhow::Result;
use std::path::Path;

use crate::args::{ColorMode, PrintFormat, SectionArg};
use crate::presentation::presenters::build_page_view_model;
use crate::presentation::renderers::console::ConsoleRenderer;
use termfolio_core::Portfolio;

pub fn handle(
    content: Option<&Path>,
    section: Option<SectionArg>,
    format: PrintFormat,
    color: ColorMode,
) -> Result<()> {
    let (portfolio, _source) = Portfolio::resolve(content)?;
    let page = build_page_view_model(&portfolio);

    match format {
        PrintFormat::Json => {
            let json = match section {
                None => serde_json::to_string_pretty(&page)?,
                Some(SectionArg::Intro) => serde_json::to_string_pretty(&page.intro)?,
                Some(SectionArg::Work) => serde_json::to_string_pretty(&page.work)?,
                Some(SectionArg::Connect) => serde_json::to_string_pretty(&page.connect)?,
            };
            println!("{}", json);
        }
        PrintFormat::Text => {
            let renderer = ConsoleRenderer::stdout(color);
            let out = match section {
                None => renderer.render_page(&page),
                Some(arg) => renderer.render_section(&page, arg.resolve()),
            };
            print!("{}", out);
        }
    }

    Ok(())
}
