//! Render command handler.
//!
//! Writes the playbook document to a file or stdout — the static emission
//! path for hosting the page without the built-in server.

use std::io::Write;

use crate::cli::args::RenderArgs;
use crate::error::BotbookError;
use crate::render::render_page;

/// Render the page and write it out.
///
/// # Errors
///
/// Returns an I/O error if the output file or stdout cannot be written.
pub fn run(args: &RenderArgs) -> Result<(), BotbookError> {
    let page = render_page();

    match &args.output {
        Some(path) => {
            std::fs::write(path, &page)?;
            eprintln!("wrote {} bytes to {}", page.len(), path.display());
        }
        None => {
            std::io::stdout().write_all(page.as_bytes())?;
        }
    }

    Ok(())
}
