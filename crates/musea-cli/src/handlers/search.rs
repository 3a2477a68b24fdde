//! One-shot search: a single render cycle printed to stdout.

use anyhow::Result;
use musea_core::PageState;

use crate::bootstrap::CliContext;
use crate::commands::ViewArgs;
use crate::error::CliError;
use crate::presentation::render_page;

/// Execute the search command.
pub async fn execute(
    ctx: &CliContext,
    query: String,
    page: u32,
    view: &ViewArgs,
    json: bool,
) -> Result<()> {
    let state = PageState::new(query)
        .with_page_size(view.per_page)
        .with_page(page)
        .map_err(CliError::from)?;

    let result = ctx.browse().load_page(&state, &view.filters()).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_page(&result));
    }
    Ok(())
}
