//! Detail view for a single artwork.

use anyhow::Result;
use musea_core::{ArtworkId, FetchOutcome};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_detail;

/// Execute the show command.
///
/// Unlike the page views, a failed fetch here is an error: there is
/// nothing else to render.
pub async fn execute(ctx: &CliContext, id: ArtworkId, json: bool) -> Result<()> {
    let detail = match ctx.browse().fetch_detail(id).await {
        FetchOutcome::Loaded(detail) => detail,
        FetchOutcome::Failed(failure) => return Err(CliError::from(failure).into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        print!("{}", render_detail(&detail, ctx.provider));
    }
    Ok(())
}
