//! Persisting the scored games for the display page.

use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::data_fetcher::models::GamesDocument;
use crate::error::AppError;

/// Renders the document as two-space indented JSON, keys in field order.
pub fn render_games_document(document: &GamesDocument) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Overwrites `path` with the rendered document, creating the parent
/// directory if needed. Previous content is replaced without a backup.
pub async fn write_games_document(path: &str, document: &GamesDocument) -> Result<(), AppError> {
    let content = render_games_document(document)?;

    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).await?;
    }

    let mut file = fs::File::create(path).await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    debug!("Wrote {} bytes to {path}", content.len());
    Ok(())
}
