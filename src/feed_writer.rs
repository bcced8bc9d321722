use crate::data_fetcher::models::HighlightEntry;
use crate::error::AppError;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Writes the ranked feed as a pretty-printed JSON array.
///
/// Creates the parent directory when missing and replaces any previous file
/// completely; nothing from an earlier run is merged in. The new content goes
/// to a sibling `.json.tmp` file first and is renamed over the target.
pub async fn write_feed(path: &str, entries: &[HighlightEntry]) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(entries)?;

    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::feed_write(path, e))?;
    }

    // Written next to the target and swapped in, so a failed write keeps the old feed
    let tmp = Path::new(path).with_extension("json.tmp");
    if let Err(e) = write_and_swap(&tmp, Path::new(path), json.as_bytes()).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(AppError::feed_write(path, e));
    }

    debug!("Wrote {} bytes to {path}", json.len());
    Ok(())
}

async fn write_and_swap(tmp: &Path, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(tmp).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    drop(file);
    fs::rename(tmp, target).await
}
