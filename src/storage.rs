//! The artifact sink.
//!
//! One invoice, one file. Names carry the order id plus an epoch-millis
//! component and files are opened with `create_new`, so concurrent renders
//! of the same order never collide on a path.

use chrono::Utc;
use std::io::ErrorKind;
use std::path::Path;
use tokio::io::AsyncWriteExt;

const CREATE_ATTEMPTS: i64 = 8;

/// Restricts the order id to filesystem-safe characters.
fn sanitize_id(id: &str) -> String {
    let cleaned: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect();
    if cleaned.is_empty() { "unknown".to_string() } else { cleaned }
}

pub fn artifact_name(order_id: &str, epoch_millis: i64) -> String {
    format!("invoice-{}-{}.pdf", sanitize_id(order_id), epoch_millis)
}

/// Writes the finished document under a unique name and returns the public
/// reference. A millisecond collision bumps the timestamp component and
/// retries; a failed write removes the partial file before surfacing the
/// error, so no partial artifact is ever referenced.
pub async fn store(
    output_dir: &Path,
    public_prefix: &str,
    order_id: &str,
    bytes: &[u8],
) -> Result<String, std::io::Error> {
    tokio::fs::create_dir_all(output_dir).await?;

    let base_millis = Utc::now().timestamp_millis();
    for attempt in 0..CREATE_ATTEMPTS {
        let name = artifact_name(order_id, base_millis + attempt);
        let path = output_dir.join(&name);
        let open = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await;
        match open {
            Ok(mut file) => {
                if let Err(e) = write_all(&mut file, bytes).await {
                    drop(file);
                    let _ = tokio::fs::remove_file(&path).await;
                    return Err(e);
                }
                log::info!("stored invoice artifact at {}", path.display());
                return Ok(format!("{}/{}", public_prefix.trim_end_matches('/'), name));
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        }
    }
    Err(std::io::Error::new(
        ErrorKind::AlreadyExists,
        format!("could not allocate a unique artifact name for order {}", order_id),
    ))
}

async fn write_all(file: &mut tokio::fs::File, bytes: &[u8]) -> Result<(), std::io::Error> {
    file.write_all(bytes).await?;
    file.flush().await
}
