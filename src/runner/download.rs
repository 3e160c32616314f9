//! HTTP download for `@download`

use crate::error::{ExecutionError, FsError, GmakeError};
use std::fs::File;
use std::path::Path;

/// Fetch `url` with a GET request and write the body to `dst`.
///
/// A non-success status fails without creating `dst`.
pub fn download(url: &str, dst: &Path) -> Result<u64, GmakeError> {
    let failed = |reason: String| ExecutionError::Download {
        url: url.to_string(),
        reason,
    };

    let mut response = reqwest::blocking::get(url).map_err(|e| failed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(failed(format!("HTTP {}", status)).into());
    }

    let mut file = File::create(dst).map_err(FsError::io("create", dst))?;
    let written = response
        .copy_to(&mut file)
        .map_err(|e| failed(e.to_string()))?;
    file.sync_all().map_err(FsError::io("sync", dst))?;

    Ok(written)
}
