//! 処理後のファイルを既定のアプリで開く

use crate::error::{AddressFinderError, Result};
use std::path::Path;
use std::process::Command;

pub fn open_file(path: &Path) -> Result<()> {
    #[cfg(windows)]
    let status = Command::new("cmd")
        .args(["/c", "start", ""])
        .arg(path)
        .status();

    #[cfg(target_os = "macos")]
    let status = Command::new("open").arg(path).status();

    #[cfg(all(unix, not(target_os = "macos")))]
    let status = Command::new("xdg-open").arg(path).status();

    let status =
        status.map_err(|e| AddressFinderError::Launch(format!("{}: {}", path.display(), e)))?;
    if !status.success() {
        return Err(AddressFinderError::Launch(format!(
            "{} (code {:?})",
            path.display(),
            status.code()
        )));
    }
    Ok(())
}
