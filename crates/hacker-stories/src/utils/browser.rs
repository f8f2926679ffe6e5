//! Browser utilities
//!
//! Opening story links in the system's default browser.

/// Open a URL in the system's default browser
///
/// Uses platform-specific commands:
/// - macOS: `open`
/// - Linux: `xdg-open`
/// - Windows: `cmd /C start`
pub async fn open_url(url: String) {
    #[cfg(target_os = "macos")]
    let result = tokio::process::Command::new("open").arg(&url).spawn();

    #[cfg(target_os = "windows")]
    let result = tokio::process::Command::new("cmd")
        .args(["/C", "start", "", &url])
        .spawn();

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let result = tokio::process::Command::new("xdg-open").arg(&url).spawn();

    match result {
        Ok(mut child) => {
            if let Err(e) = child.wait().await {
                log::error!("Browser process for {} failed: {}", url, e);
            }
        }
        Err(e) => log::error!("Failed to open {} in browser: {}", url, e),
    }
}
