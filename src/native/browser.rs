//! Opens profile links in the system browser

use std::io;
use std::process::Command;

/// Platform command that hands a URL to the default browser
fn opener(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    }
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(url);
        cmd
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// Open `url` in a new browser window or tab. Does not wait for the browser.
pub fn open_url(url: &str) -> io::Result<()> {
    if url.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty profile URL"));
    }

    opener(url).spawn()?;
    Ok(())
}
