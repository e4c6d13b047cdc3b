use std::process::Command;

/// Open the search URL in the system browser.
///
/// Called after the TUI has been torn down, so stderr is safe to write.
/// Returns the exit code to propagate (`0` when the opener launched).
pub fn open_in_browser(url: &str) -> i32 {
    let (program, args) = opener_command(url);

    let status = Command::new(program)
        .args(&args)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status();

    match status {
        Ok(s) if s.success() => 0,
        Ok(s) => {
            eprintln!("Browser opener '{program}' exited with {s}");
            eprintln!("Open the search manually:");
            eprintln!("  {url}");
            s.code().unwrap_or(1)
        }
        Err(e) => {
            eprintln!("Failed to launch '{program}': {e}");
            eprintln!("Open the search manually:");
            eprintln!("  {url}");
            1
        }
    }
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    ("open", vec![url.to_string()])
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    ("cmd", vec!["/C".into(), "start".into(), "".into(), url.to_string()])
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    ("xdg-open", vec![url.to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opener_command_carries_url() {
        let url = "https://www.google.com/travel/flights/search?tfs=abc";
        let (_, args) = opener_command(url);
        assert_eq!(args.last().map(String::as_str), Some(url));
    }

    #[test]
    fn test_opener_command_names_platform_opener() {
        let (program, _) = opener_command("https://example.com");
        assert!(["open", "cmd", "xdg-open"].contains(&program));
    }
}
