//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, PowerShell and
//! elvish.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::CalplanError;

/// Generate the completion script for the named shell.
///
/// # Errors
///
/// Returns `CalplanError::Config` if the shell name is unknown.
pub fn completions(shell_name: &str) -> Result<String, CalplanError> {
    let shell = shell_from_str(shell_name).ok_or_else(|| {
        CalplanError::Config(format!(
            "unknown shell '{shell_name}' (expected bash, zsh, fish, powershell or elvish)"
        ))
    })?;

    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "calplan", &mut buf);
    String::from_utf8(buf).map_err(|e| CalplanError::Config(format!("UTF-8 error: {e}")))
}

/// Get shell from string name.
fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_shells() {
        for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
            assert!(completions(shell).is_ok(), "shell {shell} should generate");
        }
    }

    #[test]
    fn test_unknown_shell_is_error() {
        let err = completions("tcsh").unwrap_err();
        assert!(err.to_string().contains("unknown shell 'tcsh'"));
    }

    #[test]
    fn test_script_mentions_subcommands() {
        let script = completions("bash").unwrap();
        assert!(script.contains("render"));
        assert!(script.contains("check"));
    }
}
