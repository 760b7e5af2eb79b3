//! Terminal output formatting for the aidocs CLI.
//!
//! Provides consistent, colored output using the [`console`] crate.

use std::error::Error;
use std::path::Path;

use console::style;

/// Print a bold cyan header with an underline separator.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.len())).dim());
}

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// Print a warning message prefixed with yellow `[WARN]`.
pub fn print_warning(text: &str) {
    println!("{} {}", style("[WARN]").yellow().bold(), text);
}

/// Print an error message prefixed with red `[ERROR]`.
pub fn print_error(text: &str) {
    println!("{} {}", style("[ERROR]").red().bold(), text);
}

/// Print a kept-as-is message prefixed with dim `[SKIP]`.
pub fn print_skip(text: &str) {
    println!("{} {}", style("[SKIP]").yellow().dim(), text);
}

/// Print a progress step indicator like `[1/3] Writing documents...`.
pub fn print_step(step: u32, total: u32, text: &str) {
    println!(
        "{} {}",
        style(format!("[{step}/{total}]")).dim(),
        text
    );
}

/// Print a key-value pair with dimmed key formatting.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// `path` relative to `base` for display, or unchanged if it is not below `base`.
pub fn relative<'a>(path: &'a Path, base: &Path) -> &'a Path {
    path.strip_prefix(base).unwrap_or(path)
}

/// An error and all of its sources, joined with `": "`.
pub fn error_chain(err: &dyn Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use aidocs_core::error::AiDocsError;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_error_chain_includes_source() {
        let err = AiDocsError::PathNotWritable {
            path: PathBuf::from("/ro/README.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(
            error_chain(&err),
            "path not writable: /ro/README.md: permission denied"
        );
    }

    #[test]
    fn test_relative_strips_base() {
        let base = Path::new("/tmp/proj");
        assert_eq!(
            relative(Path::new("/tmp/proj/docs/a.md"), base),
            Path::new("docs/a.md")
        );
        assert_eq!(relative(Path::new("/elsewhere"), base), Path::new("/elsewhere"));
    }
}
