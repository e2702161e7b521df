use std::fmt;

use serde::{Deserialize, Serialize};

/// Script language the recorder emits.
///
/// Unknown names are kept verbatim in [`OutputFormat::Other`] and handed to
/// the recorder unchanged, so a newer recorder target can be used without a
/// rebuild.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OutputFormat {
    /// Synchronous Python (the recorder's default target).
    #[default]
    Python,
    /// Asyncio Python.
    PythonAsync,
    /// Node.js.
    Javascript,
    /// Java.
    Java,
    /// C#.
    Csharp,
    /// Any other target name.
    Other(String),
}

impl OutputFormat {
    /// Names offered to the user, in display order.
    pub const KNOWN: [&'static str; 5] = ["python", "python-async", "javascript", "java", "csharp"];

    /// Parse a format name. Never fails.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "python" => OutputFormat::Python,
            "python-async" => OutputFormat::PythonAsync,
            "javascript" => OutputFormat::Javascript,
            "java" => OutputFormat::Java,
            "csharp" => OutputFormat::Csharp,
            other => OutputFormat::Other(other.to_string()),
        }
    }

    /// Name as understood by the recorder's `--target` flag.
    pub fn name(&self) -> &str {
        match self {
            OutputFormat::Python => "python",
            OutputFormat::PythonAsync => "python-async",
            OutputFormat::Javascript => "javascript",
            OutputFormat::Java => "java",
            OutputFormat::Csharp => "csharp",
            OutputFormat::Other(name) => name,
        }
    }

    /// File extension for scripts in this format, `py` when unknown.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Python | OutputFormat::PythonAsync => "py",
            OutputFormat::Javascript => "js",
            OutputFormat::Java => "java",
            OutputFormat::Csharp => "cs",
            OutputFormat::Other(_) => "py",
        }
    }

    /// The `--target` flag, or `None` for the recorder's default target.
    pub fn target_flag(&self) -> Option<String> {
        match self {
            OutputFormat::Python => None,
            OutputFormat::PythonAsync => Some("--target=python-async".to_string()),
            other => Some(format!("--target={}", other.name())),
        }
    }
}

impl From<String> for OutputFormat {
    fn from(name: String) -> Self {
        OutputFormat::from_name(&name)
    }
}

impl From<&str> for OutputFormat {
    fn from(name: &str) -> Self {
        OutputFormat::from_name(name)
    }
}

impl From<OutputFormat> for String {
    fn from(format: OutputFormat) -> Self {
        format.name().to_string()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
