use colored::Colorize;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use thiserror::Error;

// =============================================================================
// Milestone 1: Receivers
// =============================================================================

pub trait FileSystem {
    fn open_file(&self) -> String;
    fn write_file(&self) -> String;
    fn close_file(&self) -> String;
}

pub struct UnixFileSystem;

impl FileSystem for UnixFileSystem {
    fn open_file(&self) -> String {
        "Opening file in unix OS".to_string()
    }

    fn write_file(&self) -> String {
        "Writing file in unix OS".to_string()
    }

    fn close_file(&self) -> String {
        "Closing file in unix OS".to_string()
    }
}

pub struct WindowsFileSystem;

impl FileSystem for WindowsFileSystem {
    fn open_file(&self) -> String {
        "Opening file in Windows OS".to_string()
    }

    fn write_file(&self) -> String {
        "Writing file in Windows OS".to_string()
    }

    fn close_file(&self) -> String {
        "Closing file in Windows OS".to_string()
    }
}

// =============================================================================
// Milestone 2: Commands and the invoker
// =============================================================================

pub trait Command {
    fn execute(&self) -> String;
}

pub struct OpenFileCommand {
    file_system: Rc<dyn FileSystem>,
}

impl OpenFileCommand {
    pub fn new(file_system: Rc<dyn FileSystem>) -> Self {
        Self { file_system }
    }
}

impl Command for OpenFileCommand {
    fn execute(&self) -> String {
        self.file_system.open_file()
    }
}

pub struct WriteFileCommand {
    file_system: Rc<dyn FileSystem>,
}

impl WriteFileCommand {
    pub fn new(file_system: Rc<dyn FileSystem>) -> Self {
        Self { file_system }
    }
}

impl Command for WriteFileCommand {
    fn execute(&self) -> String {
        self.file_system.write_file()
    }
}

pub struct CloseFileCommand {
    file_system: Rc<dyn FileSystem>,
}

impl CloseFileCommand {
    pub fn new(file_system: Rc<dyn FileSystem>) -> Self {
        Self { file_system }
    }
}

impl Command for CloseFileCommand {
    fn execute(&self) -> String {
        self.file_system.close_file()
    }
}

pub struct FileEditor {
    command: Box<dyn Command>,
}

impl FileEditor {
    pub fn new(command: Box<dyn Command>) -> Self {
        Self { command }
    }

    pub fn execute(&self) -> String {
        self.command.execute()
    }
}

// =============================================================================
// Milestone 3: Choosing the receiver from configuration
// =============================================================================

pub const DEFAULT_CONFIG: &str = r#"os_name = "Linux""#;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid editor config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EditorConfig {
    pub os_name: String,
}

impl EditorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Self::from_toml_str(&content)
    }
}

/// Returns the receiver matching the configured OS and the line announcing it.
pub fn file_system_for(config: &EditorConfig) -> (Rc<dyn FileSystem>, String) {
    let announcement = format!("Underlying OS is:{}", config.os_name);
    let file_system: Rc<dyn FileSystem> = if config.os_name.contains("Windows") {
        Rc::new(WindowsFileSystem)
    } else {
        Rc::new(UnixFileSystem)
    };
    (file_system, announcement)
}

// =============================================================================
// Example usage
// =============================================================================

fn main() {
    let loaded = match std::env::args().nth(1) {
        Some(path) => EditorConfig::load(Path::new(&path)),
        None => EditorConfig::from_toml_str(DEFAULT_CONFIG),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            std::process::exit(1);
        }
    };

    let (file_system, announcement) = file_system_for(&config);
    println!("{}", announcement.bold());

    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(OpenFileCommand::new(Rc::clone(&file_system))),
        Box::new(WriteFileCommand::new(Rc::clone(&file_system))),
        Box::new(CloseFileCommand::new(file_system)),
    ];
    for command in commands {
        let editor = FileEditor::new(command);
        println!("{}", editor.execute());
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config(os_name: &str) -> EditorConfig {
        EditorConfig {
            os_name: os_name.to_string(),
        }
    }

    #[test]
    fn test_windows_receiver() {
        let (fs, announcement) = file_system_for(&config("Windows 11"));
        assert_eq!(announcement, "Underlying OS is:Windows 11");
        assert_eq!(fs.open_file(), "Opening file in Windows OS");
    }

    #[test]
    fn test_everything_else_is_unix() {
        for os in ["Linux", "Mac OS X", "FreeBSD", "windows"] {
            let (fs, _) = file_system_for(&config(os));
            assert_eq!(fs.close_file(), "Closing file in unix OS", "os = {os}");
        }
    }

    #[test]
    fn test_commands_forward_to_receiver() {
        let fs: Rc<dyn FileSystem> = Rc::new(UnixFileSystem);
        let open = FileEditor::new(Box::new(OpenFileCommand::new(Rc::clone(&fs))));
        let write = FileEditor::new(Box::new(WriteFileCommand::new(Rc::clone(&fs))));
        let close = FileEditor::new(Box::new(CloseFileCommand::new(Rc::clone(&fs))));

        assert_eq!(open.execute(), "Opening file in unix OS");
        assert_eq!(write.execute(), "Writing file in unix OS");
        assert_eq!(close.execute(), "Closing file in unix OS");
        assert_eq!(Rc::strong_count(&fs), 4);
    }

    #[test]
    fn test_default_config() {
        let config = EditorConfig::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.os_name, "Linux");
    }

    #[test]
    fn test_sample_config_file_parses() {
        let config = EditorConfig::from_toml_str(include_str!("../../config/command.toml")).unwrap();
        assert_eq!(config.os_name, "Windows 11");
        let (fs, _) = file_system_for(&config);
        assert_eq!(fs.open_file(), "Opening file in Windows OS");
    }

    #[test]
    fn test_missing_os_name_is_rejected() {
        let err = EditorConfig::from_toml_str("").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "os_name = \"Windows Server\"").unwrap();
        let config = EditorConfig::load(file.path()).unwrap();
        let (fs, _) = file_system_for(&config);
        assert_eq!(fs.write_file(), "Writing file in Windows OS");
    }
}
