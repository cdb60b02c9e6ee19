use colored::Colorize;

// =============================================================================
// Milestone 1: The component and its concrete implementation
// =============================================================================

/// Each operation returns the steps it performed, outermost first.
pub trait DataSource {
    fn write_data(&mut self, data: &str) -> Vec<String>;
    fn read_data(&self) -> Vec<String>;
}

pub struct FileDataSource {
    file_name: String,
    contents: Option<String>,
}

impl FileDataSource {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: None,
        }
    }
}

impl DataSource for FileDataSource {
    fn write_data(&mut self, data: &str) -> Vec<String> {
        self.contents = Some(data.to_string());
        vec![format!("Write data to file: {}", self.file_name)]
    }

    fn read_data(&self) -> Vec<String> {
        match &self.contents {
            Some(data) => vec![format!("Read data from file: {} ({} bytes)", self.file_name, data.len())],
            None => vec![format!("Read data from file: {} (empty)", self.file_name)],
        }
    }
}

// =============================================================================
// Milestone 2: Decorators
// =============================================================================

pub struct EncryptionDecorator {
    wrapped: Box<dyn DataSource>,
}

impl EncryptionDecorator {
    pub fn new(wrapped: Box<dyn DataSource>) -> Self {
        Self { wrapped }
    }
}

impl DataSource for EncryptionDecorator {
    fn write_data(&mut self, data: &str) -> Vec<String> {
        let mut steps = vec!["EncryptionDecorator: Encrypt data before write".to_string()];
        steps.extend(self.wrapped.write_data(data));
        steps
    }

    fn read_data(&self) -> Vec<String> {
        let mut steps = self.wrapped.read_data();
        steps.push("EncryptionDecorator: Decrypt data after read".to_string());
        steps
    }
}

pub struct CompressionDecorator {
    wrapped: Box<dyn DataSource>,
}

impl CompressionDecorator {
    pub fn new(wrapped: Box<dyn DataSource>) -> Self {
        Self { wrapped }
    }
}

impl DataSource for CompressionDecorator {
    fn write_data(&mut self, data: &str) -> Vec<String> {
        let mut steps = vec!["CompressionDecorator: Compress data before write".to_string()];
        steps.extend(self.wrapped.write_data(data));
        steps
    }

    fn read_data(&self) -> Vec<String> {
        let mut steps = self.wrapped.read_data();
        steps.push("CompressionDecorator: De-Compression data after read".to_string());
        steps
    }
}

// =============================================================================
// Example usage
// =============================================================================

fn exercise(label: &str, source: &mut dyn DataSource) {
    println!("{}", label.bold());
    for step in source.write_data("test data") {
        println!("{step}");
    }
    for step in source.read_data() {
        println!("{step}");
    }
    println!("========================================");
}

fn main() {
    let mut basic = FileDataSource::new("somefile.dat");
    exercise("Using the basic FileDataSource", &mut basic);

    let mut encrypted = EncryptionDecorator::new(Box::new(FileDataSource::new("somefile.dat")));
    exercise("Using the EncryptionDecorator", &mut encrypted);

    let mut compressed = CompressionDecorator::new(Box::new(FileDataSource::new("somefile.dat")));
    exercise("Using the CompressionDecorator", &mut compressed);

    let mut both = CompressionDecorator::new(Box::new(EncryptionDecorator::new(Box::new(
        FileDataSource::new("salaries.dat"),
    ))));
    exercise("Using Compression over Encryption", &mut both);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_source() {
        let mut source = FileDataSource::new("a.dat");
        assert_eq!(source.read_data(), vec!["Read data from file: a.dat (empty)"]);
        assert_eq!(source.write_data("hello"), vec!["Write data to file: a.dat"]);
        assert_eq!(source.read_data(), vec!["Read data from file: a.dat (5 bytes)"]);
    }

    #[test]
    fn test_encryption_wraps_write_and_read() {
        let mut source = EncryptionDecorator::new(Box::new(FileDataSource::new("a.dat")));
        let write = source.write_data("x");
        assert_eq!(write[0], "EncryptionDecorator: Encrypt data before write");
        assert_eq!(write[1], "Write data to file: a.dat");

        let read = source.read_data();
        assert_eq!(read.last().unwrap(), "EncryptionDecorator: Decrypt data after read");
    }

    #[test]
    fn test_stacked_decorators_order() {
        let mut source = CompressionDecorator::new(Box::new(EncryptionDecorator::new(Box::new(
            FileDataSource::new("b.dat"),
        ))));
        assert_eq!(
            source.write_data("payload"),
            vec![
                "CompressionDecorator: Compress data before write",
                "EncryptionDecorator: Encrypt data before write",
                "Write data to file: b.dat",
            ]
        );
        assert_eq!(
            source.read_data(),
            vec![
                "Read data from file: b.dat (7 bytes)",
                "EncryptionDecorator: Decrypt data after read",
                "CompressionDecorator: De-Compression data after read",
            ]
        );
    }
}
