use colored::Colorize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MachineError {
    #[error("{machine} does not support {operation}")]
    Unsupported {
        machine: &'static str,
        operation: &'static str,
    },
}

// =============================================================================
// Milestone 1: One fat interface
// =============================================================================

pub trait Machine {
    fn print(&self, doc: &Document) -> Result<String, MachineError>;
    fn fax(&self, doc: &Document) -> Result<String, MachineError>;
    fn scan(&self, doc: &Document) -> Result<String, MachineError>;
}

pub struct MultiFunctionPrinter;

impl Machine for MultiFunctionPrinter {
    fn print(&self, doc: &Document) -> Result<String, MachineError> {
        Ok(format!("Printing '{}'", doc.title))
    }

    fn fax(&self, doc: &Document) -> Result<String, MachineError> {
        Ok(format!("Faxing '{}'", doc.title))
    }

    fn scan(&self, doc: &Document) -> Result<String, MachineError> {
        Ok(format!("Scanning '{}'", doc.title))
    }
}

/// Can only print, but the fat interface forces it to answer for fax and scan.
pub struct OldFashionedPrinter;

impl Machine for OldFashionedPrinter {
    fn print(&self, doc: &Document) -> Result<String, MachineError> {
        Ok(format!("Printing '{}' the old way", doc.title))
    }

    fn fax(&self, _doc: &Document) -> Result<String, MachineError> {
        Err(MachineError::Unsupported {
            machine: "OldFashionedPrinter",
            operation: "fax",
        })
    }

    fn scan(&self, _doc: &Document) -> Result<String, MachineError> {
        Err(MachineError::Unsupported {
            machine: "OldFashionedPrinter",
            operation: "scan",
        })
    }
}

// =============================================================================
// Milestone 2: Segregated interfaces
// =============================================================================

pub trait Printer {
    fn print(&self, doc: &Document) -> String;
}

pub trait Scanner {
    fn scan(&self, doc: &Document) -> String;
}

pub trait MultiFunctionDevice: Printer + Scanner {}

impl<T: Printer + Scanner> MultiFunctionDevice for T {}

pub struct JustAPrinter;

impl Printer for JustAPrinter {
    fn print(&self, doc: &Document) -> String {
        format!("JustAPrinter printed '{}'", doc.title)
    }
}

pub struct Photocopier;

impl Printer for Photocopier {
    fn print(&self, doc: &Document) -> String {
        format!("Photocopier printed '{}'", doc.title)
    }
}

impl Scanner for Photocopier {
    fn scan(&self, doc: &Document) -> String {
        format!("Photocopier scanned '{}'", doc.title)
    }
}

pub struct FlatbedScanner;

impl Scanner for FlatbedScanner {
    fn scan(&self, doc: &Document) -> String {
        format!("FlatbedScanner scanned '{}'", doc.title)
    }
}

/// Composed from separate parts; each call is delegated.
pub struct MultiFunctionMachine {
    printer: Box<dyn Printer>,
    scanner: Box<dyn Scanner>,
}

impl MultiFunctionMachine {
    pub fn new(printer: Box<dyn Printer>, scanner: Box<dyn Scanner>) -> Self {
        Self { printer, scanner }
    }
}

impl Printer for MultiFunctionMachine {
    fn print(&self, doc: &Document) -> String {
        self.printer.print(doc)
    }
}

impl Scanner for MultiFunctionMachine {
    fn scan(&self, doc: &Document) -> String {
        self.scanner.scan(doc)
    }
}

pub fn copy_document(device: &dyn MultiFunctionDevice, doc: &Document) -> Vec<String> {
    vec![device.scan(doc), device.print(doc)]
}

fn main() {
    let doc = Document::new("report.pdf");

    println!("{}", "=== Fat interface ===".bold());
    let machines: [(&str, &dyn Machine); 2] = [
        ("MultiFunctionPrinter", &MultiFunctionPrinter),
        ("OldFashionedPrinter", &OldFashionedPrinter),
    ];
    for (name, machine) in machines {
        println!("{name}:");
        for result in [machine.print(&doc), machine.fax(&doc), machine.scan(&doc)] {
            match result {
                Ok(line) => println!("  {line}"),
                Err(err) => println!("  {}", err.to_string().red()),
            }
        }
    }

    println!("\n{}", "=== Segregated interfaces ===".bold());
    println!("{}", JustAPrinter.print(&doc));
    for line in copy_document(&Photocopier, &doc) {
        println!("{line}");
    }
    let composed = MultiFunctionMachine::new(Box::new(JustAPrinter), Box::new(FlatbedScanner));
    for line in copy_document(&composed, &doc) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_old_fashioned_printer_rejects_fax_and_scan() {
        let doc = Document::new("a");
        let printer = OldFashionedPrinter;
        assert!(printer.print(&doc).is_ok());
        assert_eq!(
            printer.fax(&doc),
            Err(MachineError::Unsupported {
                machine: "OldFashionedPrinter",
                operation: "fax"
            })
        );
        assert!(printer.scan(&doc).unwrap_err().to_string().contains("scan"));
    }

    #[test]
    fn test_multifunction_printer_supports_everything() {
        let doc = Document::new("b");
        let machine = MultiFunctionPrinter;
        assert_eq!(machine.fax(&doc).unwrap(), "Faxing 'b'");
        assert_eq!(machine.scan(&doc).unwrap(), "Scanning 'b'");
    }

    #[test]
    fn test_photocopier_is_a_multifunction_device() {
        let doc = Document::new("c");
        assert_eq!(
            copy_document(&Photocopier, &doc),
            vec!["Photocopier scanned 'c'", "Photocopier printed 'c'"]
        );
    }

    #[test]
    fn test_composed_machine_delegates() {
        let doc = Document::new("d");
        let machine = MultiFunctionMachine::new(Box::new(JustAPrinter), Box::new(FlatbedScanner));
        assert_eq!(machine.print(&doc), "JustAPrinter printed 'd'");
        assert_eq!(machine.scan(&doc), "FlatbedScanner scanned 'd'");
    }
}
