use colored::Colorize;
use std::io::{self, BufRead, Write};
use thiserror::Error;

// =============================================================================
// Milestone 1: Requests and dispenser errors
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    amount: u32,
}

impl Currency {
    pub fn new(amount: u32) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispenseError {
    #[error("Amount should be in multiple of 10s (got {0}).")]
    NotMultipleOfTen(u32),

    #[error("No dispenser left in the chain for the remaining {remainder}$")]
    Undispensable { remainder: u32 },

    #[error("'{0}' is not a valid amount")]
    InvalidInput(String),

    #[error("Could not read input: {0}")]
    UnreadableInput(String),

    #[error("A dispenser chain needs at least one note")]
    EmptyChain,

    #[error("Note denominations must be greater than zero")]
    ZeroNote,
}

// =============================================================================
// Milestone 2: The handler chain
// =============================================================================

pub trait DispenserChain {
    fn set_next(&mut self, next: Box<dyn DispenserChain>);
    fn dispense(&self, cur: Currency) -> Result<Vec<String>, DispenseError>;
}

/// Hands out as many notes of one denomination as fit and passes the rest on.
pub struct NoteDispenser {
    note: u32,
    next: Option<Box<dyn DispenserChain>>,
}

impl NoteDispenser {
    pub fn new(note: u32) -> Self {
        Self { note, next: None }
    }

    fn forward(&self, cur: Currency) -> Result<Vec<String>, DispenseError> {
        match &self.next {
            Some(next) => next.dispense(cur),
            None => Err(DispenseError::Undispensable {
                remainder: cur.amount(),
            }),
        }
    }
}

impl DispenserChain for NoteDispenser {
    fn set_next(&mut self, next: Box<dyn DispenserChain>) {
        self.next = Some(next);
    }

    fn dispense(&self, cur: Currency) -> Result<Vec<String>, DispenseError> {
        if self.note == 0 || cur.amount() < self.note {
            return self.forward(cur);
        }

        let count = cur.amount() / self.note;
        let remainder = cur.amount() % self.note;
        let mut lines = vec![format!("Dispensing {count} {}$ note", self.note)];
        if remainder != 0 {
            lines.extend(self.forward(Currency::new(remainder))?);
        }
        Ok(lines)
    }
}

// =============================================================================
// Milestone 3: Wiring the chain into an ATM
// =============================================================================

pub struct Atm {
    head: Box<dyn DispenserChain>,
}

impl Atm {
    /// Links 50$ -> 20$ -> 10$. The chain is assembled tail first because each
    /// handler owns its successor.
    pub fn new() -> Self {
        let mut twenty = NoteDispenser::new(20);
        twenty.set_next(Box::new(NoteDispenser::new(10)));
        let mut fifty = NoteDispenser::new(50);
        fifty.set_next(Box::new(twenty));
        Self {
            head: Box::new(fifty),
        }
    }

    /// Chains the given denominations in the order given, largest first.
    pub fn with_notes(notes: &[u32]) -> Result<Self, DispenseError> {
        if notes.contains(&0) {
            return Err(DispenseError::ZeroNote);
        }
        let mut next: Option<Box<dyn DispenserChain>> = None;
        for &note in notes.iter().rev() {
            let mut dispenser = NoteDispenser::new(note);
            if let Some(successor) = next.take() {
                dispenser.set_next(successor);
            }
            next = Some(Box::new(dispenser));
        }
        let head = next.ok_or(DispenseError::EmptyChain)?;
        Ok(Self { head })
    }

    pub fn withdraw(&self, amount: u32) -> Result<Vec<String>, DispenseError> {
        if amount % 10 != 0 {
            return Err(DispenseError::NotMultipleOfTen(amount));
        }
        self.head.dispense(Currency::new(amount))
    }

    pub fn withdraw_input(&self, input: &str) -> Result<Vec<String>, DispenseError> {
        let trimmed = input.trim();
        let amount = trimmed
            .parse::<u32>()
            .map_err(|_| DispenseError::InvalidInput(trimmed.to_string()))?;
        self.withdraw(amount)
    }
}

impl Default for Atm {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Example usage
// =============================================================================

/// Prompts for amounts until EOF or an empty line. Lines that are not valid
/// text are reported like any other bad input.
fn run(input: impl BufRead, out: &mut impl Write, atm: &Atm) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        writeln!(out, "Enter amount to dispense: ")?;
        out.flush()?;

        let outcome = match lines.next() {
            None => break,
            Some(Ok(line)) if line.trim().is_empty() => break,
            Some(Ok(line)) => atm.withdraw_input(&line),
            Some(Err(err)) if err.kind() == io::ErrorKind::InvalidData => {
                Err(DispenseError::UnreadableInput(err.to_string()))
            }
            Some(Err(err)) => return Err(err),
        };

        match outcome {
            Ok(notes) => {
                for note in notes {
                    writeln!(out, "{}", note.green())?;
                }
            }
            Err(err) => writeln!(out, "{}", err.to_string().red())?,
        }
    }
    Ok(())
}

fn main() {
    let atm = Atm::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(err) = run(stdin.lock(), &mut stdout.lock(), &atm) {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}

// =============================================================================
// Tests
// =============================================================================
