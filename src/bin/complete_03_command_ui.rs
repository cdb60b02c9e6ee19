use colored::Colorize;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

// =============================================================================
// Milestone 1: Actions and their keyboard shortcuts
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiAction {
    Copy,
    Paste,
}

lazy_static::lazy_static! {
    static ref SHORTCUTS: HashMap<&'static str, UiAction> = {
        let mut map = HashMap::new();
        map.insert(UiAction::Copy.shortcut(), UiAction::Copy);
        map.insert(UiAction::Paste.shortcut(), UiAction::Paste);
        map
    };
}

impl UiAction {
    pub fn shortcut(&self) -> &'static str {
        match self {
            UiAction::Copy => "CTRL+C",
            UiAction::Paste => "CTRL+P",
        }
    }

    pub fn by_shortcut(value: &str) -> Result<Self, UiError> {
        SHORTCUTS
            .get(value)
            .copied()
            .ok_or_else(|| UiError::UnknownShortcut(value.to_string()))
    }
}

impl fmt::Display for UiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UiAction::Copy => "COPY",
            UiAction::Paste => "PASTE",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("No action is bound to shortcut '{0}'")]
    UnknownShortcut(String),

    #[error("{invoker} has no command for {action}")]
    ActionNotBound { invoker: &'static str, action: UiAction },
}

// =============================================================================
// Milestone 2: Commands
// =============================================================================

pub trait UiCommand {
    fn execute(&self) -> String;
}

pub struct CopyCommand;

impl UiCommand for CopyCommand {
    fn execute(&self) -> String {
        "Copy Command: Copied the content to clipboard..".to_string()
    }
}

pub struct PasteCommand;

impl UiCommand for PasteCommand {
    fn execute(&self) -> String {
        "Paste Command: Pasted the content from clipboard..".to_string()
    }
}

// =============================================================================
// Milestone 3: Invokers sharing the same commands
// =============================================================================

pub struct Button {
    command: Rc<dyn UiCommand>,
}

impl Button {
    pub fn new(command: Rc<dyn UiCommand>) -> Self {
        Self { command }
    }

    pub fn click(&self) -> Vec<String> {
        vec!["Button Clicked...".to_string(), self.command.execute()]
    }
}

/// Invoker that maps actions to commands. The first binding for an action wins.
struct ActionBindings {
    invoker: &'static str,
    commands: HashMap<UiAction, Rc<dyn UiCommand>>,
}

impl ActionBindings {
    fn new(invoker: &'static str) -> Self {
        Self {
            invoker,
            commands: HashMap::new(),
        }
    }

    fn bind(&mut self, action: UiAction, command: Rc<dyn UiCommand>) {
        self.commands.entry(action).or_insert(command);
    }

    fn click(&self, action: UiAction) -> Result<Vec<String>, UiError> {
        let command = self.commands.get(&action).ok_or(UiError::ActionNotBound {
            invoker: self.invoker,
            action,
        })?;
        Ok(vec![
            format!("{} - {action} - Clicked...", self.invoker),
            command.execute(),
        ])
    }
}

pub struct ContextMenu {
    bindings: ActionBindings,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self {
            bindings: ActionBindings::new("ContextMenu"),
        }
    }

    pub fn add_menu_action(&mut self, action: UiAction, command: Rc<dyn UiCommand>) {
        self.bindings.bind(action, command);
    }

    pub fn click(&self, action: UiAction) -> Result<Vec<String>, UiError> {
        self.bindings.click(action)
    }
}

impl Default for ContextMenu {
    fn default() -> Self {
        Self::new()
    }
}

pub struct KeyboardShortcut {
    bindings: ActionBindings,
}

impl KeyboardShortcut {
    pub fn new() -> Self {
        Self {
            bindings: ActionBindings::new("KeyboardShortCut"),
        }
    }

    pub fn add_shortcut(&mut self, shortcut: &str, command: Rc<dyn UiCommand>) -> Result<(), UiError> {
        let action = UiAction::by_shortcut(shortcut)?;
        self.bindings.bind(action, command);
        Ok(())
    }

    pub fn press(&self, action: UiAction) -> Result<Vec<String>, UiError> {
        self.bindings.click(action)
    }
}

impl Default for KeyboardShortcut {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Example usage
// =============================================================================

fn print_lines(result: Result<Vec<String>, UiError>) {
    match result {
        Ok(lines) => lines.iter().for_each(|line| println!("{line}")),
        Err(err) => eprintln!("{}", err.to_string().red()),
    }
}

fn main() {
    let copy: Rc<dyn UiCommand> = Rc::new(CopyCommand);
    let paste: Rc<dyn UiCommand> = Rc::new(PasteCommand);

    println!("{}", "=== Button ===".bold());
    let copy_button = Button::new(Rc::clone(&copy));
    print_lines(Ok(copy_button.click()));

    println!("\n{}", "=== Context menu ===".bold());
    let mut menu = ContextMenu::new();
    menu.add_menu_action(UiAction::Copy, Rc::clone(&copy));
    menu.add_menu_action(UiAction::Paste, Rc::clone(&paste));
    print_lines(menu.click(UiAction::Copy));
    print_lines(menu.click(UiAction::Paste));

    println!("\n{}", "=== Keyboard shortcuts ===".bold());
    let mut shortcuts = KeyboardShortcut::new();
    for (key, command) in [("CTRL+C", &copy), ("CTRL+P", &paste), ("CTRL+Z", &copy)] {
        if let Err(err) = shortcuts.add_shortcut(key, Rc::clone(command)) {
            eprintln!("{}", err.to_string().red());
        }
    }
    print_lines(shortcuts.press(UiAction::Copy));
    print_lines(shortcuts.press(UiAction::Paste));
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_lookup() {
        assert_eq!(UiAction::by_shortcut("CTRL+C"), Ok(UiAction::Copy));
        assert_eq!(UiAction::by_shortcut("CTRL+P"), Ok(UiAction::Paste));
        assert_eq!(
            UiAction::by_shortcut("ctrl+c"),
            Err(UiError::UnknownShortcut("ctrl+c".to_string()))
        );
    }

    #[test]
    fn test_button_click() {
        let button = Button::new(Rc::new(CopyCommand));
        assert_eq!(
            button.click(),
            vec!["Button Clicked...", "Copy Command: Copied the content to clipboard.."]
        );
    }

    #[test]
    fn test_context_menu() {
        let mut menu = ContextMenu::new();
        menu.add_menu_action(UiAction::Paste, Rc::new(PasteCommand));
        let lines = menu.click(UiAction::Paste).unwrap();
        assert_eq!(lines[0], "ContextMenu - PASTE - Clicked...");
        assert!(lines[1].starts_with("Paste Command"));
    }

    #[test]
    fn test_unbound_action() {
        let menu = ContextMenu::new();
        assert_eq!(
            menu.click(UiAction::Copy),
            Err(UiError::ActionNotBound {
                invoker: "ContextMenu",
                action: UiAction::Copy
            })
        );
    }

    #[test]
    fn test_first_binding_wins() {
        let mut menu = ContextMenu::new();
        menu.add_menu_action(UiAction::Copy, Rc::new(CopyCommand));
        menu.add_menu_action(UiAction::Copy, Rc::new(PasteCommand));
        let lines = menu.click(UiAction::Copy).unwrap();
        assert!(lines[1].starts_with("Copy Command"));
    }

    #[test]
    fn test_keyboard_shortcuts_share_commands() {
        let copy: Rc<dyn UiCommand> = Rc::new(CopyCommand);
        let button = Button::new(Rc::clone(&copy));
        let mut shortcuts = KeyboardShortcut::new();
        shortcuts.add_shortcut("CTRL+C", Rc::clone(&copy)).unwrap();

        assert_eq!(Rc::strong_count(&copy), 3);
        assert_eq!(button.click()[1], shortcuts.press(UiAction::Copy).unwrap()[1]);
        assert_eq!(
            shortcuts.press(UiAction::Copy).unwrap()[0],
            "KeyboardShortCut - COPY - Clicked..."
        );
    }

    #[test]
    fn test_unknown_shortcut_is_not_bound() {
        let mut shortcuts = KeyboardShortcut::new();
        assert!(shortcuts.add_shortcut("CTRL+Z", Rc::new(CopyCommand)).is_err());
        assert!(shortcuts.press(UiAction::Copy).is_err());
    }
}
