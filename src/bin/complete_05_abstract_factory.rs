use colored::Colorize;

// =============================================================================
// Milestone 1: Product families
// =============================================================================

pub trait UiButton {
    fn paint(&self) -> String;
}

pub trait UiCheckbox {
    fn paint(&self) -> String;
}

pub struct WinButton;

impl UiButton for WinButton {
    fn paint(&self) -> String {
        "Render a button in Windows style.".to_string()
    }
}

pub struct MacButton;

impl UiButton for MacButton {
    fn paint(&self) -> String {
        "Render a button in macOS style.".to_string()
    }
}

pub struct WinCheckbox;

impl UiCheckbox for WinCheckbox {
    fn paint(&self) -> String {
        "Render a checkbox in Windows style.".to_string()
    }
}

pub struct MacCheckbox;

impl UiCheckbox for MacCheckbox {
    fn paint(&self) -> String {
        "Render a checkbox in macOS style.".to_string()
    }
}

// =============================================================================
// Milestone 2: Factories
// =============================================================================

pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn UiButton>;
    fn create_checkbox(&self) -> Box<dyn UiCheckbox>;
}

pub struct WinFactory;

impl GuiFactory for WinFactory {
    fn create_button(&self) -> Box<dyn UiButton> {
        Box::new(WinButton)
    }

    fn create_checkbox(&self) -> Box<dyn UiCheckbox> {
        Box::new(WinCheckbox)
    }
}

pub struct MacFactory;

impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn UiButton> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn UiCheckbox> {
        Box::new(MacCheckbox)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
}

pub fn factory_for(platform: Platform) -> Box<dyn GuiFactory> {
    match platform {
        Platform::Windows => Box::new(WinFactory),
        Platform::MacOs => Box::new(MacFactory),
    }
}

// =============================================================================
// Milestone 3: Client code that only sees the abstract factory
// =============================================================================

pub fn render_form(factory: &dyn GuiFactory) -> Vec<String> {
    vec![
        factory.create_button().paint(),
        factory.create_checkbox().paint(),
    ]
}

fn main() {
    for platform in [Platform::Windows, Platform::MacOs] {
        println!("{}", format!("=== {platform:?} ===").bold());
        for line in render_form(factory_for(platform).as_ref()) {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_family() {
        assert_eq!(
            render_form(&WinFactory),
            vec![
                "Render a button in Windows style.",
                "Render a checkbox in Windows style."
            ]
        );
    }

    #[test]
    fn test_mac_family() {
        let form = render_form(factory_for(Platform::MacOs).as_ref());
        assert!(form.iter().all(|line| line.contains("macOS")));
    }

    #[test]
    fn test_families_never_mix() {
        for platform in [Platform::Windows, Platform::MacOs] {
            let factory = factory_for(platform);
            let button = factory.create_button().paint();
            let checkbox = factory.create_checkbox().paint();
            let style = |s: &str| s.split(" in ").nth(1).map(str::to_string);
            assert_eq!(style(&button), style(&checkbox));
        }
    }
}
