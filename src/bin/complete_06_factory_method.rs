// =============================================================================
// Milestone 1: Products
// =============================================================================

pub trait Button {
    fn render(&self) -> String;
    fn on_click(&self) -> String;
}

pub struct HtmlButton;

impl Button for HtmlButton {
    fn render(&self) -> String {
        "<button>OK</button>".to_string()
    }

    fn on_click(&self) -> String {
        "HTML Button is CLICKED".to_string()
    }
}

pub struct WindowsButton;

impl Button for WindowsButton {
    fn render(&self) -> String {
        "[ OK ]".to_string()
    }

    fn on_click(&self) -> String {
        "Windows Button is CLICKED".to_string()
    }
}

// =============================================================================
// Milestone 2: Creators with a factory method
// =============================================================================

pub trait Dialog {
    /// The factory method each dialog overrides.
    fn create_button(&self) -> Box<dyn Button>;

    /// Shared logic that works with whatever button the subtype creates.
    fn render(&self) -> Vec<String> {
        let button = self.create_button();
        vec![button.render(), button.on_click()]
    }
}

pub struct WebDialog;

impl Dialog for WebDialog {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(HtmlButton)
    }
}

pub struct WindowsDialog;

impl Dialog for WindowsDialog {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }
}

fn main() {
    let dialogs: Vec<Box<dyn Dialog>> = vec![Box::new(WebDialog), Box::new(WindowsDialog)];
    for dialog in &dialogs {
        for line in dialog.render() {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_dialog_creates_html_button() {
        assert_eq!(WebDialog.create_button().on_click(), "HTML Button is CLICKED");
    }

    #[test]
    fn test_windows_dialog_creates_windows_button() {
        assert_eq!(
            WindowsDialog.create_button().on_click(),
            "Windows Button is CLICKED"
        );
    }

    #[test]
    fn test_render_uses_factory_method() {
        assert_eq!(
            WebDialog.render(),
            vec!["<button>OK</button>", "HTML Button is CLICKED"]
        );
        assert_eq!(WindowsDialog.render()[0], "[ OK ]");
    }
}
