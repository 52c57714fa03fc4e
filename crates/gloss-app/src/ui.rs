use std::io::Write;

use gloss_core::host::{ActionRegistry, MenuItem, Modal};
use gloss_core::viewer::{Layout, PageView};

/// Terminal stand-in for the icon set
pub fn glyph(icon: &str) -> &'static str {
    match icon {
        "search" => "?",
        "chevron-left" => "<",
        "chevron-right" => ">",
        _ => "*",
    }
}

/// Registered actions, listed once at startup
#[derive(Debug, Default)]
pub struct TerminalMenu {
    items: Vec<MenuItem>,
}

impl ActionRegistry for TerminalMenu {
    fn add_item(&mut self, item: MenuItem) {
        tracing::debug!("Registered action '{}'", item.id);
        self.items.push(item);
    }
}

impl TerminalMenu {
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Action that plain input lines trigger
    pub fn primary(&self) -> Option<&MenuItem> {
        self.items.first()
    }

    pub fn print_help(&self, out: &mut impl Write) -> std::io::Result<()> {
        for item in &self.items {
            writeln!(out, "[{}] {}: type a word and press Enter", glyph(item.icon), item.title)?;
        }
        writeln!(out, "    :p previous   :n next   :q close popup   Ctrl+D quit")
    }
}

/// Popup drawn as a framed block of text on a terminal stream
pub struct TerminalModal<W: Write> {
    out: W,
    width: usize,
    title: String,
    pending: Option<String>,
    is_open: bool,
}

impl<W: Write> TerminalModal<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self {
            out,
            width,
            title: String::new(),
            pending: None,
            is_open: false,
        }
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!("Failed to draw popup: {}", e);
        }
    }

    fn frame(&self, page: &PageView<'_>) -> String {
        let mut frame = format!("── {} ──\n", self.title);

        match page.layout() {
            Layout::Labeled => {
                let label = page.part_of_speech.unwrap_or_default();
                frame.push_str(&format!("  ({}) {}\n", label, page.definition));
            }
            Layout::Centered => {
                let pad = self.width.saturating_sub(page.definition.chars().count()) / 2;
                frame.push_str(&format!("{}{}\n", " ".repeat(pad), page.definition));
            }
        }

        if let Some(nav) = page.navigation {
            let [prev, next] = nav.controls();
            frame.push_str(&format!(
                "  {} {} {}\n",
                glyph(prev.icon()),
                nav.indicator(),
                glyph(next.icon())
            ));
        }

        frame
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Modal for TerminalModal<W> {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn render(&mut self, page: &PageView<'_>) {
        let frame = self.frame(page);
        if self.is_open {
            self.write(&frame);
        } else {
            self.pending = Some(frame);
        }
    }

    fn open(&mut self) {
        self.is_open = true;
        if let Some(frame) = self.pending.take() {
            self.write(&frame);
        }
    }

    fn close(&mut self) {
        if self.is_open {
            self.is_open = false;
            let line = format!("── closed {} ──\n", self.title);
            self.write(&line);
        }
    }
}

#[cfg(test)]
mod tests {
    use gloss_core::viewer::Navigation;

    use super::*;

    fn drawn(page: &PageView<'_>) -> String {
        let mut modal = TerminalModal::new(Vec::new(), 20);
        modal.set_title("run");
        modal.render(page);
        assert!(modal.out.is_empty(), "nothing is drawn before open");
        modal.open();
        String::from_utf8(modal.into_inner()).unwrap()
    }

    #[test]
    fn test_labeled_page_with_navigation() {
        let page = PageView {
            title: "run",
            definition: "move fast",
            part_of_speech: Some("verb"),
            navigation: Some(Navigation { index: 0, total: 3 }),
        };
        assert_eq!(drawn(&page), "── run ──\n  (verb) move fast\n  < 1/3 >\n");
    }

    #[test]
    fn test_centered_page_without_navigation() {
        let page = PageView {
            title: "run",
            definition: "No definition found",
            part_of_speech: None,
            navigation: None,
        };
        // (20 - 19) / 2 = 0 columns of padding
        assert_eq!(drawn(&page), "── run ──\nNo definition found\n");

        let page = PageView {
            definition: "oops",
            ..page
        };
        assert_eq!(drawn(&page), "── run ──\n        oops\n");
    }

    #[test]
    fn test_menu_help_lists_actions() {
        let mut menu = TerminalMenu::default();
        menu.add_item(MenuItem {
            id: "get-definition",
            title: "Get Definition",
            icon: "search",
        });

        let mut out = Vec::new();
        menu.print_help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("[?] Get Definition"));
        assert!(menu.contains("get-definition"));
        assert!(!menu.contains("other"));
    }
}
