//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    ///
    /// Header lines keep their hash marks and are only colored; everything
    /// between headers goes through termimad so tables get aligned.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        let mut section = String::new();
        for line in markdown.lines() {
            if line.starts_with('#') {
                self.flush(&mut section);
                println!("\x1b[34m{line}\x1b[0m");
            } else {
                section.push_str(line);
                section.push('\n');
            }
        }
        self.flush(&mut section);

        Ok(())
    }

    fn flush(&self, section: &mut String) {
        if !section.trim().is_empty() {
            self.skin.print_text(section);
        }
        section.clear();
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_flush_clears_section() {
        let renderer = TerminalRenderer::new(false);
        let mut section = "   \n".to_string();
        renderer.flush(&mut section);
        assert!(section.is_empty());
    }
}
