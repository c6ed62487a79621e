//! Keyboard input handling and interactive loop.
//!
//! This module maps keyboard events to inspector actions and runs the
//! interactive terminal loop.

use crossterm::event::KeyEvent;
use crossterm::style::Stylize;

use objview::tree::Styles;

use super::menu::{InspectorMenu, TreeAction};
use crate::ui::theme;

/// Rows reserved for the header, separator, status and help bars
const CHROME_ROWS: u16 = 7;

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent) -> Option<TreeAction> {
    use crossterm::event::{KeyCode, KeyModifiers};

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(TreeAction::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::PageUp => Some(TreeAction::PageUp),
        KeyCode::PageDown => Some(TreeAction::PageDown),
        KeyCode::Home | KeyCode::Char('g') => Some(TreeAction::Home),
        KeyCode::End | KeyCode::Char('G') => Some(TreeAction::End),
        KeyCode::Char(' ') | KeyCode::Enter => Some(TreeAction::Toggle),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(TreeAction::Collapse),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Run the inspector interactively until the user quits.
pub fn run_interactive(
    menu: &mut InspectorMenu<'_>,
    title: &str,
    styles: &Styles,
    color: bool,
) -> std::io::Result<()> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };
    use std::io::{stdout, Write};

    terminal::enable_raw_mode()?;
    let mut stdout = stdout();

    let render_ui = |stdout: &mut std::io::Stdout,
                     menu: &mut InspectorMenu<'_>|
     -> std::io::Result<()> {
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        let height = rows.saturating_sub(CHROME_ROWS).max(1) as usize;
        menu.set_page_size(height);

        if color {
            print!("{}\r\n\r\n", title.with(theme::colors::INFO).bold());
        } else {
            print!("{}\r\n\r\n", title);
        }

        let rendered = menu.render(height, cols as usize, styles, color);
        for line in rendered.lines() {
            print!("{}\r\n", line);
        }

        let rule = "─".repeat(63);
        if color {
            print!("{}\r\n", rule.as_str().with(theme::colors::DIM));
        } else {
            print!("{}\r\n", rule);
        }

        for line in menu.render_status_bar().lines() {
            print!("{}\r\n", line);
        }
        print!("\r\n");

        for line in menu.render_help_bar().lines() {
            print!("{}\r\n", line);
        }

        stdout.flush()?;
        Ok(())
    };

    execute!(stdout, cursor::Hide)?;
    let result = (|| -> std::io::Result<()> {
        render_ui(&mut stdout, menu)?;
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = key_to_action(key) {
                        if menu.handle_action(action) {
                            return Ok(());
                        }
                        render_ui(&mut stdout, menu)?;
                    }
                }
                Event::Resize(_, _) => render_ui(&mut stdout, menu)?,
                _ => {}
            }
        }
    })();

    let restored = restore_terminal(&mut stdout, terminal::disable_raw_mode);
    result.and(restored)
}

/// Show the cursor, clear the screen and leave raw mode.
///
/// Raw mode is disabled even if writing to `out` fails; the first error wins.
fn restore_terminal<W: std::io::Write>(
    out: &mut W,
    disable_raw_mode: impl FnOnce() -> std::io::Result<()>,
) -> std::io::Result<()> {
    use crossterm::{
        cursor, execute,
        terminal::{Clear, ClearType},
    };

    let cleared = execute!(out, cursor::Show, Clear(ClearType::All), cursor::MoveTo(0, 0));
    let disabled = disable_raw_mode();
    cleared.and(disabled)
}
