//! The event loop tying terminal input to the calculator screen.

use super::render::{self, keypad_button_at, menu_item_at};
use super::terminal::{InputEvent, TerminalGuard, read_event};
use crate::calculator::{CalculatorScreen, Flow};
use crate::input::{Button, Command, route_key};
use crate::menu::{ContextMenu, MenuOutcome};
use crate::speech::Speaker;
use anyhow::{Context, Result};
use std::io;
use tracing::{info, trace};

/// Front-end state that is not part of the calculator: whether the menu is open.
#[derive(Debug, Default)]
struct Session {
    menu: Option<ContextMenu>,
}

impl Session {
    /// Resolve a terminal event into a calculator command, opening or closing
    /// the menu along the way.
    fn handle_event(&mut self, event: InputEvent) -> Option<Command> {
        let command = match event {
            InputEvent::Key(input) => match self.menu.as_mut() {
                Some(menu) => {
                    let outcome = menu.handle_key(input);
                    self.close_menu_on(outcome)
                }
                None => route_key(input),
            },
            InputEvent::Tap { x, y } => match self.menu {
                Some(_) => {
                    // A tap outside the menu dismisses it.
                    let outcome = menu_item_at(x, y)
                        .map_or(MenuOutcome::Close, |item| MenuOutcome::Run(item.command));
                    self.close_menu_on(outcome)
                }
                None => keypad_button_at(x, y).map(Button::command),
            },
            InputEvent::Resize | InputEvent::None => None,
        };

        if command == Some(Command::OpenMenu) {
            self.menu = Some(ContextMenu::new());
        }
        command
    }

    fn close_menu_on(&mut self, outcome: MenuOutcome) -> Option<Command> {
        match outcome {
            MenuOutcome::Stay => None,
            MenuOutcome::Close => {
                self.menu = None;
                None
            }
            MenuOutcome::Run(command) => {
                self.menu = None;
                Some(command)
            }
        }
    }
}

/// Run the calculator screen until the user exits.
pub fn run<S: Speaker>(screen: &mut CalculatorScreen<S>) -> Result<()> {
    let _guard = TerminalGuard::enter().context("Failed to set up terminal")?;
    let mut stdout = io::stdout();
    let mut session = Session::default();
    info!("calculator screen shown");

    loop {
        render::draw(&mut stdout, screen.display(), session.menu.as_ref())?;

        let Some(command) = session.handle_event(read_event()?) else {
            continue;
        };
        trace!("command {:?}", command);

        if screen.apply(command) == Flow::Exit {
            info!("exit requested");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operator;
    use crate::input::{Key, KeyInput};

    fn key(key: Key) -> InputEvent {
        InputEvent::Key(KeyInput::new(key))
    }

    #[test]
    fn test_keys_route_when_menu_closed() {
        let mut session = Session::default();
        assert_eq!(session.handle_event(key(Key::Char('5'))), Some(Command::Digit(5)));
        assert_eq!(session.handle_event(key(Key::Enter)), Some(Command::Evaluate));
        assert_eq!(session.handle_event(InputEvent::Resize), None);
    }

    #[test]
    fn test_menu_opens_and_runs_shortcut() {
        let mut session = Session::default();
        let open = InputEvent::Key(KeyInput::ctrl(Key::Char('m')));
        assert_eq!(session.handle_event(open), Some(Command::OpenMenu));
        assert!(session.menu.is_some());

        // While open, digits are not routed to the calculator.
        assert_eq!(session.handle_event(key(Key::Char('5'))), None);
        assert!(session.menu.is_some());

        assert_eq!(
            session.handle_event(key(Key::Char('d'))),
            Some(Command::Operator(Operator::Divide))
        );
        assert!(session.menu.is_none());
    }

    #[test]
    fn test_escape_closes_menu() {
        let mut session = Session::default();
        session.handle_event(key(Key::F(10)));
        assert_eq!(session.handle_event(key(Key::Escape)), None);
        assert!(session.menu.is_none());
    }

    #[test]
    fn test_tap_outside_menu_dismisses_it() {
        let mut session = Session::default();
        session.handle_event(key(Key::F(10)));
        assert_eq!(session.handle_event(InputEvent::Tap { x: 0, y: 0 }), None);
        assert!(session.menu.is_none());
    }

    #[test]
    fn test_tap_on_keypad() {
        let mut session = Session::default();
        assert_eq!(session.handle_event(InputEvent::Tap { x: 0, y: 0 }), None);
        assert_eq!(
            session.handle_event(InputEvent::Tap { x: 2, y: 5 }),
            Some(Command::Digit(7))
        );
    }
}
