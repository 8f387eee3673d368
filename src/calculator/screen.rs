//! The calculator screen controller.
//!
//! Owns the expression buffer, the operator-entered flag and the text shown on
//! the display. Every handler mutates that state synchronously and issues at
//! most one utterance through the injected [`Speaker`].

use super::evaluation::{evaluate_expression, format_result};
use super::operator::Operator;
use crate::input::Command;
use crate::speech::Speaker;

pub const READY_PHRASE: &str = "Calculator ready. Result: 0";
pub const CLEAR_PHRASE: &str = "Clear all. Result: 0";
pub const ERROR_PHRASE: &str = "error";
pub const POINT_PHRASE: &str = "point";

/// Whether the screen should keep running after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Calculator state for the lifetime of one screen.
pub struct CalculatorScreen<S: Speaker> {
    expression: String,
    operator_entered: bool,
    display: String,
    speaker: S,
}

impl<S: Speaker> CalculatorScreen<S> {
    /// Create a screen with an empty buffer and "0" on the display.
    pub fn new(speaker: S) -> Self {
        Self {
            expression: String::new(),
            operator_entered: false,
            display: "0".to_string(),
            speaker,
        }
    }

    /// The current expression buffer.
    #[cfg(test)]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The text currently rendered on the display.
    pub fn display(&self) -> &str {
        &self.display
    }

    #[cfg(test)]
    pub fn is_operator_entered(&self) -> bool {
        self.operator_entered
    }

    #[cfg(test)]
    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    /// Called once when the speech engine reports its initialization result.
    pub fn on_speech_ready(&mut self, ready: bool) {
        if ready {
            self.speaker.speak(READY_PHRASE);
        }
    }

    /// Run a command against the screen.
    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Digit(digit) => {
                let text = digit.to_string();
                self.append_input(&text);
                self.speaker.speak(&text);
            }
            Command::Point => {
                self.append_input(".");
                self.speaker.speak(POINT_PHRASE);
            }
            Command::Operator(op) => self.handle_operator(op),
            Command::Evaluate => self.calculate_result(),
            Command::Clear => self.clear_display(),
            Command::Backspace => self.handle_backspace(),
            // Opening the menu is handled by the front end.
            Command::OpenMenu => {}
            Command::Exit => return Flow::Exit,
        }
        Flow::Continue
    }

    /// Append raw input to the buffer and refresh the display. Does not speak.
    pub fn append_input(&mut self, input: &str) {
        self.expression.push_str(input);
        self.update_display();
    }

    /// Accept an operator unless one is already pending; a second one is ignored.
    pub fn handle_operator(&mut self, op: Operator) {
        if self.operator_entered {
            return;
        }
        self.append_input(&format!(" {} ", op.symbol()));
        self.speaker.speak(op.spoken());
        self.operator_entered = true;
    }

    /// Remove the last character, if any, and announce it.
    pub fn handle_backspace(&mut self) {
        if let Some(deleted) = self.expression.pop() {
            self.update_display();
            self.speaker.speak(&format!("deleted {deleted}"));
        }
    }

    /// Reset the buffer and flag; the display shows "0" rather than nothing.
    pub fn clear_display(&mut self) {
        self.expression.clear();
        self.display = "0".to_string();
        self.speaker.speak(CLEAR_PHRASE);
        self.operator_entered = false;
    }

    /// Evaluate the buffer, replacing it with the result on success.
    pub fn calculate_result(&mut self) {
        match evaluate_expression(&self.expression) {
            Ok(value) => {
                let result = format_result(value);
                self.expression.clear();
                self.expression.push_str(&result);
                self.update_display();
                self.speaker.speak(&format!("Result: {result}"));
                self.operator_entered = false;
            }
            Err(_) => self.speaker.speak(ERROR_PHRASE),
        }
    }

    fn update_display(&mut self) {
        self.display.clone_from(&self.expression);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::RecordingSpeaker;

    fn screen() -> CalculatorScreen<RecordingSpeaker> {
        CalculatorScreen::new(RecordingSpeaker::default())
    }

    fn screen_with(expression: &str, operator_entered: bool) -> CalculatorScreen<RecordingSpeaker> {
        let mut screen = screen();
        screen.append_input(expression);
        screen.operator_entered = operator_entered;
        screen
    }

    fn spoken(screen: &CalculatorScreen<RecordingSpeaker>) -> Vec<&str> {
        screen.speaker().utterances().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_initial_state() {
        let screen = screen();
        assert_eq!(screen.expression(), "");
        assert_eq!(screen.display(), "0");
        assert!(!screen.is_operator_entered());
        assert!(spoken(&screen).is_empty());
    }

    #[test]
    fn test_ready_phrase_only_on_success() {
        let mut screen = screen();
        screen.on_speech_ready(false);
        assert!(spoken(&screen).is_empty());
        screen.on_speech_ready(true);
        assert_eq!(spoken(&screen), vec![READY_PHRASE]);
    }

    #[test]
    fn test_digits_accumulate_in_order() {
        let mut screen = screen();
        for d in [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 0] {
            screen.apply(Command::Digit(d));
        }
        assert_eq!(screen.expression(), "3141592653589790");
        assert_eq!(screen.display(), "3141592653589790");
        assert_eq!(spoken(&screen).first(), Some(&"3"));
        assert_eq!(spoken(&screen).len(), 16);
    }

    #[test]
    fn test_append_input_does_not_validate_or_speak() {
        let mut screen = screen();
        screen.append_input("1");
        screen.append_input(".");
        screen.append_input(".");
        screen.append_input("2");
        assert_eq!(screen.expression(), "1..2");
        assert!(spoken(&screen).is_empty());
    }

    #[test]
    fn test_point_is_spoken() {
        let mut screen = screen();
        screen.apply(Command::Point);
        assert_eq!(screen.expression(), ".");
        assert_eq!(spoken(&screen), vec!["point"]);
    }

    #[test]
    fn test_operator_is_padded_and_spoken() {
        let mut screen = screen_with("12", false);
        screen.handle_operator(Operator::Divide);
        assert_eq!(screen.expression(), "12 / ");
        assert!(screen.is_operator_entered());
        assert_eq!(spoken(&screen), vec!["divide by"]);
    }

    #[test]
    fn test_second_operator_is_silently_ignored() {
        let mut screen = screen_with("12", false);
        screen.handle_operator(Operator::Plus);
        for op in Operator::ALL {
            screen.handle_operator(op);
        }
        assert_eq!(screen.expression(), "12 + ");
        assert_eq!(spoken(&screen), vec!["plus"]);
    }

    #[test]
    fn test_clear_always_shows_zero() {
        let mut filled = screen_with("12 + 3", true);
        filled.clear_display();
        assert_eq!(filled.display(), "0");
        assert_eq!(filled.expression(), "");
        assert!(!filled.is_operator_entered());
        assert_eq!(spoken(&filled), vec![CLEAR_PHRASE]);

        let mut empty = screen();
        empty.clear_display();
        assert_eq!(empty.display(), "0");
        assert_eq!(empty.expression(), "");
    }

    #[test]
    fn test_clear_allows_new_operator() {
        let mut screen = screen_with("1 + ", true);
        screen.clear_display();
        screen.apply(Command::Digit(2));
        screen.handle_operator(Operator::Minus);
        assert_eq!(screen.expression(), "2 - ");
    }

    #[test]
    fn test_evaluate_success() {
        let mut screen = screen_with("3 + 4", true);
        screen.calculate_result();
        assert_eq!(screen.expression(), "7.0");
        assert_eq!(screen.display(), "7.0");
        assert!(!screen.is_operator_entered());
        assert_eq!(spoken(&screen), vec!["Result: 7.0"]);
    }

    #[test]
    fn test_division_by_zero_leaves_buffer() {
        let mut screen = screen_with("5 / 0", true);
        screen.calculate_result();
        assert_eq!(screen.expression(), "5 / 0");
        assert_eq!(screen.display(), "5 / 0");
        assert!(screen.is_operator_entered());
        assert_eq!(spoken(&screen), vec![ERROR_PHRASE]);
    }

    #[test]
    fn test_evaluate_without_operator_is_error() {
        let mut screen = screen_with("12", false);
        screen.calculate_result();
        assert_eq!(screen.expression(), "12");
        assert_eq!(spoken(&screen), vec![ERROR_PHRASE]);
    }

    #[test]
    fn test_evaluate_empty_is_error() {
        let mut screen = screen();
        screen.calculate_result();
        assert_eq!(screen.expression(), "");
        assert_eq!(screen.display(), "0");
        assert_eq!(spoken(&screen), vec![ERROR_PHRASE]);
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut screen = screen();
        screen.handle_backspace();
        assert_eq!(screen.display(), "0");
        assert!(spoken(&screen).is_empty());
    }

    #[test]
    fn test_backspace_removes_last_character() {
        let mut screen = screen_with("12 + 3", true);
        screen.handle_backspace();
        assert_eq!(screen.expression(), "12 + ");
        assert_eq!(screen.display(), "12 + ");
        assert_eq!(spoken(&screen), vec!["deleted 3"]);
    }

    #[test]
    fn test_backspace_into_operator_keeps_flag() {
        let mut screen = screen_with("12", false);
        screen.handle_operator(Operator::Plus);
        screen.handle_backspace();
        screen.handle_backspace();
        assert_eq!(screen.expression(), "12 ");
        assert!(screen.is_operator_entered());
        assert_eq!(spoken(&screen), vec!["plus", "deleted  ", "deleted +"]);

        // The flag still blocks a new operator, so the next evaluation fails.
        screen.handle_operator(Operator::Minus);
        screen.apply(Command::Digit(3));
        assert_eq!(screen.expression(), "12 3");
        screen.calculate_result();
        assert_eq!(screen.expression(), "12 3");
        assert_eq!(spoken(&screen).last(), Some(&ERROR_PHRASE));
    }

    #[test]
    fn test_backspace_to_empty_shows_nothing() {
        let mut screen = screen_with("7", false);
        screen.handle_backspace();
        assert_eq!(screen.expression(), "");
        assert_eq!(screen.display(), "");
    }

    #[test]
    fn test_chaining_after_result() {
        let mut screen = screen_with("3 + 4", true);
        screen.calculate_result();
        screen.apply(Command::Operator(Operator::Minus));
        assert_eq!(screen.expression(), "7.0 - ");
        assert_eq!(spoken(&screen), vec!["Result: 7.0", "minus"]);

        screen.apply(Command::Digit(9));
        screen.apply(Command::Evaluate);
        assert_eq!(screen.expression(), "-2.0");
    }

    #[test]
    fn test_negative_result_can_chain() {
        let mut screen = screen_with("-2.0", false);
        screen.handle_operator(Operator::Multiply);
        screen.append_input("3");
        screen.calculate_result();
        assert_eq!(screen.expression(), "-6.0");
    }

    #[test]
    fn test_exit_and_menu_commands() {
        let mut screen = screen_with("1", false);
        assert_eq!(screen.apply(Command::OpenMenu), Flow::Continue);
        assert_eq!(screen.apply(Command::Exit), Flow::Exit);
        assert_eq!(screen.expression(), "1");
        assert!(spoken(&screen).is_empty());
    }
}
