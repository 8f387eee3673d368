//! Calculator module for the talking keypad.
//!
//! This module provides:
//! - The four binary operators and their spoken forms
//! - Evaluation of a single "operand operator operand" expression
//! - The screen controller that owns the expression buffer

mod evaluation;
mod operator;
mod screen;

pub use operator::Operator;
pub use screen::{CalculatorScreen, Flow};
