//! Four level RPN calculator.
//!
//! Keys: digits build the X register, `=` is ENTER, `+ - * /` operate
//! on Y and X, `c` clears X. Leaving the calculator is refused while X
//! holds a value, so a stray mode key press doesn't lose a result.
use crate::devices::application::{Application, ExitDecision};

const DEPTH: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Entry {
    /// Next digit starts a new number and lifts the stack.
    Fresh,
    /// Next digit is appended to X.
    Typing,
    /// Next digit replaces X (after ENTER or clear).
    Replace,
}

#[derive(Clone, Debug)]
pub struct Calculator {
    // stack[0] is X, stack[1] is Y...
    stack: [i32; DEPTH],
    entry: Entry,
}

impl Default for Calculator {
    fn default() -> Self { Self::new() }
}

impl Calculator {
    pub fn new() -> Self { Self { stack: [0; DEPTH], entry: Entry::Replace } }

    pub fn x(&self) -> i32 { self.stack[0] }

    pub fn y(&self) -> i32 { self.stack[1] }

    fn lift(&mut self) {
        self.stack.copy_within(0..DEPTH - 1, 1);
    }

    fn drop_with(&mut self, result: i32) {
        self.stack.copy_within(2..DEPTH, 1);
        self.stack[0] = result;
    }

    fn digit(&mut self, digit: i32) {
        match self.entry {
            Entry::Typing => self.stack[0] = self.stack[0].wrapping_mul(10).wrapping_add(digit),
            Entry::Fresh => {
                self.lift();
                self.stack[0] = digit;
            }
            Entry::Replace => self.stack[0] = digit,
        }
        self.entry = Entry::Typing;
    }

    fn operate(&mut self, operation: fn(i32, i32) -> Option<i32>) {
        // Invalid operations (division by zero) leave the stack untouched.
        if let Some(result) = operation(self.y(), self.x()) {
            self.drop_with(result);
            self.entry = Entry::Fresh;
        }
    }
}

impl Application for Calculator {
    fn name(&self) -> &'static str { "calculator" }

    fn exit(&mut self) -> ExitDecision {
        if self.x() == 0 {
            ExitDecision::Proceed
        } else {
            ExitDecision::Vetoed
        }
    }

    fn keypress(&mut self, key: char) {
        match key {
            '0'..='9' => self.digit(key as i32 - '0' as i32),
            '=' => {
                self.lift();
                self.entry = Entry::Replace;
            }
            '+' => self.operate(|y, x| Some(y.wrapping_add(x))),
            '-' => self.operate(|y, x| Some(y.wrapping_sub(x))),
            '*' => self.operate(|y, x| Some(y.wrapping_mul(x))),
            '/' => self.operate(i32::checked_div),
            'c' => {
                self.stack[0] = 0;
                self.entry = Entry::Replace;
            }
            _ => (),
        }
    }
}
