use std::{
    collections::VecDeque,
    io::{BufRead, Write},
    str::FromStr,
};

use crate::error::{ReportError, ReportResult};

/// Prompts on `output` and reads whitespace-separated values from `input`.
///
/// Several values may arrive on one line; leftovers are kept for the next prompt.
pub struct Console<R, W> {
    input: R,
    output: W,
    tokens: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            tokens: VecDeque::new(),
        }
    }

    pub fn prompt<T: FromStr>(&mut self, label: &str, field: &'static str) -> ReportResult<T> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let token = self.next_token(field)?;
        token
            .parse::<T>()
            .map_err(|_| ReportError::InvalidInput { field, value: token })
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn next_token(&mut self, field: &'static str) -> ReportResult<String> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ReportError::InputClosed { field });
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_writes_label_and_parses_value() {
        let mut console = Console::new("42\n".as_bytes(), Vec::new());
        let value: i32 = console.prompt("Enter Doctor ID: ", "doctor ID").unwrap();
        assert_eq!(value, 42);
        assert_eq!(console.into_output(), b"Enter Doctor ID: ");
    }

    #[test]
    fn values_can_share_a_line() {
        let mut console = Console::new("7 1500.5\n".as_bytes(), Vec::new());
        let num: i32 = console.prompt("a", "admission number").unwrap();
        let payment: f32 = console.prompt("b", "total payment").unwrap();
        assert_eq!(num, 7);
        assert_eq!(payment, 1500.5);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut console = Console::new("\n   \n 12345 \n".as_bytes(), Vec::new());
        let ssn: i32 = console.prompt("", "patient SSN").unwrap();
        assert_eq!(ssn, 12345);
    }

    #[test]
    fn unparsable_value_names_field() {
        let mut console = Console::new("twelve\n".as_bytes(), Vec::new());
        let err = console.prompt::<i32>("", "patient SSN").unwrap_err();
        match err {
            ReportError::InvalidInput { field, value } => {
                assert_eq!(field, "patient SSN");
                assert_eq!(value, "twelve");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn end_of_input_is_reported() {
        let mut console = Console::new("".as_bytes(), Vec::new());
        let err = console.prompt::<i32>("", "doctor ID").unwrap_err();
        assert!(matches!(err, ReportError::InputClosed { field: "doctor ID" }));
    }
}
