use crate::error::Result;
use crate::log::{TracingLog, WarnLog};

/// Formats a sum the way [`Adder::add_num`] reports it.
pub fn format_sum(sum: i32) -> String {
    format!("Sum is: {sum}")
}

/// Adds two operands and reports the sum as text.
///
/// Faults never reach the caller: they are written to the injected
/// [`WarnLog`] and the call yields `None`.
#[derive(Debug, Clone, Default)]
pub struct Adder<L = TracingLog> {
    log: L,
}

impl<L: WarnLog> Adder<L> {
    pub fn new(log: L) -> Self {
        Self { log }
    }

    /// Returns `"Sum is: <num1 + num2>"`. Overflow wraps.
    pub fn add_num(&self, num1: i32, num2: i32) -> Option<String> {
        self.guard(|| Ok(format_sum(num1.wrapping_add(num2))))
    }

    /// Runs `f`, turning an error into a logged warning and `None`.
    ///
    /// The injected logger is the only output on the fault path. Panics are
    /// bugs and are not caught.
    pub fn guard<F>(&self, f: F) -> Option<String>
    where
        F: FnOnce() -> Result<String>,
    {
        match f() {
            Ok(text) => Some(text),
            Err(e) => {
                self.log.warn(&format!("Error: {e}"));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl WarnLog for Recorder {
        fn warn(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    impl Recorder {
        fn messages(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    #[test]
    fn adds_small_numbers() {
        let adder = Adder::<TracingLog>::default();
        assert_eq!(adder.add_num(2, 3).as_deref(), Some("Sum is: 5"));
        assert_eq!(adder.add_num(-10, 4).as_deref(), Some("Sum is: -6"));
        assert_eq!(adder.add_num(0, 0).as_deref(), Some("Sum is: 0"));
    }

    #[test]
    fn overflow_wraps() {
        let adder = Adder::<TracingLog>::default();
        assert_eq!(
            adder.add_num(i32::MAX, 1).as_deref(),
            Some("Sum is: -2147483648")
        );
        assert_eq!(
            adder.add_num(i32::MIN, -1).as_deref(),
            Some("Sum is: 2147483647")
        );
    }

    #[test]
    fn success_does_not_log() {
        let rec = Recorder::default();
        let adder = Adder::new(&rec);
        adder.add_num(7, 8);
        assert!(rec.messages().is_empty());
    }

    #[test]
    fn guard_logs_error_and_returns_none() {
        let rec = Recorder::default();
        let adder = Adder::new(&rec);
        let out = adder.guard(|| Err(Error::computation("bad operand")));
        assert!(out.is_none());
        assert_eq!(rec.messages(), vec!["Error: computation fault: bad operand"]);
    }

    #[test]
    fn guard_logs_exactly_once_per_fault() {
        let rec = Recorder::default();
        let adder = Adder::new(&rec);
        assert!(adder.guard(|| Err(Error::computation("first"))).is_none());
        assert_eq!(adder.add_num(1, 2).as_deref(), Some("Sum is: 3"));
        assert!(adder.guard(|| Err(Error::computation("second"))).is_none());
        assert_eq!(
            rec.messages(),
            vec![
                "Error: computation fault: first",
                "Error: computation fault: second",
            ]
        );
    }

    #[test]
    fn guard_passes_through_ok() {
        let rec = Recorder::default();
        let adder = Adder::new(&rec);
        assert_eq!(adder.guard(|| Ok("fine".into())).as_deref(), Some("fine"));
        assert!(rec.messages().is_empty());
    }
}
