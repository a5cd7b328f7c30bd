use crate::utils::error::{AppError, Result};
use std::io::Write;

/// 輸出單一迭代行，例如 `Recursing: 3`
pub fn report_iteration<W: Write>(out: &mut W, label: &str, index: u32) -> Result<()> {
    writeln!(out, "{}: {}", label, index)?;
    Ok(())
}

/// 回傳 `input * 2`，並依序輸出 0..iterations 的迭代行。
///
/// 溢位時在輸出任何內容之前就回傳錯誤。
pub fn double_and_report<W: Write>(
    out: &mut W,
    input: i32,
    iterations: u32,
    label: &str,
) -> Result<i32> {
    let doubled = input
        .checked_mul(2)
        .ok_or(AppError::ArithmeticOverflow { input })?;
    tracing::debug!("Doubled {} -> {}", input, doubled);

    for index in 0..iterations {
        report_iteration(out, label, index)?;
    }

    Ok(doubled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_iteration_format() {
        let mut out = Vec::new();
        report_iteration(&mut out, "Recursing", 3).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Recursing: 3\n");
    }

    #[test]
    fn test_double_and_report_defaults() {
        let mut out = Vec::new();
        let doubled = double_and_report(&mut out, 5, 5, "Recursing").unwrap();

        assert_eq!(doubled, 10);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Recursing: 0\nRecursing: 1\nRecursing: 2\nRecursing: 3\nRecursing: 4\n"
        );
    }

    #[test]
    fn test_negative_input_doubles() {
        let mut out = Vec::new();
        assert_eq!(double_and_report(&mut out, -21, 1, "n").unwrap(), -42);
        assert_eq!(double_and_report(&mut out, i32::MIN / 2, 0, "n").unwrap(), i32::MIN);
    }

    #[test]
    fn test_zero_iterations_writes_nothing() {
        let mut out = Vec::new();
        assert_eq!(double_and_report(&mut out, 0, 0, "Recursing").unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_overflow_fails_before_output() {
        let mut out = Vec::new();
        let err = double_and_report(&mut out, i32::MAX, 5, "Recursing").unwrap_err();

        assert!(matches!(err, AppError::ArithmeticOverflow { input } if input == i32::MAX));
        assert!(out.is_empty());
    }
}
