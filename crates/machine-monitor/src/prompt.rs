use std::io::{BufRead, Write};

use anyhow::Result;
use domain::DomainError;

/// Ask the operator for a number on `input`, echoing `label` to `out`.
///
/// Empty input, end of input and non-numeric text are all rejected.
pub fn prompt_number<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<f64> {
    write!(out, "{}: ", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(DomainError::InvalidArgument(format!("no value entered for {}", label)).into());
    }

    let text = line.trim();
    text.parse::<f64>().map_err(|_| {
        DomainError::InvalidArgument(format!("{} must be a number, got '{}'", label, text)).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_number() {
        let mut input = Cursor::new("  72.5 \n");
        let mut out = Vec::new();

        let value = prompt_number(&mut input, &mut out, "Temperature (°C)").unwrap();

        assert_eq!(value, 72.5);
        assert_eq!(String::from_utf8(out).unwrap(), "Temperature (°C): ");
    }

    #[test]
    fn test_prompt_rejects_text() {
        let mut input = Cursor::new("hot\n");
        let err = prompt_number(&mut input, &mut Vec::new(), "Temperature").unwrap_err();
        assert_eq!(
            err.downcast_ref::<DomainError>(),
            Some(&DomainError::InvalidArgument(
                "Temperature must be a number, got 'hot'".to_string()
            ))
        );
    }

    #[test]
    fn test_prompt_end_of_input() {
        let mut input = Cursor::new("");
        assert!(prompt_number(&mut input, &mut Vec::new(), "Speed").is_err());
    }
}
