use crate::errors::InputError;
use crate::models::{SensorReading, DIRECTIONS};
use std::io::{BufRead, Write};

/// Why a typed-in count was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountRejection {
    NotAnInteger,
    Negative,
}

impl CountRejection {
    pub fn message(self) -> &'static str {
        match self {
            CountRejection::NotAnInteger => "Please enter a valid integer or press Enter for 0.",
            CountRejection::Negative => "Please enter a non-negative integer.",
        }
    }
}

/// Interprets one line of user input. Blank means 0.
pub fn parse_count_input(raw: &str) -> Result<u32, CountRejection> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| CountRejection::NotAnInteger)?;
    if value < 0 {
        return Err(CountRejection::Negative);
    }
    u32::try_from(value).map_err(|_| CountRejection::NotAnInteger)
}

/// Asks for a count per direction, re-prompting until each answer is valid.
/// Fails only if the input stream ends or cannot be read.
pub fn prompt_user_for_counts<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<SensorReading, InputError> {
    let mut entries = Vec::with_capacity(DIRECTIONS.len());
    for direction in DIRECTIONS {
        loop {
            write!(output, "Enter vehicle count for {} (or Enter for 0): ", direction)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(InputError::EndOfInput);
            }
            match parse_count_input(&line) {
                Ok(count) => {
                    entries.push((direction, count));
                    break;
                }
                Err(rejection) => writeln!(output, "{}", rejection.message())?,
            }
        }
    }
    Ok(SensorReading::from_partial(entries))
}

/// Collects one reading per cycle from the user.
pub fn collect_interactive_readings<R: BufRead, W: Write>(
    cycles: usize,
    input: &mut R,
    output: &mut W,
) -> Result<Vec<SensorReading>, InputError> {
    let mut readings = Vec::with_capacity(cycles);
    for i in 0..cycles {
        writeln!(output, "\n--- Cycle {} input ---", i + 1)?;
        readings.push(prompt_user_for_counts(input, output)?);
    }
    log::debug!("collected {} interactive readings", readings.len());
    Ok(readings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_blank_is_zero() {
        assert_eq!(parse_count_input(""), Ok(0));
        assert_eq!(parse_count_input("   \n"), Ok(0));
        assert_eq!(parse_count_input(" 12 \n"), Ok(12));
    }

    #[test]
    fn parse_rejects_negative_and_garbage() {
        assert_eq!(parse_count_input("-3"), Err(CountRejection::Negative));
        assert_eq!(parse_count_input("abc"), Err(CountRejection::NotAnInteger));
        assert_eq!(parse_count_input("2.5"), Err(CountRejection::NotAnInteger));
    }

    #[test]
    fn prompt_retries_until_valid() {
        let mut input = Cursor::new("x\n-1\n4\n\n7\n1\n");
        let mut output = Vec::new();
        let reading = prompt_user_for_counts(&mut input, &mut output).unwrap();
        assert_eq!(reading.as_array(), [4, 0, 7, 1]);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Please enter a valid integer or press Enter for 0."));
        assert!(text.contains("Please enter a non-negative integer."));
        assert_eq!(text.matches("Enter vehicle count for North").count(), 3);
    }

    #[test]
    fn collect_stops_with_error_at_end_of_input() {
        let mut input = Cursor::new("1\n2\n3\n4\n5\n");
        let mut output = Vec::new();
        let err = collect_interactive_readings(2, &mut input, &mut output).unwrap_err();
        assert!(matches!(err, InputError::EndOfInput));
    }

    #[test]
    fn collect_builds_one_reading_per_cycle() {
        let mut input = Cursor::new("1\n2\n3\n4\n\n\n\n9\n");
        let mut output = Vec::new();
        let readings = collect_interactive_readings(2, &mut input, &mut output).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[1].as_array(), [0, 0, 0, 9]);
        assert!(String::from_utf8(output).unwrap().contains("--- Cycle 2 input ---"));
    }
}
