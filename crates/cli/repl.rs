use std::io::{self, BufRead, Write};

use upow_math::{upper_power, PowerError, UpowResult, DEFAULT_BASE};

pub const PROMPT: &str = "Enter a number: ";

/// The base the loop runs in: the single optional command-line argument,
/// defaulting to 2.
pub fn base_from_args<A: Iterator<Item = String>>(mut args: A) -> UpowResult<i128> {
  let base = match args.next() {
    None => return Ok(DEFAULT_BASE as i128),
    Some(raw) => raw.parse::<i128>().map_err(|_| PowerError::MalformedInput)?,
  };

  if args.next().is_some() {
    return Err(PowerError::MalformedInput);
  }

  if base < 2 {
    return Err(PowerError::InvalidBase);
  }

  Ok(base)
}

pub fn parse_value(line: &str) -> UpowResult<i128> {
  line.trim().parse::<i128>().map_err(|_| PowerError::MalformedInput)
}

/// Prompt, read, compute, print, repeat. Calculator errors and malformed
/// lines are reported and the loop continues; only end of input ends it.
pub fn run<R: BufRead, W: Write>(mut input: R, output: &mut W, base: i128) -> io::Result<()> {
  loop {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
      writeln!(output, "Received termination signal, ending program.")?;
      return Ok(());
    }

    match parse_value(&line).and_then(|value| upper_power(value, base)) {
      Ok(power) => writeln!(output, "value: {}, upper: {}", power.value, power.result)?,
      Err(error) => writeln!(output, "{error}")?,
    }
  }
}
