use std::io::{stdin, stdout};
use std::process::ExitCode;

use upow_logger::upow_log;

mod repl;

fn main() -> ExitCode {
  let base = match repl::base_from_args(std::env::args().skip(1)) {
    Ok(base) => base,
    Err(error) => {
      upow_log!("usage: upow [base]: {error}");
      return ExitCode::FAILURE;
    }
  };

  let stdin = stdin();
  let mut stdout = stdout();

  match repl::run(stdin.lock(), &mut stdout, base) {
    Ok(()) => ExitCode::SUCCESS,
    Err(error) => {
      upow_log!("io failure: {error}");
      ExitCode::FAILURE
    }
  }
}
