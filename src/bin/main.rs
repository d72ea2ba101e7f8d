use std::env;
use std::io;
use std::process::ExitCode;

use emulator::loader;
use emulator::vm::Vm;

fn main() -> ExitCode {
  let Some(path) = env::args().nth(1) else {
    eprintln!("usage: main <program.ls8>");
    return ExitCode::FAILURE;
  };
  let image = match loader::load_file(&path) {
    Ok(image) => image,
    Err(err) => {
      eprintln!("{path}: {err}");
      return ExitCode::FAILURE;
    }
  };
  let mut vm = Vm::new();
  if let Err(err) = vm.load_image(&image) {
    eprintln!("{path}: {err}");
    return ExitCode::FAILURE;
  }
  let mut stdout = io::stdout().lock();
  if let Err(err) = vm.run(&mut stdout) {
    eprintln!("{err}");
    return ExitCode::FAILURE;
  }
  ExitCode::SUCCESS
}
