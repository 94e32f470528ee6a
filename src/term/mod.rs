extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Event, Runtime};
use crate::{error, lang::Error};
use ansi_term::Style;
use clap::Parser;
use linefeed::{Interface, ReadResult};
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "sd", version, about = "Run single-character stack machine programs")]
struct Cli {
    /// Program file, or `-` for standard input. Omit for a prompt.
    file: Option<PathBuf>,
    /// Print the position of each instruction as it runs
    #[arg(long)]
    trace: bool,
    /// Instructions executed between checks for Ctrl-C
    #[arg(long, default_value_t = 5000)]
    cycles: usize,
}

pub fn main() {
    let cli = Cli::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let status = match &cli.file {
        Some(path) => run_file(&cli, path, &interrupted),
        None => match prompt_loop(&cli, &interrupted) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("{}", error);
                2
            }
        },
    };
    std::process::exit(status);
}

fn run_file(cli: &Cli, path: &Path, interrupted: &AtomicBool) -> i32 {
    let code = match load(path) {
        Ok(code) => code,
        Err(error) => {
            print_error(&error);
            return 2;
        }
    };
    let mut runtime = Runtime::new(&code);
    runtime.tron(cli.trace);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = drive(&mut runtime, cli.cycles, interrupted, |s| {
        out.write_all(s.as_bytes())
    });
    match result {
        Ok(None) => 0,
        Ok(Some(error)) => {
            print_error(&error);
            1
        }
        Err(error) => {
            eprintln!("{}", error);
            2
        }
    }
}

fn prompt_loop(cli: &Cli, interrupted: &AtomicBool) -> std::io::Result<()> {
    let interface = Interface::new("SD")?;
    interface.set_prompt("> ")?;
    let mut runtime = Runtime::default();
    runtime.tron(cli.trace);
    loop {
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if line.trim().is_empty() {
            continue;
        }
        interface.add_history_unique(line.clone());
        runtime.enter(&line);
        interrupted.store(false, Ordering::SeqCst);
        let result = drive(&mut runtime, cli.cycles, interrupted, |s| {
            interface.write_fmt(format_args!("{}", s))
        })?;
        if let Some(error) = result {
            interface.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint(format!("?{}", error))
            ))?;
        }
    }
    Ok(())
}

/// Runs until the program stops, streaming recorded numbers and
/// trace positions through `write` as they appear.
fn drive<W>(
    runtime: &mut Runtime,
    cycles: usize,
    interrupted: &AtomicBool,
    mut write: W,
) -> std::io::Result<Option<Error>>
where
    W: FnMut(&str) -> std::io::Result<()>,
{
    let mut printed = 0;
    let mut mid_line = false;
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        let event = runtime.execute(cycles);
        for n in &runtime.output()[printed..] {
            if mid_line {
                write("\n")?;
                mid_line = false;
            }
            write(&format!("{}\n", n))?;
        }
        printed = runtime.output().len();
        match event {
            Event::Running => {}
            Event::Trace(addr, _) => {
                write(&format!("[{}]", addr))?;
                mid_line = true;
            }
            Event::Stopped => {
                if mid_line {
                    write("\n")?;
                }
                return Ok(None);
            }
            Event::Error(error) => {
                if mid_line {
                    write("\n")?;
                }
                return Ok(Some(error));
            }
        }
    }
}

fn print_error(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(format!("?{}", error)));
}

fn load(path: &Path) -> Result<String, Error> {
    let mut code = String::new();
    let result = if path == Path::new("-") {
        std::io::stdin().read_to_string(&mut code)
    } else {
        File::open(path).and_then(|mut file| file.read_to_string(&mut code))
    };
    match result {
        Ok(_) => Ok(code),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; msg.as_str())),
                _ => Err(error!(InternalError; msg.as_str())),
            }
        }
    }
}
