extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use clap::Parser;
use linefeed::{Interface, ReadResult};
use nanobasic::mach::{Config, Runtime};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod host;
use host::Host;

#[derive(Parser)]
#[command(name = "nanobasic")]
#[command(about = "NanoBASIC for the terminal", long_about = None)]
struct Args {
    /// Print [n] as each program line starts
    #[arg(long)]
    trace: bool,
    /// Print the bytecode of each immediate line
    #[arg(long)]
    dump: bool,
    /// File holding the saved program
    #[arg(long, default_value = "eeprom.bin")]
    eeprom: PathBuf,
    /// Program text to enter at start-up
    program: Option<PathBuf>,
}

pub fn main() {
    let args = Args::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
    }
    if let Err(error) = main_loop(args, interrupted) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
    }
}

fn main_loop(args: Args, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let mut config = Config::host();
    config.trace = args.trace;
    config.dump = args.dump;
    let mut runtime = Runtime::new(Host::new(args.eeprom, interrupted), config);
    let interface = Interface::new("NanoBASIC")?;

    attached(&mut runtime, |r| r.boot())?;
    if let Some(path) = &args.program {
        let reader = BufReader::new(File::open(path)?);
        for line in reader.lines() {
            let line = line?;
            attached(&mut runtime, |r| r.enter(&line))?;
        }
    }

    loop {
        let prompt = if runtime.is_entry_mode() { ">" } else { "" };
        interface.set_prompt(prompt)?;
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if !line.trim().is_empty() {
            interface.add_history_unique(line.clone());
        }
        attached(&mut runtime, |r| r.enter(&line))?;
    }
    Ok(())
}

/// Runs `f` with the terminal switched to raw key reads.
fn attached<F>(runtime: &mut Runtime<Host>, f: F) -> std::io::Result<()>
where
    F: FnOnce(&mut Runtime<Host>),
{
    runtime.bios_mut().prepare()?;
    f(runtime);
    runtime.bios_mut().restore()
}
