use ansi_term::Style;
use mortal::{Event, Key, PrepareConfig, PrepareState, Signal, Terminal};
use nanobasic::lang::Int;
use nanobasic::mach::Bios;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const EEPROM_SIZE: usize = 1024;

const PINS: usize = 20;
const ADC_CHANNELS: Int = 6;
const ADC_FIRST_PIN: usize = 14;
const PWM_PINS: [Int; 6] = [3, 5, 6, 9, 10, 11];

/// ## Desktop board
///
/// Console on stdin/stdout, a file standing in for the EEPROM and a
/// bank of virtual pins.

pub struct Host {
    terminal: Option<Terminal>,
    state: Option<PrepareState>,
    interrupted: Arc<AtomicBool>,
    last_poll: Option<Instant>,
    rng: StdRng,
    start: Instant,
    eeprom_path: PathBuf,
    eeprom: Vec<u8>,
    pins: [Int; PINS],
}

impl Host {
    pub fn new(eeprom_path: PathBuf, interrupted: Arc<AtomicBool>) -> Host {
        let mut eeprom = fs::read(&eeprom_path).unwrap_or_default();
        eeprom.resize(EEPROM_SIZE, 0xff);
        Host {
            terminal: Terminal::new().ok(),
            state: None,
            interrupted,
            last_poll: None,
            rng: StdRng::from_entropy(),
            start: Instant::now(),
            eeprom_path,
            eeprom,
            pins: [0; PINS],
        }
    }

    /// Raw key reads for the length of one line of execution.
    pub fn prepare(&mut self) -> io::Result<()> {
        self.interrupted.store(false, Ordering::SeqCst);
        if let Some(terminal) = &self.terminal {
            if self.state.is_none() {
                self.state = Some(terminal.prepare(PrepareConfig::default())?);
            }
        }
        Ok(())
    }

    pub fn restore(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        if let (Some(terminal), Some(state)) = (&self.terminal, self.state.take()) {
            terminal.restore(state)?;
        }
        Ok(())
    }

    fn poll_terminal(&mut self) -> Option<u8> {
        let now = Instant::now();
        if let Some(last) = self.last_poll {
            if now.duration_since(last) < Duration::from_millis(1) {
                return None;
            }
        }
        self.last_poll = Some(now);
        if self.state.is_none() {
            return None;
        }
        let terminal = self.terminal.as_ref()?;
        match terminal.read_event(Some(Duration::from_millis(0))) {
            Ok(Some(Event::Key(key))) => key_byte(key),
            Ok(Some(Event::Signal(Signal::Interrupt))) => Some(0x03),
            _ => None,
        }
    }

    fn store_eeprom(&mut self) {
        if let Err(error) = fs::write(&self.eeprom_path, &self.eeprom) {
            let message = format!("{}: {}", self.eeprom_path.display(), error);
            eprintln!("{}", Style::new().bold().paint(message));
        }
    }
}

fn key_byte(key: Key) -> Option<u8> {
    match key {
        Key::Char(ch) if ch.is_ascii() => Some(ch as u8),
        Key::Ctrl(ch) => Some(ch as u8 & 0x1f),
        Key::Enter => Some(b'\r'),
        Key::Backspace => Some(0x08),
        Key::Delete => Some(0x7f),
        Key::Tab => Some(b'\t'),
        Key::Escape => Some(0x1b),
        _ => None,
    }
}

fn pin_index(pin: Int) -> Option<usize> {
    if pin >= 0 && (pin as usize) < PINS {
        Some(pin as usize)
    } else {
        None
    }
}

impl Bios for Host {
    fn read_char(&mut self) -> Option<u8> {
        if self.interrupted.swap(false, Ordering::SeqCst) {
            return Some(0x03);
        }
        self.poll_terminal()
    }

    fn write_char(&mut self, ch: u8) {
        let mut out = io::stdout();
        let _ = out.write_all(&[ch]);
        if ch == b'\n' {
            let _ = out.flush();
        }
    }

    fn now_ms(&mut self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }

    fn random(&mut self, bound: Int) -> Int {
        if bound <= 0 {
            0
        } else {
            self.rng.gen_range(0..bound)
        }
    }

    fn seed_random(&mut self, seed: Int) {
        self.rng = StdRng::seed_from_u64(seed as u64);
    }

    fn gpio_write(&mut self, pin: Int, value: Int) -> bool {
        match pin_index(pin) {
            Some(index) => {
                self.pins[index] = (value != 0) as Int;
                true
            }
            None => false,
        }
    }

    fn gpio_read(&mut self, pin: Int) -> Int {
        pin_index(pin).map_or(-1, |index| self.pins[index])
    }

    fn adc_read(&mut self, channel: Int) -> Int {
        if (0..ADC_CHANNELS).contains(&channel) {
            self.pins[ADC_FIRST_PIN + channel as usize] * 1023
        } else {
            -1
        }
    }

    fn pwm_write(&mut self, pin: Int, value: Int) -> bool {
        if !PWM_PINS.contains(&pin) || !(0..=255).contains(&value) {
            return false;
        }
        self.pins[pin as usize] = (value != 0) as Int;
        true
    }

    fn persist_read(&mut self, offset: usize, buf: &mut [u8]) {
        for (index, byte) in buf.iter_mut().enumerate() {
            *byte = self.eeprom.get(offset + index).copied().unwrap_or(0xff);
        }
    }

    fn persist_write(&mut self, offset: usize, bytes: &[u8]) {
        for (index, byte) in bytes.iter().enumerate() {
            if let Some(cell) = self.eeprom.get_mut(offset + index) {
                *cell = *byte;
            }
        }
        self.store_eeprom();
    }

    fn persist_erase(&mut self, offset: usize, len: usize) {
        for cell in self.eeprom.iter_mut().skip(offset).take(len) {
            *cell = 0xff;
        }
        self.store_eeprom();
    }

    fn system_reset(&mut self) {
        self.pins = [0; PINS];
        let _ = io::stdout().flush();
    }

    fn idle(&mut self) {
        let _ = io::stdout().flush();
        std::thread::sleep(Duration::from_millis(1));
    }
}
