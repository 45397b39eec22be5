#![allow(dead_code)]
use nanobasic::lang::Int;
use nanobasic::mach::{Bios, Config, Runtime};
use std::collections::VecDeque;

pub const EEPROM_SIZE: usize = 1024;

/// After this many idle calls with nothing typed the console presses
/// Ctrl-C, so a runaway program ends the test instead of hanging it.
const IDLE_LIMIT: usize = 100_000;

pub struct Console {
    pub input: VecDeque<u8>,
    pub output: String,
    pub clock: u32,
    pub eeprom: Vec<u8>,
    pub pins: [Int; 20],
    pub pwm: Vec<(Int, Int)>,
    pub resets: usize,
    seed: u32,
    idles: usize,
}

impl Console {
    pub fn new() -> Console {
        Console::with_eeprom(vec![0xff; EEPROM_SIZE])
    }

    pub fn with_eeprom(eeprom: Vec<u8>) -> Console {
        Console {
            input: VecDeque::new(),
            output: String::new(),
            clock: 0,
            eeprom,
            pins: [0; 20],
            pwm: vec![],
            resets: 0,
            seed: 1,
            idles: 0,
        }
    }

    pub fn type_str(&mut self, s: &str) {
        self.input.extend(s.bytes());
    }
}

impl Bios for Console {
    fn read_char(&mut self) -> Option<u8> {
        self.input.pop_front()
    }

    fn write_char(&mut self, ch: u8) {
        self.output.push(ch as char);
    }

    fn now_ms(&mut self) -> u32 {
        self.clock = self.clock.wrapping_add(1);
        self.clock
    }

    fn random(&mut self, bound: Int) -> Int {
        if bound <= 0 {
            return 0;
        }
        self.seed = self.seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
        ((self.seed >> 16) % bound as u32) as Int
    }

    fn seed_random(&mut self, seed: Int) {
        self.seed = seed as u32;
    }

    fn gpio_write(&mut self, pin: Int, value: Int) -> bool {
        match self.pins.get_mut(pin as usize) {
            Some(level) if pin >= 0 => {
                *level = (value != 0) as Int;
                true
            }
            _ => false,
        }
    }

    fn gpio_read(&mut self, pin: Int) -> Int {
        if pin < 0 {
            return -1;
        }
        self.pins.get(pin as usize).copied().unwrap_or(-1)
    }

    fn adc_read(&mut self, channel: Int) -> Int {
        if (0..6).contains(&channel) {
            channel * 100
        } else {
            -1
        }
    }

    fn pwm_write(&mut self, pin: Int, value: Int) -> bool {
        if ![3, 5, 6, 9, 10, 11].contains(&pin) || !(0..=255).contains(&value) {
            return false;
        }
        self.pwm.push((pin, value));
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
    }

    fn persist_erase(&mut self, offset: usize, len: usize) {
        for cell in self.eeprom.iter_mut().skip(offset).take(len) {
            *cell = 0xff;
        }
    }

    fn system_reset(&mut self) {
        self.resets += 1;
        self.pins = [0; 20];
    }

    fn idle(&mut self) {
        self.idles += 1;
        if self.idles == IDLE_LIMIT && self.input.is_empty() {
            self.input.push_back(0x03);
        }
    }
}

pub fn config() -> Config {
    Config {
        autorun_delay_ms: 50,
        ..Config::default()
    }
}

pub fn runtime() -> Runtime<Console> {
    Runtime::new(Console::new(), config())
}

/// Output of one console line with `\r\n` folded to `\n` and the
/// closing `OK` prompt removed.
pub fn exec(r: &mut Runtime<Console>, line: &str) -> String {
    r.bios_mut().output.clear();
    r.enter(line);
    tidy(&r.bios().output)
}

/// Enters a program with `PROG` ... `#`.
pub fn prog(r: &mut Runtime<Console>, lines: &[&str]) {
    r.enter("PROG");
    for line in lines {
        r.enter(line);
    }
    r.enter("#");
    r.bios_mut().output.clear();
}

pub fn tidy(output: &str) -> String {
    let s = output.replace("\r\n", "\n");
    s.trim_end_matches("OK\n").to_string()
}
