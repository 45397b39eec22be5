use crate::lang::Int;
use crate::mach::{Bios, Config, Runtime};
use std::collections::VecDeque;


#[derive(Default)]
struct Console {
    input: VecDeque<u8>,
    output: String,
    clock: u32,
}

impl Bios for Console {
    fn read_char(&mut self) -> Option<u8> {
        self.input.pop_front()
    }
    fn write_char(&mut self, ch: u8) {
        self.output.push(ch as char);
    }
    fn now_ms(&mut self) -> u32 {
        self.clock += 1;
        self.clock
    }
    fn random(&mut self, _bound: Int) -> Int {
        0
    }
    fn seed_random(&mut self, _seed: Int) {}
    fn gpio_write(&mut self, _pin: Int, _value: Int) -> bool {
        true
    }
    fn gpio_read(&mut self, _pin: Int) -> Int {
        0
    }
    fn adc_read(&mut self, _channel: Int) -> Int {
        0
    }
    fn pwm_write(&mut self, _pin: Int, _value: Int) -> bool {
        true
    }
    fn persist_read(&mut self, _offset: usize, buf: &mut [u8]) {
        for b in buf.iter_mut() {
            *b = 0xff;
        }
    }
    fn persist_write(&mut self, _offset: usize, _bytes: &[u8]) {}
    fn persist_erase(&mut self, _offset: usize, _len: usize) {}
    fn system_reset(&mut self) {}
}

fn runtime() -> Runtime<Console> {
    Runtime::new(Console::default(), Config::default())
}

fn run(runtime: &mut Runtime<Console>, line: &str) -> String {
    runtime.bios_mut().output.clear();
    runtime.enter(line);
    let s = runtime.bios().output.replace("\r\n", "\n");
    s.trim_end_matches("OK\n").to_string()
}
