use crate::lang::Int;

/// ## Platform services
///
/// Everything the engine needs from the board it runs on. Reads of pins
/// and converters return a negative value for an invalid pin or
/// channel; writes return `false`.

pub trait Bios {
    /// Next pending console byte, without waiting.
    fn read_char(&mut self) -> Option<u8>;
    fn write_char(&mut self, ch: u8);
    /// Free running millisecond clock.
    fn now_ms(&mut self) -> u32;
    /// Random number in `0..bound`, zero when `bound` is not positive.
    fn random(&mut self, bound: Int) -> Int;
    fn seed_random(&mut self, seed: Int);
    fn gpio_write(&mut self, pin: Int, value: Int) -> bool;
    fn gpio_read(&mut self, pin: Int) -> Int;
    fn adc_read(&mut self, channel: Int) -> Int;
    fn pwm_write(&mut self, pin: Int, value: Int) -> bool;
    fn persist_read(&mut self, offset: usize, buf: &mut [u8]);
    fn persist_write(&mut self, offset: usize, bytes: &[u8]);
    fn persist_erase(&mut self, offset: usize, len: usize);
    fn system_reset(&mut self);

    /// Called on every pass of a polling loop.
    fn idle(&mut self) {}

    fn write_str(&mut self, s: &str) {
        for ch in s.bytes() {
            self.write_char(ch);
        }
    }
}
