//! ## Program record
//!
//! `SAVE` and `LOAD` copy the whole program to and from the platform's
//! persistent store as one record at offset zero:
//!
//! | Offset | Bytes | |
//! |---|---|---|
//! | 0 | 2 | magic `NB` |
//! | 2 | 1 | major version |
//! | 3 | 1 | minor version |
//! | 4 | 2 | program length, little endian, terminator included |
//! | 6 | 1 | autorun flag |
//! | 7 | 1 | reserved |
//! | 8 | length | program bytes |

use super::{Bios, Program};
use crate::error;
use crate::lang::{Error, EOL};

type Result<T> = std::result::Result<T, Error>;

pub const HEADER_LEN: usize = 8;

const MAGIC: [u8; 2] = *b"NB";
const MAJOR: u8 = 1;
const MINOR: u8 = 0;

/// Writes the program. An empty program erases the record instead.
pub fn save<B: Bios>(bios: &mut B, program: &Program, autorun: bool) -> Result<()> {
    if program.is_empty() {
        bios.persist_erase(0, HEADER_LEN);
        return Ok(());
    }
    let bytes = program.bytes();
    if bytes.len() > u16::max_value() as usize {
        return Err(error!(ProgramAreaOverflow));
    }
    let len = (bytes.len() as u16).to_le_bytes();
    let header = [
        MAGIC[0],
        MAGIC[1],
        MAJOR,
        MINOR,
        len[0],
        len[1],
        autorun as u8,
        0,
    ];
    bios.persist_write(0, &header);
    bios.persist_write(HEADER_LEN, bytes);
    Ok(())
}

/// Replaces the program with the stored record and returns its autorun
/// flag. A missing or damaged record leaves the program untouched.
pub fn load<B: Bios>(bios: &mut B, program: &mut Program) -> Result<bool> {
    let mut header = [0u8; HEADER_LEN];
    bios.persist_read(0, &mut header);
    if header[..2] != MAGIC || header[2] != MAJOR {
        return Err(error!(ProgramEmpty));
    }
    let len = u16::from_le_bytes([header[4], header[5]]) as usize;
    if len == 0 || len > program.capacity() {
        return Err(error!(ProgramEmpty));
    }
    let mut bytes = vec![0u8; len];
    bios.persist_read(HEADER_LEN, &mut bytes);
    if bytes[len - 1] != EOL {
        return Err(error!(ProgramEmpty));
    }
    program.program_area_mut()[..len].copy_from_slice(&bytes);
    Ok(header[6] != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{encode_line, Int};

    struct Eeprom(Vec<u8>);

    impl Bios for Eeprom {
        fn read_char(&mut self) -> Option<u8> {
            None
        }
        fn write_char(&mut self, _ch: u8) {}
        fn now_ms(&mut self) -> u32 {
            0
        }
        fn random(&mut self, _bound: Int) -> Int {
            0
        }
        fn seed_random(&mut self, _seed: Int) {}
        fn gpio_write(&mut self, _pin: Int, _value: Int) -> bool {
            false
        }
        fn gpio_read(&mut self, _pin: Int) -> Int {
            -1
        }
        fn adc_read(&mut self, _channel: Int) -> Int {
            -1
        }
        fn pwm_write(&mut self, _pin: Int, _value: Int) -> bool {
            false
        }
        fn persist_read(&mut self, offset: usize, buf: &mut [u8]) {
            buf.copy_from_slice(&self.0[offset..offset + buf.len()]);
        }
        fn persist_write(&mut self, offset: usize, bytes: &[u8]) {
            self.0[offset..offset + bytes.len()].copy_from_slice(bytes);
        }
        fn persist_erase(&mut self, offset: usize, len: usize) {
            for b in &mut self.0[offset..offset + len] {
                *b = 0xff;
            }
        }
        fn system_reset(&mut self) {}
    }

    fn program(lines: &[&str]) -> Program {
        let mut p = Program::new(120, 64);
        for line in lines {
            let len = encode_line(line, p.line_area_mut()).unwrap();
            p.append_line(len).unwrap();
        }
        p
    }

    #[test]
    fn test_save_and_load() {
        let mut eeprom = Eeprom(vec![0xff; 128]);
        let p = program(&["10 PRINT 1", "GOTO 10"]);
        save(&mut eeprom, &p, true).unwrap();
        assert_eq!(&eeprom.0[..2], b"NB");
        let mut q = Program::new(120, 64);
        assert_eq!(load(&mut eeprom, &mut q), Ok(true));
        assert_eq!(q.bytes(), p.bytes());
    }

    #[test]
    fn test_damaged_record() {
        let mut eeprom = Eeprom(vec![0xff; 128]);
        let mut q = program(&["A=1"]);
        let before = q.bytes().to_vec();
        assert_eq!(
            load(&mut eeprom, &mut q).unwrap_err().code(),
            crate::lang::ErrorCode::ProgramEmpty
        );
        save(&mut eeprom, &program(&["B=2"]), false).unwrap();
        eeprom.0[1] = b'X';
        assert!(load(&mut eeprom, &mut q).is_err());
        eeprom.0[1] = b'B';
        eeprom.0[4] = 0xff;
        assert!(load(&mut eeprom, &mut q).is_err());
        assert_eq!(q.bytes(), &before[..]);
    }

    #[test]
    fn test_empty_program_erases() {
        let mut eeprom = Eeprom(vec![0; 128]);
        save(&mut eeprom, &program(&[]), false).unwrap();
        assert_eq!(&eeprom.0[..HEADER_LEN], &[0xff; HEADER_LEN]);
    }
}
