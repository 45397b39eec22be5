use crate::lang::{Int, UInt};

const CAPACITY: usize = 24;

/// Numeric text produced for `PRINT`.
///
/// A `width` of zero prints just the digits. Otherwise the number is right
/// aligned in a field of `width` digits, padded with spaces, or with zeros
/// when the width is negative.
/// Widths above 9 carry a decimal point: `width / 100` fraction digits in
/// a field of `width % 100` digits.
pub struct Formatted {
    buf: [u8; CAPACITY],
    start: usize,
    end: usize,
}

impl Formatted {
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..self.end]
    }
}

impl std::fmt::Display for Formatted {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}

pub fn decimal(value: Int, width: Int) -> Formatted {
    format(value, false, width)
}

pub fn hex(value: Int, width: Int) -> Formatted {
    format(value, true, width)
}

fn format(value: Int, hex: bool, width: Int) -> Formatted {
    let mut buf = [b' '; CAPACITY];
    let mut len = i64::from(width);
    let mut zero = false;
    let mut dot: i64 = -1;
    if len < 0 {
        zero = true;
        len = -len;
    }
    if len > 9 {
        dot = (len / 100).min(9);
        len = (len % 100).min(10);
    }

    let sign = !hex && value < 0;
    let mut val: u64 = if hex {
        value as UInt as u64
    } else {
        (value as i64).unsigned_abs()
    };
    let base = if hex { 16 } else { 10 };

    // Built right to left; `at` is the next free slot.
    let end = CAPACITY;
    let mut at = CAPACITY;
    let mut put = |at: &mut usize, ch: u8| {
        *at -= 1;
        buf[*at] = ch;
    };
    loop {
        let digit = (val % base) as u8;
        val /= base;
        put(&mut at, if digit < 10 { b'0' + digit } else { b'A' + digit - 10 });
        if dot >= 0 {
            dot -= 1;
            if dot == 0 {
                put(&mut at, b'.');
            }
        }
        if len > 0 {
            len -= 1;
            if len == 0 {
                break;
            }
        }
        if dot < 0 && val == 0 {
            break;
        }
    }

    if zero {
        if len == 0 && sign {
            put(&mut at, b'-');
        }
        while len > 0 {
            len -= 1;
            put(&mut at, if len == 0 && sign { b'-' } else { b'0' });
        }
    } else {
        if sign {
            put(&mut at, b'-');
            if len > 0 {
                len -= 1;
            }
        }
        while len > 0 {
            len -= 1;
            put(&mut at, b' ');
        }
    }
    Formatted {
        buf,
        start: at,
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(value: Int, width: Int) -> String {
        decimal(value, width).to_string()
    }

    #[test]
    fn test_plain() {
        assert_eq!(d(0, 0), "0");
        assert_eq!(d(123, 0), "123");
        assert_eq!(d(-45, 0), "-45");
        assert_eq!(d(Int::min_value(), 0), Int::min_value().to_string());
        assert_eq!(hex(255, 0).to_string(), "FF");
        assert_eq!(hex(-1, 0).to_string(), format!("{:X}", UInt::max_value()));
    }

    #[test]
    fn test_widths() {
        assert_eq!(d(42, 4), "  42");
        assert_eq!(d(-42, 4), " -42");
        assert_eq!(d(42, -4), "0042");
        assert_eq!(d(-5, -3), "-05");
        assert_eq!(hex(10, -4).to_string(), "000A");
        // a field narrower than the number keeps the low digits
        assert_eq!(d(12345, 2), "45");
    }

    #[test]
    fn test_fixed_point() {
        assert_eq!(d(1234, 205), " 12.34");
        assert_eq!(d(5, 203), "0.05");
        assert_eq!(d(-150, 203), "-1.50");
    }

    #[test]
    fn test_extreme_widths() {
        assert_eq!(d(7, Int::max_value()).as_bytes().last(), Some(&b'7'));
        assert_eq!(d(7, Int::min_value()).as_bytes().last(), Some(&b'7'));
        assert!(hex(-1, Int::min_value()).as_bytes().len() < CAPACITY);
    }
}
