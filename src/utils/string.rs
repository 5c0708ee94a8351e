// Thu Oct 15 2026 - Alex

pub struct StringUtils;

impl StringUtils {
    /// Printable ASCII plus the whitespace controls `\t \n \r \x0b \x0c`.
    pub fn is_printable_byte(b: u8) -> bool {
        matches!(b, 0x20..=0x7e | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
    }

    pub fn all_printable(bytes: &[u8]) -> bool {
        bytes.iter().all(|b| Self::is_printable_byte(*b))
    }

    /// Character shown inside a single-quoted literal.
    pub fn char_repr(value: i64) -> String {
        let b = value as u8;
        match b {
            b'\n' => "\\n".to_string(),
            b'\r' => "\\r".to_string(),
            b'\t' => "\\t".to_string(),
            b'\\' => "\\\\".to_string(),
            b'\'' => "\\'".to_string(),
            0x20..=0x7e => (b as char).to_string(),
            _ => format!("\\x{:02x}", b),
        }
    }

    pub fn hex_literal(value: i64) -> String {
        if value < 0 {
            format!("-0x{:x}", value.unsigned_abs())
        } else {
            format!("0x{:x}", value)
        }
    }

    pub fn escape_string(s: &str) -> String {
        let mut result = String::new();

        for c in s.chars() {
            match c {
                '\\' => result.push_str("\\\\"),
                '"' => result.push_str("\\\""),
                '\n' => result.push_str("\\n"),
                '\r' => result.push_str("\\r"),
                '\t' => result.push_str("\\t"),
                c if c.is_control() => result.push_str(&format!("\\x{:02x}", c as u32)),
                c => result.push(c),
            }
        }

        result
    }

    /// Little-endian bytes of `value` decoded as text, when `size` is 4 or 8
    /// and every byte is printable.
    pub fn packed_text(value: i64, size: usize) -> Option<String> {
        let bytes = match size {
            4 => (value as u32).to_le_bytes().to_vec(),
            8 => (value as u64).to_le_bytes().to_vec(),
            _ => return None,
        };

        if !Self::all_printable(&bytes) {
            return None;
        }

        Some(bytes.iter().map(|b| *b as char).collect())
    }
}
