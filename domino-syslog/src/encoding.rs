/// Latin-1 to Unicode conversion.
///
/// Domino writes its console in ISO-8859-1 even on UTF-8 hosts. Every byte is
/// one character and its value is the Unicode code point, so the conversion
/// cannot fail.
pub fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_unchanged() {
        assert_eq!(latin1_to_string(b"Server started"), "Server started");
    }

    #[test]
    fn test_empty() {
        assert_eq!(latin1_to_string(b""), "");
    }

    #[test]
    fn test_high_bytes_become_code_points() {
        // 0xFC is u-umlaut, 0xA9 is the copyright sign
        let text = latin1_to_string(b"M\xfcnchen \xa9");
        assert_eq!(text, "M\u{fc}nchen \u{a9}");
        assert_eq!(text.chars().count(), 9);
    }

    #[test]
    fn test_every_byte_maps_to_same_code_point() {
        let all: Vec<u8> = (0..=255u8).collect();
        let text = latin1_to_string(&all);
        let points: Vec<u32> = text.chars().map(u32::from).collect();
        let expected: Vec<u32> = (0..=255u32).collect();
        assert_eq!(points, expected);
    }
}
