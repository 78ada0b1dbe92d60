//! Byte-to-symbol encoding.

use crate::codec::alphabet::ALPHABET;

/// Returns the exact length in symbols of `encode` output for `byte_count`
/// input bytes: `ceil(byte_count * 8 / 5)`.
///
/// Callers use this to pre-size buffers; it matches the encoder's real
/// output length for every input.
#[inline]
#[must_use]
pub fn encoded_len(byte_count: usize) -> usize {
    (byte_count * 8 + 4) / 5
}

/// Encodes bytes as Crockford Base32 symbols.
///
/// Total function: every input has an encoding, and the empty slice encodes
/// to the empty string. Output uses only the canonical uppercase alphabet;
/// the excluded letters `I`, `L`, `O`, `U` never appear.
///
/// Bits are consumed most-significant first. The final partial 5-bit group,
/// if any, is zero-padded on its low side; that is the only padding the
/// format has.
#[must_use]
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(data.len()));
    let mut bytes = data.iter();
    // At most 4 carried bits plus one 8-bit refill, so 12 bits peak.
    let mut bit_buf: u16 = 0;
    let mut num_bits: u32 = 0;

    loop {
        if num_bits < 5 {
            match bytes.next() {
                Some(&byte) => {
                    bit_buf = (bit_buf << 8) | u16::from(byte);
                    num_bits += 8;
                }
                None => {
                    if num_bits == 0 {
                        break;
                    }
                    bit_buf <<= 5 - num_bits;
                    num_bits = 5;
                }
            }
        }
        let index = (bit_buf >> (num_bits - 5)) & 0x1F;
        out.push(ALPHABET[index as usize] as char);
        num_bits -= 5;
        bit_buf &= (1 << num_bits) - 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_encodes_to_empty_string() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn known_vectors() {
        assert_eq!(encode(b"Hello, World"), "91JPRV3F5GG5EVVJDHJ0");
        assert_eq!(encode(&[0x00]), "00");
        assert_eq!(encode(&[0xFF; 5]), "ZZZZZZZZ");
        assert_eq!(encode(b"foobar"), "CSQPYRK1E8");
    }

    #[test]
    fn five_bit_aligned_input_needs_no_padding() {
        // 5 bytes = 40 bits = 8 symbols exactly.
        assert_eq!(encode(&[0xF8, 0x3E, 0x0F, 0x83, 0xE0]), "Z0Z0Z0Z0");
    }

    #[test]
    fn single_byte_pads_low_side() {
        // 0x4B = 01001 011(00): symbols 9 then 12 = 'C'.
        assert_eq!(encode(&[0x4B]), "9C");
    }

    #[test]
    fn output_length_matches_prediction() {
        for n in 0..64 {
            let data = vec![0xA5u8; n];
            assert_eq!(encode(&data).len(), encoded_len(n), "length mismatch at n={n}");
        }
    }

    #[test]
    fn output_never_contains_excluded_letters() {
        let data: Vec<u8> = (0u16..=255).map(|b| b as u8).collect();
        let encoded = encode(&data);
        for excluded in ['I', 'L', 'O', 'U'] {
            assert!(!encoded.contains(excluded));
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        let data = b"Hello, World";
        assert_eq!(encode(data), encode(data));
    }

    #[test]
    fn encoded_len_formula() {
        assert_eq!(encoded_len(0), 0);
        assert_eq!(encoded_len(1), 2);
        assert_eq!(encoded_len(2), 4);
        assert_eq!(encoded_len(3), 5);
        assert_eq!(encoded_len(4), 7);
        assert_eq!(encoded_len(5), 8);
        assert_eq!(encoded_len(12), 20);
        assert_eq!(encoded_len(20), 32);
    }
}
