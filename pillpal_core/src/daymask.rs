//! Day-of-week bitmask codec.
//!
//! Weekly recurrence arrives from the backend as a 7-character bitmask,
//! index 0 = Monday through index 6 = Sunday, `'1'` = active. Decoding is
//! deliberately lenient: the mask comes from a trusted producer, so odd
//! input degrades to "fewer active days" rather than an error.

use crate::Weekday;

/// Decode a day mask into the active weekdays, in Mon..Sun order.
///
/// `None` or an empty string decodes to no days. A mask shorter than 7
/// characters decodes only the positions present; characters past index 6
/// are ignored; any character other than `'1'` marks the day inactive.
pub fn decode_day_mask(mask: Option<&str>) -> Vec<Weekday> {
    let Some(mask) = mask else {
        return Vec::new();
    };

    mask.chars()
        .take(Weekday::ALL.len())
        .enumerate()
        .filter(|(_, c)| *c == '1')
        .map(|(i, _)| Weekday::ALL[i])
        .collect()
}

/// Encode a set of weekdays as a 7-character mask, Monday-first.
///
/// Round-trips with [`decode_day_mask`] for well-formed masks.
pub fn encode_day_mask(days: &[Weekday]) -> String {
    Weekday::ALL
        .iter()
        .map(|day| if days.contains(day) { '1' } else { '0' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_absent_and_empty() {
        assert!(decode_day_mask(None).is_empty());
        assert!(decode_day_mask(Some("")).is_empty());
    }

    #[test]
    fn test_decode_single_days() {
        assert_eq!(decode_day_mask(Some("1000000")), vec![Weekday::Mon]);
        assert_eq!(decode_day_mask(Some("0000001")), vec![Weekday::Sun]);
    }

    #[test]
    fn test_decode_preserves_canonical_order() {
        assert_eq!(
            decode_day_mask(Some("1010100")),
            vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]
        );
    }

    #[test]
    fn test_decode_short_mask() {
        // Only the positions present decode
        assert_eq!(decode_day_mask(Some("101")), vec![Weekday::Mon, Weekday::Wed]);
    }

    #[test]
    fn test_decode_long_mask_ignores_tail() {
        assert_eq!(decode_day_mask(Some("000000111")), vec![Weekday::Sun]);
    }

    #[test]
    fn test_decode_junk_characters_are_inactive() {
        assert_eq!(decode_day_mask(Some("1x1?10z")), vec![
            Weekday::Mon,
            Weekday::Wed,
            Weekday::Fri,
        ]);
    }

    #[test]
    fn test_roundtrip_all_binary_masks() {
        // Exhaustive over every length-7 mask of {0,1}
        for bits in 0u32..128 {
            let mask: String = (0..7)
                .map(|i| if bits & (1 << i) != 0 { '1' } else { '0' })
                .collect();
            assert_eq!(encode_day_mask(&decode_day_mask(Some(&mask))), mask);
        }
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_day_mask(&[]), "0000000");
    }
}
