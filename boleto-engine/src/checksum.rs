//! FEBRABAN check-digit arithmetic
//!
//! Mod10 covers the three typable-line fields; Mod11 covers the general
//! check digit of the 43-digit barcode block. Both scan right to left and
//! ignore any non-digit character, so callers gate the input format first.

/// Compute the Mod10 check digit of a digit field.
///
/// Multipliers alternate 2, 1, 2, 1, ... from the rightmost digit; products
/// above 9 collapse to the sum of their own digits.
pub fn mod10(field: &str) -> u32 {
    let mut sum = 0;
    let mut multiplier = 2;

    for digit in field.chars().rev().filter_map(|c| c.to_digit(10)) {
        let product = digit * multiplier;
        sum += if product > 9 {
            product / 10 + product % 10
        } else {
            product
        };
        multiplier = if multiplier == 2 { 1 } else { 2 };
    }

    (10 - sum % 10) % 10
}

/// Compute the Mod11 check digit of the 43-digit barcode block.
///
/// Multipliers cycle 2..=9 from the rightmost digit. Remainders 0, 1, and
/// 10 all map to check digit 1 per the FEBRABAN rule.
pub fn mod11(block: &str) -> u32 {
    let mut sum = 0;
    let mut multiplier = 2;

    for digit in block.chars().rev().filter_map(|c| c.to_digit(10)) {
        sum += digit * multiplier;
        multiplier = if multiplier == 9 { 2 } else { multiplier + 1 };
    }

    match sum % 11 {
        0 | 1 | 10 => 1,
        remainder => 11 - remainder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod10_known_vectors() {
        // Field 1 of the reference Bradesco typable line and a published
        // FEBRABAN example.
        assert_eq!(mod10("237933812"), 8);
        assert_eq!(mod10("378874650"), 5);
        assert_eq!(mod10("6008301331"), 2);
        assert_eq!(mod10("3309360310"), 9);
    }

    #[test]
    fn test_mod10_zero_remainder_maps_to_zero() {
        // sum 9*2=18 -> 1+8=9, plus 1*1 -> 10; remainder 0 must yield 0,
        // not 10.
        assert_eq!(mod10("19"), 0);
    }

    #[test]
    fn test_mod10_deterministic() {
        let field = "6008301331";
        assert_eq!(mod10(field), mod10(field));
    }

    #[test]
    fn test_mod11_reference_block() {
        // Block reassembled from the reference typable line.
        let block = "2379838600000100003381260083013313309360310";
        assert_eq!(block.len(), 43);
        assert_eq!(mod11(block), 8);
        assert_eq!(mod11(block), mod11(block));
    }

    #[test]
    fn test_mod11_low_remainders_map_to_one() {
        // "26" -> 6*2 + 2*3 = 18, remainder 7 -> 4.
        assert_eq!(mod11("26"), 4);
        // "16" -> 6*2 + 1*3 = 15, remainder 4 -> 7.
        assert_eq!(mod11("16"), 7);
        // "06" -> 6*2 = 12, remainder 1 -> 1.
        assert_eq!(mod11("06"), 1);
        // "0" -> sum 0, remainder 0 -> 1.
        assert_eq!(mod11("0"), 1);
        // "5" -> 5*2 = 10, remainder 10 -> 1.
        assert_eq!(mod11("5"), 1);
        // "55" -> 5*2 + 5*3 = 25, remainder 3 -> 8.
        assert_eq!(mod11("55"), 8);
        // "5555" -> 5*(2+3+4+5) = 70, remainder 4 -> 7.
        assert_eq!(mod11("5555"), 7);
    }
}
