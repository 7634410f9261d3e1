//! National-ID check-digit validation (CPF and CNPJ)
//!
//! Both algorithms are weighted sums over the leading digits, with the rule
//! `dv = 0 if sum % 11 < 2 else 11 - sum % 11`. Preconditions (length,
//! digits only, not all identical) are checked up front, so the arithmetic
//! itself cannot fail and no error channel is needed.

const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validate the two check digits of an 11-digit CPF.
pub fn is_valid_cpf(cpf: &str) -> bool {
    let Some(digits) = parse_digits(cpf, 11) else {
        return false;
    };
    if all_identical(&digits) {
        return false;
    }

    // First DV: weights 10..2 over digits 0..9; second DV: weights 11..2
    // over digits 0..10.
    let first = weighted_check_digit(&digits[..9], (2..=10).rev());
    let second = weighted_check_digit(&digits[..10], (2..=11).rev());

    first == digits[9] && second == digits[10]
}

/// Validate the two check digits of a 14-digit CNPJ.
pub fn is_valid_cnpj(cnpj: &str) -> bool {
    let Some(digits) = parse_digits(cnpj, 14) else {
        return false;
    };
    if all_identical(&digits) {
        return false;
    }

    let first = weighted_check_digit(&digits[..12], CNPJ_WEIGHTS_FIRST.into_iter());
    let second = weighted_check_digit(&digits[..13], CNPJ_WEIGHTS_SECOND.into_iter());

    first == digits[12] && second == digits[13]
}

fn weighted_check_digit(digits: &[u32], weights: impl Iterator<Item = u32>) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => 11 - remainder,
    }
}

fn parse_digits(value: &str, expected_len: usize) -> Option<Vec<u32>> {
    if value.len() != expected_len {
        return None;
    }
    value.chars().map(|c| c.to_digit(10)).collect()
}

fn all_identical(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cpf_vectors() {
        assert!(is_valid_cpf("52998224725"));
        assert!(is_valid_cpf("12345678909"));
    }

    #[test]
    fn test_repeated_digit_cpf_rejected() {
        for digit in 0..=9 {
            let cpf = digit.to_string().repeat(11);
            assert!(!is_valid_cpf(&cpf), "{cpf} should be invalid");
        }
    }

    #[test]
    fn test_wrong_check_digit_cpf_rejected() {
        assert!(!is_valid_cpf("52998224726"));
        assert!(!is_valid_cpf("52998224715"));
        assert!(!is_valid_cpf("12345678900"));
    }

    #[test]
    fn test_malformed_cpf_rejected() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("5299822472"));
        assert!(!is_valid_cpf("529982247250"));
        assert!(!is_valid_cpf("5299822472a"));
        assert!(!is_valid_cpf("529.982.247-25"));
    }

    #[test]
    fn test_valid_cnpj_vectors() {
        assert!(is_valid_cnpj("11222333000181"));
        assert!(is_valid_cnpj("11444777000161"));
    }

    #[test]
    fn test_repeated_digit_cnpj_rejected() {
        for digit in 0..=9 {
            let cnpj = digit.to_string().repeat(14);
            assert!(!is_valid_cnpj(&cnpj), "{cnpj} should be invalid");
        }
    }

    #[test]
    fn test_wrong_check_digit_cnpj_rejected() {
        assert!(!is_valid_cnpj("11222333000182"));
        assert!(!is_valid_cnpj("11222333000171"));
    }

    #[test]
    fn test_malformed_cnpj_rejected() {
        assert!(!is_valid_cnpj("11222333/0001-81"));
        assert!(!is_valid_cnpj("1122233300018"));
    }
}
