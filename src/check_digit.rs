//! # Check-Digit Computation
//!
//! The KVNR check digit is a weighted digit sum over a 10-element digit
//! sequence derived from the 9-character body (letter + 8 digits):
//!
//! 1. The letter maps to its 1-indexed alphabet position (A→1 … Z→26),
//!    rendered as two zero-padded decimal digits.
//! 2. Those two digits plus the eight body digits form the sequence.
//! 3. Positions alternate weights 1,2,1,2,… (0-indexed).
//! 4. Any weighted product ≥ 10 folds to the sum of its own digits.
//! 5. The check digit is the folded sum modulo 10.

/// Compute the check digit for a 9-character KVNR body (one uppercase
/// ASCII letter followed by eight ASCII digits).
///
/// Returns `None` if the body is not exactly 9 bytes, the leading
/// character is not an uppercase ASCII letter, or any of the remaining
/// characters is not an ASCII digit. Callers comparing the result
/// against a candidate's trailing digit therefore fail safely on
/// malformed bodies — `None` never equals a real digit.
pub fn compute_check_digit(body: &str) -> Option<u8> {
    let bytes = body.as_bytes();
    if bytes.len() != 9 {
        return None;
    }

    let letter = letter_value(bytes[0])?;

    // Digit sequence: zero-padded letter value, then the eight body digits.
    let mut digits = [0u8; 10];
    digits[0] = letter / 10;
    digits[1] = letter % 10;
    for (i, &b) in bytes[1..].iter().enumerate() {
        if !b.is_ascii_digit() {
            return None;
        }
        digits[i + 2] = b - b'0';
    }

    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let weight = if i % 2 == 0 { 1 } else { 2 };
            fold(u32::from(d) * weight)
        })
        .sum();

    Some((sum % 10) as u8)
}

/// Map an uppercase ASCII letter to its 1-indexed alphabet position
/// (A→1 … Z→26). Any other byte yields `None`.
fn letter_value(b: u8) -> Option<u8> {
    if b.is_ascii_uppercase() {
        Some(b - b'A' + 1)
    } else {
        None
    }
}

/// Fold a two-digit weighted product to the sum of its decimal digits.
/// Products here are at most 18 (9 × 2), so a single fold suffices.
fn fold(product: u32) -> u32 {
    if product >= 10 {
        product / 10 + product % 10
    } else {
        product
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_boundaries() {
        assert_eq!(letter_value(b'A'), Some(1));
        assert_eq!(letter_value(b'Z'), Some(26));
        assert_eq!(letter_value(b'a'), None);
        assert_eq!(letter_value(b'@'), None);
        assert_eq!(letter_value(b'['), None);
        assert_eq!(letter_value(b'0'), None);
    }

    #[test]
    fn fold_boundaries() {
        assert_eq!(fold(0), 0);
        assert_eq!(fold(9), 9);
        assert_eq!(fold(10), 1);
        assert_eq!(fold(14), 5);
        assert_eq!(fold(18), 9);
    }

    #[test]
    fn known_vector_letter_a() {
        // A→1→"01": [0,1,1,2,3,4,5,6,7,8] weighted and folded sums to 40.
        assert_eq!(compute_check_digit("A12345678"), Some(0));
    }

    #[test]
    fn known_vector_letter_z() {
        // Z→26→"26": the 6 at the weight-2 position folds 12→3.
        assert_eq!(compute_check_digit("Z12345678"), Some(3));
    }

    #[test]
    fn known_vector_all_nines() {
        // Every odd position carries 9×2=18, folding to 9.
        assert_eq!(compute_check_digit("A99999999"), Some(4));
    }

    #[test]
    fn known_vector_mid_alphabet() {
        assert_eq!(compute_check_digit("M87654321"), Some(1));
        assert_eq!(compute_check_digit("Q12345678"), Some(4));
    }

    #[test]
    fn known_vector_all_zeros() {
        // Only the letter contributes: A→[0,1], 1×2=2.
        assert_eq!(compute_check_digit("A00000000"), Some(2));
        assert_eq!(compute_check_digit("B00000000"), Some(4));
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(compute_check_digit(""), None);
        assert_eq!(compute_check_digit("A1234567"), None);
        assert_eq!(compute_check_digit("A123456789"), None);
    }

    #[test]
    fn rejects_bad_leading_letter() {
        assert_eq!(compute_check_digit("a12345678"), None);
        assert_eq!(compute_check_digit("112345678"), None);
        assert_eq!(compute_check_digit("Ä12345678"), None);
    }

    #[test]
    fn rejects_non_digit_body() {
        assert_eq!(compute_check_digit("A1234567X"), None);
        assert_eq!(compute_check_digit("AB2345678"), None);
    }

    #[test]
    fn rejects_multibyte_input() {
        // 9 chars but more than 9 bytes; must classify, not panic.
        assert_eq!(compute_check_digit("Ä1234567"), None);
        assert_eq!(compute_check_digit("A123456ä"), None);
    }
}
