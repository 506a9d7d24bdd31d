use rand::Rng;

/// Draws a random order number between `000-001` and `999-999`.
///
/// Collisions with stored orders are resolved by the store drawing again.
pub fn random_order_number() -> String {
    format_order_number(rand::thread_rng().gen_range(1..=999_999))
}

/// Zero-pads to six digits and splits the halves with a dash.
pub fn format_order_number(number: u32) -> String {
    let digits = format!("{number:06}");
    format!("{}-{}", &digits[..3], &digits[3..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_order_number() {
        assert_eq!(format_order_number(1), "000-001");
        assert_eq!(format_order_number(42017), "042-017");
        assert_eq!(format_order_number(999_999), "999-999");
    }

    #[test]
    fn test_random_order_number_shape() {
        for _ in 0..100 {
            let number = random_order_number();
            assert_eq!(number.len(), 7);
            assert_eq!(&number[3..4], "-");
            assert!(number.chars().filter(|c| *c != '-').all(|c| c.is_ascii_digit()));
            assert_ne!(number, "000-000");
        }
    }
}
