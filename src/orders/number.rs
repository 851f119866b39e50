use rand::Rng;

/// Human-facing order number generator: `ORD-` plus six random digits.
///
/// Randomness alone is not trusted for uniqueness — the order store
/// enforces it, and placement retries generation a bounded number of
/// times on collision.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrderNumberGenerator;

impl OrderNumberGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self) -> String {
        let digits: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
        format!("ORD-{digits}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_is_prefix_plus_six_digits() {
        let number = OrderNumberGenerator::new().generate();
        let digits = number.strip_prefix("ORD-").expect("prefix");
        assert_eq!(digits.len(), 6);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}
