//! The greeting and the tip table.

use rand::Rng;
use rand::rngs::StdRng;

/// The fixed greeting.
pub const GREETING: &str = "Hello, world!";

/// Tips, in order.
pub const TIPS: [&str; 4] = [
    "Works on my machine",
    "Did you reboot?",
    "refresh the browser.",
    "Restart the Service",
];

/// Pick a tip uniformly at random.
pub fn random_tip(rng: &mut StdRng) -> &'static str {
    TIPS[rng.random_range(0..TIPS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn greeting_is_exact() {
        assert_eq!(GREETING, "Hello, world!");
    }

    #[test]
    fn table_has_four_entries_in_order() {
        assert_eq!(TIPS.len(), 4);
        assert_eq!(TIPS[0], "Works on my machine");
        assert_eq!(TIPS[1], "Did you reboot?");
        assert_eq!(TIPS[2], "refresh the browser.");
        assert_eq!(TIPS[3], "Restart the Service");
    }

    #[test]
    fn picks_are_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let tip = random_tip(&mut rng);
            assert!(!tip.is_empty());
            assert!(TIPS.contains(&tip));
        }
    }

    #[test]
    fn picks_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0u32; 4];
        for _ in 0..4000 {
            let tip = random_tip(&mut rng);
            let index = TIPS.iter().position(|t| *t == tip).unwrap();
            counts[index] += 1;
        }
        for count in counts {
            assert!((800..=1200).contains(&count), "skewed counts: {counts:?}");
        }
    }
}
