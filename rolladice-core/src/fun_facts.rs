//! The fun fact shown under the roll button.

use rand::Rng;

/// Shown before the first roll and after a reset.
pub const PLACEHOLDER_FACT: &str = "Roll the dice to see a fun fact!";

pub const FUN_FACTS: [&str; 5] = [
    "Did you know? Rolling a 6 on a fair dice has a 1/6 chance!",
    "Believe in yourself! Every roll is a new opportunity.",
    "Fun Fact: The first dice were made from animal bones.",
    "Keep rolling! You're doing great.",
    "A small roll can lead to a big outcome. Just try!",
];

/// Uniform pick from [`FUN_FACTS`].
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FUN_FACTS[rng.gen_range(0..FUN_FACTS.len())]
}

pub fn is_fun_fact(text: &str) -> bool {
    FUN_FACTS.contains(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_placeholder_is_not_a_fact() {
        assert!(!is_fun_fact(PLACEHOLDER_FACT));
    }

    #[test]
    fn test_pick_covers_all_facts() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; FUN_FACTS.len()];
        for _ in 0..500 {
            let fact = pick(&mut rng);
            let index = FUN_FACTS.iter().position(|f| *f == fact).unwrap();
            seen[index] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
