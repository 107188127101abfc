use rand::seq::SliceRandom;
use rand::Rng;

const PREFIXES: [&str; 40] = [
    "Blazing", "Mighty", "Swift", "Brave", "Wise", "Legendary", "Invincible", "Golden",
    "Lightning", "Windborne", "Solar", "Moonlit", "Starry", "Dragon", "Phoenix", "Tiger",
    "Energetic", "Clever", "Blue", "Red", "Green", "Black", "White", "Silver",
    "Royal", "Magic", "Super", "Dynamic", "Storm", "Thunder", "Aqua", "Ultra",
    "Extreme", "Spirited", "Sky", "Aurora", "Spartan", "Eagle", "Cosmic", "Ocean",
];

const SUFFIXES: [&str; 32] = [
    "Warriors", "Heroes", "Crew", "Squad", "Guild", "Clan", "Fighters", "Champions",
    "Legends", "Masters", "Elite", "Force", "United", "Avengers", "Express", "Explorers",
    "Hunters", "Defenders", "Attackers", "Breakers", "Survivors", "Creators", "Dream Team", "Aces",
    "Thunders", "Winners", "Challengers", "Mavericks", "Eagles", "Wolves", "Sharks", "Titans",
];

/// Random "<Prefix> <Suffix>" display name for a regular team.
pub fn generate_team_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = PREFIXES.choose(rng).copied().unwrap_or("Team");
    let suffix = SUFFIXES.choose(rng).copied().unwrap_or("United");
    format!("{} {}", prefix, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generate_team_name_deterministic() {
        let a = generate_team_name(&mut ChaCha8Rng::seed_from_u64(7));
        let b = generate_team_name(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);

        let (prefix, suffix) = a.split_once(' ').unwrap();
        assert!(PREFIXES.contains(&prefix));
        assert!(SUFFIXES.contains(&suffix));
    }
}
