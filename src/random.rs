use rand::seq::SliceRandom;
use rand::Rng;

use crate::participant::Participant;
use crate::strategy::target_sizes;
use crate::team::Team;

/// Uniformly shuffled participants cut into consecutive runs of the target sizes.
pub(crate) fn random_split<R: Rng + ?Sized>(
    participants: &[Participant],
    mut teams: Vec<Team>,
    rng: &mut R,
) -> Vec<Team> {
    let mut shuffled = participants.to_vec();
    shuffled.shuffle(rng);

    let targets = target_sizes(shuffled.len(), teams.len());
    let mut remaining = shuffled.into_iter();
    for (team, &size) in teams.iter_mut().zip(&targets) {
        for participant in remaining.by_ref().take(size) {
            team.push(participant);
        }
    }
    teams
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn teams(n: usize) -> Vec<Team> {
        (1..=n)
            .map(|i| Team::new(format!("team-{}", i), format!("T{}", i)))
            .collect()
    }

    fn roster(n: usize) -> Vec<Participant> {
        (1..=n)
            .map(|i| Participant::at_position(i, format!("P{}", i), i as f64))
            .collect()
    }

    #[test]
    fn test_random_sizes() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let result = random_split(&roster(14), teams(4), &mut rng);
        let sizes: Vec<usize> = result.iter().map(Team::len).collect();
        assert_eq!(sizes, vec![4, 4, 3, 3]);
    }

    #[test]
    fn test_random_varies_with_seed() {
        let players = roster(10);
        let first = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            random_split(&players, teams(2), &mut rng)[0]
                .players()
                .iter()
                .map(|p| p.id.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(first(1), first(1));
        assert!((2..20).any(|seed| first(seed) != first(1)));
    }
}
