use log::trace;

use crate::config::SwapPolicy;
use crate::participant::Participant;
use crate::strategy::{serpentine_index, sorted_by_score_desc};
use crate::team::Team;

/// Size-balanced serpentine distribution followed by one swap pass between the
/// highest and lowest team.
///
/// The swap pass runs once and applies at most one exchange, keeping the cost at
/// O(team size squared).
pub(crate) fn hybrid(
    participants: &[Participant],
    mut teams: Vec<Team>,
    policy: SwapPolicy,
) -> Vec<Team> {
    let team_count = teams.len();
    for (position, participant) in sorted_by_score_desc(participants).into_iter().enumerate() {
        teams[serpentine_index(position, team_count)].push(participant);
    }

    improve_extremes(&mut teams, policy);
    teams
}

/// Swap one player between the max-total and min-total team if that strictly
/// narrows their gap. Returns whether a swap happened.
pub(crate) fn improve_extremes(teams: &mut [Team], policy: SwapPolicy) -> bool {
    let Some((max_index, min_index)) = extreme_teams(teams) else {
        return false;
    };
    if max_index == min_index {
        return false;
    }

    let Some((i, j)) = find_swap(&teams[max_index], &teams[min_index], policy) else {
        return false;
    };

    let (max_team, min_team) = pair_mut(teams, max_index, min_index);
    trace!(
        "swapping {} ({}) with {} ({})",
        max_team.players()[i].name,
        max_team.id,
        min_team.players()[j].name,
        min_team.id
    );
    max_team.swap_with(i, min_team, j);
    true
}

/// First team holding the highest total and first team holding the lowest.
fn extreme_teams(teams: &[Team]) -> Option<(usize, usize)> {
    let first = teams.first()?;
    let (mut max_index, mut min_index) = (0, 0);
    let (mut max_total, mut min_total) = (first.total_score(), first.total_score());
    for (index, team) in teams.iter().enumerate().skip(1) {
        if team.total_score() > max_total {
            max_index = index;
            max_total = team.total_score();
        }
        if team.total_score() < min_total {
            min_index = index;
            min_total = team.total_score();
        }
    }
    Some((max_index, min_index))
}

/// Player positions (in `high`, in `low`) whose exchange narrows the gap.
fn find_swap(high: &Team, low: &Team, policy: SwapPolicy) -> Option<(usize, usize)> {
    let current_gap = (high.total_score() - low.total_score()).abs();
    let mut best: Option<(usize, usize, f64)> = None;

    for (i, a) in high.players().iter().enumerate() {
        for (j, b) in low.players().iter().enumerate() {
            let new_high = high.total_score() - a.score + b.score;
            let new_low = low.total_score() - b.score + a.score;
            let gap = (new_high - new_low).abs();
            if gap >= current_gap {
                continue;
            }
            match policy {
                SwapPolicy::FirstImprovement => return Some((i, j)),
                SwapPolicy::BestImprovement => {
                    if best.map_or(true, |(_, _, best_gap)| gap < best_gap) {
                        best = Some((i, j, gap));
                    }
                }
            }
        }
    }

    best.map(|(i, j, _)| (i, j))
}

fn pair_mut(teams: &mut [Team], a: usize, b: usize) -> (&mut Team, &mut Team) {
    if a < b {
        let (left, right) = teams.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = teams.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
