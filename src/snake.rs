use crate::participant::Participant;
use crate::strategy::{serpentine_index, sorted_by_score_desc};
use crate::team::Team;

/// Classic snake draft: highest score first, picking order bouncing between the
/// first and last team (0, 1, .., n-1, n-1, .., 0, ..).
pub(crate) fn snake_draft(participants: &[Participant], mut teams: Vec<Team>) -> Vec<Team> {
    let team_count = teams.len();
    for (position, participant) in sorted_by_score_desc(participants).into_iter().enumerate() {
        teams[serpentine_index(position, team_count)].push(participant);
    }
    teams
}
