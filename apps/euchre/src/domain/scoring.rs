use crate::domain::errors::DomainError;
use crate::domain::rules::{PLAYERS, TRICKS_PER_ROUND};
use crate::domain::state::{
    require_ordering_player, require_trump, team_of, GameState, RoundOutcome, RoundSummary, Seat,
    Team,
};

/// Points for a round given the ordering seat and every seat's trick count.
///
/// Returns the scoring team, points per member and the outcome.
pub fn score_round(ordering_seat: Seat, tricks: [u8; PLAYERS]) -> (Team, u16, RoundOutcome) {
    let ordering_team = team_of(ordering_seat);
    let ordering_tricks: u8 = ordering_team
        .seats()
        .iter()
        .map(|&s| tricks[s as usize])
        .sum();

    if ordering_tricks == TRICKS_PER_ROUND {
        (ordering_team, 2, RoundOutcome::March)
    } else if ordering_tricks >= 3 {
        (ordering_team, 1, RoundOutcome::Made)
    } else {
        (ordering_team.other(), 2, RoundOutcome::Euchred)
    }
}

/// Award round points to both members of the scoring team and reset trick counts.
pub fn apply_round_scoring(state: &mut GameState) -> Result<RoundSummary, DomainError> {
    let ordering_seat = require_ordering_player(state, "apply_round_scoring")?;
    let trump = require_trump(state, "apply_round_scoring")?;

    let tricks: [u8; PLAYERS] = std::array::from_fn(|i| state.players[i].tricks_taken);
    let total: u8 = tricks.iter().sum();
    if total != TRICKS_PER_ROUND {
        return Err(DomainError::invariant(format!(
            "round scored with {total} tricks taken, expected {TRICKS_PER_ROUND}"
        )));
    }

    let (scoring_team, points, outcome) = score_round(ordering_seat, tricks);
    for seat in scoring_team.seats() {
        state.player_mut(seat).points += points;
    }

    let summary = RoundSummary {
        round_no: state.round_no,
        trump,
        ordering_seat,
        ordering_team: team_of(ordering_seat),
        team_tricks: [state.team_tricks(Team::One), state.team_tricks(Team::Two)],
        outcome,
        scoring_team,
        points_awarded: points,
    };

    for player in state.players.iter_mut() {
        player.tricks_taken = 0;
    }
    state.last_round = Some(summary.clone());
    Ok(summary)
}

/// Team that reached the threshold, if any.
pub fn winning_team(state: &GameState, win_threshold: u16) -> Option<Team> {
    Team::ALL
        .into_iter()
        .find(|&team| state.team_points(team) >= win_threshold)
}
