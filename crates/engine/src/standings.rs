use std::cmp::Ordering;

use crate::entities::{League, Match, Ranking, Team};

/// Rebuild the ranking of every roster team from the league's completed
/// matches. Rows come back in roster order; see [`rank`] for presentation
/// order. Matches from other leagues and matches without a completed result
/// are ignored.
pub fn recompute(league: &League, roster: &[Team], matches: &[Match]) -> Vec<Ranking> {
    let completed: Vec<_> = matches
        .iter()
        .filter(|m| m.league_id == league.id)
        .filter_map(|m| m.completed_result().map(|result| (m, result)))
        .collect();

    roster
        .iter()
        .map(|team| {
            let mut row = Ranking::empty(league.id, team.id);

            for (game, result) in completed.iter().filter(|(m, _)| m.involves(team.id)) {
                let (won_a, won_b) = result.set_tally();
                let (sets_won, sets_lost) = if game.team_a == team.id {
                    (won_a, won_b)
                } else {
                    (won_b, won_a)
                };

                row.matches_played += 1;
                if result.winner == team.id {
                    row.matches_won += 1;
                    row.points += league.points_per_win;
                } else {
                    row.matches_lost += 1;
                    row.points += league.points_per_loss;
                }
                row.sets_won += sets_won;
                row.sets_lost += sets_lost;
            }

            row
        })
        .collect()
}

/// Presentation order: points, then matches won, then sets won, all
/// descending. Remaining ties keep their incoming order.
pub fn compare(a: &Ranking, b: &Ranking) -> Ordering {
    b.points
        .cmp(&a.points)
        .then(b.matches_won.cmp(&a.matches_won))
        .then(b.sets_won.cmp(&a.sets_won))
}

pub fn rank(rankings: &mut [Ranking]) {
    rankings.sort_by(compare);
}

/// [`recompute`] followed by [`rank`].
pub fn standings(league: &League, roster: &[Team], matches: &[Match]) -> Vec<Ranking> {
    let mut rankings = recompute(league, roster, matches);
    rank(&mut rankings);
    rankings
}
