use serde::{Deserialize, Serialize};

use crate::entities::{Match, MatchFormat, MatchResult, MatchStatus};
use crate::error::{ResultRejection, SetFault};

/// Sanity ceiling on a single set score.
pub const MAX_SET_SCORE: i32 = 15;

/// Smallest winning margin accepted in a set where both sides scored.
pub const MIN_SET_MARGIN: u32 = 2;

/// A score as submitted, before validation. Scores are signed so that bad
/// input can be represented and turned down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub team_a_score: Vec<i32>,
    pub team_b_score: Vec<i32>,
}

impl CandidateScore {
    pub fn new(team_a_score: Vec<i32>, team_b_score: Vec<i32>) -> Self {
        Self {
            team_a_score,
            team_b_score,
        }
    }
}

/// Validate `candidate` for `game` under `format` and derive the winner.
///
/// Trailing 0-0 sets after the deciding set are dropped, so the returned
/// result holds exactly the sets that were played. Pure: `game` is not
/// touched, see [`finalize`] for the status transition.
pub fn evaluate(
    game: &Match,
    format: MatchFormat,
    candidate: &CandidateScore,
) -> Result<MatchResult, ResultRejection> {
    let a = &candidate.team_a_score;
    let b = &candidate.team_b_score;

    if a.len() != b.len() {
        return Err(invalid(None, SetFault::LengthMismatch));
    }
    if a.is_empty() {
        return Err(invalid(None, SetFault::Empty));
    }
    if a.len() > format.max_sets() {
        return Err(invalid(None, SetFault::TooManySets));
    }

    // Everything after the last set with a non-zero score counts as unplayed.
    let played = a
        .iter()
        .zip(b)
        .rposition(|(x, y)| *x != 0 || *y != 0)
        .map_or(0, |last| last + 1);

    let majority = format.majority() as u32;
    let (mut won_a, mut won_b) = (0u32, 0u32);

    for (index, (&x, &y)) in a.iter().zip(b).enumerate() {
        let set = index + 1;

        if x < 0 || y < 0 {
            return Err(invalid(Some(set), SetFault::NegativeScore));
        }
        if x > MAX_SET_SCORE || y > MAX_SET_SCORE {
            return Err(invalid(Some(set), SetFault::AboveCeiling));
        }
        if index >= played {
            continue;
        }

        if x == 0 && y == 0 {
            return Err(invalid(Some(set), SetFault::Unplayed));
        }
        if x == y {
            return Err(invalid(Some(set), SetFault::Tie));
        }
        if won_a >= majority || won_b >= majority {
            return Err(invalid(Some(set), SetFault::PlayedAfterDecided));
        }

        let margin = x.abs_diff(y);
        if x > 0 && y > 0 && margin < MIN_SET_MARGIN {
            return Err(ResultRejection::InsufficientMargin {
                set,
                margin,
                required: MIN_SET_MARGIN,
            });
        }

        if x > y {
            won_a += 1;
        } else {
            won_b += 1;
        }
    }

    let winner = if won_a >= majority {
        game.team_a
    } else if won_b >= majority {
        game.team_b
    } else {
        return Err(ResultRejection::NoWinner {
            sets_won_a: won_a,
            sets_won_b: won_b,
            required: majority,
        });
    };

    Ok(MatchResult {
        team_a_score: a[..played].iter().map(|&s| s.unsigned_abs()).collect(),
        team_b_score: b[..played].iter().map(|&s| s.unsigned_abs()).collect(),
        winner,
    })
}

/// Evaluate `candidate` and, on success, complete `game` with the result.
///
/// A match that already has a result is re-evaluated from scratch and its
/// result replaced. On rejection `game` is left unchanged.
pub fn finalize<'a>(
    game: &'a mut Match,
    format: MatchFormat,
    candidate: &CandidateScore,
) -> Result<&'a MatchResult, ResultRejection> {
    let result = evaluate(game, format, candidate)?;
    game.status = MatchStatus::Completed;
    Ok(game.result.insert(result))
}

fn invalid(set: Option<usize>, fault: SetFault) -> ResultRejection {
    ResultRejection::InvalidSet { set, fault }
}
