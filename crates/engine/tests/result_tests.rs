use engine::result::{evaluate, finalize, MAX_SET_SCORE};
use engine::{CandidateScore, Match, MatchFormat, MatchStatus, ResultRejection, SetFault};
use uuid::Uuid;

fn scheduled_match() -> Match {
    Match {
        id: Uuid::new_v4(),
        league_id: Uuid::new_v4(),
        team_a: Uuid::new_v4(),
        team_b: Uuid::new_v4(),
        scheduled_date: None,
        location: None,
        status: MatchStatus::Scheduled,
        result: None,
        generated: true,
    }
}

fn score(a: &[i32], b: &[i32]) -> CandidateScore {
    CandidateScore::new(a.to_vec(), b.to_vec())
}

#[test]
fn test_best_of_three_decided_in_third_set() {
    let game = scheduled_match();

    let result = evaluate(&game, MatchFormat::BestOf3, &score(&[6, 4, 6], &[4, 6, 3])).unwrap();

    assert_eq!(result.winner, game.team_a);
    assert_eq!(result.team_a_score, vec![6, 4, 6]);
    assert_eq!(result.team_b_score, vec![4, 6, 3]);
    assert_eq!(result.set_tally(), (2, 1));
}

#[test]
fn test_trailing_unplayed_set_is_trimmed() {
    let game = scheduled_match();

    let result = evaluate(&game, MatchFormat::BestOf3, &score(&[6, 6, 0], &[2, 3, 0])).unwrap();

    assert_eq!(result.winner, game.team_a);
    assert_eq!(result.team_a_score, vec![6, 6]);
    assert_eq!(result.team_b_score, vec![2, 3]);
    assert_eq!(result.sets_played(), 2);
}

#[test]
fn test_team_b_wins_best_of_five() {
    let game = scheduled_match();

    let result = evaluate(
        &game,
        MatchFormat::BestOf5,
        &score(&[3, 6, 2, 0, 0], &[6, 2, 6, 6, 0]),
    )
    .unwrap();

    // Set 4 has one scoring side, so it was played; set 5 was not
    assert_eq!(result.winner, game.team_b);
    assert_eq!(result.team_a_score, vec![3, 6, 2, 0]);
    assert_eq!(result.team_b_score, vec![6, 2, 6, 6]);
    assert_eq!(result.set_tally(), (1, 3));
}

#[test]
fn test_margin_below_two_is_rejected() {
    let game = scheduled_match();

    let err = evaluate(&game, MatchFormat::SingleSet, &score(&[6], &[5])).unwrap_err();

    assert_eq!(
        err,
        ResultRejection::InsufficientMargin {
            set: 1,
            margin: 1,
            required: 2
        }
    );
}

#[test]
fn test_one_sided_set_skips_margin_rule() {
    let game = scheduled_match();

    // 1-0 has a margin of one, but the rule only applies when both sides scored
    let result = evaluate(&game, MatchFormat::SingleSet, &score(&[0], &[1])).unwrap();
    assert_eq!(result.winner, game.team_b);
}

#[test]
fn test_split_sets_have_no_winner() {
    let game = scheduled_match();

    let err = evaluate(&game, MatchFormat::BestOf3, &score(&[6, 4], &[4, 6])).unwrap_err();

    assert_eq!(
        err,
        ResultRejection::NoWinner {
            sets_won_a: 1,
            sets_won_b: 1,
            required: 2
        }
    );
}

#[test]
fn test_all_unplayed_sets_have_no_winner() {
    let game = scheduled_match();

    let err = evaluate(&game, MatchFormat::BestOf3, &score(&[0, 0], &[0, 0])).unwrap_err();
    assert_eq!(err.code(), "NO_WINNER");
}

#[test]
fn test_tied_set_is_invalid() {
    let game = scheduled_match();

    let err = evaluate(&game, MatchFormat::BestOf3, &score(&[6, 5], &[3, 5])).unwrap_err();

    assert_eq!(
        err,
        ResultRejection::InvalidSet {
            set: Some(2),
            fault: SetFault::Tie
        }
    );
}

#[test]
fn test_unplayed_set_in_the_middle_is_invalid() {
    let game = scheduled_match();

    let err = evaluate(&game, MatchFormat::BestOf3, &score(&[6, 0, 6], &[2, 0, 3])).unwrap_err();

    assert_eq!(
        err,
        ResultRejection::InvalidSet {
            set: Some(2),
            fault: SetFault::Unplayed
        }
    );
}

#[test]
fn test_set_after_decision_is_invalid() {
    let game = scheduled_match();

    let err = evaluate(&game, MatchFormat::BestOf3, &score(&[6, 6, 6], &[1, 2, 3])).unwrap_err();

    assert_eq!(
        err,
        ResultRejection::InvalidSet {
            set: Some(3),
            fault: SetFault::PlayedAfterDecided
        }
    );
}

#[test]
fn test_score_bounds() {
    let game = scheduled_match();

    let err = evaluate(&game, MatchFormat::SingleSet, &score(&[-1], &[6])).unwrap_err();
    assert_eq!(
        err,
        ResultRejection::InvalidSet {
            set: Some(1),
            fault: SetFault::NegativeScore
        }
    );

    let err = evaluate(
        &game,
        MatchFormat::SingleSet,
        &score(&[MAX_SET_SCORE + 1], &[3]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ResultRejection::InvalidSet {
            set: Some(1),
            fault: SetFault::AboveCeiling
        }
    );

    // The ceiling itself is allowed
    let result = evaluate(&game, MatchFormat::SingleSet, &score(&[MAX_SET_SCORE], &[13])).unwrap();
    assert_eq!(result.team_a_score, vec![15]);
}

#[test]
fn test_score_shape() {
    let game = scheduled_match();

    let err = evaluate(&game, MatchFormat::BestOf3, &score(&[6, 6], &[2])).unwrap_err();
    assert_eq!(
        err,
        ResultRejection::InvalidSet {
            set: None,
            fault: SetFault::LengthMismatch
        }
    );

    let err = evaluate(&game, MatchFormat::BestOf3, &score(&[], &[])).unwrap_err();
    assert_eq!(
        err,
        ResultRejection::InvalidSet {
            set: None,
            fault: SetFault::Empty
        }
    );

    let err = evaluate(&game, MatchFormat::SingleSet, &score(&[6, 6], &[2, 2])).unwrap_err();
    assert_eq!(
        err,
        ResultRejection::InvalidSet {
            set: None,
            fault: SetFault::TooManySets
        }
    );
}

#[test]
fn test_finalize_completes_match() {
    let mut game = scheduled_match();
    let team_b = game.team_b;

    let result = finalize(&mut game, MatchFormat::BestOf5, &score(&[2, 3, 1], &[6, 6, 6])).unwrap();
    assert_eq!(result.winner, team_b);

    assert_eq!(game.status, MatchStatus::Completed);
    assert_eq!(game.completed_result().map(|r| r.winner), Some(team_b));
}

#[test]
fn test_finalize_replaces_previous_result() {
    let mut game = scheduled_match();
    let team_a = game.team_a;

    finalize(&mut game, MatchFormat::BestOf3, &score(&[2, 3], &[6, 6])).unwrap();
    finalize(&mut game, MatchFormat::BestOf3, &score(&[6, 6], &[2, 3])).unwrap();

    let result = game.result.as_ref().unwrap();
    assert_eq!(result.winner, team_a);
    assert_eq!(result.team_a_score, vec![6, 6]);
}

#[test]
fn test_rejected_edit_leaves_match_untouched() {
    let mut game = scheduled_match();
    finalize(&mut game, MatchFormat::BestOf3, &score(&[6, 6], &[2, 3])).unwrap();
    let before = game.clone();

    let err = finalize(&mut game, MatchFormat::BestOf3, &score(&[6, 4], &[4, 6])).unwrap_err();

    assert_eq!(err.code(), "NO_WINNER");
    assert_eq!(game, before);
}
