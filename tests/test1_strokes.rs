mod common;

use common::{hole, p};
use rusty_club::model::{Course, Player, StrokeMode, WolfGame, WolfOrder};
use rusty_club::wolf::{StrokeAllocation, StrokePolicy, manual_stroke_holes, net_score};

fn stroke_holes(policy: &StrokePolicy, player: &Player) -> Vec<usize> {
    (0..18)
        .filter(|i| policy.receives_stroke(player, p(0), *i))
        .collect()
}

#[test]
fn test_auto_strokes_follow_stroke_index() {
    let policy = StrokePolicy::new(Course::default());
    let player = Player::new("A", 4.0);
    // stroke index 1..=4 sit on holes 4, 13, 6 and 15
    assert_eq!(stroke_holes(&policy, &player), vec![3, 5, 12, 14]);
}

#[test]
fn test_auto_strokes_round_handicap() {
    let policy = StrokePolicy::new(Course::default());
    assert_eq!(stroke_holes(&policy, &Player::new("A", 3.5)).len(), 4);
    assert_eq!(stroke_holes(&policy, &Player::new("A", 3.4)).len(), 3);
    assert!(stroke_holes(&policy, &Player::new("A", 0.0)).is_empty());
    assert!(stroke_holes(&policy, &Player::new("A", -2.0)).is_empty());
}

#[test]
fn test_all_but_par3_skips_short_holes() {
    let course = Course::default();
    let policy = StrokePolicy::new(course.clone());
    let auto = Player::new("A", 18.0);
    let no_par3 = Player::new("B", 18.0).with_stroke_mode(StrokeMode::AllButPar3);

    assert_eq!(stroke_holes(&policy, &auto).len(), 18);
    let holes = stroke_holes(&policy, &no_par3);
    assert_eq!(holes.len(), 14);
    assert!(holes.iter().all(|i| !course.is_par3(*i)));
}

#[test]
fn test_manual_strokes_use_hardest_holes() {
    let course = Course::default();
    assert_eq!(
        manual_stroke_holes(2, &course).into_iter().collect::<Vec<_>>(),
        vec![3, 12]
    );

    let mut manual = Player::new("A", 20.0).with_stroke_mode(StrokeMode::Manual);
    manual.strokes_received = Some(2);
    let no_count = Player::new("B", 20.0).with_stroke_mode(StrokeMode::Manual);
    let game = WolfGame::new(vec![manual, no_count], course, WolfOrder::sequential(2))
        .expect("valid game");

    let policy = StrokePolicy::for_game(&game);
    let players = game.players();
    let got: Vec<usize> = (0..18)
        .filter(|i| policy.receives_stroke(&players[0], p(0), *i))
        .collect();
    assert_eq!(got, vec![3, 12]);
    assert!((0..18).all(|i| !policy.receives_stroke(&players[1], p(1), i)));
}

#[test]
fn test_net_score() {
    assert_eq!(net_score(5, true), 4);
    assert_eq!(net_score(5, false), 5);
}

#[test]
fn test_course_rejects_bad_stroke_index() {
    let pars = [4; 18];
    let mut index: [u32; 18] = std::array::from_fn(|i| i as u32 + 1);
    assert!(Course::new(pars, index).is_ok());
    index[17] = 1;
    assert!(Course::new(pars, index).is_err());
    assert!(Course::new([0; 18], std::array::from_fn(|i| i as u32 + 1)).is_err());
}

#[test]
fn test_player_running_total() {
    let mut player = Player::new("A", 0.0);
    player.scores[0] = 4;
    player.scores[1] = 5;
    assert_eq!(player.running_total(), 9);
    assert_eq!(player.holes_played(), 2);
    assert_eq!(player.gross(hole(1)), Some(4));
    assert_eq!(player.gross(hole(3)), None);
}
