use rusty_scorecard::model::{RoundSnapshot, default_pars, default_stroke_index};
use rusty_scorecard::mvu::{Effect, Msg, RoundModel, update};
use serde_json::json;

#[test]
fn player_count_is_clamped_and_growth_is_fresh() {
    let mut model = RoundModel::default();
    model.set_player_count(7);
    assert_eq!(model.snapshot().num_players, 4);
    assert_eq!(model.snapshot().players.len(), 4);
    assert_eq!(model.snapshot().players[3].name, "Player 4");
    assert_eq!(model.snapshot().players[3].scores.len(), 18);

    model.set_player_count(0);
    assert_eq!(model.snapshot().num_players, 1);

    model.set_player_count(2);
    assert!(model.set_player_name(1, "Dana"));
    assert!(model.set_score(1, 0, 5.0));
    model.set_player_count(1);
    model.set_player_count(2);
    let p2 = &model.snapshot().players[1];
    assert_eq!(p2.name, "Player 2");
    assert!(p2.scores.iter().all(|&s| s == 0));
}

#[test]
fn shrinking_and_regrowing_holes_restores_defaults() {
    let mut model = RoundModel::default();
    assert!(model.set_par(9, 6));
    assert!(model.set_stroke_index(9, 2));
    assert!(model.set_score(0, 2, 4.0));
    assert!(model.set_score(0, 11, 7.0));

    model.set_hole_count(5);
    let snap = model.snapshot();
    assert_eq!(snap.num_holes, 5);
    assert_eq!(snap.pars.len(), 5);
    assert_eq!(snap.stroke_index.len(), 5);
    assert_eq!(snap.players[0].scores, vec![0, 0, 4, 0, 0]);

    model.set_hole_count(18);
    let snap = model.snapshot();
    assert_eq!(snap.pars, default_pars(18));
    assert_eq!(snap.stroke_index, default_stroke_index(18));
    assert_eq!(snap.players[0].scores[2], 4);
    assert!(snap.players[0].scores[5..].iter().all(|&s| s == 0));
    assert!(snap.players.iter().all(|p| p.scores.len() == 18));
}

#[test]
fn shrinking_holes_pulls_stroke_index_into_range() {
    let mut model = RoundModel::default();
    assert!(model.set_stroke_index(0, 18));
    model.set_current_hole(15);
    model.set_hole_count(9);
    assert_eq!(model.snapshot().stroke_index[0], 9);
    assert_eq!(model.current_hole(), 9);
    model.set_hole_count(40);
    assert_eq!(model.snapshot().num_holes, 18);
}

#[test]
fn values_are_clamped() {
    let mut model = RoundModel::default();
    assert!(model.set_score(0, 0, 25.0));
    assert_eq!(model.snapshot().players[0].scores[0], 20);
    assert!(model.set_score(0, 0, -3.0));
    assert_eq!(model.snapshot().players[0].scores[0], 0);
    assert!(model.set_score(0, 0, 4.6));
    assert_eq!(model.snapshot().players[0].scores[0], 5);

    assert!(model.set_par(0, 2));
    assert_eq!(model.snapshot().pars[0], 3);
    assert!(model.set_par(0, 9));
    assert_eq!(model.snapshot().pars[0], 6);

    assert!(model.set_stroke_index(0, 0));
    assert_eq!(model.snapshot().stroke_index[0], 1);
    assert!(model.set_stroke_index(0, 30));
    assert_eq!(model.snapshot().stroke_index[0], 18);

    assert!(model.set_handicap(0, 60.0));
    assert_eq!(model.snapshot().players[0].handicap, 54);
    assert!(model.set_handicap(0, 12.5));
    assert_eq!(model.snapshot().players[0].handicap, 13);

    assert!(model.set_player_name(0, "Bartholomew Fitzgerald III"));
    assert_eq!(model.snapshot().players[0].name, "Bartholomew Fitzgera");
    assert_eq!(model.snapshot().players[0].name.chars().count(), 20);
}

#[test]
fn bad_indices_are_ignored() {
    let mut model = RoundModel::default();
    assert!(!model.set_score(2, 0, 4.0));
    assert!(!model.set_score(0, 18, 4.0));
    assert!(!model.set_par(18, 4));
    assert!(!model.set_handicap(5, 10.0));
    assert!(!model.history().can_undo());
}

#[test]
fn undo_then_redo_restores_exact_state() {
    let mut model = RoundModel::default();
    model.set_course("Old Course");
    assert!(model.set_score(0, 0, 5.0));
    model.set_use_stableford(true);
    let before = model.snapshot().clone();

    assert!(model.undo());
    assert!(!model.snapshot().use_stableford);
    assert!(model.redo());
    assert_eq!(model.snapshot(), &before);

    assert!(model.undo());
    assert!(model.undo());
    assert_eq!(model.snapshot().players[0].scores[0], 0);
    assert!(model.undo());
    assert_eq!(model.snapshot(), &RoundSnapshot::default());
    assert!(!model.undo());
}

#[test]
fn mutation_after_undo_discards_redo() {
    let mut model = RoundModel::default();
    model.set_course("A");
    model.set_course("B");
    assert!(model.undo());
    model.set_course("C");
    assert!(!model.redo());
    assert_eq!(model.snapshot().course, "C");
}

#[test]
fn reset_is_undoable() {
    let mut model = RoundModel::default();
    model.set_player_count(4);
    model.set_hole_count(9);
    model.reset();
    assert_eq!(model.snapshot(), &RoundSnapshot::default());
    assert!(model.undo());
    assert_eq!(model.snapshot().num_players, 4);
    assert_eq!(model.snapshot().num_holes, 9);
}

#[test]
fn load_snapshot_history_flag() {
    let mut model = RoundModel::default();
    model.set_current_hole(7);
    model.load_snapshot(&json!({"numHoles": 9}), false);
    assert_eq!(model.snapshot().num_holes, 9);
    assert_eq!(model.current_hole(), 1);
    assert!(!model.history().can_undo());

    model.load_snapshot(&json!({"numHoles": 12}), true);
    assert_eq!(model.snapshot().num_holes, 12);
    assert!(model.undo());
    assert_eq!(model.snapshot().num_holes, 9);
}

#[test]
fn malformed_snapshot_is_normalized() {
    let raw = json!({
        "numPlayers": "3",
        "numHoles": 25,
        "pars": [2, 7, "x", 4.4],
        "si": [0, 40],
        "players": [
            {"name": "An extremely long player name", "handicap": 99, "scores": [30, -1, 4.5, "7"]},
            "junk"
        ],
        "useStableford": 1,
        "course": 42
    });
    let snap = RoundSnapshot::from_value(&raw);
    assert_eq!(snap.num_players, 3);
    assert_eq!(snap.num_holes, 18);
    assert_eq!(&snap.pars[..4], &[3, 6, 3, 4]);
    assert_eq!(snap.pars.len(), 18);
    assert_eq!(&snap.stroke_index[..3], &[1, 18, 3]);
    assert_eq!(snap.players.len(), 3);
    assert_eq!(snap.players[0].name.chars().count(), 20);
    assert_eq!(snap.players[0].handicap, 54);
    assert_eq!(&snap.players[0].scores[..4], &[20, 0, 5, 7]);
    assert_eq!(snap.players[1].name, "Player 2");
    assert_eq!(snap.players[2].name, "Player 3");
    assert!(snap.use_stableford);
    assert_eq!(snap.course, "Local Links");

    assert_eq!(RoundSnapshot::from_value(&serde_json::to_value(&snap).unwrap()), snap);
    assert_eq!(snap.normalized(), snap);
}

#[test]
fn overflowing_numbers_clamp_to_the_top() {
    let raw = json!({
        "numHoles": "Infinity",
        "players": [{"handicap": "1e400", "scores": ["inf", "-inf", "NaN"]}]
    });
    let snap = RoundSnapshot::from_value(&raw);
    assert_eq!(snap.num_holes, 18);
    assert_eq!(snap.players[0].handicap, 54);
    assert_eq!(&snap.players[0].scores[..3], &[20, 0, 0]);

    let mut model = RoundModel::default();
    assert!(model.set_score(0, 0, f64::INFINITY));
    assert_eq!(model.snapshot().players[0].scores[0], 20);
}

#[test]
fn update_emits_persist_and_alerts() {
    let mut model = RoundModel::default();
    assert_eq!(update(&mut model, Msg::SetCourse("X".into())), vec![Effect::Persist]);
    assert_eq!(update(&mut model, Msg::NextHole), vec![]);
    assert_eq!(model.current_hole(), 2);
    assert_eq!(
        update(&mut model, Msg::SetScore { player: 3, hole: 0, value: 4.0 }),
        vec![]
    );

    let before = model.snapshot().clone();
    let depth = model.history().undo_depth();
    let effects = update(&mut model, Msg::ImportJson("{\"numHoles\": ".into()));
    assert!(matches!(effects.as_slice(), [Effect::Alert(_)]));
    assert_eq!(model.snapshot(), &before);
    assert_eq!(model.history().undo_depth(), depth);

    let restore = Msg::LoadSnapshot {
        value: json!({"numHoles": 9}),
        push_history: false,
    };
    assert_eq!(update(&mut model, restore), vec![Effect::Persist]);
    assert_eq!(model.snapshot().num_holes, 9);
    assert_eq!(model.history().undo_depth(), depth);

    assert_eq!(update(&mut model, Msg::Redo), vec![]);
    assert_eq!(update(&mut model, Msg::Undo), vec![Effect::Persist]);
}

#[test]
fn hole_navigation_stays_in_range() {
    let mut model = RoundModel::default();
    model.prev_hole();
    assert_eq!(model.current_hole(), 1);
    model.set_current_hole(99);
    assert_eq!(model.current_hole(), 18);
    model.next_hole();
    assert_eq!(model.current_hole(), 18);
    assert!(!model.history().can_undo());
}
