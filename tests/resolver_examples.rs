use president_rs::cards::{Card, Rank};
use president_rs::constraint::{ConstraintState, Lock};
use president_rs::hand::Hand;
use president_rs::resolver::{choose_play, resolve_play, Play};

fn hand(s: &str) -> Hand {
    s.parse().unwrap()
}

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

#[test]
fn leading_three_of_a_kind_plays_all_three() {
    let mut h = hand("3s 3h 3d");
    let play = resolve_play(&mut h, None, &ConstraintState::unconstrained(), 0).unwrap();
    let group = play.group().expect("leader always plays");
    assert_eq!(group.len(), 3);
    assert!(h.is_empty());
}

#[test]
fn lowest_qualifying_single_is_played() {
    let h = hand("5d 9c 9h");
    let cards = choose_play(&h, Some(card("7s")), &ConstraintState::unconstrained(), 0).unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].rank(), Rank::Nine);
}

#[test]
fn equal_rank_single_is_allowed() {
    let h = hand("7c Kd");
    let cards = choose_play(&h, Some(card("7s")), &ConstraintState::unconstrained(), 0).unwrap();
    assert_eq!(cards, vec![card("7c")]);
}

#[test]
fn two_beats_ace_on_the_pile() {
    let h = hand("Kd 2h");
    let cards = choose_play(&h, Some(card("As")), &ConstraintState::unconstrained(), 0).unwrap();
    assert_eq!(cards, vec![card("2h")]);
}

#[test]
fn opening_group_is_capped_and_ties_go_low() {
    let h = hand("6s 6h Js Jh");
    let cards = choose_play(&h, None, &ConstraintState::unconstrained(), 0).unwrap();
    assert_eq!(cards.len(), 2);
    assert!(cards.iter().all(|c| c.rank() == Rank::Six));

    let h = hand("8s 8h 8d 8c");
    let cards = choose_play(&h, None, &ConstraintState::unconstrained(), 0).unwrap();
    assert_eq!(cards.len(), 4);
}

#[test]
fn multi_card_mode_never_breaks_up_to_singles() {
    let h = hand("4s 9h Kd");
    let c = ConstraintState::new(None, 2);
    assert!(choose_play(&h, Some(card("3c")), &c, 0).is_none());
}

#[test]
fn multi_card_mode_takes_exactly_the_count_from_a_bigger_group() {
    let h = hand("Qs Qh Qd");
    let c = ConstraintState::new(None, 2);
    let cards = choose_play(&h, Some(card("10c")), &c, 0).unwrap();
    assert_eq!(cards.len(), 2);
}

#[test]
fn lock_target_plays_locked_rank_even_below_better_options() {
    let c = ConstraintState::new(Some(Lock { rank: Rank::Five, target: 0 }), 1);
    let mut h = hand("5c Ah 2s");
    let play = resolve_play(&mut h, Some(card("5s")), &c, 0).unwrap();
    assert_eq!(play, Play::Played("5c".parse().unwrap()));
    assert_eq!(h.len(), 2);
}

#[test]
fn lock_target_without_the_rank_passes_and_keeps_cards() {
    let c = ConstraintState::new(Some(Lock { rank: Rank::Five, target: 0 }), 1);
    let mut h = hand("Ah 2s");
    let play = resolve_play(&mut h, Some(card("5s")), &c, 0).unwrap();
    assert!(play.is_pass());
    assert_eq!(h.len(), 2);
}

#[test]
fn multi_card_lock_needs_the_full_count() {
    let c = ConstraintState::new(Some(Lock { rank: Rank::Jack, target: 1 }), 2);
    assert!(choose_play(&hand("Js Qd"), Some(card("Jh")), &c, 1).is_none());
    assert_eq!(choose_play(&hand("Js Jd Jc"), Some(card("Jh")), &c, 1).map(|v| v.len()), Some(2));
}
