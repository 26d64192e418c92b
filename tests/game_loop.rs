use president_rs::config::GameConfig;
use president_rs::game::{Game, GameError, HistoryEntry, Player, OPENING_CARD};
use president_rs::round::EndCause;

fn table(hands: &[&str]) -> Vec<Player> {
    hands
        .iter()
        .enumerate()
        .map(|(i, h)| Player::new(format!("P{}", i + 1), h.parse().unwrap()))
        .collect()
}

fn finish_round(game: &mut Game) {
    game.step().unwrap();
    while game.round().is_some() {
        game.step().unwrap();
    }
}

#[test]
fn queen_of_hearts_holder_leads_the_first_round() {
    for seed in 0..20 {
        let cfg = GameConfig::default().with_players(4).with_seed(Some(seed));
        let mut game = Game::new(&cfg).unwrap();
        let leader = game.players()[0].name().to_string();
        assert!(game.players()[0].hand().contains(OPENING_CARD));
        game.step().unwrap();
        match &game.history()[0] {
            HistoryEntry::Turn { round, player, .. } => {
                assert_eq!(*round, 1);
                assert_eq!(player, &leader);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}

#[test]
fn last_player_to_act_leads_the_next_round() {
    let mut game = Game::from_players(table(&["3c 9h Kd", "4h 5d", "6c 7h Ac"])).unwrap();
    finish_round(&mut game);
    assert_eq!(game.round_number(), 1);
    assert!(matches!(
        game.history().last(),
        Some(HistoryEntry::RoundEnded { cause: EndCause::AllButOnePassed, last: Some(p), .. }) if p == "P3"
    ));
    let names: Vec<&str> = game.players().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["P3", "P1", "P2"]);
    assert!(game.finish_order().is_empty());
}

#[test]
fn emptied_hands_leave_in_rotation_order() {
    let mut game = Game::from_players(table(&["3s", "4s 9c", "5s 6c"])).unwrap();
    finish_round(&mut game);
    assert!(game.is_over());
    assert_eq!(game.finish_order(), ["P1", "P2", "P3"]);
    let standings = game.standings().unwrap();
    assert_eq!(standings.president(), Some("P1"));
    assert_eq!(standings.last(), Some("P3"));
    assert_eq!(game.census().len(), game.dealt());
    assert_eq!(game.step(), Err(GameError::Finished));
}

#[test]
fn whole_game_ranks_everyone_once() {
    let cfg = GameConfig::default().with_players(5).with_seed(Some(99));
    let mut game = Game::new(&cfg).unwrap();
    let standings = game.play_to_end().unwrap();
    let mut names = standings.order.clone();
    names.sort();
    assert_eq!(names, ["P1", "P2", "P3", "P4", "P5"]);
    assert!(game.players().is_empty());
    let places: Vec<usize> = game
        .history()
        .iter()
        .filter_map(|e| match e {
            HistoryEntry::Finished { place, .. } => Some(*place),
            _ => None,
        })
        .collect();
    assert_eq!(places, [1, 2, 3, 4, 5]);
}

#[test]
fn named_players_keep_their_names() {
    let cfg = GameConfig::default()
        .with_names(["Elias", "Axel", "Tito", "Zlatan"])
        .with_seed(Some(4));
    let standings = Game::new(&cfg).unwrap().play_to_end().unwrap();
    assert_eq!(standings.order.len(), 4);
    assert!(standings.order.iter().any(|n| n == "Zlatan"));
}

#[test]
fn shared_names_still_hand_the_lead_to_the_last_seat() {
    let players = vec![
        Player::new("X", "3s 5h 8c".parse().unwrap()),
        Player::new("X", "4s As Kd".parse().unwrap()),
    ];
    let mut game = Game::from_players(players).unwrap();
    finish_round(&mut game);
    let hands: Vec<String> = game.players().iter().map(|p| p.hand().to_string()).collect();
    assert_eq!(hands, ["[A♠]", "[8♣]"]);
}

#[test]
fn finished_last_actor_passes_the_lead_to_the_head_of_the_rotation() {
    let mut game = Game::from_players(table(&["3c 9h", "4h 5d", "8c Ac", "6s 7s"])).unwrap();
    finish_round(&mut game);
    assert!(matches!(
        game.history().iter().rev().find(|e| matches!(e, HistoryEntry::RoundEnded { .. })),
        Some(HistoryEntry::RoundEnded { last: Some(p), .. }) if p == "P3"
    ));
    assert!(!game.is_over());
    assert_eq!(game.finish_order(), ["P1", "P3"]);
    let names: Vec<&str> = game.players().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["P2", "P4"]);

    // the next round opens from seat 0
    game.step().unwrap();
    assert!(matches!(
        game.history().last(),
        Some(HistoryEntry::Turn { round: 2, player, .. }) if player == "P2"
    ));
}
