use shangyou::{Catalog, Game, GameError, Player, TurnError};

fn players(catalog: &Catalog, hands: &[(&str, &[&str])]) -> Vec<Player> {
    hands
        .iter()
        .map(|(id, cards)| Player::with_cards(*id, catalog.get_all(cards).unwrap()))
        .collect()
}

fn hand_names(player: &Player) -> Vec<String> {
    player.cards().iter().map(|card| card.name()).collect()
}

#[test]
fn test_two_player_multi_turn_trace() {
    let catalog = Catalog::new();
    let mut game = Game::new(
        players(
            &catalog,
            &[
                ("PLAYER_1", &["3 of Hearts", "Jack of Hearts"]),
                ("PLAYER_2", &["10 of Hearts", "Jack of Spades", "Queen of Hearts"]),
            ],
        ),
        0,
    );

    game.play("PLAYER_1", &["3 of Hearts"]).unwrap();
    game.play("PLAYER_2", &["Queen of Hearts"]).unwrap();

    // Holding only a jack, PLAYER_1 cannot beat the queen
    assert_eq!(
        game.play("PLAYER_1", &["Jack of Hearts"]).unwrap_err(),
        GameError::Turn(TurnError::DoesNotTrumpPrevious)
    );
    game.play("PLAYER_1", &[]).unwrap();

    // PLAYER_2 won the turn and leads the next one against a clear table
    game.play("PLAYER_2", &["Jack of Spades"]).unwrap();

    assert_eq!(hand_names(&game.players()[0]), vec!["Jack of Hearts"]);
    assert_eq!(hand_names(&game.players()[1]), vec!["10 of Hearts"]);
    assert!(game.winner().is_none());
    assert!(game.loser().is_none());
}

#[test]
fn test_singles_race_to_the_end() {
    let catalog = Catalog::new();
    let mut game = Game::new(
        players(
            &catalog,
            &[
                (
                    "PLAYER_1",
                    &["3 of Hearts", "5 of Clubs", "7 of Hearts", "9 of Hearts", "Jack of Hearts"],
                ),
                (
                    "PLAYER_2",
                    &["4 of Hearts", "6 of Hearts", "8 of Hearts", "10 of Hearts", "Queen of Hearts"],
                ),
            ],
        ),
        0,
    );

    let script: &[(&str, &str)] = &[
        ("PLAYER_1", "3 of Hearts"),
        ("PLAYER_2", "4 of Hearts"),
        ("PLAYER_1", "5 of Clubs"),
        ("PLAYER_2", "6 of Hearts"),
        ("PLAYER_1", "7 of Hearts"),
        ("PLAYER_2", "8 of Hearts"),
        ("PLAYER_1", "9 of Hearts"),
        ("PLAYER_2", "10 of Hearts"),
    ];
    for (player_id, card) in script {
        game.play(player_id, &[card]).unwrap();
        assert!(game.winner().is_none());
        assert!(game.loser().is_none());
    }

    game.play("PLAYER_1", &["Jack of Hearts"]).unwrap();

    assert_eq!(game.winner().unwrap().id(), "PLAYER_1");
    assert_eq!(game.loser().unwrap().id(), "PLAYER_2");
    assert!(game.is_done());
    assert_eq!(
        game.play("PLAYER_2", &["Queen of Hearts"]).unwrap_err(),
        GameError::GameAlreadyComplete
    );
}

#[test]
fn test_dealt_game_reaches_completion_with_greedy_singles() {
    let catalog = Catalog::new();

    for player_count in 2..=4 {
        let ids: Vec<String> = (1..=player_count).map(|n| format!("PLAYER_{n}")).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let mut game = Game::new_game(&catalog, &id_refs).unwrap();

        // Every player greedily answers with their lowest winning single,
        // passing when nothing in hand beats the table.
        let mut moves = 0;
        while !game.is_done() {
            moves += 1;
            assert!(moves < 10_000, "game did not terminate");

            let current = game.current_turn().current_player();
            let player_id = game.players()[current].id().to_string();
            let mut hand: Vec<_> = game.players()[current].cards().to_vec();
            hand.sort_by_key(|card| card.single_rank());

            let mut played = false;
            for card in &hand {
                match game.play(&player_id, &[&card.name()]) {
                    Ok(()) => {
                        played = true;
                        break;
                    }
                    Err(GameError::Turn(TurnError::DoesNotTrumpPrevious)) => continue,
                    Err(other) => panic!("unexpected error: {other}"),
                }
            }
            if !played && !game.is_done() {
                game.play(&player_id, &[]).unwrap();
            }
        }

        let winner = game.winner().expect("finished game has a winner");
        assert!(!winner.has_cards());

        let loser = game.loser().expect("finished game has a loser");
        assert!(loser.has_cards());
        assert_ne!(winner.id(), loser.id());

        // Everyone else also finished their hand
        let holders = game
            .players()
            .iter()
            .filter(|player| player.has_cards())
            .count();
        assert_eq!(holders, 1);
    }
}

#[test]
fn test_game_state_survives_a_serde_round_trip() {
    let catalog = Catalog::new();
    let mut game = Game::new_game(&catalog, &["PLAYER_1", "PLAYER_2"]).unwrap();

    let current = game.current_turn().current_player();
    let player_id = game.players()[current].id().to_string();
    game.play(&player_id, &["3 of Hearts"]).unwrap();

    let encoded = serde_json::to_string(&game).unwrap();
    let decoded: Game = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded.players().len(), 2);
    for (before, after) in game.players().iter().zip(decoded.players()) {
        assert_eq!(before.id(), after.id());
        assert_eq!(before.cards(), after.cards());
    }
    assert_eq!(
        decoded.current_turn().current_player(),
        game.current_turn().current_player()
    );
    assert_eq!(
        decoded.current_turn().last_play().unwrap().cards(),
        game.current_turn().last_play().unwrap().cards()
    );
}
