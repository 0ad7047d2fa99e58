use sapper_core::*;
use std::collections::BTreeSet;

fn all_cells(size: Coord) -> Vec<Coord2> {
    (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .collect()
}

fn permutations(items: &[Coord2]) -> Vec<Vec<Coord2>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for (i, &head) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

#[test]
fn five_by_five_first_reveal_scenario() {
    let mut game = GameSession::new(GameConfig::new(5, 5).unwrap(), 2024).unwrap();
    assert_eq!(game.phase(), Phase::AwaitingFirstMove);

    let event = game.reveal((2, 2)).unwrap();

    assert_eq!(game.phase(), Phase::InProgress);
    let mines: BTreeSet<_> = game.board().mines().collect();
    assert_eq!(mines.len(), 5);
    assert!(!mines.contains(&(2, 2)));

    let expected = all_cells(5)
        .into_iter()
        .filter(|&(row, col)| row.abs_diff(2) <= 1 && col.abs_diff(2) <= 1 && (row, col) != (2, 2))
        .filter(|coords| mines.contains(coords))
        .count() as u8;
    assert_eq!(game.board().adjacent_mine_count((2, 2)), Ok(expected));
    assert_eq!(event.adjacent_mines(), Some(expected));
}

#[test]
fn adjacency_matches_brute_force_everywhere() {
    for seed in 0..16 {
        let mut board = Board::create(7, 12, seed).unwrap();
        board.place_mines((3, 3)).unwrap();
        let mines: BTreeSet<_> = board.mines().collect();

        for (row, col) in all_cells(7) {
            let expected = mines
                .iter()
                .filter(|&&(r, c)| (r, c) != (row, col) && r.abs_diff(row) <= 1 && c.abs_diff(col) <= 1)
                .count() as u8;
            assert_eq!(board.adjacent_mine_count((row, col)), Ok(expected));
        }
    }
}

#[test]
fn two_by_two_wins_exactly_on_third_safe_reveal_in_any_order() {
    let config = GameConfig::new(2, 1).unwrap();
    for seed in 0..4 {
        for first in all_cells(2) {
            let mut opened = GameSession::new(config, seed).unwrap();
            assert!(matches!(opened.reveal(first), Ok(RevealEvent::Opened { .. })));
            let mine = opened.board().mines().next().unwrap();
            let rest: Vec<_> = all_cells(2)
                .into_iter()
                .filter(|&c| c != mine && c != first)
                .collect();

            for order in permutations(&rest) {
                let mut game = opened.clone();
                let (last, init) = order.split_last().unwrap();
                for &coords in init {
                    assert!(matches!(game.reveal(coords), Ok(RevealEvent::Opened { .. })));
                    assert_eq!(game.phase(), Phase::InProgress);
                }
                assert!(matches!(game.reveal(*last), Ok(RevealEvent::Won { .. })));
                assert_eq!(game.phase(), Phase::Won);
            }
        }
    }
}

#[test]
fn flagging_every_mine_does_not_win() {
    let mut game = GameSession::new(GameConfig::new(4, 4).unwrap(), 77).unwrap();
    game.reveal((0, 0)).unwrap();
    let mines: Vec<_> = game.board().mines().collect();

    for &mine in &mines {
        assert!(game.toggle_flag(mine).unwrap().marked_mine());
    }

    assert_eq!(game.phase(), Phase::InProgress);
    assert_eq!(game.marked_mines().len(), mines.len());
    assert_eq!(game.board().mines_left(), 0);
}

#[test]
fn loss_blocks_everything_until_restart() {
    let mut game = GameSession::new(GameConfig::new(3, 2).unwrap(), 1).unwrap();
    game.reveal((1, 1)).unwrap();
    let mine = game.board().mines().next().unwrap();

    assert!(matches!(game.reveal(mine), Ok(RevealEvent::HitMine { .. })));
    for coords in all_cells(3) {
        assert_eq!(game.reveal(coords), Err(GameError::InvalidTransition));
        assert_eq!(game.toggle_flag(coords), Err(GameError::InvalidTransition));
    }

    game.restart();
    assert_eq!(game.phase(), Phase::AwaitingFirstMove);
    assert!(game.reveal(mine).is_ok());
    assert!(!game.board().contains_mine(mine));
}

#[test]
fn clues_cover_every_mine_once() {
    let mut game = GameSession::new(GameConfig::new(6, 8).unwrap(), 5).unwrap();
    game.reveal((5, 5)).unwrap();
    let mines: BTreeSet<_> = game.board().mines().collect();

    let mut clues = BTreeSet::new();
    for _ in 0..mines.len() {
        let clue = game.request_clue().unwrap();
        assert!(clues.insert(clue));
    }

    assert_eq!(clues, mines);
    assert_eq!(game.request_clue(), None);
    assert_eq!(game.board().mines().collect::<BTreeSet<_>>(), mines);
}

#[test]
fn events_serialize_for_the_renderer() {
    let event = RevealEvent::Opened {
        coords: (1, 2),
        adjacent_mines: 3,
    };
    let json = serde_json::to_string(&event).unwrap();

    assert_eq!(json, r#"{"Opened":{"coords":[1,2],"adjacent_mines":3}}"#);
    assert_eq!(serde_json::from_str::<RevealEvent>(&json).unwrap(), event);
}
