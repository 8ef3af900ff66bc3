use connect_four::error::GameError;
use connect_four::game::{
    new_game, win, Board, Cell, GameSession, GameStatus, Player, PlayerId, Rejection, HEIGHT,
    WIDTH,
};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

fn session() -> GameSession {
    new_game(
        Player::default_for(PlayerId::One),
        Player::default_for(PlayerId::Two),
    )
}

fn play(game: &mut GameSession, columns: &[usize]) -> GameStatus {
    let mut status = game.status();
    for &column in columns {
        let outcome = game.drop_piece(column).unwrap();
        assert!(outcome.accepted, "column {column} rejected");
        status = outcome.status;
    }
    status
}

#[test]
fn horizontal_win_on_bottom_row() {
    let mut game = session();
    // Player 2 plays on the far right while player 1 builds 0..=3.
    let status = play(&mut game, &[0, 6, 1, 6, 2, 5, 3]);
    assert_eq!(status, GameStatus::Won(PlayerId::One));
    assert!(win::has_winning_line(game.board(), PlayerId::One));
    assert!(!win::has_winning_line(game.board(), PlayerId::Two));
}

#[test]
fn vertical_win_in_first_column() {
    let mut game = session();
    let status = play(&mut game, &[0, 1, 0, 2, 0, 3, 0]);
    assert_eq!(status, GameStatus::Won(PlayerId::One));
    for row in 2..HEIGHT {
        assert_eq!(game.cell_at(row, 0).unwrap(), Cell::Taken(PlayerId::One));
    }
}

/// Drop pieces column by column, each landing on the one below.
fn stacked(drops: &[(usize, PlayerId)]) -> Board {
    let mut board = Board::new();
    for &(column, player) in drops {
        let row = board.drop_target(column).unwrap().expect("column has room");
        board.place(row, column, player).unwrap();
    }
    board
}

#[test]
fn diagonal_win_and_near_miss() {
    use PlayerId::{One, Two};

    // Player 1 on (5,0) (4,1) (3,2) (2,3), mixed supports underneath.
    let line = [(5, 0), (4, 1), (3, 2), (2, 3)];
    let build = |replaced: Option<usize>| {
        let owner = |i: usize| if Some(i) == replaced { Two } else { One };
        stacked(&[
            (0, owner(0)),
            (1, Two),
            (1, owner(1)),
            (2, One),
            (2, Two),
            (2, owner(2)),
            (3, Two),
            (3, One),
            (3, Two),
            (3, owner(3)),
        ])
    };

    let board = build(None);
    for (row, column) in line {
        assert_eq!(board.cell_at(row, column).unwrap(), Cell::Taken(One));
    }
    assert!(win::has_winning_line(&board, One));
    assert!(!win::has_winning_line(&board, Two));

    for replaced in 0..line.len() {
        let board = build(Some(replaced));
        assert!(!win::has_winning_line(&board, One));
        assert!(!win::has_winning_line(&board, Two));
    }
}

#[test]
fn diagonal_win_through_play() {
    let mut game = session();
    // Player 1 ends on (5,0) (4,1) (3,2) (2,3).
    let status = play(&mut game, &[0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3]);
    assert_eq!(status, GameStatus::Won(PlayerId::One));
}

#[test]
fn full_board_without_line_is_a_tie() {
    let tie = [
        5, 4, 5, 0, 6, 2, 4, 5, 5, 0, 4, 1, 1, 0, 4, 5, 6, 5, 3, 1, 1, 2, 2, 6, 2, 6, 6, 3, 6,
        2, 0, 3, 0, 3, 3, 4, 3, 1, 4, 2, 1, 0,
    ];
    let mut game = session();
    assert_eq!(play(&mut game, &tie[..41]), GameStatus::InProgress);
    assert_eq!(play(&mut game, &tie[41..]), GameStatus::Tied);
    assert!(!win::has_winning_line(game.board(), PlayerId::One));
    assert!(!win::has_winning_line(game.board(), PlayerId::Two));

    let outcome = game.drop_piece(0).unwrap();
    assert_eq!(outcome.rejection, Some(Rejection::GameOver));
}

#[test]
fn out_of_range_column_is_invalid_argument() {
    let mut game = session();
    play(&mut game, &[3, 3]);
    let before = game.clone();
    for column in [WIDTH, WIDTH + 1, usize::MAX] {
        assert!(matches!(
            game.drop_piece(column),
            Err(GameError::InvalidArgument(_))
        ));
    }
    assert_eq!(game, before);
}

fn random_games(width: usize, height: usize, games: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..games {
        let mut game = GameSession::with_size(
            Player::default_for(PlayerId::One),
            Player::default_for(PlayerId::Two),
            width,
            height,
        )
        .unwrap();
        while !game.is_terminal() {
            let legal = game.board().legal_columns();
            let column = *legal.choose(&mut rng).expect("in-progress game has a legal column");
            let mover = game.current_player();
            let outcome = game.drop_piece(column).unwrap();
            assert!(outcome.accepted);

            let scan_says_won = win::has_winning_line(game.board(), mover);
            assert_eq!(outcome.status == GameStatus::Won(mover), scan_says_won);
            if outcome.status == GameStatus::Tied {
                assert!(game.board().is_full());
                assert_eq!(game.board().occupied_count(), width * height);
            }
            // The opponent can never hold a line the moment the mover plays.
            assert!(!win::has_winning_line(game.board(), mover.other()));
        }

        assert!(game.moves().len() <= width * height);
        assert_eq!(game.moves().len(), game.board().occupied_count());
    }
}

#[test]
fn random_games_terminate_and_agree_with_full_scan() {
    random_games(WIDTH, HEIGHT, 200, 0x0c4);
}

#[test]
fn random_games_on_narrow_and_wide_boards() {
    random_games(4, 9, 200, 0x49);
    random_games(10, 4, 200, 0xa4);
}
