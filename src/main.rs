//! Demo binary: walks through a few engine scenarios and plays a short
//! engine-vs-engine game. Run with RUST_LOG=debug for per-depth search
//! reports.

use omok::{game, Board, Cell, Difficulty, Engine, GameResult, Pos};

fn render(board: &Board) -> String {
    let mut out = String::with_capacity(16 * 32);
    out.push_str("   ");
    for c in 0..15 {
        out.push_str(&format!("{c:>2}"));
    }
    out.push('\n');
    for r in 0..15u8 {
        out.push_str(&format!("{r:>2} "));
        for c in 0..15u8 {
            out.push_str(match board.get(Pos::new(r, c)) {
                Cell::Empty => " .",
                Cell::Black => " X",
                Cell::White => " O",
            });
        }
        out.push('\n');
    }
    out
}

fn scenario_opening() {
    println!("== Opening ==");
    let board = Board::new();
    let mut engine = Engine::new(Cell::Black, Difficulty::Beginner);
    let d = engine.choose_move_with_stats(&board).unwrap();
    println!("first move: {:?} via {:?}\n", d.pos, d.kind);
}

fn scenario_forced_win() {
    println!("== Forced win ==");
    let mut board = Board::new();
    for c in 3..7 {
        board.set(Pos::new(7, c), Cell::White);
    }
    let mut engine = Engine::new(Cell::White, Difficulty::Beginner);
    let d = engine.choose_move_with_stats(&board).unwrap();
    println!("with four in a row, engine plays {:?} via {:?}\n", d.pos, d.kind);
}

fn scenario_forced_block() {
    println!("== Forced block ==");
    let mut board = Board::new();
    for c in 3..7 {
        board.set(Pos::new(7, c), Cell::Black);
    }
    board.set(Pos::new(0, 0), Cell::White);
    let mut engine = Engine::new(Cell::White, Difficulty::Beginner);
    let d = engine.choose_move_with_stats(&board).unwrap();
    println!("against an open four, engine plays {:?} via {:?}\n", d.pos, d.kind);
}

fn scenario_forbidden() {
    println!("== Forbidden move ==");
    let mut board = Board::new();
    board.set(Pos::new(7, 5), Cell::Black);
    board.set(Pos::new(7, 6), Cell::Black);
    board.set(Pos::new(6, 7), Cell::Black);
    board.set(Pos::new(5, 7), Cell::Black);
    match game::place(&mut board, Pos::new(7, 7), Cell::Black) {
        Err(e) => println!("rejected: {e}\n"),
        Ok(_) => println!("unexpectedly accepted\n"),
    }
}

fn self_play() {
    println!("== Self-play, beginner vs beginner ==");
    let mut board = Board::new();
    let mut black = Engine::new(Cell::Black, Difficulty::Beginner);
    let mut white = Engine::new(Cell::White, Difficulty::Beginner);

    let mut side = Cell::Black;
    for ply in 1..=60 {
        let engine = if side == Cell::Black {
            &mut black
        } else {
            &mut white
        };
        let Some(d) = engine.choose_move_with_stats(&board) else {
            println!("board full after {ply} plies");
            break;
        };
        match game::place(&mut board, d.pos, side) {
            Ok(GameResult::Won { winner, line }) => {
                println!("{}", render(&board));
                println!("{winner:?} wins on ply {ply} with {line:?}");
                return;
            }
            Ok(GameResult::Ongoing) => {}
            Err(e) => {
                // The selector filters forbidden moves, so this means a bug
                println!("engine produced an illegal move: {e}");
                return;
            }
        }
        side = side.opponent();
    }
    println!("{}", render(&board));
    println!("no winner within the ply limit");
}

fn main() {
    env_logger::init();
    scenario_opening();
    scenario_forced_win();
    scenario_forced_block();
    scenario_forbidden();
    self_play();
}
