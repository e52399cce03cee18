//! Game session: one human against the engine
//!
//! Black always moves first. The human takes one colour and the engine the
//! other; a front end calls [`GameSession::play`] with the human's move and
//! [`GameSession::ai_move`] whenever it is the engine's turn.

use log::{info, warn};

use crate::board::{Board, Pos, Stone};
use crate::config::Difficulty;
use crate::engine::{AIEngine, MoveResult};
use crate::error::GameError;
use crate::rules::{is_board_full, winning_line};

/// Outcome of the game so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// Five or more in a row; `line` holds the whole run, in board order
    Won { winner: Stone, line: Vec<Pos> },
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Main game state
pub struct GameSession {
    board: Board,
    human: Stone,
    current_turn: Stone,
    status: GameStatus,
    difficulty: Difficulty,
    engine: AIEngine,
    last_ai_result: Option<MoveResult>,
}

impl GameSession {
    /// Start a game with the human on `human`; the engine plays the other colour.
    pub fn new(difficulty: Difficulty, human: Stone) -> Result<Self, GameError> {
        if human == Stone::Empty {
            return Err(GameError::EmptySide);
        }
        Ok(Self {
            board: Board::new(),
            human,
            current_turn: Stone::Black,
            status: GameStatus::InProgress,
            difficulty,
            engine: AIEngine::from_difficulty(difficulty),
            last_ai_result: None,
        })
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_turn = Stone::Black;
        self.status = GameStatus::InProgress;
        self.last_ai_result = None;
        info!("new game: human plays {:?}", self.human);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    #[inline]
    pub fn human_color(&self) -> Stone {
        self.human
    }

    #[inline]
    pub fn ai_color(&self) -> Stone {
        self.human.opponent()
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Statistics from the engine's most recent move.
    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        !self.status.is_over() && self.current_turn == self.human
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.status.is_over() && self.current_turn != self.human
    }

    /// Takes effect from the engine's next move.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.engine.set_difficulty(difficulty);
    }

    /// Play the human's stone at `pos`.
    pub fn play(&mut self, pos: Pos) -> Result<&GameStatus, GameError> {
        if self.status.is_over() {
            warn!("move ({}, {}) rejected: game is over", pos.row, pos.col);
            return Err(GameError::GameOver);
        }
        if self.current_turn != self.human {
            warn!("move ({}, {}) rejected: not the human's turn", pos.row, pos.col);
            return Err(GameError::NotYourTurn);
        }
        if let Err(e) = self.execute_move(pos) {
            warn!("{}", e);
            return Err(e);
        }
        Ok(&self.status)
    }

    /// Let the engine choose and play its move.
    ///
    /// Returns the move played, or `None` if the engine found nothing to
    /// play, which ends the game as a draw.
    pub fn ai_move(&mut self) -> Result<Option<Pos>, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if self.current_turn == self.human {
            return Err(GameError::NotYourTurn);
        }

        let color = self.current_turn;
        let result = self.engine.get_move_with_stats(&mut self.board, color)?;
        let best_move = result.best_move;
        self.last_ai_result = Some(result);

        match best_move {
            Some(pos) => {
                self.execute_move(pos)?;
                Ok(Some(pos))
            }
            None => {
                info!("{:?} has no move; game drawn", color);
                self.status = GameStatus::Draw;
                Ok(None)
            }
        }
    }

    /// Take back the engine's last move and the human move before it.
    ///
    /// Only allowed on the human's turn while the game is still in progress.
    pub fn undo(&mut self) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if self.board.history().len() < 2 {
            return Err(GameError::NothingToUndo);
        }
        if self.current_turn != self.human {
            return Err(GameError::NotYourTurn);
        }

        self.board.undo();
        if let Some(record) = self.board.undo() {
            self.current_turn = record.stone;
        }
        self.last_ai_result = None;
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), GameError> {
        let color = self.current_turn;
        self.board.place(pos, color)?;

        if let Some(line) = winning_line(&self.board, pos, color) {
            info!("{:?} wins with ({}, {})", color, pos.row, pos.col);
            self.status = GameStatus::Won { winner: color, line };
            return Ok(());
        }
        if is_board_full(&self.board) {
            info!("board full; game drawn");
            self.status = GameStatus::Draw;
            return Ok(());
        }

        self.current_turn = color.opponent();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveRejection;

    fn session() -> GameSession {
        GameSession::new(Difficulty::Easy, Stone::Black).unwrap()
    }

    /// Play a scripted game, alternating human and AI colours, bypassing the engine.
    fn scripted(moves: &[(u8, u8)]) -> GameSession {
        let mut game = session();
        for &(r, c) in moves {
            game.execute_move(Pos::new(r, c)).unwrap();
        }
        game
    }

    #[test]
    fn test_new_session() {
        let game = session();
        assert_eq!(game.current_turn(), Stone::Black);
        assert!(game.is_human_turn());
        assert!(!game.is_ai_turn());
        assert_eq!(game.ai_color(), Stone::White);
        assert_eq!(*game.status(), GameStatus::InProgress);
        assert_eq!(
            GameSession::new(Difficulty::Easy, Stone::Empty).err(),
            Some(GameError::EmptySide)
        );
    }

    #[test]
    fn test_play_then_ai() {
        let mut game = session();
        game.play(Pos::new(7, 7)).unwrap();
        assert!(game.is_ai_turn());
        assert_eq!(game.play(Pos::new(7, 8)), Err(GameError::NotYourTurn));

        let reply = game.ai_move().unwrap().unwrap();
        assert_eq!(game.board().get(reply), Stone::White);
        assert!(game.is_human_turn());
        let stats = &game.last_ai_result().unwrap().stats;
        assert!(stats.leaf_evals > 0);
    }

    #[test]
    fn test_ai_move_on_human_turn_rejected() {
        let mut game = session();
        assert_eq!(game.ai_move(), Err(GameError::NotYourTurn));
    }

    #[test]
    fn test_ai_plays_first_as_black() {
        let mut game = GameSession::new(Difficulty::Medium, Stone::White).unwrap();
        assert!(game.is_ai_turn());
        assert_eq!(game.ai_move(), Ok(Some(Pos::new(7, 7))));
        assert!(game.is_human_turn());
    }

    #[test]
    fn test_occupied_rejected() {
        let mut game = session();
        game.play(Pos::new(7, 7)).unwrap();
        game.ai_move().unwrap();
        let taken = game.board().history()[1].pos;
        assert_eq!(
            game.play(taken),
            Err(GameError::InvalidMove { pos: taken, reason: MoveRejection::Occupied })
        );
        assert!(game.is_human_turn());
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = scripted(&[(7, 3), (0, 0), (7, 4), (0, 2), (7, 5), (0, 4), (7, 6), (0, 6)]);
        let status = game.play(Pos::new(7, 7)).unwrap().clone();
        assert_eq!(
            status,
            GameStatus::Won {
                winner: Stone::Black,
                line: (3..=7).map(|c| Pos::new(7, c)).collect(),
            }
        );
        assert_eq!(game.play(Pos::new(8, 8)), Err(GameError::GameOver));
        assert_eq!(game.ai_move(), Err(GameError::GameOver));
        assert_eq!(game.undo(), Err(GameError::GameOver));
        assert!(!game.is_human_turn() && !game.is_ai_turn());
    }

    #[test]
    fn test_undo_two_moves() {
        let mut game = session();
        assert_eq!(game.undo(), Err(GameError::NothingToUndo));

        game.play(Pos::new(7, 7)).unwrap();
        assert_eq!(game.undo(), Err(GameError::NothingToUndo));
        game.ai_move().unwrap();
        // Far from the engine's reply, so always free
        game.play(Pos::new(3, 3)).unwrap();
        let reply = game.ai_move().unwrap().unwrap();
        assert_eq!(game.board().stone_count(), 4);

        game.undo().unwrap();
        assert_eq!(game.board().stone_count(), 2);
        assert_eq!(game.board().history().len(), 2);
        assert!(game.board().is_empty(Pos::new(3, 3)));
        assert!(game.board().is_empty(reply));
        assert!(game.is_human_turn());
    }

    #[test]
    fn test_undo_rejected_on_engine_turn() {
        let mut game = session();
        game.play(Pos::new(7, 7)).unwrap();
        game.ai_move().unwrap();
        game.play(Pos::new(3, 3)).unwrap();

        let before = game.board().clone();
        assert_eq!(game.undo(), Err(GameError::NotYourTurn));
        assert_eq!(*game.board(), before);
        assert!(game.is_ai_turn());
    }

    #[test]
    fn test_undo_with_engine_moving_first() {
        let mut game = GameSession::new(Difficulty::Easy, Stone::White).unwrap();
        game.ai_move().unwrap();
        assert_eq!(game.undo(), Err(GameError::NothingToUndo));

        game.play(Pos::new(3, 3)).unwrap();
        game.ai_move().unwrap();
        game.undo().unwrap();
        assert_eq!(game.board().history().len(), 1);
        assert_eq!(game.board().get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(game.current_turn(), Stone::White);
        assert!(game.is_human_turn());
    }

    #[test]
    fn test_reset() {
        let mut game = scripted(&[(7, 7), (7, 8), (8, 8)]);
        game.set_difficulty(Difficulty::Hard);
        game.reset();
        assert!(game.board().is_board_empty());
        assert_eq!(game.current_turn(), Stone::Black);
        assert_eq!(*game.status(), GameStatus::InProgress);
        assert_eq!(game.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_full_board_is_draw() {
        // Rows shifted by two so no line of five forms anywhere
        let mut game = session();
        let mut cells: Vec<(Pos, Stone)> = Vec::new();
        for r in 0..15u8 {
            for c in 0..15u8 {
                let stone = if ((c + 2 * r) / 2) % 2 == 0 { Stone::Black } else { Stone::White };
                cells.push((Pos::new(r, c), stone));
            }
        }
        let (last, rest) = cells.split_last().unwrap();
        for &(pos, stone) in rest {
            game.board.place(pos, stone).unwrap();
        }
        game.current_turn = last.1;
        game.execute_move(last.0).unwrap();
        assert_eq!(*game.status(), GameStatus::Draw);
    }
}
