//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules::detect_winner;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first, receives opening advice).
    X,
    /// Player O (goes second, unrestricted).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// First position (in board order) held by `player`.
    pub fn first_of(&self, player: Player) -> Option<Position> {
        self.squares
            .iter()
            .position(|s| *s == Square::Occupied(player))
            .and_then(Position::from_index)
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their index so the player knows what to type.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => pos.to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    /// A cell character was not recognized.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(#[error(not(source))] char),
    /// X must have as many marks as O, or exactly one more.
    #[display("Unbalanced board: {} X marks against {} O marks", x, o)]
    Unbalanced {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `X`, `O` and `.`, `_` or `-` (empty), ignoring whitespace.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '.' | '_' | '-' => Ok(Square::Empty),
                other => Err(BoardParseError::InvalidCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let len = cells.len();
        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|_| BoardParseError::WrongLength(len))?;
        Ok(Self { squares })
    }
}

/// How the advisory message behaves on moves the opening advisor did not see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryPolicy {
    /// Keep the last message until the advisor overwrites it.
    #[default]
    Persist,
    /// Clear the message whenever an unadvised move is applied.
    Clear,
}

/// Current status of the game, derived from the stored winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win. Terminal.
    Won(Player),
}

/// Complete game state.
///
/// Values are replaced, never edited in place, by the move controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    next_player: Player,
    advisory: Option<String>,
    winner: Option<Player>,
}

impl GameState {
    /// Creates the initial state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_player: Player::X,
            advisory: None,
            winner: None,
        }
    }

    /// Builds a state around an existing board.
    ///
    /// X moves next when the mark counts are equal, O when X leads by one.
    ///
    /// # Errors
    ///
    /// Returns [`BoardParseError::Unbalanced`] for any other mark counts,
    /// since alternating turns can never produce them.
    #[instrument(skip(board))]
    pub fn from_board(board: Board) -> Result<Self, BoardParseError> {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        let next_player = if x == o {
            Player::X
        } else if x == o + 1 {
            Player::O
        } else {
            return Err(BoardParseError::Unbalanced { x, o });
        };
        let winner = detect_winner(&board);
        Ok(Self {
            board,
            next_player,
            advisory: None,
            winner,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Returns the last advisory message, if any.
    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    /// Returns the winner, if the game is over.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(player) => GameStatus::Won(player),
            None => GameStatus::InProgress,
        }
    }

    /// Status line shown above the board.
    pub fn status_line(&self) -> String {
        match self.winner {
            Some(player) => format!("Winner: {}", player),
            None => format!("Next player: {}", self.next_player),
        }
    }

    /// Advisory line, present only when there is a non-empty message.
    pub fn advisory_line(&self) -> Option<&str> {
        self.advisory().filter(|m| !m.is_empty())
    }

    /// Places the current player's mark, flips the turn and recomputes the winner.
    pub(super) fn apply_move(&mut self, pos: Position) {
        self.board.set(pos, Square::Occupied(self.next_player));
        self.next_player = self.next_player.opponent();
        self.winner = detect_winner(&self.board);
    }

    /// Sets the advisory message.
    pub(super) fn set_advisory(&mut self, message: Option<String>) {
        self.advisory = message;
    }

    #[cfg(test)]
    pub(super) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(board.count(Player::X), 1);
        assert_eq!(board.count(Player::O), 1);
    }

    #[test]
    fn test_parse_board_ignores_whitespace() {
        let board: Board = "X__ _O_ __X".parse().unwrap();
        assert_eq!(board.count(Player::X), 2);
    }

    #[test]
    fn test_parse_board_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongLength(2))
        );
        assert_eq!(
            "X...Z....".parse::<Board>(),
            Err(BoardParseError::InvalidCell('Z'))
        );
    }

    #[test]
    fn test_from_board_derives_turn_and_winner() {
        let state = GameState::from_board("X........".parse().unwrap()).unwrap();
        assert_eq!(state.next_player(), Player::O);
        assert_eq!(state.winner(), None);

        let state = GameState::from_board("XXXOO....".parse().unwrap()).unwrap();
        assert_eq!(state.next_player(), Player::O);
        assert_eq!(state.winner(), Some(Player::X));
        assert_eq!(state.status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_status_lines() {
        let state = GameState::new();
        assert_eq!(state.status_line(), "Next player: X");
        assert_eq!(state.advisory_line(), None);

        let won = GameState::from_board("OOOXX.X..".parse().unwrap()).unwrap();
        assert_eq!(won.status_line(), "Winner: O");
    }

    #[test]
    fn test_from_board_rejects_unbalanced_counts() {
        for (text, x, o) in [("O........", 0, 1), ("XX.......", 2, 0), ("XXXO.....", 3, 1)] {
            assert_eq!(
                GameState::from_board(text.parse().unwrap()),
                Err(BoardParseError::Unbalanced { x, o }),
                "{text}"
            );
        }
    }

    #[test]
    fn test_display_grid() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(board.display(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }
}
