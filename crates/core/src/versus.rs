//! Versus module - two boards and the garbage exchange between them
//!
//! A match owns both boards outright; they never see each other. Per frame the
//! controller forwards each player's input, advances both gravity clocks and
//! only then trades garbage, so neither side can observe a half-updated
//! opponent.

use tracing::{debug, info};

use crate::board::{Board, LineClearResult};
use crate::config::BoardConfig;
use crate::error::Result;
use crate::shapes::ShapeCatalog;
use crate::snapshot::RenderState;
use crate::types::{Outcome, Player, PlayerInput};

/// Empty cells between the two boards when rendered side by side
pub const VERSUS_GAP_CELLS: u16 = 3;

/// What happened during one [`Match::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Gravity result per player
    pub results: [LineClearResult; 2],
    /// Garbage rows each player sent to the other
    pub garbage_sent: [u32; 2],
    pub outcome: Outcome,
}

impl TickReport {
    fn frozen(outcome: Outcome) -> Self {
        Self {
            results: [LineClearResult::GameOver; 2],
            garbage_sent: [0; 2],
            outcome,
        }
    }

    pub fn result(&self, player: Player) -> LineClearResult {
        self.results[player.index()]
    }

    pub fn sent_by(&self, player: Player) -> u32 {
        self.garbage_sent[player.index()]
    }
}

/// Two-player match controller
#[derive(Debug, Clone)]
pub struct Match {
    boards: [Board; 2],
    announced: bool,
}

impl Match {
    /// Match with the extended catalog and random seeds
    pub fn new(config: BoardConfig, now_ms: u64) -> Result<Self> {
        Self::seeded(
            config,
            ShapeCatalog::extended(),
            [rand::random(), rand::random()],
            now_ms,
        )
    }

    pub fn seeded(
        config: BoardConfig,
        catalog: ShapeCatalog,
        seeds: [u64; 2],
        now_ms: u64,
    ) -> Result<Self> {
        config.validate(&catalog)?;
        // Validated widths are far below u16::MAX.
        let p2_offset = config.width as u16 + VERSUS_GAP_CELLS;
        let one = Board::seeded(config, catalog.clone(), 0, seeds[0], now_ms)?;
        let two = Board::seeded(config, catalog, p2_offset, seeds[1], now_ms)?;
        info!(
            width = config.width,
            height = config.height,
            seed_p1 = seeds[0],
            seed_p2 = seeds[1],
            "match started"
        );
        Ok(Self {
            boards: [one, two],
            announced: false,
        })
    }

    /// Read from the boards; a board over means the match is over.
    pub fn outcome(&self) -> Outcome {
        match (
            self.boards[0].is_game_over(),
            self.boards[1].is_game_over(),
        ) {
            (true, _) => Outcome::Player2Wins,
            (false, true) => Outcome::Player1Wins,
            (false, false) => Outcome::InProgress,
        }
    }

    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player.index()]
    }

    /// Direct access for setting up positions.
    ///
    /// A board ended through this handle ends the match: the next
    /// [`Match::tick`] simulates nothing.
    pub fn board_mut(&mut self, player: Player) -> &mut Board {
        &mut self.boards[player.index()]
    }

    /// Advance one frame.
    ///
    /// Once either board is over nothing is simulated and every call
    /// returns the same frozen report.
    pub fn tick(&mut self, now_ms: u64, p1: &PlayerInput, p2: &PlayerInput) -> TickReport {
        let outcome = self.outcome();
        if outcome.is_over() {
            self.announce(outcome);
            return TickReport::frozen(outcome);
        }

        let inputs = [p1, p2];
        let mut results = [LineClearResult::Cleared(0); 2];
        for (i, board) in self.boards.iter_mut().enumerate() {
            board.apply_input(inputs[i], now_ms);
            results[i] = board.tick(now_ms);
        }

        let garbage_sent = [results[0].lines(), results[1].lines()];
        for player in Player::BOTH {
            let sent = garbage_sent[player.index()];
            if sent > 0 && self.boards[player.opponent().index()].receive_garbage(sent) {
                debug!(from = player.label(), rows = sent, "garbage sent");
            }
        }

        let outcome = self.outcome();
        self.announce(outcome);

        TickReport {
            results,
            garbage_sent,
            outcome,
        }
    }

    fn announce(&mut self, outcome: Outcome) {
        if !outcome.is_over() || self.announced {
            return;
        }
        self.announced = true;
        info!(
            outcome = outcome.as_str(),
            p1_lines = self.boards[0].lines_cleared(),
            p2_lines = self.boards[1].lines_cleared(),
            "match over"
        );
    }

    /// Snapshots of both boards, player 1 first
    pub fn render_states(&self) -> [RenderState; 2] {
        [self.boards[0].render_state(), self.boards[1].render_state()]
    }

    pub fn render_states_into(&self, out: &mut [RenderState; 2]) {
        for (board, state) in self.boards.iter().zip(out.iter_mut()) {
            board.render_state_into(state);
        }
    }
}
