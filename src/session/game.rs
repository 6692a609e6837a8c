//! The game session orchestrator.
//!
//! `GameSession` composes the deck builder, the board, the layout engine,
//! and the clock behind a small event surface: `start_session`,
//! `select_tile`, `tick`, `resize`, `set_columns`. Each entry point runs to
//! completion; the only deferred work is the mismatch flip-back, modeled as
//! a tick countdown tagged with the session generation.
//!
//! Generation tagging is the teardown story: starting or resetting a
//! session bumps the generation, and a countdown carrying an older
//! generation is discarded on the next tick instead of mutating the
//! replacement session.

use log::{debug, info};

use crate::board::{Board, SelectOutcome};
use crate::content::{CardPair, TextRenderer};
use crate::core::{EngineError, GameRng, MonotonicTime, SessionConfig, TileId, TimeSource};
use crate::deck::build_deck;
use crate::layout::{self, LayoutSpec, Viewport};
use crate::provider::ContentProvider;

use super::clock::{format_mmss, SessionClock};
use super::view::SessionView;

/// Viewport assumed until the host reports a real size.
const DEFAULT_VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

#[derive(Clone, Copy, Debug)]
struct MismatchCountdown {
    generation: u64,
    remaining_ticks: u32,
}

/// One game screen's session engine.
///
/// Generic over the time source so tests and deterministic embedders can
/// drive the clock by hand; production uses [`MonotonicTime`].
pub struct GameSession<T: TimeSource = MonotonicTime> {
    config: SessionConfig,
    time: T,
    rng: GameRng,
    renderer: TextRenderer,
    board: Option<Board>,
    clock: SessionClock,
    columns: u32,
    viewport: Viewport,
    layout: LayoutSpec,
    countdown: Option<MismatchCountdown>,
    generation: u64,
    revision: u64,
}

impl GameSession<MonotonicTime> {
    /// Create a session engine with an entropy-seeded RNG and real time.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_rng_and_time(config, GameRng::from_entropy(), MonotonicTime::new())
    }
}

impl<T: TimeSource> GameSession<T> {
    /// Create a session engine with explicit RNG and time source.
    #[must_use]
    pub fn with_rng_and_time(config: SessionConfig, rng: GameRng, time: T) -> Self {
        let columns = config.default_columns.max(1);
        let layout = layout::compute(0, columns, DEFAULT_VIEWPORT, &config.layout);
        Self {
            config,
            time,
            rng,
            renderer: TextRenderer::new(),
            board: None,
            clock: SessionClock::new(),
            columns,
            viewport: DEFAULT_VIEWPORT,
            layout,
            countdown: None,
            generation: 0,
            revision: 0,
        }
    }

    /// Start a new session from a collection's pairs.
    ///
    /// All fallible work happens before the previous session is touched, so
    /// a failure leaves the old state fully intact. Requested pair counts
    /// are clamped by the deck builder; `None` columns fall back to the
    /// configured default.
    pub fn start_session(
        &mut self,
        pairs: &[CardPair],
        requested_pairs: usize,
        requested_columns: Option<u32>,
    ) -> Result<(), EngineError> {
        let tiles = build_deck(pairs, requested_pairs, &mut self.rng, &self.renderer)?;

        self.generation += 1;
        self.countdown = None;
        self.board = Some(Board::new(tiles));
        self.clock.reset();
        self.columns = requested_columns
            .unwrap_or(self.config.default_columns)
            .max(1);
        self.recompute_layout();
        self.bump();

        info!(
            "session started: {} tiles, {} columns, rng seed {}",
            self.board.as_ref().map_or(0, Board::tile_count),
            self.columns,
            self.rng.seed()
        );
        Ok(())
    }

    /// Fetch a collection's pairs from the provider and start a session.
    ///
    /// This is the orchestration boundary for provider failures: they map
    /// into [`EngineError::Provider`] and no partial session state is
    /// created.
    pub fn start_from_collection<P: ContentProvider>(
        &mut self,
        provider: &P,
        collection_id: &str,
        requested_pairs: usize,
        requested_columns: Option<u32>,
    ) -> Result<(), EngineError> {
        let pairs = provider.collection_pairs(collection_id)?;
        self.start_session(&pairs, requested_pairs, requested_columns)
    }

    /// Process a tile selection from the presentation layer.
    ///
    /// Silently ignored before a deck exists and after completion; the
    /// board ignores stale or repeated IDs on its own.
    pub fn select_tile(&mut self, id: TileId) {
        let Some(board) = self.board.as_mut() else {
            debug!("ignoring {id} selection: no active session");
            return;
        };
        if board.all_matched() {
            return;
        }

        match board.select(id) {
            SelectOutcome::Ignored(reason) => {
                debug!("ignoring {id} selection: {reason:?}");
                return;
            }
            SelectOutcome::Revealed => {
                // An interrupted cooldown was force-resolved by the board;
                // its countdown must not fire on the fresh attempt.
                self.countdown = None;
                self.clock.start(self.time.now());
            }
            SelectOutcome::Matched => {
                self.countdown = None;
                if board.all_matched() {
                    self.clock.stop(self.time.now());
                    info!(
                        "session complete: {} pairs in {} attempts",
                        board.matched_pairs(),
                        board.attempts()
                    );
                }
            }
            SelectOutcome::Mismatch => {
                self.countdown = Some(MismatchCountdown {
                    generation: self.generation,
                    remaining_ticks: self.config.mismatch_delay_ticks.max(1),
                });
            }
        }
        self.bump();
    }

    /// Advance one time unit.
    ///
    /// Counts down a pending mismatch flip-back and refreshes the published
    /// elapsed time. Countdowns from a superseded session generation are
    /// dropped without touching the board.
    pub fn tick(&mut self) {
        let mut changed = self.clock.is_running();

        if let Some(countdown) = self.countdown.as_mut() {
            if countdown.generation != self.generation {
                debug!("dropping mismatch countdown from a previous session");
                self.countdown = None;
            } else {
                countdown.remaining_ticks = countdown.remaining_ticks.saturating_sub(1);
                if countdown.remaining_ticks == 0 {
                    if let Some(board) = self.board.as_mut() {
                        board.resolve_mismatch();
                    }
                    self.countdown = None;
                    changed = true;
                }
            }
        }

        if changed {
            self.bump();
        }
    }

    /// Report a new viewport size.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.recompute_layout();
        self.bump();
    }

    /// Change the column count.
    pub fn set_columns(&mut self, columns: u32) {
        let columns = columns.max(1);
        if columns == self.columns {
            return;
        }
        self.columns = columns;
        self.recompute_layout();
        self.bump();
    }

    /// Tear the session down, cancelling any outstanding countdown.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.board = None;
        self.clock.reset();
        self.recompute_layout();
        self.bump();
    }

    /// Take a read-only snapshot.
    #[must_use]
    pub fn view(&self) -> SessionView {
        let now = self.time.now();
        let elapsed_seconds = self.clock.elapsed_seconds(now);
        let (tiles, attempts, matched_pair_count, all_matched) = match &self.board {
            Some(board) => (
                board.tiles().clone(),
                board.attempts(),
                board.matched_pairs(),
                board.all_matched(),
            ),
            None => (im::Vector::new(), 0, 0, false),
        };

        SessionView {
            tiles,
            attempts,
            matched_pair_count,
            all_matched,
            elapsed_seconds,
            elapsed_formatted: format_mmss(elapsed_seconds),
            columns: self.columns,
            layout: self.layout,
            revision: self.revision,
        }
    }

    /// Is a mismatched pair waiting to flip back?
    #[must_use]
    pub fn has_pending_mismatch(&self) -> bool {
        self.board
            .as_ref()
            .is_some_and(Board::has_pending_mismatch)
    }

    /// Is the play clock currently running?
    #[must_use]
    pub fn clock_running(&self) -> bool {
        self.clock.is_running()
    }

    /// The current session generation. Bumped by `start_session` and
    /// `reset`; deferred work tagged with an older value is inert.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn recompute_layout(&mut self) {
        let tile_count = self.board.as_ref().map_or(0, Board::tile_count);
        self.layout = layout::compute(tile_count, self.columns, self.viewport, &self.config.layout);
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
