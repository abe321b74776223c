use std::time::Duration;

use snake_common::{
    Board, Direction, GameOverReason, HorizontalConvention, SessionRng, SnakeGameState,
    SnakeRules, TickOutcome, direction_from_swipe, log,
};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::time::interval;

use crate::bot_controller::BotController;
use crate::config::Config;
use crate::input::InputEvent;

pub struct SnakeSessionSettings {
    pub board: Board,
    pub rules: SnakeRules,
    pub tick_interval: Duration,
    pub games: u32,
    pub auto_restart: bool,
    pub max_ticks_per_game: Option<u64>,
    pub autopilot: bool,
}

impl SnakeSessionSettings {
    pub fn from_config(config: &Config, autopilot: bool) -> Result<Self, String> {
        Ok(Self {
            board: config.board.to_board()?,
            rules: config.rules,
            tick_interval: Duration::from_millis(config.session.tick_interval_ms),
            games: config.session.games.max(1),
            auto_restart: config.session.auto_restart,
            max_ticks_per_game: config.session.max_ticks_per_game,
            autopilot,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnd {
    WallCollision,
    SelfCollision,
    TickLimit,
    /// The session stopped while this game was still running.
    Aborted,
}

impl From<GameOverReason> for GameEnd {
    fn from(reason: GameOverReason) -> Self {
        match reason {
            GameOverReason::WallCollision => GameEnd::WallCollision,
            GameOverReason::SelfCollision => GameEnd::SelfCollision,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub score: u32,
    pub ticks: u64,
    pub end: GameEnd,
}

#[derive(Clone, Debug)]
pub struct SessionSummary {
    pub seed: u64,
    pub games: Vec<GameResult>,
}

impl SessionSummary {
    pub fn best_score(&self) -> u32 {
        self.games.iter().map(|g| g.score).max().unwrap_or(0)
    }
}

/// Input collected between two ticks. Later turns overwrite earlier ones.
#[derive(Debug, Default, PartialEq)]
struct PendingInput {
    direction: Option<Direction>,
    restart: bool,
    quit: bool,
    closed: bool,
}

impl PendingInput {
    fn drain(inputs: &mut UnboundedReceiver<InputEvent>, convention: HorizontalConvention) -> Self {
        let mut pending = Self::default();
        loop {
            match inputs.try_recv() {
                Ok(InputEvent::Turn(direction)) => pending.direction = Some(direction),
                Ok(InputEvent::Swipe { start, end }) => {
                    if let Some(direction) = direction_from_swipe(start, end, convention) {
                        pending.direction = Some(direction);
                    }
                }
                Ok(InputEvent::Restart) => pending.restart = true,
                Ok(InputEvent::Quit) => pending.quit = true,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    pending.closed = true;
                    break;
                }
            }
        }
        pending
    }
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives one session at the configured cadence until the game budget is
    /// used up, `quit` arrives, or input closes while nothing is running.
    pub async fn run(
        settings: SnakeSessionSettings,
        mut rng: SessionRng,
        mut inputs: UnboundedReceiver<InputEvent>,
    ) -> SessionSummary {
        let mut game_state = SnakeGameState::new(settings.board, settings.rules, &mut rng);
        let mut tick_interval_timer = interval(settings.tick_interval);
        let mut results: Vec<GameResult> = Vec::new();
        let mut ticks: u64 = 0;
        let mut finished = false;
        let mut inputs_closed = false;

        log!(
            "Session started: {}x{} cells, head at ({}, {}), food at ({}, {})",
            settings.board.columns(),
            settings.board.rows(),
            game_state.head().x,
            game_state.head().y,
            game_state.food().x,
            game_state.food().y
        );

        loop {
            tick_interval_timer.tick().await;

            let pending = if inputs_closed {
                PendingInput {
                    closed: true,
                    ..PendingInput::default()
                }
            } else {
                PendingInput::drain(&mut inputs, settings.rules.horizontal_convention)
            };
            inputs_closed = pending.closed;

            if pending.quit {
                if !finished {
                    results.push(GameResult {
                        score: game_state.score(),
                        ticks,
                        end: GameEnd::Aborted,
                    });
                }
                log!("Quit requested");
                break;
            }

            if finished {
                if settings.auto_restart || pending.restart {
                    game_state.restart(&mut rng);
                    ticks = 0;
                    finished = false;
                } else if inputs_closed {
                    log!("Input closed while waiting for restart");
                    break;
                }
                continue;
            }

            if pending.restart {
                log!("Restart ignored, game is still running");
            }
            if let Some(direction) = pending.direction {
                game_state.set_direction(direction);
            }
            if settings.autopilot
                && let Some(direction) = BotController::calculate_move(&game_state)
            {
                game_state.set_direction(direction);
            }

            let outcome = game_state.tick(&mut rng);
            ticks += 1;

            let end = match outcome {
                TickOutcome::GameOver(reason) => Some(GameEnd::from(reason)),
                TickOutcome::Moved | TickOutcome::AteFood | TickOutcome::AlreadyOver => {
                    match settings.max_ticks_per_game {
                        Some(max_ticks) if ticks >= max_ticks => Some(GameEnd::TickLimit),
                        _ => None,
                    }
                }
            };

            if let Some(end) = end {
                let result = GameResult {
                    score: game_state.score(),
                    ticks,
                    end,
                };
                log!(
                    "Game {} finished: {:?}, score {} after {} ticks",
                    results.len() + 1,
                    result.end,
                    result.score,
                    result.ticks
                );
                results.push(result);
                finished = true;

                if results.len() as u32 >= settings.games {
                    break;
                }
            }
        }

        SessionSummary {
            seed: rng.seed(),
            games: results,
        }
    }
}
