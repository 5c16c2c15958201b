// World dimensions (logical units, origin top-left, y grows downward)
pub const WORLD_WIDTH: f64 = 800.0;
pub const WORLD_HEIGHT: f64 = 600.0;

// Game timing constants
pub const TICK_RATE_HZ: u64 = 120;
pub const TICK_INTERVAL_US: u64 = 1_000_000 / TICK_RATE_HZ;
pub const MAX_FRAME_DT_MS: u64 = 100; // clamp after a stall so physics doesn't explode
pub const FRAME_POLL_MS: u64 = 8;
pub const GAME_OVER_DELAY_MS: u64 = 2000;

// Input constants
pub const KEY_HOLD_WINDOW_MS: u64 = 120;

// Persistence constants
pub const DATA_DIR_NAME: &str = ".bird-games";
pub const SCORES_DIR_NAME: &str = "best_scores";
pub const LOG_FILE_NAME: &str = "bird-games.log";
pub const SCORES_DIR_ENV: &str = "BIRD_GAMES_SCORES_DIR";
