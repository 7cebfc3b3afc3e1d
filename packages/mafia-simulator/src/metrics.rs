//! Metrics collection for simulation results.

use mafia_engine::domain::PLAYERS;
use mafia_engine::{GameEnding, GameTransition, RoleKind, WinOutcome};
use serde::Serialize;

use crate::simulator::{Elimination, GameResult};

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<GameDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub ai_types: [String; PLAYERS],
    pub roles: [RoleKind; PLAYERS],
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    /// `TownWin`, `MafiaWin` or `DoctorSave`
    pub ending: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<WinOutcome>,
    pub rounds: u32,
    pub eliminations: Vec<Elimination>,
    pub duration_ms: f64,
}

/// Only present at `MetricsLevel::Detailed`.
#[derive(Debug, Clone, Serialize)]
pub struct GameDetail {
    pub log: Vec<String>,
    pub transitions: Vec<GameTransition>,
}

pub struct GameMetricsInput {
    pub game_id: u32,
    pub seed: u64,
    pub ai_types: [String; PLAYERS],
    pub roles: [RoleKind; PLAYERS],
    pub total_games: u32,
    pub detailed: bool,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    input: GameMetricsInput,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let detail = input.detailed.then(|| GameDetail {
        log: result.log.clone(),
        transitions: result.transitions.clone(),
    });

    GameMetrics {
        game_id: input.game_id,
        seed: input.seed,
        timestamp,
        config: GameConfig {
            ai_types: input.ai_types,
            roles: input.roles,
            total_games: input.total_games,
        },
        result: GameResultMetrics {
            ending: ending_label(result.ending).to_string(),
            winner: winner_of(result.ending),
            rounds: result.rounds,
            eliminations: result.eliminations.clone(),
            duration_ms,
        },
        detail,
    }
}

pub fn ending_label(ending: GameEnding) -> &'static str {
    match ending {
        GameEnding::DoctorSave { .. } => "DoctorSave",
        GameEnding::Victory(WinOutcome::TownWin) => "TownWin",
        GameEnding::Victory(WinOutcome::MafiaWin) => "MafiaWin",
        GameEnding::Victory(WinOutcome::Ongoing) => "Ongoing",
    }
}

fn winner_of(ending: GameEnding) -> Option<WinOutcome> {
    match ending {
        GameEnding::Victory(outcome) => Some(outcome),
        GameEnding::DoctorSave { .. } => None,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub ending: String,
    pub rounds: u32,
    pub eliminations: usize,
    pub seat0_role: RoleKind,
    pub seat1_role: RoleKind,
    pub seat2_role: RoleKind,
    pub seat3_role: RoleKind,
    pub seat0_ai: String,
    pub seat1_ai: String,
    pub seat2_ai: String,
    pub seat3_ai: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            ending: metrics.result.ending.clone(),
            rounds: metrics.result.rounds,
            eliminations: metrics.result.eliminations.len(),
            seat0_role: metrics.config.roles[0],
            seat1_role: metrics.config.roles[1],
            seat2_role: metrics.config.roles[2],
            seat3_role: metrics.config.roles[3],
            seat0_ai: metrics.config.ai_types[0].clone(),
            seat1_ai: metrics.config.ai_types[1].clone(),
            seat2_ai: metrics.config.ai_types[2].clone(),
            seat3_ai: metrics.config.ai_types[3].clone(),
        }
    }
}
