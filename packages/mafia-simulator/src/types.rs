//! Shared types for the simulator.

use clap::ValueEnum;
use mafia_engine::RoleKind;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line, written as games finish
    Jsonl,
    /// A single JSON array, written when the run finishes
    Json,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum MetricsLevel {
    Basic,
    /// Also records the game log and every transition
    Detailed,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Mafia,
    Doctor,
    Civilian,
}

impl From<RoleArg> for RoleKind {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Mafia => RoleKind::Mafia,
            RoleArg::Doctor => RoleKind::Doctor,
            RoleArg::Civilian => RoleKind::Civilian,
        }
    }
}
