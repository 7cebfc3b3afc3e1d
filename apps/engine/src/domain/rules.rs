use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

pub const PLAYERS: usize = 4;

/// Role a player holds for the whole game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RoleKind {
    /// Eliminates one living player per night.
    Mafia,
    /// Protects one living player per night.
    Doctor,
    /// No night action.
    Civilian,
}

impl RoleKind {
    pub const ALL: [RoleKind; 3] = [RoleKind::Mafia, RoleKind::Doctor, RoleKind::Civilian];

    /// Roles that act at night, in the order they are asked to act.
    pub const NIGHT_ORDER: [RoleKind; 2] = [RoleKind::Mafia, RoleKind::Doctor];

    pub fn has_night_action(self) -> bool {
        Self::NIGHT_ORDER.contains(&self)
    }
}

impl Display for RoleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RoleKind::Mafia => write!(f, "Mafia"),
            RoleKind::Doctor => write!(f, "Doctor"),
            RoleKind::Civilian => write!(f, "Civilian"),
        }
    }
}

/// Number of players holding each role.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub mafia: u8,
    pub doctor: u8,
    pub civilian: u8,
}

impl RoleCounts {
    pub const fn new(mafia: u8, doctor: u8, civilian: u8) -> Self {
        Self {
            mafia,
            doctor,
            civilian,
        }
    }

    pub fn get(&self, role: RoleKind) -> u8 {
        match role {
            RoleKind::Mafia => self.mafia,
            RoleKind::Doctor => self.doctor,
            RoleKind::Civilian => self.civilian,
        }
    }

    pub fn increment(&mut self, role: RoleKind) {
        let slot = match role {
            RoleKind::Mafia => &mut self.mafia,
            RoleKind::Doctor => &mut self.doctor,
            RoleKind::Civilian => &mut self.civilian,
        };
        *slot = slot.saturating_add(1);
    }

    pub fn total(&self) -> usize {
        self.mafia as usize + self.doctor as usize + self.civilian as usize
    }
}

/// The only supported line-up: one Mafia, one Doctor, two Civilians.
pub const REQUIRED_ROLES: RoleCounts = RoleCounts::new(1, 1, 2);

/// Fixed per-role limit.
pub fn role_limit(role: RoleKind) -> u8 {
    REQUIRED_ROLES.get(role)
}

/// Role kinds that can still be assigned, in declaration order.
pub fn remaining_roles(assigned: &RoleCounts) -> Vec<RoleKind> {
    RoleKind::ALL
        .into_iter()
        .filter(|&role| assigned.get(role) < role_limit(role))
        .collect()
}

/// True iff `assigned` matches the required line-up exactly.
pub fn validate_complete(assigned: &RoleCounts) -> bool {
    *assigned == REQUIRED_ROLES
}
