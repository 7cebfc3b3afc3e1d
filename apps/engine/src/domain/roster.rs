use crate::domain::rules::{role_limit, RoleCounts, RoleKind, PLAYERS};
use crate::domain::state::{Player, PlayerId};
use crate::errors::domain::{RosterError, SetupError};

/// Players in join order. Dead players stay in place so ids never shift.
#[derive(Debug, Clone, Default)]
pub struct PlayerRoster {
    players: Vec<Player>,
    counts: RoleCounts,
}

impl PlayerRoster {
    pub fn new() -> Self {
        Self {
            players: Vec::with_capacity(PLAYERS),
            counts: RoleCounts::default(),
        }
    }

    /// Add a player, enforcing name and role-count rules.
    ///
    /// Checks run in order: blank name, duplicate name (case-sensitive, after
    /// trimming), role limit. The stored name is the trimmed one.
    pub fn add_player(&mut self, name: &str, role: RoleKind) -> Result<PlayerId, SetupError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SetupError::EmptyName);
        }
        if self.find_by_name(name).is_some() {
            return Err(SetupError::DuplicateName(name.to_string()));
        }
        let limit = role_limit(role);
        if self.counts.get(role) >= limit {
            return Err(SetupError::RoleLimitExceeded { role, limit });
        }

        let id = self.players.len() as PlayerId;
        self.players.push(Player {
            name: name.to_string(),
            role,
            alive: true,
        });
        self.counts.increment(role);
        Ok(id)
    }

    /// Living players in join order.
    pub fn living_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.alive)
            .map(|(i, _)| i as PlayerId)
            .collect()
    }

    pub fn eliminate(&mut self, id: PlayerId) -> Result<(), RosterError> {
        let player = self
            .players
            .get_mut(id as usize)
            .ok_or(RosterError::UnknownPlayer(id))?;
        if !player.alive {
            return Err(RosterError::AlreadyDead(id));
        }
        player.alive = false;
        Ok(())
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, RosterError> {
        self.players
            .get(id as usize)
            .ok_or(RosterError::UnknownPlayer(id))
    }

    pub fn role_of(&self, id: PlayerId) -> Result<RoleKind, RosterError> {
        self.player(id).map(|p| p.role)
    }

    /// Unknown ids are simply not alive.
    pub fn is_alive(&self, id: PlayerId) -> bool {
        self.players.get(id as usize).is_some_and(|p| p.alive)
    }

    pub fn name_of(&self, id: PlayerId) -> Result<&str, RosterError> {
        self.player(id).map(|p| p.name.as_str())
    }

    pub fn find_by_name(&self, name: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .position(|p| p.name == name)
            .map(|i| i as PlayerId)
    }

    /// Living holder of `role`, if any. With the fixed line-up only
    /// Mafia and Doctor are unique, so this returns the first match.
    pub fn living_holder_of(&self, role: RoleKind) -> Option<PlayerId> {
        self.players
            .iter()
            .position(|p| p.alive && p.role == role)
            .map(|i| i as PlayerId)
    }

    pub fn role_counts(&self) -> RoleCounts {
        self.counts
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
