use tracing::{debug, info};

use super::GameController;
use crate::domain::day::{self, DayRound};
use crate::domain::night::{self, NightOutcome, NightRound};
use crate::domain::win::{self, WinOutcome};
use crate::domain::{GameEnding, GameState, Phase, PlayerId};
use crate::errors::domain::DomainError;

const SAVE_ENDING: &str = "No one died — The Doctor saved the target. Game Over.";

impl GameController {
    /// End -> Setup with a fresh state.
    pub fn restart(&mut self) -> Result<(), DomainError> {
        if self.state.phase != Phase::End {
            return Err(DomainError::NotEnded(self.state.phase));
        }
        self.state = GameState::new();
        info!("Game restarted");
        Ok(())
    }

    pub(super) fn start_night(&mut self) {
        let round = self.state.round;
        self.state.phase = Phase::Night;
        self.state.day = None;
        self.state.night = Some(NightRound::start(&self.state.roster));
        self.state.log(format!("Night {round} begins."));
        debug!(round, "Night begins");
    }

    fn start_day(&mut self) {
        let round = self.state.round;
        self.state.phase = Phase::Day;
        self.state.night = None;
        self.state.day = Some(DayRound::start(&self.state.roster));
        self.state.log(format!("Day {round} voting begins."));
        debug!(round, "Day begins");
    }

    /// Night -> End on a save, Night -> Day or End on a kill.
    pub(super) fn apply_night_outcome(&mut self, outcome: NightOutcome) -> Result<(), DomainError> {
        match outcome {
            NightOutcome::Saved(saved) => {
                let name = self.state.roster.name_of(saved)?.to_string();
                self.state.log(format!("Doctor saved {name}. No one died."));
                info!(round = self.state.round, target = saved, "Doctor saved the Mafia's target");
                self.end_game(GameEnding::DoctorSave { saved }, SAVE_ENDING);
            }
            NightOutcome::Killed(target) => {
                night::apply_outcome(&mut self.state.roster, outcome)?;
                let name = self.state.roster.name_of(target)?.to_string();
                self.state.log(format!("{name} was killed during the night."));
                info!(round = self.state.round, target, "Night kill");

                match win::evaluate(&self.state.roster) {
                    WinOutcome::Ongoing => self.start_day(),
                    terminal => self.end_with_winner(terminal)?,
                }
            }
        }
        Ok(())
    }

    /// Day -> Night (next round) or End.
    pub(super) fn apply_lynch(&mut self, lynched: PlayerId) -> Result<(), DomainError> {
        day::apply_lynch(&mut self.state.roster, lynched)?;
        let name = self.state.roster.name_of(lynched)?.to_string();
        self.state.log(format!("The town lynched {name}."));
        info!(round = self.state.round, target = lynched, "Lynch");

        match win::evaluate(&self.state.roster) {
            WinOutcome::Ongoing => {
                self.state.round += 1;
                self.start_night();
            }
            terminal => self.end_with_winner(terminal)?,
        }
        Ok(())
    }

    fn end_with_winner(&mut self, outcome: WinOutcome) -> Result<(), DomainError> {
        let message = outcome
            .message()
            .ok_or_else(|| DomainError::invariant("ending the game without a winner"))?;
        self.end_game(GameEnding::Victory(outcome), message);
        Ok(())
    }

    fn end_game(&mut self, ending: GameEnding, message: &str) {
        self.state.phase = Phase::End;
        self.state.night = None;
        self.state.day = None;
        self.state.ending = Some(ending);
        self.state.log(message);
        info!(round = self.state.round, ?ending, "Game over");
    }
}
