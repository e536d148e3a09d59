use serde::{Deserialize, Serialize};

use crate::board::{self, Plank};

#[derive(Clone, Debug)]
pub struct Game {
    planks: Vec<Plank>,
    removed: Vec<String>,
    steps: Vec<String>,
}

impl Game {
    pub fn new() -> Self {
        Self::with_planks(board::planks().to_vec())
    }

    pub fn with_planks(planks: Vec<Plank>) -> Self {
        Self {
            planks,
            removed: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn planks(&self) -> &[Plank] {
        &self.planks
    }

    pub fn removed_bolts(&self) -> &[String] {
        &self.removed
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn is_removed(&self, bolt_id: &str) -> bool {
        self.removed.iter().any(|id| id == bolt_id)
    }

    pub fn remaining_bolts(&self, plank: &Plank) -> usize {
        plank
            .bolts
            .iter()
            .filter(|bolt| !self.is_removed(bolt))
            .count()
    }

    pub fn is_fallen(&self, plank: &Plank) -> bool {
        self.remaining_bolts(plank) == 0
    }

    // Drop-animation trigger: the plank has started losing bolts and hangs
    // on exactly one.
    pub fn is_dropping(&self, plank: &Plank) -> bool {
        self.remaining_bolts(plank) == 1
            && plank.bolts.iter().any(|bolt| self.is_removed(bolt))
    }

    // A plank blocks a member bolt while it spans more than one bolt and any
    // member is still present. The queried bolt itself counts as present, so
    // an intact multi-bolt plank blocks every one of its bolts.
    pub fn can_remove(&self, bolt_id: &str) -> bool {
        !self.planks.iter().any(|plank| {
            plank.bolts.iter().any(|bolt| *bolt == bolt_id)
                && plank.bolts.len() > 1
                && plank.bolts.iter().any(|bolt| !self.is_removed(bolt))
        })
    }

    pub fn remove_bolt(&mut self, bolt_id: &str) -> bool {
        if self.is_removed(bolt_id) || !self.can_remove(bolt_id) {
            return false;
        }
        self.removed.push(bolt_id.to_string());
        self.steps.push(format!("Removed {bolt_id}"));
        true
    }

    pub fn reset(&mut self) {
        self.removed.clear();
        self.steps.clear();
    }

    pub fn is_solved(&self) -> bool {
        self.planks.iter().all(|plank| self.is_fallen(plank))
    }

    pub fn removable_bolts<'a, I>(&self, bolts: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        bolts
            .into_iter()
            .filter(|bolt| !self.is_removed(bolt) && self.can_remove(bolt))
            .collect()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            removed: self.removed.clone(),
            steps: self.steps.clone(),
            solved: self.is_solved(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub removed: Vec<String>,
    pub steps: Vec<String>,
    pub solved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::bolt_ids;

    const SINGLE: Plank = Plank { id: "s", color: "red", level: 1, bolts: &["X1"] };
    const PAIR: Plank = Plank { id: "p", color: "red", level: 1, bolts: &["A", "B"] };

    #[test]
    fn single_bolt_plank_never_blocks() {
        let mut game = Game::with_planks(vec![SINGLE]);
        assert!(game.can_remove("X1"));
        assert!(game.remove_bolt("X1"));
        assert!(game.is_solved());
        assert_eq!(game.steps(), ["Removed X1"]);
    }

    #[test]
    fn two_bolt_plank_blocks_both_bolts_while_intact() {
        // Literal boundary rule: the queried bolt still counts as present,
        // so neither bolt of an intact pair is removable.
        let game = Game::with_planks(vec![PAIR]);
        assert!(!game.can_remove("A"));
        assert!(!game.can_remove("B"));
    }

    #[test]
    fn ineligible_removal_is_a_no_op() {
        let mut game = Game::with_planks(vec![PAIR]);
        assert!(!game.remove_bolt("A"));
        assert!(game.removed_bolts().is_empty());
        assert!(game.steps().is_empty());
        assert!(!game.is_solved());
    }

    #[test]
    fn already_removed_bolt_is_a_no_op() {
        let mut game = Game::with_planks(vec![SINGLE]);
        assert!(game.remove_bolt("X1"));
        // The fallen plank no longer blocks, so the guard on the removed set
        // is what stops the second call.
        assert!(game.can_remove("X1"));
        assert!(!game.remove_bolt("X1"));
        assert_eq!(game.removed_bolts(), ["X1"]);
        assert_eq!(game.steps(), ["Removed X1"]);
    }

    #[test]
    fn bolt_outside_every_plank_is_unblocked() {
        let mut game = Game::with_planks(vec![PAIR]);
        assert!(game.can_remove("Z9"));
        assert!(game.remove_bolt("Z9"));
        assert_eq!(game.steps(), ["Removed Z9"]);
    }

    #[test]
    fn removed_set_grows_until_reset() {
        let planks = vec![
            Plank { id: "a", color: "red", level: 1, bolts: &["A1"] },
            Plank { id: "b", color: "red", level: 1, bolts: &["B1"] },
            Plank { id: "c", color: "red", level: 1, bolts: &["C1"] },
        ];
        let mut game = Game::with_planks(planks);
        let mut seen = 0;
        for bolt in ["A1", "B1", "C1"] {
            assert!(game.remove_bolt(bolt));
            seen += 1;
            assert_eq!(game.removed_bolts().len(), seen);
        }
        game.reset();
        assert!(game.removed_bolts().is_empty());
        assert!(game.steps().is_empty());
        assert!(!game.is_solved());
    }

    #[test]
    fn solved_flips_only_after_the_last_removal() {
        let planks = vec![
            Plank { id: "a", color: "red", level: 1, bolts: &["A1"] },
            Plank { id: "b", color: "red", level: 2, bolts: &["B1"] },
            Plank { id: "c", color: "red", level: 3, bolts: &["C1"] },
        ];
        let mut game = Game::with_planks(planks);
        // Any order works here; each step must pass the eligibility check.
        for bolt in ["C1", "A1", "B1"] {
            assert!(!game.is_solved());
            assert!(game.can_remove(bolt));
            assert!(game.remove_bolt(bolt));
        }
        assert!(game.is_solved());
        assert_eq!(game.steps(), ["Removed C1", "Removed A1", "Removed B1"]);
    }

    #[test]
    fn win_condition_requires_every_plank_fallen() {
        let planks = vec![
            Plank { id: "a", color: "red", level: 1, bolts: &["A1"] },
            Plank { id: "b", color: "red", level: 1, bolts: &["B1"] },
        ];
        let mut game = Game::with_planks(planks);
        assert!(game.remove_bolt("A1"));
        assert!(!game.is_solved());
        assert!(game.remove_bolt("B1"));
        assert!(game.is_solved());
    }

    #[test]
    fn shipped_board_starts_fully_blocked() {
        // Every grid bolt belongs to at least one intact multi-bolt plank,
        // so the literal rule leaves nothing removable at session start.
        let mut game = Game::new();
        for bolt in bolt_ids() {
            assert!(!game.can_remove(bolt), "{bolt} should be blocked");
        }
        for bolt in bolt_ids() {
            assert!(!game.remove_bolt(bolt));
        }
        assert!(game.removed_bolts().is_empty());
        assert!(game.steps().is_empty());
        assert!(game.removable_bolts(bolt_ids()).is_empty());
    }

    #[test]
    fn dropping_and_fallen_track_the_removed_set() {
        let mut game = Game::with_planks(vec![SINGLE]);
        assert!(!game.is_dropping(&SINGLE));
        assert!(game.remove_bolt("X1"));
        assert!(game.is_fallen(&SINGLE));
        assert!(!game.is_dropping(&SINGLE));

        // Render queries take any plank value; a pair sharing the removed
        // bolt reads as hanging on its last support.
        let hanging = Plank { id: "h", color: "red", level: 1, bolts: &["X1", "Y1"] };
        assert!(game.is_dropping(&hanging));
        assert!(!game.is_fallen(&hanging));
        let untouched = Plank { id: "u", color: "red", level: 1, bolts: &["Y1", "Z1"] };
        assert!(!game.is_dropping(&untouched));
    }

    #[test]
    fn snapshot_mirrors_session_state() {
        let mut game = Game::with_planks(vec![SINGLE]);
        assert!(game.remove_bolt("X1"));
        let snapshot = game.snapshot();
        assert_eq!(snapshot.removed, ["X1"]);
        assert_eq!(snapshot.steps, ["Removed X1"]);
        assert!(snapshot.solved);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"removed\""));
        assert!(json.contains("\"solved\":true"));
    }
}
