use crate::action::{Action, ParseActionError};
use dronebay_kernel::Scene;
use std::str::FromStr;

/// A timeline of actions for headless runs: entry `i` is applied just
/// before tick `i`.
///
/// Parsed from a comma-separated list where `name*k` repeats an action on
/// `k` consecutive ticks, e.g. `"f*3, j, forward*10, 2"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionScript {
    actions: Vec<Action>,
}

impl ActionScript {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// The action scheduled for `tick`, if any.
    pub fn action_at(&self, tick: usize) -> Option<Action> {
        self.actions.get(tick).copied()
    }

    /// Run `ticks` fixed steps of `dt`, feeding scheduled actions in order.
    /// Entries past the tick budget are dropped.
    pub fn run(&self, scene: &mut Scene, ticks: usize, dt: f32) {
        if self.len() > ticks {
            tracing::warn!(
                scheduled = self.len(),
                ticks,
                "script is longer than the run; trailing actions are skipped"
            );
        }
        for tick in 0..ticks {
            if let Some(action) = self.action_at(tick) {
                action.apply(scene);
            }
            scene.tick(dt);
        }
    }
}

impl FromStr for ActionScript {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut actions = Vec::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, repeat) = match entry.rsplit_once('*') {
                Some((name, count)) => {
                    let count = count
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .filter(|c| *c > 0)
                        .ok_or_else(|| ParseActionError(entry.to_string()))?;
                    (name, count)
                }
                None => (entry, 1),
            };
            let action: Action = name.parse()?;
            actions.extend(std::iter::repeat_n(action, repeat));
        }
        Ok(Self { actions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries_and_repeats() {
        let script: ActionScript = "f*3, j, forward*2, 2".parse().unwrap();
        assert_eq!(
            script.actions(),
            &[
                Action::IncreaseSpin,
                Action::IncreaseSpin,
                Action::IncreaseSpin,
                Action::TriggerRoll,
                Action::MoveForward,
                Action::MoveForward,
                Action::SelectCamera(1),
            ]
        );
    }

    #[test]
    fn empty_entries_are_skipped() {
        let script: ActionScript = " ,j,, ".parse().unwrap();
        assert_eq!(script.actions(), &[Action::TriggerRoll]);
        assert!("".parse::<ActionScript>().unwrap().is_empty());
    }

    #[test]
    fn bad_repeat_count_is_an_error() {
        assert!("f*0".parse::<ActionScript>().is_err());
        assert!("f*many".parse::<ActionScript>().is_err());
        assert!("loop*2".parse::<ActionScript>().is_err());
    }

    #[test]
    fn run_applies_one_action_per_tick() {
        let script: ActionScript = "j, f*2, 3".parse().unwrap();
        let mut scene = Scene::new();
        script.run(&mut scene, 10, 0.25);

        assert_eq!(scene.ticks(), 10);
        assert_eq!(scene.actor().spin_rate(), 120.0);
        assert_eq!(scene.active_camera_index(), 2);
        // Roll started before tick 0 and needs 8 ticks of 0.25s.
        assert!(!scene.actor().is_rolling());
    }

    #[test]
    fn run_drops_actions_past_budget() {
        let script: ActionScript = "f*5".parse().unwrap();
        let mut scene = Scene::new();
        script.run(&mut scene, 2, 1.0 / 60.0);
        assert_eq!(scene.actor().spin_rate(), 120.0);
    }
}
