//! Task-to-slot bucketing with overflow rebalancing.
//!
//! Tasks are bucketed in input order, then a single forward pass caps each
//! bucket at [`MAX_TASKS_PER_SLOT`] by moving the most recently added tasks
//! into the following slot. Because the last slot spills back into the
//! evening, which the pass has already visited, the evening bucket can end
//! above the cap.

use tracing::debug;

use super::model::{DaySlot, EnergyDemand, EnergyProfile, Intent, PreferredSlot, Task};

/// Most tasks a slot holds after rebalancing.
pub const MAX_TASKS_PER_SLOT: usize = 4;

/// Tasks grouped per day slot, in [`DaySlot::SEQUENCE`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotBuckets {
    buckets: [Vec<Task>; 5],
}

impl SlotBuckets {
    pub fn get(&self, slot: DaySlot) -> &[Task] {
        &self.buckets[slot.index()]
    }

    fn push(&mut self, slot: DaySlot, task: Task) {
        self.buckets[slot.index()].push(task);
    }

    fn pop(&mut self, slot: DaySlot) -> Option<Task> {
        self.buckets[slot.index()].pop()
    }

    fn len(&self, slot: DaySlot) -> usize {
        self.buckets[slot.index()].len()
    }

    /// Consume the buckets, yielding each slot's tasks in sequence order.
    pub fn into_slots(self) -> impl Iterator<Item = (DaySlot, Vec<Task>)> {
        DaySlot::SEQUENCE.into_iter().zip(self.buckets)
    }
}

/// First slot in sequence order that accepts the preference.
pub fn candidate_slot(preferred: PreferredSlot) -> Option<DaySlot> {
    DaySlot::SEQUENCE
        .into_iter()
        .find(|slot| slot.accepts(preferred))
}

/// Slot chosen by energy demand when no slot accepts the preference.
pub fn fallback_slot(demand: EnergyDemand, profile: EnergyProfile) -> DaySlot {
    match demand {
        EnergyDemand::High => match profile {
            EnergyProfile::NightOwl => DaySlot::Evening,
            EnergyProfile::EarlyBird | EnergyProfile::Balanced => DaySlot::Morning,
        },
        EnergyDemand::Medium => DaySlot::Afternoon,
        EnergyDemand::Low => DaySlot::Midday,
    }
}

/// Bucket tasks into slots and rebalance overflow.
///
/// Input tasks are never modified; a task moved during rebalancing is a
/// copy with its preferred slot set to [`PreferredSlot::Flex`].
pub fn assign_tasks_to_slots(intent: &Intent, tasks: &[Task]) -> SlotBuckets {
    let mut buckets = SlotBuckets::default();

    for task in tasks {
        let slot = candidate_slot(task.preferred_slot).unwrap_or_else(|| {
            let slot = fallback_slot(task.energy_demand, intent.energy_profile);
            debug!(task_id = %task.id, %slot, "no slot accepts preference, using energy fallback");
            slot
        });
        buckets.push(slot, task.clone());
    }

    for slot in DaySlot::SEQUENCE {
        while buckets.len(slot) > MAX_TASKS_PER_SLOT {
            let Some(mut spill) = buckets.pop(slot) else {
                break;
            };
            let target = slot.spill_target();
            debug!(task_id = %spill.id, from = %slot, to = %target, "spilling task");
            spill.preferred_slot = PreferredSlot::Flex;
            buckets.push(target, spill);
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routine::model::{NourishmentFocus, TaskCategory};

    fn intent(profile: EnergyProfile) -> Intent {
        Intent {
            date: "2024-03-10".into(),
            wake_time: "07:00".parse().unwrap(),
            sleep_time: "23:00".parse().unwrap(),
            focus: "Calm".into(),
            energy_profile: profile,
            mindful_minutes: 10,
            fitness_minutes: 30,
            nourishment_focus: NourishmentFocus::Balanced,
        }
    }

    fn task(id: &str, preferred: PreferredSlot) -> Task {
        Task {
            id: id.into(),
            title: format!("Task {id}"),
            duration: 30,
            category: TaskCategory::Admin,
            preferred_slot: preferred,
            energy_demand: EnergyDemand::Medium,
            notes: None,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn candidate_slot_takes_first_alias_match() {
        assert_eq!(candidate_slot(PreferredSlot::Morning), Some(DaySlot::Morning));
        assert_eq!(candidate_slot(PreferredSlot::Afternoon), Some(DaySlot::Midday));
        assert_eq!(candidate_slot(PreferredSlot::Flex), Some(DaySlot::Midday));
        assert_eq!(candidate_slot(PreferredSlot::Evening), Some(DaySlot::Evening));
    }

    #[test]
    fn fallback_by_energy_demand() {
        assert_eq!(fallback_slot(EnergyDemand::High, EnergyProfile::NightOwl), DaySlot::Evening);
        assert_eq!(fallback_slot(EnergyDemand::High, EnergyProfile::EarlyBird), DaySlot::Morning);
        assert_eq!(fallback_slot(EnergyDemand::High, EnergyProfile::Balanced), DaySlot::Morning);
        assert_eq!(fallback_slot(EnergyDemand::Medium, EnergyProfile::NightOwl), DaySlot::Afternoon);
        assert_eq!(fallback_slot(EnergyDemand::Low, EnergyProfile::Balanced), DaySlot::Midday);
    }

    #[test]
    fn buckets_preserve_input_order() {
        let tasks = vec![
            task("a", PreferredSlot::Evening),
            task("b", PreferredSlot::Morning),
            task("c", PreferredSlot::Flex),
            task("d", PreferredSlot::Evening),
            task("e", PreferredSlot::Afternoon),
        ];
        let buckets = assign_tasks_to_slots(&intent(EnergyProfile::Balanced), &tasks);
        assert_eq!(ids(buckets.get(DaySlot::Morning)), ["b"]);
        assert_eq!(ids(buckets.get(DaySlot::Midday)), ["c", "e"]);
        assert!(buckets.get(DaySlot::Afternoon).is_empty());
        assert_eq!(ids(buckets.get(DaySlot::Evening)), ["a", "d"]);
        assert!(buckets.get(DaySlot::WindDown).is_empty());
    }

    #[test]
    fn fifth_task_spills_to_next_slot_as_flex() {
        let tasks: Vec<Task> = (1..=5)
            .map(|i| task(&format!("m{i}"), PreferredSlot::Morning))
            .collect();
        let buckets = assign_tasks_to_slots(&intent(EnergyProfile::Balanced), &tasks);

        assert_eq!(ids(buckets.get(DaySlot::Morning)), ["m1", "m2", "m3", "m4"]);
        let midday = buckets.get(DaySlot::Midday);
        assert_eq!(midday.len(), 1);
        assert_eq!(midday[0].preferred_slot, PreferredSlot::Flex);
        assert_eq!(
            midday[0],
            Task {
                preferred_slot: PreferredSlot::Flex,
                ..tasks[4].clone()
            }
        );
        assert_eq!(tasks[4].preferred_slot, PreferredSlot::Morning);
    }

    #[test]
    fn spill_cascades_forward() {
        let mut tasks: Vec<Task> = (1..=5)
            .map(|i| task(&format!("m{i}"), PreferredSlot::Morning))
            .collect();
        tasks.extend((1..=4).map(|i| task(&format!("f{i}"), PreferredSlot::Flex)));
        let buckets = assign_tasks_to_slots(&intent(EnergyProfile::Balanced), &tasks);

        assert_eq!(buckets.get(DaySlot::Morning).len(), 4);
        // m5 lands last in midday, so it is the one pushed on again
        assert_eq!(ids(buckets.get(DaySlot::Midday)), ["f1", "f2", "f3", "f4"]);
        assert_eq!(ids(buckets.get(DaySlot::Afternoon)), ["m5"]);
    }

    #[test]
    fn wind_down_overflow_leaves_evening_over_capacity() {
        let tasks: Vec<Task> = (0..9)
            .map(|i| task(&format!("e{i}"), PreferredSlot::Evening))
            .collect();
        let buckets = assign_tasks_to_slots(&intent(EnergyProfile::Balanced), &tasks);

        // evening keeps e0..e3 and spills e8,e7,e6,e5,e4 into wind-down;
        // wind-down then hands e4 back to the already visited evening
        assert_eq!(ids(buckets.get(DaySlot::Evening)), ["e0", "e1", "e2", "e3", "e4"]);
        assert_eq!(ids(buckets.get(DaySlot::WindDown)), ["e8", "e7", "e6", "e5"]);
        assert!(buckets.get(DaySlot::Evening).len() > MAX_TASKS_PER_SLOT);
        assert!(buckets.get(DaySlot::Evening)[4..]
            .iter()
            .all(|t| t.preferred_slot == PreferredSlot::Flex));
    }

    #[test]
    fn into_slots_yields_sequence_order() {
        let buckets = assign_tasks_to_slots(&intent(EnergyProfile::Balanced), &[]);
        let slots: Vec<DaySlot> = buckets.into_slots().map(|(slot, _)| slot).collect();
        assert_eq!(slots, DaySlot::SEQUENCE);
    }
}
