//! Rotation state: slots, bench queues, rotation transitions
//!
//! A Rotation is one saved arrangement: the mesh it is drawn on, six zone
//! slots, and the two sideline bench queues. Slot and queue cells hold
//! plain player ids; the roster itself lives on the Team.
//!
//! Transitions are total. Empty slots rotate as vacancies, empty queue
//! ends pop `None`, and an eviction into an empty bench passes straight
//! through to the slot refilled from that bench on the same step.

use std::collections::VecDeque;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::player::PlayerId;
use crate::court::{Mesh, Zone};

/// Which sideline a bench queue sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BenchSide {
    Left,
    Right,
}

impl BenchSide {
    /// Get the string ID (for JSON compatibility)
    pub fn as_str(&self) -> &'static str {
        match self {
            BenchSide::Left => "left",
            BenchSide::Right => "right",
        }
    }

    /// Parse from string ID
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "left" => Some(BenchSide::Left),
            "right" => Some(BenchSide::Right),
            _ => None,
        }
    }
}

/// Ordered sideline queue. Index 0 is the top (net end).
///
/// Queue order is load-bearing: rotation transitions read and feed specific
/// ends, so every operation preserves relative order exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct BenchQueue(VecDeque<PlayerId>);

impl BenchQueue {
    pub fn new() -> Self {
        BenchQueue(VecDeque::new())
    }

    pub fn push_top(&mut self, id: PlayerId) {
        self.0.push_front(id);
    }

    pub fn pop_top(&mut self) -> Option<PlayerId> {
        self.0.pop_front()
    }

    pub fn push_bottom(&mut self, id: PlayerId) {
        self.0.push_back(id);
    }

    pub fn pop_bottom(&mut self) -> Option<PlayerId> {
        self.0.pop_back()
    }

    /// Insert at `index` counted from the top; out-of-range clamps to the bottom
    pub fn insert(&mut self, index: usize, id: PlayerId) {
        let at = index.min(self.0.len());
        self.0.insert(at, id);
    }

    /// Remove one player, returning the index it held
    pub fn remove(&mut self, id: &str) -> Option<usize> {
        let at = self.position_of(id)?;
        self.0.remove(at);
        Some(at)
    }

    pub fn retain<F: FnMut(&PlayerId) -> bool>(&mut self, f: F) {
        self.0.retain(f);
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|member| member == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position_of(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<PlayerId> for BenchQueue {
    fn from_iter<I: IntoIterator<Item = PlayerId>>(iter: I) -> Self {
        BenchQueue(iter.into_iter().collect())
    }
}

/// The six zone slots of one rotation. Field order matches [`Zone::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SlotAssignments {
    pub front_left: Option<PlayerId>,
    pub front_middle: Option<PlayerId>,
    pub front_right: Option<PlayerId>,
    pub back_left: Option<PlayerId>,
    pub back_middle: Option<PlayerId>,
    pub back_right: Option<PlayerId>,
}

impl SlotAssignments {
    pub fn get(&self, zone: Zone) -> Option<&PlayerId> {
        match zone {
            Zone::FrontLeft => self.front_left.as_ref(),
            Zone::FrontMiddle => self.front_middle.as_ref(),
            Zone::FrontRight => self.front_right.as_ref(),
            Zone::BackLeft => self.back_left.as_ref(),
            Zone::BackMiddle => self.back_middle.as_ref(),
            Zone::BackRight => self.back_right.as_ref(),
        }
    }

    /// Assign a slot, returning the displaced occupant
    pub fn set(&mut self, zone: Zone, occupant: Option<PlayerId>) -> Option<PlayerId> {
        let cell = match zone {
            Zone::FrontLeft => &mut self.front_left,
            Zone::FrontMiddle => &mut self.front_middle,
            Zone::FrontRight => &mut self.front_right,
            Zone::BackLeft => &mut self.back_left,
            Zone::BackMiddle => &mut self.back_middle,
            Zone::BackRight => &mut self.back_right,
        };
        std::mem::replace(cell, occupant)
    }

    pub fn take(&mut self, zone: Zone) -> Option<PlayerId> {
        self.set(zone, None)
    }

    /// Visit all slots in [`Zone::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Zone, Option<&PlayerId>)> {
        Zone::ALL.into_iter().map(move |zone| (zone, self.get(zone)))
    }

    pub fn position_of(&self, id: &str) -> Option<Zone> {
        Zone::ALL.into_iter().find(|zone| self.get(*zone).map(|m| m.as_str()) == Some(id))
    }

    pub fn occupied_count(&self) -> usize {
        self.iter().filter(|(_, occupant)| occupant.is_some()).count()
    }
}

/// A concrete location a player can occupy inside one rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Slot(Zone),
    Bench { side: BenchSide, index: usize },
}

/// One saved arrangement: mesh + slots + both bench queues
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rotation {
    pub id: String,
    pub name: String,
    pub mesh: Mesh,
    pub slots: SlotAssignments,
    pub left_bench: BenchQueue,
    pub right_bench: BenchQueue,
}

impl Rotation {
    /// Empty rotation on the default mesh
    pub fn new(name: impl Into<String>) -> Self {
        Rotation {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            mesh: Mesh::default(),
            slots: SlotAssignments::default(),
            left_bench: BenchQueue::new(),
            right_bench: BenchQueue::new(),
        }
    }

    pub fn bench(&self, side: BenchSide) -> &BenchQueue {
        match side {
            BenchSide::Left => &self.left_bench,
            BenchSide::Right => &self.right_bench,
        }
    }

    pub fn bench_mut(&mut self, side: BenchSide) -> &mut BenchQueue {
        match side {
            BenchSide::Left => &mut self.left_bench,
            BenchSide::Right => &mut self.right_bench,
        }
    }

    /// One clockwise step of the full conveyor:
    /// left-bench top -> front-left -> front-middle -> front-right ->
    /// right-bench top .. right-bench bottom -> back-right -> back-middle ->
    /// back-left -> left-bench bottom .. back around to the left-bench top.
    pub fn rotate_clockwise(&mut self) {
        if let Some(out) = self.slots.take(Zone::FrontRight) {
            self.right_bench.push_top(out);
        }
        if let Some(out) = self.slots.take(Zone::BackLeft) {
            self.left_bench.push_bottom(out);
        }

        self.slots.front_right = self.slots.front_middle.take();
        self.slots.front_middle = self.slots.front_left.take();
        self.slots.back_left = self.slots.back_middle.take();
        self.slots.back_middle = self.slots.back_right.take();

        self.slots.front_left = self.left_bench.pop_top();
        self.slots.back_right = self.right_bench.pop_bottom();
    }

    /// Exact inverse of [`Rotation::rotate_clockwise`]: every push lands on
    /// the end the clockwise step popped from, and every pop reads the end
    /// the clockwise step pushed to.
    pub fn rotate_counter_clockwise(&mut self) {
        if let Some(out) = self.slots.take(Zone::FrontLeft) {
            self.left_bench.push_top(out);
        }
        if let Some(out) = self.slots.take(Zone::BackRight) {
            self.right_bench.push_bottom(out);
        }

        self.slots.front_left = self.slots.front_middle.take();
        self.slots.front_middle = self.slots.front_right.take();
        self.slots.back_right = self.slots.back_middle.take();
        self.slots.back_middle = self.slots.back_left.take();

        self.slots.front_right = self.right_bench.pop_top();
        self.slots.back_left = self.left_bench.pop_bottom();
    }

    /// Where does this player currently sit?
    pub fn locate(&self, id: &str) -> Option<Placement> {
        if let Some(zone) = self.slots.position_of(id) {
            return Some(Placement::Slot(zone));
        }
        if let Some(index) = self.left_bench.position_of(id) {
            return Some(Placement::Bench { side: BenchSide::Left, index });
        }
        if let Some(index) = self.right_bench.position_of(id) {
            return Some(Placement::Bench { side: BenchSide::Right, index });
        }
        None
    }

    /// Remove a player from wherever it sits, returning the vacated spot
    pub fn remove(&mut self, id: &str) -> Option<Placement> {
        let placement = self.locate(id)?;
        match placement {
            Placement::Slot(zone) => {
                self.slots.take(zone);
            }
            Placement::Bench { side, index: _ } => {
                self.bench_mut(side).remove(id);
            }
        }
        Some(placement)
    }

    fn put(&mut self, id: PlayerId, placement: Placement) {
        match placement {
            Placement::Slot(zone) => {
                self.slots.set(zone, Some(id));
            }
            Placement::Bench { side, index } => self.bench_mut(side).insert(index, id),
        }
    }

    /// Drop resolution. The player leaves its source first; a drop onto an
    /// occupied slot swaps the two, sending the displaced player to the
    /// incoming one's source (or the right-bench top if it had none).
    /// Bench indices refer to the queue with the moving player already gone.
    pub fn place(&mut self, id: PlayerId, target: Placement) {
        let source = self.remove(&id);
        if source == Some(target) {
            // Dropped back onto its own spot.
            self.put(id, target);
            return;
        }
        match target {
            Placement::Slot(zone) => {
                if let Some(displaced) = self.slots.set(zone, Some(id)) {
                    match source {
                        Some(src) => self.put(displaced, src),
                        None => self.right_bench.push_top(displaced),
                    }
                }
            }
            Placement::Bench { side, index } => {
                self.bench_mut(side).insert(index, id);
            }
        }
    }
}
