//! Board context and drag sessions
//!
//! All transient editing state lives in an explicit [`BoardContext`] owned
//! by the caller. At most one drag session is live at a time and the
//! capture is exclusive: a second pointer-down, or any rotation/roster
//! mutation, is refused until the session ends or cancels.
//!
//! A session snapshots the active rotation on begin. Cancel restores that
//! snapshot wholesale, so an interrupted drag never leaves intermediate
//! state behind.

use crate::court::constants::canvas;
use crate::court::{zone_at, CanvasPos, ControlPointId};
use crate::lineup::normalize::normalize_rotation;
use crate::lineup::rotation::BenchSide;
use crate::lineup::{Placement, Player, PlayerId, Rotation, Team};

/// What the pointer grabbed on pointer-down
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragKind {
    /// A mesh control point; moves reshape the court live
    ControlPoint(ControlPointId),
    /// A player token; moves only track the pointer until the drop
    Token(PlayerId),
}

/// One in-progress pointer drag
#[derive(Debug, Clone)]
pub struct DragSession {
    pub kind: DragKind,
    pub start: CanvasPos,
    pub current: CanvasPos,
    /// Full pre-session rotation, restored on cancel
    pub undo: Rotation,
}

/// Owns the team being edited, the active rotation selection, and the
/// single drag slot.
///
/// `team.rotations` is kept non-empty: construction repairs a team that
/// arrives without one.
#[derive(Debug, Clone)]
pub struct BoardContext {
    pub team: Team,
    active_rotation: usize,
    drag: Option<DragSession>,
}

impl BoardContext {
    pub fn new(mut team: Team) -> Self {
        if team.rotations.is_empty() {
            team.add_rotation("Rotation 1");
        }
        team.normalize_all();
        BoardContext { team, active_rotation: 0, drag: None }
    }

    fn active_index(&self) -> usize {
        self.active_rotation.min(self.team.rotations.len() - 1)
    }

    pub fn active_rotation(&self) -> &Rotation {
        &self.team.rotations[self.active_index()]
    }

    pub fn active_rotation_mut(&mut self) -> &mut Rotation {
        let at = self.active_index();
        &mut self.team.rotations[at]
    }

    /// The live drag session, if any
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Switch the active rotation. Refused while a drag is live or when
    /// the index is out of range.
    pub fn select_rotation(&mut self, index: usize) -> bool {
        if self.drag.is_some() || index >= self.team.rotations.len() {
            return false;
        }
        self.active_rotation = index;
        true
    }

    /// Open a drag session. Returns `false` without side effects when a
    /// session is already live or a token drag names an unrostered id.
    pub fn begin_drag(&mut self, kind: DragKind, at: CanvasPos) -> bool {
        if self.drag.is_some() {
            return false;
        }
        if let DragKind::Token(id) = &kind {
            if self.team.player(id).is_none() {
                return false;
            }
        }
        let undo = self.active_rotation().clone();
        self.drag = Some(DragSession { kind, start: at, current: at, undo });
        true
    }

    /// Pointer move. Control-point drags reshape the mesh immediately, so
    /// every intermediate state is already clamped; token drags only track
    /// the pointer.
    pub fn drag_to(&mut self, pos: CanvasPos) {
        let point = match &mut self.drag {
            Some(session) => {
                session.current = pos;
                match session.kind {
                    DragKind::ControlPoint(id) => Some(id),
                    DragKind::Token(_) => None,
                }
            }
            None => return,
        };
        if let Some(id) = point {
            self.active_rotation_mut().mesh.set_point(id, pos);
        }
    }

    /// Commit the drag at `at`. Token drops inside a zone take that slot
    /// (swap semantics); drops outside every zone land on the bench of the
    /// nearer sideline, at its top. Returns where a token landed; `None`
    /// for control-point drags.
    pub fn end_drag(&mut self, at: CanvasPos) -> Option<Placement> {
        let session = self.drag.take()?;
        let landed = match session.kind {
            DragKind::ControlPoint(id) => {
                self.active_rotation_mut().mesh.set_point(id, at);
                None
            }
            DragKind::Token(player) => {
                let target = match zone_at(&self.active_rotation().mesh, at) {
                    Some(zone) => Placement::Slot(zone),
                    None => {
                        let side = if at.0 < canvas::WIDTH / 2.0 {
                            BenchSide::Left
                        } else {
                            BenchSide::Right
                        };
                        Placement::Bench { side, index: 0 }
                    }
                };
                let index = self.active_index();
                let rotation = &mut self.team.rotations[index];
                rotation.place(player, target);
                normalize_rotation(&self.team.roster, rotation);
                Some(target)
            }
        };
        self.team.touch();
        self.assert_invariants();
        landed
    }

    /// Abort the drag and restore the pre-session rotation exactly
    pub fn cancel_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            let at = self.active_index();
            self.team.rotations[at] = session.undo;
        }
    }

    pub fn rotate_clockwise(&mut self) -> bool {
        if self.drag.is_some() {
            return false;
        }
        self.active_rotation_mut().rotate_clockwise();
        self.team.touch();
        self.assert_invariants();
        true
    }

    pub fn rotate_counter_clockwise(&mut self) -> bool {
        if self.drag.is_some() {
            return false;
        }
        self.active_rotation_mut().rotate_counter_clockwise();
        self.team.touch();
        self.assert_invariants();
        true
    }

    pub fn add_player(&mut self, name: impl Into<String>, number: u8) -> Option<PlayerId> {
        if self.drag.is_some() {
            return None;
        }
        let id = self.team.add_player(name, number);
        self.assert_invariants();
        Some(id)
    }

    pub fn remove_player(&mut self, id: &str) -> Option<Player> {
        if self.drag.is_some() {
            return None;
        }
        let removed = self.team.remove_player(id);
        self.assert_invariants();
        removed
    }

    pub fn add_rotation(&mut self, name: impl Into<String>) -> Option<String> {
        if self.drag.is_some() {
            return None;
        }
        Some(self.team.add_rotation(name))
    }

    pub fn clone_rotation(&mut self, id: &str, name: impl Into<String>) -> Option<String> {
        if self.drag.is_some() {
            return None;
        }
        self.team.clone_rotation(id, name)
    }

    /// Delete a rotation; the selection is re-clamped on next access.
    /// Refused while a drag is live and for the last remaining rotation.
    pub fn delete_rotation(&mut self, id: &str) -> Option<Rotation> {
        if self.drag.is_some() {
            return None;
        }
        self.team.delete_rotation(id)
    }

    fn assert_invariants(&self) {
        #[cfg(feature = "strict_invariants")]
        {
            for rotation in &self.team.rotations {
                debug_assert!(
                    crate::lineup::normalize::is_normalized(&self.team.roster, rotation),
                    "rotation '{}' lost exactly-once membership",
                    rotation.name
                );
            }
        }
    }
}
