use foundation::ids::ItemId;
use tracing::debug;

use crate::animation::AnimationMode;

/// What closing a detail modal does to the underlying selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CloseBehavior {
    /// Closing also deselects the item.
    ClearSelection,
    /// The item stays highlighted after the modal closes.
    KeepSelection,
}

/// Per-section UI state: the selected item, the hovered item and whether a
/// detail modal is open.
///
/// Ids are not checked against any catalog. An unknown id is stored as-is
/// and simply matches no detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<ItemId>,
    hovered: Option<ItemId>,
    modal_open: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State that starts with `id` selected (timelines always show one entry).
    pub fn with_selected(id: impl Into<ItemId>) -> Self {
        Self {
            selected: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn selected(&self) -> Option<&ItemId> {
        self.selected.as_ref()
    }

    pub fn hovered(&self) -> Option<&ItemId> {
        self.hovered.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Selects `id`. Re-selecting the current item is a no-op.
    ///
    /// Returns `true` if the state changed.
    pub fn select(&mut self, id: ItemId) -> bool {
        if self.selected.as_ref() == Some(&id) {
            return false;
        }
        debug!(%id, "select");
        self.selected = Some(id);
        true
    }

    /// Sets or clears the hovered item; independent of the selection.
    ///
    /// Returns `true` if the state changed.
    pub fn hover(&mut self, id: Option<ItemId>) -> bool {
        if self.hovered == id {
            return false;
        }
        self.hovered = id;
        true
    }

    pub fn open_modal(&mut self) -> bool {
        let changed = !self.modal_open;
        self.modal_open = true;
        changed
    }

    /// Closes the modal. Hover is never touched.
    pub fn close_modal(&mut self, behavior: CloseBehavior) -> bool {
        let mut changed = self.modal_open;
        self.modal_open = false;
        if behavior == CloseBehavior::ClearSelection && self.selected.take().is_some() {
            changed = true;
        }
        changed
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn is_hovered(&self, id: &ItemId) -> bool {
        self.hovered.as_ref() == Some(id)
    }

    pub fn mode_for(&self, id: &ItemId) -> AnimationMode {
        AnimationMode::from_flags(self.is_selected(id), self.is_hovered(id))
    }
}

#[cfg(test)]
mod tests {
    use super::{CloseBehavior, SelectionState};
    use crate::animation::AnimationMode;
    use foundation::ids::ItemId;

    fn id(s: &str) -> ItemId {
        ItemId::from(s)
    }

    #[test]
    fn starts_empty() {
        let s = SelectionState::new();
        assert_eq!(s.selected(), None);
        assert_eq!(s.hovered(), None);
        assert!(!s.is_modal_open());
    }

    #[test]
    fn select_is_idempotent() {
        let mut once = SelectionState::new();
        assert!(once.select(id("hci")));

        let mut twice = SelectionState::new();
        twice.select(id("hci"));
        assert!(!twice.select(id("hci")));

        assert_eq!(once, twice);
    }

    #[test]
    fn hover_is_independent_of_selection() {
        let mut s = SelectionState::new();
        s.select(id("dams"));
        assert!(s.hover(Some(id("puregleam"))));
        assert_eq!(s.selected(), Some(&id("dams")));
        assert!(s.hover(None));
        assert_eq!(s.selected(), Some(&id("dams")));
        assert!(!s.hover(None));
    }

    #[test]
    fn close_behaviors() {
        let mut cleared = SelectionState::new();
        cleared.select(id("hci"));
        cleared.open_modal();
        assert!(cleared.close_modal(CloseBehavior::ClearSelection));
        assert_eq!(cleared.selected(), None);
        assert!(!cleared.is_modal_open());

        let mut kept = SelectionState::new();
        kept.select(id("backendApis"));
        kept.open_modal();
        assert!(kept.close_modal(CloseBehavior::KeepSelection));
        assert_eq!(kept.selected(), Some(&id("backendApis")));
        assert!(!kept.is_modal_open());
    }

    #[test]
    fn hover_select_close_keeps_hover() {
        let mut s = SelectionState::new();
        s.hover(Some(id("certA")));
        s.select(id("certA"));
        s.open_modal();
        s.close_modal(CloseBehavior::ClearSelection);

        assert!(!s.is_modal_open());
        assert_eq!(s.selected(), None);
        assert_eq!(s.hovered(), Some(&id("certA")));
    }

    #[test]
    fn unknown_ids_are_accepted() {
        let mut s = SelectionState::new();
        assert!(s.select(id("no-such-item")));
        assert_eq!(s.mode_for(&id("no-such-item")), AnimationMode::Selected);
        assert_eq!(s.mode_for(&id("hci")), AnimationMode::Idle);
    }

    #[test]
    fn with_selected_preselects() {
        let s = SelectionState::with_selected("muscat");
        assert!(s.is_selected(&id("muscat")));
        assert!(!s.is_modal_open());
    }
}
