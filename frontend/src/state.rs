use std::rc::Rc;

use yew::functional::Reducible;

use crate::content::SectionKey;

/// Which tile, if any, is showing its details. A single optional id keeps
/// at most one tile expanded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileExpansion {
    expanded: Option<String>,
}

impl TileExpansion {
    pub fn toggle(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_owned());
        }
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded() == Some(id)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

pub enum ShellAction {
    ShowSection(SectionKey),
    ToggleItem { section: SectionKey, id: String },
    OpenBooking,
    CloseBooking,
}

/// Per-view state of the marketing shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellState {
    section: SectionKey,
    tiles: TileExpansion,
    modal: ModalState,
}

impl ShellState {
    pub fn new(section: SectionKey) -> Self {
        Self {
            section,
            tiles: TileExpansion::default(),
            modal: ModalState::default(),
        }
    }

    pub fn section(&self) -> SectionKey {
        self.section
    }

    /// The expanded tile, as seen from `section`. An expansion recorded for
    /// another section never leaks into this one.
    pub fn expanded_in(&self, section: SectionKey) -> Option<&str> {
        if self.section == section {
            self.tiles.expanded()
        } else {
            None
        }
    }

    pub fn is_expanded(&self, section: SectionKey, id: &str) -> bool {
        self.section == section && self.tiles.is_expanded(id)
    }

    pub fn booking_open(&self) -> bool {
        self.modal.is_open()
    }

    fn show_section(&mut self, section: SectionKey) {
        if self.section != section {
            self.section = section;
            self.tiles.collapse();
        }
    }
}

impl Reducible for ShellState {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ShellAction::ShowSection(section) => next.show_section(section),
            ShellAction::ToggleItem { section, id } => {
                next.show_section(section);
                next.tiles.toggle(&id);
            }
            ShellAction::OpenBooking => next.modal.open(),
            ShellAction::CloseBooking => next.modal.close(),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(state: ShellState, actions: Vec<ShellAction>) -> Rc<ShellState> {
        actions
            .into_iter()
            .fold(Rc::new(state), |state, action| state.reduce(action))
    }

    fn toggle(section: SectionKey, id: &str) -> ShellAction {
        ShellAction::ToggleItem {
            section,
            id: id.to_owned(),
        }
    }

    #[test]
    fn toggling_same_id_twice_collapses() {
        for id in ["services-consulting", "about-story", "", "not-a-tile"] {
            let mut tiles = TileExpansion::default();
            tiles.toggle(id);
            assert!(tiles.is_expanded(id));
            tiles.toggle(id);
            assert_eq!(tiles.expanded(), None);
        }
    }

    #[test]
    fn second_toggle_replaces_first() {
        let mut tiles = TileExpansion::default();
        tiles.toggle("services-consulting");
        tiles.toggle("services-ai-integrations");

        assert!(tiles.is_expanded("services-ai-integrations"));
        assert!(!tiles.is_expanded("services-consulting"));
    }

    #[test]
    fn switching_section_collapses_everything() {
        let state = reduce_all(
            ShellState::new(SectionKey::Services),
            vec![
                toggle(SectionKey::Services, "services-consulting"),
                ShellAction::ShowSection(SectionKey::About),
            ],
        );

        assert_eq!(state.section(), SectionKey::About);
        assert_eq!(state.expanded_in(SectionKey::About), None);
        assert_eq!(state.expanded_in(SectionKey::Services), None);
    }

    #[test]
    fn expansion_is_scoped_to_its_section() {
        let state = reduce_all(
            ShellState::new(SectionKey::Services),
            vec![toggle(SectionKey::Services, "services-consulting")],
        );

        assert_eq!(state.expanded_in(SectionKey::Services), Some("services-consulting"));
        assert_eq!(state.expanded_in(SectionKey::CaseStudies), None);
        assert!(state.is_expanded(SectionKey::Services, "services-consulting"));
        assert!(!state.is_expanded(SectionKey::CaseStudies, "services-consulting"));
    }

    #[test]
    fn toggle_from_another_section_starts_fresh() {
        let state = reduce_all(
            ShellState::new(SectionKey::Services),
            vec![
                toggle(SectionKey::Services, "services-consulting"),
                toggle(SectionKey::About, "about-story"),
            ],
        );

        assert_eq!(state.section(), SectionKey::About);
        assert_eq!(state.expanded_in(SectionKey::About), Some("about-story"));
    }

    #[test]
    fn showing_current_section_keeps_expansion() {
        let state = reduce_all(
            ShellState::new(SectionKey::Services),
            vec![
                toggle(SectionKey::Services, "services-consulting"),
                ShellAction::ShowSection(SectionKey::Services),
            ],
        );

        assert_eq!(state.expanded_in(SectionKey::Services), Some("services-consulting"));
    }

    #[test]
    fn modal_open_close_is_idempotent() {
        let mut modal = ModalState::default();
        modal.close();
        assert!(!modal.is_open());

        modal.open();
        modal.open();
        assert!(modal.is_open());

        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn closing_closed_booking_returns_same_state() {
        let state = Rc::new(ShellState::new(SectionKey::Services));
        let next = state.clone().reduce(ShellAction::CloseBooking);
        assert!(Rc::ptr_eq(&state, &next));

        let opened = next.reduce(ShellAction::OpenBooking);
        assert!(opened.booking_open());
        let closed = opened.reduce(ShellAction::CloseBooking);
        assert!(!closed.booking_open());
    }
}
