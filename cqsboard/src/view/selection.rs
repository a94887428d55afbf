use crate::models::ScoredEntity;

/// Which video's trend modal is open, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    #[default]
    Closed,
    Open(ScoredEntity),
}

impl Selection {
    /// Open the modal on `entity`, replacing any current selection.
    pub fn select_entity(&mut self, entity: ScoredEntity) {
        *self = Selection::Open(entity);
    }

    /// Close the modal. Does nothing when already closed.
    pub fn dismiss(&mut self) {
        *self = Selection::Closed;
    }

    pub fn selected(&self) -> Option<&ScoredEntity> {
        match self {
            Selection::Open(entity) => Some(entity),
            Selection::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }
}
