//! Which movie, if any, is open for detail viewing.

/// Selection slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Closed,
    Open(String),
}

impl Selection {
    /// Selected identifier, if open.
    pub fn id(&self) -> Option<&str> {
        match self {
            Selection::Closed => None,
            Selection::Open(id) => Some(id.as_str()),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }
}

/// Single-slot selection state machine.
#[derive(Debug, Default)]
pub struct SelectionController {
    current: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`; selecting the open id again closes it.
    pub fn select(&mut self, id: &str) -> &Selection {
        self.current = match &self.current {
            Selection::Open(open) if open == id => Selection::Closed,
            _ => Selection::Open(id.to_string()),
        };
        &self.current
    }

    /// Close the selection. Returns whether anything was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.current.is_open();
        self.current = Selection::Closed;
        was_open
    }

    pub fn current(&self) -> &Selection {
        &self.current
    }
}
