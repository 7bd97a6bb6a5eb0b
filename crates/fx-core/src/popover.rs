/// Visibility of the contact card overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopoverState {
    #[default]
    Closed,
    Open,
}

/// Where a click landed, from the popover's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The button that opens the card.
    Activator,
    /// The overlay itself, outside the card.
    Backdrop,
    /// Anything inside the card.
    Content,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Popover {
    state: PopoverState,
}

impl Popover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PopoverState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PopoverState::Open
    }

    /// Applies a click and returns `true` if the state changed.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        let next = match (self.state, target) {
            (_, ClickTarget::Activator) => PopoverState::Open,
            (PopoverState::Open, ClickTarget::Backdrop) => PopoverState::Closed,
            (state, _) => state,
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }
}
