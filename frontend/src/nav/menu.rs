/// Whether the mobile navigation overlay is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inputs that move the menu between states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    LinkActivated,
}

impl MenuState {
    pub fn next(self, event: MenuEvent) -> Self {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (_, MenuEvent::LinkActivated) => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            MenuState::Closed => "Open menu",
            MenuState::Open => "Close menu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[MenuEvent]) -> MenuState {
        events
            .iter()
            .fold(MenuState::default(), |state, event| state.next(*event))
    }

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn toggle_count_parity_decides_state() {
        for count in 0..9 {
            let events = vec![MenuEvent::Toggle; count];
            let expected = if count % 2 == 1 {
                MenuState::Open
            } else {
                MenuState::Closed
            };
            assert_eq!(run(&events), expected, "after {} toggles", count);
        }
    }

    #[test]
    fn double_toggle_returns_to_closed() {
        assert_eq!(run(&[MenuEvent::Toggle, MenuEvent::Toggle]), MenuState::Closed);
    }

    #[test]
    fn link_activation_always_closes() {
        assert_eq!(MenuState::Open.next(MenuEvent::LinkActivated), MenuState::Closed);
        assert_eq!(MenuState::Closed.next(MenuEvent::LinkActivated), MenuState::Closed);
        assert_eq!(
            run(&[MenuEvent::Toggle, MenuEvent::LinkActivated, MenuEvent::Toggle]),
            MenuState::Open
        );
    }

    #[test]
    fn toggle_label_follows_state() {
        assert_eq!(MenuState::Closed.toggle_label(), "Open menu");
        assert!(MenuState::Open.is_open());
        assert!(!MenuState::Closed.is_open());
    }
}
