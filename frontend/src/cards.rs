use std::rc::Rc;

use yew::functional::Reducible;

/// Which threat card, if any, currently shows its details.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardFocus {
    expanded: Option<usize>,
}

impl CardFocus {
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Clicking the open card closes it; any other card replaces it.
    pub fn toggle(self, index: usize) -> Self {
        let expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        Self { expanded }
    }
}

impl Reducible for CardFocus {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        let next = self.toggle(index);
        log::debug!("Card focus {:?} -> {:?}", self.expanded, next.expanded);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        assert_eq!(CardFocus::default().expanded(), None);
    }

    #[test]
    fn click_opens_card() {
        let focus = CardFocus::default().toggle(2);
        assert_eq!(focus.expanded(), Some(2));
        assert!(focus.is_expanded(2));
    }

    #[test]
    fn second_click_closes_card() {
        let focus = CardFocus::default().toggle(2).toggle(2);
        assert_eq!(focus.expanded(), None);
    }

    #[test]
    fn other_card_replaces_open_one() {
        let focus = CardFocus::default().toggle(2).toggle(0);
        assert_eq!(focus.expanded(), Some(0));
        assert!(!focus.is_expanded(2));
    }

    #[test]
    fn reducer_applies_clicks_in_order() {
        let state = Rc::new(CardFocus::default());
        let state = state.reduce(3);
        let state = state.reduce(3);
        let state = state.reduce(1);
        assert_eq!(state.expanded(), Some(1));
    }
}
