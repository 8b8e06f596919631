use linegrid_engine::{
    CellCoord, Edges, bottom_right_of, connected_component, rectangle, selection_edges,
};
use std::collections::BTreeSet;

use super::Modifiers;

/// Coarse shape of the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    Single,
    Multi,
}

/// Selected cells plus the anchor and focus of the current gesture.
///
/// One instance per editor view. Coordinates are stored as given; the caller
/// clamps them to the row store before handing them in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionModel {
    selected: BTreeSet<CellCoord>,
    /// Origin of the current gesture.
    anchor: Option<CellCoord>,
    /// Most recently active cell.
    focus: Option<CellCoord>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &BTreeSet<CellCoord> {
        &self.selected
    }

    pub fn anchor(&self) -> Option<CellCoord> {
        self.anchor
    }

    pub fn focus(&self) -> Option<CellCoord> {
        self.focus
    }

    pub fn contains(&self, coord: CellCoord) -> bool {
        self.selected.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn state(&self) -> SelectionState {
        match self.selected.len() {
            0 => SelectionState::Empty,
            1 => SelectionState::Single,
            _ => SelectionState::Multi,
        }
    }

    /// Distinct rows touched by the selection, ascending.
    pub fn rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.selected.iter().map(|c| c.row).collect();
        rows.dedup();
        rows
    }

    pub fn select_single(&mut self, coord: CellCoord) {
        self.selected = BTreeSet::from([coord]);
        self.anchor = Some(coord);
        self.focus = Some(coord);
    }

    /// Flip membership of `coord`, then re-derive anchor and focus.
    pub fn toggle(&mut self, coord: CellCoord) {
        if !self.selected.remove(&coord) {
            self.selected.insert(coord);
        }
        self.settle_after_toggle();
    }

    fn settle_after_toggle(&mut self) {
        if self.selected.len() <= 1 {
            let only = self.selected.first().copied();
            self.anchor = only;
            self.focus = only;
            return;
        }
        let anchor = match self.anchor.filter(|a| self.selected.contains(a)) {
            Some(a) => a,
            None => match self.selected.first() {
                Some(first) => *first,
                None => return,
            },
        };
        self.anchor = Some(anchor);
        let component = connected_component(anchor, &self.selected);
        self.focus = bottom_right_of(&component).or(Some(anchor));
    }

    /// Select the rectangle `base`..`target`, replacing or (when `additive`)
    /// extending the selection. Focus moves to `target`. An additive extend
    /// keeps an existing anchor; with none it anchors at `base`, so a
    /// non-empty selection always has an anchor.
    pub fn extend_rectangle(&mut self, base: CellCoord, target: CellCoord, additive: bool) {
        let rect = rectangle(base, target);
        if additive {
            self.selected.extend(rect);
        } else {
            self.selected = rect;
            self.anchor = Some(base);
        }
        if self.anchor.is_none() {
            self.anchor = Some(base);
        }
        self.focus = Some(target);
    }

    /// The corner a shift gesture grows from: anchor, then focus, then the
    /// first selected cell.
    pub fn extension_base(&self) -> Option<CellCoord> {
        self.anchor
            .or(self.focus)
            .or_else(|| self.selected.first().copied())
    }

    /// Shift gesture towards `target`. Falls back to a single-cell selection
    /// when there is nothing to grow from.
    pub fn extend_to(&mut self, target: CellCoord, additive: bool) {
        match self.extension_base() {
            Some(base) => self.extend_rectangle(base, target, additive),
            None => self.select_single(target),
        }
    }

    /// Shift extends, ctrl alone toggles, anything else selects one cell.
    pub fn click(&mut self, coord: CellCoord, mods: Modifiers) {
        if mods.shift {
            self.extend_to(coord, mods.ctrl);
        } else if mods.ctrl {
            self.toggle(coord);
        } else {
            self.select_single(coord);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.anchor = None;
        self.focus = None;
    }

    /// Empty the selection but leave keyboard focus on `focus`.
    pub fn reset_to_focus(&mut self, focus: CellCoord) {
        self.selected.clear();
        self.anchor = None;
        self.focus = Some(focus);
    }

    /// Drop everything at or beyond row `len`.
    pub fn retain_rows(&mut self, len: usize) {
        self.selected.retain(|c| c.row < len);
        let anchor = self.anchor.filter(|a| a.row < len);
        let focus = self.focus.filter(|f| f.row < len);
        if self.selected.is_empty() {
            self.anchor = None;
            self.focus = None;
            return;
        }
        self.anchor = anchor.or_else(|| self.selected.first().copied());
        self.focus = focus.or_else(|| {
            let component = self.anchor.map(|a| connected_component(a, &self.selected))?;
            bottom_right_of(&component)
        });
    }

    /// Outline edges of `coord` for rendering.
    pub fn edges(&self, coord: CellCoord) -> Edges {
        selection_edges(coord, &self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> CellCoord {
        CellCoord::new(row, col)
    }

    #[test]
    fn test_select_single_collapses() {
        let mut sel = SelectionModel::new();
        sel.extend_rectangle(c(0, 0), c(2, 2), false);
        sel.select_single(c(1, 1));
        assert_eq!(sel.selected(), &BTreeSet::from([c(1, 1)]));
        assert_eq!(sel.anchor(), Some(c(1, 1)));
        assert_eq!(sel.focus(), Some(c(1, 1)));
        assert_eq!(sel.state(), SelectionState::Single);
    }

    #[test]
    fn test_toggle_last_member_clears() {
        let mut sel = SelectionModel::new();
        sel.select_single(c(0, 3));
        sel.toggle(c(0, 3));
        assert_eq!(sel.state(), SelectionState::Empty);
        assert_eq!(sel.anchor(), None);
        assert_eq!(sel.focus(), None);
    }

    #[test]
    fn test_toggle_add_to_empty_becomes_single() {
        let mut sel = SelectionModel::new();
        sel.toggle(c(2, 1));
        assert_eq!(sel.anchor(), Some(c(2, 1)));
        assert_eq!(sel.focus(), Some(c(2, 1)));
    }

    #[test]
    fn test_toggle_anchor_recomputes() {
        let mut sel = SelectionModel::new();
        sel.extend_rectangle(c(0, 0), c(1, 1), false);
        assert_eq!(sel.anchor(), Some(c(0, 0)));
        sel.toggle(c(0, 0));
        let anchor = sel.anchor().unwrap();
        assert!(sel.contains(anchor));
        assert_eq!(anchor, c(0, 1));
        assert_eq!(sel.focus(), Some(c(1, 1)));
    }

    #[test]
    fn test_toggle_fragmenting_rectangle_focus_stays_in_anchor_block() {
        let mut sel = SelectionModel::new();
        sel.extend_rectangle(c(0, 0), c(2, 2), false);
        // Cut the middle column out; the anchor block is the left column.
        for row in 0..3 {
            sel.toggle(c(row, 1));
        }
        assert_eq!(sel.anchor(), Some(c(0, 0)));
        assert_eq!(sel.focus(), Some(c(2, 0)));
    }

    #[test]
    fn test_extend_rectangle_replace_and_additive() {
        let mut sel = SelectionModel::new();
        sel.select_single(c(1, 3));
        sel.extend_rectangle(c(1, 3), c(2, 3), false);
        assert_eq!(sel.len(), 2);
        assert_eq!(sel.anchor(), Some(c(1, 3)));
        assert_eq!(sel.focus(), Some(c(2, 3)));

        sel.extend_rectangle(c(1, 3), c(1, 4), true);
        assert_eq!(sel.len(), 3);
        assert_eq!(sel.anchor(), Some(c(1, 3)));
        assert_eq!(sel.focus(), Some(c(1, 4)));
    }

    #[test]
    fn test_additive_extend_after_reset_anchors_at_base() {
        let mut sel = SelectionModel::new();
        sel.extend_rectangle(c(0, 3), c(1, 3), false);
        // What a structural edit leaves behind: focus only.
        sel.reset_to_focus(c(1, 3));
        assert_eq!(sel.anchor(), None);

        sel.extend_to(c(2, 4), true);
        assert_eq!(sel.anchor(), Some(c(1, 3)));
        assert_eq!(sel.focus(), Some(c(2, 4)));
        assert_eq!(sel.len(), 4);
        assert!(sel.contains(sel.anchor().unwrap()));
    }

    #[test]
    fn test_extend_to_without_base_selects_single() {
        let mut sel = SelectionModel::new();
        sel.extend_to(c(4, 2), false);
        assert_eq!(sel.selected(), &BTreeSet::from([c(4, 2)]));
        assert_eq!(sel.anchor(), Some(c(4, 2)));
    }

    #[test]
    fn test_extension_base_order() {
        let mut sel = SelectionModel::new();
        assert_eq!(sel.extension_base(), None);
        sel.reset_to_focus(c(3, 0));
        assert_eq!(sel.extension_base(), Some(c(3, 0)));
        sel.select_single(c(1, 1));
        assert_eq!(sel.extension_base(), Some(c(1, 1)));
    }

    #[test]
    fn test_click_dispatch() {
        let mut sel = SelectionModel::new();
        sel.click(c(0, 0), Modifiers::NONE);
        sel.click(c(0, 2), Modifiers::CTRL);
        assert_eq!(sel.len(), 2);
        sel.click(c(1, 2), Modifiers::SHIFT);
        // Anchor (0,0) to (1,2).
        assert_eq!(sel.len(), 6);
        sel.click(c(5, 5), Modifiers::NONE);
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut sel = SelectionModel::new();
        sel.extend_rectangle(c(0, 0), c(1, 1), false);
        sel.clear();
        let once = sel.clone();
        sel.clear();
        assert_eq!(sel, once);
        assert_eq!(sel, SelectionModel::new());
    }

    #[test]
    fn test_retain_rows_drops_out_of_range() {
        let mut sel = SelectionModel::new();
        sel.extend_rectangle(c(3, 0), c(1, 0), false);
        sel.retain_rows(2);
        assert_eq!(sel.selected(), &BTreeSet::from([c(1, 0)]));
        assert_eq!(sel.anchor(), Some(c(1, 0)));
        assert_eq!(sel.focus(), Some(c(1, 0)));

        sel.retain_rows(1);
        assert_eq!(sel.state(), SelectionState::Empty);
        assert_eq!(sel.focus(), None);
    }

    #[test]
    fn test_rows_are_distinct() {
        let mut sel = SelectionModel::new();
        sel.extend_rectangle(c(1, 0), c(2, 3), false);
        assert_eq!(sel.rows(), vec![1, 2]);
    }
}
