//! Accessible projection of the widget state.
//!
//! Hosts render from a [`ComboView`] instead of poking at the state machine:
//! it carries the `expanded` flag, the active-descendant id of the highlighted
//! option and a `selected` flag per rendered item.

use super::state::ComboBox;
use crate::models::ComboOption;

/// Text shown in place of the list when nothing matches
pub const NO_OPTIONS_TEXT: &str = "No options available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView<'a> {
    pub id: String,
    pub option: &'a ComboOption,
    pub selected: bool,
}

impl ItemView<'_> {
    /// Unrenderable records show up as empty rows
    pub fn is_placeholder(&self) -> bool {
        self.option.is_placeholder()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView<'a> {
    /// Dropdown closed; nothing is rendered
    Hidden,
    /// Dropdown open without matches
    NoOptions,
    Items(Vec<ItemView<'a>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboView<'a> {
    pub query: &'a str,
    pub expanded: bool,
    pub active_descendant: Option<String>,
    pub list: ListView<'a>,
}

impl<'a> ComboView<'a> {
    pub fn items(&self) -> &[ItemView<'a>] {
        match &self.list {
            ListView::Items(items) => items,
            _ => &[],
        }
    }
}

impl ComboBox {
    pub fn view(&self) -> ComboView<'_> {
        let expanded = self.is_open();
        let highlighted = self.highlighted_index();

        let list = if !expanded {
            ListView::Hidden
        } else if self.filtered_options().is_empty() {
            ListView::NoOptions
        } else {
            ListView::Items(
                self.filtered_options()
                    .iter()
                    .enumerate()
                    .map(|(idx, option)| ItemView {
                        id: option.element_id(),
                        option,
                        selected: highlighted == Some(idx),
                    })
                    .collect(),
            )
        };

        let active_descendant =
            if expanded { self.highlighted_option().map(ComboOption::element_id) } else { None };

        ComboView { query: self.query(), expanded, active_descendant, list }
    }
}
