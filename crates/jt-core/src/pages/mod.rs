//! Page graph: named pages of eight buttons, each carrying an ordered list of
//! instructions executed on press.
//!
//! The graph is configuration data. The default is embedded from
//! `default_pages.toml`; hosts may supply their own TOML via
//! [`PageGraph::from_toml`].

mod config;
mod instruction;

pub use config::DEFAULT_PAGES_TOML;
pub use instruction::{Instruction, ToggleMode};

use std::collections::HashMap;
use std::sync::Arc;

use crate::ambiguity::{AmbiguityClass, AmbiguityMap};
use crate::settings::LayoutMode;

pub const BUTTONS_PER_PAGE: usize = 8;
pub const START_PAGE: &str = "Main";

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("page {page:?} has {count} buttons, expected {BUTTONS_PER_PAGE}")]
    ButtonCount { page: String, count: usize },
    #[error("page {0:?} is defined twice")]
    DuplicatePage(String),
    #[error("page {page:?} button {button}: {reason}")]
    Button {
        page: String,
        button: usize,
        reason: String,
    },
    #[error("page {page:?} refers to unknown page {target:?}")]
    UnknownPage { page: String, target: String },
    #[error("start page {0:?} is not defined")]
    MissingStartPage(String),
}

/// One button definition. Immutable once the graph is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    /// Optional 3x3 label grid, row-major.
    pub grid: Option<[String; 9]>,
    pub instructions: Vec<Instruction>,
    /// Pages offered as candidates when this button starts an ambiguous run.
    pub sub_pages: Vec<String>,
}

impl Button {
    pub fn new(label: impl Into<String>, instructions: Vec<Instruction>) -> Self {
        Self {
            label: label.into(),
            grid: None,
            instructions,
            sub_pages: Vec::new(),
        }
    }

    pub fn with_sub_pages(mut self, pages: &[&str]) -> Self {
        self.sub_pages = pages.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Class of the first `Ambig` instruction, if any.
    pub fn ambig_class(&self) -> Option<AmbiguityClass> {
        self.instructions.iter().find_map(|i| match i {
            Instruction::Ambig(class) => Some(*class),
            _ => None,
        })
    }

    pub fn is_ambig(&self) -> bool {
        self.ambig_class().is_some()
    }

    pub fn is_select(&self) -> bool {
        self.instructions.contains(&Instruction::Select)
    }

    /// Label as shown on the button: the grid as three rows when present.
    pub fn label_text(&self) -> String {
        match &self.grid {
            Some(grid) => grid
                .chunks(3)
                .map(|row| row.join(" "))
                .collect::<Vec<_>>()
                .join("\n"),
            None => self.label.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Page {
    pub name: String,
    buttons: Vec<Arc<Button>>,
}

impl Page {
    pub fn button(&self, index: usize) -> Option<&Arc<Button>> {
        self.buttons.get(index)
    }

    pub fn buttons(&self) -> &[Arc<Button>] {
        &self.buttons
    }
}

#[derive(Debug, Clone)]
pub struct PageGraph {
    pages: HashMap<String, Page>,
    start: String,
}

impl PageGraph {
    /// Build and validate a graph from already-parsed pages.
    pub fn new(
        pages: Vec<(String, Vec<Button>)>,
        start: impl Into<String>,
    ) -> Result<Self, PageError> {
        let start = start.into();
        let mut map = HashMap::with_capacity(pages.len());
        for (name, buttons) in pages {
            if buttons.len() != BUTTONS_PER_PAGE {
                return Err(PageError::ButtonCount {
                    page: name,
                    count: buttons.len(),
                });
            }
            let page = Page {
                name: name.clone(),
                buttons: buttons.into_iter().map(Arc::new).collect(),
            };
            if map.insert(name.clone(), page).is_some() {
                return Err(PageError::DuplicatePage(name));
            }
        }

        let graph = Self { pages: map, start };
        graph.validate_links()?;
        Ok(graph)
    }

    fn validate_links(&self) -> Result<(), PageError> {
        if !self.pages.contains_key(&self.start) {
            return Err(PageError::MissingStartPage(self.start.clone()));
        }
        for page in self.pages.values() {
            for button in &page.buttons {
                let gotos = button.instructions.iter().filter_map(|i| match i {
                    Instruction::GoToPage(target) => Some(target),
                    _ => None,
                });
                for target in gotos.chain(&button.sub_pages) {
                    if !self.pages.contains_key(target) {
                        return Err(PageError::UnknownPage {
                            page: page.name.clone(),
                            target: target.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Parse a TOML page graph. Ambiguous buttons without an explicit label
    /// are labelled from `map` in the given layout.
    pub fn from_toml(
        toml_str: &str,
        map: &AmbiguityMap,
        layout: LayoutMode,
    ) -> Result<Self, PageError> {
        config::parse_pages_toml(toml_str, map, layout)
    }

    /// The embedded default graph with the standard letter groups.
    pub fn standard(layout: LayoutMode) -> Self {
        Self::from_toml(DEFAULT_PAGES_TOML, AmbiguityMap::standard(), layout)
            .expect("default pages TOML must be valid")
    }

    pub fn page(&self, name: &str) -> Option<&Page> {
        self.pages.get(name)
    }

    pub fn start_page(&self) -> &str {
        &self.start
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page names, sorted.
    pub fn page_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
