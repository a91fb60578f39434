use serde::Deserialize;

use super::{Button, Instruction, PageError, PageGraph, START_PAGE};
use crate::ambiguity::AmbiguityMap;
use crate::settings::LayoutMode;

pub const DEFAULT_PAGES_TOML: &str = include_str!("default_pages.toml");

#[derive(Deserialize)]
struct PagesConfig {
    #[serde(default = "default_start")]
    start: String,
    pages: Vec<PageConfig>,
}

#[derive(Deserialize)]
struct PageConfig {
    name: String,
    buttons: Vec<ButtonConfig>,
}

#[derive(Deserialize)]
struct ButtonConfig {
    label: Option<String>,
    grid: Option<Vec<String>>,
    #[serde(rename = "do")]
    instructions: Vec<String>,
    #[serde(default)]
    sub_pages: Vec<String>,
}

fn default_start() -> String {
    START_PAGE.to_string()
}

/// Parse TOML text into a validated page graph.
pub fn parse_pages_toml(
    toml_str: &str,
    map: &AmbiguityMap,
    layout: LayoutMode,
) -> Result<PageGraph, PageError> {
    let config: PagesConfig =
        toml::from_str(toml_str).map_err(|e| PageError::Parse(e.to_string()))?;

    let mut pages = Vec::with_capacity(config.pages.len());
    for page in config.pages {
        let mut buttons = Vec::with_capacity(page.buttons.len());
        for (index, raw) in page.buttons.into_iter().enumerate() {
            let button = build_button(raw, map, layout).map_err(|reason| PageError::Button {
                page: page.name.clone(),
                button: index,
                reason,
            })?;
            buttons.push(button);
        }
        pages.push((page.name, buttons));
    }

    PageGraph::new(pages, config.start)
}

fn build_button(
    raw: ButtonConfig,
    map: &AmbiguityMap,
    layout: LayoutMode,
) -> Result<Button, String> {
    if raw.instructions.is_empty() {
        return Err("no instructions".to_string());
    }
    let instructions = raw
        .instructions
        .iter()
        .map(|s| s.parse::<Instruction>())
        .collect::<Result<Vec<_>, _>>()?;

    let grid = match raw.grid {
        Some(cells) => Some(
            <[String; 9]>::try_from(cells)
                .map_err(|cells| format!("grid has {} cells, expected 9", cells.len()))?,
        ),
        None => None,
    };

    let mut button = Button {
        label: String::new(),
        grid,
        instructions,
        sub_pages: raw.sub_pages,
    };
    button.label = match (raw.label, button.ambig_class()) {
        (Some(label), _) => label,
        (None, Some(class)) => map.group_label(class, layout),
        (None, None) => return Err("missing label".to_string()),
    };
    Ok(button)
}
