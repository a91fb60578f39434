use std::fmt;
use std::str::FromStr;

use crate::ambiguity::AmbiguityClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleMode {
    Off,
    On,
    Toggle,
}

impl ToggleMode {
    pub fn apply(self, current: bool) -> bool {
        match self {
            ToggleMode::Off => false,
            ToggleMode::On => true,
            ToggleMode::Toggle => !current,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ToggleMode::Off => "off",
            ToggleMode::On => "on",
            ToggleMode::Toggle => "toggle",
        }
    }
}

impl FromStr for ToggleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(ToggleMode::Off),
            "on" => Ok(ToggleMode::On),
            "toggle" => Ok(ToggleMode::Toggle),
            other => Err(format!("unknown toggle mode {other:?}")),
        }
    }
}

/// One step of a button press.
///
/// Textual form, as used in page TOML:
/// `term`, `ambig:<class>`, `select`, `undo`, `snug`, `immed:<text>`,
/// `goto:<page>`, `shift:<off|on|toggle>`, `speech:<..>`, `caps:<..>`,
/// `clear`, `delete-word`, `enter`, `back`, `scroll-up`, `scroll-down`,
/// `menu`, `home`, `speak-sentence`, `symbol-mode:<n>`, `speak`, `save-last`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Commit the selected candidate and append a space. Does nothing
    /// without a selection.
    Term,
    /// Extend the ambiguous run with this class.
    Ambig(AmbiguityClass),
    /// Advance the selection cursor.
    Select,
    /// Restore the previous state.
    Undo,
    /// Strip trailing whitespace from the output.
    Snug,
    /// Append literal text, case-adjusted.
    Immed(String),
    GoToPage(String),
    Shift(ToggleMode),
    Speech(ToggleMode),
    CapsLock(ToggleMode),
    ClearInput,
    DeleteWord,
    Enter,
    Back,
    ScrollUp,
    ScrollDown,
    Menu,
    Home,
    SpeakSentence,
    SymbolMode(u8),
    Speak,
    SaveLast,
}

fn require<'a>(name: &str, arg: Option<&'a str>) -> Result<&'a str, String> {
    arg.ok_or_else(|| format!("{name:?} needs an argument"))
}

impl FromStr for Instruction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        let instr = match name {
            "term" => Instruction::Term,
            "ambig" => {
                let raw = require(name, arg)?;
                let class = raw
                    .parse::<u8>()
                    .ok()
                    .and_then(AmbiguityClass::new)
                    .ok_or_else(|| format!("invalid ambiguity class {raw:?}"))?;
                Instruction::Ambig(class)
            }
            "select" => Instruction::Select,
            "undo" => Instruction::Undo,
            "snug" => Instruction::Snug,
            "immed" => {
                let text = require(name, arg)?;
                if text.is_empty() {
                    return Err("immed text must not be empty".to_string());
                }
                Instruction::Immed(text.to_string())
            }
            "goto" => {
                let page = require(name, arg)?;
                if page.is_empty() {
                    return Err("goto needs a page name".to_string());
                }
                Instruction::GoToPage(page.to_string())
            }
            "shift" => Instruction::Shift(require(name, arg)?.parse()?),
            "speech" => Instruction::Speech(require(name, arg)?.parse()?),
            "caps" => Instruction::CapsLock(require(name, arg)?.parse()?),
            "clear" => Instruction::ClearInput,
            "delete-word" => Instruction::DeleteWord,
            "enter" => Instruction::Enter,
            "back" => Instruction::Back,
            "scroll-up" => Instruction::ScrollUp,
            "scroll-down" => Instruction::ScrollDown,
            "menu" => Instruction::Menu,
            "home" => Instruction::Home,
            "speak-sentence" => Instruction::SpeakSentence,
            "symbol-mode" => {
                let raw = require(name, arg)?;
                let n = raw
                    .parse::<u8>()
                    .map_err(|_| format!("invalid symbol mode {raw:?}"))?;
                Instruction::SymbolMode(n)
            }
            "speak" => Instruction::Speak,
            "save-last" => Instruction::SaveLast,
            other => return Err(format!("unknown instruction {other:?}")),
        };

        let takes_arg = matches!(
            instr,
            Instruction::Ambig(_)
                | Instruction::Immed(_)
                | Instruction::GoToPage(_)
                | Instruction::Shift(_)
                | Instruction::Speech(_)
                | Instruction::CapsLock(_)
                | Instruction::SymbolMode(_)
        );
        if !takes_arg && arg.is_some() {
            return Err(format!("{name:?} takes no argument"));
        }
        Ok(instr)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Term => f.write_str("term"),
            Instruction::Ambig(class) => write!(f, "ambig:{class}"),
            Instruction::Select => f.write_str("select"),
            Instruction::Undo => f.write_str("undo"),
            Instruction::Snug => f.write_str("snug"),
            Instruction::Immed(text) => write!(f, "immed:{text}"),
            Instruction::GoToPage(page) => write!(f, "goto:{page}"),
            Instruction::Shift(mode) => write!(f, "shift:{}", mode.as_str()),
            Instruction::Speech(mode) => write!(f, "speech:{}", mode.as_str()),
            Instruction::CapsLock(mode) => write!(f, "caps:{}", mode.as_str()),
            Instruction::ClearInput => f.write_str("clear"),
            Instruction::DeleteWord => f.write_str("delete-word"),
            Instruction::Enter => f.write_str("enter"),
            Instruction::Back => f.write_str("back"),
            Instruction::ScrollUp => f.write_str("scroll-up"),
            Instruction::ScrollDown => f.write_str("scroll-down"),
            Instruction::Menu => f.write_str("menu"),
            Instruction::Home => f.write_str("home"),
            Instruction::SpeakSentence => f.write_str("speak-sentence"),
            Instruction::SymbolMode(n) => write!(f, "symbol-mode:{n}"),
            Instruction::Speak => f.write_str("speak"),
            Instruction::SaveLast => f.write_str("save-last"),
        }
    }
}
