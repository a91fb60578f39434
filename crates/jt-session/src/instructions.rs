use tracing::{debug, trace};

use jt_core::dict::{CandidateItem, CandidateKind};
use jt_core::pages::Instruction;

use super::types::{case_fold, HostRequest};
use super::InputSession;

const SENTENCE_END: [char; 3] = ['.', '!', '?'];

impl InputSession {
    /// Run one instruction against the live state. Instructions whose
    /// precondition does not hold do nothing.
    pub(super) fn execute(&mut self, instruction: &Instruction, requests: &mut Vec<HostRequest>) {
        trace!(%instruction, "execute");
        match instruction {
            Instruction::Term => self.term(requests),
            Instruction::Ambig(_) => self.ambig(),
            Instruction::Select => self.select(),
            Instruction::Undo => self.undo(),
            Instruction::Snug => {
                let len = self.state.output.trim_end().len();
                self.state.output.truncate(len);
            }
            Instruction::Immed(text) => {
                let text = case_fold(text, self.state.shift_on, self.state.caps_on);
                self.state.output.push_str(&text);
                self.state.clear_selection();
            }
            Instruction::GoToPage(page) => self.state.current_page.clone_from(page),
            Instruction::Shift(mode) => self.state.shift_on = mode.apply(self.state.shift_on),
            Instruction::Speech(mode) => self.state.speech_on = mode.apply(self.state.speech_on),
            Instruction::CapsLock(mode) => self.state.caps_on = mode.apply(self.state.caps_on),
            Instruction::ClearInput => self.state.clear_selection(),
            Instruction::DeleteWord => self.delete_word(),
            Instruction::Enter => {
                if !self.state.output.is_empty() {
                    self.state.output.push('\n');
                }
            }
            Instruction::Back => {
                self.state.output.pop();
            }
            Instruction::ScrollUp => requests.push(HostRequest::ScrollUp),
            Instruction::ScrollDown => requests.push(HostRequest::ScrollDown),
            Instruction::Menu => requests.push(HostRequest::OpenMenu),
            Instruction::Home => requests.push(HostRequest::Home),
            Instruction::SpeakSentence => {
                if let Some(sentence) = self.last_sentence() {
                    requests.push(HostRequest::Speak(sentence));
                }
            }
            Instruction::SymbolMode(n) => requests.push(HostRequest::SymbolMode(*n)),
            Instruction::Speak => {
                if self.state.speech_on && !self.state.output.is_empty() {
                    requests.push(HostRequest::Speak(self.state.output.clone()));
                }
            }
            Instruction::SaveLast => {
                let last = self.state.output.split_whitespace().last().map(str::to_string);
                if let Some(word) = last {
                    self.save_custom_word(&word, requests);
                }
            }
        }
    }

    fn term(&mut self, requests: &mut Vec<HostRequest>) {
        let Some(item) = self
            .selected_item()
            .filter(|c| c.kind.is_committable())
            .cloned()
        else {
            return;
        };

        self.state.output.push_str(&item.output);
        self.state.output.push(' ');
        self.state.clear_selection();
        if item.kind == CandidateKind::CustomCommit {
            self.save_custom_word(&item.output, requests);
        }
        self.state.shift_on = false;
        debug!(word = %item.output, kind = item.kind.tag(), "committed");
    }

    /// A lone ambiguous press offers the button's sub-pages; any longer run
    /// drops them.
    fn ambig(&mut self) {
        let sub_pages = match self.state.ambiguous_run.as_slice() {
            [only] => only
                .sub_pages
                .iter()
                .map(|page| CandidateItem::page_link(page))
                .collect(),
            _ => Vec::new(),
        };
        self.state.transient = sub_pages;
    }

    fn select(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let was_page = self
            .selected_item()
            .is_some_and(|c| c.kind == CandidateKind::PageLink);
        let next = self.state.selection_index.map_or(0, |i| i + 1);
        let Some(item) = self.selection.get(next) else {
            return;
        };

        let target = if item.kind == CandidateKind::PageLink {
            Some(item.output.clone())
        } else if was_page {
            // Leaving a page link always snaps back to the start page, even
            // when the new item belongs to another run.
            Some(self.pages.start_page().to_string())
        } else {
            None
        };
        self.state.selection_index = Some(next);
        if let Some(page) = target {
            self.state.current_page = page;
        }
    }

    /// The log holds this press's snapshot on top. Drop it and restore the
    /// one beneath. With nothing beneath the press does nothing beyond
    /// being recorded.
    fn undo(&mut self) {
        if self.undo.len() < 2 {
            return;
        }
        self.undo.pop();
        if let Some(previous) = self.undo.pop() {
            self.state = previous;
            self.recompute_ambiguous_run();
        }
    }

    fn delete_word(&mut self) {
        let trimmed = self.state.output.trim_end();
        let keep = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        self.state.output.truncate(keep);
    }

    /// Text after the last sentence terminator, trimmed. `None` when speech
    /// is off or there is nothing to say.
    fn last_sentence(&self) -> Option<String> {
        if !self.state.speech_on {
            return None;
        }
        let text = self.state.output.trim_end();
        let text = text.trim_end_matches(SENTENCE_END);
        let start = text.rfind(SENTENCE_END).map_or(0, |i| i + 1);
        let sentence = text[start..].trim();
        (!sentence.is_empty()).then(|| sentence.to_string())
    }

    fn save_custom_word(&mut self, word: &str, requests: &mut Vec<HostRequest>) {
        if self.trie.insert_custom_word(word) {
            debug!(word, "custom word saved");
            requests.push(HostRequest::PersistCustomWord(word.to_string()));
        }
    }
}
