//! Plain-text rendering of UI snapshots for terminal output.

use unicode_width::UnicodeWidthStr;

use jt_session::{HostRequest, PressResponse, UiSnapshot};

const COLUMNS: usize = 4;

/// Pad `text` with spaces to `width` display columns.
pub fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Button labels as a 2x4 grid. Multi-row grid labels are flattened with `/`.
pub fn render_buttons(labels: &[String]) -> String {
    let cells: Vec<String> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| format!("{i}:{}", label.replace('\n', "/")))
        .collect();
    let width = cells.iter().map(|c| c.width()).max().unwrap_or(0);

    cells
        .chunks(COLUMNS)
        .map(|row| {
            let padded: Vec<String> = row.iter().map(|c| pad(c, width)).collect();
            format!("| {} |", padded.join(" | "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_request(request: &HostRequest) -> String {
    match request {
        HostRequest::Speak(text) => format!("speak {text:?}"),
        HostRequest::PersistCustomWord(word) => format!("persist {word:?}"),
        HostRequest::ScrollUp => "scroll up".to_string(),
        HostRequest::ScrollDown => "scroll down".to_string(),
        HostRequest::OpenMenu => "menu".to_string(),
        HostRequest::Home => "home".to_string(),
        HostRequest::SymbolMode(n) => format!("symbol mode {n}"),
    }
}

pub fn render_snapshot(snap: &UiSnapshot) -> String {
    let mut flags = Vec::new();
    if snap.shift_on {
        flags.push("shift");
    }
    if snap.caps_on {
        flags.push("caps");
    }
    if snap.speech_on {
        flags.push("speech");
    }

    let mut out = format!("[{}] {}\n", snap.page, flags.join(" "));
    out.push_str(&render_buttons(&snap.button_labels));
    out.push('\n');
    out.push_str(&format!("output:  {:?}\n", snap.output_text));
    out.push_str(&format!("preview: {:?}\n", snap.preview_text));
    if !snap.ambiguous_run_text.is_empty() {
        out.push_str(&format!("run:     {}\n", snap.ambiguous_run_text));
    }
    if !snap.key_history_text.is_empty() {
        out.push_str(&format!("keys:    {}\n", snap.key_history_text));
    }
    if !snap.candidate_list_text.is_empty() {
        out.push_str(&snap.candidate_list_text);
        out.push('\n');
    }
    out
}

pub fn render_response(resp: &PressResponse) -> String {
    let mut out = render_snapshot(&resp.snapshot);
    for request in &resp.requests {
        out.push_str(&format!("-> {}\n", render_request(request)));
    }
    out
}
