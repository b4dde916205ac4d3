//! Output formatting utilities

use crate::domain::Note;

/// Format the note list: one line per note with id, title and date
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found".to_string();
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!(
            "ID: {}, Title: {}, Date: {}\n",
            note.id, note.title, note.timestamp
        ));
    }
    output
}

/// Format a single note with its full content
pub fn format_note(note: &Note) -> String {
    format!(
        "Title: {}\nContent: {}\nDate: {}",
        note.title, note.content, note.timestamp
    )
}
