use wordwizards_lib::vocabulary::VocabularyItem;

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
}

/// Wrap text in a color when colors are on
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Front of a flashcard: just the word
pub fn render_card_front(number: usize, item: &VocabularyItem, memorized: bool, use_color: bool) -> String {
    let mark = if memorized { paint(" ✓", Color::GREEN, use_color) } else { String::new() };
    format!("  {}. {}{}", number, paint(&item.word, Color::BOLD, use_color), mark)
}

/// Back of a flashcard: meaning, antonyms when there are two, and an example
pub fn render_card_back(item: &VocabularyItem, use_color: bool) -> String {
    let mut lines = vec![
        paint(&item.word, Color::BOLD, use_color),
        format!("  {}", item.meaning),
    ];

    if let Some((first, second)) = item.antonym_pair() {
        lines.push(format!(
            "  {} {}, {}",
            paint("Antonyms:", Color::DIM, use_color),
            paint(first, Color::CYAN, use_color),
            paint(second, Color::CYAN, use_color)
        ));
    }

    if let Some(example) = item.first_example() {
        lines.push(format!("  {} {}", paint("e.g.", Color::DIM, use_color), example));
    }

    lines.join("\n")
}

/// Numbered answer options
pub fn render_options(options: &[String]) -> String {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("  {}) {}", i + 1, option))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Final score line
pub fn render_score(correct: usize, total: usize, use_color: bool) -> String {
    let score = format!("Score: {}/{}", correct, total);
    paint(&score, Color::BOLD, use_color)
}
