use anyhow::Result;

use wordwizards_lib::sessions::SentenceSession;
use wordwizards_lib::vocabulary::YearGroup;

use crate::app::{parse_choice, read_answer, App};
use crate::render::terminal::{paint, render_options, render_score, Color};

pub async fn run(app: &App, year: YearGroup, use_color: bool) -> Result<()> {
    let mut session = SentenceSession::new(year, app.repository.clone()).with_rng(app.rng());
    session.load().await;

    if let Some(empty) = session.empty_state() {
        if let Some(error) = session.error_message() {
            println!("{}", paint(error, Color::RED, use_color));
        }
        println!("{}", empty.message());
        return Ok(());
    }

    let total = session.questions().len();
    while let Some(question) = session.current_question().cloned() {
        if session.attempts() == 0 {
            println!();
            println!(
                "{}",
                paint(
                    &format!("Question {} of {}", session.current_index() + 1, total),
                    Color::DIM,
                    use_color
                )
            );
            println!("{}", question.display_sentence());
            println!("{}", render_options(&question.options));
        }

        let Some(input) = read_answer("> ")? else {
            return Ok(());
        };
        let Some(choice) = parse_choice(&input, question.options.len()) else {
            println!("Pick a word from 1 to {}", question.options.len());
            continue;
        };

        match session.answer_option(choice) {
            Some(true) => {
                println!(
                    "{} {}",
                    paint("Correct!", Color::GREEN, use_color),
                    question.fill(&question.correct_word)
                );
                session.advance();
            }
            Some(false) => println!("{}", paint("Try again!", Color::YELLOW, use_color)),
            None => break,
        }

        if session.is_finished() {
            break;
        }
    }

    let (first_try, total) = session.score();
    println!();
    println!("{}", paint("Great work! You've completed all sentences.", Color::BOLD, use_color));
    println!("{}", render_score(first_try, total, use_color));
    Ok(())
}
