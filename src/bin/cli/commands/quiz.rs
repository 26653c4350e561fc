use anyhow::Result;

use wordwizards_lib::sessions::QuizSession;
use wordwizards_lib::vocabulary::YearGroup;

use crate::app::{parse_choice, read_answer, App};
use crate::render::terminal::{paint, render_options, render_score, Color};

pub async fn run(app: &App, year: YearGroup, use_color: bool) -> Result<()> {
    let mut session =
        QuizSession::new(year, app.repository.clone(), app.progress.clone()).with_rng(app.rng());
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
        println!();
        println!(
            "{}",
            paint(
                &format!("Question {} of {}", session.current_index() + 1, total),
                Color::DIM,
                use_color
            )
        );
        println!("What does {} mean?", paint(question.prompt(), Color::BOLD, use_color));
        println!("{}", render_options(&question.options));

        let choice = loop {
            let Some(input) = read_answer("> ")? else {
                return Ok(());
            };
            match parse_choice(&input, question.options.len()) {
                Some(choice) => break choice,
                None => println!("Pick an answer from 1 to {}", question.options.len()),
            }
        };

        match session.answer(choice) {
            Some(true) => println!("{}", paint("Correct!", Color::GREEN, use_color)),
            Some(false) => println!(
                "{} It means: {}",
                paint("Not quite.", Color::YELLOW, use_color),
                question.correct_option()
            ),
            None => {}
        }

        if session.is_finished() {
            break;
        }
    }

    let (correct, total) = session.score();
    println!();
    println!("{}", paint("Great job!", Color::BOLD, use_color));
    println!("{}", render_score(correct, total, use_color));
    Ok(())
}
