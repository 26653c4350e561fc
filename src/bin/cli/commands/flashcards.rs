use anyhow::Result;

use wordwizards_lib::sessions::{FlashcardSession, BATCH_SIZE};
use wordwizards_lib::speech::SpeechService;
use wordwizards_lib::vocabulary::YearGroup;

use crate::app::{parse_choice, read_answer, App};
use crate::render::terminal::{paint, render_card_back, render_card_front, Color};

const HELP: &str = "  <n> flip card  s <n> hear word  m <n> memorized  n next batch  q quit";

pub async fn run(app: &App, year: YearGroup, use_color: bool) -> Result<()> {
    let mut session = FlashcardSession::new(year, app.repository.clone(), app.progress.clone());
    println!("Loading words…");
    session.load().await;

    if let Some(empty) = session.empty_state() {
        if let Some(error) = session.error_message() {
            println!("{}", paint(error, Color::RED, use_color));
        }
        println!("{}", empty.message());
        return Ok(());
    }

    loop {
        let batch = session.current_batch().to_vec();
        let start = session.batch_index() * BATCH_SIZE;
        println!();
        println!(
            "{} (words {}-{} of {}, {} memorized here)",
            paint("Today's Words", Color::BOLD, use_color),
            start + 1,
            start + batch.len(),
            session.cards().len(),
            session.memorized_in_batch()
        );
        for (i, card) in batch.iter().enumerate() {
            println!("{}", render_card_front(i + 1, card, session.is_memorized(card), use_color));
        }
        println!("{}", paint(HELP, Color::DIM, use_color));

        loop {
            let Some(input) = read_answer("> ")? else {
                return Ok(());
            };
            let (action, rest) = match input.split_once(' ') {
                Some((action, rest)) => (action, rest.trim()),
                None => ("", input.as_str()),
            };

            match (action, rest) {
                ("", "q") => return Ok(()),
                ("", "n") => {
                    if session.has_next_batch() {
                        session.advance_batch();
                        break;
                    }
                    println!("That was the last batch. Well done!");
                }
                ("s", n) => match parse_choice(n, batch.len()) {
                    Some(i) => app.speech.speak(&batch[i].word),
                    None => println!("Pick a card from 1 to {}", batch.len()),
                },
                ("m", n) => match parse_choice(n, batch.len()) {
                    Some(i) => {
                        session.mark_memorized(&batch[i]);
                        println!("{} memorized!", paint(&batch[i].word, Color::GREEN, use_color));
                    }
                    None => println!("Pick a card from 1 to {}", batch.len()),
                },
                ("", n) => match parse_choice(n, batch.len()) {
                    Some(i) => println!("{}", render_card_back(&batch[i], use_color)),
                    None => println!("{}", HELP),
                },
                _ => println!("{}", HELP),
            }
        }
    }
}
