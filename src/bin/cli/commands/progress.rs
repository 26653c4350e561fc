use anyhow::Result;

use wordwizards_lib::progress::ProgressStore;
use wordwizards_lib::vocabulary::{VocabularyRepository, YearGroup};

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub async fn run(
    app: &App,
    year: Option<YearGroup>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let years = match year {
        Some(year) => vec![year],
        None => app.repository.years(),
    };

    let mut rows = Vec::new();
    for year in years {
        let mastered = app.progress.mastered_word_ids(year);
        // Count only ids still present in the content, and tolerate missing bundles
        let (known, total) = match app.repository.words(year).await {
            Ok(words) => {
                let known = words.iter().filter(|w| mastered.contains(&w.id)).count();
                (known, Some(words.len()))
            }
            Err(e) => {
                log::warn!("Progress: no content for {}: {}", year, e);
                (mastered.len(), None)
            }
        };
        rows.push((year, known, total));
    }

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = rows
                .iter()
                .map(|(year, known, total)| {
                    serde_json::json!({
                        "year": year.short_code(),
                        "mastered": known,
                        "total": total,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for (year, known, total) in &rows {
                let total = match total {
                    Some(total) => total.to_string(),
                    None => "?".to_string(),
                };
                println!(
                    "{}  {} / {} words memorized",
                    paint(year.display_name(), Color::CYAN, use_color),
                    known,
                    total
                );
            }
        }
    }

    Ok(())
}
