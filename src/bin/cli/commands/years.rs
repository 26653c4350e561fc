use anyhow::Result;

use wordwizards_lib::sessions::YearSelection;

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let selection = YearSelection::new(&*app.repository);

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = selection
                .years()
                .iter()
                .map(|year| {
                    serde_json::json!({
                        "shortCode": year.short_code(),
                        "name": year.display_name(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for year in selection.years() {
                println!(
                    "{}  {}",
                    paint(year.short_code(), Color::CYAN, use_color),
                    year.display_name()
                );
            }
        }
    }

    Ok(())
}
