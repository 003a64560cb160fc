//! Server-rendered HTML pages.

use axum::extract::State;
use axum::response::Html;
use carlot_db::models::car::Car;
use carlot_db::repositories::CarRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /cars
///
/// Lists every stored car as an HTML table.
pub async fn cars_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let cars = CarRepo::list(&state.pool).await?;
    Ok(Html(render_cars_page(&cars)))
}

/// Render the listing page for `cars`.
pub fn render_cars_page(cars: &[Car]) -> String {
    let mut rows = String::new();
    for car in cars {
        rows.push_str(&format!(
            "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&car.make),
            escape_html(&car.model),
            car.year,
            escape_html(&car.vin),
            escape_html(&car.category),
        ));
    }

    let body = if cars.is_empty() {
        "    <p>No cars yet.</p>\n".to_string()
    } else {
        format!(
            "    <table>\n      <tr><th>Make</th><th>Model</th><th>Year</th><th>VIN</th><th>Category</th></tr>\n{rows}    </table>\n"
        )
    };

    format!(
        "<!DOCTYPE html>\n<html>\n  <head>\n    <meta charset=\"utf-8\">\n    <title>Cars</title>\n  </head>\n  <body>\n    <h1>Cars</h1>\n{body}  </body>\n</html>\n"
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
