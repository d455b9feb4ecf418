#[cfg(test)]
#[path = "../../tests/unit/format/titles_test.rs"]
mod titles_test;

use crate::models::{Priority, TourCost};

const TITLE_BOX_STYLE: &str = "position:fixed;top:10px;left:10px;z-index:9999;\
background:white;padding:10px;border-radius:8px;box-shadow:2px 2px 10px rgba(0,0,0,0.1);";

/// Returns a title of the tour panel. Only a single cost value produces a title.
pub fn get_figure_title(cost: &TourCost, priority: Priority) -> Option<String> {
    match cost {
        TourCost::Single(value) => {
            Some(format!("TSP Path Total {}: {value:.2} {}", priority.name(), priority.unit()))
        }
        TourCost::Breakdown(_) => None,
    }
}

/// Returns a text of the floating title box shown on the interactive map.
///
/// A breakdown always reports time in hours, distance in km and cost in local currency, whatever the
/// priority is.
pub fn get_title_box_text(cost: &TourCost, priority: Priority) -> String {
    match cost {
        TourCost::Single(value) => format!("Total {}: {value:.2} {}", priority.name(), priority.unit()),
        TourCost::Breakdown(breakdown) => format!(
            "Time: {:.2} {}, Distance: {:.2} {}, Cost: {:.2} {}",
            breakdown.time,
            Priority::Time.unit(),
            breakdown.distance,
            Priority::Distance.unit(),
            breakdown.cost,
            Priority::Cost.unit()
        ),
    }
}

/// Returns the floating title box as html snippet.
pub fn get_title_box_html(cost: &TourCost, priority: Priority) -> String {
    format!(r#"<h4 style="{TITLE_BOX_STYLE}">{}</h4>"#, escape_html(get_title_box_text(cost, priority).as_str()))
}

/// Escapes characters which have special meaning in html.
pub fn escape_html(text: &str) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut acc, ch| {
        match ch {
            '&' => acc.push_str("&amp;"),
            '<' => acc.push_str("&lt;"),
            '>' => acc.push_str("&gt;"),
            '"' => acc.push_str("&quot;"),
            '\'' => acc.push_str("&#39;"),
            _ => acc.push(ch),
        }

        acc
    })
}
