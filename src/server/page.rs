//! Server-rendered listing page.

use std::fmt::Write;

use crate::dto::UnitRow;

const STYLE: &str = "body{font-family:sans-serif;max-width:60em;margin:2em auto}\
.unit{border:1px solid #ccc;padding:.5em 1em;margin:.5em 0}\
.unit.selected{border-color:#2a6;background:#f2fbf5}\
form{display:inline-block;margin-right:1em}";

/// Renders the index page. `rows` are shown in the given order.
pub fn render_index(rows: &[UnitRow], selected: Option<u64>) -> String {
    let mut html = String::with_capacity(1024 + rows.len() * 768);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Warehouse Management</title>\n");
    let _ = writeln!(html, "<style>{STYLE}</style>");
    html.push_str("</head>\n<body>\n<h1>Warehouse Management</h1>\n");

    html.push_str(concat!(
        "<section>\n<h2>New warehouse</h2>\n",
        "<form method=\"post\" action=\"/warehouse/create\">\n",
        "<label>Capacity <input name=\"capacity\" type=\"number\" step=\"any\" value=\"10\"></label>\n",
        "<label>Initial balance <input name=\"initial_balance\" type=\"number\" step=\"any\" value=\"0\"></label>\n",
        "<button type=\"submit\">Create</button>\n</form>\n</section>\n",
    ));

    html.push_str("<section>\n<h2>Warehouses</h2>\n");
    if rows.is_empty() {
        html.push_str("<p>No warehouses yet</p>\n");
    }
    for row in rows {
        render_row(&mut html, row, selected == Some(row.id));
    }
    html.push_str("</section>\n</body>\n</html>\n");
    html
}

fn render_row(html: &mut String, row: &UnitRow, selected: bool) {
    let UnitRow {
        id,
        capacity,
        balance,
        remaining,
    } = row;
    let class = if selected { "unit selected" } else { "unit" };

    // Writing into a String cannot fail
    let _ = write!(
        html,
        concat!(
            "<div class=\"{class}\" id=\"warehouse-{id}\">\n",
            "<h3>Warehouse #{id}</h3>\n",
            "<p>Capacity: {capacity} &middot; Balance: {balance} &middot; Remaining: {remaining}</p>\n",
            "<form method=\"post\" action=\"/warehouse/{id}/add\">",
            "<input name=\"amount\" type=\"number\" step=\"any\" min=\"0\">",
            "<button type=\"submit\">Add</button></form>\n",
            "<form method=\"post\" action=\"/warehouse/{id}/remove\">",
            "<input name=\"amount\" type=\"number\" step=\"any\" min=\"0\">",
            "<button type=\"submit\">Remove</button></form>\n",
            "<form method=\"post\" action=\"/warehouse/{id}/edit\">",
            "<input name=\"capacity\" type=\"number\" step=\"any\" value=\"{capacity}\">",
            "<button type=\"submit\">Set capacity</button></form>\n",
            "<form method=\"post\" action=\"/warehouse/{id}/delete\">",
            "<button type=\"submit\">Delete</button></form>\n",
            "</div>\n",
        ),
        class = class,
        id = id,
        capacity = capacity,
        balance = balance,
        remaining = remaining,
    );
}
