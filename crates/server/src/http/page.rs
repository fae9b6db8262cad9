//! Dashboard page.
//!
//! A single self-contained document: dropdown options are rendered server-side,
//! the map and the two sentences are filled in by small fetch calls against
//! the `/api/*` routes. Plotly.js draws the figure.

use cupdash_core::Dataset;
use cupdash_core::dashboard::{COUNTRY_PLACEHOLDER, DASHBOARD_TITLE, YEAR_PLACEHOLDER, country_options, year_options};

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Render the full dashboard page.
pub fn render_page(dataset: &Dataset) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{plotly}"></script>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        <div id="choropleth-map"></div>
        {country_dropdown}
        <div id="country-wins" class="output"></div>
        {year_dropdown}
        <div id="final-result" class="output"></div>
    </div>
    <script>{js}</script>
</body>
</html>"#,
        title = DASHBOARD_TITLE,
        plotly = PLOTLY_JS,
        css = inline_css(),
        js = inline_javascript(),
        country_dropdown = render_dropdown("country-dropdown", COUNTRY_PLACEHOLDER, &country_options(dataset)),
        year_dropdown = render_dropdown("year-dropdown", YEAR_PLACEHOLDER, &year_options(dataset)),
    )
}

fn render_dropdown(id: &str, placeholder: &str, options: &[String]) -> String {
    let items: String = options
        .iter()
        .map(|o| {
            let v = escape_html(o);
            format!(r#"<option value="{v}">{v}</option>"#)
        })
        .collect();

    format!(
        r#"<select id="{id}"><option value="" selected>{placeholder}</option>{items}</select>"#,
        placeholder = escape_html(placeholder)
    )
}

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn inline_css() -> &'static str {
    r#"
body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    background-color: white;
    color: #111827;
    margin: 0;
}

.container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 2rem;
}

#choropleth-map {
    height: 480px;
    margin-bottom: 1rem;
}

select {
    width: 100%;
    padding: 0.5rem;
    margin-top: 1rem;
    font-size: 1rem;
}

.output {
    min-height: 1.5rem;
    padding: 0.5rem 0;
}
"#
}

fn inline_javascript() -> &'static str {
    r#"
async function getJson(path, params) {
    const query = new URLSearchParams(params).toString();
    const resp = await fetch(query ? `${path}?${query}` : path);
    return resp.json();
}

async function drawMap(country) {
    const fig = await getJson('/api/figure', country ? { country } : {});
    Plotly.react('choropleth-map', fig.data, fig.layout, { responsive: true });
}

async function showText(target, path, params) {
    const out = await getJson(path, params);
    document.getElementById(target).textContent = out.text;
}

document.getElementById('country-dropdown').addEventListener('change', (e) => {
    const country = e.target.value;
    drawMap(country);
    showText('country-wins', '/api/country-wins', country ? { country } : {});
});

document.getElementById('year-dropdown').addEventListener('change', (e) => {
    const year = e.target.value;
    showText('final-result', '/api/final-result', year ? { year } : {});
});

drawMap('');
"#
}
