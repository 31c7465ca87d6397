//! HTML rendering for the upload page.

use std::collections::BTreeMap;

use trendgap_core::{Category, Report};

use crate::error::CliResult;

/// What the page shows below the upload form.
#[derive(Debug, Default, PartialEq)]
pub struct PageState {
    pub results: Option<BTreeMap<Category, String>>,
    pub error_message: Option<String>,
}

impl From<CliResult<Report>> for PageState {
    fn from(outcome: CliResult<Report>) -> Self {
        match outcome {
            Ok(report) => Self {
                results: Some(report.messages()),
                error_message: None,
            },
            Err(err) => Self {
                results: None,
                error_message: Some(err.to_string()),
            },
        }
    }
}

const HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Timestamp Trend Analysis</title>
</head>
<body>
<h1>Timestamp Trend Analysis</h1>
<form method="post" action="/" enctype="multipart/form-data">
<input type="file" name="file" accept=".csv">
<button type="submit">Upload</button>
</form>
"#;

const FOOTER: &str = "</body>\n</html>\n";

pub fn render_page(state: &PageState) -> String {
    let mut html = String::from(HEADER);

    if let Some(message) = &state.error_message {
        html.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(message)));
    }

    if let Some(results) = &state.results {
        html.push_str("<h2>Results</h2>\n<ul>\n");
        for (category, message) in results {
            html.push_str(&format!(
                "<li><strong title=\"{}\">{}</strong>: {}</li>\n",
                category.description(),
                category,
                escape_html(message)
            ));
        }
        html.push_str("</ul>\n");
    }

    html.push_str(FOOTER);
    html
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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
