//! The single HTML page of the review form

use reviewbot_domain::Sentiment;

/// What to show under the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// Nothing submitted yet
    Empty,
    Label(Sentiment),
    /// The classifier failed; the message is shown instead of a label
    Error(&'a str),
}

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;max-width:40rem;margin:3rem auto;padding:0 1rem}\
form{display:flex;gap:.5rem}\
input[type=text]{flex:1;padding:.5rem;font-size:1rem}\
button{padding:.5rem 1rem;font-size:1rem}\
.result{margin-top:1.5rem;font-size:1.25rem;font-weight:600}\
.positive{color:#1a7f37}.negative{color:#cf222e}.error{color:#9a6700}";

/// Render the page with the last submitted review and its outcome
pub fn render(review: &str, outcome: Outcome<'_>) -> String {
    let result = match outcome {
        Outcome::Empty => String::new(),
        Outcome::Label(sentiment) => {
            let class = if sentiment.is_positive() {
                "positive"
            } else {
                "negative"
            };
            format!(
                r#"<p class="result {}" id="label">{}</p>"#,
                class,
                sentiment.as_str()
            )
        }
        Outcome::Error(message) => format!(
            r#"<p class="result error" id="error">Error: {}</p>"#,
            escape_html(message)
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Mess Review Bot</title>
<style>{style}</style>
</head>
<body>
<h1>Mess Review Bot</h1>
<form method="post" action="/">
<label for="review">Review</label>
<input type="text" id="review" name="review" placeholder="I love mess food!" value="{review}">
<button type="submit" name="submit">Submit</button>
</form>
{result}
</body>
</html>
"#,
        style = STYLE,
        review = escape_html(review),
        result = result,
    )
}

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
