use sourcefinder_common::SourceRecord;

/// Render the search page: form, optional warning, and numbered results.
pub fn render_index(topic: &str, warning: &str, results: &[SourceRecord]) -> String {
    let warning_html = if !warning.is_empty() {
        format!(r#"<div class="warning">{}</div>"#, html_escape(warning))
    } else {
        String::new()
    };

    let results_html = if !results.is_empty() {
        let items: String = results
            .iter()
            .map(|s| {
                format!(
                    r#"<li class="source"><strong>{title}</strong><br><a href="{url}" target="_blank" rel="noopener">{url}</a></li>"#,
                    title = html_escape(s.title),
                    url = html_escape(s.url),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        let s = if results.len() != 1 { "s" } else { "" };
        format!(
            r#"<h3>{count} reliable source{s} for “{topic}”</h3>
<ol class="sources">
{items}
</ol>"#,
            count = results.len(),
            topic = html_escape(topic),
        )
    } else {
        String::new()
    };

    let content = format!(
        r#"<div class="container">
<form method="post" action="/">
    <input type="text" name="topic" value="{topic}" placeholder="e.g. rome, cold war, migration" autofocus>
    <button type="submit">Find sources</button>
</form>
<p class="hint">Enter a research topic, not a question.</p>
{warning_html}
{results_html}
</div>"#,
        topic = html_escape(topic),
    );

    build_page("Research Sources", &content)
}

fn build_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
*{{margin:0;padding:0;box-sizing:border-box;}}
body{{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#1a1a1a;background:#fafafa;}}
.header{{background:#1a1a1a;color:#fff;padding:12px 24px;}}
.header h1{{font-size:18px;font-weight:600;}}
.container{{max-width:760px;margin:0 auto;padding:24px;}}
form{{display:flex;gap:8px;margin-bottom:8px;}}
form input{{flex:1;padding:8px 12px;font-size:15px;border:1px solid #ccc;border-radius:4px;}}
form button{{padding:8px 16px;background:#0066cc;color:#fff;border:none;border-radius:4px;font-size:14px;cursor:pointer;}}
form button:hover{{background:#004499;}}
.hint{{font-size:12px;color:#888;margin-bottom:16px;}}
.warning{{background:#fff8e1;border:1px solid #ffecb3;padding:8px 12px;border-radius:4px;font-size:14px;color:#795548;margin-bottom:16px;}}
h3{{font-size:16px;margin-bottom:12px;}}
.sources{{padding-left:20px;}}
.source{{background:#fff;border:1px solid #e0e0e0;border-radius:8px;padding:12px 16px;margin-bottom:10px;font-size:14px;}}
.source a{{color:#0066cc;font-size:13px;word-break:break-all;}}
</style>
</head>
<body>
<div class="header">
    <h1>Reliable Research Sources</h1>
</div>
{content}
</body>
</html>"#,
        title = html_escape(title),
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_has_form_and_no_results() {
        let html = render_index("", "", &[]);
        assert!(html.contains(r#"name="topic""#));
        assert!(!html.contains("class=\"warning\""));
        assert!(!html.contains("<ol"));
    }

    #[test]
    fn topic_and_warning_are_escaped() {
        let html = render_index("<script>", "a & b", &[]);
        assert!(html.contains(r#"value="&lt;script&gt;""#));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn results_are_numbered_links() {
        let results = [
            SourceRecord::new("OECD Inequality Stats", "https://stats.oecd.org/Index.aspx?DataSetCode=IDD"),
            SourceRecord::new("V-Dem Democracy Dataset", "https://v-dem.net/"),
        ];
        let html = render_index("inequality", "", &results);

        assert!(html.contains("2 reliable sources for"));
        assert!(html.contains("<strong>OECD Inequality Stats</strong>"));
        assert!(html.contains(r#"href="https://v-dem.net/""#));
        assert!(html.contains("DataSetCode=IDD"));
    }

    #[test]
    fn single_result_is_singular() {
        let results = [SourceRecord::new("Hannah Arendt Papers", "https://hac.bard.edu/")];
        assert!(render_index("arendt", "", &results).contains("1 reliable source for"));
    }
}
