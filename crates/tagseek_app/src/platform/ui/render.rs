use chrono::{DateTime, Local};
use tagseek_core::AppViewModel;

/// Full screen text for `view`, stamped with `now`.
pub fn render(view: &AppViewModel, now: DateTime<Local>) -> Vec<String> {
    let mut lines = vec![status_line(view, now)];
    lines.push(history_line(&view.history));

    match view.results_query.as_deref() {
        Some(query) if view.results.is_empty() => {
            lines.push(format!("No results for {query:?}"));
        }
        Some(query) => {
            lines.push(format!("Results for {query:?} ({}):", view.results.len()));
            for (index, item) in view.results.iter().enumerate() {
                let title = if item.title.is_empty() {
                    "(untitled)"
                } else {
                    item.title.as_str()
                };
                let link = item.image_url.as_deref().unwrap_or(&item.url);
                lines.push(format!("{:>3}. {title} <{link}>", index + 1));
            }
        }
        None => {}
    }
    lines
}

pub fn history_line(history: &[String]) -> String {
    if history.is_empty() {
        return "History: (empty)".to_string();
    }
    let entries: Vec<String> = history
        .iter()
        .enumerate()
        .map(|(index, tag)| format!("{}:{tag}", index + 1))
        .collect();
    format!("History: {}", entries.join("  "))
}

fn status_line(view: &AppViewModel, now: DateTime<Local>) -> String {
    let stamp = now.format("%H:%M:%S");
    if view.searching {
        format!("[{stamp}] searching...")
    } else if let Some(error) = &view.last_error {
        format!("[{stamp}] search failed: {error}")
    } else {
        format!("[{stamp}] ready")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tagseek_core::ResultItem;

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn renders_history_and_results() {
        let view = AppViewModel {
            history: vec!["cats".into(), "dogs".into()],
            results: vec![
                ResultItem {
                    id: "1".into(),
                    title: "Cat jump".into(),
                    url: "https://giphy.example/1".into(),
                    image_url: Some("https://media.example/1.gif".into()),
                },
                ResultItem {
                    id: "2".into(),
                    url: "https://giphy.example/2".into(),
                    ..ResultItem::default()
                },
            ],
            results_query: Some("Cats".into()),
            ..AppViewModel::default()
        };

        assert_eq!(
            render(&view, noon()),
            vec![
                "[12:00:00] ready",
                "History: 1:cats  2:dogs",
                "Results for \"Cats\" (2):",
                "  1. Cat jump <https://media.example/1.gif>",
                "  2. (untitled) <https://giphy.example/2>",
            ]
        );
    }

    #[test]
    fn status_reflects_search_and_failure() {
        let searching = AppViewModel {
            searching: true,
            ..AppViewModel::default()
        };
        assert_eq!(render(&searching, noon())[0], "[12:00:00] searching...");

        let failed = AppViewModel {
            last_error: Some("timeout: slow".into()),
            ..AppViewModel::default()
        };
        let lines = render(&failed, noon());
        assert_eq!(lines[0], "[12:00:00] search failed: timeout: slow");
        assert_eq!(lines[1], "History: (empty)");
        assert_eq!(lines.len(), 2);
    }
}
