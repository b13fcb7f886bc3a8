use askama::Template;
use itertools::Itertools;
use tracing::warn;

use crate::model::JobOffer;

pub const HEADERS: [&str; 4] = ["Title", "Company", "Location", "Platform"];

/// One rendered offer row, keyed by the offer id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferRow {
    pub key: i64,
    pub title: String,
    pub company: String,
    /// Empty when the offer has no location.
    pub location: String,
    pub platform: String,
    /// Only set for absolute `http`/`https` URLs.
    pub url: Option<String>,
}

impl From<&JobOffer> for OfferRow {
    fn from(offer: &JobOffer) -> Self {
        Self {
            key: offer.id,
            title: offer.title.clone(),
            company: offer.company.clone(),
            location: offer.location.clone().unwrap_or_default(),
            platform: offer.platform.clone(),
            url: offer.url.as_deref().and_then(link_target),
        }
    }
}

fn link_target(url: &str) -> Option<String> {
    match reqwest::Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Some(url.to_string()),
        _ => {
            warn!(url, "ignoring non-http job offer url");
            None
        }
    }
}

/// Control characters would break a text row across lines.
fn text_cell(cell: &str) -> String {
    cell.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

impl OfferRow {
    fn cells(&self) -> [&str; 4] {
        [&self.title, &self.company, &self.location, &self.platform]
    }
}

/// Header row plus one row per offer, in the order given.
#[derive(Debug, Clone, Template)]
#[template(path = "offer_list.html")]
pub struct OfferListView {
    pub headers: [&'static str; 4],
    pub rows: Vec<OfferRow>,
}

impl OfferListView {
    pub fn new(offers: &[JobOffer]) -> Self {
        for id in offers.iter().map(|o| o.id).duplicates() {
            warn!(id, "duplicate job offer id in listing");
        }

        Self {
            headers: HEADERS,
            rows: offers.iter().map(OfferRow::from).collect(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = i64> + '_ {
        self.rows.iter().map(|row| row.key)
    }

    /// Render as a plain text table with padded columns.
    pub fn to_text(&self) -> String {
        let rows: Vec<[String; 4]> = self
            .rows
            .iter()
            .map(|row| row.cells().map(text_cell))
            .collect();

        let mut widths = self.headers.map(|h| h.chars().count());
        for cells in &rows {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let line = |cells: &[String; 4]| {
            cells
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let separator = widths.iter().map(|w| "-".repeat(*w)).join("-+-");

        std::iter::once(line(&self.headers.map(str::to_string)))
            .chain(std::iter::once(separator))
            .chain(rows.iter().map(line))
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::offer;

    #[test]
    fn test_rows_follow_input_order() {
        let offers = vec![
            offer(5, "E", "Acme", None, "Indeed"),
            offer(2, "B", "Acme", None, "Indeed"),
            offer(9, "I", "Acme", None, "Indeed"),
            offer(1, "A", "Acme", None, "Indeed"),
        ];

        let view = OfferListView::new(&offers);

        let titles: Vec<&str> = view.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["E", "B", "I", "A"]);

        let html = view.render().unwrap();
        let positions: Vec<usize> = [5, 2, 9, 1]
            .iter()
            .map(|key| html.find(&format!("data-key=\"{key}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_row_keys_are_offer_ids() {
        let offers = vec![
            offer(10, "A", "Acme", None, "Indeed"),
            offer(20, "B", "Globex", Some("Remote"), "LinkedIn"),
        ];

        let view = OfferListView::new(&offers);

        assert_eq!(view.keys().collect::<Vec<_>>(), vec![10, 20]);
        assert!(view.keys().all_unique());
    }

    #[test]
    fn test_empty_list_renders_header_only() {
        let view = OfferListView::new(&[]);
        let html = view.render().unwrap();

        for header in HEADERS {
            assert!(html.contains(&format!("<span>{header}</span>")));
        }
        assert!(!html.contains("<li"));
        assert_eq!(view.to_text().lines().count(), 2);
    }

    #[test]
    fn test_absent_location_renders_empty_cell() {
        let view = OfferListView::new(&[offer(2, "Analyst", "Globex", None, "Indeed")]);

        assert_eq!(view.rows[0].location, "");

        let html = view.render().unwrap();
        assert!(html.contains(
            "<span>Globex</span>\n      <span></span>\n      <span>Indeed</span>"
        ));
        assert!(!html.contains("null"));
        assert!(!html.contains("None"));
        assert!(!html.contains("undefined"));
    }

    #[test]
    fn test_html_escapes_offer_text() {
        let view = OfferListView::new(&[offer(
            3,
            "<script>x</script>",
            "A & B",
            None,
            "Indeed",
        )]);
        let html = view.render().unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A &amp; B"));
    }

    #[test]
    fn test_title_links_to_offer_url() {
        let mut linked = offer(4, "Engineer", "Acme", None, "LinkedIn");
        linked.url = Some("https://example.com/jobs/4".to_string());

        let html = OfferListView::new(&[linked]).render().unwrap();
        assert!(html.contains("<a href=\""));
        assert!(html.contains("example.com"));
        assert!(html.contains(">Engineer</a>"));
    }

    #[test]
    fn test_title_link_requires_http_scheme() {
        for url in [
            "javascript:alert(document.cookie)",
            "data:text/html,<b>x</b>",
            "/relative/path",
        ] {
            let mut linked = offer(5, "Engineer", "Acme", None, "LinkedIn");
            linked.url = Some(url.to_string());

            let view = OfferListView::new(&[linked]);
            assert_eq!(view.rows[0].url, None, "kept {url:?}");

            let html = view.render().unwrap();
            assert!(!html.contains("href="), "linked {url:?}");
            assert!(html.contains("<strong>Engineer</strong>"));
        }
    }

    #[test]
    fn test_text_table_flattens_control_characters() {
        let view = OfferListView::new(&[offer(
            1,
            "Senior\nEngineer",
            "Acme\r\nCorp",
            Some("Re\tmote"),
            "LinkedIn",
        )]);

        let text = view.to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Title           | Company    | Location | Platform",
                "----------------+------------+----------+---------",
                "Senior Engineer | Acme  Corp | Re mote  | LinkedIn",
            ]
        );
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let offers = vec![
            offer(1, "A", "Acme", None, "Indeed"),
            offer(1, "A", "Acme", None, "Indeed"),
        ];

        let view = OfferListView::new(&offers);
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn test_text_table() {
        let view = OfferListView::new(&[
            offer(1, "Engineer", "Acme", Some("Remote"), "LinkedIn"),
            offer(2, "Analyst", "Globex", None, "Indeed"),
        ]);

        let text = view.to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Title    | Company | Location | Platform",
                "---------+---------+----------+---------",
                "Engineer | Acme    | Remote   | LinkedIn",
                "Analyst  | Globex  |          | Indeed",
            ]
        );
    }
}
