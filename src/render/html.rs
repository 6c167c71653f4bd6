use crate::core::ResultsSurface;
use crate::render::view::{Card, ResultsView};
use crate::utils::error::Result;
use std::fmt::Write as _;

pub const RESULTS_CONTAINER_ID: &str = "results-container";

/// An HTML travel page with a search form, an optional hero section and a
/// results region.
///
/// The results region is created by the first `draw` and reused afterwards.
/// It sits right after the hero when the page has one, otherwise at the end
/// of the body.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    title: String,
    hero: bool,
    search_value: String,
    results: Option<String>,
    scroll_into_view: bool,
}

impl HtmlPage {
    pub fn new(title: impl Into<String>, hero: bool) -> Self {
        Self {
            title: title.into(),
            hero,
            search_value: String::new(),
            results: None,
            scroll_into_view: false,
        }
    }

    pub fn set_search_value(&mut self, value: &str) {
        self.search_value = value.to_string();
    }

    /// Inner HTML of the results region, `None` until something was drawn.
    pub fn results_html(&self) -> Option<&str> {
        self.results.as_deref()
    }

    pub fn document(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{}</title>", escape(&self.title));
        html.push_str("</head>\n<body>\n");

        html.push_str("<nav class=\"search-container\">\n<form>\n");
        let _ = writeln!(
            html,
            "<input type=\"text\" name=\"search\" placeholder=\"Enter a destination or keyword\" value=\"{}\">",
            escape(&self.search_value)
        );
        html.push_str("<button type=\"submit\" class=\"search-btn\">Search</button>\n");
        html.push_str("<button type=\"button\" class=\"clear-btn\">Clear</button>\n");
        html.push_str("</form>\n</nav>\n");

        let region = self.results.as_ref().map(|inner| {
            format!(
                "<div id=\"{}\" class=\"results-container\">{}</div>\n",
                RESULTS_CONTAINER_ID, inner
            )
        });

        if self.hero {
            let _ = writeln!(
                html,
                "<section class=\"hero\"><h1>{}</h1></section>",
                escape(&self.title)
            );
            if let Some(region) = &region {
                html.push_str(region);
            }
            html.push_str("<footer class=\"footer\"></footer>\n");
        } else {
            html.push_str("<footer class=\"footer\"></footer>\n");
            if let Some(region) = &region {
                html.push_str(region);
            }
        }

        if self.scroll_into_view && region.is_some() {
            let _ = writeln!(
                html,
                "<script>document.getElementById('{}').scrollIntoView({{ behavior: 'smooth', block: 'start' }});</script>",
                RESULTS_CONTAINER_ID
            );
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

impl ResultsSurface for HtmlPage {
    fn draw(&mut self, view: &ResultsView) -> Result<()> {
        let mut inner = String::new();

        match view {
            ResultsView::NoResults { message } => {
                let _ = write!(
                    inner,
                    "<div class=\"no-results\"><p>{}</p></div>",
                    escape(message)
                );
            }
            ResultsView::Found { title, cards } => {
                let _ = write!(inner, "<h2 class=\"results-title\">{}</h2>", escape(title));
                inner.push_str("<div class=\"results-grid\">");
                for card in cards {
                    inner.push_str(&card_html(card));
                }
                inner.push_str("</div>");
            }
        }

        self.results = Some(inner);
        self.scroll_into_view = true;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.search_value.clear();
        if let Some(results) = self.results.as_mut() {
            results.clear();
        }
        self.scroll_into_view = false;
        Ok(())
    }
}

fn card_html(card: &Card) -> String {
    let on_error = format!(
        "this.onerror=null;this.src='{}';",
        js_single_quoted(&card.fallback_image)
    );
    format!(
        concat!(
            "<div class=\"result-card\" data-kind=\"{kind}\">",
            "<img src=\"{src}\" alt=\"{name}\" class=\"result-image\" onerror=\"{onerror}\">",
            "<div class=\"result-content\">",
            "<h3 class=\"result-name\">{name}</h3>",
            "<p class=\"result-description\">{description}</p>",
            "<button type=\"button\" class=\"visit-btn\">Visit</button>",
            "</div></div>"
        ),
        kind = card.kind,
        src = escape(&card.image_url),
        name = escape(&card.name),
        onerror = escape(&on_error),
        description = escape(&card.description),
    )
}

pub fn escape(text: &str) -> String {
    v_htmlescape::escape(text).to_string()
}

fn js_single_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Kind;

    fn card(name: &str) -> Card {
        Card {
            kind: Kind::Temple,
            name: name.to_string(),
            description: "Old & famous".to_string(),
            image_url: "temple.jpg".to_string(),
            fallback_image: "./Assets/LowerManhattanSkyline.jpg".to_string(),
        }
    }

    fn found(names: &[&str]) -> ResultsView {
        ResultsView::Found {
            title: crate::render::view::found_title(names.len()),
            cards: names.iter().map(|n| card(n)).collect(),
        }
    }

    #[test]
    fn test_no_region_before_first_draw() {
        let page = HtmlPage::new("TravelBloom", true);
        assert!(page.results_html().is_none());
        assert!(!page.document().contains(RESULTS_CONTAINER_ID));
    }

    #[test]
    fn test_draw_renders_cards_with_fallback() {
        let mut page = HtmlPage::new("TravelBloom", true);
        page.draw(&found(&["Angkor Wat"])).unwrap();

        let inner = page.results_html().unwrap();
        assert!(inner.contains("<h2 class=\"results-title\">Found 1 Recommendation</h2>"));
        assert!(inner.contains("<h3 class=\"result-name\">Angkor Wat</h3>"));
        assert!(inner.contains("Old &amp; famous"));
        assert!(inner.contains("LowerManhattanSkyline.jpg"));
        assert!(inner.contains("class=\"visit-btn\">Visit</button>"));
    }

    #[test]
    fn test_draw_is_idempotent() {
        let view = found(&["Angkor Wat", "Taj Mahal"]);
        let mut once = HtmlPage::new("TravelBloom", true);
        once.draw(&view).unwrap();

        let mut twice = HtmlPage::new("TravelBloom", true);
        twice.draw(&view).unwrap();
        twice.draw(&view).unwrap();

        assert_eq!(once.document(), twice.document());
        assert_eq!(twice.results_html().unwrap().matches("result-card").count(), 2);
    }

    #[test]
    fn test_region_follows_hero() {
        let mut page = HtmlPage::new("TravelBloom", true);
        page.draw(&ResultsView::empty()).unwrap();
        let doc = page.document();

        let hero = doc.find("class=\"hero\"").unwrap();
        let region = doc.find(RESULTS_CONTAINER_ID).unwrap();
        let footer = doc.find("class=\"footer\"").unwrap();
        assert!(hero < region && region < footer);
        assert!(doc.contains("scrollIntoView({ behavior: 'smooth', block: 'start' })"));
    }

    #[test]
    fn test_region_appended_without_hero() {
        let mut page = HtmlPage::new("TravelBloom", false);
        page.draw(&ResultsView::empty()).unwrap();
        let doc = page.document();

        assert!(!doc.contains("class=\"hero\""));
        let footer = doc.find("class=\"footer\"").unwrap();
        let region = doc.find(RESULTS_CONTAINER_ID).unwrap();
        assert!(footer < region);
        assert!(doc.contains("class=\"no-results\""));
    }

    #[test]
    fn test_clear_empties_region_and_input() {
        let mut page = HtmlPage::new("TravelBloom", true);
        page.set_search_value("temple");
        page.draw(&found(&["Angkor Wat"])).unwrap();
        page.clear().unwrap();

        assert_eq!(page.results_html(), Some(""));
        let doc = page.document();
        assert!(doc.contains("name=\"search\" placeholder=\"Enter a destination or keyword\" value=\"\""));
        assert!(!doc.contains("scrollIntoView"));
    }

    #[test]
    fn test_clear_without_search_is_noop() {
        let mut page = HtmlPage::new("TravelBloom", true);
        page.clear().unwrap();
        assert!(page.results_html().is_none());
    }

    #[test]
    fn test_escape_and_fallback_quoting() {
        assert_eq!(
            escape("<b>\"x\" & 'y'</b>"),
            "&lt;b&gt;&quot;x&quot; &amp; &#x27;y&#x27;&lt;&#x2f;b&gt;"
        );

        let mut c = card("Shrine");
        c.fallback_image = "it's.jpg".to_string();
        let html = card_html(&c);
        assert!(html.contains("this.src=&#x27;it\\&#x27;s.jpg&#x27;;"));
    }
}
