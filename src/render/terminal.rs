use crate::core::ResultsSurface;
use crate::render::view::ResultsView;
use crate::utils::error::Result;
use std::io::Write;

/// Prints results as plain text blocks.
pub struct TerminalSurface<W: Write> {
    out: W,
    shown: Option<ResultsView>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, shown: None }
    }

    /// The view currently on screen, if any.
    pub fn shown(&self) -> Option<&ResultsView> {
        self.shown.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultsSurface for TerminalSurface<W> {
    fn draw(&mut self, view: &ResultsView) -> Result<()> {
        if self.shown.as_ref() == Some(view) {
            tracing::debug!("Results unchanged, skipping redraw");
            return Ok(());
        }

        match view {
            ResultsView::NoResults { message } => {
                writeln!(self.out, "{}", message)?;
            }
            ResultsView::Found { title, cards } => {
                writeln!(self.out, "{}", title)?;
                writeln!(self.out, "{}", "=".repeat(title.len()))?;
                for card in cards {
                    writeln!(self.out)?;
                    writeln!(self.out, "[{}] {}", card.kind, card.name)?;
                    writeln!(self.out, "    {}", card.description)?;
                    writeln!(
                        self.out,
                        "    image: {} (fallback: {})",
                        card.image_url, card.fallback_image
                    )?;
                    writeln!(self.out, "    [ Visit ]")?;
                }
            }
        }
        self.out.flush()?;

        self.shown = Some(view.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.shown = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Kind;
    use crate::render::view::Card;

    fn view() -> ResultsView {
        ResultsView::Found {
            title: "Found 1 Recommendation".to_string(),
            cards: vec![Card {
                kind: Kind::Beach,
                name: "Bondi Beach".to_string(),
                description: "Surf and sand".to_string(),
                image_url: "bondi.jpg".to_string(),
                fallback_image: "fallback.jpg".to_string(),
            }],
        }
    }

    #[test]
    fn test_draw_prints_header_and_card() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.draw(&view()).unwrap();

        let text = String::from_utf8(surface.into_inner()).unwrap();
        assert!(text.starts_with("Found 1 Recommendation\n"));
        assert!(text.contains("[beach] Bondi Beach"));
        assert!(text.contains("image: bondi.jpg (fallback: fallback.jpg)"));
        assert!(text.contains("[ Visit ]"));
    }

    #[test]
    fn test_same_view_twice_prints_once() {
        let mut once = TerminalSurface::new(Vec::new());
        once.draw(&view()).unwrap();

        let mut twice = TerminalSurface::new(Vec::new());
        twice.draw(&view()).unwrap();
        twice.draw(&view()).unwrap();

        assert_eq!(once.shown(), twice.shown());
        assert_eq!(once.into_inner(), twice.into_inner());
    }

    #[test]
    fn test_clear_forgets_view() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.draw(&ResultsView::empty()).unwrap();
        surface.clear().unwrap();
        assert!(surface.shown().is_none());
    }
}
