pub mod html;
pub mod terminal;
pub mod view;

pub use html::HtmlPage;
pub use terminal::TerminalSurface;
pub use view::{Card, ResultsView};
