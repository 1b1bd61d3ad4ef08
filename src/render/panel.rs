//! Expandable panel state
//!
//! Each page view owns one `Panel` per caregiving category. The server
//! renders the authoritative initial state; the shipped script replays the
//! same open/close transition in the browser (see `PANEL_SCRIPT` in `page`).

use super::html::HtmlBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Open,
    Closed,
}

impl PanelState {
    /// The only transition: Open <-> Closed.
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// One independently collapsible section. Panels never affect each other;
/// any number may be open at once.
#[derive(Debug, Clone)]
pub struct Panel {
    pub title: String,
    pub state: PanelState,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_state(title, PanelState::Open)
    }

    pub fn with_state(title: impl Into<String>, state: PanelState) -> Self {
        Self {
            title: title.into(),
            state,
        }
    }

    pub fn toggle(&mut self) {
        self.state = self.state.toggled();
    }
}

/// Emit one panel. The body is out of layout entirely while closed; the
/// chevron and `aria-expanded` mirror the state for the client script.
pub fn render_panel(html: &mut HtmlBuilder, panel: &Panel, body: &str) {
    let open = panel.state.is_open();
    html.raw("<div class=\"panel\" data-panel>");
    html.raw(&format!(
        "<button type=\"button\" class=\"panel-toggle\" data-panel-toggle aria-expanded=\"{open}\">"
    ));
    html.raw("<span class=\"panel-title\">")
        .text(&panel.title)
        .raw("</span>");
    html.raw(&format!(
        "<img class=\"chevron{}\" data-panel-chevron src=\"/assets/icons/chevron.png\" alt=\"{}\">",
        if open { "" } else { " rotated" },
        if open { "Arrow up" } else { "Arrow down" },
    ));
    html.raw("</button>");
    if open {
        html.raw("<div class=\"panel-body\" data-panel-body>");
    } else {
        html.raw("<div class=\"panel-body\" data-panel-body hidden>");
    }
    html.raw(body);
    html.raw("</div></div>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_default_open() {
        assert!(Panel::new("Baby Care").state.is_open());
    }

    #[test]
    fn toggle_flips_state() {
        let mut panel = Panel::new("Baby Care");
        panel.toggle();
        assert_eq!(panel.state, PanelState::Closed);
        panel.toggle();
        assert_eq!(panel.state, PanelState::Open);
    }

    #[test]
    fn full_cycle_restores_rendered_structure() {
        let render = |panel: &Panel| {
            let mut html = HtmlBuilder::new();
            render_panel(&mut html, panel, "<p>body</p>");
            html.finish()
        };

        let mut panel = Panel::with_state("Elderly Care", PanelState::Closed);
        let before = render(&panel);
        panel.toggle();
        panel.toggle();
        assert_eq!(render(&panel), before);
    }

    #[test]
    fn panels_toggle_independently() {
        let mut a = Panel::new("Baby Care");
        let b = Panel::new("Elderly Care");
        a.toggle();
        assert_eq!(a.state, PanelState::Closed);
        assert_eq!(b.state, PanelState::Open);
    }

    #[test]
    fn closed_body_is_out_of_layout() {
        let mut html = HtmlBuilder::new();
        render_panel(
            &mut html,
            &Panel::with_state("Household Chores", PanelState::Closed),
            "",
        );
        let markup = html.finish();
        assert!(markup.contains("hidden"));
        assert!(markup.contains("aria-expanded=\"false\""));
        assert!(markup.contains("chevron rotated"));
    }
}
