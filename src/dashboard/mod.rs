use crate::models::DashboardView;
use crate::renderer::widgets;

/// Composes the terminal screen for `view`, `width` columns wide.
pub fn create_screen(view: &DashboardView, width: usize) -> String {
    let mut lines = Vec::new();

    let mut ctx = widgets::RenderContext {
        view,
        lines: &mut lines,
        width,
    };
    widgets::render_header(&mut ctx);
    widgets::render_gauges(&mut ctx);
    widgets::render_footer(&mut ctx);

    lines.join("\n")
}
