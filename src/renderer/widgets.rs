use crate::advice::translations::{text, Text};
use crate::models::DashboardView;
use crate::renderer::colours::Colours;
use crate::renderer::drawing;

pub struct RenderContext<'a> {
    pub view: &'a DashboardView,
    pub lines: &'a mut Vec<String>,
    pub width: usize,
}

pub fn render_header(ctx: &mut RenderContext) {
    let colours = Colours::default();
    let language = ctx.view.language;

    let state = if ctx.view.online {
        drawing::text(colours.muted, language.code())
    } else {
        drawing::text(colours.offline, text(Text::NoConnection, language))
    };

    ctx.lines
        .push(format!("{}  {}", drawing::text(colours.header, &ctx.view.title), state));
    ctx.lines.push(drawing::horizontal_line(ctx.width));
}

pub fn render_gauges(ctx: &mut RenderContext) {
    let colours = Colours::default();
    let gauge_colours = [colours.moisture, colours.humidity, colours.temperature];

    let label_width = ctx
        .view
        .gauges()
        .iter()
        .map(|g| g.label.chars().count())
        .max()
        .unwrap_or(0)
        + 2;
    let value_width = 8;
    let bar_width = ctx.width.saturating_sub(label_width + value_width + 2).max(10);

    for (gauge, colour) in ctx.view.gauges().iter().zip(gauge_colours) {
        ctx.lines.push(format!(
            "{}{} {}  {}",
            drawing::text(colours.text, &drawing::pad_right(&gauge.label, label_width)),
            drawing::pad_right(&gauge.value_display, value_width),
            drawing::progress_bar(bar_width, gauge.percent, colour),
            gauge.status
        ));
    }
}

pub fn render_footer(ctx: &mut RenderContext) {
    let colours = Colours::default();
    let language = ctx.view.language;

    ctx.lines.push(drawing::horizontal_line(ctx.width));
    ctx.lines.push(drawing::text(
        colours.muted,
        &format!(
            "{}: {} | {}: {}",
            text(Text::Device, language),
            ctx.view.device_display,
            text(Text::LastUpdated, language),
            ctx.view.last_updated_display
        ),
    ));
}
