use super::*;

/// Draws the tour over light graph edges with ordered labels, legend and cost title.
pub(crate) fn draw_tour_panel<B>(panel: &DrawingArea<B, Shift>, context: &FigureContext) -> DrawResult<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let style = context.style;
    let (title_area, body) = split_panel(panel, style);

    if let Some(title) = context.title.as_ref() {
        draw_title(&title_area, title, style)?;
    }

    let (body_width, _) = body.dim_in_pixel();
    let legend_width = get_legend_width(&context.legend_lines, style).min(body_width / 2);
    let (plot_area, legend_area) = body.split_horizontally((body_width - legend_width) as i32);

    let (mut chart, bounds) = build_panel_chart(&plot_area, context)?;

    if let Some(layer) = context.basemap.as_ref() {
        draw_basemap(&chart, &bounds, layer, &context.logger)?;
    }

    let edges = context.graph.edges.iter().map(|edge| (edge.from, edge.to));
    draw_edges(&mut chart, context, edges, style.background_edge_color.stroke_width(1))?;

    let tour_style = style.tour_edge_color.stroke_width(style.tour_edge_width);
    draw_edges(&mut chart, context, context.tour_legs.iter().copied(), tour_style)?;

    draw_nodes(&mut chart, context, |node| if Some(node) == context.start { style.start_color } else { style.node_color })?;

    let center = Pos::new(HPos::Center, VPos::Center);
    let labels = context.ordered_labels.iter().map(|ordered| (ordered.node, ordered.label.as_str()));
    draw_labels(&mut chart, context, labels, create_text_style(style, style.order_font_size, FontStyle::Bold, center))?;

    if !context.legend_lines.is_empty() {
        draw_legend(&legend_area, &context.legend_lines, style)?;
    }

    Ok(())
}
