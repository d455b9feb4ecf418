use super::*;

const GRAPH_TITLE: &str = "Full Graph";

/// Draws full graph with node names and, without basemap, edge weights.
pub(crate) fn draw_graph_panel<B>(panel: &DrawingArea<B, Shift>, context: &FigureContext) -> DrawResult<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let style = context.style;
    let (title_area, body) = split_panel(panel, style);

    draw_title(&title_area, GRAPH_TITLE, style)?;

    let (mut chart, bounds) = build_panel_chart(&body, context)?;

    if let Some(layer) = context.basemap.as_ref() {
        draw_basemap(&chart, &bounds, layer, &context.logger)?;
    }

    let edges = context.graph.edges.iter().map(|edge| (edge.from, edge.to));
    draw_edges(&mut chart, context, edges, style.graph_edge_color.stroke_width(1))?;

    draw_nodes(&mut chart, context, |_| style.node_color)?;

    let center = Pos::new(HPos::Center, VPos::Center);
    let names = context.graph.nodes.iter().filter_map(|node| context.names.get(node).map(|name| (*node, name.as_str())));
    draw_labels(&mut chart, context, names, create_text_style(style, style.name_font_size, FontStyle::Normal, center))?;

    draw_edge_labels(&mut chart, context)?;

    Ok(())
}

fn draw_edge_labels<B>(chart: &mut PanelChart<B>, context: &FigureContext) -> DrawResult<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let style = context.style;
    let text_style =
        create_text_style(style, style.edge_label_font_size, FontStyle::Normal, Pos::new(HPos::Center, VPos::Center));

    chart.draw_series(context.edge_labels.iter().filter_map(|(from, to, label)| {
        let (x1, y1) = context.positions.get(from)?;
        let (x2, y2) = context.positions.get(to)?;

        Some(Text::new(label.clone(), ((x1 + x2) / 2., (y1 + y2) / 2.), text_style.clone()))
    }))?;

    Ok(())
}
