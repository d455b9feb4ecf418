use super::*;

const LEGEND_PADDING: u32 = 10;
const LEGEND_GAP: u32 = 10;

/// Returns width of the legend column including gap to the plot.
pub(crate) fn get_legend_width(lines: &[String], style: &FigureStyle) -> u32 {
    lines
        .iter()
        .map(|line| estimate_text_width(line, style.legend_font_size))
        .max()
        .map_or(0, |width| width + 2 * LEGEND_PADDING + 2 * LEGEND_GAP)
}

/// Draws a legend box vertically centered in the area.
pub(crate) fn draw_legend<B>(area: &DrawingArea<B, Shift>, lines: &[String], style: &FigureStyle) -> DrawResult<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let (width, height) = area.dim_in_pixel();
    let line_height = (style.legend_font_size as f64 * 1.4).ceil() as i32;
    let box_height = line_height * lines.len() as i32 + 2 * LEGEND_PADDING as i32;

    let left = LEGEND_GAP as i32;
    let right = width as i32 - LEGEND_GAP as i32;
    let top = (height as i32 - box_height) / 2;
    let bottom = top + box_height;

    area.draw(&Rectangle::new([(left, top), (right, bottom)], WHITE.mix(0.8).filled()))?;
    area.draw(&Rectangle::new([(left, top), (right, bottom)], BLACK.mix(0.3).stroke_width(1)))?;

    let text_style = create_text_style(style, style.legend_font_size, FontStyle::Normal, Pos::new(HPos::Left, VPos::Top));
    let text_left = left + LEGEND_PADDING as i32;
    let text_top = top + LEGEND_PADDING as i32;

    lines.iter().enumerate().try_for_each(|(idx, line)| {
        area.draw(&Text::new(line.clone(), (text_left, text_top + idx as i32 * line_height), text_style.clone()))
    })?;

    Ok(())
}
