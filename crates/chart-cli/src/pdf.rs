//! PDF document emitter.
//!
//! Takes composed [`Page`]s and serializes them with printpdf. All the
//! band-plan intelligence lives upstream in `lib-plan`; this module only
//! maps panel data coordinates onto page millimeters and issues shapes
//! and text runs.

use anyhow::{Context, Result};
use lib_plan::{Category, Orientation, Page, Panel};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, LineDashPattern, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Rgb,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

// US Letter, in mm.
const LETTER_SHORT: f64 = 215.9;
const LETTER_LONG: f64 = 279.4;

const MARGIN_LEFT: f64 = 22.0;
const MARGIN_RIGHT: f64 = 8.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 8.0;

/// Vertical space between stacked panels; x tick labels live here.
const PANEL_GAP: f64 = 11.0;

const PT_TO_MM: f64 = 0.352_778;

const TICK_LEN: f64 = 1.6;
const TICK_FONT_PT: f64 = 7.0;
const AXIS_FONT_PT: f64 = 9.0;
const TITLE_FONT_PT: f64 = 12.0;

/// Where one panel's plot area sits on the page, in mm from the
/// bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

/// Page dimensions for an orientation.
pub fn page_size(orientation: Orientation) -> (f64, f64) {
    match orientation {
        Orientation::Portrait => (LETTER_SHORT, LETTER_LONG),
        Orientation::Landscape => (LETTER_LONG, LETTER_SHORT),
    }
}

/// Split a page into `count` stacked panel rectangles, top first.
pub fn panel_rects(orientation: Orientation, count: usize) -> Vec<PanelRect> {
    let (page_w, page_h) = page_size(orientation);
    let width = page_w - MARGIN_LEFT - MARGIN_RIGHT;
    let usable = page_h - MARGIN_TOP - MARGIN_BOTTOM - PANEL_GAP * (count - 1) as f64;
    let height = usable / count as f64;

    (0..count)
        .map(|i| PanelRect {
            left: MARGIN_LEFT,
            bottom: page_h - MARGIN_TOP - height * (i + 1) as f64 - PANEL_GAP * i as f64,
            width,
            height,
        })
        .collect()
}

/// Map a panel x coordinate (MHz) to page mm.
pub fn x_to_mm(panel: &Panel, rect: &PanelRect, x: f64) -> f64 {
    let (x0, x1) = panel.x_range;
    rect.left + (x - x0) / (x1 - x0) * rect.width
}

/// Map a panel y coordinate to page mm, unclamped (labels may sit
/// outside the plot area).
pub fn y_to_mm(panel: &Panel, rect: &PanelRect, y: f64) -> f64 {
    let (y0, y1) = panel.y_range;
    rect.bottom + (y - y0) / (y1 - y0) * rect.height
}

/// Map a trace y coordinate to page mm, clamped to the plot area.
/// Off-scale VSWR (including the infinite sentinel) saturates at the
/// panel edge instead of escaping it.
pub fn y_to_mm_clamped(panel: &Panel, rect: &PanelRect, y: f64) -> f64 {
    let (y0, y1) = panel.y_range;
    let norm = ((y - y0) / (y1 - y0)).clamp(0.0, 1.0);
    rect.bottom + norm * rect.height
}

/// Fill color for a segment category (standard CSS named colors, so the
/// output matches the familiar printed chart).
pub fn category_color(category: Category) -> Rgb {
    let (r, g, b) = match category {
        Category::Cw => (1.0, 0.627, 0.478),            // lightsalmon
        Category::Digital => (0.529, 0.808, 0.980),     // lightskyblue
        Category::Phone => (0.196, 0.804, 0.196),       // limegreen
        Category::Television => (0.867, 0.627, 0.867),  // plum
        Category::Beacon => (1.0, 0.894, 0.882),        // mistyrose
        Category::Miscellaneous => (1.0, 0.843, 0.0),   // gold
        Category::Unallocated => (0.502, 0.502, 0.502), // grey
        Category::Overview => (0.0, 0.0, 0.0),          // black
    };
    Rgb::new(r, g, b, None)
}

const TRACE_COLOR: (f64, f64, f64) = (1.0, 0.0, 0.0);

/// Crude Helvetica width estimate for centering; good enough for tick
/// labels and captions.
fn text_width_mm(text: &str, size_pt: f64) -> f64 {
    0.5 * size_pt * PT_TO_MM * text.chars().count() as f64
}

/// Render composed pages into a PDF file.
pub fn render_document(pages: &[Page], output: &Path) -> Result<()> {
    let doc = PdfDocument::empty("Canadian Band Plan with VSWR");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .context("Failed to load builtin Helvetica")?;

    let renderer = PageRenderer { doc, font };

    for (i, page) in pages.iter().enumerate() {
        tracing::debug!("Rendering page {} ({} panels)", i + 1, page.panels.len());
        renderer.render_page(page);
    }

    let file = File::create(output)
        .with_context(|| format!("Failed to create output file {:?}", output))?;
    renderer
        .doc
        .save(&mut BufWriter::new(file))
        .context("Failed to write PDF")?;

    tracing::info!("Wrote {} pages to {:?}", pages.len(), output);
    Ok(())
}

struct PageRenderer {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
}

impl PageRenderer {
    fn render_page(&self, page: &Page) {
        let (page_w, page_h) = page_size(page.orientation);
        let (page_idx, layer_idx) = self
            .doc
            .add_page(Mm(page_w), Mm(page_h), "Chart");
        let layer = self.doc.get_page(page_idx).get_layer(layer_idx);

        let rects = panel_rects(page.orientation, page.panels.len());
        for (panel, rect) in page.panels.iter().zip(&rects) {
            self.render_panel(&layer, panel, rect);
        }
    }

    fn render_panel(&self, layer: &PdfLayerReference, panel: &Panel, rect: &PanelRect) {
        self.draw_bars(layer, panel, rect);
        self.draw_frame(layer, rect);
        self.draw_ticks(layer, panel, rect);
        self.draw_reference_lines(layer, panel, rect);
        self.draw_trace(layer, panel, rect);
        self.draw_labels(layer, panel, rect);
        self.draw_captions(layer, panel, rect);
    }

    fn draw_bars(&self, layer: &PdfLayerReference, panel: &Panel, rect: &PanelRect) {
        for bar in &panel.bars {
            let x0 = x_to_mm(panel, rect, bar.x0);
            let x1 = x_to_mm(panel, rect, bar.x1);
            let y0 = y_to_mm_clamped(panel, rect, bar.y0);
            let y1 = y_to_mm_clamped(panel, rect, bar.y0 + bar.height);

            layer.set_fill_color(Color::Rgb(category_color(bar.category)));
            layer.add_shape(filled_rect(x0, y0, x1, y1));
        }
    }

    fn draw_frame(&self, layer: &PdfLayerReference, rect: &PanelRect) {
        layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        layer.set_outline_thickness(0.75);
        layer.add_shape(stroked_rect(
            rect.left,
            rect.bottom,
            rect.left + rect.width,
            rect.bottom + rect.height,
        ));
    }

    fn draw_ticks(&self, layer: &PdfLayerReference, panel: &Panel, rect: &PanelRect) {
        layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        layer.set_outline_thickness(0.5);
        layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));

        for tick in &panel.x_ticks {
            let x = x_to_mm(panel, rect, tick.value);
            layer.add_shape(line_segment(x, rect.bottom, x, rect.bottom - TICK_LEN));
            layer.use_text(
                tick.label.clone(),
                TICK_FONT_PT,
                Mm(x - text_width_mm(&tick.label, TICK_FONT_PT) / 2.0),
                Mm(rect.bottom - TICK_LEN - 3.0),
                &self.font,
            );
        }

        for tick in &panel.y_ticks {
            let y = y_to_mm(panel, rect, tick.value);
            layer.add_shape(line_segment(rect.left, y, rect.left - TICK_LEN, y));
            layer.use_text(
                tick.label.clone(),
                TICK_FONT_PT,
                Mm(rect.left - TICK_LEN - 1.0 - text_width_mm(&tick.label, TICK_FONT_PT)),
                Mm(y - 1.0),
                &self.font,
            );
        }
    }

    fn draw_reference_lines(&self, layer: &PdfLayerReference, panel: &Panel, rect: &PanelRect) {
        layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        layer.set_outline_thickness(0.4);
        layer.set_line_dash_pattern(LineDashPattern {
            dash_1: Some(2),
            gap_1: Some(2),
            ..LineDashPattern::default()
        });

        for &v in &panel.reference_lines {
            let y = y_to_mm(panel, rect, v);
            layer.add_shape(line_segment(rect.left, y, rect.left + rect.width, y));
        }

        layer.set_line_dash_pattern(LineDashPattern::default());
    }

    fn draw_trace(&self, layer: &PdfLayerReference, panel: &Panel, rect: &PanelRect) {
        if panel.trace.len() < 2 {
            return;
        }

        let (r, g, b) = TRACE_COLOR;
        layer.set_outline_color(Color::Rgb(Rgb::new(r, g, b, None)));
        layer.set_outline_thickness(1.0);

        let points: Vec<(Point, bool)> = panel
            .trace
            .iter()
            .filter(|(_, v)| !v.is_nan())
            .map(|&(f, v)| {
                let x = x_to_mm(panel, rect, f);
                let y = y_to_mm_clamped(panel, rect, v);
                (Point::new(Mm(x), Mm(y)), false)
            })
            .collect();

        if points.len() < 2 {
            return;
        }

        layer.add_shape(Line {
            points,
            is_closed: false,
            has_fill: false,
            has_stroke: true,
            is_clipping_path: false,
        });
    }

    fn draw_labels(&self, layer: &PdfLayerReference, panel: &Panel, rect: &PanelRect) {
        layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        for label in &panel.labels {
            layer.use_text(
                label.text.clone(),
                label.size,
                Mm(x_to_mm(panel, rect, label.x)),
                Mm(y_to_mm(panel, rect, label.y)),
                &self.font,
            );
        }
    }

    fn draw_captions(&self, layer: &PdfLayerReference, panel: &Panel, rect: &PanelRect) {
        layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));

        if let Some(title) = &panel.title {
            layer.use_text(
                title.clone(),
                TITLE_FONT_PT,
                Mm(rect.left + rect.width / 2.0 - text_width_mm(title, TITLE_FONT_PT) / 2.0),
                Mm(rect.bottom + rect.height + 2.0),
                &self.font,
            );
        }

        // Y-axis caption to the left of the tick labels.
        layer.use_text(
            panel.y_label,
            AXIS_FONT_PT,
            Mm(rect.left - MARGIN_LEFT + 1.0),
            Mm(rect.bottom + rect.height / 2.0),
            &self.font,
        );

        if let Some(x_label) = panel.x_label {
            layer.use_text(
                x_label,
                AXIS_FONT_PT,
                Mm(rect.left + rect.width / 2.0 - text_width_mm(x_label, AXIS_FONT_PT) / 2.0),
                Mm(rect.bottom - TICK_LEN - 7.0),
                &self.font,
            );
        }
    }
}

fn filled_rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Line {
    Line {
        points: vec![
            (Point::new(Mm(x0), Mm(y0)), false),
            (Point::new(Mm(x1), Mm(y0)), false),
            (Point::new(Mm(x1), Mm(y1)), false),
            (Point::new(Mm(x0), Mm(y1)), false),
        ],
        is_closed: true,
        has_fill: true,
        has_stroke: false,
        is_clipping_path: false,
    }
}

fn stroked_rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Line {
    Line {
        points: vec![
            (Point::new(Mm(x0), Mm(y0)), false),
            (Point::new(Mm(x1), Mm(y0)), false),
            (Point::new(Mm(x1), Mm(y1)), false),
            (Point::new(Mm(x0), Mm(y1)), false),
        ],
        is_closed: true,
        has_fill: false,
        has_stroke: true,
        is_clipping_path: false,
    }
}

fn line_segment(x0: f64, y0: f64, x1: f64, y1: f64) -> Line {
    Line {
        points: vec![
            (Point::new(Mm(x0), Mm(y0)), false),
            (Point::new(Mm(x1), Mm(y1)), false),
        ],
        is_closed: false,
        has_fill: false,
        has_stroke: true,
        is_clipping_path: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lib_plan::{compose_pages, layout_panel, ALL_BANDS};
    use lib_types::VswrCurve;

    #[test]
    fn test_panel_rects_stack_without_overlap() {
        for (orientation, count) in [
            (Orientation::Portrait, 8),
            (Orientation::Portrait, 7),
            (Orientation::Landscape, 2),
        ] {
            let rects = panel_rects(orientation, count);
            let (_, page_h) = page_size(orientation);

            assert_eq!(rects.len(), count);
            for rect in &rects {
                assert!(rect.bottom >= MARGIN_BOTTOM - 1e-9);
                assert!(rect.bottom + rect.height <= page_h - MARGIN_TOP + 1e-9);
                assert!(rect.height > 10.0, "panels must stay usable");
            }
            for pair in rects.windows(2) {
                // Top-first ordering with a gap between consecutive panels.
                assert_relative_eq!(
                    pair[0].bottom - PANEL_GAP,
                    pair[1].bottom + pair[1].height,
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_x_mapping_spans_the_rect() {
        let band = ALL_BANDS[2]; // 160 m
        let panel = layout_panel(band, &VswrCurve::default());
        let rect = panel_rects(Orientation::Portrait, 8)[0];

        assert_relative_eq!(x_to_mm(&panel, &rect, band.domain.0), rect.left);
        assert_relative_eq!(
            x_to_mm(&panel, &rect, band.domain.1),
            rect.left + rect.width
        );
    }

    #[test]
    fn test_infinite_vswr_clamps_to_the_panel_top() {
        let band = ALL_BANDS[2];
        let panel = layout_panel(band, &VswrCurve::default());
        let rect = panel_rects(Orientation::Portrait, 8)[0];

        let top = rect.bottom + rect.height;
        assert_relative_eq!(y_to_mm_clamped(&panel, &rect, f64::INFINITY), top);
        assert_relative_eq!(y_to_mm_clamped(&panel, &rect, -40.0), rect.bottom);

        // In-range values are unaffected by the clamp.
        assert_relative_eq!(
            y_to_mm_clamped(&panel, &rect, 3.0),
            y_to_mm(&panel, &rect, 3.0)
        );
    }

    #[test]
    fn test_labels_may_map_below_the_plot_area() {
        // Overview band names sit under the axis; the unclamped mapping
        // must let them.
        let overview = ALL_BANDS[15];
        let panel = layout_panel(overview, &VswrCurve::default());
        let rect = panel_rects(Orientation::Landscape, 2)[0];

        assert!(y_to_mm(&panel, &rect, -1.0) < rect.bottom);
    }

    #[test]
    fn test_every_category_has_a_distinct_color() {
        let cats = [
            Category::Cw,
            Category::Digital,
            Category::Phone,
            Category::Television,
            Category::Beacon,
            Category::Miscellaneous,
            Category::Unallocated,
            Category::Overview,
        ];
        for (i, a) in cats.iter().enumerate() {
            for b in &cats[i + 1..] {
                let ca = category_color(*a);
                let cb = category_color(*b);
                assert!(
                    (ca.r, ca.g, ca.b) != (cb.r, cb.g, cb.b),
                    "{:?} and {:?} share a color",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_full_document_geometry_is_consistent() {
        // Every page's panel count has a rect layout that fits its page.
        let pages = compose_pages(&VswrCurve::default());
        for page in &pages {
            let rects = panel_rects(page.orientation, page.panels.len());
            assert_eq!(rects.len(), page.panels.len());
        }
    }
}
