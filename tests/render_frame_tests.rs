//! End-to-end frame rendering tests
//!
//! Drives `GridRenderer::render_frame` against a probe table and a recording
//! surface, then checks draw order, geometry, culling and scroll write-back
//! on the recorded trace.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{body_commands, label_index, label_rect, labels, regions, ProbeTable};
use scrollgrid::error::GridError;
use scrollgrid::render::{DrawCommand, GridPalette, GridRenderer, RecordingSurface};
use scrollgrid::types::{HostMetrics, Rect, RenderPass, ScrollOffset, ViewportRequest};
use test_case::test_case;

fn renderer() -> GridRenderer {
    GridRenderer::new(HostMetrics::for_screen(1920.0, 1080.0)).unwrap()
}

fn repaint(table: &mut ProbeTable, surface: &mut RecordingSurface) -> scrollgrid::render::FrameStats {
    renderer()
        .render_frame(
            RenderPass::Repaint,
            &ViewportRequest::at(0.0, 0.0),
            table,
            surface,
        )
        .unwrap()
}

// ============================================================================
// Draw order
// ============================================================================

#[test]
fn test_single_row_draw_order() {
    let mut table = ProbeTable::new(&[100.0, 50.0], &[30.0], 30.0);
    let mut surface = RecordingSurface::new();
    repaint(&mut table, &mut surface);

    let cmds = surface.commands();
    assert_eq!(cmds.len(), 9, "trace: {cmds:#?}");
    assert!(matches!(cmds[0], DrawCommand::BeginScrollRegion { allow_vertical: false, .. }));
    assert_eq!(labels(&cmds[1..3]), vec!["h0", "h1"]);
    assert_eq!(cmds[3], DrawCommand::EndScrollRegion);
    assert!(matches!(cmds[4], DrawCommand::BeginScrollRegion { allow_vertical: true, .. }));
    assert!(matches!(cmds[5], DrawCommand::LineHorizontal { y, .. } if y == 0.0));
    assert_eq!(labels(&cmds[6..8]), vec!["r0c0", "r0c1"]);
    assert_eq!(cmds[8], DrawCommand::EndScrollRegion);
    assert_eq!(surface.open_regions(), 0);
}

#[test]
fn test_rows_draw_top_to_bottom_and_cells_left_to_right() {
    let mut table = ProbeTable::uniform(3, 80.0, 4, 25.0);
    let mut surface = RecordingSurface::new();
    repaint(&mut table, &mut surface);

    let body = labels(body_commands(surface.commands()));
    let expected: Vec<String> = (0..4)
        .flat_map(|r| (0..3).map(move |c| format!("r{r}c{c}")))
        .collect();
    assert_eq!(body, expected);
}

#[test]
fn test_separator_uses_palette_and_spans_view_width() {
    let mut table = ProbeTable::new(&[100.0, 60.0], &[30.0, 30.0], 30.0);
    let mut surface = RecordingSurface::new();
    repaint(&mut table, &mut surface);

    let separators: Vec<_> = body_commands(surface.commands())
        .iter()
        .filter_map(|c| match c {
            DrawCommand::LineHorizontal {
                x,
                y,
                length,
                color,
            } => Some((*x, *y, *length, *color)),
            _ => None,
        })
        .collect();
    let sep = GridPalette::default().separator;
    assert_eq!(separators, vec![(0.0, 0.0, 160.0, sep), (0.0, 30.0, 160.0, sep)]);
}

#[test]
fn test_hover_highlight_between_separator_and_cells() {
    let mut table = ProbeTable::uniform(2, 100.0, 3, 30.0);
    let mut surface = RecordingSurface::new();
    // Anchor (10, 20), header 30: row 1 spans screen y 80..110.
    surface.set_pointer(15.0, 85.0);
    renderer()
        .render_frame(
            RenderPass::Repaint,
            &ViewportRequest::at(10.0, 20.0),
            &mut table,
            &mut surface,
        )
        .unwrap();

    let cmds = surface.commands();
    let highlights: Vec<(usize, Rect)> = cmds
        .iter()
        .enumerate()
        .filter_map(|(i, c)| match c {
            DrawCommand::Highlight { rect } => Some((i, *rect)),
            _ => None,
        })
        .collect();
    assert_eq!(highlights.len(), 1);
    let (at, rect) = highlights[0];
    assert_eq!(rect, Rect::new(0.0, 30.0, 200.0, 30.0));
    assert!(matches!(cmds[at - 1], DrawCommand::LineHorizontal { y, .. } if y == 30.0));
    assert_eq!(label_index(cmds, "r1c0"), at + 1);
}

#[test]
fn test_pointer_over_header_highlights_no_row() {
    let mut table = ProbeTable::uniform(2, 100.0, 3, 30.0);
    let mut surface = RecordingSurface::new();
    surface.set_pointer(5.0, 10.0);
    repaint(&mut table, &mut surface);
    assert!(!surface
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::Highlight { .. })));
}

#[test]
fn test_downed_overlay_drawn_after_cells() {
    let mut table = ProbeTable::uniform(2, 100.0, 3, 30.0);
    table.rows[1].downed = true;
    let mut surface = RecordingSurface::new();
    repaint(&mut table, &mut surface);

    let cmds = surface.commands();
    let downed = GridPalette::default().downed;
    let overlays: Vec<(usize, f32, f32)> = cmds
        .iter()
        .enumerate()
        .filter_map(|(i, c)| match c {
            DrawCommand::LineHorizontal {
                y, length, color, ..
            } if *color == downed => Some((i, *y, *length)),
            _ => None,
        })
        .collect();
    assert_eq!(overlays, vec![(label_index(cmds, "r1c1") + 1, 45.0, 200.0)]);
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn test_last_column_stretches_to_view_width() {
    let mut table = ProbeTable::new(&[100.0, 150.0, 200.0], &[30.0], 30.0);
    // Natural width 496 -> view width 480.
    table.layout.size.width = 496.0;
    let mut surface = RecordingSurface::new();
    repaint(&mut table, &mut surface);

    let cmds = surface.commands();
    let spans: Vec<(f32, f32)> = ["r0c0", "r0c1", "r0c2"]
        .iter()
        .map(|t| {
            let r = label_rect(cmds, t);
            (r.x, r.width)
        })
        .collect();
    assert_eq!(spans, vec![(0.0, 100.0), (100.0, 150.0), (250.0, 230.0)]);
}

#[test]
fn test_fractional_widths_are_truncated() {
    let mut table = ProbeTable::new(&[100.7, 50.9, 80.0], &[30.6], 30.0);
    let mut surface = RecordingSurface::new();
    repaint(&mut table, &mut surface);

    let cmds = surface.commands();
    assert_eq!(label_rect(cmds, "r0c0"), Rect::new(0.0, 0.0, 100.0, 30.0));
    assert_eq!(label_rect(cmds, "r0c1"), Rect::new(100.0, 0.0, 50.0, 30.0));
    // view width 231.6 - 150 = 81.6 -> 81
    assert_eq!(label_rect(cmds, "r0c2").width, 81.0);
}

#[test]
fn test_header_and_body_columns_align() {
    let mut table = ProbeTable::new(&[64.0, 120.0, 33.0, 90.0], &[28.0; 5], 40.0);
    let mut surface = RecordingSurface::new();
    repaint(&mut table, &mut surface);

    let cmds = surface.commands();
    for c in 0..4 {
        let header = label_rect(cmds, &format!("h{c}"));
        assert_eq!(header.y, 0.0);
        assert_eq!(header.height, 40.0);
        for r in 0..5 {
            let cell = label_rect(cmds, &format!("r{r}c{c}"));
            assert_eq!((cell.x, cell.width), (header.x, header.width), "column {c} row {r}");
        }
    }
}

#[test]
fn test_header_tracks_body_horizontal_offset_only() {
    let mut table = ProbeTable::uniform(4, 100.0, 40, 30.0).with_scroll(40.0, 200.0);
    let mut surface = RecordingSurface::new();
    repaint(&mut table, &mut surface);

    let regions = regions(surface.commands());
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].2, ScrollOffset::new(40.0, 0.0));
    assert_eq!(regions[1].2, ScrollOffset::new(40.0, 200.0));
}

#[test]
fn test_regions_stack_under_anchor() {
    let mut table = ProbeTable::uniform(2, 100.0, 5, 30.0);
    let mut surface = RecordingSurface::new();
    renderer()
        .render_frame(
            RenderPass::Repaint,
            &ViewportRequest::at(50.0, 70.0),
            &mut table,
            &mut surface,
        )
        .unwrap();

    let regions = regions(surface.commands());
    // natural 216 x 180, view width 200
    assert_eq!(regions[0].0, Rect::new(50.0, 70.0, 216.0, 30.0));
    assert_eq!(regions[0].1, Rect::new(0.0, 0.0, 200.0, 30.0));
    assert_eq!(regions[1].0, Rect::new(50.0, 100.0, 216.0, 150.0));
    assert_eq!(regions[1].1, Rect::new(0.0, 0.0, 200.0, 150.0));
}

#[test]
fn test_body_grows_for_horizontal_scrollbar() {
    // Natural width 1016 on an 800 wide screen: out 764, view 1000.
    let mut table = ProbeTable::uniform(10, 100.0, 5, 30.0);
    let mut surface = RecordingSurface::new();
    let stats = GridRenderer::new(HostMetrics::for_screen(800.0, 600.0))
        .unwrap()
        .render_frame(
            RenderPass::Repaint,
            &ViewportRequest::at(0.0, 0.0),
            &mut table,
            &mut surface,
        )
        .unwrap();

    assert!(stats.scrollbar_expanded);
    let regions = regions(surface.commands());
    assert_eq!(regions[0].0.width, 764.0);
    assert_eq!(regions[1].0.height, 150.0 + 16.0);
    assert_eq!(regions[1].1.height, 150.0);
}

#[test]
fn test_screen_override_on_request() {
    let mut table = ProbeTable::uniform(10, 100.0, 5, 30.0);
    let mut surface = RecordingSurface::new();
    renderer()
        .render_frame(
            RenderPass::Repaint,
            &ViewportRequest::at(0.0, 0.0).with_screen(500.0, 400.0),
            &mut table,
            &mut surface,
        )
        .unwrap();
    assert_eq!(regions(surface.commands())[0].0.width, 464.0);
}

#[test]
fn test_longer_width_cache_stretches_last_drawn_column() {
    let mut table = ProbeTable::new(&[100.0, 100.0, 100.0], &[30.0], 30.0);
    table.columns.truncate(2);
    let mut surface = RecordingSurface::new();
    let stats = repaint(&mut table, &mut surface);

    assert_eq!(stats.columns, 2);
    let cmds = surface.commands();
    assert_eq!(label_rect(cmds, "r0c1"), Rect::new(100.0, 0.0, 200.0, 30.0));
}

// ============================================================================
// Culling
// ============================================================================

fn culling_table() -> ProbeTable {
    let mut heights = vec![50.0; 10];
    heights.extend(std::iter::repeat(40.0).take(20));
    // header 20 + body clip 300
    ProbeTable::new(&[100.0], &heights, 20.0)
        .with_max_height(320.0)
        .with_scroll(0.0, 550.0)
}

#[test]
fn test_row_above_clip_is_culled() {
    let mut table = culling_table();
    let mut surface = RecordingSurface::new();
    let stats = repaint(&mut table, &mut surface);

    let drawn = labels(body_commands(surface.commands()));
    // Row 10 sits at 500..540 against offset 550.
    assert!(!drawn.contains(&"r10c0".to_string()));
    assert_eq!(drawn.first().map(String::as_str), Some("r11c0"));
    assert_eq!(drawn.last().map(String::as_str), Some("r18c0"));
    assert_eq!(stats.rows_drawn, 8);
    assert_eq!(stats.rows_culled, 22);
}

#[test]
fn test_culled_rows_keep_later_positions() {
    let mut table = culling_table();
    let mut surface = RecordingSurface::new();
    repaint(&mut table, &mut surface);
    assert_eq!(label_rect(surface.commands(), "r11c0").y, 540.0);
    assert_eq!(label_rect(surface.commands(), "r18c0").y, 820.0);
}

#[test_case(0.0 ; "top")]
#[test_case(45.0 ; "mid row")]
#[test_case(1234.0 ; "deep")]
#[test_case(5000.0 ; "past the end")]
fn test_drawn_rows_touch_the_clip(scroll_y: f32) {
    let mut table = ProbeTable::uniform(1, 100.0, 100, 30.0)
        .with_max_height(330.0)
        .with_scroll(0.0, scroll_y);
    let mut surface = RecordingSurface::new();
    let stats = repaint(&mut table, &mut surface);

    let clip_height = 300.0;
    for text in labels(body_commands(surface.commands())) {
        let rect = label_rect(surface.commands(), &text);
        assert!(rect.y - scroll_y + rect.height >= 0.0, "{text} above clip");
        assert!(rect.y - scroll_y <= clip_height, "{text} below clip");
    }
    assert_eq!(stats.rows_drawn + stats.rows_culled, 100);
}

// ============================================================================
// Passes, scroll write-back and failures
// ============================================================================

#[test]
fn test_layout_pass_does_nothing() {
    let mut table = ProbeTable::uniform(3, 100.0, 10, 30.0).with_scroll(5.0, 25.0);
    let mut surface = RecordingSurface::new();
    surface.drag_by(0.0, 100.0);
    let stats = renderer()
        .render_frame(
            RenderPass::Layout,
            &ViewportRequest::at(0.0, 0.0),
            &mut table,
            &mut surface,
        )
        .unwrap();

    assert!(stats.skipped);
    assert!(surface.commands().is_empty());
    assert_eq!(table.recaches, 0);
    assert_eq!(table.scroll_writes, 0);
    assert_eq!(table.scroll, ScrollOffset::new(5.0, 25.0));
}

#[test]
fn test_recache_once_per_repaint() {
    let mut table = ProbeTable::uniform(1, 100.0, 1, 30.0);
    let mut surface = RecordingSurface::new();
    repaint(&mut table, &mut surface);
    repaint(&mut table, &mut surface);
    assert_eq!(table.recaches, 2);
}

#[test]
fn test_repeated_frames_are_identical() {
    let mut table = ProbeTable::uniform(3, 90.0, 50, 24.0)
        .with_max_height(400.0)
        .with_scroll(0.0, 333.0);
    let mut surface = RecordingSurface::new();
    let first_stats = repaint(&mut table, &mut surface);
    let first = surface.take_commands();
    let second_stats = repaint(&mut table, &mut surface);

    assert_eq!(first, surface.commands());
    assert_eq!(first_stats, second_stats);
    assert_eq!(table.scroll, ScrollOffset::new(0.0, 333.0));
}

#[test]
fn test_drag_is_written_back_and_used_for_culling() {
    let mut table = ProbeTable::uniform(2, 100.0, 20, 30.0).with_max_height(330.0);
    let mut surface = RecordingSurface::new();
    surface.drag_by(0.0, 60.0);
    repaint(&mut table, &mut surface);

    assert_eq!(table.scroll, ScrollOffset::new(0.0, 60.0));
    assert_eq!(table.scroll_writes, 1);
    let drawn = labels(body_commands(surface.commands()));
    assert!(!drawn.contains(&"r0c0".to_string()));
    assert_eq!(drawn.first().map(String::as_str), Some("r1c0"));
    // The header saw the pre-drag offset.
    assert_eq!(regions(surface.commands())[0].2, ScrollOffset::ZERO);
}

#[test]
fn test_failing_cell_closes_region_and_keeps_scroll() {
    let mut table = ProbeTable::uniform(3, 100.0, 5, 30.0)
        .with_scroll(0.0, 10.0)
        .failing_on(1, 2);
    let mut surface = RecordingSurface::new();
    surface.drag_by(0.0, 20.0);
    let err = renderer()
        .render_frame(
            RenderPass::Repaint,
            &ViewportRequest::at(0.0, 0.0),
            &mut table,
            &mut surface,
        )
        .unwrap_err();

    assert!(matches!(err, GridError::Draw(_)));
    assert_eq!(surface.open_regions(), 0);
    assert_eq!(surface.commands().last(), Some(&DrawCommand::EndScrollRegion));
    assert_eq!(table.scroll, ScrollOffset::new(0.0, 10.0));
    assert_eq!(table.scroll_writes, 0);

    let drawn = labels(surface.commands());
    assert!(drawn.contains(&"r2c0".to_string()));
    assert!(!drawn.contains(&"r2c2".to_string()));
}

// ============================================================================
// Degenerate tables
// ============================================================================

#[test]
fn test_no_columns_draws_separators_only() {
    let mut table = ProbeTable::new(&[], &[30.0, 30.0], 30.0);
    let mut surface = RecordingSurface::new();
    let stats = repaint(&mut table, &mut surface);

    assert_eq!(stats.columns, 0);
    assert_eq!(stats.rows_drawn, 2);
    assert!(labels(surface.commands()).is_empty());
    assert_eq!(
        body_commands(surface.commands())
            .iter()
            .filter(|c| matches!(c, DrawCommand::LineHorizontal { .. }))
            .count(),
        2
    );
}

#[test]
fn test_no_rows_opens_and_closes_body() {
    let mut table = ProbeTable::new(&[100.0, 100.0], &[], 30.0);
    let mut surface = RecordingSurface::new();
    let stats = repaint(&mut table, &mut surface);

    assert_eq!(stats.rows_drawn, 0);
    assert!(body_commands(surface.commands()).is_empty());
    assert_eq!(regions(surface.commands()).len(), 2);
    assert_eq!(table.scroll_writes, 1);
}
