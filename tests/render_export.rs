use eframe_sketchpad::{
    DrawOp, ExportError, Exporter, FontSet, InputEvent, Sketchpad, SketchpadConfig, Thickness,
};
use egui::{Pos2, Vec2};

fn sketchpad(scale: f32) -> Sketchpad {
    Sketchpad::new(Vec2::new(64.0, 64.0), Exporter::new(scale, "sketchpad.png"))
}

fn draw_line(pad: &mut Sketchpad, from: Pos2, to: Pos2) {
    pad.handle_input(InputEvent::PointerDown(from));
    pad.handle_input(InputEvent::PointerMove(to));
    pad.handle_input(InputEvent::PointerUp);
}

fn is_dark(image: &image::RgbaImage, x: u32, y: u32) -> bool {
    image.get_pixel(x, y).0[0] < 128
}

#[test]
fn test_redraw_is_idempotent() {
    let mut pad = sketchpad(1.0);
    draw_line(&mut pad, Pos2::new(1.0, 1.0), Pos2::new(30.0, 30.0));
    pad.handle_input(InputEvent::PointerEnter(Pos2::new(40.0, 40.0)));

    pad.redraw();
    let first = pad.canvas().clone();
    pad.redraw();
    assert_eq!(pad.canvas(), &first);
    // Stroke plus cursor preview, no accumulation
    assert_eq!(first.ops().len(), 2);
}

#[test]
fn test_redraw_paints_later_drawables_on_top() {
    let mut pad = sketchpad(1.0);
    draw_line(&mut pad, Pos2::new(1.0, 1.0), Pos2::new(30.0, 30.0));
    pad.choose_sticker("🌵");
    pad.handle_input(InputEvent::PointerDown(Pos2::new(15.0, 15.0)));
    pad.handle_input(InputEvent::PointerLeave);

    let ops = pad.canvas().ops();
    assert_eq!(ops.len(), 2);
    assert!(matches!(ops[0], DrawOp::Path { .. }));
    assert!(matches!(&ops[1], DrawOp::Text { glyph, .. } if glyph == "🌵"));
}

#[test]
fn test_preview_hidden_while_drawing() {
    let mut pad = sketchpad(1.0);
    pad.handle_input(InputEvent::PointerEnter(Pos2::new(5.0, 5.0)));
    pad.handle_input(InputEvent::PointerDown(Pos2::new(5.0, 5.0)));
    pad.handle_input(InputEvent::PointerMove(Pos2::new(9.0, 9.0)));
    assert!(pad
        .canvas()
        .ops()
        .iter()
        .all(|op| !matches!(op, DrawOp::Text { .. })));

    pad.handle_input(InputEvent::PointerUp);
    assert!(matches!(pad.canvas().ops().last(), Some(DrawOp::Text { glyph, .. }) if glyph == "*"));
}

#[test]
fn test_export_round_trip_at_scale() {
    let mut pad = sketchpad(4.0);
    pad.choose_thickness(Thickness::Medium);
    draw_line(&mut pad, Pos2::new(10.0, 10.0), Pos2::new(50.0, 10.0));
    pad.choose_sticker("W");
    pad.handle_input(InputEvent::PointerDown(Pos2::new(48.0, 54.0)));
    pad.handle_input(InputEvent::PointerUp);
    // Leave the preview cursor over an empty area
    pad.handle_input(InputEvent::PointerMove(Pos2::new(8.0, 30.0)));
    let history_before = pad.history().all().to_vec();

    let artifact = pad.export().unwrap();
    assert_eq!((artifact.width, artifact.height), (256, 256));
    assert_eq!(artifact.file_name, "sketchpad.png");

    let image = image::load_from_memory(&artifact.png).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (256, 256));

    // Background is white
    assert_eq!(image.get_pixel(250, 5).0, [255, 255, 255, 255]);
    // Stroke at 4x coordinates
    assert!(is_dark(&image, 120, 40));
    assert!(is_dark(&image, 60, 40));
    assert!(!is_dark(&image, 120, 80));
    // Sticker drawn around (192, 216)
    let sticker_ink = (150..234)
        .flat_map(|x| (180..250).map(move |y| (x, y)))
        .filter(|&(x, y)| is_dark(&image, x, y))
        .count();
    assert!(sticker_ink > 0);
    // No cursor preview around (32, 120)
    for x in 16..48 {
        for y in 104..136 {
            assert!(!is_dark(&image, x, y), "unexpected ink at ({x}, {y})");
        }
    }

    assert_eq!(pad.history().all(), history_before.as_slice());
    assert_eq!(pad.tool().cursor(), Some(Pos2::new(8.0, 30.0)));
}

#[test]
fn test_default_stickers_export_visible_ink() {
    let fonts = FontSet::bundled().unwrap();
    for sticker in SketchpadConfig::default().stickers {
        assert_eq!(fonts.missing_glyph(&sticker), None, "{sticker} has no glyph");

        let mut pad = sketchpad(2.0);
        pad.choose_sticker(&sticker);
        pad.handle_input(InputEvent::PointerDown(Pos2::new(32.0, 32.0)));
        pad.handle_input(InputEvent::PointerUp);
        pad.handle_input(InputEvent::PointerLeave);

        let image = image::load_from_memory(&pad.export().unwrap().png)
            .unwrap()
            .to_rgba8();
        let ink = (24..104)
            .flat_map(|x| (24..104).map(move |y| (x, y)))
            .filter(|&(x, y)| is_dark(&image, x, y))
            .count();
        assert!(ink > 20, "{sticker} exported only {ink} dark pixels");
    }
}

#[test]
fn test_export_skips_undone_drawables() {
    let mut pad = sketchpad(2.0);
    draw_line(&mut pad, Pos2::new(10.0, 10.0), Pos2::new(50.0, 10.0));
    pad.undo();

    let image = image::load_from_memory(&pad.export().unwrap().png)
        .unwrap()
        .to_rgba8();
    assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn test_failed_export_leaves_sketch_usable() {
    let mut pad = sketchpad(0.0);
    draw_line(&mut pad, Pos2::new(1.0, 1.0), Pos2::new(2.0, 2.0));

    assert!(matches!(pad.export(), Err(ExportError::InvalidScale(_))));
    assert_eq!(pad.history().len(), 1);
    draw_line(&mut pad, Pos2::new(3.0, 3.0), Pos2::new(4.0, 4.0));
    assert_eq!(pad.history().len(), 2);
}
