use fresco::prelude::*;

fn header(width: f32, height: f32) -> DrawableRef {
    drawable_ref(ImageDrawable::with_size(
        "header.png",
        Size::new(width, height),
    ))
}

fn lay_out(mut widget: Illustration, width: f32, height: f32) -> Illustration {
    widget.layout(Constraints::tight(Size::new(width, height)));
    widget.set_origin(0.0, 0.0);
    widget
}

#[test]
fn reserved_inset_is_floor_width_over_ratio_snapped_down() {
    // 300 / 1.5 = 200, 200 % 24 = 8 -> 192
    let widget = lay_out(illustration().aspect_ratio(1.5).density(3.0), 300.0, 400.0);
    assert_eq!(widget.top_inset(), 192.0);
}

#[test]
fn inset_is_a_grid_multiple_and_bounded_by_raw_height() {
    for (ratio, width, density) in [(1.5, 300.0, 3.0), (1.78, 412.0, 2.5), (2.0, 275.0, 1.0)] {
        let grid = density * 8.0;
        let widget = lay_out(
            illustration().aspect_ratio(ratio).density(density),
            width,
            600.0,
        );
        let raw = (width / ratio).floor();
        assert!(widget.top_inset() <= raw);
        assert_eq!(widget.top_inset() % grid, 0.0);
    }
}

#[test]
fn scale_tracks_layout_width_over_intrinsic_width() {
    let widget = lay_out(
        illustration()
            .aspect_ratio(2.0)
            .illustration(header(100.0, 50.0)),
        300.0,
        400.0,
    );
    assert_eq!(widget.scale(), 3.0);
    assert_eq!(widget.illustration_bounds().height, 150.0);
}

#[test]
fn zero_aspect_ratio_keeps_intrinsic_height_and_unit_scale() {
    let widget = lay_out(illustration().illustration(header(100.0, 50.0)), 300.0, 400.0);
    assert_eq!(widget.scale(), 1.0);
    assert_eq!(widget.illustration_bounds(), Rect::new(0.0, 0.0, 300.0, 50.0));
}

#[test]
fn background_bounds_are_ceil_of_descaled_remainder() {
    let background = drawable_ref(TileDrawable::with_tile_size(
        "texture.png",
        Size::new(32.0, 32.0),
    ));
    let _ = lay_out(
        illustration()
            .aspect_ratio(2.0)
            .illustration(header(100.0, 50.0))
            .background(background.clone()),
        300.0,
        400.0,
    );
    let bounds = background.borrow().bounds();
    assert_eq!(bounds.width, (300.0_f32 / 3.0).ceil());
    assert_eq!(bounds.height, ((400.0_f32 - 150.0) / 3.0).ceil());
}

#[test]
fn same_reference_assignment_raises_no_dirty_flags() {
    let layer = header(100.0, 50.0);
    let mut widget = illustration();
    widget.set_illustration(Some(layer.clone()));
    widget.set_background(Some(layer.clone()));
    widget.clear_dirty();

    widget.set_illustration(Some(layer.clone()));
    widget.set_background(Some(layer));
    assert!(!widget.needs_layout());
    assert!(!widget.needs_paint());
}

#[test]
fn rtl_with_auto_mirrored_drawable_flips_horizontally() {
    let widget = lay_out(
        illustration()
            .aspect_ratio(2.0)
            .direction(LayoutDirection::Rtl)
            .illustration(drawable_ref(
                ImageDrawable::with_size("header.png", Size::new(100.0, 50.0)).auto_mirrored(true),
            )),
        300.0,
        400.0,
    );
    let mut canvas = Canvas::new();
    widget.paint(&mut canvas);
    assert!(canvas.ops()[0].transform().a < 0.0);
}

#[test]
fn ltr_never_flips_even_when_auto_mirrored() {
    let widget = lay_out(
        illustration()
            .aspect_ratio(2.0)
            .illustration(drawable_ref(
                ImageDrawable::with_size("header.png", Size::new(100.0, 50.0)).auto_mirrored(true),
            )),
        300.0,
        400.0,
    );
    let mut canvas = Canvas::new();
    widget.paint(&mut canvas);
    assert!(canvas.ops()[0].transform().a > 0.0);
}

#[test]
fn full_header_paints_background_under_illustration_under_child() {
    let widget = lay_out(
        illustration()
            .aspect_ratio(1.5)
            .density(3.0)
            .illustration(header(100.0, 50.0))
            .background(drawable_ref(TileDrawable::with_tile_size(
                "texture.png",
                Size::new(100.0, 100.0),
            )))
            .child(frame().padding(Padding::all(16.0))),
        300.0,
        400.0,
    );
    let mut canvas = Canvas::new();
    widget.paint(&mut canvas);

    // Background tiles first, illustration last (the empty frame records
    // nothing)
    let ops = canvas.ops();
    assert!(ops.len() >= 2);
    assert!(matches!(ops[ops.len() - 1], DrawOp::Image { .. }));
    let illustration_op = ops[ops.len() - 1].device_rect();
    assert_eq!(illustration_op, Rect::new(0.0, 0.0, 300.0, 150.0));

    // Every background tile lands at or below the illustration's bottom edge
    for op in &ops[..ops.len() - 1] {
        assert!(op.device_rect().y >= 150.0);
    }
}
