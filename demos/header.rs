//! Builds a setup-screen style header and dumps the recorded draw ops.
//!
//! Run with `RUST_LOG=trace` to see the layout decisions.

use fresco::prelude::*;

fn main() {
    env_logger::init();

    let header = drawable_ref(
        ImageDrawable::with_size("assets/header.png", Size::new(360.0, 180.0)).auto_mirrored(true),
    );
    let texture = drawable_ref(TileDrawable::with_tile_size(
        "assets/texture.png",
        Size::new(64.0, 64.0),
    ));

    let mut widget = illustration()
        .aspect_ratio(1.78)
        .density(2.0)
        .illustration(header)
        .background(texture)
        .child(frame().padding(Padding::all(24.0)));

    widget.layout(Constraints::tight(Size::new(412.0, 732.0)));
    widget.set_origin(0.0, 0.0);

    let mut canvas = Canvas::new();
    widget.paint(&mut canvas);

    println!(
        "scale {:.3}, top inset {}",
        widget.scale(),
        widget.top_inset()
    );
    for op in canvas.ops() {
        println!("{:?} -> {:?}", op.device_rect(), op.clip());
    }
}
