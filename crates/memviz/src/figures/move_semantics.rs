//! Buffer state before and after `Buffer dst = std::move(src);` - the heap
//! allocation stays put, only the pointer changes hands.

use std::rc::Rc;

use memviz_core::{
    color::Color,
    draw::{
        Arrow, ArrowDefinition, ArrowDirection, ArrowStyle, FontSlant, FontWeight,
        RectangleDefinition, Shape, StrokeDefinition, Text, TextAnchor, TextDefinition,
    },
    geometry::{Point, Size},
};

use crate::{
    config::AppConfig,
    element::{Callout, CalloutDefinition, FieldBox, HeapStrip},
    error::MemvizError,
    figures::{new_scene, rgb, text_def},
    scene::Scene,
};

const CANVAS: Size = Size::new(1000.0, 450.0);

/// Horizontal scale: one layout unit is 54px, panels are 9 units wide.
const UNIT_X: f32 = 54.0;
/// Vertical scale: one layout unit is 75px.
const UNIT_Y: f32 = 75.0;

const LEFT_PANEL: f32 = 7.0;
const RIGHT_PANEL: f32 = 507.0;

/// Object boxes are 2.2 x 1.5 layout units.
const OBJECT_SIZE: Size = Size::new(119.0, 113.0);

/// Panel-local coordinates: x in [0, 9], y in [0, 6] bottom to top.
fn pt(origin: f32, x: f32, y: f32) -> Point {
    Point::new(origin + x * UNIT_X, (6.0 - y) * UNIT_Y)
}

pub(crate) fn scene(config: &AppConfig) -> Result<Scene, MemvizError> {
    let mut scene = new_scene(config, CANVAS.width(), CANVAS.height())?;
    draw_before_panel(&mut scene, config)?;
    draw_after_panel(&mut scene, config)?;
    Ok(scene)
}

fn draw_before_panel(scene: &mut Scene, config: &AppConfig) -> Result<(), MemvizError> {
    let origin = LEFT_PANEL;
    draw_panel_title(scene, config, origin, "移动前")?;
    draw_heap(scene, config, origin, "堆内存")?;

    // Source object owning the allocation
    scene.place(
        live_object(config, "src")?,
        pt(origin, 1.6, 2.75),
    );
    let pointer = pointer_arrow(rgb("#FF5722")?, 0.1);
    scene.draw_arrow(&pointer, pt(origin, 1.6, 3.5), pt(origin, 5.5, 4.0));

    // Destination not yet constructed
    let mut uninit = RectangleDefinition::new();
    uninit.set_fill_color(Some(rgb("#E0E0E0")?));
    uninit.set_stroke(Rc::new(StrokeDefinition::dashed(rgb("#9E9E9E")?, 2.0)));
    uninit.set_corner_radius(8.0);
    scene.place(Shape::new(uninit, OBJECT_SIZE), pt(origin, 7.4, 2.75));

    let mut dst_def = text_def(config, 18);
    dst_def.set_weight(FontWeight::Bold);
    scene.place(Text::new(&dst_def, "dst"), pt(origin, 7.4, 3.7));

    let mut uninit_def = text_def(config, 15);
    uninit_def.set_color(Some(rgb("#666666")?));
    scene.place(Text::new(&uninit_def, "(未初始化)"), pt(origin, 7.4, 2.75));

    // The statement about to run
    let mut code_def = text_def(config, 16);
    code_def.set_font_family("monospace");
    code_def.set_slant(FontSlant::Italic);
    draw_caption(
        scene,
        code_def,
        origin,
        "Buffer dst = std::move(src);",
        "#FFF3E0",
        "#FFB74D",
    )?;

    Ok(())
}

fn draw_after_panel(scene: &mut Scene, config: &AppConfig) -> Result<(), MemvizError> {
    let origin = RIGHT_PANEL;
    draw_panel_title(scene, config, origin, "移动后")?;
    draw_heap(scene, config, origin, "堆内存 (未拷贝)")?;

    // Source hollowed out: valid but unspecified
    let gray = rgb("#9E9E9E")?;

    let mut shell = RectangleDefinition::new();
    shell.set_fill_color(Some(rgb("#EEEEEE")?));
    shell.set_stroke(Rc::new(StrokeDefinition::solid(rgb("#BDBDBD")?, 2.0)));
    shell.set_corner_radius(8.0);

    let mut title_def = text_def(config, 18);
    title_def.set_weight(FontWeight::Bold);
    title_def.set_color(Some(gray));

    let mut field_def = text_def(config, 14);
    field_def.set_font_family("monospace");
    field_def.set_anchor(TextAnchor::Start);
    field_def.set_color(Some(gray));

    let mut note_def = text_def(config, 12);
    note_def.set_slant(FontSlant::Italic);
    note_def.set_color(Some(rgb("#F44336")?));

    let moved_from = FieldBox::new(
        Shape::new(shell, OBJECT_SIZE),
        "src",
        Rc::new(title_def),
        vec!["data_: nullptr".to_string(), "size_: 0".to_string()],
        Rc::new(field_def),
    )
    .with_note("(有效但不确定)", Rc::new(note_def));
    scene.place(moved_from, pt(origin, 1.6, 2.75));

    // Destination now owns the allocation
    scene.place(
        live_object(config, "dst")?,
        pt(origin, 7.4, 2.75),
    );
    let pointer = pointer_arrow(rgb("#FF5722")?, -0.1);
    scene.draw_arrow(&pointer, pt(origin, 7.4, 3.5), pt(origin, 5.5, 4.0));

    let mut note_def = text_def(config, 16);
    note_def.set_slant(FontSlant::Italic);
    draw_caption(
        scene,
        note_def,
        origin,
        "资源被\"窃取\"，非拷贝",
        "#E8F5E9",
        "#81C784",
    )?;

    Ok(())
}

fn draw_panel_title(
    scene: &mut Scene,
    config: &AppConfig,
    origin: f32,
    title: &str,
) -> Result<(), MemvizError> {
    let mut title_def = text_def(config, 21);
    title_def.set_weight(FontWeight::Bold);
    scene.place(Text::new(&title_def, title), pt(origin, 4.5, 5.7));
    Ok(())
}

/// The five-cell heap allocation, identical in both panels.
fn draw_heap(
    scene: &mut Scene,
    config: &AppConfig,
    origin: f32,
    caption: &str,
) -> Result<(), MemvizError> {
    let mut caption_def = text_def(config, 14);
    caption_def.set_slant(FontSlant::Italic);
    caption_def.set_color(Some(rgb("#666666")?));

    let strip = HeapStrip::new(
        (1..=5).map(|v| v.to_string()).collect(),
        Size::new(32.4, 60.0),
        Some(rgb("#C8E6C9")?),
        Rc::new(StrokeDefinition::solid(rgb("#4CAF50")?, 2.0)),
        Rc::new(text_def(config, 15)),
    )
    .with_caption(caption, Rc::new(caption_def));

    scene.place(strip, pt(origin, 5.5, 4.4));
    Ok(())
}

/// An object box that currently owns the heap buffer.
fn live_object(config: &AppConfig, name: &str) -> Result<FieldBox, MemvizError> {
    let mut body = RectangleDefinition::new();
    body.set_fill_color(Some(rgb("#FFE0B2")?));
    body.set_stroke(Rc::new(StrokeDefinition::solid(rgb("#FF9800")?, 2.0)));
    body.set_corner_radius(8.0);

    let mut title_def = text_def(config, 18);
    title_def.set_weight(FontWeight::Bold);

    let mut field_def = text_def(config, 14);
    field_def.set_font_family("monospace");
    field_def.set_anchor(TextAnchor::Start);

    Ok(FieldBox::new(
        Shape::new(body, OBJECT_SIZE),
        name,
        Rc::new(title_def),
        vec!["data_: 0x1234".to_string(), "size_: 5".to_string()],
        Rc::new(field_def),
    ))
}

fn pointer_arrow(color: Color, bend: f32) -> Arrow {
    let mut definition = ArrowDefinition::new(Rc::new(StrokeDefinition::solid(color, 2.0)));
    definition.set_style(ArrowStyle::Curved(bend));
    Arrow::new(Rc::new(definition), ArrowDirection::Forward)
}

fn draw_caption(
    scene: &mut Scene,
    content_def: TextDefinition,
    origin: f32,
    text: &str,
    fill: &str,
    edge: &str,
) -> Result<(), MemvizError> {
    let mut callout_def = CalloutDefinition::new();
    callout_def.set_background_color(Some(rgb(fill)?));
    callout_def.set_stroke(Rc::new(StrokeDefinition::solid(rgb(edge)?, 1.0)));
    callout_def.set_text(Rc::new(content_def));

    scene.place(
        Callout::new(Rc::new(callout_def), text),
        pt(origin, 4.5, 0.5),
    );
    Ok(())
}
