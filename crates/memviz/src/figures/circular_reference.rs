//! `shared_ptr` cycles: the leaking parent/child pair on the left, the
//! `weak_ptr` back-reference fix on the right.
//!
//! Both panels share one layout; only colors, the back edge, the reference
//! counts, and the captions differ.

use std::rc::Rc;

use memviz_core::{
    color::Color,
    draw::{
        Arrow, ArrowDefinition, ArrowDirection, ArrowStyle, FontWeight, RectangleDefinition,
        Shape, StrokeDefinition, Text, TextAnchor,
    },
    geometry::{Point, Size},
};

use crate::{
    config::AppConfig,
    element::{Callout, CalloutDefinition, LabeledBox, RegionBand, TextStack},
    error::MemvizError,
    figures::{new_scene, rgb, text_def},
    scene::Scene,
};

const CANVAS: Size = Size::new(1200.0, 700.0);

/// Horizontal scale: one layout unit is 72px, panels are 8 units wide.
const UNIT_X: f32 = 72.0;
/// Vertical scale: one layout unit is 104px.
const UNIT_Y: f32 = 104.0;

const LEFT_PANEL: f32 = 12.0;
const RIGHT_PANEL: f32 = 612.0;

/// Panel-local coordinates: x in [-1, 7] left to right, y in [-1, 5.5]
/// bottom to top.
fn pt(origin: f32, x: f32, y: f32) -> Point {
    Point::new(origin + (x + 1.0) * UNIT_X, (5.5 - y) * UNIT_Y)
}

/// Everything that differs between the two panels.
struct Panel<'a> {
    origin: f32,
    title: &'a str,
    accent: &'a str,
    node_fill: &'a str,
    parent_refs: &'a str,
    child_refs: &'a str,
    back_label: &'a str,
    back_color: &'a str,
    back_dashed: bool,
    caption: &'a str,
    caption_fill: &'a str,
}

pub(crate) fn scene(config: &AppConfig) -> Result<Scene, MemvizError> {
    let mut scene = new_scene(config, CANVAS.width(), CANVAS.height())?;

    draw_panel(
        &mut scene,
        config,
        &Panel {
            origin: LEFT_PANEL,
            title: "循环引用问题",
            accent: "#C62828",
            node_fill: "#FFCDD2",
            parent_refs: "引用计数=2",
            child_refs: "引用计数=2",
            back_label: "shared_ptr\n(parent成员)",
            back_color: "#C62828",
            back_dashed: false,
            caption: "函数返回后：引用计数各减1变为1\n互相持有导致永不归零，内存泄漏！",
            caption_fill: "#FFEBEE",
        },
    )?;

    draw_panel(
        &mut scene,
        config,
        &Panel {
            origin: RIGHT_PANEL,
            title: "打破循环依赖",
            accent: "#2E7D32",
            node_fill: "#C8E6C9",
            parent_refs: "引用计数=1",
            child_refs: "引用计数=2",
            back_label: "weak_ptr\n(不增加计数)",
            back_color: "#888888",
            back_dashed: true,
            caption: "函数返回后：parent计数归零先析构\nchild随之析构，无内存泄漏",
            caption_fill: "#E8F5E9",
        },
    )?;

    Ok(scene)
}

fn draw_panel(scene: &mut Scene, config: &AppConfig, panel: &Panel) -> Result<(), MemvizError> {
    let origin = panel.origin;

    let mut title_def = text_def(config, 19);
    title_def.set_weight(FontWeight::Bold);
    title_def.set_color(Some(rgb(panel.accent)?));
    scene.place(Text::new(&title_def, panel.title), pt(origin, 3.0, 5.2));

    draw_memory_regions(scene, config, origin)?;

    // Stack-resident smart pointer variables
    draw_stack_ptr(scene, config, pt(origin, 1.5, 4.0), "parent")?;
    draw_stack_ptr(scene, config, pt(origin, 4.5, 4.0), "child")?;

    // Heap-resident nodes
    draw_node(
        scene,
        config,
        pt(origin, 1.5, 1.5),
        "Parent节点",
        panel.parent_refs,
        panel.node_fill,
        panel.accent,
    )?;
    draw_node(
        scene,
        config,
        pt(origin, 4.5, 1.5),
        "Child节点",
        panel.child_refs,
        panel.node_fill,
        panel.accent,
    )?;

    // Stack pointers down into the heap
    let owning = straight_arrow(rgb("#1976D2")?);
    scene.draw_arrow(&owning, pt(origin, 1.5, 3.6), pt(origin, 1.5, 2.1));
    scene.draw_arrow(&owning, pt(origin, 4.5, 3.6), pt(origin, 4.5, 2.1));

    // Parent -> Child member reference, bowing up toward its label
    let forward = curved_arrow(rgb(panel.accent)?, false, 0.25);
    scene.draw_arrow(&forward, pt(origin, 2.4, 1.8), pt(origin, 3.6, 1.8));

    let mut member_def = text_def(config, 12);
    member_def.set_color(Some(rgb(panel.accent)?));
    scene.place(
        Text::new(&member_def, "shared_ptr\n(child成员)"),
        pt(origin, 3.0, 2.45),
    );

    // Child -> Parent back reference, bowing down away from the forward edge
    let back = curved_arrow(rgb(panel.back_color)?, panel.back_dashed, 0.25);
    scene.draw_arrow(&back, pt(origin, 3.6, 1.2), pt(origin, 2.4, 1.2));

    let mut back_def = text_def(config, 12);
    back_def.set_color(Some(rgb(panel.back_color)?));
    scene.place(
        Text::new(&back_def, panel.back_label),
        pt(origin, 3.0, 0.35),
    );

    // Outcome caption under the heap
    let mut caption_text = text_def(config, 15);
    caption_text.set_color(Some(rgb(panel.accent)?));
    let mut caption_def = CalloutDefinition::new();
    caption_def.set_background_color(Some(rgb(panel.caption_fill)?));
    caption_def.set_stroke(Rc::new(StrokeDefinition::solid(rgb(panel.accent)?, 1.0)));
    caption_def.set_text(Rc::new(caption_text));
    scene.place(
        Callout::new(Rc::new(caption_def), panel.caption),
        pt(origin, 3.0, -0.7),
    );

    Ok(())
}

/// Translucent stack (top) and heap (bottom) backdrops with corner labels.
fn draw_memory_regions(
    scene: &mut Scene,
    config: &AppConfig,
    origin: f32,
) -> Result<(), MemvizError> {
    for (label, fill, edge, center_y, height, label_dy) in [
        ("栈 (Stack)", "#E3F2FD", "#1976D2", 4.1, 1.8, -62.0),
        ("堆 (Heap)", "#FFF3E0", "#E65100", 1.55, 2.9, -120.0),
    ] {
        let mut backdrop = RectangleDefinition::new();
        backdrop.set_fill_color(Some(rgb(fill)?.with_alpha(0.5)));
        backdrop.set_stroke(Rc::new(StrokeDefinition::solid(rgb(edge)?, 2.0)));

        let mut label_def = text_def(config, 16);
        label_def.set_weight(FontWeight::Bold);
        label_def.set_anchor(TextAnchor::Start);
        label_def.set_color(Some(rgb(edge)?));

        scene.place(
            RegionBand::new(
                Shape::new(backdrop, Size::new(7.0 * UNIT_X, height * UNIT_Y)),
                label,
                Rc::new(label_def),
                Point::new(-238.0, label_dy),
            ),
            pt(origin, 3.0, center_y),
        );
    }

    Ok(())
}

/// A white stack cell holding a `shared_ptr` variable.
fn draw_stack_ptr(
    scene: &mut Scene,
    config: &AppConfig,
    center: Point,
    var_name: &str,
) -> Result<(), MemvizError> {
    let mut cell = RectangleDefinition::new();
    cell.set_fill_color(Some(rgb("white")?));
    cell.set_stroke(Rc::new(StrokeDefinition::solid(rgb("#1976D2")?, 2.0)));
    cell.set_corner_radius(6.0);

    let mut var_def = text_def(config, 15);
    var_def.set_weight(FontWeight::Bold);
    var_def.set_color(Some(rgb("#1976D2")?));

    let mut type_def = text_def(config, 12);
    type_def.set_color(Some(rgb("#666666")?));

    let label = TextStack::new()
        .line(var_name, Rc::new(var_def))
        .line("(shared_ptr)", Rc::new(type_def));

    scene.place(
        LabeledBox::new(Shape::new(cell, Size::new(115.0, 83.0)), label),
        center,
    );

    Ok(())
}

/// A heap node box with its reference count.
fn draw_node(
    scene: &mut Scene,
    config: &AppConfig,
    center: Point,
    name: &str,
    ref_count: &str,
    fill: &str,
    edge: &str,
) -> Result<(), MemvizError> {
    let mut node = RectangleDefinition::new();
    node.set_fill_color(Some(rgb(fill)?));
    node.set_stroke(Rc::new(StrokeDefinition::solid(rgb(edge)?, 2.0)));
    node.set_corner_radius(8.0);

    let mut name_def = text_def(config, 16);
    name_def.set_weight(FontWeight::Bold);

    let mut refs_def = text_def(config, 14);
    refs_def.set_color(Some(rgb("#555555")?));

    let label = TextStack::new()
        .with_gap(4.0)
        .line(name, Rc::new(name_def))
        .line(ref_count, Rc::new(refs_def));

    scene.place(
        LabeledBox::new(Shape::new(node, Size::new(130.0, 125.0)), label),
        center,
    );

    Ok(())
}

fn straight_arrow(color: Color) -> Arrow {
    Arrow::new(
        Rc::new(ArrowDefinition::new(Rc::new(StrokeDefinition::solid(
            color, 2.0,
        )))),
        ArrowDirection::Forward,
    )
}

fn curved_arrow(color: Color, dashed: bool, bend: f32) -> Arrow {
    let stroke = if dashed {
        StrokeDefinition::dashed(color, 2.0)
    } else {
        StrokeDefinition::solid(color, 2.0)
    };
    let mut definition = ArrowDefinition::new(Rc::new(stroke));
    definition.set_style(ArrowStyle::Curved(bend));
    Arrow::new(Rc::new(definition), ArrowDirection::Forward)
}
