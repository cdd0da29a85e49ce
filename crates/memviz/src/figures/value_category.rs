//! The C++11 value-category taxonomy as overlapping sets: glvalue and
//! rvalue ellipses with the lvalue / xvalue / prvalue regions boxed inside.

use std::rc::Rc;

use memviz_core::{
    color::Color,
    draw::{
        EllipseDefinition, FontSlant, FontWeight, RectangleDefinition, Shape, StrokeDefinition,
        Text, TextDefinition,
    },
    geometry::{Point, Size},
};

use crate::{
    config::AppConfig,
    element::{LabeledBox, TextStack},
    error::MemvizError,
    figures::{new_scene, rgb, text_def},
    scene::Scene,
};

const CANVAS: Size = Size::new(800.0, 500.0);

/// Horizontal scale: one layout unit is 80px.
const UNIT_X: f32 = 80.0;
/// Vertical scale: one layout unit is 500/6 px.
const UNIT_Y: f32 = 500.0 / 6.0;

/// Layout coordinates: x in [0, 10], y in [0, 6] bottom to top.
fn pt(x: f32, y: f32) -> Point {
    Point::new(x * UNIT_X, (6.0 - y) * UNIT_Y)
}

pub(crate) fn scene(config: &AppConfig) -> Result<Scene, MemvizError> {
    let mut scene = new_scene(config, CANVAS.width(), CANVAS.height())?;

    let mut title_def = text_def(config, 24);
    title_def.set_weight(FontWeight::Bold);
    scene.place(Text::new(&title_def, "C++11 值类别体系"), pt(5.0, 5.5));

    draw_sets(&mut scene, config)?;
    draw_categories(&mut scene, config)?;

    Ok(scene)
}

/// The two overlapping translucent sets with their three-line side labels.
fn draw_sets(scene: &mut Scene, config: &AppConfig) -> Result<(), MemvizError> {
    let set_size = Size::new(5.0 * UNIT_X, 3.5 * UNIT_Y);

    for (fill, edge, center_x, label_x, name, reading, trait_text) in [
        ("#C8E6C9", "#388E3C", 3.5, 1.2, "glvalue", "(泛左值)", "有身份"),
        ("#BBDEFB", "#1976D2", 6.5, 8.8, "rvalue", "(右值)", "可移动"),
    ] {
        let mut set = EllipseDefinition::new();
        set.set_fill_color(Some(rgb(fill)?.with_alpha(0.6)));
        set.set_stroke(Rc::new(StrokeDefinition::solid(rgb(edge)?, 2.0)));
        scene.place(Shape::new(set, set_size), pt(center_x, 2.8));

        let edge_color = rgb(edge)?;

        let mut name_def = text_def(config, 20);
        name_def.set_weight(FontWeight::Bold);
        name_def.set_color(Some(edge_color));

        let mut reading_def = text_def(config, 17);
        reading_def.set_color(Some(edge_color));

        let mut trait_def = text_def(config, 15);
        trait_def.set_slant(FontSlant::Italic);
        trait_def.set_color(Some(edge_color));

        let label = TextStack::new()
            .with_gap(3.0)
            .line(name, Rc::new(name_def))
            .line(reading, Rc::new(reading_def))
            .line(trait_text, Rc::new(trait_def));
        scene.place(label, pt(label_x, 4.4));
    }

    Ok(())
}

/// The three opaque category boxes with their name, reading, and example.
fn draw_categories(scene: &mut Scene, config: &AppConfig) -> Result<(), MemvizError> {
    for (fill, edge, center_x, width_units, name, reading, example) in [
        ("#4CAF50", "#2E7D32", 2.4, 2.2, "lvalue", "(左值)", "变量名、*ptr"),
        ("#9C27B0", "#7B1FA2", 5.0, 1.7, "xvalue", "(将亡值)", "std::move()"),
        ("#2196F3", "#1565C0", 7.6, 2.2, "prvalue", "(纯右值)", "字面量、x+y"),
    ] {
        let mut category = RectangleDefinition::new();
        category.set_fill_color(Some(rgb(fill)?.with_alpha(0.9)));
        category.set_stroke(Rc::new(StrokeDefinition::solid(rgb(edge)?, 2.0)));
        category.set_corner_radius(10.0);
        let shape = Shape::new(
            category,
            Size::new(width_units * UNIT_X, 1.8 * UNIT_Y),
        );

        let white = rgb("white")?;
        let label = TextStack::new()
            .with_gap(4.0)
            .line(name, Rc::new(white_def(config, 21, true, white)))
            .line(reading, Rc::new(white_def(config, 17, false, white)))
            .line(example, Rc::new(white_def(config, 15, false, white)));

        scene.place(LabeledBox::new(shape, label), pt(center_x, 2.7));
    }

    Ok(())
}

fn white_def(config: &AppConfig, size: u16, bold: bool, color: Color) -> TextDefinition {
    let mut definition = text_def(config, size);
    if bold {
        definition.set_weight(FontWeight::Bold);
    }
    definition.set_color(Some(color));
    definition
}
