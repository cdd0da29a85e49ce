//! Anatomy of a call frame for `void foo(int param1, int param2)` with two
//! locals, from the caller's residue at high addresses down to the callee's.

use std::rc::Rc;

use memviz_core::{
    draw::{
        Arrow, ArrowDefinition, ArrowDirection, FontWeight, RectangleDefinition, Shape,
        StrokeDefinition, Text, TextAnchor,
    },
    geometry::{Point, Size},
};

use crate::{
    config::AppConfig,
    element::{Callout, CalloutDefinition, LabeledBox, TextStack},
    error::MemvizError,
    figures::{new_scene, rgb, text_def},
    scene::Scene,
};

const CANVAS: Size = Size::new(800.0, 880.0);

/// Frame cell geometry: all rows share one column.
const ROW_X: f32 = 320.0;
const ROW_SIZE: Size = Size::new(320.0, 80.0);
const FIRST_ROW_Y: f32 = 170.0;
const ROW_STEP: f32 = 80.0;

/// The frame rows, high addresses first: (name, description, fill).
const FRAME_ROWS: [(&str, &str, &str); 8] = [
    ("...", "调用方的栈帧", "#E0E0E0"),
    ("param2", "函数参数2 (第二个参数)", "#FFCDD2"),
    ("param1", "函数参数1 (第一个参数)", "#FFCDD2"),
    ("返回地址", "调用方的下一条指令地址", "#FFF9C4"),
    ("旧 EBP", "保存调用方的栈基址", "#E1F5FE"),
    ("local1", "局部变量1", "#C8E6C9"),
    ("local2", "局部变量2", "#C8E6C9"),
    ("...", "被调用方可能的更多数据", "#E0E0E0"),
];

/// Index of the first callee-allocated row; the dashed separator sits above
/// it.
const CALLEE_FIRST_ROW: usize = 4;

fn row_center(row: usize) -> Point {
    Point::new(ROW_X, FIRST_ROW_Y + row as f32 * ROW_STEP)
}

pub(crate) fn scene(config: &AppConfig) -> Result<Scene, MemvizError> {
    let mut scene = new_scene(config, CANVAS.width(), CANVAS.height())?;

    let mut title_def = text_def(config, 18);
    title_def.set_weight(FontWeight::Bold);
    scene.place(
        Text::new(&title_def, "函数调用栈帧结构"),
        Point::new(400.0, 22.0),
    );
    let code_def = text_def(config, 14);
    scene.place(
        Text::new(
            &code_def,
            "void foo(int param1, int param2) { int local1, local2; }",
        ),
        Point::new(400.0, 46.0),
    );

    draw_rows(&mut scene, config)?;
    draw_growth_axis(&mut scene, config)?;
    draw_half_annotations(&mut scene, config)?;

    Ok(scene)
}

fn draw_rows(scene: &mut Scene, config: &AppConfig) -> Result<(), MemvizError> {
    let row_stroke = Rc::new(StrokeDefinition::solid(rgb("black")?, 1.5));

    let mut name_def = text_def(config, 16);
    name_def.set_weight(FontWeight::Bold);
    let name_def = Rc::new(name_def);

    let mut desc_def = text_def(config, 14);
    desc_def.set_anchor(TextAnchor::Start);
    desc_def.set_color(Some(rgb("#555555")?));

    for (row, (name, desc, fill)) in FRAME_ROWS.iter().enumerate() {
        let center = row_center(row);

        let mut cell = RectangleDefinition::new();
        cell.set_fill_color(Some(rgb(fill)?));
        cell.set_stroke(Rc::clone(&row_stroke));
        cell.set_corner_radius(6.0);

        let label = TextStack::new().line(*name, Rc::clone(&name_def));
        scene.place(
            LabeledBox::new(Shape::new(cell, ROW_SIZE), label),
            center,
        );

        scene.place(Text::new(&desc_def, desc), Point::new(504.0, center.y()));
    }

    // The saved-EBP row is what the base pointer register points at.
    let mut ebp_def = text_def(config, 15);
    ebp_def.set_weight(FontWeight::Bold);
    ebp_def.set_anchor(TextAnchor::Start);
    ebp_def.set_color(Some(rgb("#1976D2")?));
    scene.place(
        Text::new(&ebp_def, "←EBP"),
        Point::new(664.0, row_center(CALLEE_FIRST_ROW).y()),
    );

    Ok(())
}

/// High/low address labels and the downward growth arrow on the left.
fn draw_growth_axis(scene: &mut Scene, config: &AppConfig) -> Result<(), MemvizError> {
    let address_def = text_def(config, 15);
    scene.place(Text::new(&address_def, "高地址"), Point::new(120.0, 170.0));
    scene.place(Text::new(&address_def, "低地址"), Point::new(120.0, 810.0));

    let growth = Arrow::new(
        Rc::new(ArrowDefinition::new(Rc::new(StrokeDefinition::solid(
            rgb("#1976D2")?,
            2.0,
        )))),
        ArrowDirection::Forward,
    );
    scene.draw_arrow(&growth, Point::new(120.0, 210.0), Point::new(120.0, 770.0));

    let mut growth_def = text_def(config, 14);
    growth_def.set_color(Some(rgb("#1976D2")?));
    scene.place(Text::new(&growth_def, "栈增长\n方向"), Point::new(64.0, 530.0));

    Ok(())
}

/// The dashed separator between the caller-pushed and callee-allocated
/// halves, plus the callout naming each half.
fn draw_half_annotations(scene: &mut Scene, config: &AppConfig) -> Result<(), MemvizError> {
    let separator_y =
        FIRST_ROW_Y + (CALLEE_FIRST_ROW as f32 - 0.5) * ROW_STEP;
    let separator = Arrow::new(
        Rc::new(ArrowDefinition::new(Rc::new(StrokeDefinition::dashed(
            rgb("red")?,
            2.0,
        )))),
        ArrowDirection::Plain,
    );
    scene.draw_arrow(
        &separator,
        Point::new(160.0, separator_y),
        Point::new(680.0, separator_y),
    );

    for (text, color, fill, center_y) in [
        ("调用方压入\n(调用前)", "#C62828", "#FFEBEE", 290.0),
        ("被调用方分配\n(调用后)", "#2E7D32", "#E8F5E9", 610.0),
    ] {
        let mut content_def = text_def(config, 15);
        content_def.set_color(Some(rgb(color)?));

        let mut callout_def = CalloutDefinition::new();
        callout_def.set_background_color(Some(rgb(fill)?));
        callout_def.set_stroke(Rc::new(StrokeDefinition::solid(rgb(color)?, 1.0)));
        callout_def.set_text(Rc::new(content_def));

        scene.place(
            Callout::new(Rc::new(callout_def), text),
            Point::new(680.0, center_y),
        );
    }

    Ok(())
}
