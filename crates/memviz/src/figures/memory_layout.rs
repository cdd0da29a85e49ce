//! Process address-space layout, from high addresses (stack) down to the
//! code segment.

use std::rc::Rc;

use memviz_core::{
    draw::{
        Arrow, ArrowDefinition, ArrowDirection, FontSlant, FontWeight, RectangleDefinition, Shape,
        StrokeDefinition, Text, TextAnchor,
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

const CANVAS: Size = Size::new(800.0, 960.0);

/// Horizontal center of the region column.
const BAND_X: f32 = 400.0;
const BAND_W: f32 = 560.0;

/// The memory regions, top (high addresses) to bottom:
/// (name, description, growth direction, top y, height, fill).
const REGIONS: [(&str, &str, &str, f32, f32, &str); 7] = [
    ("栈 Stack", "局部变量、函数参数", "↓ 向下增长", 96.0, 90.0, "#81C784"),
    ("空闲区域", "", "", 222.0, 72.0, "#EEEEEE"),
    ("堆 Heap", "动态分配的内存", "↑ 向上增长", 330.0, 90.0, "#FFB74D"),
    (".bss 段", "未初始化的全局/静态变量", "", 456.0, 64.0, "#64B5F6"),
    (".data 段", "已初始化的全局/静态变量", "", 548.0, 64.0, "#4FC3F7"),
    (".rodata 常量区", "字符串字面量、const全局常量", "", 664.0, 72.0, "#CE93D8"),
    (".text 代码段", "程序指令", "", 764.0, 72.0, "#F48FB1"),
];

pub(crate) fn scene(config: &AppConfig) -> Result<Scene, MemvizError> {
    let mut scene = new_scene(config, CANVAS.width(), CANVAS.height())?;

    let mut title = text_def(config, 27);
    title.set_weight(FontWeight::Bold);
    scene.place(Text::new(&title, "C++ 程序内存布局"), Point::new(BAND_X, 40.0));

    draw_regions(&mut scene, config)?;
    draw_segment_frames(&mut scene, config)?;
    draw_address_axis(&mut scene, config)?;

    Ok(scene)
}

fn draw_regions(scene: &mut Scene, config: &AppConfig) -> Result<(), MemvizError> {
    let band_stroke = Rc::new(StrokeDefinition::solid(rgb("#333333")?, 1.5));

    let mut name_def = text_def(config, 22);
    name_def.set_weight(FontWeight::Bold);
    let name_def = Rc::new(name_def);

    let mut desc_def = text_def(config, 18);
    desc_def.set_color(Some(rgb("#555555")?));
    let desc_def = Rc::new(desc_def);

    let mut free_def = text_def(config, 21);
    free_def.set_slant(FontSlant::Italic);
    free_def.set_color(Some(rgb("#888888")?));
    let free_def = Rc::new(free_def);

    let mut growth_def = text_def(config, 18);
    growth_def.set_anchor(TextAnchor::Start);
    growth_def.set_color(Some(rgb("#333333")?));

    for (name, desc, growth, top, height, fill) in REGIONS {
        let center = Point::new(BAND_X, top + height / 2.0);

        let mut band = RectangleDefinition::new();
        band.set_fill_color(Some(rgb(fill)?));
        band.set_stroke(Rc::clone(&band_stroke));
        band.set_corner_radius(6.0);
        let shape = Shape::new(band, Size::new(BAND_W, height));

        if name == "空闲区域" {
            // The gap between stack and heap: italic label over a
            // double-headed arrow marking that both regions grow into it.
            let label = TextStack::new().line(name, Rc::clone(&free_def));
            scene.place(LabeledBox::new(shape, label), center);

            let gap_stroke = StrokeDefinition::solid(rgb("#888888")?, 1.5);
            let gap_arrow = Arrow::new(
                Rc::new(ArrowDefinition::new(Rc::new(gap_stroke))),
                ArrowDirection::Bidirectional,
            );
            scene.draw_arrow(
                &gap_arrow,
                Point::new(BAND_X, top + 6.0),
                Point::new(BAND_X, top + height - 6.0),
            );
        } else {
            let label = TextStack::new()
                .with_gap(4.0)
                .line(name, Rc::clone(&name_def))
                .line(desc, Rc::clone(&desc_def));
            scene.place(LabeledBox::new(shape, label), center);
        }

        if !growth.is_empty() {
            scene.place(Text::new(&growth_def, growth), Point::new(700.0, center.y()));
        }
    }

    Ok(())
}

/// Dashed frames grouping .bss/.data into the data segment and
/// .rodata/.text into the read-only region, each labelled on the right.
fn draw_segment_frames(scene: &mut Scene, config: &AppConfig) -> Result<(), MemvizError> {
    for (label, color, center_y, height) in [
        ("数据段", "#1565C0", 534.0, 176.0),
        ("只读区域", "#7B1FA2", 750.0, 192.0),
    ] {
        let mut frame = RectangleDefinition::new();
        frame.set_stroke(Rc::new(StrokeDefinition::dashed(rgb(color)?, 2.0)));
        frame.set_corner_radius(8.0);
        scene.place(
            Shape::new(frame, Size::new(592.0, height)),
            Point::new(BAND_X, center_y),
        );

        let mut label_def = text_def(config, 18);
        label_def.set_weight(FontWeight::Bold);
        label_def.set_anchor(TextAnchor::Start);
        label_def.set_color(Some(rgb(color)?));
        scene.place(Text::new(&label_def, label), Point::new(712.0, center_y));
    }

    Ok(())
}

/// High/low address labels and the direction arrow along the left edge.
fn draw_address_axis(scene: &mut Scene, config: &AppConfig) -> Result<(), MemvizError> {
    let mut address_def = text_def(config, 20);
    address_def.set_weight(FontWeight::Bold);

    scene.place(Text::new(&address_def, "高地址"), Point::new(64.0, 84.0));
    scene.place(Text::new(&address_def, "低地址"), Point::new(64.0, 852.0));

    let axis = Arrow::new(
        Rc::new(ArrowDefinition::new(Rc::new(StrokeDefinition::solid(
            rgb("#333333")?,
            2.0,
        )))),
        ArrowDirection::Forward,
    );
    scene.draw_arrow(&axis, Point::new(64.0, 104.0), Point::new(64.0, 832.0));

    Ok(())
}
