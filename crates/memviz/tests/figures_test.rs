use memviz::{FigureKind, FigureRenderer};

/// Labels that must survive into the rendered SVG, per figure.
fn expected_labels(kind: FigureKind) -> &'static [&'static str] {
    match kind {
        FigureKind::MemoryLayout => &[
            "C++ 程序内存布局",
            "栈 Stack",
            "堆 Heap",
            ".bss 段",
            ".data 段",
            ".rodata 常量区",
            ".text 代码段",
            "数据段",
            "只读区域",
            "高地址",
            "低地址",
        ],
        FigureKind::StackFrame => &[
            "函数调用栈帧结构",
            "param1",
            "param2",
            "返回地址",
            "旧 EBP",
            "local1",
            "local2",
            "←EBP",
            "栈增长",
        ],
        FigureKind::CircularReference => &[
            "循环引用问题",
            "打破循环依赖",
            "Parent节点",
            "Child节点",
            "shared_ptr",
            "weak_ptr",
            "引用计数=2",
            "引用计数=1",
            "内存泄漏",
        ],
        FigureKind::MoveSemantics => &[
            "移动前",
            "移动后",
            "data_: 0x1234",
            "data_: nullptr",
            "size_: 5",
            "size_: 0",
            "std::move(src)",
            "堆内存 (未拷贝)",
            "(未初始化)",
            "(有效但不确定)",
        ],
        FigureKind::ValueCategory => &[
            "C++11 值类别体系",
            "glvalue",
            "rvalue",
            "lvalue",
            "xvalue",
            "prvalue",
            "std::move()",
            "有身份",
            "可移动",
        ],
    }
}

#[test]
fn every_figure_renders_to_svg() {
    let renderer = FigureRenderer::default();

    for kind in FigureKind::all() {
        let svg = renderer
            .render_svg(kind)
            .unwrap_or_else(|err| panic!("{kind} failed to render: {err}"));

        assert!(svg.starts_with("<svg"), "{kind}: not an SVG document");
        assert!(svg.contains("</svg>"), "{kind}: truncated document");
    }
}

#[test]
fn every_figure_contains_its_labels() {
    let renderer = FigureRenderer::default();

    for kind in FigureKind::all() {
        let svg = renderer.render_svg(kind).unwrap();
        for label in expected_labels(kind) {
            assert!(svg.contains(label), "{kind}: missing label {label:?}");
        }
    }
}

#[test]
fn figures_declare_backgrounds_and_fonts() {
    let renderer = FigureRenderer::default();

    for kind in FigureKind::all() {
        let svg = renderer.render_svg(kind).unwrap();
        assert!(
            svg.contains(r#"fill="white""#),
            "{kind}: missing background"
        );
        assert!(svg.contains("font-family"), "{kind}: missing font stack");
        assert!(
            svg.contains("sans-serif"),
            "{kind}: font stack lost its fallback"
        );
    }
}

#[test]
fn pointer_figures_define_arrow_markers() {
    let renderer = FigureRenderer::default();

    for kind in [
        FigureKind::MemoryLayout,
        FigureKind::StackFrame,
        FigureKind::CircularReference,
        FigureKind::MoveSemantics,
    ] {
        let svg = renderer.render_svg(kind).unwrap();
        assert!(svg.contains("<marker"), "{kind}: no arrow markers defined");
        assert!(svg.contains("marker-end"), "{kind}: no arrow references");
    }
}

#[test]
fn weak_ptr_edge_is_dashed() {
    let renderer = FigureRenderer::default();
    let svg = renderer.render_svg(FigureKind::CircularReference).unwrap();
    assert!(svg.contains("stroke-dasharray"));
}

#[test]
fn every_figure_rasterizes_to_png() {
    let renderer = FigureRenderer::default();

    for kind in FigureKind::all() {
        let png = renderer
            .render_png(kind)
            .unwrap_or_else(|err| panic!("{kind} failed to rasterize: {err}"));

        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n", "{kind}: not a PNG file");
        assert!(png.len() > 1000, "{kind}: implausibly small PNG");
    }
}
