//! Layer-based z-ordering for SVG output.
//!
//! Illustration elements render into a [`LayeredOutput`], naming the
//! [`RenderLayer`] each SVG node belongs to. When the scene is assembled the
//! layers are emitted bottom-to-top, so region backgrounds always sit under
//! boxes, boxes under arrows, and arrows under text, regardless of the order
//! elements were drawn in.

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// The rendering layers, bottom to top in declaration order.
///
/// The `Ord` derive uses declaration order, which is what
/// [`LayeredOutput::render`] sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background fill - renders first
    Background,
    /// Translucent memory-region backdrops (stack / heap areas)
    Region,
    /// Main content: cells, boxes, ellipses
    Content,
    /// Separator lines inside and between content elements
    Divider,
    /// Arrows and pointer lines
    Arrow,
    /// Caption bubbles and grouping frames
    Annotation,
    /// Text labels - renders last
    Text,
}

impl RenderLayer {
    /// A human-readable name, used as the `data-layer` attribute on the
    /// emitted SVG group.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Region => "region",
            Self::Content => "content",
            Self::Divider => "divider",
            Self::Arrow => "arrow",
            Self::Annotation => "annotation",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the given layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends all nodes from another output, preserving their layers.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// True if no nodes have been added to any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes one `<g data-layer="...">` element.
    /// Within a layer, nodes keep insertion order (the sort is stable).
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
