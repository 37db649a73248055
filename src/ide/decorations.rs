//! Decoration planning — which ranges get a color marker and background.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::constants::MARKER_GLYPH;
use crate::base::{LineIndex, Span, TextRange};
use crate::parser::scan_references;
use crate::semantic::{CanonicalColor, DefinitionTable, to_canonical_hex};

/// A colored glyph drawn in front of a variable reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorMarker {
    /// Variable name, without the `@`.
    pub name: SmolStr,
    /// Byte range of `@name`.
    pub range: TextRange,
    /// Line/column range of `@name`.
    pub span: Span,
    /// Color the glyph is drawn in.
    pub color: CanonicalColor,
}

impl ColorMarker {
    pub fn glyph(&self) -> &'static str {
        MARKER_GLYPH
    }
}

/// All references sharing one background color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackgroundGroup {
    /// `#rrggbbFF`.
    pub key: String,
    pub color: CanonicalColor,
    /// Text color chosen for contrast (`#000000` or `#ffffff`).
    pub foreground: &'static str,
    pub ranges: Vec<TextRange>,
    pub spans: Vec<Span>,
}

impl BackgroundGroup {
    fn new(color: CanonicalColor) -> Self {
        Self {
            key: color.background_key(),
            color,
            foreground: color.contrast_foreground(),
            ranges: Vec::new(),
            spans: Vec::new(),
        }
    }

    pub fn is_light(&self) -> bool {
        self.color.is_light()
    }
}

/// Everything a renderer needs to preview one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecorationPlan {
    /// One marker per renderable reference, in textual order.
    pub markers: Vec<ColorMarker>,
    /// Background batches, ordered by first appearance.
    pub backgrounds: Vec<BackgroundGroup>,
}

impl DecorationPlan {
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn background(&self, key: &str) -> Option<&BackgroundGroup> {
        self.backgrounds.iter().find(|group| group.key == key)
    }
}

/// Plan decorations for every `@name` in `text` that resolves to a color.
///
/// References to unknown names, or to values the codec cannot read, are
/// skipped.
pub fn plan_decorations(text: &str, table: &DefinitionTable) -> DecorationPlan {
    let line_index = LineIndex::new(text);
    let mut plan = DecorationPlan::default();
    let mut group_slots: FxHashMap<CanonicalColor, usize> = FxHashMap::default();

    for reference in scan_references(text) {
        let Some(color) = table.get(&reference.name).and_then(to_canonical_hex) else {
            continue;
        };
        let span = line_index.span(reference.range);

        let slot = *group_slots.entry(color).or_insert_with(|| {
            plan.backgrounds.push(BackgroundGroup::new(color));
            plan.backgrounds.len() - 1
        });
        let group = &mut plan.backgrounds[slot];
        group.ranges.push(reference.range);
        group.spans.push(span);

        plan.markers.push(ColorMarker {
            name: reference.name,
            range: reference.range,
            span,
            color,
        });
    }

    plan
}
