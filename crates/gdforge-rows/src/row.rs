use gdforge_schema::Schema;

/// The editor a leaf row renders with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorKind {
    Text,
    Number,
    Checkbox,
    /// Closed choice list.
    Select(Vec<String>),
    /// Formula editing surface with validation and autocomplete.
    Formula,
    /// Picker over the identities of the named external collection.
    EntityReference(String),
    /// An array of primitives edited as one literal structured list.
    LiteralList,
    /// Rendered but not editable.
    ReadOnly,
}

/// The variant switcher shown on items of a tagged-union array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantChoice {
    /// The item's current discriminator value, if it is a string.
    pub current: Option<String>,
    /// All declared variant tags, in declaration order.
    pub options: Vec<String>,
}

/// Kind-specific row payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RowDetail {
    Leaf { editor: EditorKind },
    Object { member_count: usize },
    Array { element_count: usize },
    ArrayItem { index: usize, variant: Option<VariantChoice> },
    /// Terminal row emitted when the depth guard stops recursion.
    MaxDepth,
    /// A node that could not be classified; shown, never editable.
    Opaque,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Leaf,
    Object,
    Array,
    ArrayItem,
    MaxDepth,
    Opaque,
}

/// One addressable unit of the generated edit view.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Dotted/bracketed address into the draft buffer. Unique per row.
    pub path: String,
    pub depth: usize,
    pub label: String,
    pub description: Option<String>,
    /// The canonical schema node this row edits.
    pub schema: Schema,
    pub expanded: bool,
    pub detail: RowDetail,
}

impl Row {
    pub fn kind(&self) -> RowKind {
        match self.detail {
            RowDetail::Leaf { .. } => RowKind::Leaf,
            RowDetail::Object { .. } => RowKind::Object,
            RowDetail::Array { .. } => RowKind::Array,
            RowDetail::ArrayItem { .. } => RowKind::ArrayItem,
            RowDetail::MaxDepth => RowKind::MaxDepth,
            RowDetail::Opaque => RowKind::Opaque,
        }
    }
}
