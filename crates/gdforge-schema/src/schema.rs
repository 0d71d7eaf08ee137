use serde_json::Value;

use crate::meta::UiHint;

/// Fields common to all schema nodes.
///
/// `description` may carry plain help text or the serialized metadata side
/// channel (see [`crate::meta::field_meta`]). Explicit `label`/`ui_hint`
/// values take precedence over anything found in the side channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaBase {
    pub label: Option<String>,
    pub description: Option<String>,
    pub ui_hint: Option<UiHint>,
}

/// A string value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrSchema {
    pub base: SchemaBase,
}

/// A numeric value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumSchema {
    pub base: SchemaBase,
}

/// A boolean value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolSchema {
    pub base: SchemaBase,
}

/// A closed string choice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumSchema {
    pub base: SchemaBase,
    pub options: Vec<String>,
}

/// A literal constant value. Tagged-union discriminator fields declare one
/// of these with the variant's tag string.
#[derive(Debug, Clone, PartialEq)]
pub struct LitSchema {
    pub base: SchemaBase,
    pub value: Value,
}

/// One named field of an object. Declaration order is display order.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: String,
    pub schema: Schema,
}

/// An object with ordered named fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjSchema {
    pub base: SchemaBase,
    pub fields: Vec<FieldSchema>,
}

impl ObjSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A homogeneous array.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrSchema {
    pub base: SchemaBase,
    pub element: Box<Schema>,
}

/// An optional/nullable wrapper. Absence round-trips as a missing key.
#[derive(Debug, Clone, PartialEq)]
pub struct OptSchema {
    pub base: SchemaBase,
    pub inner: Box<Schema>,
}

/// A tagged union: ordered object variants distinguished by a literal value
/// in the discriminator field.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionSchema {
    pub base: SchemaBase,
    pub discriminator: String,
    pub variants: Vec<ObjSchema>,
}

impl UnionSchema {
    /// The literal tag a variant declares in its discriminator field.
    pub fn variant_tag<'a>(&self, variant: &'a ObjSchema) -> Option<&'a str> {
        match variant.field(&self.discriminator)? {
            FieldSchema { schema: Schema::Lit(lit), .. } => lit.value.as_str(),
            _ => None,
        }
    }

    /// All declared variant tags, in declaration order.
    pub fn tags(&self) -> Vec<&str> {
        self.variants
            .iter()
            .filter_map(|v| self.variant_tag(v))
            .collect()
    }

    /// The variant declaring `tag` as its discriminator literal.
    pub fn variant_by_tag(&self, tag: &str) -> Option<&ObjSchema> {
        self.variants
            .iter()
            .find(|v| self.variant_tag(v) == Some(tag))
    }

    /// The variant matching `data`'s discriminator value, if any.
    pub fn variant_for(&self, data: &Value) -> Option<&ObjSchema> {
        let tag = data.get(&self.discriminator)?.as_str()?;
        self.variant_by_tag(tag)
    }

    /// The variant used to render `data`: the matching variant, or the first
    /// declared variant as a display-only fallback. The stored data is never
    /// mutated to fit the fallback.
    pub fn display_variant(&self, data: &Value) -> Option<&ObjSchema> {
        self.variant_for(data).or_else(|| self.variants.first())
    }
}

/// A named reference into a [`crate::SchemaRegistry`], resolved lazily.
/// Self-referential types point back at their own registered name.
#[derive(Debug, Clone, PartialEq)]
pub struct RefSchema {
    pub base: SchemaBase,
    pub target: String,
}

/// The unified schema node covering all kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Str(StrSchema),
    Num(NumSchema),
    Bool(BoolSchema),
    Enum(EnumSchema),
    Lit(LitSchema),
    Obj(ObjSchema),
    Arr(ArrSchema),
    Opt(OptSchema),
    Union(UnionSchema),
    Ref(RefSchema),
}

impl Schema {
    /// Returns the kind string identifier for this node.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "str",
            Self::Num(_) => "num",
            Self::Bool(_) => "bool",
            Self::Enum(_) => "enum",
            Self::Lit(_) => "lit",
            Self::Obj(_) => "obj",
            Self::Arr(_) => "arr",
            Self::Opt(_) => "opt",
            Self::Union(_) => "union",
            Self::Ref(_) => "ref",
        }
    }

    /// Returns the base schema fields.
    pub fn base(&self) -> &SchemaBase {
        match self {
            Self::Str(s) => &s.base,
            Self::Num(s) => &s.base,
            Self::Bool(s) => &s.base,
            Self::Enum(s) => &s.base,
            Self::Lit(s) => &s.base,
            Self::Obj(s) => &s.base,
            Self::Arr(s) => &s.base,
            Self::Opt(s) => &s.base,
            Self::Union(s) => &s.base,
            Self::Ref(s) => &s.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut SchemaBase {
        match self {
            Self::Str(s) => &mut s.base,
            Self::Num(s) => &mut s.base,
            Self::Bool(s) => &mut s.base,
            Self::Enum(s) => &mut s.base,
            Self::Lit(s) => &mut s.base,
            Self::Obj(s) => &mut s.base,
            Self::Arr(s) => &mut s.base,
            Self::Opt(s) => &mut s.base,
            Self::Union(s) => &mut s.base,
            Self::Ref(s) => &mut s.base,
        }
    }

    /// Attach a display label.
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.base_mut().label = Some(label.into());
        self
    }

    /// Attach help text, or the serialized metadata side channel.
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.base_mut().description = Some(description.into());
        self
    }

    /// Attach an explicit UI hint.
    pub fn hinted(mut self, hint: UiHint) -> Self {
        self.base_mut().ui_hint = Some(hint);
        self
    }
}
