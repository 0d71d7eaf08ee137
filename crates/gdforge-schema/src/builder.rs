//! Fluent constructors for schema values.

use serde_json::Value;

use crate::schema::*;

/// Builder for constructing schema values.
///
/// ```
/// use gdforge_schema::SchemaBuilder;
///
/// let b = SchemaBuilder::new();
/// let effect = b.obj(vec![
///     b.field("Name", b.str()),
///     b.field("Period", b.num()),
///     b.field("OnTick", b.arr(b.union("type", vec![
///         b.variant("type", "Heal", vec![b.field("Potency", b.num())]),
///     ]))),
/// ]);
/// assert_eq!(effect.kind(), "obj");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder;

impl SchemaBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn str(&self) -> Schema {
        Schema::Str(StrSchema::default())
    }

    pub fn num(&self) -> Schema {
        Schema::Num(NumSchema::default())
    }

    pub fn bool(&self) -> Schema {
        Schema::Bool(BoolSchema::default())
    }

    pub fn lit(&self, value: impl Into<Value>) -> Schema {
        Schema::Lit(LitSchema {
            base: SchemaBase::default(),
            value: value.into(),
        })
    }

    pub fn enumeration(&self, options: &[&str]) -> Schema {
        Schema::Enum(EnumSchema {
            base: SchemaBase::default(),
            options: options.iter().map(|s| s.to_string()).collect(),
        })
    }

    pub fn field(&self, name: impl Into<String>, schema: Schema) -> FieldSchema {
        FieldSchema {
            name: name.into(),
            schema,
        }
    }

    pub fn obj(&self, fields: Vec<FieldSchema>) -> Schema {
        Schema::Obj(ObjSchema {
            base: SchemaBase::default(),
            fields,
        })
    }

    pub fn arr(&self, element: Schema) -> Schema {
        Schema::Arr(ArrSchema {
            base: SchemaBase::default(),
            element: Box::new(element),
        })
    }

    pub fn opt(&self, inner: Schema) -> Schema {
        Schema::Opt(OptSchema {
            base: SchemaBase::default(),
            inner: Box::new(inner),
        })
    }

    /// A union variant: an object whose `discriminator` field is the literal
    /// `tag`, followed by the variant's own fields.
    pub fn variant(
        &self,
        discriminator: impl Into<String>,
        tag: impl Into<String>,
        mut fields: Vec<FieldSchema>,
    ) -> ObjSchema {
        let mut all = vec![FieldSchema {
            name: discriminator.into(),
            schema: self.lit(tag.into()),
        }];
        all.append(&mut fields);
        ObjSchema {
            base: SchemaBase::default(),
            fields: all,
        }
    }

    pub fn union(&self, discriminator: impl Into<String>, variants: Vec<ObjSchema>) -> Schema {
        Schema::Union(UnionSchema {
            base: SchemaBase::default(),
            discriminator: discriminator.into(),
            variants,
        })
    }

    /// A named reference resolved through a [`crate::SchemaRegistry`].
    pub fn reference(&self, target: impl Into<String>) -> Schema {
        Schema::Ref(RefSchema {
            base: SchemaBase::default(),
            target: target.into(),
        })
    }
}
