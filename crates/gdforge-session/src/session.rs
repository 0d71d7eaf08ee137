use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use gdforge_formula::{validate, FormulaError};
use gdforge_path::{get, parse_path};
use gdforge_rows::{
    build_rows, mutate, schema_at, EditorKind, ExpandedPaths, MutateError, Row, RowDetail,
};
use gdforge_schema::{resolve, Schema, SchemaRegistry};
use gdforge_tagged_text::{decode, encode, DecodeError};
use gdforge_util::{deep_equal, snapshot};

use crate::config::{resolve_identity, CollectionConfig};
use crate::history::History;
use crate::store::{RecordStore, StoreError};

/// Which edit surface is active. The structured view is the source of truth
/// while it is active; switching to the text view re-encodes the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Structured,
    Text,
}

/// Observable session state. Selecting a record immediately seeds the
/// editing draft, so a selected record is always editable; `commit`,
/// `discard`, and `delete` return to `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Editing,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("no active edit session")]
    NotEditing,

    #[error("no schema at path `{0}`")]
    UnknownPath(String),

    #[error("record has no usable identity")]
    MissingIdentity,

    #[error(transparent)]
    Mutate(#[from] MutateError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

struct Editing {
    selected: Value,
    draft: Value,
    history: History,
    view: View,
    text: String,
    is_creating: bool,
    /// Expand/collapse state, created on entry and discarded on close.
    expanded: ExpandedPaths,
}

enum State {
    Closed,
    Editing(Box<Editing>),
}

/// The editing lifecycle for one record of one collection.
///
/// Owns the draft buffer (a deep copy — the original record is untouched
/// until commit), the bounded undo history, and the synchronization between
/// the structured and text views. Commit and delete dispatch to the
/// caller's [`RecordStore`] and are fire-and-forget from the engine's
/// perspective.
pub struct EditSession {
    schema: Schema,
    registry: SchemaRegistry,
    config: CollectionConfig,
    state: State,
}

impl EditSession {
    pub fn new(schema: Schema, registry: SchemaRegistry, config: CollectionConfig) -> Self {
        Self { schema, registry, config, state: State::Closed }
    }

    // ── Introspection ─────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        match self.state {
            State::Closed => SessionState::Closed,
            State::Editing(_) => SessionState::Editing,
        }
    }

    pub fn draft(&self) -> Option<&Value> {
        match &self.state {
            State::Editing(editing) => Some(&editing.draft),
            State::Closed => None,
        }
    }

    pub fn selected(&self) -> Option<&Value> {
        match &self.state {
            State::Editing(editing) => Some(&editing.selected),
            State::Closed => None,
        }
    }

    pub fn is_creating(&self) -> bool {
        matches!(&self.state, State::Editing(editing) if editing.is_creating)
    }

    pub fn view(&self) -> Option<View> {
        match &self.state {
            State::Editing(editing) => Some(editing.view),
            State::Closed => None,
        }
    }

    /// The text buffer of the tagged text view.
    pub fn text(&self) -> Option<&str> {
        match &self.state {
            State::Editing(editing) => Some(editing.text.as_str()),
            State::Closed => None,
        }
    }

    pub fn history_len(&self) -> usize {
        match &self.state {
            State::Editing(editing) => editing.history.len(),
            State::Closed => 0,
        }
    }

    pub fn can_undo(&self) -> bool {
        matches!(&self.state, State::Editing(editing) if editing.history.can_undo())
    }

    fn editing(&self) -> Result<&Editing, SessionError> {
        match &self.state {
            State::Editing(editing) => Ok(editing),
            State::Closed => Err(SessionError::NotEditing),
        }
    }

    fn editing_mut(&mut self) -> Result<&mut Editing, SessionError> {
        match &mut self.state {
            State::Editing(editing) => Ok(editing),
            State::Closed => Err(SessionError::NotEditing),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Open `record` for editing: a deep-copied draft and a 1-entry history.
    pub fn select(&mut self, record: &Value) {
        debug!(collection = %self.config.name, "record selected");
        let draft = snapshot(record);
        self.state = State::Editing(Box::new(Editing {
            selected: snapshot(record),
            text: encode(&draft),
            history: History::seeded(snapshot(&draft)),
            draft,
            view: View::Structured,
            is_creating: false,
            expanded: ExpandedPaths::new(),
        }));
    }

    /// Open a freshly synthesized minimal draft with only the identity
    /// field populated. Collections keyed by numeric id take the highest
    /// existing id plus one.
    pub fn create(&mut self, store: &dyn RecordStore) {
        debug!(collection = %self.config.name, "creating record");
        let mut draft = Map::new();
        if self.root_has_field(&self.config.identity_field) {
            draft.insert(self.config.identity_field.clone(), json!(""));
        } else {
            let next_id = store
                .list_identities()
                .iter()
                .filter_map(|id| id.parse::<i64>().ok())
                .max()
                .unwrap_or(0)
                + 1;
            draft.insert(self.config.id_field.clone(), json!(next_id));
        }
        let draft = Value::Object(draft);
        self.state = State::Editing(Box::new(Editing {
            selected: snapshot(&draft),
            text: encode(&draft),
            history: History::seeded(snapshot(&draft)),
            draft,
            view: View::Structured,
            is_creating: true,
            expanded: ExpandedPaths::new(),
        }));
    }

    fn root_has_field(&self, name: &str) -> bool {
        match resolve(&self.schema, &self.registry) {
            Ok(resolved) => match resolved.node {
                Schema::Obj(obj) => obj.field(name).is_some(),
                _ => false,
            },
            Err(_) => false,
        }
    }

    /// Drop the draft and history without dispatching anything.
    pub fn discard(&mut self) {
        debug!(collection = %self.config.name, "edit discarded");
        self.state = State::Closed;
    }

    /// Dispatch the draft to the store — update when the draft's identity
    /// already exists, add otherwise — then close the editor.
    pub fn commit(&mut self, store: &mut dyn RecordStore) -> Result<(), SessionError> {
        let draft = self.editing()?.draft.clone();
        let identity =
            resolve_identity(&draft, &self.config).ok_or(SessionError::MissingIdentity)?;
        if store.get_by_id(&identity).is_some() {
            store.update(&identity, draft)?;
        } else {
            store.add(draft)?;
        }
        debug!(collection = %self.config.name, %identity, "draft committed");
        self.state = State::Closed;
        Ok(())
    }

    /// Dispatch a delete keyed by `record`'s identity and close.
    pub fn delete(
        &mut self,
        store: &mut dyn RecordStore,
        record: &Value,
    ) -> Result<(), SessionError> {
        let identity =
            resolve_identity(record, &self.config).ok_or(SessionError::MissingIdentity)?;
        store.delete(&identity)?;
        debug!(collection = %self.config.name, %identity, "record deleted");
        self.state = State::Closed;
        Ok(())
    }

    // ── Structured view ───────────────────────────────────────────────────

    /// Derive the current row list. Empty when closed.
    pub fn rows(&self) -> Vec<Row> {
        match &self.state {
            State::Editing(editing) => {
                build_rows(&self.schema, &editing.draft, &editing.expanded, &self.registry)
            }
            State::Closed => Vec::new(),
        }
    }

    pub fn toggle_expanded(&mut self, path: &str) {
        if let Ok(editing) = self.editing_mut() {
            editing.expanded.toggle(path);
        }
    }

    /// Replace the draft, pushing the previous state onto the undo history
    /// (forward entries truncated, capped at 50, oldest evicted).
    pub fn apply_change(&mut self, new_draft: Value) -> Result<(), SessionError> {
        let editing = self.editing_mut()?;
        if deep_equal(&editing.draft, &new_draft) {
            return Ok(());
        }
        editing.history.record(snapshot(&new_draft));
        editing.draft = new_draft;
        Ok(())
    }

    pub fn set_value(&mut self, path: &str, value: Value) -> Result<(), SessionError> {
        let next = mutate::set_value(&self.editing()?.draft, path, value)?;
        self.apply_change(next)
    }

    pub fn append_item(&mut self, array_path: &str) -> Result<(), SessionError> {
        let element = match self.schema_at_path(array_path)? {
            Schema::Arr(arr) => *arr.element,
            _ => return Err(SessionError::UnknownPath(array_path.to_string())),
        };
        let next =
            mutate::append_item(&self.editing()?.draft, array_path, &element, &self.registry)?;
        self.apply_change(next)
    }

    pub fn delete_item(&mut self, array_path: &str, index: usize) -> Result<(), SessionError> {
        let next = mutate::delete_item(&self.editing()?.draft, array_path, index)?;
        self.apply_change(next)
    }

    pub fn clear_array(&mut self, array_path: &str) -> Result<(), SessionError> {
        let next = mutate::clear_array(&self.editing()?.draft, array_path)?;
        self.apply_change(next)
    }

    pub fn move_item(
        &mut self,
        array_path: &str,
        from: usize,
        to: usize,
    ) -> Result<(), SessionError> {
        let next = mutate::move_array_item(&self.editing()?.draft, array_path, from, to)?;
        self.apply_change(next)
    }

    /// Switch a tagged-union array item to another declared variant,
    /// preserving same-named field values.
    pub fn switch_variant(&mut self, item_path: &str, new_tag: &str) -> Result<(), SessionError> {
        let union = match self.schema_at_path(item_path)? {
            Schema::Union(union) => union,
            _ => return Err(SessionError::UnknownPath(item_path.to_string())),
        };
        let next = mutate::switch_variant(
            &self.editing()?.draft,
            item_path,
            &union,
            new_tag,
            &self.registry,
        )?;
        self.apply_change(next)
    }

    fn schema_at_path(&self, path: &str) -> Result<Schema, SessionError> {
        let editing = self.editing()?;
        let parsed = parse_path(path).map_err(MutateError::from)?;
        schema_at(&self.schema, &editing.draft, &parsed, &self.registry)
            .ok_or_else(|| SessionError::UnknownPath(path.to_string()))
    }

    /// Restore the prior snapshot; no-op at the earliest retained entry.
    pub fn undo(&mut self) -> bool {
        let Ok(editing) = self.editing_mut() else { return false };
        let Some(previous) = editing.history.undo() else { return false };
        editing.draft = snapshot(previous);
        if editing.view == View::Text {
            editing.text = encode(&editing.draft);
        }
        debug!("undo applied");
        true
    }

    // ── Text view ─────────────────────────────────────────────────────────

    /// Activate a view. Switching to the text view re-encodes the current
    /// draft; switching back performs no reverse sync — the structured view
    /// is authoritative while active.
    pub fn switch_view(&mut self, view: View) -> Result<(), SessionError> {
        let editing = self.editing_mut()?;
        if view == View::Text {
            editing.text = encode(&editing.draft);
        }
        editing.view = view;
        Ok(())
    }

    /// Apply an edit made in the text view. On success the decoded value
    /// replaces the draft; on failure the prior draft is retained and the
    /// error is surfaced as a non-blocking warning.
    pub fn edit_text(&mut self, text: &str) -> Result<(), SessionError> {
        let editing = self.editing_mut()?;
        editing.text = text.to_string();
        match decode(text) {
            Ok(decoded) => {
                editing.draft = decoded.value;
                Ok(())
            }
            Err(err) => {
                warn!(%err, "text edit kept prior draft");
                Err(err.into())
            }
        }
    }

    // ── Formula fields ────────────────────────────────────────────────────

    /// Validate every formula-hinted field of the draft against the known
    /// identifiers. Errors are reported per path and never block other
    /// fields.
    pub fn validate_formulas(&self, known: &[String]) -> Vec<(String, FormulaError)> {
        let Ok(editing) = self.editing() else { return Vec::new() };
        let rows = build_rows(&self.schema, &editing.draft, &ExpandedPaths::all(), &self.registry);
        let mut problems = Vec::new();
        for row in &rows {
            if row.detail != (RowDetail::Leaf { editor: EditorKind::Formula }) {
                continue;
            }
            let formula = parse_path(&row.path)
                .ok()
                .and_then(|p| get(&editing.draft, &p))
                .and_then(Value::as_str)
                .unwrap_or("");
            if let Err(err) = validate(formula, known) {
                problems.push((row.path.clone(), err));
            }
        }
        problems
    }
}
