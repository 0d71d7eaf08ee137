//! End-to-end editing flow over a realistic actor collection.

use gdforge::schema::visible_columns;
use gdforge::{
    CollectionConfig, EditSession, EditorKind, ExpandedPaths, MemoryStore, RecordStore, Schema,
    SchemaBuilder, SchemaRegistry, SessionState, View,
};
use gdforge_util::deep_equal;
use serde_json::{json, Value};

fn hidden_type_meta() -> &'static str {
    r#"{"description": "Callback type", "specialType": "hidden"}"#
}

fn actor_schema() -> Schema {
    let b = SchemaBuilder::new();
    let with_hidden_tag = |schema: Schema| match schema {
        Schema::Union(mut union) => {
            for variant in &mut union.variants {
                if let Some(field) = variant.fields.iter_mut().find(|f| f.name == "type") {
                    field.schema = field.schema.clone().described(hidden_type_meta());
                }
            }
            Schema::Union(union)
        }
        other => other,
    };

    let on_hit = with_hidden_tag(b.union(
        "type",
        vec![
            b.variant("type", "Damage", vec![b.field("Potency", b.str().described(
                r#"{"description": "Damage potency formula", "specialType": "formula"}"#,
            ))]),
            b.variant(
                "type",
                "Effect",
                vec![
                    b.field("Name", b.str().described(
                        r#"{"description": "Effect name", "specialType": "entityReference", "collection": "effects"}"#,
                    )),
                    b.field("Duration", b.num()),
                ],
            ),
        ],
    ));
    let action = with_hidden_tag(b.union(
        "type",
        vec![
            b.variant(
                "type",
                "CircleQuery",
                vec![
                    b.field("Radius", b.num()),
                    b.field("Target", b.enumeration(&["Enemy", "Ally", "Self", "All"])),
                    b.field("OnHit", b.arr(on_hit.clone())),
                ],
            ),
            b.variant(
                "type",
                "ConeQuery",
                vec![
                    b.field("Radius", b.num()),
                    b.field("Angle", b.num()),
                    b.field("Target", b.enumeration(&["Enemy", "Ally", "Self", "All"])),
                    b.field("OnHit", b.arr(on_hit)),
                ],
            ),
        ],
    ));
    let trigger = b.obj(vec![
        b.field("Time", b.num()),
        b.field("Actions", b.arr(action)),
    ]);
    b.obj(vec![
        b.field("Name", b.str()),
        b.field("Asset", b.str()),
        b.field("Lifetime", b.num()),
        b.field("Triggers", b.arr(trigger)),
    ])
}

fn sword_strike() -> Value {
    json!({
        "Name": "Sword Strike",
        "Asset": "Assets/Effects/Sword Strike",
        "Lifetime": 3.5,
        "Triggers": [
            {
                "Time": 0.25,
                "Actions": [
                    {
                        "type": "CircleQuery",
                        "Radius": 0.5,
                        "Target": "Enemy",
                        "OnHit": [
                            {"type": "Damage", "Potency": "$Strength * 2 + 20"},
                            {"type": "Effect", "Name": "Stunned", "Duration": 0.75},
                        ],
                    },
                ],
            },
        ],
    })
}

fn actor_session() -> EditSession {
    EditSession::new(
        actor_schema(),
        SchemaRegistry::new(),
        CollectionConfig::new("actors", "Actors"),
    )
}

#[test]
fn full_editing_pass() {
    let mut store = MemoryStore::new(CollectionConfig::new("actors", "Actors"));
    store.add(sword_strike()).unwrap();

    let mut session = actor_session();
    session.select(&store.get_by_id("Sword Strike").unwrap());

    // drill into the first action through the row view
    for path in ["Triggers", "Triggers[0]", "Triggers[0].Actions", "Triggers[0].Actions[0]"] {
        session.toggle_expanded(path);
    }
    let rows = session.rows();
    assert!(rows.iter().any(|r| r.path == "Triggers[0].Actions[0].Radius"));
    assert!(!rows.iter().any(|r| r.path.ends_with(".type")));

    // leaf edit, variant switch, reorder
    session.set_value("Triggers[0].Actions[0].Radius", json!(0.75)).unwrap();
    session.append_item("Triggers[0].Actions[0].OnHit").unwrap();
    session.switch_variant("Triggers[0].Actions[0].OnHit[2]", "Effect").unwrap();
    session.move_item("Triggers[0].Actions[0].OnHit", 2, 0).unwrap();

    let draft = session.draft().unwrap();
    assert_eq!(draft["Triggers"][0]["Actions"][0]["OnHit"][0]["type"], json!("Effect"));

    // the text view re-encodes the draft and decodes back losslessly
    session.switch_view(View::Text).unwrap();
    let text = session.text().unwrap();
    assert!(text.contains("!CircleQuery"));
    let decoded = gdforge::decode(text).unwrap();
    assert!(deep_equal(&decoded.value, session.draft().unwrap()));

    // undo unwinds the reorder
    assert!(session.undo());
    let draft = session.draft().unwrap();
    assert_eq!(draft["Triggers"][0]["Actions"][0]["OnHit"][2]["type"], json!("Effect"));

    session.commit(&mut store).unwrap();
    assert_eq!(session.state(), SessionState::Closed);
    let committed = store.get_by_id("Sword Strike").unwrap();
    assert_eq!(committed["Triggers"][0]["Actions"][0]["Radius"], json!(0.75));
}

#[test]
fn formula_fields_validate_against_known_attributes() {
    let mut session = actor_session();
    session.select(&sword_strike());

    let known = vec!["Strength".to_string(), "Dexterity".to_string()];
    assert!(session.validate_formulas(&known).is_empty());

    session
        .set_value("Triggers[0].Actions[0].OnHit[0].Potency", json!("SMITE($Strength)"))
        .unwrap();
    let problems = session.validate_formulas(&known);
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].0, "Triggers[0].Actions[0].OnHit[0].Potency");
}

#[test]
fn entity_reference_editors_surface_known_identities() {
    let mut effects = MemoryStore::new(CollectionConfig::new("effects", "Effects"));
    effects.add(json!({"Name": "Burning"})).unwrap();
    effects.add(json!({"Name": "Stunned"})).unwrap();

    let mut session = actor_session();
    session.select(&sword_strike());
    for path in [
        "Triggers",
        "Triggers[0]",
        "Triggers[0].Actions",
        "Triggers[0].Actions[0]",
        "Triggers[0].Actions[0].OnHit",
        "Triggers[0].Actions[0].OnHit[1]",
    ] {
        session.toggle_expanded(path);
    }
    let rows = session.rows();
    let reference = rows
        .iter()
        .find(|r| r.path == "Triggers[0].Actions[0].OnHit[1].Name")
        .expect("entity reference row");
    match &reference.detail {
        gdforge::RowDetail::Leaf { editor: EditorKind::EntityReference(collection) } => {
            // the picker is constrained to the named collection's identities
            assert_eq!(collection, "effects");
            assert_eq!(effects.list_identities(), ["Burning", "Stunned"]);
        }
        other => panic!("unexpected detail: {other:?}"),
    }
}

#[test]
fn visible_columns_exclude_hidden_and_complex_fields() {
    let schema = actor_schema();
    let registry = SchemaRegistry::new();
    let obj = match &schema {
        Schema::Obj(obj) => obj,
        _ => unreachable!(),
    };
    let columns = visible_columns(obj, &registry);
    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Name", "Asset", "Lifetime"]);
}

#[test]
fn rows_and_text_stay_in_sync_across_round_trips() {
    let session_schema = actor_schema();
    let registry = SchemaRegistry::new();
    let record = sword_strike();

    let text = gdforge::encode(&record);
    let decoded = gdforge::decode(&text).unwrap().value;
    assert!(deep_equal(&decoded, &record));

    let rows_before =
        gdforge::build_rows(&session_schema, &record, &ExpandedPaths::all(), &registry);
    let rows_after =
        gdforge::build_rows(&session_schema, &decoded, &ExpandedPaths::all(), &registry);
    assert_eq!(rows_before, rows_after);
}
