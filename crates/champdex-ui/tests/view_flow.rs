use champdex_ui::core::breakpoints::{DeviceClass, Viewport};
use champdex_ui::core::catalog::{CollectionState, decode_catalog};
use champdex_ui::core::logic::{RenderPlan, plan};
use champdex_ui::core::routing::Route;
use champdex_ui::core::store::{HistorySink, SnapshotStore, ViewEvent, ViewState, dispatch};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct RecordingHistory {
    pushes: RefCell<Vec<String>>,
}

impl HistorySink for RecordingHistory {
    fn push(&self, path: &str) {
        self.pushes.borrow_mut().push(path.to_string());
    }
}

struct Snapshots {
    current: RefCell<Rc<ViewState>>,
}

impl Snapshots {
    fn starting_at(state: ViewState) -> Self {
        Self {
            current: RefCell::new(Rc::new(state)),
        }
    }
}

impl SnapshotStore for Snapshots {
    fn snapshot(&self) -> Rc<ViewState> {
        self.current.borrow().clone()
    }

    fn publish(&self, next: ViewState) {
        *self.current.borrow_mut() = Rc::new(next);
    }
}

fn record(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "key": "1",
        "name": name,
        "title": format!("title of {name}"),
        "blurb": format!("{name} blurb"),
        "info": { "attack": 3, "defense": 4, "magic": 8, "difficulty": 5 },
        "image": { "full": format!("{id}.png"), "sprite": "champion0.png" },
        "tags": ["Mage"],
        "partype": "Mana"
    })
}

fn payload(records: &[(&str, &str)]) -> String {
    let data: serde_json::Map<String, Value> = records
        .iter()
        .map(|(id, name)| ((*id).to_string(), record(id, name)))
        .collect();
    json!({ "type": "champion", "version": "13.24.1", "data": data }).to_string()
}

fn loaded(records: &[(&str, &str)]) -> anyhow::Result<CollectionState> {
    let characters = decode_catalog(&payload(records))?;
    Ok(CollectionState::settle::<anyhow::Error>(Ok(characters)))
}

#[test]
fn browse_select_echo_and_shrink() -> anyhow::Result<()> {
    let store = Snapshots::starting_at(ViewState::initial("/", Viewport::new(1200, 800)));
    let history = RecordingHistory::default();
    assert_eq!(store.snapshot().collection, CollectionState::Loading);
    assert_eq!(store.snapshot().route, Route::Home);
    assert_eq!(store.snapshot().device, DeviceClass::NotPhone);

    let roster = loaded(&[("Ahri", "Ahri"), ("Lux", "Lux")])?;
    dispatch(&store, &history, ViewEvent::CollectionSettled(roster));
    match plan(&store.snapshot()) {
        RenderPlan::Grid { characters } => assert_eq!(characters.len(), 2),
        other => panic!("expected grid, got {other:?}"),
    }

    dispatch(&store, &history, ViewEvent::NavigateRequested(Route::detail("ahri")));
    assert_eq!(store.snapshot().route, Route::detail("ahri"));
    assert_eq!(*history.pushes.borrow(), vec!["/ahri".to_string()]);

    let before_echo = store.snapshot();
    dispatch(&store, &history, ViewEvent::LocationChanged("/ahri".into()));
    assert_eq!(*store.snapshot(), *before_echo);
    assert_eq!(history.pushes.borrow().len(), 1);

    match plan(&store.snapshot()) {
        RenderPlan::Detail { character, grid } => {
            assert_eq!(character.id, "Ahri");
            assert!(grid.is_some());
        }
        other => panic!("expected detail with grid, got {other:?}"),
    }

    dispatch(&store, &history, ViewEvent::WindowResized(Viewport::new(300, 800)));
    assert_eq!(store.snapshot().device, DeviceClass::Phone);
    match plan(&store.snapshot()) {
        RenderPlan::Detail { character, grid } => {
            assert_eq!(character.id, "Ahri");
            assert!(grid.is_none());
        }
        other => panic!("expected detail only, got {other:?}"),
    }
    Ok(())
}

#[test]
fn failure_shows_error_regardless_of_route() {
    let store = Snapshots::starting_at(ViewState::initial("/ahri", Viewport::new(1200, 800)));
    let history = RecordingHistory::default();
    dispatch(
        &store,
        &history,
        ViewEvent::CollectionSettled(CollectionState::Failed("network error".into())),
    );
    assert_eq!(
        plan(&store.snapshot()),
        RenderPlan::Failed {
            message: "network error"
        }
    );
    assert!(history.pushes.borrow().is_empty());
}

#[test]
fn back_navigation_returns_to_grid() -> anyhow::Result<()> {
    let store = Snapshots::starting_at(ViewState::initial("/lux", Viewport::new(1200, 800)));
    let history = RecordingHistory::default();
    dispatch(
        &store,
        &history,
        ViewEvent::CollectionSettled(loaded(&[("Ahri", "Ahri"), ("Lux", "Lux")])?),
    );
    assert!(matches!(plan(&store.snapshot()), RenderPlan::Detail { .. }));

    dispatch(&store, &history, ViewEvent::LocationChanged("/".into()));
    assert!(matches!(plan(&store.snapshot()), RenderPlan::Grid { .. }));
    assert!(history.pushes.borrow().is_empty());
    Ok(())
}

#[test]
fn unknown_and_undecodable_paths_stay_distinct() -> anyhow::Result<()> {
    let roster = loaded(&[("Ahri", "Ahri")])?;
    let store = Snapshots::starting_at(ViewState::initial("/", Viewport::new(1200, 800)));
    let history = RecordingHistory::default();
    dispatch(&store, &history, ViewEvent::CollectionSettled(roster));

    dispatch(&store, &history, ViewEvent::LocationChanged("/teemo".into()));
    assert!(matches!(plan(&store.snapshot()), RenderPlan::NotFound { id: "teemo", .. }));

    dispatch(&store, &history, ViewEvent::LocationChanged("/%C3%28".into()));
    assert!(matches!(plan(&store.snapshot()), RenderPlan::Grid { .. }));
    Ok(())
}

#[test]
fn catalog_keeps_every_record_or_none() -> anyhow::Result<()> {
    let records = [("Ahri", "Ahri"), ("MonkeyKing", "Wukong"), ("Kaisa", "Kai'Sa")];
    let characters = decode_catalog(&payload(&records))?;
    assert_eq!(characters.len(), records.len());
    let again = decode_catalog(&payload(&records))?;
    assert_eq!(characters, again);

    let mut document: Value = serde_json::from_str(&payload(&records))?;
    if let Some(record) = document["data"]["Kaisa"].as_object_mut() {
        record.remove("tags");
    }
    assert!(decode_catalog(&document.to_string()).is_err());
    Ok(())
}
