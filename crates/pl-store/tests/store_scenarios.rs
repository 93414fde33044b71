//! End-to-end store scenarios: UI action -> set_state -> subscriber -> select.

use std::cell::RefCell;
use std::rc::Rc;

use pl_core::{Bib, Classification, ParticipantId, Rider, SeriesMap, SportData, StageSeries};
use pl_ranking::{GuardError, RankingError, Selection};
use pl_store::{SelectorId, StatePatch, Store, StoreConfig, StoreError, View};

fn race() -> SportData {
    let mut data = SportData::default();
    for bib in [7, 12] {
        data.riders.insert(
            Bib(bib),
            Rider {
                bib: Bib(bib),
                name: format!("Rider {bib}"),
                team_id: None,
                flag: None,
            },
        );
    }
    data.results
        .insert(12, StageSeries::from_ranks([Some(1), Some(4)]));
    data.results.insert(7, StageSeries::from_ranks([Some(2), None]));

    let mut mountain = SeriesMap::new();
    mountain.insert(7, StageSeries::from_ranks([Some(1), Some(1)]));
    data.classifications
        .insert(Classification::Mountain, mountain);
    data
}

fn loaded_store(config: StoreConfig) -> Store {
    let mut store = Store::new(config);
    store.set_state(StatePatch::sport_data(race()));
    store
}

fn label_ids(view: &View) -> Vec<(ParticipantId, u32, bool)> {
    view.as_ranking_labels()
        .unwrap()
        .iter()
        .map(|l| (l.id, l.ranking, l.has_abandoned))
        .collect()
}

#[test]
fn subscriber_renders_labels_on_each_selection() {
    let mut store = loaded_store(StoreConfig::strict());
    let frames: Rc<RefCell<Vec<View>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&frames);
    store.subscribe(move |store| {
        if let Ok(Some(view)) = store.select(SelectorId::RankingLabels, None) {
            sink.borrow_mut().push(view);
        }
    });

    store.set_state(StatePatch::selected(Selection::new(1, "stage")));
    store.set_state(StatePatch::selected(Selection::new(1, "mountain")));

    let frames = frames.borrow();
    assert_eq!(frames.len(), 2);
    assert_eq!(
        label_ids(&frames[0]),
        vec![
            (ParticipantId::Rider(Bib(12)), 4, false),
            (ParticipantId::Rider(Bib(7)), 2, true),
        ]
    );
    // Mountain data only: 12 never entered it.
    assert_eq!(
        label_ids(&frames[1]),
        vec![(ParticipantId::Rider(Bib(7)), 1, false)]
    );
}

#[test]
fn loading_state_renders_empty_panel() {
    let mut store = loaded_store(StoreConfig::strict());
    store.set_state(StatePatch::selected(Selection::default()));

    for id in [SelectorId::Rankings, SelectorId::RankingLabels, SelectorId::Riders] {
        let view = store.select(id, None).unwrap().unwrap();
        assert!(view.is_empty(), "{id} should be empty while loading");
    }
}

#[test]
fn missing_classification_strict_vs_lenient() {
    let selection = Selection::new(0, "youth");

    let mut strict = loaded_store(StoreConfig::strict());
    strict.set_state(StatePatch::selected(selection.clone()));
    let err = strict.select(SelectorId::Rankings, None).unwrap_err();
    assert_eq!(
        err.ranking_error(),
        Some(&RankingError::SelectionClassificationNotDefined {
            classification: Classification::Youth
        })
    );
    assert!(err.to_string().contains("youth"));

    let mut lenient = loaded_store(StoreConfig::lenient());
    lenient.set_state(StatePatch::selected(selection));
    let fallback = View::Rankings(Vec::new());
    assert_eq!(
        lenient
            .select(SelectorId::Rankings, Some(fallback.clone()))
            .unwrap(),
        Some(fallback)
    );
}

#[test]
fn malformed_classification_surfaces_guard_error() {
    let mut store = loaded_store(StoreConfig::strict());
    store.set_state(StatePatch::selected(Selection::new(0, "Mountain")));

    let err = store.select_named("rankingLabels", None).unwrap_err();
    match err {
        StoreError::SelectorExecution {
            name, state_keys, ..
        } => {
            assert_eq!(name, "rankingLabels");
            assert_eq!(state_keys, vec!["sport_data", "selected"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn custom_selector_is_reachable_by_name() {
    let mut store = loaded_store(StoreConfig::strict());
    store
        .register_selector("leader", |state| {
            let labels = pl_store::selectors::select_ranking_labels(state)?;
            let leader = labels
                .as_ranking_labels()
                .and_then(|l| l.first())
                .map(|l| l.label.clone());
            Ok(View::Custom(serde_json::json!(leader)))
        })
        .unwrap();
    store.set_state(StatePatch::selected(Selection::new(1, "stage")));

    assert_eq!(
        store.select_named("leader", None).unwrap(),
        Some(View::Custom(serde_json::json!("Rider 12")))
    );
    assert!(store.selector_names().contains(&"leader".to_string()));
}

#[test]
fn repeated_select_is_identical() {
    let mut store = loaded_store(StoreConfig::strict());
    store.set_state(StatePatch::selected(Selection::new(1, "stage")));
    let a = store.select(SelectorId::Riders, None).unwrap();
    let b = store.select(SelectorId::Riders, None).unwrap();
    assert_eq!(a, b);
}

#[test]
fn guard_errors_keep_their_type() {
    let store = Store::new(StoreConfig::strict());
    let err = store.select(SelectorId::RaceStages, None).unwrap_err();
    assert_eq!(
        err.ranking_error(),
        Some(&RankingError::Guard(GuardError::StateNotInitialized))
    );
}
