//! Integration tests for listfilter
//!
//! These tests exercise the public API end to end: building a model for a
//! mode, hydrating it from a query string, building query-API payloads and
//! encoding the state back into a URL.

use listfilter::criteria::{
    Criterion, CriterionError, CriterionKind, CriterionModifier, CriterionValue, ReferenceItem,
    create_criterion,
};
use listfilter::filters::{DisplayMode, FilterMode, ListFilterModel, ResolutionEnum, SortDirection};
use listfilter::query::{DecodePolicy, QueryError, QueryParams};

/// Helper function to build a criterion of `kind` holding `value`
fn make(kind: &str, value: CriterionValue) -> Criterion {
    let mut criterion = create_criterion(kind).unwrap();
    criterion.set_value(value).unwrap();
    criterion
}

/// Helper function to build unnamed references
fn refs(ids: &[&str]) -> Vec<ReferenceItem> {
    ids.iter().map(|id| ReferenceItem::new(*id, "")).collect()
}

/// Helper function to decode a query string into a fresh model
fn decode(mode: FilterMode, query: &str) -> Result<ListFilterModel, QueryError> {
    let mut model = ListFilterModel::new(mode);
    model.configure_from_query_parameters(&QueryParams::from_query_string(query)?)?;
    Ok(model)
}

#[test]
fn test_every_mode_has_universal_sorts_and_none_first() {
    let models = FilterMode::ALL
        .into_iter()
        .map(ListFilterModel::new)
        .chain([ListFilterModel::from_mode_name("unknown")]);

    for model in models {
        let n = model.sort_by_options.len();
        assert!(n >= 2);
        assert_eq!(model.sort_by_options[n - 2], "created_at");
        assert_eq!(model.sort_by_options[n - 1], "updated_at");
        assert_eq!(model.criterion_options[0].kind, CriterionKind::None);
    }
}

#[test]
fn test_round_trip_through_query_string() {
    let mut model = ListFilterModel::new(FilterMode::Scenes);
    model.sort_by = Some("rating".to_string());
    model.sort_direction = SortDirection::Desc;
    model.display_mode = Some(DisplayMode::Wall);
    model.search_term = Some("sunset & beach +1".to_string());
    model.current_page = 3;
    model.criteria = vec![
        make("rating", CriterionValue::Rating(4))
            .with_modifier(CriterionModifier::GreaterThan)
            .unwrap(),
        make("resolution", CriterionValue::Resolution("1080p".into())),
        make("hasMarkers", CriterionValue::HasMarkers(true)),
        make("isMissing", CriterionValue::IsMissing("studio".into())),
        make(
            "tags",
            CriterionValue::Tags(vec![ReferenceItem::new("1", "outdoor #1")]),
        ),
        make("performers", CriterionValue::Performers(refs(&["7", "8"]))),
        make("studios", CriterionValue::Studios(refs(&["9"]))),
        create_criterion("none").unwrap(),
    ];

    let query = model.make_query_string().unwrap();
    let decoded = decode(FilterMode::Scenes, &query).unwrap();

    assert_eq!(decoded.sort_by, model.sort_by);
    assert_eq!(decoded.sort_direction, model.sort_direction);
    assert_eq!(decoded.display_mode, model.display_mode);
    assert_eq!(decoded.search_term, model.search_term);
    assert_eq!(decoded.current_page, model.current_page);
    assert_eq!(decoded.criteria, model.criteria);
}

#[test]
fn test_criterion_json_is_not_percent_encoded() {
    let mut model = ListFilterModel::new(FilterMode::Scenes);
    model
        .criteria
        .push(make("tags", CriterionValue::Tags(refs(&["1"]))));

    let query = model.make_query_string().unwrap();
    assert!(query.contains(r#"c={"type":"tags","value":[{"id":"1","name":""}],"modifier":"INCLUDES_ALL"}"#));
    assert!(!query.contains("%7B"));
    assert!(!query.contains("%22"));
}

#[test]
fn test_duplicate_tags_last_wins() {
    let model = decode(
        FilterMode::Scenes,
        r#"c={"type":"tags","value":[{"id":"1"}]}&c={"type":"tags","value":[{"id":"2"}]}"#,
    )
    .unwrap();

    assert_eq!(model.criteria.len(), 2);
    assert_eq!(model.make_scene_filter().tags, Some(vec!["2".to_string()]));
}

#[test]
fn test_rating_passthrough() {
    let model = decode(
        FilterMode::Scenes,
        r#"c={"type":"rating","value":3,"modifier":"EQUALS"}"#,
    )
    .unwrap();
    let rating = model.make_scene_filter().rating.unwrap();
    assert_eq!(rating.value, 3);
    assert_eq!(rating.modifier, CriterionModifier::Equals);
}

#[test]
fn test_resolution_mapping() {
    let model = decode(FilterMode::Scenes, r#"c={"type":"resolution","value":"1080p"}"#).unwrap();
    assert_eq!(model.make_scene_filter().resolution, Some(ResolutionEnum::FullHd));

    let model = decode(FilterMode::Scenes, r#"c={"type":"resolution","value":"8k"}"#).unwrap();
    assert_eq!(model.make_scene_filter().resolution, None);
}

#[test]
fn test_favorite_literal_true() {
    let model = decode(FilterMode::Performers, r#"c={"type":"favorite","value":"true"}"#).unwrap();
    assert_eq!(model.make_performer_filter().filter_favorites, Some(true));

    let model = decode(FilterMode::Performers, r#"c={"type":"favorite","value":"yes"}"#).unwrap();
    assert_eq!(model.make_performer_filter().filter_favorites, Some(false));
}

#[test]
fn test_bad_json_criterion_is_reported() {
    let err = decode(FilterMode::Scenes, "c=bad json").unwrap_err();
    match err {
        QueryError::Criterion { index, source } => {
            assert_eq!(index, 0);
            assert!(matches!(source, CriterionError::Malformed(_)));
        }
        other => panic!("Expected Criterion error, got {other:?}"),
    }
}

#[test]
fn test_unknown_kind_is_reported() {
    let err = decode(FilterMode::Scenes, r#"c={"type":"weight","value":1}"#).unwrap_err();
    assert!(matches!(
        err,
        QueryError::Criterion {
            source: CriterionError::UnknownKind(_),
            ..
        }
    ));
}

#[test]
fn test_skip_policy_keeps_good_criteria() {
    let params = QueryParams::from_query_string(
        r#"c=bad json&c={"type":"hasMarkers","value":"true"}"#,
    )
    .unwrap();
    let mut model = ListFilterModel::new(FilterMode::Scenes);
    let skipped = model
        .configure_from_query_parameters_with(&params, DecodePolicy::Skip)
        .unwrap();

    assert_eq!(skipped.len(), 1);
    assert_eq!(model.make_scene_filter().has_markers, Some(true));
}

#[test]
fn test_display_ordinal_is_stable() {
    let model = decode(FilterMode::Scenes, "disp=2").unwrap();
    assert_eq!(model.display_mode, Some(DisplayMode::Wall));

    let params = model.make_query_parameters().unwrap();
    assert_eq!(params.get_str("disp"), Some("2"));
    assert!(model.make_query_string().unwrap().contains("disp=2"));
}

#[test]
fn test_bad_scalars_are_reported() {
    assert!(matches!(
        decode(FilterMode::Scenes, "disp=wall"),
        Err(QueryError::InvalidDisplayMode(_))
    ));
    assert!(matches!(
        decode(FilterMode::Scenes, "p=first"),
        Err(QueryError::InvalidPage(_))
    ));
}

#[test]
fn test_scene_marker_performers_keep_all_ids() {
    let query = r#"c={"type":"performers","value":[{"id":"4"},{"id":"5"}]}"#;

    let markers = decode(FilterMode::SceneMarkers, query).unwrap();
    assert_eq!(
        markers.make_scene_marker_filter().performers,
        Some(vec!["4".to_string(), "5".to_string()])
    );

    let scenes = decode(FilterMode::Scenes, query).unwrap();
    assert_eq!(scenes.make_scene_filter().performer_id.as_deref(), Some("4"));
}

#[test]
fn test_find_filter_from_query() {
    let model = decode(FilterMode::Galleries, "q=holiday&p=2&sortdir=desc").unwrap();
    let json = serde_json::to_value(model.make_find_filter()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "q": "holiday",
            "page": 2,
            "per_page": 40,
            "sort": "path",
            "direction": "DESC"
        })
    );
}
