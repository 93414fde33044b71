use pl_core::{Bib, Classification, NonFinishStatus, ParticipantId, StageSlot, TeamId};
use pl_data::{DataError, ValidationError, decode_race};
use pl_ranking::standings_for;

const GRAND_TOUR: &str = include_str!("../../../demos/grand_tour.json");

fn summary(
    data: &pl_core::SportData,
    stage: u32,
    classification: Classification,
) -> Vec<(ParticipantId, u32, bool)> {
    standings_for(data, stage, classification)
        .unwrap()
        .into_iter()
        .map(|s| (s.id, s.ranking, s.has_abandoned))
        .collect()
}

#[test]
fn decode_grand_tour() {
    let data = decode_race(GRAND_TOUR).unwrap();

    assert_eq!(data.riders.len(), 5, "null rider 99 is dropped");
    assert_eq!(data.teams.len(), 3);
    assert_eq!(data.stages.len(), 4);
    assert_eq!(data.classifications.len(), 5);
    assert_eq!(data.last_stage(), Some(3));

    // Riders without a team field inherit it from the roster.
    assert_eq!(data.riders[&Bib(1)].team_id, Some(TeamId(1)));
    assert_eq!(data.riders[&Bib(11)].team_id, Some(TeamId(2)));

    assert_eq!(
        data.results[&11].slot(3),
        &StageSlot::NonFinish(NonFinishStatus::Dns)
    );
    assert_eq!(
        data.classifications[&Classification::Team][&3].slot(2),
        &StageSlot::NonFinish(NonFinishStatus::Dnf)
    );
}

#[test]
fn general_classification_after_final_stage() {
    let data = decode_race(GRAND_TOUR).unwrap();
    let rider = |bib| ParticipantId::Rider(Bib(bib));

    assert_eq!(
        summary(&data, 3, Classification::General),
        vec![
            (rider(1), 1, false),
            (rider(2), 3, false),
            (rider(12), 2, false),
            (rider(11), 4, true),
            (rider(21), 5, true),
        ]
    );
}

#[test]
fn mountain_excludes_riders_who_never_scored() {
    let data = decode_race(GRAND_TOUR).unwrap();
    let rider = |bib| ParticipantId::Rider(Bib(bib));

    assert!(summary(&data, 0, Classification::Mountain).is_empty());
    assert_eq!(
        summary(&data, 3, Classification::Mountain),
        vec![(rider(12), 1, false), (rider(21), 2, true)]
    );
}

#[test]
fn team_classification_ranks_teams() {
    let data = decode_race(GRAND_TOUR).unwrap();
    let team = |id| ParticipantId::Team(TeamId(id));

    assert_eq!(
        summary(&data, 2, Classification::Team),
        vec![(team(1), 1, false), (team(2), 2, false), (team(3), 3, true)]
    );
}

#[test]
fn broken_roster_is_rejected() {
    let json = r#"{
        "riders": { "1": { "name": "A" } },
        "teams": { "5": { "name": "T", "riders": [1, 2] } }
    }"#;
    let err = decode_race(json).unwrap_err();
    assert!(matches!(
        err,
        DataError::Validation(ValidationError::MissingReference { .. })
    ));
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(decode_race("{ riders: "), Err(DataError::Json(_))));
}
