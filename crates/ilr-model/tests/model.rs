//! Serialization tests for the ILR model.

use chrono::NaiveDate;
use ilr_model::codes::{app_fin, fund_model};
use ilr_model::{Message, ValidationOptions};

const MESSAGE_JSON: &str = r#"{
    "Header": {
        "CollectionDetails": {
            "Collection": "ILR",
            "Year": "1920",
            "FilePreparationDate": "2019-10-01"
        }
    },
    "LearningProvider": { "UKPRN": 10000001 },
    "Learner": [
        {
            "LearnRefNumber": "0fm3601",
            "ULN": 1234567890,
            "LearnerEmploymentStatus": [
                { "EmpStat": 10, "DateEmpStatApp": "2019-07-01" }
            ],
            "LearningDelivery": [
                {
                    "LearnAimRef": "ZPROG001",
                    "AimType": 1,
                    "AimSeqNumber": 1,
                    "LearnStartDate": "2019-08-01",
                    "LearnPlanEndDate": "2020-08-01",
                    "FundModel": 36,
                    "ProgType": 25,
                    "StdCode": 17,
                    "CompStatus": 1,
                    "LearningDeliveryFAM": [
                        {
                            "LearnDelFAMType": "ACT",
                            "LearnDelFAMCode": "1",
                            "LearnDelFAMDateFrom": "2019-08-01"
                        }
                    ],
                    "AppFinRecord": [
                        {
                            "AFinType": "TNP",
                            "AFinCode": 1,
                            "AFinDate": "2019-08-01",
                            "AFinAmount": 9000
                        }
                    ]
                }
            ]
        }
    ],
    "LearnerDestinationandProgression": [
        {
            "LearnRefNumber": "0fm3601",
            "ULN": 1234567890,
            "DPOutcome": [
                {
                    "OutType": "EMP",
                    "OutCode": 1,
                    "OutStartDate": "2020-09-01",
                    "OutCollDate": "2020-10-01"
                }
            ]
        }
    ]
}"#;

#[test]
fn message_deserializes_from_ilr_names() {
    let message: Message = serde_json::from_str(MESSAGE_JSON).expect("parse message");

    assert_eq!(message.ukprn(), Some(10_000_001));
    assert_eq!(message.collection_year(), Some("1920"));
    assert_eq!(
        message.file_preparation_date(),
        NaiveDate::from_ymd_opt(2019, 10, 1)
    );

    let learner = &message.learners[0];
    assert_eq!(learner.learn_ref_number, "0fm3601");
    assert_eq!(learner.uln, 1_234_567_890);
    assert!(learner.learner_fams.is_empty());

    let delivery = &learner.learning_deliveries[0];
    assert_eq!(delivery.fund_model, fund_model::APPRENTICESHIPS);
    assert_eq!(delivery.std_code, Some(17));
    assert_eq!(delivery.fwork_code, None);
    assert_eq!(delivery.learning_delivery_fams[0].learn_del_fam_code, "1");
    assert_eq!(
        delivery.learning_delivery_fams[0].learn_del_fam_date_to,
        None
    );
    assert_eq!(delivery.app_fin_records[0].afin_type, app_fin::TNP);
    assert_eq!(delivery.app_fin_records[0].afin_amount, 9000);

    let dp = &message.learner_destination_and_progressions[0];
    assert_eq!(dp.dp_outcomes[0].out_type, "EMP");
    assert_eq!(dp.dp_outcomes[0].out_end_date, None);
}

#[test]
fn message_round_trips_through_json() {
    let message: Message = serde_json::from_str(MESSAGE_JSON).expect("parse message");
    let json = serde_json::to_string(&message).expect("serialize message");
    let round: Message = serde_json::from_str(&json).expect("deserialize message");
    assert_eq!(round, message);
}

#[test]
fn empty_message_defaults_collections() {
    let message: Message = serde_json::from_str("{}").expect("parse empty message");
    assert!(message.learners.is_empty());
    assert!(message.learner_destination_and_progressions.is_empty());
    assert_eq!(message.collection_year(), None);
}

#[test]
fn validation_options_deserialize_with_defaults() {
    let options: ValidationOptions =
        serde_json::from_str(r#"{ "disabled_rules": ["R59"] }"#).expect("parse options");
    assert!(!options.is_enabled("R59"));
    assert_eq!(options.reference_date, None);
    assert_eq!(options.academic_year, None);
}
