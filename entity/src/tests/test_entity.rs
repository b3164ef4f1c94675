/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

#[cfg(test)]
mod tests {
    use crate::evaluation::{self, EvaluationStatus, ReasonUnpublished, Visibility};
    use crate::event_date::{EventDateCategory, EventDateStatus};
    use chrono::DateTime;
    use sea_orm::{DatabaseBackend, EntityTrait, MockDatabase};
    use uuid::Uuid;

    fn sample_evaluation() -> evaluation::Model {
        let now = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        evaluation::Model {
            id: Uuid::new_v4(),
            created_by: None,
            title: Some("Free school meals pilot".to_string()),
            status: Some(EvaluationStatus::Ongoing),
            brief_description: None,
            rsm_evaluation_id: None,
            has_grant_number: false,
            grant_number: None,
            has_major_project_number: false,
            major_project_number: None,
            plan_link: None,
            link_to_published_evaluation: None,
            is_final_report_published: None,
            cost: None,
            visibility: Visibility::Draft,
            reasons_unpublished: Some(vec!["quality".to_string()]),
            quality_reasons_unpublished_description: None,
            other_reasons_unpublished_description: None,
            created_at: now,
            modified_at: now,
        }
    }

    #[tokio::test]
    async fn test_find_evaluation() {
        let expected = sample_evaluation();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![expected.clone()]])
            .into_connection();

        let found = evaluation::Entity::find_by_id(expected.id)
            .one(&db)
            .await
            .unwrap();
        assert_eq!(found, Some(expected));
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&EvaluationStatus::Complete).unwrap(),
            "\"complete\""
        );
        assert_eq!(
            serde_json::to_string(&Visibility::CivilService).unwrap(),
            "\"civil_service\""
        );
        assert_eq!(
            serde_json::to_string(&EventDateStatus::Intended).unwrap(),
            "\"intended\""
        );
        assert_eq!(
            serde_json::from_str::<EventDateCategory>("\"pub_final\"").unwrap(),
            EventDateCategory::PublicationFinalResults
        );
    }

    #[test]
    fn test_reason_unpublished_codes_are_closed() {
        for reason in ReasonUnpublished::ALL {
            assert_eq!(ReasonUnpublished::parse(reason.code()), Some(reason));
        }
        assert_eq!(ReasonUnpublished::parse("weather"), None);
        assert_eq!(ReasonUnpublished::parse(""), None);
    }
}
