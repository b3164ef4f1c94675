/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

#[cfg(test)]
mod tests {
    use crate::error::{FieldErrors, WebError};
    use crate::requests::*;
    use axum::response::IntoResponse;
    use core::types::*;
    use entity::evaluation::EvaluationStatus;
    use http::StatusCode;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn create_mock_cli() -> Cli {
        Cli {
            log_level: "info".to_string(),
            ip: "127.0.0.1".to_string(),
            port: 3000,
            database_url: Some("mock://test".to_string()),
            database_url_file: None,
            jwt_secret_file: "test_jwt".to_string(),
            allowed_email_domains: "gov.uk,cabinetoffice.gov.uk".to_string(),
            environment: "local".to_string(),
            ai_api_url: "https://api.openai.com/v1".to_string(),
            ai_api_key_file: None,
            ai_model: "gpt-4o-mini".to_string(),
            command: None,
        }
    }

    fn create_mock_state() -> Arc<ServerState> {
        let cli = create_mock_cli();
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        Arc::new(ServerState { db, cli })
    }

    #[test]
    fn test_router_builds_with_mock_state() {
        let state = create_mock_state();
        let _router = crate::build_router(state);
    }

    #[test]
    fn test_list_query_splits_comma_separated_codes() {
        let query = EvaluationListQuery {
            search_term: Some("school meals".to_string()),
            departments: Some("cabinet-office, dwp ,".to_string()),
            evaluation_types: None,
            page: None,
        };

        assert_eq!(query.department_codes(), vec!["cabinet-office", "dwp"]);
        assert!(query.evaluation_type_codes().is_empty());
    }

    #[test]
    fn test_field_errors_collect_per_field() {
        let mut fields = FieldErrors::default();
        fields.add("title", "Title is required");
        fields.add("departments", "Unknown department: dft");
        fields.add("departments", "This department has been listed more than once: Cabinet Office");

        assert!(fields.into_result().is_err());

        let empty = FieldErrors::default();
        assert!(empty.into_result().is_ok());
    }

    #[test]
    fn test_field_errors_render_as_bad_request() {
        let mut fields = FieldErrors::default();
        fields.add("title", "Title is required");

        let response = WebError::Fields(fields).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_response_status() {
        let response = WebError::not_found("Evaluation").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_make_evaluation_request_defaults() {
        let form: MakeEvaluationRequest = serde_json::from_str(
            r#"{"status": "planned", "lead_department": "cabinet-office"}"#,
        )
        .unwrap();

        assert_eq!(form.title, "");
        assert_eq!(form.status, EvaluationStatus::Planned);
        assert!(form.departments.is_empty());
    }

    #[test]
    fn test_share_step_request_ignores_other_steps_fields() {
        let form: ShareStepRequest =
            serde_json::from_str(r#"{"codes": ["impact"], "cost": "250000"}"#).unwrap();

        assert_eq!(form.codes, Some(vec!["impact".to_string()]));
        assert_eq!(form.cost, Some("250000".to_string()));
        assert!(form.dates.is_none());
        assert!(form.visibility.is_none());
    }

    #[test]
    fn test_event_date_form_delete_defaults_to_false() {
        let row: EventDateForm = serde_json::from_str(
            r#"{"category": "eval_start", "month": 4, "year": 2024, "status": "intended", "id": null, "other_description": null}"#,
        )
        .unwrap();

        assert!(!row.delete);
        assert_eq!(row.month, Some(4));
    }

    #[test]
    fn test_share_page_response_shapes() {
        let finished = SharePageResponse::finished(15);
        assert!(finished.finished);
        assert!(finished.next_page.is_none());

        let step = SharePageResponse::step(9, "description", 10);
        assert!(!step.finished);
        assert_eq!(step.step.as_deref(), Some("description"));
        assert_eq!(step.next_page, Some(10));
    }
}
