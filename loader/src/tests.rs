/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

#[cfg(test)]
mod tests {
    use crate::ai::EvaluationInitialData;
    use crate::csv::load_rsm_csv_data;
    use crate::rsm::{RsmRecord, impact_design_code, parse_row};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::Value;

    fn record(header: &[&str], line: &str) -> RsmRecord {
        let header: Vec<String> = header.iter().map(|h| h.to_string()).collect();
        RsmRecord::new(&header, parse_row(line).unwrap())
    }

    #[test]
    fn test_parse_row_is_a_json_array_without_brackets() {
        let row = parse_row(r#"123,"A title",null,"Y""#).unwrap();

        assert_eq!(row.len(), 4);
        assert_eq!(row[0], Value::from(123));
        assert_eq!(row[2], Value::Null);
    }

    #[test]
    fn test_record_accessors() {
        let record = record(
            &["Evaluation ID", "Evaluation title", "Major projects identifier", "Process"],
            r#"42,"School meals",null,"Y""#,
        );

        assert_eq!(record.number("Evaluation ID"), Some(42));
        assert_eq!(record.text("Evaluation title"), Some("School meals"));
        assert_eq!(record.text("Major projects identifier"), None);
        assert!(!record.is_major_project());
        assert!(record.flag("Process"));
        assert!(!record.flag("Missing column"));
    }

    #[test]
    fn test_from_object_strips_byte_order_mark_from_keys() {
        let mut cells = std::collections::HashMap::new();
        cells.insert("\u{feff}Evaluation ID".to_string(), Value::from("7"));

        let record = RsmRecord::from_object(cells);

        assert_eq!(record.number("Evaluation ID"), Some(7));
    }

    #[test]
    fn test_other_type_sentinels_mean_no_other_type() {
        let header = ["Other evaluation type (please state)"];

        assert_eq!(
            record(&header, r#""Information not easily found within the report""#)
                .other_type_description(),
            None
        );
        assert_eq!(record(&header, r#""N""#).other_type_description(), None);
        assert_eq!(
            record(&header, r#""Longitudinal study""#).other_type_description(),
            Some("Longitudinal study")
        );
    }

    #[test]
    fn test_impact_design_code_mapping() {
        assert_eq!(
            impact_design_code("Randomised Controlled Trial (RCT)"),
            Some("rct")
        );
        assert_eq!(impact_design_code("Forcus group"), Some("group_process"));
        assert_eq!(impact_design_code("Propensity Score Matching"), Some("propensity"));
        assert_eq!(impact_design_code("Bespoke methodology"), None);
    }

    #[test]
    fn test_csv_loader_row_accounting() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            // every row is excluded by a skip rule, so the loader never
            // reaches the database
            let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

            let contents = concat!(
                "\"Evaluation ID\",\"Evaluation title\",\"Major projects identifier\"\n",
                "1,\"A major project\",\"Y\"\n",
                "2,null,\"N\"\n",
                "3,\"Listed twice\",\"N\"\n",
                "3,\"Listed twice\",\"N\"\n",
            );

            let counts = load_rsm_csv_data(&db, contents).await.unwrap();

            assert_eq!(counts.created, 0);
            assert_eq!(counts.skipped_major_project, 1);
            assert_eq!(counts.skipped_no_title, 1);
            assert_eq!(counts.skipped_duplicate_id, 1);
        });
    }

    #[test]
    fn test_csv_loader_rejects_empty_file() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

            assert!(load_rsm_csv_data(&db, "").await.is_err());
        });
    }

    #[test]
    fn test_extracted_evaluation_deserializes() {
        let answer = r#"{
            "title": "Youth employment pilot",
            "brief_description": "An evaluation of the pilot.",
            "lead_department": "Department for Work & Pensions",
            "status": "ongoing",
            "evaluation_design_types": ["impact", "rct"]
        }"#;

        let data: EvaluationInitialData = serde_json::from_str(answer).unwrap();

        assert_eq!(data.title, "Youth employment pilot");
        assert_eq!(data.status, "ongoing");
        assert_eq!(data.evaluation_design_types, vec!["impact", "rct"]);
    }
}
