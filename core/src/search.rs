/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! Query composition for the evaluation list endpoint. Each function takes
//! and returns a `Select<EEvaluation>` so the endpoint can stack
//! visibility, search and filters before paginating.

use entity::evaluation::Visibility;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select,
};

use super::types::*;

/// Weighted search vector over title (A) and description (B). Must stay
/// byte-identical to the expression in the GIN index migration or Postgres
/// will fall back to a sequential scan.
const SEARCH_VECTOR: &str = "setweight(to_tsvector('english', coalesce(\"title\", '')), 'A') || \
     setweight(to_tsvector('english', coalesce(\"brief_description\", '')), 'B')";

/// Base queryset for a (possibly anonymous) viewer: public rows for
/// everyone, civil-service rows for any signed-in user, drafts only for
/// their creator.
pub fn authorised_evaluations(user: Option<&MUser>) -> Select<EEvaluation> {
    let mut visible = Condition::any().add(CEvaluation::Visibility.eq(Visibility::Public));

    if let Some(user) = user {
        visible = visible
            .add(CEvaluation::Visibility.eq(Visibility::CivilService))
            .add(
                Condition::all()
                    .add(CEvaluation::Visibility.eq(Visibility::Draft))
                    .add(CEvaluation::CreatedBy.eq(user.id)),
            );
    }

    EEvaluation::find().filter(visible)
}

/// Applies a plain-language full-text search, best matches first. An empty
/// or whitespace term leaves the select untouched.
pub fn full_text_search(select: Select<EEvaluation>, term: &str) -> Select<EEvaluation> {
    let term = term.trim();

    if term.is_empty() {
        return select;
    }

    select
        .filter(Expr::cust_with_values(
            format!("({}) @@ plainto_tsquery('english', $1)", SEARCH_VECTOR),
            [term],
        ))
        .order_by_desc(Expr::cust_with_values(
            format!(
                "ts_rank({}, plainto_tsquery('english', $1))",
                SEARCH_VECTOR
            ),
            [term],
        ))
}

/// Restricts to evaluations linked to any of the given department codes
/// and any of the given design-type codes. The joins fan out over the
/// association tables, so the result is made distinct.
pub fn filter_by_departments_and_types(
    mut select: Select<EEvaluation>,
    department_codes: &[String],
    design_type_codes: &[String],
) -> Select<EEvaluation> {
    if !department_codes.is_empty() {
        select = select
            .join_rev(
                JoinType::InnerJoin,
                EEvaluationDepartment::belongs_to(entity::evaluation::Entity)
                    .from(CEvaluationDepartment::Evaluation)
                    .to(CEvaluation::Id)
                    .into(),
            )
            .join(
                JoinType::InnerJoin,
                entity::evaluation_department_association::Relation::Department.def(),
            )
            .filter(CDepartment::Code.is_in(department_codes.iter().map(String::as_str)));
    }

    if !design_type_codes.is_empty() {
        select = select
            .join_rev(
                JoinType::InnerJoin,
                EEvaluationDesignTypeDetail::belongs_to(entity::evaluation::Entity)
                    .from(CEvaluationDesignTypeDetail::Evaluation)
                    .to(CEvaluation::Id)
                    .into(),
            )
            .join(
                JoinType::InnerJoin,
                entity::evaluation_design_type_detail::Relation::DesignType.def(),
            )
            .filter(CEvaluationDesignType::Code.is_in(design_type_codes.iter().map(String::as_str)));
    }

    if !department_codes.is_empty() || !design_type_codes.is_empty() {
        select = select.distinct();
    }

    select
}
