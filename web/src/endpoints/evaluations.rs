/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use core::consts::PAGE_SIZE;
use core::search::{authorised_evaluations, filter_by_departments_and_types, full_text_search};
use core::types::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::requests::*;

pub async fn get_evaluations(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<Option<MUser>>,
    Query(query): Query<EvaluationListQuery>,
) -> WebResult<Json<BaseResponse<EvaluationListResponse>>> {
    let page = query.page.unwrap_or(1).max(1);

    let mut select = authorised_evaluations(user.as_ref());
    select = full_text_search(select, query.search_term.as_deref().unwrap_or(""));
    select = filter_by_departments_and_types(
        select,
        &query.department_codes(),
        &query.evaluation_type_codes(),
    );
    select = select.order_by_desc(CEvaluation::ModifiedAt);

    let paginator = select.paginate(&state.db, PAGE_SIZE);
    let totals = paginator.num_items_and_pages().await?;
    let evaluations = paginator.fetch_page(page - 1).await?;

    let evaluations = evaluations
        .into_iter()
        .map(|e| EvaluationListItem {
            id: e.id,
            title: e.title,
            brief_description: e.brief_description,
            status: e.status,
        })
        .collect();

    let res = BaseResponse {
        error: false,
        message: EvaluationListResponse {
            page,
            total_pages: totals.number_of_pages,
            total_evaluations: totals.number_of_items,
            evaluations,
        },
    };

    Ok(Json(res))
}

pub async fn get_evaluation(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<Option<MUser>>,
    Path(evaluation_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<EvaluationDetailResponse>>> {
    // Visibility is part of the lookup, so a draft someone else owns is
    // indistinguishable from a missing record.
    let evaluation = authorised_evaluations(user.as_ref())
        .filter(CEvaluation::Id.eq(evaluation_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Evaluation"))?;

    let departments = EEvaluationDepartment::find()
        .filter(CEvaluationDepartment::Evaluation.eq(evaluation.id))
        .find_also_related(entity::department::Entity)
        .all(&state.db)
        .await?
        .into_iter()
        .filter_map(|(association, department)| {
            department.map(|d| DepartmentItem {
                code: d.code,
                display: d.display,
                is_lead: association.is_lead,
            })
        })
        .collect();

    let design_types = EEvaluationDesignTypeDetail::find()
        .filter(CEvaluationDesignTypeDetail::Evaluation.eq(evaluation.id))
        .find_also_related(entity::evaluation_design_type::Entity)
        .all(&state.db)
        .await?
        .into_iter()
        .filter_map(|(detail, design_type)| {
            design_type.map(|d| DesignTypeLink {
                code: d.code,
                text: detail.text,
            })
        })
        .collect();

    let policy_areas = core::database::linked_taxonomy_codes(Arc::clone(&state), evaluation.id)
        .await
        .map_err(WebError::Internal)?;

    let event_dates = EEventDate::find()
        .filter(CEventDate::Evaluation.eq(evaluation.id))
        .order_by_asc(CEventDate::Year)
        .all(&state.db)
        .await?;

    let reports = EReport::find()
        .filter(CReport::Evaluation.eq(evaluation.id))
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: EvaluationDetailResponse {
            evaluation,
            departments,
            design_types,
            policy_areas,
            event_dates,
            reports,
        },
    };

    Ok(Json(res))
}

pub async fn get_departments(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<LookupItem>>>> {
    let departments = EDepartment::find()
        .order_by_asc(CDepartment::Display)
        .all(&state.db)
        .await?
        .into_iter()
        .map(|d| LookupItem {
            code: d.code,
            display: d.display,
        })
        .collect();

    let res = BaseResponse {
        error: false,
        message: departments,
    };

    Ok(Json(res))
}

/// Design types under `parent`, or the top-level types when no parent is
/// given. An unknown parent code yields an empty list, matching the
/// wizard's behaviour for de-selected branches.
pub async fn get_design_types(
    state: State<Arc<ServerState>>,
    Query(query): Query<DesignTypeListQuery>,
) -> WebResult<Json<BaseResponse<Vec<DesignTypeOption>>>> {
    let design_types =
        core::database::design_type_children(Arc::clone(&state), query.parent.as_deref())
            .await
            .map_err(WebError::Internal)?
            .into_iter()
            .map(|d| DesignTypeOption {
                code: d.code,
                display: d.display,
                collect_description: d.collect_description,
            })
            .collect();

    let res = BaseResponse {
        error: false,
        message: design_types,
    };

    Ok(Json(res))
}

pub async fn get_policy_areas(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<LookupItem>>>> {
    let taxonomies = ETaxonomy::find()
        .filter(CTaxonomy::Parent.is_null())
        .order_by_asc(CTaxonomy::Display)
        .all(&state.db)
        .await?
        .into_iter()
        .map(|t| LookupItem {
            code: t.code,
            display: t.display,
        })
        .collect();

    let res = BaseResponse {
        error: false,
        message: taxonomies,
    };

    Ok(Json(res))
}
