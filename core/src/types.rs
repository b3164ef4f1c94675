/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use super::input::port_in_range;
use clap::{Parser, Subcommand};
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "Evaluation Registry", display_name = "Evaluation Registry", bin_name = "registry-server", author = "Evaluation Task Force", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "REGISTRY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "REGISTRY_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "REGISTRY_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "REGISTRY_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "REGISTRY_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "REGISTRY_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    /// Comma-separated list of email domains allowed to sign in.
    #[arg(
        long,
        env = "REGISTRY_ALLOWED_EMAIL_DOMAINS",
        default_value = "gov.uk,cabinetoffice.gov.uk"
    )]
    pub allowed_email_domains: String,
    #[arg(long, env = "REGISTRY_ENVIRONMENT", default_value = "local")]
    pub environment: String,
    #[arg(long, env = "REGISTRY_AI_API_URL", default_value = "https://api.openai.com/v1")]
    pub ai_api_url: String,
    #[arg(long, env = "REGISTRY_AI_API_KEY_FILE")]
    pub ai_api_key_file: Option<String>,
    #[arg(long, env = "REGISTRY_AI_MODEL", default_value = "gpt-4o-mini")]
    pub ai_model: String,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the web server (the default when no command is given)
    Serve,
    /// Load an RSM CSV export into the database
    LoadRsmCsv { file: String },
    /// Load an RSM JSON export into the database
    LoadRsmJson { file: String },
    /// Reformat imported descriptions with the AI text formatter
    ReformatDescriptions {
        /// Stop after this many evaluations
        #[arg(long)]
        max: Option<usize>,
    },
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EDepartment = department::Entity;
pub type EEvaluation = evaluation::Entity;
pub type EEvaluationDepartment = evaluation_department_association::Entity;
pub type EEvaluationDesignTypeDetail = evaluation_design_type_detail::Entity;
pub type EEvaluationDesignType = evaluation_design_type::Entity;
pub type EEvaluationTaxonomy = evaluation_taxonomy::Entity;
pub type EEventDate = event_date::Entity;
pub type EReport = report::Entity;
pub type ETaxonomy = taxonomy::Entity;
pub type EUser = user::Entity;

pub type MDepartment = department::Model;
pub type MEvaluation = evaluation::Model;
pub type MEvaluationDepartment = evaluation_department_association::Model;
pub type MEvaluationDesignTypeDetail = evaluation_design_type_detail::Model;
pub type MEvaluationDesignType = evaluation_design_type::Model;
pub type MEvaluationTaxonomy = evaluation_taxonomy::Model;
pub type MEventDate = event_date::Model;
pub type MReport = report::Model;
pub type MTaxonomy = taxonomy::Model;
pub type MUser = user::Model;

pub type ADepartment = department::ActiveModel;
pub type AEvaluation = evaluation::ActiveModel;
pub type AEvaluationDepartment = evaluation_department_association::ActiveModel;
pub type AEvaluationDesignTypeDetail = evaluation_design_type_detail::ActiveModel;
pub type AEvaluationDesignType = evaluation_design_type::ActiveModel;
pub type AEvaluationTaxonomy = evaluation_taxonomy::ActiveModel;
pub type AEventDate = event_date::ActiveModel;
pub type AReport = report::ActiveModel;
pub type ATaxonomy = taxonomy::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CDepartment = department::Column;
pub type CEvaluation = evaluation::Column;
pub type CEvaluationDepartment = evaluation_department_association::Column;
pub type CEvaluationDesignTypeDetail = evaluation_design_type_detail::Column;
pub type CEvaluationDesignType = evaluation_design_type::Column;
pub type CEvaluationTaxonomy = evaluation_taxonomy::Column;
pub type CEventDate = event_date::Column;
pub type CReport = report::Column;
pub type CTaxonomy = taxonomy::Column;
pub type CUser = user::Column;
