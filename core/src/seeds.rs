/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! Static lookup data inserted by `database::update_db` on every start.
//! Rows are matched by `code`, so editing a display string here corrects
//! the stored row on the next start without duplicating it.

pub struct SeedDepartment {
    pub code: &'static str,
    pub display: &'static str,
}

pub struct SeedDesignType {
    pub code: &'static str,
    pub display: &'static str,
    pub parent: Option<&'static str>,
    pub collect_description: bool,
}

pub struct SeedTaxonomy {
    pub code: &'static str,
    pub display: &'static str,
    pub parent: Option<&'static str>,
}

pub const DEPARTMENTS: &[SeedDepartment] = &[
    SeedDepartment {
        code: "building-digital-uk",
        display: "Building Digital UK",
    },
    SeedDepartment {
        code: "cabinet-office",
        display: "Cabinet Office",
    },
    SeedDepartment {
        code: "centre-for-environment-fisheries-and-aquaculture-science",
        display: "Centre for Environment, Fisheries and Aquaculture Science",
    },
    SeedDepartment {
        code: "commission-on-race-and-ethnic-disparities",
        display: "Commission on Race and Ethnic Disparities",
    },
    SeedDepartment {
        code: "department-for-business-energy-and-industrial-strategy",
        display: "Department for Business, Energy & Industrial Strategy",
    },
    SeedDepartment {
        code: "department-for-culture-media-and-sport",
        display: "Department for Culture, Media & Sport",
    },
    SeedDepartment {
        code: "department-for-education",
        display: "Department for Education",
    },
    SeedDepartment {
        code: "department-for-energy-security-and-net-zero",
        display: "Department for Energy Security & Net Zero",
    },
    SeedDepartment {
        code: "department-for-environment-food-rural-affairs",
        display: "Department for Environment, Food & Rural Affairs",
    },
    SeedDepartment {
        code: "department-for-international-trade",
        display: "Department for International Trade",
    },
    SeedDepartment {
        code: "department-for-levelling-up-housing-and-communities",
        display: "Department for Levelling Up, Housing and Communities",
    },
    SeedDepartment {
        code: "department-for-science-innovation-and-technology",
        display: "Department for Science, Innovation & Technology",
    },
    SeedDepartment {
        code: "department-for-transport",
        display: "Department for Transport",
    },
    SeedDepartment {
        code: "department-for-work-pensions",
        display: "Department for Work & Pensions",
    },
    SeedDepartment {
        code: "department-of-health-and-social-care",
        display: "Department of Health and Social Care",
    },
    SeedDepartment {
        code: "driver-and-vehicle-standards-agency",
        display: "Driver and Vehicle Standards Agency",
    },
    SeedDepartment {
        code: "environment-agency",
        display: "Environment Agency",
    },
    SeedDepartment {
        code: "evaluation-task-force",
        display: "Evaluation Task Force",
    },
    SeedDepartment {
        code: "foreign-commonwealth-development-office",
        display: "Foreign, Commonwealth & Development Office",
    },
    SeedDepartment {
        code: "highways-agency",
        display: "Highways Agency",
    },
    SeedDepartment {
        code: "highways-england",
        display: "Highways England",
    },
    SeedDepartment {
        code: "hm-courts-and-tribunals-service",
        display: "HM Courts & Tribunals Service",
    },
    SeedDepartment {
        code: "hm-prison-and-probation-service",
        display: "HM Prison and Probation Service",
    },
    SeedDepartment {
        code: "hm-revenue-customs",
        display: "HM Revenue & Customs",
    },
    SeedDepartment {
        code: "home-office",
        display: "Home Office",
    },
    SeedDepartment {
        code: "homes-england",
        display: "Homes England",
    },
    SeedDepartment {
        code: "land-registry",
        display: "HM Land Registry",
    },
    SeedDepartment {
        code: "maritime-and-coastguard-agency",
        display: "Maritime and Coastguard Agency",
    },
    SeedDepartment {
        code: "ministry-of-defence",
        display: "Ministry of Defence",
    },
    SeedDepartment {
        code: "ministry-of-housing-communities-and-local-government",
        display: "Ministry of Housing, Communities and Local Government",
    },
    SeedDepartment {
        code: "ministry-of-justice",
        display: "Ministry of Justice",
    },
    SeedDepartment {
        code: "natural-england",
        display: "Natural England",
    },
    SeedDepartment {
        code: "office-for-artificial-intelligence",
        display: "Office for Artificial Intelligence",
    },
    SeedDepartment {
        code: "office-for-national-statistics",
        display: "Office for National Statistics",
    },
    SeedDepartment {
        code: "the-scottish-government",
        display: "The Scottish Government",
    },
    SeedDepartment {
        code: "uk-space-agency",
        display: "UK Space Agency",
    },
];

/// Parents are listed before their children so `update_db` can resolve the
/// parent link in a single pass.
pub const DESIGN_TYPES: &[SeedDesignType] = &[
    SeedDesignType {
        code: "impact",
        display: "Impact evaluation",
        parent: None,
        collect_description: false,
    },
    SeedDesignType {
        code: "process",
        display: "Process evaluation",
        parent: None,
        collect_description: false,
    },
    SeedDesignType {
        code: "economic",
        display: "Economic evaluation",
        parent: None,
        collect_description: false,
    },
    SeedDesignType {
        code: "other",
        display: "Other",
        parent: None,
        collect_description: true,
    },
    SeedDesignType {
        code: "rct",
        display: "Randomised controlled trial (RCT)",
        parent: Some("impact"),
        collect_description: false,
    },
    SeedDesignType {
        code: "quasi_experimental",
        display: "Quasi-experimental methods",
        parent: Some("impact"),
        collect_description: false,
    },
    SeedDesignType {
        code: "theory",
        display: "Theory-based methods",
        parent: Some("impact"),
        collect_description: false,
    },
    SeedDesignType {
        code: "generic",
        display: "Generic research methods",
        parent: Some("impact"),
        collect_description: false,
    },
    SeedDesignType {
        code: "cluster",
        display: "Cluster randomised RCT",
        parent: Some("rct"),
        collect_description: false,
    },
    SeedDesignType {
        code: "stepped_wedge",
        display: "Stepped wedge RCT",
        parent: Some("rct"),
        collect_description: false,
    },
    SeedDesignType {
        code: "wait_list",
        display: "Wait-list RCT",
        parent: Some("rct"),
        collect_description: false,
    },
    SeedDesignType {
        code: "propensity",
        display: "Propensity score matching",
        parent: Some("quasi_experimental"),
        collect_description: false,
    },
    SeedDesignType {
        code: "difference",
        display: "Difference in difference",
        parent: Some("quasi_experimental"),
        collect_description: false,
    },
    SeedDesignType {
        code: "synthetic",
        display: "Synthetic control methods",
        parent: Some("quasi_experimental"),
        collect_description: false,
    },
    SeedDesignType {
        code: "regression_discontinuity",
        display: "Regression discontinuity design",
        parent: Some("quasi_experimental"),
        collect_description: false,
    },
    SeedDesignType {
        code: "process_tracing",
        display: "Process tracing",
        parent: Some("theory"),
        collect_description: false,
    },
    SeedDesignType {
        code: "contribution_tracing",
        display: "Contribution tracing",
        parent: Some("theory"),
        collect_description: false,
    },
    SeedDesignType {
        code: "qca",
        display: "Qualitative comparative analysis (QCA)",
        parent: Some("theory"),
        collect_description: false,
    },
    SeedDesignType {
        code: "outcome",
        display: "Outcome harvesting",
        parent: Some("theory"),
        collect_description: false,
    },
    SeedDesignType {
        code: "simulation",
        display: "Simulation modelling",
        parent: Some("generic"),
        collect_description: false,
    },
    SeedDesignType {
        code: "surveys_process",
        display: "Surveys and polling",
        parent: Some("process"),
        collect_description: false,
    },
    SeedDesignType {
        code: "individual_process",
        display: "Individual interviews",
        parent: Some("process"),
        collect_description: false,
    },
    SeedDesignType {
        code: "group_process",
        display: "Focus groups or group interviews",
        parent: Some("process"),
        collect_description: false,
    },
    SeedDesignType {
        code: "case_study_process",
        display: "Case studies",
        parent: Some("process"),
        collect_description: false,
    },
    SeedDesignType {
        code: "output_process",
        display: "Output or performance monitoring",
        parent: Some("process"),
        collect_description: false,
    },
    SeedDesignType {
        code: "qualitative_process",
        display: "Qualitative research",
        parent: Some("process"),
        collect_description: false,
    },
    SeedDesignType {
        code: "consultative_process",
        display: "Consultative or deliberative methods",
        parent: Some("process"),
        collect_description: false,
    },
    SeedDesignType {
        code: "cost_benefit",
        display: "Cost-benefit analysis",
        parent: Some("economic"),
        collect_description: false,
    },
    SeedDesignType {
        code: "cost_effectiveness",
        display: "Cost-effectiveness analysis",
        parent: Some("economic"),
        collect_description: false,
    },
];

pub const TAXONOMIES: &[SeedTaxonomy] = &[
    SeedTaxonomy {
        code: "benefits",
        display: "Welfare and benefits",
        parent: None,
    },
    SeedTaxonomy {
        code: "business-and-industry",
        display: "Business and industry",
        parent: None,
    },
    SeedTaxonomy {
        code: "crime-justice-and-law",
        display: "Crime, justice and law",
        parent: None,
    },
    SeedTaxonomy {
        code: "defence-and-armed-forces",
        display: "Defence and armed forces",
        parent: None,
    },
    SeedTaxonomy {
        code: "education",
        display: "Education, training and skills",
        parent: None,
    },
    SeedTaxonomy {
        code: "environment",
        display: "Environment",
        parent: None,
    },
    SeedTaxonomy {
        code: "health-and-social-care",
        display: "Health and social care",
        parent: None,
    },
    SeedTaxonomy {
        code: "housing-local-and-community",
        display: "Housing, local and community",
        parent: None,
    },
    SeedTaxonomy {
        code: "international",
        display: "International",
        parent: None,
    },
    SeedTaxonomy {
        code: "money-and-tax",
        display: "Money and tax",
        parent: None,
    },
    SeedTaxonomy {
        code: "society-and-culture",
        display: "Society and culture",
        parent: None,
    },
    SeedTaxonomy {
        code: "transport",
        display: "Transport",
        parent: None,
    },
    SeedTaxonomy {
        code: "work-and-employment",
        display: "Work and employment",
        parent: None,
    },
];
