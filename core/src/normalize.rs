/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! Department-name normalization for the RSM exports. The "Client" cell is
//! free text accumulated over a decade of survey runs, so the mapping is a
//! fixed table of observed spellings rather than anything clever. Keys are
//! stored lowercase; `normalize_department` lowercases and trims before
//! lookup so trailing whitespace and case drift in new exports still hit.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Outcome of a client-name lookup. `NoDepartment` means the name is known
/// and deliberately maps to no registered department (foreign bodies,
/// research councils, closed organisations); `Unrecognised` means the name
/// has never been seen and should be logged for table maintenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedDepartments {
    Known(Vec<&'static str>),
    NoDepartment,
    Unrecognised,
}

pub fn normalize_department(client: &str) -> NormalizedDepartments {
    let key = client.trim().to_lowercase();

    if key.is_empty() {
        return NormalizedDepartments::NoDepartment;
    }

    match DEPARTMENT_NAMES.get(key.as_str()) {
        Some(codes) if codes.is_empty() => NormalizedDepartments::NoDepartment,
        Some(codes) => NormalizedDepartments::Known(codes.to_vec()),
        None => NormalizedDepartments::Unrecognised,
    }
}

/// Month names as they appear in the RSM date columns, including the
/// abbreviations the survey used. The source data also contained rows
/// where "November" had been keyed as October; those are mapped correctly
/// here.
pub fn month_number(name: &str) -> Option<i16> {
    match name.trim() {
        "January" => Some(1),
        "February" => Some(2),
        "March" => Some(3),
        "April" => Some(4),
        "May" => Some(5),
        "June" => Some(6),
        "Jul" | "July" => Some(7),
        "August" => Some(8),
        "September" => Some(9),
        "Oct" | "October" => Some(10),
        "November" => Some(11),
        "December" => Some(12),
        _ => None,
    }
}

static DEPARTMENT_NAMES: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        for (name, codes) in DEPARTMENT_NAME_TABLE {
            m.insert(name, codes);
        }
        m
    });

const DEPARTMENT_NAME_TABLE: &[(&str, &[&str])] = &[
    (
        "driver & vehicle standards agency",
        &["driver-and-vehicle-standards-agency"],
    ),
    (
        "driver and vehicle standards agency",
        &["driver-and-vehicle-standards-agency"],
    ),
    (
        "driving standards agency (dsa)",
        &["driver-and-vehicle-standards-agency"],
    ),
    ("department for transport", &["department-for-transport"]),
    (
        "department for transport (dft)",
        &["department-for-transport"],
    ),
    ("uk department for transport", &["department-for-transport"]),
    (
        "department for transport and transport for london",
        &["department-for-transport"],
    ),
    (
        "department for digital, culture, media & sport",
        &["department-for-culture-media-and-sport"],
    ),
    (
        "department for culture, media & sport",
        &["department-for-culture-media-and-sport"],
    ),
    (
        "department for digital, culture, media and sport",
        &["department-for-culture-media-and-sport"],
    ),
    (
        "culture, media, and sport",
        &["department-for-culture-media-and-sport"],
    ),
    (
        "department for digital, culture media & sport; arts council england",
        &["department-for-culture-media-and-sport"],
    ),
    (
        "building digital uk | department for digital, culture, media & sport",
        &["department-for-culture-media-and-sport"],
    ),
    (
        "department for culture, media and sport and department for digital, culture, media & sport",
        &["department-for-culture-media-and-sport"],
    ),
    (
        "department for digital, culture, media & sport (dcms); and the ministry of housing, communities and local government (mchlg).",
        &[
            "department-for-culture-media-and-sport",
            "ministry-of-housing-communities-and-local-government",
        ],
    ),
    (
        "department for digital, culture, media & sport; office for artificial intelligence",
        &[
            "office-for-artificial-intelligence",
            "department-for-culture-media-and-sport",
        ],
    ),
    (
        "department for science, innovation & technology",
        &["department-for-science-innovation-and-technology"],
    ),
    (
        "department for science, innovation and technology",
        &["department-for-science-innovation-and-technology"],
    ),
    (
        "department for science, innovation and technology; office for artificial intelligence; department for digital, culture, media & sport; department for business, energy & industrial strategy",
        &[
            "office-for-artificial-intelligence",
            "department-for-science-innovation-and-technology",
            "department-for-culture-media-and-sport",
            "department-for-business-energy-and-industrial-strategy",
        ],
    ),
    (
        "department for science, innovation and technology; department for digital, culture, media & sport",
        &[
            "department-for-science-innovation-and-technology",
            "department-for-culture-media-and-sport",
        ],
    ),
    (
        "innovate uk | closed organisation: department for international development | engineering and physical sciences research council | biotechnology and biological sciences research council | department for business, energy & industrial strategy | uk research",
        &[
            "department-for-science-innovation-and-technology",
            "department-for-business-energy-and-industrial-strategy",
        ],
    ),
    ("building digital uk", &["building-digital-uk"]),
    ("cabinet office", &["cabinet-office"]),
    (
        "cabinet office and crown commercial service",
        &["cabinet-office"],
    ),
    (
        "cabinet office | national leadership centre | leadership college for government",
        &["cabinet-office"],
    ),
    ("evaluation task force", &["evaluation-task-force"]),
    ("home office", &["home-office"]),
    (
        "office of manpower economics | home office",
        &["home-office"],
    ),
    (
        "senior salaries review body | office of manpower economics | home office",
        &["home-office"],
    ),
    ("uk commission for employment and skills", &[]),
    ("uk commission for employment and skills (ukces)", &[]),
    (
        "closed organisation: uk commission for employment and skills",
        &[],
    ),
    ("department for education", &["department-for-education"]),
    (
        "department for education (dfe)",
        &["department-for-education"],
    ),
    (
        "department for education & national college for teaching and leadership",
        &["department-for-education"],
    ),
    (
        "department for levelling up, housing and communities",
        &["department-for-levelling-up-housing-and-communities"],
    ),
    (
        "department for levelling up, housing & communities",
        &["department-for-levelling-up-housing-and-communities"],
    ),
    (
        "department for levelling up, housing and communities | cabinet office",
        &[
            "department-for-levelling-up-housing-and-communities",
            "cabinet-office",
        ],
    ),
    (
        "closed organisation: ministry of housing, communities & local government | department for levelling up, housing and communities",
        &["department-for-levelling-up-housing-and-communities"],
    ),
    (
        "closed organisation: ministry of housing, communities & local government",
        &[],
    ),
    (
        "department for work and pensions",
        &["department-for-work-pensions"],
    ),
    (
        "department for work and pensions.",
        &["department-for-work-pensions"],
    ),
    (
        "department of work and pensions",
        &["department-for-work-pensions"],
    ),
    (
        "department for work and pensions | government social research profession",
        &["department-for-work-pensions"],
    ),
    (
        "department for work and pensions | department of health and social care",
        &[
            "department-for-work-pensions",
            "department-of-health-and-social-care",
        ],
    ),
    (
        "foreign, commonwealth & development office",
        &["foreign-commonwealth-development-office"],
    ),
    (
        "foreign, commonwealth & development office, dfid, mod",
        &["foreign-commonwealth-development-office"],
    ),
    (
        "closed organisation: foreign & commonwealth office | closed organisation: department for international development | ministry of defence",
        &["foreign-commonwealth-development-office", "ministry-of-defence"],
    ),
    (
        "department for business, energy & industrial strategy",
        &["department-for-business-energy-and-industrial-strategy"],
    ),
    (
        "department of business energy and industrial strategy (beis)",
        &["department-for-business-energy-and-industrial-strategy"],
    ),
    (
        "department for business, energy & industrial strategy; and international climate finance (icf)",
        &["department-for-business-energy-and-industrial-strategy"],
    ),
    (
        "department for energy security & net zero",
        &["department-for-energy-security-and-net-zero"],
    ),
    (
        "department for energy security and net zero",
        &["department-for-energy-security-and-net-zero"],
    ),
    (
        "department for energy security and net zero and department for business energy and industrial strategy",
        &[
            "department-for-energy-security-and-net-zero",
            "department-for-business-energy-and-industrial-strategy",
        ],
    ),
    (
        "department for energy security and net zero and department for business, energy & industrial strategy",
        &[
            "department-for-energy-security-and-net-zero",
            "department-for-business-energy-and-industrial-strategy",
        ],
    ),
    ("department of energy and climate change", &[]),
    ("department of energy & climate change", &[]),
    (
        "closed organisation: department of energy & climate change",
        &[],
    ),
    ("department of energy and climate change (decc) and bis", &[]),
    ("ministry of housing, communities and local government", &[]),
    (
        "ministry for housing, communities and local government",
        &["ministry-of-housing-communities-and-local-government"],
    ),
    (
        "ministry for housing, communities and local government (mhclg)",
        &["ministry-of-housing-communities-and-local-government"],
    ),
    ("hm revenue & customs", &["hm-revenue-customs"]),
    ("hm revenue and customs", &["hm-revenue-customs"]),
    (": hm revenue and customers", &["hm-revenue-customs"]),
    ("hmrc", &["hm-revenue-customs"]),
    ("hm revenue & customs | hm treasury", &["hm-revenue-customs"]),
    ("hm treasury (hmt)", &[]),
    (
        "closed organisation: department for international development",
        &[],
    ),
    (
        "closed organisation: department for international development (bangladesh)",
        &[],
    ),
    ("department for international development", &[]),
    ("environment agency", &["environment-agency"]),
    ("uk health security agency", &[]),
    ("other (uk health security agency)", &[]),
    (
        "department for environment, food & rural affairs",
        &["department-for-environment-food-rural-affairs"],
    ),
    (
        "department for environment food & rural affairs",
        &["department-for-environment-food-rural-affairs"],
    ),
    (
        "department for environment, food and rural affairs",
        &["department-for-environment-food-rural-affairs"],
    ),
    (
        "the department for environment, food and rural affairs",
        &["department-for-environment-food-rural-affairs"],
    ),
    (
        "department for environment, food and rural affairs (defra)",
        &["department-for-environment-food-rural-affairs"],
    ),
    (
        "department of agriculture, environment and rural affairs",
        &["department-for-environment-food-rural-affairs"],
    ),
    (
        "ministry of agriculture fisheries and food welsh office, agriculture department",
        &["department-for-environment-food-rural-affairs"],
    ),
    (
        "ministry of agriculture, fisheries & food",
        &["department-for-environment-food-rural-affairs"],
    ),
    (
        "department for environment, food & rural affairs | home office",
        &["department-for-environment-food-rural-affairs", "home-office"],
    ),
    ("department for business innovation & skills", &[]),
    ("department for business, innovation and skills", &[]),
    ("department for business, innovation and skills (bis)", &[]),
    (
        "closed organisation: department for business, innovation & skills",
        &[],
    ),
    (
        "department for business, innovation & skills and higher education funding council for england",
        &[],
    ),
    (
        "closed organisation: national college for teaching and leadership",
        &[],
    ),
    ("ofsted", &[]),
    ("ofqual", &[]),
    ("other (please state) parliament", &[]),
    ("ministry of justice", &["ministry-of-justice"]),
    ("ministry of justice (moj)", &["ministry-of-justice"]),
    (
        "ministry of justice; hm courts & tribunals service",
        &["ministry-of-justice"],
    ),
    (
        "ministry of justice and national offender management service",
        &["ministry-of-justice"],
    ),
    (
        "ministry of justice and hm prison and probability",
        &["ministry-of-justice"],
    ),
    (
        "ministry of justice | hm prison and probation service",
        &["ministry-of-justice", "hm-prison-and-probation-service"],
    ),
    (
        "ministry of justice and hm prison and probation service",
        &["ministry-of-justice", "hm-prison-and-probation-service"],
    ),
    (
        "hm courts & tribunals service",
        &["hm-courts-and-tribunals-service"],
    ),
    ("hm government", &[]),
    ("dcms", &[]),
    ("senior salaries review body", &[]),
    (
        "hm prison and probation service",
        &["hm-prison-and-probation-service"],
    ),
    (
        "hm prison & probation service",
        &["hm-prison-and-probation-service"],
    ),
    ("animal and plant health agency", &[]),
    ("highways england", &["highways-england"]),
    (
        "closed organisation: highways england",
        &["highways-england"],
    ),
    ("highways agency", &["highways-agency"]),
    ("closed organisation: highways agency", &["highways-agency"]),
    ("office for zero emission vehicles", &[]),
    ("department for communities and local government", &[]),
    (
        "other (please state) department for communities and local government",
        &[],
    ),
    ("closed organisation: public health england", &[]),
    ("public health england", &[]),
    ("other (public health england)", &[]),
    ("government equalities office", &[]),
    ("department of health and social care", &[]),
    (
        "department of health",
        &["department-of-health-and-social-care"],
    ),
    (
        "department of health policy research",
        &["department-of-health-and-social-care"],
    ),
    (
        "department of health policy research programme",
        &["department-of-health-and-social-care"],
    ),
    (
        "department of health and social care, department for education and nhs england and improvement",
        &["department-of-health-and-social-care", "department-for-education"],
    ),
    ("scientific advisory group for emergencies", &[]),
    ("uk government", &[]),
    ("oxfordshire safeguarding children board (oscb)", &[]),
    ("competition and markets authority", &[]),
    ("other (department for international development)", &[]),
    ("other (department of health)", &[]),
    ("government social research profession", &[]),
    ("government social research", &[]),
    ("other - government social research", &[]),
    ("information not easily found within the report", &[]),
    ("land use policy group", &[]),
    ("natural england", &["natural-england"]),
    ("the british business bank", &[]),
    ("british business bank", &[]),
    ("european parliament´s directorate for budgetary affairs", &[]),
    ("innovate uk", &[]),
    ("uk research and innovation", &[]),
    ("uk space agency", &["uk-space-agency"]),
    ("other (national institute of health research)", &[]),
    (
        "national health services; national institute of health and care excellence",
        &[],
    ),
    ("national health services", &[]),
    ("nihr", &[]),
    ("nhs", &[]),
    ("obesity policy research unit", &[]),
    (
        "national institute for health research policy research programme",
        &[],
    ),
    ("national institute for health and care research", &[]),
    ("national institute for health research", &[]),
    (
        "nihr policy research unit in health and social care systems and commissioning",
        &[],
    ),
    ("national institute of health research", &[]),
    ("national institute for health research (nihr)", &[]),
    ("king's college london", &[]),
    ("the institute for fiscal studies", &[]),
    ("public health agency, northern ireland", &[]),
    ("office for health improvement and disparities", &[]),
    ("uk trade & investment", &[]),
    ("nuclear waste services", &[]),
    ("marine management organisation", &[]),
    ("regulator of social housing", &[]),
    ("office for budget responsibility", &[]),
    ("youth justice board for england and wales", &[]),
    ("department for business & trade", &[]),
    ("qualifications and curriculum authority", &[]),
    ("aqa", &[]),
    ("standards and testing agency", &[]),
    ("the charity commission", &[]),
    ("charity commission for england and wales", &[]),
    ("social mobility & child poverty commission", &[]),
    ("committee on fuel poverty", &[]),
    (
        "department for international trade",
        &["department-for-international-trade"],
    ),
    ("ministry of defence", &["ministry-of-defence"]),
    ("regulatory policy committee", &[]),
    ("rural development programme for england network", &[]),
    (
        "office of the secretary of state for wales and welsh government",
        &[],
    ),
    ("disability unit", &[]),
    ("low pay commission", &[]),
    (
        "commission on race and ethnic disparities",
        &["commission-on-race-and-ethnic-disparities"],
    ),
    (
        "the maritime and coastguard agency",
        &["maritime-and-coastguard-agency"],
    ),
    ("homes england", &["homes-england"]),
    ("uk government's joint air quality unit", &[]),
    ("the scottish government", &["the-scottish-government"]),
    ("scottish government", &["the-scottish-government"]),
    (
        "scottish government social research",
        &["the-scottish-government"],
    ),
    (
        "scottish government crime and justice",
        &["the-scottish-government"],
    ),
    (
        "agriculture and rural economy directorate (as part of business, industry and innovation, education, farming and rural)",
        &[],
    ),
    ("scotland government", &["the-scottish-government"]),
    ("other (scottish government)", &["the-scottish-government"]),
    ("other (scotland)", &["the-scottish-government"]),
    ("other - scottish government", &["the-scottish-government"]),
    ("other - the scottish government", &["the-scottish-government"]),
    (
        "scottish government - environment and forestry directorate",
        &["the-scottish-government"],
    ),
    (
        "scottish government - agriculture and rural economy directorate",
        &["the-scottish-government"],
    ),
    (
        "scottish government - chief economist directorate",
        &["the-scottish-government"],
    ),
    (
        "scottish government - director-general education and justice",
        &["the-scottish-government"],
    ),
    (
        "scottish government - communities and third sector, equality and rights",
        &["the-scottish-government"],
    ),
    (
        "scottish government - learning directorate",
        &["the-scottish-government"],
    ),
    (
        "scottish government - communities and third sector",
        &["the-scottish-government"],
    ),
    (
        "scottish government - health workforce directorate",
        &["the-scottish-government"],
    ),
    (
        "scottish government - children and families directorate",
        &["the-scottish-government"],
    ),
    (
        "scottish government - children and families, communities and third sector",
        &["the-scottish-government"],
    ),
    (
        "scottish government - building, planning and design, communities and third sector",
        &["the-scottish-government"],
    ),
    (
        "scottish government - director-general health and social care",
        &["the-scottish-government"],
    ),
    (
        "scottish government - population health directorate",
        &["the-scottish-government"],
    ),
    ("scottish government - housing", &["the-scottish-government"]),
    (
        "scottish government - children and families, law and order",
        &["the-scottish-government"],
    ),
    (
        "scottish government - marine scotland directorate",
        &["the-scottish-government"],
    ),
    (
        "scottish government - health and social care",
        &["the-scottish-government"],
    ),
    (
        "scottish government - marine and fisheries",
        &["the-scottish-government"],
    ),
    (
        "scottish government - director-geberak education and justice",
        &["the-scottish-government"],
    ),
    (
        "scottish government - cabinet secretary for education and skills",
        &["the-scottish-government"],
    ),
    (
        "scottish government - director general communities",
        &["the-scottish-government"],
    ),
    (
        "scottish government - cabinet secretary for nhs recovery , health and social care",
        &["the-scottish-government"],
    ),
    (
        "scottish government - director-general net zero",
        &["the-scottish-government"],
    ),
    (
        "scottish government - energy and climate change directorate; local government and housing directorate",
        &["the-scottish-government"],
    ),
    (
        "scottish government - director-general communities",
        &["the-scottish-government"],
    ),
    (
        "scottish government - energy and climate change directorate; economic development directorate; environment and forestry directorate; equality, inclusion and human rights directorate",
        &["the-scottish-government"],
    ),
    (
        "scottish government - economy, education, work and skills",
        &["the-scottish-government"],
    ),
    (
        "scottish government - communications and ministerial support directorate",
        &["the-scottish-government"],
    ),
    (
        "scottish government - tackling child poverty and social justice directorate",
        &["the-scottish-government"],
    ),
    (
        "scottish government - mental health directorate; population health directorate",
        &["the-scottish-government"],
    ),
    (
        "scottish government - early learning and childcare directorate; childcare and families directorate",
        &["the-scottish-government"],
    ),
    (
        "scottish government - tackling child poverty and social justice directorate; equality, inclusion and human rights directorate",
        &["the-scottish-government"],
    ),
    (
        "scottish government - social security directorate",
        &["the-scottish-government"],
    ),
    ("department of agricultural and food economics", &[]),
    ("department of agriculture and rural development (dard)", &[]),
    ("uk centre for ecology & hydrology (ukceh)", &[]),
    (
        "other (please state) partnership for responsive policy analysis and research",
        &[],
    ),
    ("other (please state) nutrients", &[]),
    ("other (please state) bmc public health", &[]),
    (
        "office of national statistics",
        &["office-for-national-statistics"],
    ),
    (
        "office for national statistics",
        &["office-for-national-statistics"],
    ),
    ("other (please state) karandaaz pakistan", &[]),
    ("other (please state) international finance corporation", &[]),
    ("erdf", &[]),
    ("intellectual property office", &[]),
    (
        "who collaborating centre for infectious disease modelling mrc centre for global infectious disease analysis",
        &[],
    ),
    (
        "who collaborating centre for infectious disease modelling mrc centre for global infectious disease analysis jameel institute for disease and emergency analytics",
        &[],
    ),
    (
        "this work was supported by centre funding from the uk medical research council under a concordat with the uk department for international development, the nihr health protection research unit in modelling methodology and the abdul latif jameel foundation.",
        &[],
    ),
    ("office for life sciences", &[]),
    ("minister of state for health", &[]),
    ("the trading standards institute", &[]),
    ("department for business", &[]),
    ("nhs scotland directorate", &[]),
    ("population health directorate", &[]),
    (
        "children and families, communities and third sector, equality and rights",
        &[],
    ),
    ("learning directorate", &[]),
    ("building, planning and design", &[]),
    ("children and families, health and social care", &[]),
    ("health and social care", &[]),
    ("director-general education and justice", &[]),
    ("cabinet secretary for education and skills", &[]),
    ("hm land registry (hmlr)", &["land-registry"]),
    ("met office", &[]),
    ("geospatial commission", &[]),
    ("other - the ministry of agriculture fisheries and food", &[]),
    (
        "other - the department of agriculture and rural development (dard)",
        &[],
    ),
    ("other - world bank", &[]),
    ("other - the world bank", &[]),
    ("esf evaluation", &[]),
    ("other - un women", &[]),
    ("other - unicef", &[]),
    ("overseas development administration", &[]),
    ("world bank", &[]),
    (
        "the joint evaluation of general budget support (gbs) was commissioned by a consortium of donor agencies and 7 partner governments* under the auspices of the dac network on development evaluation.",
        &[],
    ),
    ("donors in collaboration with partner governments", &[]),
    (
        "management group for the joint evaluation of general budget support",
        &[],
    ),
    ("united nations", &[]),
    ("cgap council of governors", &[]),
    ("department for international evaluation", &[]),
    ("other - uk department for international development", &[]),
    ("other - migration advisory committee", &[]),
    ("uk office of manpower economics (ome)", &[]),
    ("the insolvency service", &[]),
    ("valuation office agency", &[]),
    (
        "centre for environment fisheries and aquaculture science",
        &["centre-for-environment-fisheries-and-aquaculture-science"],
    ),
    ("centre for data ethics and innovation", &[]),
];
