//! # Document Prompt Templates
//!
//! The hardcoded templates for every document kind. A user prompt is assembled from
//! a persona, a numbered outline, the shared formatting rules and a quoted payload.
//!
//! Placeholders: `{language}` in the formatting rules, `{client_text}` in the text
//! payloads, `{location}`, `{latitude}` and `{longitude}` in the coordinate payloads.

// --- Shared Rules ---

pub const HTML_FORMATTING_RULES: &str = r#"- Generate **valid HTML** with headings, lists, and tables.
- DO NOT include triple backticks or escape characters like \n.
- Write all prose in {language}.
- Respond ONLY with clean HTML, ready to render in browser."#;

// --- Project Proposal ---

pub const PROPOSAL_SYSTEM_PROMPT: &str = "You are an expert HTML proposal generator.";

pub const PROPOSAL_PERSONA: &str = "You are a professional project proposal writer.";

pub const PROPOSAL_TASK: &str = r#"Task:
- Read the client proposal below.
- Break it into sections as listed:
  0. Project Overview
  1. We aim to
  2. Detailed Scope of Work
  3. Core Features
  4. Advanced Features
  5. Monetization System
  6. Admin & Backend Features
  7. Design & Branding
  8. Tech Stack table format
  9. Price & Timeline Breakdown table format
  10. Requirements from Client
  11. Deliverables
  12. Support & Maintenance
  13. Testing and Quality
  14. Conclusion"#;

pub const PROPOSAL_PAYLOAD: &str = r#"Proposal Text:
"""{client_text}""""#;

// --- Population Report ---

pub const POPULATION_REPORT_SYSTEM_PROMPT: &str =
    "You are an expert demographic analyst who writes population reports in HTML.";

pub const POPULATION_REPORT_PERSONA: &str =
    "You are a professional demographer writing an official population report.";

pub const POPULATION_REPORT_TASK: &str = r#"Task:
- Read the area data below.
- Break the report into sections as listed:
  1. Area Overview
  2. Total Population
  3. Gender Distribution (with percentages)
  4. Age Group Breakdown
  5. Population Density (population divided by area, per km²)
  6. Growth Rate
  7. Households & Family Size
  8. Literacy & Education
  9. Employment & Livelihood
  10. Key Observations
  11. Conclusion
- Where the numbers in the data allow it, compute percentages, population density (total population ÷ area in km²) and the growth rate, show the calculation, and summarise them in a "Computed Metrics" table.
- If a figure cannot be derived from the data, state that it is not available instead of inventing it."#;

pub const POPULATION_REPORT_PAYLOAD: &str = r#"Area Data:
"""{client_text}""""#;

// --- Population Report From Coordinates ---

pub const COORDINATE_POPULATION_REPORT_TASK: &str = r#"Task:
- Write a population report for the location below, using the best publicly known figures for it.
- Break the report into sections as listed:
  1. Area Overview
  2. Total Population
  3. Gender Distribution (with percentages)
  4. Age Group Breakdown
  5. Population Density (population divided by area, per km²)
  6. Growth Rate
  7. Households & Family Size
  8. Literacy & Education
  9. Employment & Livelihood
  10. Key Observations
  11. Conclusion
- Compute percentages, population density and the growth rate from the figures you use and summarise them in a "Computed Metrics" table.
- Mark every figure as an estimate and name the year it refers to."#;

pub const COORDINATE_PAYLOAD: &str = r#"Location:
"""{location}"""
Coordinates: latitude {latitude}, longitude {longitude}"#;

// --- Tourist Guide ---

pub const TOURIST_GUIDE_SYSTEM_PROMPT: &str =
    "You are an expert travel writer who produces engaging travel guides in HTML.";

pub const TOURIST_GUIDE_PERSONA: &str =
    "You are a professional travel guide writer with deep local knowledge.";

pub const TOURIST_GUIDE_TASK: &str = r#"Task:
- Write a travel guide for the location below.
- Break it into sections as listed, translating the headings into the language of the guide:
  1. Introduction
  2. History & Culture
  3. Top Attractions
  4. Local Food
  5. Best Time to Visit
  6. How to Get There
  7. Where to Stay
  8. Travel Tips
  9. Safety & Etiquette
  10. Conclusion
- If the location is unknown, describe the general region around the coordinates instead."#;
